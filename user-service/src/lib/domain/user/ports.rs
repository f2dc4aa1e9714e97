use async_trait::async_trait;

use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user. The password is hashed before it reaches the
    /// repository.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - email is already registered
    /// * `Password` - hashing failed
    /// * `DatabaseError` - store operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update an existing user on behalf of `actor`.
    ///
    /// Policy: admins may update anyone; other callers only themselves, and
    /// never the `role` field. Payload validation runs before the policy
    /// checks, which run before the mutation.
    ///
    /// # Errors
    /// * `NoFieldsToUpdate` - empty payload
    /// * `Forbidden` - policy violation
    /// * `NotFound` - user does not exist
    /// * `EmailAlreadyExists` - new email is already registered
    /// * `DatabaseError` - store operation failed
    async fn update_user(
        &self,
        actor: &AuthenticatedIdentity,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete an existing user on behalf of `actor`, returning the
    /// pre-deletion record for confirmation.
    ///
    /// Policy: admin only, and never the actor's own account.
    ///
    /// # Errors
    /// * `SelfDeletion` - actor targets their own id (any role)
    /// * `Forbidden` - actor is not an admin
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn delete_user(
        &self,
        actor: &AuthenticatedIdentity,
        id: &UserId,
    ) -> Result<User, UserError>;

    /// Prove identity by email and password.
    ///
    /// The two failure modes are distinct kinds so callers can log them
    /// apart, even when the transport collapses both to 401.
    ///
    /// # Errors
    /// * `NotFound` - no user with this email
    /// * `InvalidCredentials` - password does not match
    /// * `DatabaseError` - store operation failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Uniqueness and existence are enforced at the write path: creating with a
/// taken email fails with `EmailAlreadyExists` from the store's own
/// constraint, and update/delete of a missing row fail with `NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, letting the store assign id and timestamps.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - unique constraint violation
    /// * `DatabaseError` - store operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user by identifier, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by normalized email address, `None` if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - store operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Write back an updated user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `EmailAlreadyExists` - new email is already registered
    /// * `DatabaseError` - store operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove a user from storage.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `DatabaseError` - store operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}

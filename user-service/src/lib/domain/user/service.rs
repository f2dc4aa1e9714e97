use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns password hashing so plaintext passwords never reach the repository,
/// on create or on update. Authorization policy is evaluated here, after
/// payload validation and before any mutation, with the caller identity
/// passed in explicitly.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn check_update_policy(
        actor: &AuthenticatedIdentity,
        id: &UserId,
        command: &UpdateUserCommand,
    ) -> Result<(), UserError> {
        // Payload validation precedes authorization
        if command.is_empty() {
            return Err(UserError::NoFieldsToUpdate);
        }

        if actor.role != Role::Admin && actor.id != *id {
            return Err(UserError::Forbidden(
                "Only admins can update other users".to_string(),
            ));
        }

        // Role changes are admin-only, even on the actor's own record
        if command.role.is_some() && actor.role != Role::Admin {
            return Err(UserError::Forbidden(
                "Only admins can change user roles".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
                role: command.role,
            })
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User created");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        actor: &AuthenticatedIdentity,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        Self::check_update_policy(actor, id, &command)?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_role) = command.role {
            user.role = new_role;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        user.updated_at = Utc::now();

        let updated_user = self.repository.update(user).await?;

        tracing::info!(user_id = %updated_user.id, actor_id = %actor.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(
        &self,
        actor: &AuthenticatedIdentity,
        id: &UserId,
    ) -> Result<User, UserError> {
        // Self-deletion is a validation failure regardless of role
        if actor.id == *id {
            return Err(UserError::SelfDeletion);
        }

        if actor.role != Role::Admin {
            return Err(UserError::Forbidden(
                "Only admins can delete users".to_string(),
            ));
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, actor_id = %actor.id, "User deleted");

        Ok(existing)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.to_string()))?;

        let is_valid = self
            .password_hasher
            .verify(password, &user.password_hash)?;

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, email = %user.email, "User authenticated");

        Ok(user)
    }
}

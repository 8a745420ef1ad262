use std::sync::Arc;

use async_trait::async_trait;

use crate::admin::errors::AdminError;
use crate::admin::ports::AdminRepository;
use crate::admin::ports::AdminServicePort;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::CreateAdminCommand;
use crate::domain::admin::models::NewAdmin;
use crate::domain::admin::models::Password;
use crate::domain::admin::models::UpdateAdminCommand;
use crate::domain::email::EmailAddress;

/// Domain service implementation for admin operations.
///
/// Owns password hashing so that no write path can persist a plaintext secret.
pub struct AdminService<AR>
where
    AR: AdminRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AdminService<AR>
where
    AR: AdminRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn hash(&self, password: &Password) -> Result<String, AdminError> {
        self.password_hasher
            .hash(password.expose())
            .map_err(|e| AdminError::PasswordHashing(e.to_string()))
    }
}

#[async_trait]
impl<AR> AdminServicePort for AdminService<AR>
where
    AR: AdminRepository,
{
    async fn create_admin(&self, command: CreateAdminCommand) -> Result<Admin, AdminError> {
        let password_hash = self.hash(&command.password)?;

        self.repository
            .create(NewAdmin {
                email: command.email,
                password_hash,
            })
            .await
    }

    async fn get_admin(&self, email: &EmailAddress) -> Result<Admin, AdminError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AdminError::NotFound(email.to_string()))
    }

    async fn update_admin(
        &self,
        email: &EmailAddress,
        command: UpdateAdminCommand,
    ) -> Result<Admin, AdminError> {
        let mut admin = self.get_admin(email).await?;

        if let Some(new_password) = command.password {
            admin.password_hash = self.hash(&new_password)?;
        }

        self.repository.update(admin).await
    }

    async fn delete_admin(&self, email: &EmailAddress) -> Result<(), AdminError> {
        self.repository.delete_by_email(email).await
    }
}

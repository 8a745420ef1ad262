use async_trait::async_trait;

use crate::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::CreateAdminCommand;
use crate::domain::admin::models::NewAdmin;
use crate::domain::admin::models::UpdateAdminCommand;
use crate::domain::email::EmailAddress;

/// Port for admin domain service operations.
#[async_trait]
pub trait AdminServicePort: Send + Sync + 'static {
    /// Create a new admin; the password is hashed before it reaches the store.
    ///
    /// # Errors
    /// * `PasswordHashing` - Hash generation failed
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_admin(&self, command: CreateAdminCommand) -> Result<Admin, AdminError>;

    /// Retrieve admin by email.
    ///
    /// # Errors
    /// * `NotFound` - No admin with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_admin(&self, email: &EmailAddress) -> Result<Admin, AdminError>;

    /// Update an existing admin located by email.
    ///
    /// # Errors
    /// * `NotFound` - No admin with this email (nothing is written)
    /// * `PasswordHashing` - Hash generation failed
    /// * `DatabaseError` - Database operation failed
    async fn update_admin(
        &self,
        email: &EmailAddress,
        command: UpdateAdminCommand,
    ) -> Result<Admin, AdminError>;

    /// Delete admin by email.
    ///
    /// # Errors
    /// * `NotFound` - No admin with this email
    /// * `DatabaseError` - Database operation failed
    async fn delete_admin(&self, email: &EmailAddress) -> Result<(), AdminError>;
}

/// Persistence operations for admins.
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    /// Insert a new row and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminError>;

    /// Administrative lookup by email (None if absent).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, AdminError>;

    /// Persist `admin.password_hash` for the row identified by `admin.id`.
    ///
    /// # Errors
    /// * `NotFound` - No row with this identifier
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, admin: Admin) -> Result<Admin, AdminError>;

    /// Remove the row with this email.
    ///
    /// # Errors
    /// * `NotFound` - No row with this email
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_email(&self, email: &EmailAddress) -> Result<(), AdminError>;

    /// Release underlying resources (connection pool).
    async fn close(&self);
}

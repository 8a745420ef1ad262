use async_trait::async_trait;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::employee::errors::EmployeeError;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;

    /// Replace every mutable field of an existing employee.
    ///
    /// The record keeps `id`; whatever identifier the caller decoded elsewhere is ignored.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `EmailAlreadyExists` - New email belongs to another employee
    /// * `DatabaseError` - Database operation failed
    async fn replace_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError>;

    /// Delete existing employee.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
}

/// Persistence operations for employees.
///
/// Implementations assign identifiers and timestamps, and leave the stored
/// row untouched when an operation fails.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Insert a new row and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by identifier (None if absent).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError>;

    /// Overwrite the row identified by `id`.
    ///
    /// # Errors
    /// * `NotFound` - No row with this identifier
    /// * `EmailAlreadyExists` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError>;

    /// Remove the row identified by `id`.
    ///
    /// # Errors
    /// * `NotFound` - No row with this identifier
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError>;

    /// Release underlying resources (connection pool).
    async fn close(&self);
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::employee::errors::EmployeeError;
use crate::employee::ports::EmployeeRepository;
use crate::employee::ports::EmployeeServicePort;

/// Domain service implementation for employee operations.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        self.repository.create(details).await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(*id))
    }

    async fn replace_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError> {
        self.repository.update(id, details).await
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.repository.delete(id).await
    }
}

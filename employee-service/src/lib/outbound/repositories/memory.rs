//! In-memory store.
//!
//! Implements both repositories over lock-guarded maps. Used by the test suite
//! and for local runs with `database.url = "memory://"`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::admin::errors::AdminError;
use crate::domain::admin::models::Admin;
use crate::domain::admin::models::AdminId;
use crate::domain::admin::models::NewAdmin;
use crate::domain::admin::ports::AdminRepository;
use crate::domain::email::EmailAddress;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeDetails;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::employee::errors::EmployeeError;

#[derive(Default)]
struct Tables {
    employees: BTreeMap<EmployeeId, Employee>,
    admins: BTreeMap<AdminId, Admin>,
    last_employee_id: i64,
    last_admin_id: i64,
}

impl Tables {
    fn employee_email_taken(&self, email: &EmailAddress, except: Option<EmployeeId>) -> bool {
        self.employees
            .values()
            .any(|e| &e.email == email && Some(e.id) != except)
    }
}

/// Thread-safe in-memory implementation of the storage gateway.
///
/// Identifiers start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        let mut tables = self.tables.write().await;

        if tables.employee_email_taken(&details.email, None) {
            return Err(EmployeeError::EmailAlreadyExists(details.email.to_string()));
        }

        tables.last_employee_id += 1;
        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId(tables.last_employee_id),
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            address: details.address,
            created_at: now,
            updated_at: now,
        };
        tables.employees.insert(employee.id, employee.clone());

        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.tables.read().await.employees.get(id).cloned())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError> {
        let mut tables = self.tables.write().await;

        if !tables.employees.contains_key(id) {
            return Err(EmployeeError::NotFound(*id));
        }
        if tables.employee_email_taken(&details.email, Some(*id)) {
            return Err(EmployeeError::EmailAlreadyExists(details.email.to_string()));
        }

        let employee = tables
            .employees
            .get_mut(id)
            .ok_or(EmployeeError::NotFound(*id))?;
        employee.first_name = details.first_name;
        employee.last_name = details.last_name;
        employee.email = details.email;
        employee.address = details.address;
        employee.updated_at = Utc::now();

        Ok(employee.clone())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        self.tables
            .write()
            .await
            .employees
            .remove(id)
            .map(|_| ())
            .ok_or(EmployeeError::NotFound(*id))
    }

    async fn close(&self) {
        tracing::debug!(store = "memory", "Employee store closed");
    }
}

#[async_trait]
impl AdminRepository for InMemoryStore {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminError> {
        let mut tables = self.tables.write().await;

        if tables.admins.values().any(|a| a.email == admin.email) {
            return Err(AdminError::EmailAlreadyExists(admin.email.to_string()));
        }

        tables.last_admin_id += 1;
        let now = Utc::now();
        let created = Admin {
            id: AdminId(tables.last_admin_id),
            email: admin.email,
            password_hash: admin.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.admins.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, AdminError> {
        Ok(self
            .tables
            .read()
            .await
            .admins
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn update(&self, admin: Admin) -> Result<Admin, AdminError> {
        let mut tables = self.tables.write().await;

        let stored = tables
            .admins
            .get_mut(&admin.id)
            .ok_or_else(|| AdminError::NotFound(admin.email.to_string()))?;
        stored.password_hash = admin.password_hash;
        stored.updated_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete_by_email(&self, email: &EmailAddress) -> Result<(), AdminError> {
        let mut tables = self.tables.write().await;

        let id = tables
            .admins
            .values()
            .find(|a| &a.email == email)
            .map(|a| a.id)
            .ok_or_else(|| AdminError::NotFound(email.to_string()))?;
        tables.admins.remove(&id);

        Ok(())
    }

    async fn close(&self) {
        tracing::debug!(store = "memory", "Admin store closed");
    }
}

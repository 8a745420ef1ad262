use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

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

const EMPLOYEES_EMAIL_KEY: &str = "employees_email_key";
const ADMINS_EMAIL_KEY: &str = "admins_email_key";

/// PostgreSQL-backed store for both employees and admins.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_employee(row: PgRow) -> Result<Employee, EmployeeError> {
        let email = stored_email(row.get("email"))
            .map_err(EmployeeError::DatabaseError)?;

        Ok(Employee {
            id: EmployeeId(row.get("id")),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email,
            address: row.get("address"),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        })
    }

    fn row_to_admin(row: PgRow) -> Result<Admin, AdminError> {
        let email = stored_email(row.get("email")).map_err(AdminError::DatabaseError)?;

        Ok(Admin {
            id: AdminId(row.get("id")),
            email,
            password_hash: row.get("password_hash"),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        })
    }
}

/// A stored address that no longer parses is a data fault, not a client error.
fn stored_email(raw: String) -> Result<EmailAddress, String> {
    EmailAddress::new(raw.clone())
        .map_err(|e| format!("stored email {:?} is invalid: {}", raw, e))
}

fn is_unique_violation(error: &sqlx::Error, constraint: &str) -> bool {
    error
        .as_database_error()
        .map(|db_err| db_err.is_unique_violation() && db_err.constraint() == Some(constraint))
        .unwrap_or(false)
}

#[async_trait]
impl EmployeeRepository for PostgresStore {
    async fn create(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError> {
        let row = sqlx::query(
            r#"
            INSERT INTO employees (first_name, last_name, email, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, address, created_at, updated_at
            "#,
        )
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(details.email.as_str())
        .bind(details.address.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, EMPLOYEES_EMAIL_KEY) {
                return EmployeeError::EmailAlreadyExists(details.email.to_string());
            }
            EmployeeError::DatabaseError(e.to_string())
        })?;

        Self::row_to_employee(row)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, address, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_employee).transpose()
    }

    async fn update(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, EmployeeError> {
        let row = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, email = $4, address = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, address, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(&details.first_name)
        .bind(&details.last_name)
        .bind(details.email.as_str())
        .bind(details.address.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, EMPLOYEES_EMAIL_KEY) {
                return EmployeeError::EmailAlreadyExists(details.email.to_string());
            }
            EmployeeError::DatabaseError(e.to_string())
        })?;

        match row {
            Some(r) => Self::row_to_employee(r),
            None => Err(EmployeeError::NotFound(*id)),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EmployeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(*id));
        }

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl AdminRepository for PostgresStore {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, AdminError> {
        let row = sqlx::query(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(admin.email.as_str())
        .bind(&admin.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, ADMINS_EMAIL_KEY) {
                return AdminError::EmailAlreadyExists(admin.email.to_string());
            }
            AdminError::DatabaseError(e.to_string())
        })?;

        Self::row_to_admin(row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>, AdminError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_admin).transpose()
    }

    async fn update(&self, admin: Admin) -> Result<Admin, AdminError> {
        let row = sqlx::query(
            r#"
            UPDATE admins
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(admin.id.0)
        .bind(&admin.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Self::row_to_admin(r),
            None => Err(AdminError::NotFound(admin.email.to_string())),
        }
    }

    async fn delete_by_email(&self, email: &EmailAddress) -> Result<(), AdminError> {
        let result = sqlx::query(
            r#"
            DELETE FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdminError::NotFound(email.to_string()));
        }

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

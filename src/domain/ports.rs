use crate::domain::model::{Employee, EmployeeId, NewEmployee, Role};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Where employees live. Business code only talks to this trait.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>>;

    /// Inserts the employee or replaces the one stored under the same id.
    async fn save_employee(&self, employee: &Employee) -> Result<()>;

    /// Stores a new employee under `max(id) + 1` (1 for an empty store).
    /// Picking the id and writing the record happen under one lock.
    async fn insert_new(&self, request: NewEmployee) -> Result<Employee>;

    /// All employees, ordered by id.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn remove_employee(&self, employee_id: EmployeeId) -> Result<bool>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn default_bonus_rate(&self) -> f64;
    fn role_rates(&self) -> HashMap<Role, f64>;
}

#[async_trait]
impl<T: EmployeeRepository + ?Sized> EmployeeRepository for Arc<T> {
    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>> {
        (**self).get_employee(employee_id).await
    }

    async fn save_employee(&self, employee: &Employee) -> Result<()> {
        (**self).save_employee(employee).await
    }

    async fn insert_new(&self, request: NewEmployee) -> Result<Employee> {
        (**self).insert_new(request).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        (**self).list_employees().await
    }

    async fn remove_employee(&self, employee_id: EmployeeId) -> Result<bool> {
        (**self).remove_employee(employee_id).await
    }
}

pub(crate) fn next_employee_id<'a>(ids: impl Iterator<Item = &'a EmployeeId>) -> EmployeeId {
    ids.max().copied().unwrap_or(0) + 1
}

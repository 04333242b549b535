use crate::domain::model::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::{next_employee_id, EmployeeRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Clones share the same employees.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        let employees = employees.into_iter().map(|e| (e.id, e)).collect();
        Self {
            employees: Arc::new(RwLock::new(employees)),
        }
    }

    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.employees.read().await.get(&employee_id).cloned())
    }

    async fn save_employee(&self, employee: &Employee) -> Result<()> {
        self.employees
            .write()
            .await
            .insert(employee.id, employee.clone());
        Ok(())
    }

    async fn insert_new(&self, request: NewEmployee) -> Result<Employee> {
        let mut employees = self.employees.write().await;
        let employee = request.into_employee(next_employee_id(employees.keys()));
        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.read().await.values().cloned().collect())
    }

    async fn remove_employee(&self, employee_id: EmployeeId) -> Result<bool> {
        Ok(self.employees.write().await.remove(&employee_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save_employee(&Employee::new(1, "Ana", 1000.0))
            .await
            .unwrap();

        let found = repo.get_employee(1).await.unwrap().unwrap();
        assert_eq!(found.name, "Ana");
        assert!(repo.get_employee(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_by_id() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save_employee(&Employee::new(1, "Ana", 1000.0))
            .await
            .unwrap();
        repo.save_employee(&Employee::new(1, "Ana", 1500.0))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
        let found = repo.get_employee(1).await.unwrap().unwrap();
        assert!((found.salary - 1500.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_clones_share_state() {
        let repo = InMemoryEmployeeRepository::with_employees([
            Employee::new(3, "Caio", 1.0),
            Employee::new(1, "Ana", 1.0),
        ]);
        let shared = repo.clone();
        shared
            .save_employee(&Employee::new(2, "Bea", 1.0))
            .await
            .unwrap();

        let ids: Vec<_> = repo
            .list_employees()
            .await
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_insert_new_picks_next_id() {
        let repo = InMemoryEmployeeRepository::with_employees([Employee::new(4, "Dora", 1.0)]);
        let eva = repo.insert_new(NewEmployee::new("Eva", 1.0)).await.unwrap();
        assert_eq!(eva.id, 5);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = InMemoryEmployeeRepository::with_employees([Employee::new(1, "Ana", 1.0)]);
        assert!(repo.remove_employee(1).await.unwrap());
        assert!(!repo.remove_employee(1).await.unwrap());
        assert!(repo.is_empty().await);
    }
}

use crate::domain::model::{Employee, EmployeeId, NewEmployee};
use crate::domain::ports::{next_employee_id, EmployeeRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    employees: Vec<Employee>,
}

/// Employees persisted in a single JSON document on disk.
///
/// A missing file reads as an empty store. Every write rewrites the whole
/// document through a temporary sibling file followed by a rename, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct DatabaseEmployeeRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DatabaseEmployeeRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<EmployeeId, Employee>> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Store {} does not exist yet", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        let document: StoreDocument = serde_json::from_slice(&content)?;
        Ok(document.employees.into_iter().map(|e| (e.id, e)).collect())
    }

    async fn store(&self, employees: BTreeMap<EmployeeId, Employee>) -> Result<()> {
        let document = StoreDocument {
            employees: employees.into_values().collect(),
        };
        let data = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, &data).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        tracing::debug!(
            "Wrote {} employees ({} bytes) to {}",
            document.employees.len(),
            data.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for DatabaseEmployeeRepository {
    async fn get_employee(&self, employee_id: EmployeeId) -> Result<Option<Employee>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(&employee_id))
    }

    async fn save_employee(&self, employee: &Employee) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load().await?;
        employees.insert(employee.id, employee.clone());
        self.store(employees).await
    }

    async fn insert_new(&self, request: NewEmployee) -> Result<Employee> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load().await?;
        let employee = request.into_employee(next_employee_id(employees.keys()));
        employees.insert(employee.id, employee.clone());
        self.store(employees).await?;
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_values().collect())
    }

    async fn remove_employee(&self, employee_id: EmployeeId) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load().await?;
        if employees.remove(&employee_id).is_none() {
            return Ok(false);
        }
        self.store(employees).await?;
        Ok(true)
    }
}

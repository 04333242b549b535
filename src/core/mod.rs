pub mod bonus;
pub mod report;
pub mod service;

pub use crate::domain::model::{Employee, EmployeeId, NewEmployee, Role, Skill};
pub use crate::domain::ports::{ConfigProvider, EmployeeRepository};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{DatabaseEmployeeRepository, InMemoryEmployeeRepository};
pub use core::{
    bonus::{BonusCalculator, BonusPolicy, FixedRatePolicy},
    report::PayrollReport,
    service::EmployeeService,
};
pub use domain::model::{Employee, EmployeeId, NewEmployee, Role, Skill};
pub use domain::ports::{ConfigProvider, EmployeeRepository};
pub use utils::error::{Result, StaffError};

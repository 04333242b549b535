use crate::domain::model::{EmployeeId, Role};
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Hire a new employee
    Hire {
        name: String,

        salary: f64,

        #[arg(long, default_value = "staff", help = "staff, developer, manager or any custom role")]
        role: Role,

        #[arg(long = "skill", value_delimiter = ',')]
        skills: Vec<String>,

        #[arg(long, help = "Hire date (YYYY-MM-DD)")]
        hired_on: Option<NaiveDate>,
    },

    /// Show one employee
    Show { id: EmployeeId },

    /// List every employee
    List,

    /// Compute the bonus of one employee
    Bonus { id: EmployeeId },

    /// Record a new skill for an employee
    AddSkill { id: EmployeeId, skill: String },

    /// Change an employee's role
    Promote { id: EmployeeId, role: Role },

    /// Set an employee's salary
    Raise { id: EmployeeId, salary: f64 },

    /// Remove an employee from the store
    Dismiss { id: EmployeeId },

    /// Payroll report as CSV
    Report {
        #[arg(short, long, help = "Write the CSV to this file instead of stdout")]
        output: Option<PathBuf>,
    },
}

use crate::utils::error::{Result, StaffError};
use crate::utils::validation::{validate_employee_name, validate_salary, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EmployeeId = u64;

/// Bonus every employee earns on its own, whatever its role.
pub const BASE_BONUS_RATE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// What an employee does. `Staff` is the plain, unspecialized employee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Staff,
    Developer,
    Manager,
    Custom(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Staff => "staff",
            Role::Developer => "developer",
            Role::Manager => "manager",
            Role::Custom(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | "staff" | "employee" => Role::Staff,
            "developer" => Role::Developer,
            "manager" => Role::Manager,
            _ => Role::Custom(normalized),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Role::from(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hired_on: Option<NaiveDate>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            role: Role::Staff,
            skills: Vec::new(),
            hired_on: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.add_skill(skill);
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        for skill in skills {
            self.add_skill(skill);
        }
        self
    }

    pub fn hired_on(mut self, date: NaiveDate) -> Self {
        self.hired_on = Some(date);
        self
    }

    /// The employee's own bonus. Role-specific rates live in `BonusCalculator`.
    pub fn calculate_bonus(&self) -> f64 {
        self.salary * BASE_BONUS_RATE
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.matches(name))
    }

    /// Returns false when an equally named skill is already present.
    pub fn add_skill(&mut self, skill: Skill) -> bool {
        if self.has_skill(&skill.name) {
            return false;
        }
        self.skills.push(skill);
        true
    }
}

impl Validate for Employee {
    fn validate(&self) -> Result<()> {
        validate_employee_name(&self.name)?;
        validate_salary(self.salary)?;
        if let Some(skill) = self.skills.iter().find(|s| s.name.trim().is_empty()) {
            return Err(StaffError::invalid_employee(
                "skills",
                format!("skill name cannot be empty (got {:?})", skill.name),
            ));
        }
        Ok(())
    }
}

/// A hire request; the id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: f64,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self {
            name: name.into(),
            salary,
            role: Role::Staff,
            skills: Vec::new(),
            hired_on: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills.extend(skills);
        self
    }

    pub fn into_employee(self, id: EmployeeId) -> Employee {
        let mut employee = Employee::new(id, self.name.trim(), self.salary)
            .with_role(self.role)
            .with_skills(self.skills);
        employee.hired_on = self.hired_on;
        employee
    }
}

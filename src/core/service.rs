use crate::core::bonus::BonusCalculator;
use crate::core::report::PayrollReport;
use crate::domain::model::{Employee, EmployeeId, NewEmployee, Role, Skill};
use crate::domain::ports::EmployeeRepository;
use crate::utils::error::{Result, StaffError};
use crate::utils::validation::{validate_salary, Validate};

pub struct EmployeeService<R: EmployeeRepository> {
    repository: R,
    calculator: BonusCalculator,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_calculator(repository, BonusCalculator::new())
    }

    pub fn with_calculator(repository: R, calculator: BonusCalculator) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn calculator(&self) -> &BonusCalculator {
        &self.calculator
    }

    pub async fn hire(&self, request: NewEmployee) -> Result<Employee> {
        // the id is picked by the repository; 0 stands in for validation only
        request.clone().into_employee(0).validate()?;

        let employee = self.repository.insert_new(request).await?;
        tracing::info!(
            "Hired {} as {} (id {})",
            employee.name,
            employee.role,
            employee.id
        );
        Ok(employee)
    }

    pub async fn find(&self, id: EmployeeId) -> Result<Employee> {
        self.repository
            .get_employee(id)
            .await?
            .ok_or(StaffError::EmployeeNotFound { id })
    }

    pub async fn roster(&self) -> Result<Vec<Employee>> {
        self.repository.list_employees().await
    }

    pub async fn bonus_for(&self, id: EmployeeId) -> Result<f64> {
        let employee = self.find(id).await?;
        let bonus = self.calculator.calculate_bonus(&employee);
        tracing::debug!(
            "Bonus for {} ({}) via '{}' policy: {:.2}",
            employee.name,
            employee.role,
            self.calculator.policy_for(&employee.role).name(),
            bonus
        );
        Ok(bonus)
    }

    pub async fn add_skill(&self, id: EmployeeId, skill: Skill) -> Result<Employee> {
        if skill.name.trim().is_empty() {
            return Err(StaffError::invalid_employee(
                "skills",
                "skill name cannot be empty",
            ));
        }

        let mut employee = self.find(id).await?;
        let skill_name = skill.name.clone();
        if employee.add_skill(skill) {
            self.repository.save_employee(&employee).await?;
            tracing::info!("{} learned {}", employee.name, skill_name);
        } else {
            tracing::debug!("{} already has skill {}", employee.name, skill_name);
        }
        Ok(employee)
    }

    pub async fn change_role(&self, id: EmployeeId, role: Role) -> Result<Employee> {
        let mut employee = self.find(id).await?;
        let previous = std::mem::replace(&mut employee.role, role);
        self.repository.save_employee(&employee).await?;
        tracing::info!(
            "{} moved from {} to {}",
            employee.name,
            previous,
            employee.role
        );
        Ok(employee)
    }

    pub async fn set_salary(&self, id: EmployeeId, salary: f64) -> Result<Employee> {
        validate_salary(salary)?;
        let mut employee = self.find(id).await?;
        employee.salary = salary;
        self.repository.save_employee(&employee).await?;
        tracing::info!("{} now earns {:.2}", employee.name, employee.salary);
        Ok(employee)
    }

    pub async fn dismiss(&self, id: EmployeeId) -> Result<Employee> {
        let employee = self.find(id).await?;
        if !self.repository.remove_employee(id).await? {
            return Err(StaffError::EmployeeNotFound { id });
        }
        tracing::info!("Dismissed {} (id {})", employee.name, employee.id);
        Ok(employee)
    }

    pub async fn payroll_report(&self) -> Result<PayrollReport> {
        let employees = self.roster().await?;
        let report = PayrollReport::build(&employees, &self.calculator);
        tracing::debug!(
            "Payroll report: {} employees, total bonus {:.2}",
            report.lines.len(),
            report.total_bonus
        );
        Ok(report)
    }
}

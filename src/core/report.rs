use crate::core::bonus::BonusCalculator;
use crate::domain::model::{Employee, EmployeeId};
use crate::utils::error::{Result, StaffError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollLine {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub salary: f64,
    pub bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PayrollReport {
    pub lines: Vec<PayrollLine>,
    pub total_salary: f64,
    pub total_bonus: f64,
}

impl PayrollReport {
    pub fn build(employees: &[Employee], calculator: &BonusCalculator) -> Self {
        let lines: Vec<PayrollLine> = employees
            .iter()
            .map(|e| PayrollLine {
                id: e.id,
                name: e.name.clone(),
                role: e.role.to_string(),
                salary: e.salary,
                bonus: calculator.calculate_bonus(e),
            })
            .collect();

        let total_salary = lines.iter().map(|l| l.salary).sum();
        let total_bonus = lines.iter().map(|l| l.bonus).sum();

        Self {
            lines,
            total_salary,
            total_bonus,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `id,name,role,salary,bonus` with money rounded to cents.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["id", "name", "role", "salary", "bonus"])?;

        for line in &self.lines {
            writer.write_record([
                line.id.to_string(),
                line.name.clone(),
                line.role.clone(),
                format!("{:.2}", line.salary),
                format!("{:.2}", line.bonus),
            ])?;
        }

        let data = writer.into_inner().map_err(|e| StaffError::StorageError {
            message: format!("Failed to flush CSV writer: {}", e),
        })?;

        String::from_utf8(data).map_err(|e| StaffError::StorageError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Role;

    fn sample() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ana", 1000.0),
            Employee::new(2, "Bea", 2000.0).with_role(Role::Manager),
            Employee::new(3, "Souza, Caio", 3000.0).with_role(Role::Developer),
        ]
    }

    #[test]
    fn test_build_totals() {
        let report = PayrollReport::build(&sample(), &BonusCalculator::new());

        assert_eq!(report.lines.len(), 3);
        assert!((report.total_salary - 6000.0).abs() < 1e-9);
        // 100 + 400 + 450
        assert!((report.total_bonus - 950.0).abs() < 1e-9);
        assert_eq!(report.lines[1].role, "manager");
    }

    #[test]
    fn test_to_csv() {
        let report = PayrollReport::build(&sample(), &BonusCalculator::new());
        let csv = report.to_csv().unwrap();
        let rows: Vec<&str> = csv.lines().collect();

        assert_eq!(rows[0], "id,name,role,salary,bonus");
        assert_eq!(rows[1], "1,Ana,staff,1000.00,100.00");
        assert_eq!(rows[2], "2,Bea,manager,2000.00,400.00");
        assert_eq!(rows[3], "3,\"Souza, Caio\",developer,3000.00,450.00");
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = PayrollReport::build(&[], &BonusCalculator::new());
        assert!(report.is_empty());
        assert_eq!(report.to_csv().unwrap(), "id,name,role,salary,bonus\n");
    }
}

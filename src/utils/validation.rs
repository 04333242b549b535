use crate::utils::error::{Result, StaffError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StaffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StaffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StaffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so reject it explicitly through partial_cmp
    if value.partial_cmp(&min).is_none() || value < min || value > max {
        return Err(StaffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Bonus rates are fractions of salary.
pub fn validate_rate(field_name: &str, rate: f64) -> Result<()> {
    validate_range(field_name, rate, 0.0, 1.0)
}

pub fn validate_employee_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StaffError::invalid_employee(
            "name",
            "name cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() {
        return Err(StaffError::invalid_employee(
            "salary",
            format!("salary must be a finite number, got {}", salary),
        ));
    }
    if salary < 0.0 {
        return Err(StaffError::invalid_employee(
            "salary",
            format!("salary cannot be negative, got {}", salary),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.path", "./staff.json").is_ok());
        assert!(validate_path("store.path", "").is_err());
        assert!(validate_path("store.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("bonus.default_rate", 0.1).is_ok());
        assert!(validate_rate("bonus.default_rate", 0.0).is_ok());
        assert!(validate_rate("bonus.default_rate", 1.0).is_ok());
        assert!(validate_rate("bonus.default_rate", 1.5).is_err());
        assert!(validate_rate("bonus.default_rate", -0.1).is_err());
        assert!(validate_rate("bonus.default_rate", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_salary() {
        assert!(validate_salary(0.0).is_ok());
        assert!(validate_salary(4200.5).is_ok());
        assert!(validate_salary(-1.0).is_err());
        assert!(validate_salary(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_employee_name() {
        assert!(validate_employee_name("Ada").is_ok());
        assert!(validate_employee_name("   ").is_err());
    }
}

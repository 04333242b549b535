use crate::domain::model::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Employee {id} not found")]
    EmployeeNotFound { id: EmployeeId },

    #[error("Invalid employee {field}: {reason}")]
    InvalidEmployee { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    NotFound,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StaffError {
    pub fn invalid_employee(field: &str, reason: impl Into<String>) -> Self {
        StaffError::InvalidEmployee {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StaffError::ConfigError { .. }
            | StaffError::ConfigValidationError { .. }
            | StaffError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StaffError::InvalidEmployee { .. } => ErrorCategory::Validation,
            StaffError::EmployeeNotFound { .. } => ErrorCategory::NotFound,
            StaffError::IoError(_)
            | StaffError::SerializationError(_)
            | StaffError::CsvError(_)
            | StaffError::StorageError { .. } => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StaffError::EmployeeNotFound { id } => {
                format!("No employee with id {} exists in the store", id)
            }
            StaffError::InvalidEmployee { field, reason } => {
                format!("The employee's {} is not valid: {}", field, reason)
            }
            StaffError::SerializationError(_) => {
                "The employee store could not be read or written as JSON".to_string()
            }
            StaffError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the configuration file and command line flags"
            }
            ErrorCategory::Validation => "Correct the employee data and try again",
            ErrorCategory::NotFound => "Run `staffbook list` to see the known employee ids",
            ErrorCategory::Storage => {
                "Verify the store path is writable and the store file is valid JSON"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StaffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_low_severity() {
        let err = StaffError::EmployeeNotFound { id: 7 };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains('7'));
    }

    #[test]
    fn test_config_errors_share_category() {
        let err = StaffError::InvalidConfigValueError {
            field: "store.path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}

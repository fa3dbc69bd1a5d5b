//! Validation errors raised by the domain services before anything is stored.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimalValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot exceed {0} characters")]
    NameTooLong(usize),
    #[error("Weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),
    #[error("Property must be a non-negative number, got {0}")]
    InvalidProperty(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("Login cannot be empty")]
    EmptyLogin,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

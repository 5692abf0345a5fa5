//! Errors for the fallible quaternion operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuaternionError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuaternionError {
    #[error("The zero quaternion has no inverse")]
    NotInvertible,

    #[error("The zero quaternion has no direction")]
    NoDirection,

    #[error("The logarithm of the zero quaternion is undefined")]
    LogarithmOfZero,

    #[error("Quaternion has a non-finite component")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            QuaternionError::LogarithmOfZero.to_string(),
            "The logarithm of the zero quaternion is undefined"
        );
        let message = QuaternionError::NotInvertible.to_string();
        assert!(message.contains("no inverse"));
        let message = QuaternionError::NoDirection.to_string();
        assert!(message.contains("no direction"));
        assert!(QuaternionError::NonFinite.to_string().contains("non-finite"));
    }
}

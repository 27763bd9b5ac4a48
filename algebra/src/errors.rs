use ark_std::{error, fmt};

/// Errors raised by the field and group wrappers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    DeserializationError,
    GroupInversionError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DeserializationError => "Could not deserialize object",
            GroupInversionError => "Group Element not invertible",
        })
    }
}

impl error::Error for AlgebraError {}

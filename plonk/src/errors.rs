use ark_std::{error, fmt, string::String};
use sparse_plonk_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

/// Errors of the setup, the commitment scheme and the witness codec.
#[derive(Debug)]
pub enum PlonkError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// I/O error of the underlying stream.
    Io(std::io::Error),
    /// Error with message.
    Message(String),
    /// No multiplicative subgroup of this order exists in the field.
    GroupNotFound(usize),
    /// A row references a coefficient outside the coefficient table.
    CoefficientIndex {
        /// Gate row (constraints first, then assertions).
        row: usize,
        /// The dangling coefficient id.
        coeff_id: usize,
    },
    /// A row references a variable outside `[0, nb_variables)`.
    VariableIndex {
        /// Gate row (constraints first, then assertions).
        row: usize,
        /// The dangling variable id.
        variable_id: usize,
    },
    /// A declared variable is wired into no row.
    UnreferencedVariable(usize),
    /// The gate at this row does not evaluate to zero.
    UnsatisfiedConstraint(usize),
    /// The declared witness length exceeds the bytes available.
    WitnessTruncated {
        /// The number of elements announced by the length prefix.
        declared: u32,
        /// Bytes consumed before the stream ended.
        offset: u64,
    },
    /// A witness element is not a canonical field encoding.
    WitnessDecode {
        /// Position of the element in the witness.
        index: usize,
        /// Byte offset of the element in the stream.
        offset: u64,
    },
    /// A vector does not have the expected length.
    WitnessLength {
        /// The expected length.
        expected: usize,
        /// The actual length.
        found: usize,
    },
    /// An assignment leaf has no value.
    MissingAssignment(String),
    /// An assignment leaf cannot be turned into a field element.
    Conversion {
        /// The schema-qualified leaf name.
        name: String,
        /// Why the conversion failed.
        reason: String,
    },
    /// The degree of the polynomial is higher than the maximum degree supported.
    DegreeError,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Io(e) => write!(f, "I/O: {}", e),
            Message(e) => f.write_str(e),
            GroupNotFound(n) => write!(f, "No multiplicative subgroup of order {}.", n),
            CoefficientIndex { row, coeff_id } => {
                write!(f, "Row {} references unknown coefficient {}.", row, coeff_id)
            }
            VariableIndex { row, variable_id } => {
                write!(f, "Row {} references unknown variable {}.", row, variable_id)
            }
            UnreferencedVariable(id) => write!(f, "Variable {} is not wired.", id),
            UnsatisfiedConstraint(row) => write!(f, "Constraint {} is not satisfied.", row),
            WitnessTruncated { declared, offset } => write!(
                f,
                "Witness of {} elements truncated after {} bytes.",
                declared, offset
            ),
            WitnessDecode { index, offset } => write!(
                f,
                "Witness element {} at byte {} is not a canonical field element.",
                index, offset
            ),
            WitnessLength { expected, found } => {
                write!(f, "Expected {} elements, found {}.", expected, found)
            }
            MissingAssignment(name) => {
                write!(f, "when parsing variable {}: missing assignment", name)
            }
            Conversion { name, reason } => write!(f, "when parsing variable {}: {}", name, reason),
            DegreeError => f.write_str(
                "The degree of the polynomial is higher than the maximum degree supported.",
            ),
        }
    }
}

impl error::Error for PlonkError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            PlonkError::Algebra(e) => Some(e),
            PlonkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}

impl From<std::io::Error> for PlonkError {
    fn from(e: std::io::Error) -> PlonkError {
        PlonkError::Io(e)
    }
}

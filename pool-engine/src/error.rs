use std::fmt;

use crate::ObjectKind;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// An input could not describe a valid table state
    InvalidArgument(String),
    /// A query that requires a rolling ball was asked about another kind of
    /// object
    NotApplicable { kind: ObjectKind },
    /// Every slot of the table is already taken
    TableFull,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
            SimError::NotApplicable { kind } => {
                write!(f, "Query not applicable to a {} (expected a rolling ball)", kind)
            }
            SimError::TableFull => write!(f, "Table is full"),
        }
    }
}

impl std::error::Error for SimError {}

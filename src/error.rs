use std::fmt;

use thiserror::Error;

/// Which collection a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Car,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Person => write!(f, "Person"),
            EntityKind::Car => write!(f, "Car"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GarageError {
    #[error("{kind} not found for id: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Entity store lock poisoned")]
    LockPoisoned,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GarageError {
    pub fn person_not_found(id: impl Into<String>) -> Self {
        GarageError::NotFound {
            kind: EntityKind::Person,
            id: id.into(),
        }
    }

    pub fn car_not_found(id: impl Into<String>) -> Self {
        GarageError::NotFound {
            kind: EntityKind::Car,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GarageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            GarageError::person_not_found("X").to_string(),
            "Person not found for id: X"
        );
        assert_eq!(
            GarageError::car_not_found("42").to_string(),
            "Car not found for id: 42"
        );
    }
}

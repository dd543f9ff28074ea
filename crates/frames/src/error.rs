//! Error types for frame construction and taxonomy loading

use thiserror::Error;

use crate::frame::FrameId;

/// Main error type for frame network operations.
///
/// Every variant is a caller precondition violation: the network refuses
/// the request and is left exactly as it was.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Frame names must be non-empty
    #[error("Frame name must not be empty")]
    EmptyName,

    /// A frame with this name already exists in the network
    #[error("Duplicate frame: '{name}' is already defined")]
    DuplicateName {
        /// The colliding name
        name: String,
    },

    /// The id does not belong to this network
    #[error("Unknown frame: no frame with id {id} in this network")]
    UnknownFrame {
        /// The offending id
        id: FrameId,
    },

    /// A definition names a superset that has not been constructed yet
    #[error("Unknown superset '{superset}' for frame '{name}' (supersets must be defined first)")]
    UnknownSuperset {
        /// Frame being defined
        name: String,
        /// Superset it refers to
        superset: String,
    },

    /// Malformed or unserializable taxonomy document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for frame network operations
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FrameError::EmptyName.to_string(), "Frame name must not be empty");

        let err = FrameError::DuplicateName {
            name: "Bird".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate frame: 'Bird' is already defined");

        let err = FrameError::UnknownSuperset {
            name: "Ostrich".to_string(),
            superset: "Bird".to_string(),
        };
        assert!(err.to_string().contains("'Bird'"));
        assert!(err.to_string().contains("'Ostrich'"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FrameError = json_err.into();
        assert!(matches!(err, FrameError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}

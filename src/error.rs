use thiserror::Error;

#[derive(Debug, Error)]
#[allow(dead_code)] // NOTE: TBA in future iterations (unified error handling)
pub enum PatchGroupError {
    #[error(transparent)]
    Ssm(#[from] crate::ssm::SsmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = PatchGroupError::Config("no AWS region resolved".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: no AWS region resolved"
        );
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PatchGroupError = io_err.into();
        assert!(matches!(err, PatchGroupError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_ssm_error_from_conversion() {
        let ssm_err = crate::ssm::SsmError::EmptyField {
            field: "baseline_id",
        };
        let err: PatchGroupError = ssm_err.into();
        assert!(matches!(err, PatchGroupError::Ssm(_)));
        assert_eq!(err.to_string(), "baseline_id must not be empty");
    }
}

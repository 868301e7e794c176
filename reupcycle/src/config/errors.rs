use thiserror::Error;

/// Errors emitted while reading the configuration file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::ConfigError;

    #[test]
    fn given_io_failure_when_displayed_then_cause_is_included() {
        let err = ConfigError::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert_eq!(format!("{err}"), "config IO failed: permission denied");
    }
}

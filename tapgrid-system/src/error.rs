use std::io;
use tapgrid_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Cannot launch an empty command")]
    EmptyCommand,

    #[error("Failed to spawn process '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl SystemError {
    /// True if the launcher cannot continue.
    pub fn is_fatal(&self) -> bool {
        match self {
            SystemError::Domain(e) => e.is_fatal(),
            _ => false,
        }
    }
}

use crate::config::ConfigError;
use crate::coordinates::CoordinateError;
use crate::sun_times::FetchError;
use thiserror::Error;

/// Every way a run can fail. All of them end the process with status 1.
#[derive(Debug, Error)]
pub enum DaypartError {
    #[error(transparent)]
    Coordinates(#[from] CoordinateError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type DaypartResult<T> = Result<T, DaypartError>;

impl DaypartError {
    pub const EXIT_CODE: u8 = 1;

    pub fn is_usage(&self) -> bool {
        matches!(self, DaypartError::Coordinates(_))
    }

    /// Message printed to stderr. Argument problems are printed bare, the
    /// rest are prefixed with `Error:`.
    pub fn user_message(&self) -> String {
        if self.is_usage() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}

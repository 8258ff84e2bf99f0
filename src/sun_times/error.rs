use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The API could not be reached at all.
    #[error("Problem connecting to the API: {message}")]
    Connectivity { message: String },

    /// The API answered, but not with usable sun times.
    #[error("Could not fetch valid sunrise and sunset times from the API ({reason})")]
    Data { reason: String },
}

pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    pub fn connectivity(message: impl Into<String>) -> Self {
        FetchError::Connectivity {
            message: message.into(),
        }
    }

    pub fn data(reason: impl Into<String>) -> Self {
        FetchError::Data {
            reason: reason.into(),
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::Connectivity { .. })
    }
}

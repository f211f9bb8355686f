/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 12/5/25
 ******************************************************************************/
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};
use std::{fmt, io};

#[derive(Debug)]
pub enum ProfileError {
    /// Identifiers were read before `SessionState::fill` ran.
    Uninitialized,
    SessionExpired { created: DateTime<Utc> },
    InvalidDeviceId(String),
    InvalidHeader(String),
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for ProfileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Uninitialized => write!(f, "uninitialized session"),
            ProfileError::SessionExpired { created } => {
                write!(f, "session expired (created at {})", created.to_rfc3339())
            }
            ProfileError::InvalidDeviceId(id) => write!(f, "invalid device id: {id:?}"),
            ProfileError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            ProfileError::Io(e) => write!(f, "io error: {e}"),
            ProfileError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Io(e) => Some(e),
            ProfileError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProfileError {
    fn from(e: io::Error) -> Self {
        ProfileError::Io(e)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::Json(e)
    }
}

impl From<reqwest::header::ToStrError> for ProfileError {
    fn from(e: reqwest::header::ToStrError) -> Self {
        ProfileError::InvalidHeader(e.to_string())
    }
}

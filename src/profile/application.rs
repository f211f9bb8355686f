/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_APP_ID, DEFAULT_BUILD_NUMBER, DEFAULT_HTTP_ENGINE, DEFAULT_IG_CAPABILITIES,
    DEFAULT_IG_VERSION, DEFAULT_SIGNATURE_KEY, DEFAULT_SIGNATURE_KEY_V,
};
use crate::profile::non_empty_or;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller overrides for [`ApplicationIdentity`]. Unset or empty fields take the
/// default constant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub signature_key: Option<String>,
    pub signature_key_version: Option<String>,
    pub http_engine: Option<String>,
    pub capabilities: Option<String>,
    pub id: Option<String>,
    pub version: Option<String>,
    pub build_number: Option<String>,
}

/// The Instagram build being impersonated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIdentity {
    /// Legacy HMAC key. Still sent along with signed bodies, no longer used to sign them.
    pub signature_key: String,
    pub signature_key_version: String,
    /// Facebook's in-house HTTP stack, reported as `x-fb-http-engine`.
    pub http_engine: String,
    pub capabilities: String,
    pub id: String,
    pub version: String,
    pub build_number: String,
}

impl ApplicationIdentity {
    pub fn new(settings: ApplicationSettings) -> Self {
        Self {
            signature_key: non_empty_or(settings.signature_key, DEFAULT_SIGNATURE_KEY),
            signature_key_version: non_empty_or(
                settings.signature_key_version,
                DEFAULT_SIGNATURE_KEY_V,
            ),
            http_engine: non_empty_or(settings.http_engine, DEFAULT_HTTP_ENGINE),
            capabilities: non_empty_or(settings.capabilities, DEFAULT_IG_CAPABILITIES),
            id: non_empty_or(settings.id, DEFAULT_APP_ID),
            version: non_empty_or(settings.version, DEFAULT_IG_VERSION),
            build_number: non_empty_or(settings.build_number, DEFAULT_BUILD_NUMBER),
        }
    }
}

impl Default for ApplicationIdentity {
    fn default() -> Self {
        Self::new(ApplicationSettings::default())
    }
}

impl fmt::Display for ApplicationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        value["signature_key"] = "[REDACTED]".into();
        write!(f, "{value}")
    }
}

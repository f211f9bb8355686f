use crate::error::ProfileError;
use crate::profile::{
    ApplicationIdentity, ApplicationSettings, DeviceIdentity, DeviceSettings, Resolution,
};
use crate::session::{SessionState, StateSettings};
use crate::storage::session_file::StoredSession;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub application: ApplicationSettings,
    pub device: DeviceSettings,
    pub state: StateSettings,
    pub session_file: Option<PathBuf>,
}

fn redacted(value: &Option<String>) -> Value {
    value
        .as_ref()
        .map_or(Value::Null, |_| Value::from("[REDACTED]"))
}

impl ApplicationSettings {
    fn to_redacted_json(&self) -> Value {
        json!({
            "signature_key": redacted(&self.signature_key),
            "signature_key_version": self.signature_key_version,
            "http_engine": self.http_engine,
            "capabilities": self.capabilities,
            "id": self.id,
            "version": self.version,
            "build_number": self.build_number,
        })
    }
}

impl DeviceSettings {
    fn to_redacted_json(&self) -> Value {
        json!({
            "manufacturer": self.manufacturer,
            "android_sdk_version": self.android_sdk_version,
            "android_release": self.android_release,
            "device": self.device,
            "model": self.model,
            "dpi": self.dpi,
            "resolution": self.resolution.map(|r| r.to_string()),
            "chipset": self.chipset,
        })
    }
}

impl StateSettings {
    fn to_redacted_json(&self) -> Value {
        json!({
            "app_startup_country": self.app_startup_country,
            "device_locale": self.device_locale,
            "app_locale": self.app_locale,
            "connection_type": self.connection_type,
            "accept_language": self.accept_language,
            "ads_opt_out": self.ads_opt_out,
            "authorization": redacted(&self.authorization),
            "extra_keys": self.extra.len(),
        })
    }
}

impl fmt::Display for ApplicationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_redacted_json())
    }
}

impl fmt::Display for DeviceSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_redacted_json())
    }
}

impl fmt::Display for StateSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_redacted_json())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = json!({
            "application": self.application.to_redacted_json(),
            "device": self.device.to_redacted_json(),
            "state": self.state.to_redacted_json(),
            "session_file": self.session_file.as_ref().map(|p| p.display().to_string()),
        });
        write!(f, "{value}")
    }
}

/// Reads and parses `env_var`. Unset variables give `None`; unparseable ones are
/// logged and also give `None`.
pub fn get_env<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => match val.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                error!("Failed to parse {}: {} ({:?}), ignoring", env_var, val, e);
                None
            }
        },
        Err(_) => None,
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            application: ApplicationSettings {
                signature_key: get_env("IG_SIGNATURE_KEY"),
                signature_key_version: get_env("IG_SIGNATURE_KEY_VERSION"),
                http_engine: get_env("IG_HTTP_ENGINE"),
                capabilities: get_env("IG_CAPABILITIES"),
                id: get_env("IG_APP_ID"),
                version: get_env("IG_APP_VERSION"),
                build_number: get_env("IG_BUILD_NUMBER"),
            },
            device: DeviceSettings {
                manufacturer: get_env("IG_DEVICE_MANUFACTURER"),
                android_sdk_version: get_env("IG_ANDROID_SDK"),
                android_release: get_env("IG_ANDROID_RELEASE"),
                device: get_env("IG_DEVICE"),
                model: get_env("IG_DEVICE_MODEL"),
                dpi: get_env("IG_DEVICE_DPI"),
                resolution: get_env::<Resolution>("IG_DEVICE_RESOLUTION"),
                chipset: get_env("IG_DEVICE_CHIPSET"),
            },
            state: StateSettings {
                app_startup_country: get_env("IG_APP_STARTUP_COUNTRY"),
                device_locale: get_env("IG_DEVICE_LOCALE"),
                app_locale: get_env("IG_APP_LOCALE"),
                connection_type: get_env("IG_CONNECTION_TYPE"),
                accept_language: get_env("IG_ACCEPT_LANGUAGE"),
                ..Default::default()
            },
            session_file: get_env("IG_SESSION_FILE"),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn application_identity(&self) -> ApplicationIdentity {
        ApplicationIdentity::new(self.application.clone())
    }

    pub fn device_identity(&self) -> DeviceIdentity {
        DeviceIdentity::new(self.device.clone())
    }

    /// A new, not yet filled session built from the configured overrides.
    pub fn session_state(&self) -> SessionState {
        SessionState::new(self.state.clone())
    }

    /// Resumes the session stored in `session_file` when it is still valid,
    /// otherwise starts a freshly filled one.
    pub fn open_session(&self) -> Result<StoredSession, ProfileError> {
        if let Some(path) = self.session_file.as_ref().filter(|p| p.exists()) {
            let stored = StoredSession::load_from_file(path)?;
            if stored.state.valid() {
                info!("Resuming session from {}", path.display());
                return Ok(stored);
            }
            info!("Stored session in {} is no longer valid", path.display());
        }
        let mut state = self.session_state();
        state.fill_with_uuid4();
        Ok(StoredSession::new(
            self.application_identity(),
            self.device_identity(),
            state,
        ))
    }
}

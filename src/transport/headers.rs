/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 8/9/24
 ******************************************************************************/

use crate::error::ProfileError;
use crate::profile::{ApplicationIdentity, DeviceIdentity};
use crate::session::SessionState;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::json;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use tracing::debug;

// Response headers through which Instagram rotates session values.
pub(crate) const SET_MID: &str = "ig-set-x-mid";
pub(crate) const SET_WWW_CLAIM: &str = "x-ig-set-www-claim";
pub(crate) const SET_AUTHORIZATION: &str = "ig-set-authorization";
pub(crate) const SET_DS_USER_ID: &str = "ig-set-ig-u-ds-user-id";
pub(crate) const SET_RUR: &str = "ig-set-ig-u-rur";
pub(crate) const SET_SHBID: &str = "ig-set-ig-u-shbid";
pub(crate) const SET_SHBTS: &str = "ig-set-ig-u-shbts";
pub(crate) const SET_DIRECT_REGION_HINT: &str = "ig-set-ig-u-ig-direct-region-hint";
pub(crate) const SET_PASSWORD_ENCRYPTION_PUB_KEY: &str = "ig-set-password-encryption-pub-key";
pub(crate) const SET_PASSWORD_ENCRYPTION_KEY_ID: &str = "ig-set-password-encryption-key-id";

/// Builds the `User-Agent` the official Android app sends, e.g.
/// `Instagram 169.3.0.30.135 Android (26/8.0.0; 480dpi; 1080x2280; samsung; SM-G973F; beyond1; exynos9820; en_US; 264009049)`.
pub fn user_agent(app: &ApplicationIdentity, device: &DeviceIdentity, state: &SessionState) -> String {
    format!(
        "Instagram {} Android ({}/{}; {}dpi; {}; {}; {}; {}; {}; {}; {})",
        app.version,
        device.android_sdk_version,
        device.android_release,
        device.dpi,
        device.resolution,
        device.manufacturer,
        device.device,
        device.model,
        device.chipset,
        state.app_locale,
        app.build_number
    )
}

/// Default header set attached to every private API request.
#[derive(Debug, Clone, Copy)]
pub struct RequestHeaders<'a> {
    app: &'a ApplicationIdentity,
    device: &'a DeviceIdentity,
    state: &'a SessionState,
}

impl<'a> RequestHeaders<'a> {
    pub fn new(
        app: &'a ApplicationIdentity,
        device: &'a DeviceIdentity,
        state: &'a SessionState,
    ) -> Self {
        Self { app, device, state }
    }

    /// Collects the headers as plain strings.
    ///
    /// # Errors
    ///
    /// * `ProfileError::Uninitialized` if the session was never filled.
    /// * `ProfileError::SessionExpired` once the session is older than 90 days.
    ///
    /// Tracking values Instagram has not issued yet (empty strings) are left out.
    pub fn build(&self) -> Result<HashMap<String, String>, ProfileError> {
        self.state.ensure_valid()?;
        let state = self.state;
        let mut headers = HashMap::new();
        let mut put = |name: &str, value: String| {
            headers.insert(name.to_string(), value);
        };

        put("x-ig-app-locale", state.app_locale.clone());
        put("x-ig-device-locale", state.device_locale.clone());
        put("x-ig-app-startup-country", state.app_startup_country.clone());
        put("x-pigeon-session-id", state.pigeon_session_id.clone());
        put("x-pigeon-rawclienttime", raw_client_time());
        put("x-ig-connection-speed", state.connection_speed());
        put("x-ig-bandwidth-speed-kbps", state.bandwidth_speed_kbps());
        put("x-ig-bandwidth-totalbytes-b", state.bandwidth_totalbytes_b.clone());
        put("x-ig-bandwidth-totaltime-ms", state.bandwidth_totaltime_ms.clone());
        put("x-bloks-version-id", state.bloks_version_id.clone());
        put("x-bloks-is-layout-rtl", state.bloks_is_layout_rtl.clone());
        put("x-ig-www-claim", state.www_claim.clone());
        put("x-ig-device-id", state.uuid.clone());
        put("x-ig-android-id", state.android_id()?);
        put("x-ig-connection-type", state.connection_type.clone());
        put("x-ig-capabilities", self.app.capabilities.clone());
        put("x-ig-app-id", self.app.id.clone());
        put("x-fb-http-engine", self.app.http_engine.clone());
        put("user-agent", user_agent(self.app, self.device, state));
        put("accept-language", state.accept_language.clone());
        put("accept-encoding", state.accept_encoding.clone());
        put("accept", state.accept.clone());

        let tracking = [
            ("x-mid", &state.mid),
            ("ig-u-ds-user-id", &state.user_id),
            ("ig-u-rur", &state.rur),
            ("ig-u-ig-direct-region-hint", &state.direct_region_hint),
            ("ig-u-shbid", &state.shbid),
            ("ig-u-shbts", &state.shbts),
            ("authorization", &state.authorization),
        ];
        for (name, value) in tracking {
            if !value.is_empty() {
                put(name, value.clone());
            }
        }

        debug!("Built {} request headers", headers.len());
        Ok(headers)
    }

    pub fn to_header_map(&self) -> Result<HeaderMap, ProfileError> {
        let mut map = HeaderMap::new();
        for (name, value) in self.build()? {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ProfileError::InvalidHeader(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| ProfileError::InvalidHeader(format!("{name}: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

impl Display for RequestHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let authorization = if self.state.authorization.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        let value = json!({
            "user_agent": user_agent(self.app, self.device, self.state),
            "device_id": self.state.uuid,
            "authorization": authorization,
        });
        write!(f, "{value}")
    }
}

fn raw_client_time() -> String {
    format!("{:.3}", Utc::now().timestamp_millis() as f64 / 1000.0)
}

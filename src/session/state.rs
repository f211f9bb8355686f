/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{
    ANDROID_ID_END, ANDROID_ID_PREFIX, ANDROID_ID_START, BANDWIDTH_FRACTION_MAX,
    BANDWIDTH_FRACTION_MIN, BANDWIDTH_KBPS_MAX, BANDWIDTH_KBPS_MIN, CONNECTION_SPEED_KBPS_MAX,
    CONNECTION_SPEED_KBPS_MIN, DEFAULT_ACCEPT, DEFAULT_ACCEPT_ENCODING, DEFAULT_ACCEPT_LANGUAGE,
    DEFAULT_ADS_OPT_OUT, DEFAULT_APP_LOCALE, DEFAULT_APP_STARTUP_COUNTRY,
    DEFAULT_AUTHORIZATION, DEFAULT_BANDWIDTH_TOTALBYTES_B, DEFAULT_BANDWIDTH_TOTALTIME_MS,
    DEFAULT_BLOKS_IS_LAYOUT_RTL, DEFAULT_BLOKS_VERSION_ID, DEFAULT_CONNECTION_TYPE,
    DEFAULT_DEVICE_LOCALE, DEFAULT_RUR, DEFAULT_WWW_CLAIM, SESSION_LIFETIME_SECS,
};
use crate::error::ProfileError;
use crate::profile::{non_empty_or, uuid4};
use crate::session::account::{AccountData, LoggedInAccountData};
use crate::transport::headers::{
    SET_AUTHORIZATION, SET_DIRECT_REGION_HINT, SET_DS_USER_ID, SET_MID,
    SET_PASSWORD_ENCRYPTION_KEY_ID, SET_PASSWORD_ENCRYPTION_PUB_KEY, SET_RUR, SET_SHBID,
    SET_SHBTS, SET_WWW_CLAIM,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, instrument, trace};

const TRACKED_HEADERS: [&str; 9] = [
    SET_MID,
    SET_WWW_CLAIM,
    SET_AUTHORIZATION,
    SET_DS_USER_ID,
    SET_RUR,
    SET_SHBID,
    SET_SHBTS,
    SET_DIRECT_REGION_HINT,
    SET_PASSWORD_ENCRYPTION_PUB_KEY,
];

/// Caller overrides for the preset part of a [`SessionState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    pub app_startup_country: Option<String>,
    pub device_locale: Option<String>,
    pub app_locale: Option<String>,
    pub bandwidth_totalbytes_b: Option<String>,
    pub bandwidth_totaltime_ms: Option<String>,
    pub connection_type: Option<String>,
    pub accept_language: Option<String>,
    pub accept_encoding: Option<String>,
    pub accept: Option<String>,
    pub ads_opt_out: Option<bool>,
    pub authorization: Option<String>,
    pub www_claim: Option<String>,
    pub rur: Option<String>,
    pub bloks_version_id: Option<String>,
    pub bloks_is_layout_rtl: Option<String>,
    /// Free-form attributes carried alongside the session.
    pub extra: HashMap<String, Value>,
}

/// Header values and identifiers for one Instagram login.
///
/// A fresh state only holds the preset values; [`SessionState::fill`] has to run
/// once before it is used for requests. A state restored from disk already
/// carries its identifiers and must not be filled again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub app_startup_country: String,
    pub device_locale: String,
    pub app_locale: String,
    pub bandwidth_totalbytes_b: String,
    pub bandwidth_totaltime_ms: String,
    pub connection_type: String,
    pub accept_language: String,
    pub accept_encoding: String,
    pub accept: String,
    pub ads_opt_out: bool,
    /// Bearer token, rotated through `ig-set-authorization`.
    pub authorization: String,
    pub www_claim: String,
    pub rur: String,
    pub bloks_version_id: String,
    pub bloks_is_layout_rtl: String,
    #[serde(default)]
    pub extra: HashMap<String, Value>,

    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub ad_id: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub phone_id: String,
    #[serde(default)]
    pub pigeon_session_id: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub mid: String,
    #[serde(default)]
    pub direct_region_hint: String,
    #[serde(default)]
    pub shbid: String,
    #[serde(default)]
    pub shbts: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub public_api_key: String,
    #[serde(default)]
    pub public_api_key_id: i64,
    #[serde(default)]
    pub logged_in_account_data: AccountData,
}

impl SessionState {
    pub fn new(settings: StateSettings) -> Self {
        Self {
            app_startup_country: non_empty_or(
                settings.app_startup_country,
                DEFAULT_APP_STARTUP_COUNTRY,
            ),
            device_locale: non_empty_or(settings.device_locale, DEFAULT_DEVICE_LOCALE),
            app_locale: non_empty_or(settings.app_locale, DEFAULT_APP_LOCALE),
            bandwidth_totalbytes_b: non_empty_or(
                settings.bandwidth_totalbytes_b,
                DEFAULT_BANDWIDTH_TOTALBYTES_B,
            ),
            bandwidth_totaltime_ms: non_empty_or(
                settings.bandwidth_totaltime_ms,
                DEFAULT_BANDWIDTH_TOTALTIME_MS,
            ),
            connection_type: non_empty_or(settings.connection_type, DEFAULT_CONNECTION_TYPE),
            accept_language: non_empty_or(settings.accept_language, DEFAULT_ACCEPT_LANGUAGE),
            accept_encoding: non_empty_or(settings.accept_encoding, DEFAULT_ACCEPT_ENCODING),
            accept: non_empty_or(settings.accept, DEFAULT_ACCEPT),
            // `false` counts as unset, same as an empty string.
            ads_opt_out: settings
                .ads_opt_out
                .filter(|v| *v)
                .unwrap_or(DEFAULT_ADS_OPT_OUT),
            authorization: non_empty_or(settings.authorization, DEFAULT_AUTHORIZATION),
            www_claim: non_empty_or(settings.www_claim, DEFAULT_WWW_CLAIM),
            rur: non_empty_or(settings.rur, DEFAULT_RUR),
            bloks_version_id: non_empty_or(settings.bloks_version_id, DEFAULT_BLOKS_VERSION_ID),
            bloks_is_layout_rtl: non_empty_or(
                settings.bloks_is_layout_rtl,
                DEFAULT_BLOKS_IS_LAYOUT_RTL,
            ),
            extra: settings.extra,
            uuid: String::new(),
            device_id: String::new(),
            ad_id: String::new(),
            session_id: String::new(),
            phone_id: String::new(),
            pigeon_session_id: String::new(),
            created: None,
            user_id: String::new(),
            mid: String::new(),
            direct_region_hint: String::new(),
            shbid: String::new(),
            shbts: String::new(),
            target: String::new(),
            public_api_key: String::new(),
            public_api_key_id: 0,
            logged_in_account_data: AccountData::NotLoggedIn,
        }
    }

    /// Generates the six per-session identifiers with `generate`, stamps the
    /// creation time and clears every account/tracking value.
    ///
    /// Running it on a live session discards the identifiers Instagram has
    /// already associated with it.
    #[instrument(skip_all)]
    pub fn fill<F>(&mut self, mut generate: F)
    where
        F: FnMut() -> String,
    {
        if self.is_initialized() {
            info!("Re-initializing session, previous identifiers are discarded");
        }
        self.uuid = generate();
        self.device_id = generate();
        self.ad_id = generate();
        self.session_id = generate();
        self.phone_id = generate();
        self.pigeon_session_id = generate();
        self.created = Some(Utc::now());
        self.user_id = String::new();
        self.mid = String::new();
        self.direct_region_hint = String::new();
        self.shbid = String::new();
        self.shbts = String::new();
        self.target = String::new();
        self.public_api_key = String::new();
        self.public_api_key_id = 0;
        self.logged_in_account_data = AccountData::NotLoggedIn;
        debug!(uuid = %self.uuid, device_id = %self.device_id, "Session filled");
    }

    pub fn fill_with_uuid4(&mut self) {
        self.fill(uuid4)
    }

    /// Rotates uuid, device id, advertising id and session id. The phone id and
    /// pigeon session id keep their values.
    #[instrument(skip_all)]
    pub fn refresh<F>(&mut self, mut generate: F)
    where
        F: FnMut() -> String,
    {
        self.uuid = generate();
        self.device_id = generate();
        self.ad_id = generate();
        self.session_id = generate();
        debug!(uuid = %self.uuid, device_id = %self.device_id, "Session identifiers refreshed");
    }

    pub fn refresh_with_uuid4(&mut self) {
        self.refresh(uuid4)
    }

    pub fn is_initialized(&self) -> bool {
        self.created.is_some()
    }

    /// Randomized on every call so consecutive requests report varying links.
    pub fn connection_speed(&self) -> String {
        let kbps = rand::thread_rng().gen_range(CONNECTION_SPEED_KBPS_MIN..=CONNECTION_SPEED_KBPS_MAX);
        format!("{kbps}kbps")
    }

    pub fn bandwidth_speed_kbps(&self) -> String {
        let mut rng = rand::thread_rng();
        let whole = rng.gen_range(BANDWIDTH_KBPS_MIN..=BANDWIDTH_KBPS_MAX);
        let fraction = rng.gen_range(BANDWIDTH_FRACTION_MIN..=BANDWIDTH_FRACTION_MAX);
        format!("{whole}.{fraction}")
    }

    /// `android-` followed by characters 9..28 of the device id, dashes removed.
    pub fn android_id(&self) -> Result<String, ProfileError> {
        if !self.is_initialized() {
            return Err(ProfileError::Uninitialized);
        }
        let slice = self
            .device_id
            .get(ANDROID_ID_START..ANDROID_ID_END)
            .ok_or_else(|| ProfileError::InvalidDeviceId(self.device_id.clone()))?;
        Ok(format!("{ANDROID_ID_PREFIX}{}", slice.replace('-', "")))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.created
            .map(|created| created + Duration::seconds(SESSION_LIFETIME_SECS))
    }

    pub fn valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires > now)
    }

    /// Sessions older than 90 days are rejected by Instagram. Never filled
    /// sessions are not valid either.
    pub fn valid(&self) -> bool {
        self.valid_at(Utc::now())
    }

    pub fn ensure_valid(&self) -> Result<(), ProfileError> {
        match self.created {
            None => Err(ProfileError::Uninitialized),
            Some(created) if !self.valid() => Err(ProfileError::SessionExpired { created }),
            Some(_) => Ok(()),
        }
    }

    /// Country part of the app locale, `en_US` -> `US`.
    pub fn startup_country(&self) -> &str {
        self.app_locale
            .rsplit('_')
            .next()
            .unwrap_or(&self.app_locale)
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.extra.insert(name.into(), value)
    }

    pub fn set_logged_in(&mut self, data: LoggedInAccountData) {
        if self.user_id.is_empty() {
            if let Some(pk) = data.pk {
                self.user_id = pk.to_string();
            }
        }
        info!(user_id = %self.user_id, "Session logged in");
        self.logged_in_account_data = AccountData::LoggedIn(Box::new(data));
    }

    pub fn logout(&mut self) {
        self.logged_in_account_data = AccountData::NotLoggedIn;
        self.authorization = DEFAULT_AUTHORIZATION.to_string();
        self.user_id = String::new();
        info!("Session logged out");
    }

    fn tracked_field(&mut self, header: &str) -> Option<&mut String> {
        match header {
            SET_MID => Some(&mut self.mid),
            SET_WWW_CLAIM => Some(&mut self.www_claim),
            SET_AUTHORIZATION => Some(&mut self.authorization),
            SET_DS_USER_ID => Some(&mut self.user_id),
            SET_RUR => Some(&mut self.rur),
            SET_SHBID => Some(&mut self.shbid),
            SET_SHBTS => Some(&mut self.shbts),
            SET_DIRECT_REGION_HINT => Some(&mut self.direct_region_hint),
            SET_PASSWORD_ENCRYPTION_PUB_KEY => Some(&mut self.public_api_key),
            _ => None,
        }
    }

    /// Copies the tracking values Instagram rotates through `ig-set-*` response
    /// headers. Headers that are absent leave the field untouched.
    ///
    /// Every header is decoded before anything is written: on error the state is
    /// left exactly as it was.
    #[instrument(skip_all)]
    pub fn update_from_headers(&mut self, headers: &HeaderMap) -> Result<usize, ProfileError> {
        let mut pending: Vec<(&str, String)> = Vec::new();
        let mut key_id = None;
        for (name, value) in headers.iter() {
            match name.as_str() {
                SET_PASSWORD_ENCRYPTION_KEY_ID => {
                    let raw = value.to_str()?;
                    key_id = Some(raw.trim().parse::<i64>().map_err(|_| {
                        ProfileError::InvalidHeader(format!("{name}: {raw:?} is not a key id"))
                    })?);
                }
                header if TRACKED_HEADERS.contains(&header) => {
                    pending.push((header, value.to_str()?.to_string()));
                }
                _ => trace!("Ignoring response header: {}", name),
            }
        }

        let mut updated = pending.len();
        for (header, value) in pending {
            if let Some(field) = self.tracked_field(header) {
                *field = value;
            }
        }
        if let Some(id) = key_id {
            self.public_api_key_id = id;
            updated += 1;
        }
        debug!("Updated {} session values from response headers", updated);
        Ok(updated)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(StateSettings::default())
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        if !self.authorization.is_empty() {
            value["authorization"] = Value::from("[REDACTED]");
        }
        write!(f, "{value}")
    }
}

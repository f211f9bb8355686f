/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/9/24
******************************************************************************/

// Application identity
pub const DEFAULT_SIGNATURE_KEY: &str =
    "19ce5f445dbfd9d29c59dc2a78c616a7fc090a8e018b9267bc4240a30244c53b";
pub const DEFAULT_SIGNATURE_KEY_V: &str = "4";
pub const DEFAULT_HTTP_ENGINE: &str = "Liger";
pub const DEFAULT_IG_CAPABILITIES: &str = "3brTvx0=";
pub const DEFAULT_APP_ID: &str = "567067343352427";
pub const DEFAULT_IG_VERSION: &str = "169.3.0.30.135";
pub const DEFAULT_BUILD_NUMBER: &str = "264009049";

// Simulated device (Galaxy S10)
pub const DEFAULT_MANUFACTURER: &str = "samsung";
pub const DEFAULT_ANDROID_SDK: &str = "26";
pub const DEFAULT_ANDROID_RELEASE: &str = "8.0.0";
pub const DEFAULT_DEVICE: &str = "SM-G973F";
pub const DEFAULT_MODEL: &str = "beyond1";
pub const DEFAULT_DPI: u32 = 480;
pub const DEFAULT_RESOLUTION: (u32, u32) = (1080, 2280);
pub const DEFAULT_CHIPSET: &str = "exynos9820";

// Session state
pub const DEFAULT_APP_STARTUP_COUNTRY: &str = "US";
pub const DEFAULT_DEVICE_LOCALE: &str = "en_US";
pub const DEFAULT_APP_LOCALE: &str = "en_US";
pub const DEFAULT_BANDWIDTH_TOTALBYTES_B: &str = "0";
pub const DEFAULT_BANDWIDTH_TOTALTIME_MS: &str = "0";
pub const DEFAULT_CONNECTION_TYPE: &str = "WIFI";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US";
pub const DEFAULT_ACCEPT_ENCODING: &str = "gzip, deflate";
pub const DEFAULT_ACCEPT: &str = "*/*";
pub const DEFAULT_ADS_OPT_OUT: bool = false;
pub const DEFAULT_AUTHORIZATION: &str = "";
pub const DEFAULT_WWW_CLAIM: &str = "0";
pub const DEFAULT_RUR: &str = "VLL";
pub const DEFAULT_BLOKS_VERSION_ID: &str =
    "5f56efad68e1edec7801f630b5c122704ec5378adbee6609a448f105f34a9c73";
pub const DEFAULT_BLOKS_IS_LAYOUT_RTL: &str = "false";

/// Instagram stops accepting a session 90 days after it was created.
pub const SESSION_LIFETIME_SECS: i64 = 60 * 60 * 24 * 90;

pub(crate) const ANDROID_ID_PREFIX: &str = "android-";
pub(crate) const ANDROID_ID_START: usize = 9;
pub(crate) const ANDROID_ID_END: usize = 28;

pub(crate) const CONNECTION_SPEED_KBPS_MIN: u32 = 1000;
pub(crate) const CONNECTION_SPEED_KBPS_MAX: u32 = 3700;
pub(crate) const BANDWIDTH_KBPS_MIN: u32 = 1000;
pub(crate) const BANDWIDTH_KBPS_MAX: u32 = 5000;
pub(crate) const BANDWIDTH_FRACTION_MIN: u32 = 100;
pub(crate) const BANDWIDTH_FRACTION_MAX: u32 = 999;

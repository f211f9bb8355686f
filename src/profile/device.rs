/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_ANDROID_RELEASE, DEFAULT_ANDROID_SDK, DEFAULT_CHIPSET, DEFAULT_DEVICE, DEFAULT_DPI,
    DEFAULT_MANUFACTURER, DEFAULT_MODEL, DEFAULT_RESOLUTION,
};
use crate::profile::{non_empty_or, non_zero_or};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen size in pixels, written `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution(pub u32, pub u32);

impl Resolution {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }

    fn is_empty(&self) -> bool {
        self.0 == 0 && self.1 == 0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution(DEFAULT_RESOLUTION.0, DEFAULT_RESOLUTION.1)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Resolution(width, height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let width = width.trim().parse::<u32>().map_err(|e| e.to_string())?;
        let height = height.trim().parse::<u32>().map_err(|e| e.to_string())?;
        Ok(Resolution(width, height))
    }
}

/// Caller overrides for [`DeviceIdentity`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub manufacturer: Option<String>,
    pub android_sdk_version: Option<String>,
    pub android_release: Option<String>,
    pub device: Option<String>,
    pub model: Option<String>,
    pub dpi: Option<u32>,
    pub resolution: Option<Resolution>,
    pub chipset: Option<String>,
}

/// The Android handset Instagram believes it is talking to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub manufacturer: String,
    pub android_sdk_version: String,
    pub android_release: String,
    /// Retail model number, e.g. `SM-G973F`.
    pub device: String,
    /// Vendor codename, e.g. `beyond1` for the Galaxy S10.
    pub model: String,
    pub dpi: u32,
    pub resolution: Resolution,
    pub chipset: String,
}

impl DeviceIdentity {
    pub fn new(settings: DeviceSettings) -> Self {
        Self {
            manufacturer: non_empty_or(settings.manufacturer, DEFAULT_MANUFACTURER),
            android_sdk_version: non_empty_or(settings.android_sdk_version, DEFAULT_ANDROID_SDK),
            android_release: non_empty_or(settings.android_release, DEFAULT_ANDROID_RELEASE),
            device: non_empty_or(settings.device, DEFAULT_DEVICE),
            model: non_empty_or(settings.model, DEFAULT_MODEL),
            dpi: non_zero_or(settings.dpi, DEFAULT_DPI),
            resolution: settings
                .resolution
                .filter(|r| !r.is_empty())
                .unwrap_or_default(),
            chipset: non_empty_or(settings.chipset, DEFAULT_CHIPSET),
        }
    }
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self::new(DeviceSettings::default())
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        value["resolution"] = self.resolution.to_string().into();
        write!(f, "{value}")
    }
}

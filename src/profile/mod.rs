/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Static fingerprint records: the simulated Instagram build and the simulated
//! Android handset. Both are built once and then only read, so they can be
//! shared behind an `Arc` by every session using the same app/device pair.
//!
//! Every constructor treats an *empty* override the same as a missing one:
//! `None`, `""`, `0` and `(0, 0)` all fall back to the default constant.

pub mod application;
pub mod device;

pub use application::{ApplicationIdentity, ApplicationSettings};
pub use device::{DeviceIdentity, DeviceSettings, Resolution};

use uuid::Uuid;

/// Default identifier generator: a hyphenated random (v4) UUID.
pub fn uuid4() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

pub(crate) fn non_zero_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v != 0).unwrap_or(default)
}

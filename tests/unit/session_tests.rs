use chrono::{Duration, Utc};
use ig_profile::constants::SESSION_LIFETIME_SECS;
use ig_profile::error::ProfileError;
use ig_profile::session::{SessionState, StateSettings};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn sequence() -> impl FnMut() -> String {
    let mut n = 0u32;
    move || {
        n += 1;
        format!("{n:08x}-0000-4000-8000-{n:012x}")
    }
}

#[test]
fn test_fill_produces_six_distinct_identifiers() {
    let mut state = SessionState::new(StateSettings::default());
    state.fill(sequence());
    let ids: HashSet<&str> = [
        state.uuid.as_str(),
        state.device_id.as_str(),
        state.ad_id.as_str(),
        state.session_id.as_str(),
        state.phone_id.as_str(),
        state.pigeon_session_id.as_str(),
    ]
    .into_iter()
    .collect();
    assert_eq!(ids.len(), 6);

    let created = state.created.unwrap();
    assert!((Utc::now() - created).num_seconds().abs() <= 2);
}

#[test]
fn test_refresh_is_partial() {
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    let before = state.clone();

    state.refresh_with_uuid4();
    assert_ne!(state.uuid, before.uuid);
    assert_ne!(state.device_id, before.device_id);
    assert_ne!(state.ad_id, before.ad_id);
    assert_ne!(state.session_id, before.session_id);
    assert_eq!(state.phone_id, before.phone_id);
    assert_eq!(state.pigeon_session_id, before.pigeon_session_id);
    assert_eq!(state.created, before.created);
}

#[test]
fn test_expiry() {
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    assert!(state.valid());

    state.created = Some(Utc::now() - Duration::seconds(SESSION_LIFETIME_SECS + 60));
    assert!(!state.valid());
    match state.ensure_valid() {
        Err(ProfileError::SessionExpired { created }) => assert_eq!(Some(created), state.created),
        other => panic!("expected expiry, got {other:?}"),
    }
}

#[test]
fn test_android_id_from_known_device_id() {
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    state.device_id = "01234567-89ab-cdef-0123-456789abcdef".to_string();
    assert_eq!(state.android_id().unwrap(), "android-89abcdef01234567");
}

#[test]
fn test_android_id_tracks_refresh() {
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    let first = state.android_id().unwrap();
    state.refresh_with_uuid4();
    let second = state.android_id().unwrap();
    assert_ne!(first, second);
    assert_eq!(second.len(), "android-".len() + 16);
}

#[test]
fn test_startup_country_follows_app_locale() {
    let state = SessionState::new(StateSettings {
        app_locale: Some("fr_FR".to_string()),
        ..Default::default()
    });
    assert_eq!(state.startup_country(), "FR");
    assert_eq!(SessionState::default().startup_country(), "US");
}

#[test]
fn test_speeds_vary() {
    let state = SessionState::default();
    let speeds: HashSet<String> = (0..200).map(|_| state.connection_speed()).collect();
    let bandwidths: HashSet<String> = (0..200).map(|_| state.bandwidth_speed_kbps()).collect();
    assert!(speeds.len() > 1);
    assert!(bandwidths.len() > 1);
}

use ig_profile::profile::{ApplicationIdentity, DeviceIdentity};
use ig_profile::session::SessionState;
use ig_profile::storage::session_file::StoredSession;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_restore_skips_fill() {
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    state.set_attribute("note", json!({"k": [1, 2]}));
    let stored = StoredSession::new(ApplicationIdentity::default(), DeviceIdentity::default(), state);

    let json = stored.to_json().unwrap();
    let restored = StoredSession::from_json(&json).unwrap();

    assert_eq!(restored.state.uuid, stored.state.uuid);
    assert_eq!(restored.state.device_id, stored.state.device_id);
    assert_eq!(restored.state.pigeon_session_id, stored.state.pigeon_session_id);
    assert_eq!(restored.state.created, stored.state.created);
    assert_eq!(restored.state.attribute("note"), Some(&json!({"k": [1, 2]})));
    assert_eq!(
        restored.state.android_id().unwrap(),
        stored.state.android_id().unwrap()
    );
}

#[test]
fn test_file_written_by_save_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    StoredSession::new(ApplicationIdentity::default(), DeviceIdentity::default(), state)
        .save_to_file(&path)
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["device"]["resolution"], json!([1080, 2280]));
    assert_eq!(raw["state"]["logged_in_account_data"], json!({"status": "not_logged_in"}));
}

use ig_profile::constants::*;
use ig_profile::profile::{
    ApplicationIdentity, ApplicationSettings, DeviceIdentity, DeviceSettings, Resolution,
};
use ig_profile::session::{SessionState, StateSettings};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn test_every_application_field_has_a_default() {
    let app = ApplicationIdentity::new(ApplicationSettings::default());
    assert_eq!(
        app,
        ApplicationIdentity {
            signature_key: DEFAULT_SIGNATURE_KEY.to_string(),
            signature_key_version: DEFAULT_SIGNATURE_KEY_V.to_string(),
            http_engine: DEFAULT_HTTP_ENGINE.to_string(),
            capabilities: DEFAULT_IG_CAPABILITIES.to_string(),
            id: DEFAULT_APP_ID.to_string(),
            version: DEFAULT_IG_VERSION.to_string(),
            build_number: DEFAULT_BUILD_NUMBER.to_string(),
        }
    );
}

#[test]
fn test_every_application_field_can_be_overridden() {
    let settings = ApplicationSettings {
        signature_key: Some("k".to_string()),
        signature_key_version: Some("5".to_string()),
        http_engine: Some("Okhttp".to_string()),
        capabilities: Some("cap".to_string()),
        id: Some("1".to_string()),
        version: Some("2".to_string()),
        build_number: Some("3".to_string()),
    };
    let app = ApplicationIdentity::new(settings);
    assert_eq!(app.signature_key, "k");
    assert_eq!(app.signature_key_version, "5");
    assert_eq!(app.http_engine, "Okhttp");
    assert_eq!(app.capabilities, "cap");
    assert_eq!(app.id, "1");
    assert_eq!(app.version, "2");
    assert_eq!(app.build_number, "3");
}

#[test]
fn test_device_overrides_and_defaults_mix() {
    let device = DeviceIdentity::new(DeviceSettings {
        manufacturer: Some("Google".to_string()),
        device: Some("Pixel 7".to_string()),
        model: Some("panther".to_string()),
        chipset: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(device.manufacturer, "Google");
    assert_eq!(device.device, "Pixel 7");
    assert_eq!(device.model, "panther");
    assert_eq!(device.chipset, DEFAULT_CHIPSET);
    assert_eq!(device.android_release, DEFAULT_ANDROID_RELEASE);
    assert_eq!(device.resolution, Resolution(1080, 2280));
}

#[test]
fn test_identities_are_shared_across_sessions() {
    let app = Arc::new(ApplicationIdentity::default());
    let device = Arc::new(DeviceIdentity::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let app = Arc::clone(&app);
            let device = Arc::clone(&device);
            thread::spawn(move || {
                let mut state = SessionState::new(StateSettings::default());
                state.fill_with_uuid4();
                ig_profile::transport::headers::user_agent(&app, &device, &state)
            })
        })
        .collect();

    for handle in handles {
        let agent = handle.join().unwrap();
        assert!(agent.starts_with("Instagram 169.3.0.30.135 Android (26/8.0.0;"));
    }
}

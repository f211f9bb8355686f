use ig_profile::profile::{ApplicationIdentity, DeviceIdentity};
use ig_profile::session::{LoggedInAccountData, SessionState};
use ig_profile::transport::headers::RequestHeaders;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;

#[test]
fn test_response_values_flow_into_next_request() {
    let app = ApplicationIdentity::default();
    let device = DeviceIdentity::default();
    let mut state = SessionState::default();
    state.fill_with_uuid4();

    let mut response = HeaderMap::new();
    response.insert("ig-set-x-mid", HeaderValue::from_static("Y1mid"));
    response.insert("x-ig-set-www-claim", HeaderValue::from_static("hmac.AR2"));
    response.insert("ig-set-authorization", HeaderValue::from_static("Bearer IGT:2:tok"));
    response.insert("ig-set-ig-u-ds-user-id", HeaderValue::from_static("555"));
    state.update_from_headers(&response).unwrap();

    let login = json!({"logged_in_user": {"pk": 555, "username": "five"}, "status": "ok"});
    state.set_logged_in(LoggedInAccountData::from_login_response(&login).unwrap());

    let headers = RequestHeaders::new(&app, &device, &state).build().unwrap();
    assert_eq!(headers.get("x-mid").unwrap(), "Y1mid");
    assert_eq!(headers.get("x-ig-www-claim").unwrap(), "hmac.AR2");
    assert_eq!(headers.get("authorization").unwrap(), "Bearer IGT:2:tok");
    assert_eq!(headers.get("ig-u-ds-user-id").unwrap(), "555");
    assert_eq!(state.user_id, "555");
    assert!(state.logged_in_account_data.is_logged_in());
}

#[test]
fn test_header_map_is_valid_for_reqwest() {
    let app = ApplicationIdentity::default();
    let device = DeviceIdentity::default();
    let mut state = SessionState::default();
    state.fill_with_uuid4();
    let map = RequestHeaders::new(&app, &device, &state)
        .to_header_map()
        .unwrap();
    let agent = map.get("user-agent").unwrap().to_str().unwrap();
    assert!(agent.ends_with("en_US; 264009049)"));
    assert!(map
        .get("x-ig-android-id")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("android-"));
}

/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 15/10/26
 ******************************************************************************/
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Account attributes Instagram returns in the `logged_in_user` object of a
/// successful login. Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggedInAccountData {
    pub account_badges: Option<Vec<Value>>,
    pub account_type: Option<i64>,
    pub allow_contacts_sync: Option<bool>,
    pub allowed_commenter_type: Option<String>,
    pub can_boost_post: Option<bool>,
    pub can_see_organic_insights: Option<bool>,
    pub can_see_primary_country_in_settings: Option<bool>,
    pub full_name: Option<String>,
    pub has_anonymous_profile_picture: Option<bool>,
    pub has_placed_orders: Option<bool>,
    pub interop_messaging_user_fbid: Option<i64>,
    pub is_business: Option<bool>,
    pub is_call_to_action_enabled: Option<bool>,
    pub nametag: Option<Value>,
    pub phone_number: Option<String>,
    pub pk: Option<i64>,
    pub professional_conversion_suggested_account_type: Option<i64>,
    pub profile_pic_id: Option<String>,
    pub profile_pic_url: Option<String>,
    pub show_insights_terms: Option<bool>,
    pub total_igtv_videos: Option<i64>,
    pub username: Option<String>,
    pub is_private: Option<bool>,
    pub is_verified: Option<bool>,
    pub reel_auto_archive: Option<String>,
    pub is_using_unified_inbox_for_direct: Option<bool>,
    pub can_hide_category: Option<bool>,
    pub can_hide_public_contacts: Option<bool>,
}

impl LoggedInAccountData {
    pub fn from_login_response(value: &Value) -> Result<Self, serde_json::Error> {
        let user = value.get("logged_in_user").unwrap_or(value);
        Self::deserialize(user)
    }
}

/// Whether a session has completed a login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "account", rename_all = "snake_case")]
pub enum AccountData {
    #[default]
    NotLoggedIn,
    LoggedIn(Box<LoggedInAccountData>),
}

impl AccountData {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AccountData::LoggedIn(_))
    }

    pub fn as_logged_in(&self) -> Option<&LoggedInAccountData> {
        match self {
            AccountData::LoggedIn(data) => Some(data),
            AccountData::NotLoggedIn => None,
        }
    }
}

impl fmt::Display for AccountData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            AccountData::NotLoggedIn => json!({"status": "not_logged_in"}),
            AccountData::LoggedIn(data) => json!({
                "status": "logged_in",
                "pk": data.pk,
                "username": data.username,
            }),
        };
        write!(f, "{value}")
    }
}

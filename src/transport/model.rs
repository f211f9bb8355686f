/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 16/10/26
 ******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb an endpoint is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Gender as the profile edit endpoint encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male = 1,
    Female = 2,
    PreferNotToSay = 3,
    Other = 4,
}

impl Gender {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Screen a follow/unfollow action is reported to originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    #[serde(rename = "following_sheet")]
    Profile,
    #[serde(rename = "self_unified_follow_lists")]
    FollowingList,
    #[serde(rename = "follow_list_page")]
    FollowList,
    #[serde(rename = "follow_requests")]
    FollowRequests,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Profile => "following_sheet",
            Surface::FollowingList => "self_unified_follow_lists",
            Surface::FollowList => "follow_list_page",
            Surface::FollowRequests => "follow_requests",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upload destination, sent as `configure_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhereToPost {
    Story = 3,
    Feed = 4,
}

impl WhereToPost {
    pub fn configure_mode(self) -> u8 {
        self as u8
    }
}

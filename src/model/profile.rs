use serde::{Deserialize, Serialize};

pub const PROFILE_FIELDS: [&str; 8] = [
    "name",
    "birthday",
    "role",
    "venture",
    "country",
    "email",
    "phone",
    "favorite_color",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Mentor,
    Entrepreneur,
}

impl ProfileRole {
    pub const ALL: [ProfileRole; 2] = [ProfileRole::Mentor, ProfileRole::Entrepreneur];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileRole::Mentor => "mentor",
            ProfileRole::Entrepreneur => "entrepreneur",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.as_str() == value)
    }
}

/// Birthday exactly as it was submitted: epoch milliseconds or a date string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Birthday {
    Millis(i64),
    Text(String),
}

impl From<&str> for Birthday {
    fn from(value: &str) -> Self {
        Birthday::Text(value.to_string())
    }
}

/// The single profile record kept in storage. `birthday` is kept exactly as
/// submitted so a read returns the same document that was posted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub birthday: Birthday,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ProfileRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venture: Option<String>,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub favorite_color: String,
}

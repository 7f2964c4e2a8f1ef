use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use poem_openapi::Object;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::profile::{Birthday, Profile, ProfileRole, PROFILE_FIELDS};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 100;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Debug, PartialEq, Eq, Object, Deserialize, Serialize)]
pub struct ViolationContext {
    pub key: String,
    pub label: String,
}

/// One failed schema rule.
#[derive(Clone, Debug, PartialEq, Eq, Object, Deserialize, Serialize)]
pub struct Violation {
    pub message: String,
    pub path: Vec<String>,
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub context: ViolationContext,
}

impl Violation {
    pub fn new(key: &str, kind: &str, message: String) -> Self {
        Self {
            message,
            path: vec![key.to_string()],
            kind: kind.to_string(),
            context: ViolationContext {
                key: key.to_string(),
                label: key.to_string(),
            },
        }
    }
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a date string into a UTC instant. Accepts `YYYY-MM-DD`,
/// `YYYY/MM/DD`, RFC 3339, and date-times without an offset (read as UTC).
pub fn parse_birthday(value: &str) -> Option<DateTime<Utc>> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|x| x.and_utc());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|x| x.and_utc())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

struct ProfileChecker<'a> {
    body: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> ProfileChecker<'a> {
    fn string(&mut self, key: &str, required: bool) -> Option<String> {
        match self.body.get(key) {
            None => {
                if required {
                    self.violations.push(Violation::new(
                        key,
                        "any.required",
                        format!("\"{}\" is required", key),
                    ));
                }
                None
            }
            Some(Value::String(val)) => Some(val.clone()),
            Some(_) => {
                self.violations.push(Violation::new(
                    key,
                    "string.base",
                    format!("\"{}\" must be a string", key),
                ));
                None
            }
        }
    }

    fn non_empty(&mut self, key: &str, value: Option<String>) -> Option<String> {
        let value = value?;
        if value.is_empty() {
            self.violations.push(Violation::new(
                key,
                "string.empty",
                format!("\"{}\" is not allowed to be empty", key),
            ));
            return None;
        }
        Some(value)
    }

    fn name(&mut self) -> Option<String> {
        let value = self.string("name", true)?;
        let length = value.encode_utf16().count();
        if length < NAME_MIN_LENGTH {
            self.violations.push(Violation::new(
                "name",
                "string.min",
                format!(
                    "\"name\" length must be at least {} characters long",
                    NAME_MIN_LENGTH
                ),
            ));
            return None;
        }
        if length > NAME_MAX_LENGTH {
            self.violations.push(Violation::new(
                "name",
                "string.max",
                format!(
                    "\"name\" length must be less than or equal to {} characters long",
                    NAME_MAX_LENGTH
                ),
            ));
            return None;
        }
        Some(value)
    }

    fn birthday(&mut self) -> Option<Birthday> {
        let parsed = match self.body.get("birthday") {
            None => {
                self.violations.push(Violation::new(
                    "birthday",
                    "any.required",
                    "\"birthday\" is required".to_string(),
                ));
                return None;
            }
            Some(Value::String(val)) => {
                parse_birthday(val).map(|date| (Birthday::Text(val.clone()), date))
            }
            // epoch milliseconds
            Some(Value::Number(val)) => val.as_i64().and_then(|millis| {
                DateTime::from_timestamp_millis(millis).map(|date| (Birthday::Millis(millis), date))
            }),
            Some(_) => None,
        };
        let Some((value, date)) = parsed else {
            self.violations.push(Violation::new(
                "birthday",
                "date.base",
                "\"birthday\" must be a valid date".to_string(),
            ));
            return None;
        };
        if date < DateTime::UNIX_EPOCH {
            self.violations.push(Violation::new(
                "birthday",
                "date.min",
                "\"birthday\" must be greater than or equal to \"1970-01-01T00:00:00.000Z\""
                    .to_string(),
            ));
            return None;
        }
        Some(value)
    }

    fn role(&mut self) -> Option<ProfileRole> {
        let value = self.string("role", false)?;
        let role = ProfileRole::parse(&value);
        if role.is_none() {
            let allowed: Vec<&str> = ProfileRole::ALL.iter().map(|x| x.as_str()).collect();
            self.violations.push(Violation::new(
                "role",
                "any.only",
                format!("\"role\" must be one of [{}]", allowed.join(", ")),
            ));
        }
        role
    }

    fn email(&mut self) -> Option<String> {
        let value = self.string("email", true);
        let value = self.non_empty("email", value)?;
        if !is_valid_email(&value) {
            self.violations.push(Violation::new(
                "email",
                "string.email",
                "\"email\" must be a valid email".to_string(),
            ));
            return None;
        }
        Some(value)
    }

    fn unknown_keys(&mut self) {
        for key in self.body.keys() {
            if !PROFILE_FIELDS.contains(&key.as_str()) {
                self.violations.push(Violation::new(
                    key,
                    "object.unknown",
                    format!("\"{}\" is not allowed", key),
                ));
            }
        }
    }
}

/// Checks a submitted document against the profile schema. Every failing
/// rule is reported, in field order, followed by unknown keys.
pub fn validate_profile(body: &Value) -> Result<Profile, Vec<Violation>> {
    let Some(body) = body.as_object() else {
        return Err(vec![Violation {
            message: "\"value\" must be of type object".to_string(),
            path: vec![],
            kind: "object.base".to_string(),
            context: ViolationContext {
                key: "value".to_string(),
                label: "value".to_string(),
            },
        }]);
    };
    let mut checker = ProfileChecker {
        body,
        violations: vec![],
    };

    let name = checker.name();
    let birthday = checker.birthday();
    let role = checker.role();
    let venture = checker.string("venture", false);
    let venture = checker.non_empty("venture", venture);
    let country = checker.string("country", true);
    let country = checker.non_empty("country", country);
    let email = checker.email();
    let phone = checker.string("phone", true);
    let phone = checker.non_empty("phone", phone);
    let favorite_color = checker.string("favorite_color", true);
    let favorite_color = checker.non_empty("favorite_color", favorite_color);
    checker.unknown_keys();

    match (name, birthday, country, email, phone, favorite_color) {
        (Some(name), Some(birthday), Some(country), Some(email), Some(phone), Some(favorite_color))
            if checker.violations.is_empty() =>
        {
            Ok(Profile {
                name,
                birthday,
                role,
                venture,
                country,
                email,
                phone,
                favorite_color,
            })
        }
        _ => Err(checker.violations),
    }
}

use poem_openapi::{payload::Json, ApiResponse, Enum, Object};
use serde::{Deserialize, Serialize};

use crate::model::profile::{Birthday, Profile, ProfileRole};

use super::common::{BadRequestResponse, InternalServerErrorResponse, StatusResponse};

#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProfileRoleSchema {
    Mentor,
    Entrepreneur,
}

impl From<ProfileRole> for ProfileRoleSchema {
    fn from(value: ProfileRole) -> Self {
        match value {
            ProfileRole::Mentor => ProfileRoleSchema::Mentor,
            ProfileRole::Entrepreneur => ProfileRoleSchema::Entrepreneur,
        }
    }
}

#[derive(Object, Debug, Deserialize, Serialize)]
pub struct ProfileDetailResponse {
    /// full name please
    pub name: String,
    /// when were they born? a date string or epoch milliseconds
    pub birthday: serde_json::Value,
    /// would they like to be or get mentoring
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ProfileRoleSchema>,
    /// the venture, optional
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venture: Option<String>,
    /// what country are they located in
    pub country: String,
    /// what email is good for them?
    pub email: String,
    /// what phone number is good for them?
    pub phone: String,
    /// what is their favorite color?
    pub favorite_color: String,
}

impl From<Profile> for ProfileDetailResponse {
    fn from(value: Profile) -> Self {
        Self {
            name: value.name,
            birthday: match value.birthday {
                Birthday::Millis(val) => serde_json::Value::from(val),
                Birthday::Text(val) => serde_json::Value::from(val),
            },
            role: value.role.map(ProfileRoleSchema::from),
            venture: value.venture,
            country: value.country,
            email: value.email,
            phone: value.phone,
            favorite_color: value.favorite_color,
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileDetailResponse>),

    #[oai(status = 404)]
    NotFound(Json<StatusResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileCreateResponses {
    #[oai(status = 201)]
    Created(Json<StatusResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 406)]
    NotAcceptable(Json<StatusResponse>),

    #[oai(status = 413)]
    PayloadTooLarge(Json<StatusResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

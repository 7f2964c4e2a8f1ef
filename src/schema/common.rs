use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::core::validation::Violation;

/// Plain `{ok, message}` body shared by success and rejection responses.
#[derive(Object, Deserialize, Serialize)]
pub struct StatusResponse {
    pub ok: bool,
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            ok: true,
            message: Some(message.to_string()),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            ok: false,
            message: Some(message.to_string()),
        }
    }
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            ok: false,
            message: None,
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct BadRequestResponse {
    pub ok: bool,
    pub message: String,
    /// raw body, set when it could not be parsed as json
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<Violation>>,
}

impl BadRequestResponse {
    pub fn invalid_json(submitted: String) -> Self {
        Self {
            ok: false,
            message: "invalid json".to_string(),
            submitted: Some(submitted),
            error: None,
        }
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        Self {
            ok: false,
            message: "your request did not pass validation".to_string(),
            submitted: None,
            error: Some(violations),
        }
    }
}

#[derive(Object, Deserialize, Serialize)]
pub struct InternalServerErrorResponse {
    pub ok: bool,
    pub message: String,
    pub module: String,
    pub function: String,
    pub step: String,
    pub error: String,
}

impl InternalServerErrorResponse {
    pub fn new(module: &str, function: &str, step: &str, error: &str) -> Self {
        tracing::error!("{module}::{function} failed at {step}: {error}");
        Self {
            ok: false,
            message: "internal server error".to_string(),
            module: module.to_string(),
            function: function.to_string(),
            step: step.to_string(),
            error: error.to_string(),
        }
    }
}

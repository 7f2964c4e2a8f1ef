use std::sync::Arc;

use poem::{http::header, web::Data, Body, Request};
use poem_openapi::{payload::Json, OpenApi, Tags};
use tokio::io::AsyncReadExt;

use crate::{
    core::{
        utils::{accepts, content_type_is, JSON_MEDIA_TYPE},
        validation::validate_profile,
    },
    schema::{
        common::{BadRequestResponse, InternalServerErrorResponse, StatusResponse},
        profile::{ProfileCreateResponses, ProfileDetailResponses},
    },
    AppState,
};

#[derive(Tags)]
enum ApiProfileTags {
    Profile,
}

pub struct ApiProfile;

#[OpenApi]
impl ApiProfile {
    #[oai(path = "/profile", method = "get", tag = "ApiProfileTags::Profile")]
    async fn get_profile_api(&self, state: Data<&Arc<AppState>>) -> ProfileDetailResponses {
        let data = match state.storage.get() {
            Ok(val) => val,
            Err(err) => {
                return ProfileDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.profile",
                        "get_profile_api",
                        "get profile from storage",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(profile) => ProfileDetailResponses::Ok(Json(profile.into())),
            None => ProfileDetailResponses::NotFound(Json(StatusResponse::failed(
                "no profile has been saved yet",
            ))),
        }
    }

    #[oai(path = "/profile", method = "post", tag = "ApiProfileTags::Profile")]
    async fn create_profile_api(
        &self,
        req: &Request,
        body: Body,
        state: Data<&Arc<AppState>>,
    ) -> ProfileCreateResponses {
        // Content negotiation
        if !accepts(req.header(header::ACCEPT), JSON_MEDIA_TYPE) {
            return ProfileCreateResponses::NotAcceptable(Json(StatusResponse::failed(&format!(
                "must accept content type '{}'",
                JSON_MEDIA_TYPE
            ))));
        }
        let content_type = req.header(header::CONTENT_TYPE);
        if !content_type_is(content_type, JSON_MEDIA_TYPE) {
            return ProfileCreateResponses::NotAcceptable(Json(StatusResponse::failed(&format!(
                "must send content type '{}', found '{}'",
                JSON_MEDIA_TYPE,
                content_type.unwrap_or_default()
            ))));
        }

        // Read the whole body before looking at it, one byte past the cap
        let mut buf: Vec<u8> = vec![];
        let limit = state.max_body_size as u64 + 1;
        if let Err(err) = body
            .into_async_read()
            .take(limit)
            .read_to_end(&mut buf)
            .await
        {
            return ProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "create_profile_api",
                    "read request body",
                    &err.to_string(),
                ),
            ));
        }
        if buf.len() > state.max_body_size {
            return ProfileCreateResponses::PayloadTooLarge(Json(StatusResponse::failed(&format!(
                "request body must not exceed {} bytes",
                state.max_body_size
            ))));
        }
        let raw = String::from_utf8_lossy(&buf).into_owned();
        let json: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(val) => val,
            Err(_) => {
                return ProfileCreateResponses::BadRequest(Json(BadRequestResponse::invalid_json(
                    raw,
                )))
            }
        };

        let profile = match validate_profile(&json) {
            Ok(val) => val,
            Err(violations) => {
                tracing::info!("profile rejected with {} violation(s)", violations.len());
                return ProfileCreateResponses::BadRequest(Json(BadRequestResponse::validation(
                    violations,
                )));
            }
        };

        if let Err(err) = state.storage.save(&profile) {
            return ProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "create_profile_api",
                    "save profile to storage",
                    &err.to_string(),
                ),
            ));
        }
        tracing::info!("profile saved for {}", profile.name);
        ProfileCreateResponses::Created(Json(StatusResponse::ok("thanks!")))
    }
}

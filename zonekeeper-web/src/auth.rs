//! Bearer-token authentication extractors.
//!
//! Tokens are static entries in the settings file; each token maps to a
//! user id, a role, and a quota team. `AuthedUser` accepts any valid
//! token, `AdminUser` additionally requires the `ADMIN` role.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};

use zonekeeper_core::error::CoreError;
use zonekeeper_core::types::AuthUser;

use crate::error::ApiError;
use crate::settings::Settings;

fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| ApiError(CoreError::Storage("settings not configured".to_string())))?;

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError(CoreError::Unauthorized))?;

    settings
        .resolve_token(token)
        .ok_or(ApiError(CoreError::Unauthorized))
}

/// Any authenticated caller.
pub struct AuthedUser(pub AuthUser);

impl FromRequest for AuthedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Self))
    }
}

/// Authenticated caller with the `ADMIN` role.
#[derive(Debug)]
pub struct AdminUser(pub AuthUser);

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|user| {
            if user.is_admin() {
                Ok(Self(user))
            } else {
                Err(ApiError(CoreError::Forbidden(
                    "admin role required".to_string(),
                )))
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::ResponseError;

    use zonekeeper_core::types::Role;

    use crate::settings::TokenEntry;

    fn settings_with_tokens() -> Settings {
        Settings {
            tokens: vec![
                TokenEntry {
                    token: "admin-token".to_string(),
                    user_id: "u-admin".to_string(),
                    role: Role::Admin,
                    team: "staff".to_string(),
                },
                TokenEntry {
                    token: "user-token".to_string(),
                    user_id: "u-1".to_string(),
                    role: Role::User,
                    team: "free".to_string(),
                },
            ],
            ..Settings::default()
        }
    }

    #[actix_web::test]
    async fn missing_or_unknown_token_is_unauthorized() {
        let data = web::Data::new(settings_with_tokens());

        let req = TestRequest::default().app_data(data.clone()).to_http_request();
        let err = authenticate(&req).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let req = TestRequest::default()
            .app_data(data)
            .insert_header((AUTHORIZATION, "Bearer wrong"))
            .to_http_request();
        let err = authenticate(&req).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn admin_extractor_rejects_plain_users() {
        let data = web::Data::new(settings_with_tokens());
        let req = TestRequest::default()
            .app_data(data)
            .insert_header((AUTHORIZATION, "Bearer user-token"))
            .to_http_request();

        let user = AuthedUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(user.0.id, "u-1");

        let err = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_token_passes_both_extractors() {
        let data = web::Data::new(settings_with_tokens());
        let req = TestRequest::default()
            .app_data(data)
            .insert_header((AUTHORIZATION, "Bearer admin-token"))
            .to_http_request();

        let admin = AdminUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert!(admin.0.is_admin());
    }
}

//! Cloudflare credential endpoints (admin only).

use actix_web::{web, HttpResponse};

use zonekeeper_app::AppState;
use zonekeeper_core::types::ConfigSubmission;

use crate::auth::AdminUser;
use crate::error::ApiResult;

/// GET /config — current credential set, secrets included.
pub async fn get_config(state: web::Data<AppState>, _admin: AdminUser) -> ApiResult<HttpResponse> {
    let config = state.config_service.get_config().await?;
    Ok(HttpResponse::Ok().json(config))
}

/// POST /config — save credentials and sync the zone list.
pub async fn save_config(
    state: web::Data<AppState>,
    _admin: AdminUser,
    body: web::Json<ConfigSubmission>,
) -> ApiResult<HttpResponse> {
    let outcome = state.config_service.save_config(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

//! Domain listing, flag toggling, and zone refresh endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use zonekeeper_app::AppState;
use zonekeeper_core::types::{DomainFlagPatch, ServiceType};

use crate::auth::{AdminUser, AuthedUser};
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    /// Filter by service; absent = all synced domains.
    #[serde(rename = "type")]
    pub service: Option<ServiceType>,
}

/// GET /domains — admin view with flags and zone ids.
pub async fn list_domains(state: web::Data<AppState>, _admin: AdminUser) -> ApiResult<HttpResponse> {
    let domains = state.domain_service.list_domains().await?;
    Ok(HttpResponse::Ok().json(domains))
}

/// POST /domains/refresh — re-pull zones with the stored credentials.
pub async fn refresh_domains(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> ApiResult<HttpResponse> {
    let outcome = state.config_service.refresh_domains().await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// PATCH /domains/{id} — toggle authorization flags.
pub async fn patch_domain(
    state: web::Data<AppState>,
    _admin: AdminUser,
    path: web::Path<String>,
    body: web::Json<DomainFlagPatch>,
) -> ApiResult<HttpResponse> {
    let domain = state
        .domain_service
        .set_flags(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(domain))
}

/// GET /domains/available?type=dns — authorized projection for users.
pub async fn available_domains(
    state: web::Data<AppState>,
    _user: AuthedUser,
    query: web::Query<AvailableQuery>,
) -> ApiResult<HttpResponse> {
    let domains = state.domain_service.list_authorized(query.service).await?;
    Ok(HttpResponse::Ok().json(domains))
}

/// GET /domains/short-enabled — public flat list of short-link domains.
pub async fn short_enabled_domains(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let names = state.domain_service.short_enabled_names().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "domains": names })))
}

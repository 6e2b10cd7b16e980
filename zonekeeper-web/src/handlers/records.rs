//! DNS record mutation endpoints.
//!
//! Every mutation is remote-first: Cloudflare is called before the local
//! mirror is touched, and gate/reservation checks run before either.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use zonekeeper_app::AppState;
use zonekeeper_core::types::RecordDraft;

use crate::auth::AuthedUser;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRecordRequest {
    pub domain_id: String,
    #[serde(flatten)]
    pub record: RecordDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    pub record_id: String,
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(flatten)]
    pub record: RecordDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordRequest {
    pub record_id: String,
    #[serde(default)]
    pub zone_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStateRequest {
    pub record_id: String,
    pub zone_id: String,
    /// Probe target, e.g. the record's fully qualified name.
    pub target: String,
}

/// POST /records/add
pub async fn add_record(
    state: web::Data<AppState>,
    user: AuthedUser,
    body: web::Json<AddRecordRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let record = state
        .record_service
        .create_record(&user.0, &body.domain_id, body.record)
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /records/update
pub async fn update_record(
    state: web::Data<AppState>,
    user: AuthedUser,
    body: web::Json<UpdateRecordRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let record = state
        .record_service
        .update_record(&user.0, &body.record_id, body.domain_id.as_deref(), body.record)
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// POST /records/delete
pub async fn delete_record(
    state: web::Data<AppState>,
    user: AuthedUser,
    body: web::Json<DeleteRecordRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    state
        .record_service
        .delete_record(&user.0, &body.record_id, body.zone_id.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "record deleted" })))
}

/// PUT /records/update — probe reachability and write back the active bit.
pub async fn update_record_state(
    state: web::Data<AppState>,
    user: AuthedUser,
    body: web::Json<RecordStateRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let active = state
        .record_service
        .update_record_state(&user.0, &body.record_id, &body.zone_id, &body.target)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "active": active })))
}

//! Mailbox registration endpoints.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use zonekeeper_app::AppState;

use crate::auth::AuthedUser;
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct CreateMailboxRequest {
    pub address: String,
}

/// GET /emails — the caller's registered addresses.
pub async fn list_mailboxes(
    state: web::Data<AppState>,
    user: AuthedUser,
) -> ApiResult<HttpResponse> {
    let mailboxes = state.mailbox_service.list_mailboxes(&user.0).await?;
    Ok(HttpResponse::Ok().json(mailboxes))
}

/// POST /emails — register an address on a mail-enabled domain.
pub async fn create_mailbox(
    state: web::Data<AppState>,
    user: AuthedUser,
    body: web::Json<CreateMailboxRequest>,
) -> ApiResult<HttpResponse> {
    let mailbox = state
        .mailbox_service
        .create_mailbox(&user.0, &body.address)
        .await?;
    Ok(HttpResponse::Ok().json(mailbox))
}

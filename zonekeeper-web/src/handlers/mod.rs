//! HTTP handlers, grouped by resource.

mod config;
mod domains;
mod emails;
mod records;

use actix_web::web;

/// Register every route under the caller-supplied scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/config")
            .route(web::get().to(config::get_config))
            .route(web::post().to(config::save_config)),
    )
    .service(web::resource("/domains").route(web::get().to(domains::list_domains)))
    .service(web::resource("/domains/refresh").route(web::post().to(domains::refresh_domains)))
    .service(web::resource("/domains/available").route(web::get().to(domains::available_domains)))
    .service(
        web::resource("/domains/short-enabled")
            .route(web::get().to(domains::short_enabled_domains)),
    )
    .service(web::resource("/domains/{id}").route(web::patch().to(domains::patch_domain)))
    .service(web::resource("/records/add").route(web::post().to(records::add_record)))
    .service(
        web::resource("/records/update")
            .route(web::post().to(records::update_record))
            .route(web::put().to(records::update_record_state)),
    )
    .service(web::resource("/records/delete").route(web::post().to(records::delete_record)))
    .service(
        web::resource("/emails")
            .route(web::get().to(emails::list_mailboxes))
            .route(web::post().to(emails::create_mailbox)),
    );
}

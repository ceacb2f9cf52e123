//! Route table for the browser pages

use actix_web::web;

use super::export::export_links;
use super::links::{
    add_form, add_submit, delete, edit_form, edit_submit, import_page, import_submit, index,
    search,
};
use super::stats::stats_page;

/// Page routes. Registered after `health_routes()` because the empty scope
/// prefix matches every path.
pub fn page_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(index))
        .route("/search", web::get().to(search))
        .route("/add", web::get().to(add_form))
        .route("/add", web::post().to(add_submit))
        .route("/edit/{id}", web::get().to(edit_form))
        .route("/edit/{id}", web::post().to(edit_submit))
        .route("/delete/{id}", web::post().to(delete))
        .route("/stats", web::get().to(stats_page))
        .route("/export/{format}", web::get().to(export_links))
        .route("/import", web::get().to(import_page))
        .route("/import", web::post().to(import_submit))
}

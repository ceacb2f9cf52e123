use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;

use crate::api::pages;
use crate::storage::LinkStore;

use super::helpers::html_response;

/// GET /stats
pub async fn stats_page(store: web::Data<Arc<LinkStore>>) -> ActixResult<impl Responder> {
    let page = store.stats().await.and_then(|stats| pages::render_stats(&stats));
    Ok(html_response(page))
}

//! Download endpoints for the full link list

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::info;

use crate::errors::WeblinksError;
use crate::services::ExportFormat;
use crate::storage::LinkStore;

use super::helpers::error_from_weblinks;

/// GET /export/{format}: `csv` or `json`, anything else is a 400
pub async fn export_links(
    path: web::Path<String>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let result = async {
        let format: ExportFormat = path.parse()?;
        let links = store.list_all().await?;
        let body = format.render(&links)?;
        info!("Exporting {} links as {:?}", links.len(), format);
        Ok::<_, WeblinksError>((format, body))
    }
    .await;

    Ok(match result {
        Ok((format, body)) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, format.content_type()))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", format.file_name()),
            ))
            .body(body),
        Err(e) => error_from_weblinks(&e),
    })
}

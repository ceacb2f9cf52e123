//! Link list, search and CRUD pages

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, trace};

use crate::api::pages;
use crate::services::LinkForm;
use crate::storage::LinkStore;

use super::helpers::{error_from_weblinks, html_response, parse_link_id, redirect_home};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub group: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /: all links, or one group with `?group=`
pub async fn index(
    query: web::Query<IndexQuery>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let group = query.group.as_deref().filter(|g| !g.is_empty());
    trace!("Index request, group filter: {:?}", group);

    let links = match group {
        Some(g) => store.list_by_group(g).await,
        None => store.list_all().await,
    };

    let page = async {
        let links = links?;
        let groups = store.distinct_groups().await?;
        pages::render_index(&links, &groups, "", group)
    }
    .await;

    Ok(html_response(page))
}

/// GET /search?q=: substring search; a missing `q` lists everything
pub async fn search(
    query: web::Query<SearchQuery>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let q = query.q.as_deref().unwrap_or_default();
    trace!("Search request: {:?}", q);

    let page = async {
        let links = store.search(q).await?;
        let groups = store.distinct_groups().await?;
        pages::render_index(&links, &groups, q, None)
    }
    .await;

    Ok(html_response(page))
}

/// GET /add
pub async fn add_form() -> ActixResult<impl Responder> {
    Ok(html_response(pages::render_add_form(
        &LinkForm::default(),
        None,
    )))
}

/// POST /add
///
/// A URL without an http(s) prefix re-renders the form (200) with the error.
pub async fn add_submit(
    form: web::Form<LinkForm>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let form = form.into_inner();

    let new_link = match form.clone().validated() {
        Ok(new_link) => new_link,
        Err(e) => {
            info!("Rejected link submission: {}", e.message());
            return Ok(html_response(pages::render_add_form(
                &form,
                Some(e.message()),
            )));
        }
    };

    Ok(match store.create(new_link).await {
        Ok(_) => redirect_home(),
        Err(e) => error_from_weblinks(&e),
    })
}

/// GET /edit/{id}
pub async fn edit_form(
    path: web::Path<String>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let result = async {
        let id = parse_link_id(&path)?;
        store.get(id).await
    }
    .await;

    Ok(html_response(result.and_then(|link| pages::render_edit_form(&link))))
}

/// POST /edit/{id}: unknown ids are ignored, the store treats them as no-ops
pub async fn edit_submit(
    path: web::Path<String>,
    form: web::Form<LinkForm>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let id = match parse_link_id(&path) {
        Ok(id) => id,
        Err(e) => return Ok(error_from_weblinks(&e)),
    };

    Ok(match store.update(id, form.into_inner().into_new_link()).await {
        Ok(()) => redirect_home(),
        Err(e) => error_from_weblinks(&e),
    })
}

/// POST /delete/{id}
pub async fn delete(
    path: web::Path<String>,
    store: web::Data<Arc<LinkStore>>,
) -> ActixResult<impl Responder> {
    let id = match parse_link_id(&path) {
        Ok(id) => id,
        Err(e) => return Ok(error_from_weblinks(&e)),
    };

    Ok(match store.delete(id).await {
        Ok(()) => redirect_home(),
        Err(e) => error_from_weblinks(&e),
    })
}

/// GET /import: informational page, upload is disabled
pub async fn import_page() -> ActixResult<HttpResponse> {
    Ok(html_response(pages::render_import()))
}

/// POST /import: accepts nothing, goes back home
pub async fn import_submit() -> ActixResult<HttpResponse> {
    trace!("Import submission ignored");
    Ok(redirect_home())
}

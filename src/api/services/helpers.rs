//! Response helpers shared by the page handlers

use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use tracing::{error, warn};

use crate::api::pages;
use crate::errors::WeblinksError;

/// 200 with the rendered page, or the error page when rendering failed
pub fn html_response(rendered: Result<String, WeblinksError>) -> HttpResponse {
    match rendered {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => error_from_weblinks(&e),
    }
}

/// 302 back to the link list
pub fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

pub fn error_page(status: StatusCode, message: &str) -> HttpResponse {
    match pages::render_error(status.as_u16(), message) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("{}", e.format_simple());
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(message.to_string())
        }
    }
}

/// 从 WeblinksError 构建错误页（自动映射 HTTP 状态码）
pub fn error_from_weblinks(err: &WeblinksError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("{}", err.format_simple());
    } else {
        warn!("{}", err.format_simple());
    }
    error_page(status, err.message())
}

/// Path ids that do not parse as integers are treated as unknown links.
pub fn parse_link_id(raw: &str) -> Result<i64, WeblinksError> {
    raw.parse::<i64>()
        .map_err(|_| WeblinksError::not_found(format!("Link not found: {}", raw)))
}

//! HTTP routing and request handlers.
//!
//! One catch-all dispatcher classifies every request by its path suffix:
//! empty path serves the index, `.md` the document handler, known image
//! extensions the image handler, and everything else falls through to the
//! attachment handler. A guard middleware in front rejects non-GET methods
//! and enforces the optional shared credential on all routes except the
//! reserved favicon and stylesheet paths.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use percent_encoding::percent_decode_str;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::assets::{DOC_CSS, DOC_CSS_TYPE};
use crate::catalog;
use crate::config::BasicAuth;
use crate::markdown::{self, MarkdownRenderer};
use crate::name_index::NameIndex;
use crate::pages;
use crate::sniff::detect_content_type;
use crate::state::AppState;

/// Image extensions routed to the image handler (lowercase).
const IMAGE_SUFFIXES: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/favicon.ico", get(favicon))
        .route("/doc.css", get(stylesheet))
        .fallback(dispatch)
        .layer(middleware::from_fn_with_state(Arc::clone(&state), guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Guard middleware: method check and shared-credential check.
///
/// The favicon and stylesheet paths stay reachable without credentials so
/// the browser can style the login-challenged pages.
async fn guard(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    if req.method() != Method::GET {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let path = req.uri().path();
    if path == "/favicon.ico" || path == "/doc.css" {
        return next.run(req).await;
    }

    if let Some(auth) = &state.auth {
        if !credentials_match(req.headers(), auth) {
            warn!(path = %req.uri(), status = 401, "missing or invalid credentials");
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, r#"Basic realm="docview""#)],
                "Unauthorized",
            )
                .into_response();
        }
    }

    next.run(req).await
}

/// Checks a Basic authorization header against the shared credential.
fn credentials_match(headers: &HeaderMap, auth: &BasicAuth) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let Some(encoded) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = BASE64.decode(encoded.trim()) else {
        return false;
    };
    let Ok(decoded) = String::from_utf8(decoded) else {
        return false;
    };

    match decoded.split_once(':') {
        Some((user, password)) => user == auth.user && password == auth.password,
        None => false,
    }
}

/// Catch-all dispatcher: classifies the request by path suffix.
async fn dispatch(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let raw = uri.path().trim_start_matches('/');
    // Exported attachment names may contain spaces and other characters
    // that arrive percent-encoded
    let name = percent_decode_str(raw).decode_utf8_lossy().into_owned();

    if name.is_empty() {
        return index(&state, &uri);
    }

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".md") {
        document(&state, &uri, &name)
    } else if IMAGE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        serve_indexed(&uri, &name, &state.images, &state.image_dir)
    } else {
        serve_indexed(&uri, &name, &state.attachments, &state.attachment_dir)
    }
}

async fn favicon(uri: Uri) -> Response {
    not_found(&uri)
}

async fn stylesheet() -> Response {
    ([(header::CONTENT_TYPE, DOC_CSS_TYPE)], DOC_CSS).into_response()
}

/// Renders the index listing of all cataloged documents.
fn index(state: &AppState, uri: &Uri) -> Response {
    info!(path = %uri, status = 200, "ok");
    Html(pages::index_page(&state.documents).into_string()).into_response()
}

/// Renders one markdown document through the rewrite pipeline.
///
/// Document names resolve directly against the markdown directory, never
/// through a name index. Names with path separators or parent components
/// are treated as not found.
fn document(state: &AppState, uri: &Uri, name: &str) -> Response {
    if name.contains('/') || name.contains("..") {
        return not_found(uri);
    }

    let path = state.markdown_dir.join(name);
    if !path.is_file() {
        return not_found(uri);
    }

    match catalog::head_and_body(&path) {
        Ok((title, body)) => {
            let source = markdown::replace_shortcodes(&state.rewriter.rewrite(&body));
            let html_body = MarkdownRenderer::new().render(&source);
            info!(path = %uri, status = 200, "ok");
            Html(pages::document_page(&title, &html_body).into_string()).into_response()
        }
        Err(err) => internal_error(uri, &path, &err),
    }
}

/// Serves an image or attachment resolved through its name index.
fn serve_indexed(uri: &Uri, name: &str, index: &NameIndex, dir: &Path) -> Response {
    let Some(actual) = index.resolve(name) else {
        return not_found(uri);
    };

    let path = dir.join(actual);
    match fs::read(&path) {
        Ok(content) => {
            let content_type = detect_content_type(&content);
            info!(path = %uri, status = 200, "ok");
            ([(header::CONTENT_TYPE, content_type)], content).into_response()
        }
        Err(err) => internal_error(uri, &path, &err),
    }
}

fn not_found(uri: &Uri) -> Response {
    info!(path = %uri, status = 404, "not found");
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

fn internal_error(uri: &Uri, path: &Path, err: &std::io::Error) -> Response {
    error!(path = %uri, status = 500, file = %path.display(), error = %err, "read failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

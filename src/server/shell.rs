//! Application shell: the providers wrapped around the router
//!
//! Nesting order, outermost first:
//!
//! 1. theme: `Extension<Arc<Theme>>`
//! 2. scroll restoration, marks each request so pages reset their scroll
//! 3. locale: `Extension<Arc<Locale>>` and the `Content-Language` header
//! 4. router
//!
//! With axum the last `.layer()` call is the outermost, so [`AppShell::wrap`]
//! applies them innermost first.

use crate::locale::Locale;
use crate::theme::Theme;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Extension, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Response header set on pages that reset their scroll position
pub const SCROLL_RESTORATION_HEADER: HeaderName = HeaderName::from_static("x-scroll-restoration");

/// Scroll behavior requested by the shell, read by page handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRestoration {
    /// Start every navigation at the top of the page
    Top,
}

#[derive(Clone)]
pub struct AppShell {
    theme: Arc<Theme>,
    locale: Arc<Locale>,
}

impl AppShell {
    pub fn new(theme: Arc<Theme>, locale: Arc<Locale>) -> Self {
        Self { theme, locale }
    }

    /// Wrap `router` in the shell providers
    pub fn wrap(&self, router: Router) -> Router {
        router
            .layer(middleware::from_fn_with_state(
                self.locale.clone(),
                content_language,
            ))
            .layer(Extension(self.locale.clone()))
            .layer(middleware::from_fn(scroll_top))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(Extension(self.theme.clone())),
            )
    }
}

async fn scroll_top(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(ScrollRestoration::Top);
    let mut response = next.run(request).await;

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));
    if is_html {
        response
            .headers_mut()
            .insert(SCROLL_RESTORATION_HEADER, HeaderValue::from_static("top"));
    }

    response
}

async fn content_language(
    State(locale): State<Arc<Locale>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_LANGUAGE,
        HeaderValue::from_static(locale.code),
    );
    response
}

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use tracing::warn;

use crate::application::use_cases::pages::render_page::RenderPage;
use crate::bootstrap::app_context::AppContext;

fn is_page_request(path: &str) -> bool {
    path == "/" || path.ends_with(".html")
}

/// Serves corpus pages with the navigation controls added. Anything else,
/// and pages that cannot be read, fall through to the static file service.
pub async fn inject_navigation(
    State(ctx): State<AppContext>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let method = req.method();
    if (method != Method::GET && method != Method::HEAD) || !is_page_request(&path) {
        return next.run(req).await;
    }

    let corpus = ctx.corpus();
    let uc = RenderPage {
        corpus: corpus.as_ref(),
    };
    match uc.execute(&path).await {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => next.run(req).await,
        Err(err) => {
            warn!(path = %path, error = ?err, "page_render_failed");
            next.run(req).await
        }
    }
}

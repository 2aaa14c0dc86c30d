pub mod drum;
pub mod error;
pub mod health;
pub mod navigation;
pub mod pages;

use axum::{Router, middleware};
use tower_http::services::ServeDir;

use crate::bootstrap::app_context::AppContext;

/// API routes, client scripts under `/js`, and the corpus itself with
/// navigation injected into its pages.
pub fn router(ctx: AppContext) -> Router {
    let public_dir = std::path::PathBuf::from(&ctx.cfg.public_dir);
    let assets_dir = std::path::PathBuf::from(&ctx.cfg.assets_dir);

    Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api", navigation::routes(ctx.clone()))
        .nest("/api", drum::routes(ctx.clone()))
        .nest_service("/js", ServeDir::new(assets_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(middleware::from_fn_with_state(ctx, pages::inject_navigation))
}

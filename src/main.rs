use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use axum::{Json, routing::get};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use kdoc::bootstrap::app_context::{AppContext, AppServices};
use kdoc::bootstrap::config::Config;
use kdoc::infrastructure::corpus::FsCorpus;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(
            kdoc::presentation::http::navigation::next_page,
            kdoc::presentation::http::navigation::prev_page,
            kdoc::presentation::http::navigation::random_page,
            kdoc::presentation::http::navigation::find_page,
            kdoc::presentation::http::drum::drum_layout,
            kdoc::presentation::http::health::health,
        ),
        components(schemas(
            kdoc::presentation::http::navigation::NextResponse,
            kdoc::presentation::http::navigation::PrevResponse,
            kdoc::presentation::http::navigation::RandomResponse,
            kdoc::presentation::http::navigation::PageLookupResponse,
            kdoc::presentation::http::drum::SegmentPosition,
            kdoc::presentation::http::drum::SegmentItem,
            kdoc::presentation::http::drum::LayoutResponse,
            kdoc::presentation::http::error::ErrorResponse,
            kdoc::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Navigation", description = "Sequential and random KDOC navigation"),
            (name = "Drum scroll", description = "Segment geometry for the 3D scroll view"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "kdoc=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting KDOC viewer");

    let corpus = Arc::new(FsCorpus::new(&cfg.public_dir));
    if !tokio::fs::try_exists(corpus.root()).await.unwrap_or(false) {
        tracing::warn!(dir = %cfg.public_dir, "Corpus dir does not exist yet");
    }

    let services = AppServices::new(corpus);
    let ctx = AppContext::new(cfg.clone(), services);

    let methods = [http::Method::GET, http::Method::HEAD, http::Method::OPTIONS];
    let cors = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods),
        Some(Err(_)) if cfg.is_production => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
            .allow_methods(methods),
        // Development convenience
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods),
    };

    let app = kdoc::presentation::http::router(ctx)
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            error!(%addr, "Port already in use; set PORT to another value (e.g. PORT=3334)");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    info!(%addr, public_dir = %cfg.public_dir, "KDOC viewer listening");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to listen for shutdown signal");
        }
    };
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

use std::env;

use crate::application::services::drum_scroll::DrumGeometry;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub public_dir: String,
    pub assets_dir: String,
    pub frontend_url: Option<String>,
    pub drum: DrumGeometry,
    pub is_production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3333,
            public_dir: "./public".into(),
            assets_dir: "./three".into(),
            frontend_url: None,
            drum: DrumGeometry::default(),
            is_production: false,
        }
    }
}

fn parsed_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(fallback)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let port = parsed_or("PORT", defaults.port);
        let public_dir = env::var("PUBLIC_DIR").unwrap_or(defaults.public_dir);
        let assets_dir = env::var("ASSETS_DIR").unwrap_or(defaults.assets_dir);
        let frontend_url = env::var("FRONTEND_URL").ok().and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.trim_end_matches('/').to_string())
            }
        });
        let drum = DrumGeometry {
            segment_height: parsed_or("DRUM_SEGMENT_HEIGHT", defaults.drum.segment_height),
            segment_gap: parsed_or("DRUM_SEGMENT_GAP", defaults.drum.segment_gap),
            top_padding: parsed_or("DRUM_TOP_PADDING", defaults.drum.top_padding),
            tilt_angle: parsed_or("DRUM_TILT_ANGLE", defaults.drum.tilt_angle),
        };
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        drum.validate()
            .map_err(|e| anyhow::anyhow!("invalid drum geometry: {e}"))?;

        // Production hardening: CORS needs an explicit origin
        if is_production
            && !frontend_url
                .as_deref()
                .is_some_and(|u| u.starts_with("http"))
        {
            anyhow::bail!(
                "FRONTEND_URL must be set to a full origin in production (e.g., https://docs.example.com)"
            );
        }

        Ok(Self {
            port,
            public_dir,
            assets_dir,
            frontend_url,
            drum,
            is_production,
        })
    }
}

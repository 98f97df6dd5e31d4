use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FONT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/NotoSansJP-Regular.ttf");
const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// How the process is being run.
///
/// `Hosted` means a platform adapter owns the socket and mounts the router
/// returned by `build_app`; the binary must not bind a port itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Local,
    Hosted,
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults point at the assets bundled with the crate.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub run_mode: RunMode,
    pub rust_log: String,
    /// Optional Japanese display font. Absence is not an error.
    pub font_path: PathBuf,
    /// Directory served for unmatched paths (CSS, images, the font file).
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        let run_mode = if std::env::var_os("VERCEL").is_some() {
            RunMode::Hosted
        } else {
            RunMode::Local
        };

        Ok(Config {
            port,
            run_mode,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            font_path: path_env("FONT_PATH", DEFAULT_FONT_PATH),
            public_dir: path_env("PUBLIC_DIR", DEFAULT_PUBLIC_DIR),
        })
    }

    /// Defaults only, without touching the environment. Used by tests and embedders.
    pub fn bundled() -> Self {
        Config {
            port: DEFAULT_PORT,
            run_mode: RunMode::Local,
            rust_log: "info".to_string(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

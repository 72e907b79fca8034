/*
 * Responsibility
 * - 環境変数の読み込み (APP_VERSION, APP_ENV)
 * - listen addr は 0.0.0.0:8080 固定
 * - 起動時に一度だけ解決し、以降は immutable (失敗しない)
 */
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_VERSION: &str = "0.1.0";
pub const PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    // Shown on GET /
    pub version: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    ///
    /// `from_env` is this over the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        // Blank counts as unset; anything else is shown verbatim.
        let version = lookup("APP_VERSION")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Self {
            addr,
            app_env,
            version,
        }
    }
}

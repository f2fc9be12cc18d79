// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-variable driven configuration shared by every binary in the
//! workspace (spec §6). Required variables are a fatal startup error when
//! absent; optional variables fall back to the defaults recovered from
//! `original_source` (see `SPEC_FULL.md` §B).

use std::path::PathBuf;

/// A required environment variable was not set.
#[derive(Debug, thiserror::Error)]
#[error("missing required environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);

fn required(name: &'static str) -> Result<String, MissingEnvVar> {
    std::env::var(name).map_err(|_| MissingEnvVar(name))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Redis connection parameters, read from `REDIS_HOST`/`REDIS_PORT`/
/// `REDIS_PASSWORD`/`REDIS_DB_INDEX`. `REDIS_HOST` is required; the rest
/// default to `6379` / empty password / db `0`.
#[derive(Debug, Clone)]
pub struct RedisEnv {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db_index: i64,
}

/// Process-wide configuration. `STORAGE_ROOT` and `REDIS_HOST` are
/// required; everything else has a default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_root: PathBuf,
    pub redis: RedisEnv,
    pub app_host: String,
    pub app_port: u16,
    pub is_debug: bool,
    /// Pull scheduler poll cadence (`GST_SLEEP_SECS`, default 10s).
    pub sleep_secs: u64,
    /// Where `gst-pulld` writes its rotated log file (`GST_LOG_PATH`,
    /// default `{STORAGE_ROOT}/pulld.log`).
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, MissingEnvVar> {
        let storage_root = PathBuf::from(required("STORAGE_ROOT")?);
        let redis = RedisEnv {
            host: required("REDIS_HOST")?,
            port: optional_parsed("REDIS_PORT", 6379),
            password: {
                let pw = optional("REDIS_PASSWORD", "");
                if pw.is_empty() {
                    None
                } else {
                    Some(pw)
                }
            },
            db_index: optional_parsed("REDIS_DB_INDEX", 0),
        };

        let log_path = std::env::var("GST_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| storage_root.join("pulld.log"));

        Ok(Self {
            storage_root,
            redis,
            app_host: optional("APP_HOST", "0.0.0.0"),
            app_port: optional_parsed("APP_PORT", 8080),
            is_debug: optional_parsed("IS_DEBUG", false),
            sleep_secs: optional_parsed("GST_SLEEP_SECS", 10),
            log_path,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

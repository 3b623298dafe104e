//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use blockpaste_core::{EnvelopeFormat, MAX_PASTE_SIZE};
use blockpaste_store::{StoreConfig, DEFAULT_GET_TIMEOUT};
use clap::Parser;

use crate::service::ServiceConfig;

/// Default whole-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Parser)]
#[command(name = "blockpaste", version, about = "Block-store-backed pastebin with optional encryption")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "BLOCKPASTE_BIND_ADDR", default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "BLOCKPASTE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Hostname shown in the usage message (defaults to bind address and port)
    #[arg(long, env = "BLOCKPASTE_HOSTNAME")]
    pub hostname: Option<String>,

    /// SQLite database for blocks. Blocks are kept in memory when omitted.
    #[arg(long, env = "BLOCKPASTE_DATABASE")]
    pub database: Option<PathBuf>,

    /// Stored paste layout: "raw" or "structured"
    #[arg(long, env = "BLOCKPASTE_ENVELOPE", default_value_t = EnvelopeFormat::Raw)]
    pub envelope: EnvelopeFormat,

    /// Maximum paste size in bytes
    #[arg(long, env = "BLOCKPASTE_MAX_PASTE_SIZE", default_value_t = MAX_PASTE_SIZE, value_parser = parse_min_one)]
    pub max_paste_size: usize,

    /// Deadline for a single block store lookup, in milliseconds
    #[arg(long, env = "BLOCKPASTE_GET_TIMEOUT_MS", default_value_t = DEFAULT_GET_TIMEOUT.as_millis() as u64)]
    pub get_timeout_ms: u64,

    /// Deadline for a whole HTTP request, in seconds
    #[arg(long, env = "BLOCKPASTE_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub request_timeout_secs: u64,

    /// Emit logs as JSON
    #[arg(long, env = "BLOCKPASTE_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,
}

fn parse_min_one(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("value must be at least 1".into());
    }
    Ok(n)
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Hostname for the usage message.
    pub fn public_hostname(&self) -> String {
        self.hostname.clone().unwrap_or_else(|| self.listen_addr())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            get_timeout: Duration::from_millis(self.get_timeout_ms),
            max_blob_size: self.max_paste_size,
        }
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            format: self.envelope,
            max_paste_size: self.max_paste_size,
        }
    }
}

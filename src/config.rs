//! Server configuration.
//!
//! Values come from command-line flags, then environment variables
//! (optionally loaded from a `.env` file), then the defaults below.

use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
pub const DEFAULT_SOURCE_SCRIPT: &str = "baraha";
pub const DEFAULT_TARGET_SCRIPT: &str = "devanagari";

/// VedaVid transliteration server
#[derive(Parser, Debug, Clone)]
#[command(name = "transliteration_server")]
#[command(about = "HTTP gateway for Sanskrit transliteration backed by vidyut-lipi")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "VEDAVID_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Script assumed when a request omits `source`
    #[arg(long, env = "VEDAVID_DEFAULT_SOURCE", default_value = DEFAULT_SOURCE_SCRIPT)]
    pub default_source: String,

    /// Script assumed when a request omits `target`
    #[arg(long, env = "VEDAVID_DEFAULT_TARGET", default_value = DEFAULT_TARGET_SCRIPT)]
    pub default_target: String,
}

impl ServerConfig {
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults {
            source: self.default_source.clone(),
            target: self.default_target.clone(),
        }
    }
}

/// Scripts substituted for omitted request fields.
///
/// These are raw names and go through the same validation as client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub source: String,
    pub target: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_SCRIPT.to_string(),
            target: DEFAULT_TARGET_SCRIPT.to_string(),
        }
    }
}

//! ---
//! dcc_section: "01-core-functionality"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Shared configuration and logging for the calculator tools."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
//! Shared primitives for the DC circuit calculator workspace.
//! This crate exposes configuration loading and tracing setup consumed by
//! the command-line front end and the HTTP server.

pub mod config;
pub mod logging;

pub use config::{
    ApiConfig, AppConfig, DisplayConfig, LoadedAppConfig, LoggingConfig, ReportConfig,
};
pub use logging::{init_tracing, LogFormat};

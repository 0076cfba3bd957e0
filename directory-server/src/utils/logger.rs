//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production
//! environments:
//! - console output (pretty in development, JSON in production)
//! - daily rotating application logs
//! - audit logs in their own files (target = "audit")
//! - security logs in their own files (target = "security")

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system (console only)
///
/// Convenience function for console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize the logging system with daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production)
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_dir {
        Some(dir) => {
            let app_dir = dir.join("app");
            let audit_dir = dir.join("audit");
            let security_dir = dir.join("security");
            fs::create_dir_all(&app_dir)?;
            fs::create_dir_all(&audit_dir)?;
            fs::create_dir_all(&security_dir)?;

            // Standard application logs, rotated daily. Audit and security
            // events go to their own files only.
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_dir, "app");
            let app_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() != "audit" && meta.target() != "security"
                }))
                .boxed();

            let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_dir, "audit");
            let audit_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(audit_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == "audit"
                }))
                .boxed();

            let security_log = RollingFileAppender::new(Rotation::DAILY, security_dir, "security");
            let security_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(security_log))
                .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
                    meta.target() == "security"
                }))
                .boxed();

            let console_layer = if json_format {
                fmt::layer().json().with_target(true).boxed()
            } else {
                fmt::layer().with_target(true).boxed()
            };
            registry
                .with(console_layer)
                .with(app_layer)
                .with(audit_layer)
                .with(security_layer)
                .init();
        }
        None => {
            if json_format {
                registry.with(fmt::layer().json().with_target(true)).init();
            } else {
                registry.with(fmt::layer().with_target(true)).init();
            }
        }
    }

    Ok(())
}

/// Audit log helper - records critical business operations
///
/// # Examples
/// ```ignore
/// // Login event
/// audit_log!(&user_id, "login", &username);
///
/// // Company creation
/// audit_log!(&user_id, "create", "company:789");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            details = %$details,
            "AUDIT"
        );
    };
}

/// Security log helper - records security-related events
///
/// # Examples
/// ```ignore
/// // Failed authentication
/// security_log!(WARN, "auth_failed", username = %username);
///
/// // Permission denied
/// security_log!(WARN, "admin_required", user_id = %user.id, role = %user.role);
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
    (ERROR, $event:expr, $($arg:tt)*) => {
        tracing::error!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            $($arg)*
        );
    };
}

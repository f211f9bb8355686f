/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 16/10/26
 ******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

pub(crate) fn level_from_str(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a global fmt subscriber once per process. The level comes from
/// `LOGLEVEL` and defaults to INFO.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = level_from_str(&env::var("LOGLEVEL").unwrap_or_default());
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 16/10/26
 ******************************************************************************/
use ig_profile::config::Config;
use ig_profile::error::ProfileError;
use ig_profile::transport::headers::RequestHeaders;
use ig_profile::utils::logger::setup_logger;
use tracing::info;

fn main() -> Result<(), ProfileError> {
    setup_logger();

    // Identity overrides come from IG_* environment variables
    let config = Config::new();
    info!("Config: {}", config);

    let mut session = config.open_session()?;
    session.state.ensure_valid()?;
    info!("Android id: {}", session.state.android_id()?);

    let headers = RequestHeaders::new(&session.application, &session.device, &session.state);
    for (name, value) in headers.build()? {
        if name != "authorization" {
            info!("{}: {}", name, value);
        }
    }

    session.state.refresh_with_uuid4();
    info!("Refreshed device id: {}", session.state.device_id);

    if let Some(path) = &config.session_file {
        session.save_to_file(path)?;
    }
    Ok(())
}

/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 16/10/26
 ******************************************************************************/
use crate::error::ProfileError;
use crate::profile::{ApplicationIdentity, DeviceIdentity};
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Everything needed to resume a login after a restart. Identifiers and the
/// creation time are written and read back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub application: ApplicationIdentity,
    pub device: DeviceIdentity,
    pub state: SessionState,
}

impl StoredSession {
    pub fn new(application: ApplicationIdentity, device: DeviceIdentity, state: SessionState) -> Self {
        Self {
            application,
            device,
            state,
        }
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    #[instrument(skip_all)]
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        debug!("Session saved to {}", path.as_ref().display());
        Ok(())
    }

    #[instrument(skip_all)]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let stored: StoredSession = serde_json::from_reader(reader)?;
        if !stored.state.is_initialized() {
            warn!("Loaded a session that was never filled");
        } else if !stored.state.valid() {
            warn!("Loaded an expired session");
        }
        debug!(uuid = %stored.state.uuid, "Session loaded from {}", path.as_ref().display());
        Ok(stored)
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/9/24
******************************************************************************/

//! Profile and session records for talking to Instagram's private API as the
//! official Android app.
//!
//! ```no_run
//! use ig_profile::config::Config;
//! use ig_profile::transport::headers::RequestHeaders;
//!
//! let config = Config::new();
//! let session = config.open_session()?;
//! let headers = RequestHeaders::new(&session.application, &session.device, &session.state)
//!     .to_header_map()?;
//! # Ok::<(), ig_profile::error::ProfileError>(())
//! ```

pub mod config;

pub mod constants;

pub mod error;

pub mod profile;

pub mod session;

pub mod storage;

pub mod transport;

pub mod utils;

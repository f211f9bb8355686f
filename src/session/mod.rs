pub mod account;

pub mod state;

pub use account::{AccountData, LoggedInAccountData};
pub use state::{SessionState, StateSettings};

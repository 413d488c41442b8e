pub mod error;

pub mod appointment;
pub mod auth;
pub mod config;
pub mod doctor;
pub mod session;

pub use appointment::*;
pub use auth::*;
pub use config::*;
pub use doctor::*;
pub use error::*;
pub use session::*;

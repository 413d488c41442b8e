//! Page controllers. Each one owns the list region of its page and is driven
//! by the page's input handlers.

pub mod admin;
pub mod appointments;
pub mod directory;
pub mod doctor;
pub mod patient;

pub use admin::*;
pub use appointments::*;
pub use directory::*;
pub use doctor::*;
pub use patient::*;

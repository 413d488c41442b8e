//! Controllers and service seams for the hospital portal.
//!
//! Nothing here depends on a UI toolkit: pages construct a controller with a
//! [`HospitalApi`], a [`SessionStore`], a [`Navigator`], a [`Notifier`] and a
//! [`ListView`] render target, then forward input events to it.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod header;
pub mod http;
pub mod modal;
pub mod navigation;
pub mod sequence;
pub mod session;
pub mod view;

pub use api::HospitalApi;
pub use auth::*;
pub use dashboard::*;
pub use header::*;
pub use http::HttpApi;
pub use modal::*;
pub use navigation::*;
pub use sequence::*;
pub use session::*;
pub use view::*;

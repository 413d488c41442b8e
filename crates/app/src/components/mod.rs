pub mod directory;
pub mod forms;
pub mod header;

pub use directory::*;
pub use forms::*;
pub use header::*;

pub mod button;
pub mod card;
pub mod data_table;
pub mod empty_state;
pub mod form_select;
pub mod header_bar;
pub mod input;
pub mod modal;
pub mod page_header;
pub mod search_bar;

pub use button::*;
pub use card::*;
pub use data_table::*;
pub use empty_state::*;
pub use form_select::*;
pub use header_bar::*;
pub use input::*;
pub use modal::*;
pub use page_header::*;
pub use search_bar::*;

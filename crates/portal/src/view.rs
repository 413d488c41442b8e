use std::cell::RefCell;

/// What a list region currently shows.
///
/// Every render replaces the previous state wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState<T> {
    #[default]
    Loading,
    Ready(Vec<T>),
    /// Zero results, with the message shown in place of the list.
    Empty(String),
    /// The fetch failed; the message replaces the list.
    Failed(String),
}

impl<T> ListState<T> {
    /// `Ready` for a non-empty collection, otherwise `Empty(message)`.
    pub fn from_items(items: Vec<T>, empty_message: &str) -> Self {
        if items.is_empty() {
            ListState::Empty(empty_message.to_string())
        } else {
            ListState::Ready(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Text shown instead of rows, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ListState::Empty(msg) | ListState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Render target for a list region.
pub trait ListView<T> {
    fn show(&self, state: ListState<T>);
}

impl<T> ListView<T> for RefCell<ListState<T>> {
    fn show(&self, state: ListState<T>) {
        *self.borrow_mut() = state;
    }
}

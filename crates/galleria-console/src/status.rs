// Request lifecycle and render states for list screens

/// Lifecycle of one list fetch: `Idle -> Loading -> (Success | Error)`,
/// re-entering `Loading` on every subsequent fetch. There is no terminal
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What the view should render for the current state. A successful fetch
/// with zero rows is an explicit state so screens never show a bare table.
#[derive(Debug, PartialEq)]
pub enum ViewState<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [T]),
}

use crate::github::models::{Repository, UserAccount};

/// Which of the two independent query slots a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Repositories,
    Users,
}

#[derive(Debug)]
pub enum Action {
    InputChar(char),
    InputBackspace,
    /// The debounce window elapsed; carries the settled query.
    DebounceElapsed(String),
    /// Pointer-up landed on the widget (input or dropdown).
    FocusInput,
    MoveUp,
    MoveDown,
    OpenFocused,
    CloseDropdown,
    DataLoaded(DataPayload),
    SlotError {
        slot: Slot,
        generation: u64,
        message: String,
    },
    Quit,
}

/// A completed fetch, tagged with the generation it was issued under.
#[derive(Debug)]
pub enum DataPayload {
    Repositories {
        generation: u64,
        total_count: u64,
        items: Vec<Repository>,
    },
    Users {
        generation: u64,
        total_count: u64,
        items: Vec<UserAccount>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// (Re)arm the debounce window with the current input.
    Debounce(String),
    SearchRepositories { query: String, generation: u64 },
    SearchUsers { query: String, generation: u64 },
    OpenUrl(String),
}

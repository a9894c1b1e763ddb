use crate::app::actions::{Action, DataPayload, SideEffect, Slot};
use crate::app::state::AppState;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::InputChar(c) => {
            state.search_query.push(c);
            state.dropdown_open = true;
            vec![SideEffect::Debounce(state.search_query.clone())]
        }
        Action::InputBackspace => {
            if state.search_query.pop().is_none() {
                return vec![];
            }
            vec![SideEffect::Debounce(state.search_query.clone())]
        }
        Action::DebounceElapsed(value) => {
            // Same key as last time: nothing superseded, nothing to do.
            if value == state.debounced_query {
                return vec![];
            }
            state.debounced_query = value;
            state.generation += 1;

            if state.debounced_query.chars().count() < state.min_chars {
                // Gate closed: no request. Prior slot data and errors
                // stay put until a long-enough query re-enables them;
                // any in-flight completions are stale now anyway.
                state.fetching_repos = false;
                state.fetching_users = false;
                return vec![];
            }

            state.fetching_repos = true;
            state.fetching_users = true;
            state.error_repos = None;
            state.error_users = None;

            vec![
                SideEffect::SearchRepositories {
                    query: state.debounced_query.clone(),
                    generation: state.generation,
                },
                SideEffect::SearchUsers {
                    query: state.debounced_query.clone(),
                    generation: state.generation,
                },
            ]
        }
        Action::DataLoaded(payload) => {
            match payload {
                DataPayload::Repositories {
                    generation,
                    total_count,
                    items,
                } => {
                    if generation != state.generation {
                        return vec![];
                    }
                    state.fetching_repos = false;
                    state.total_repositories = Some(total_count);
                    state.repositories = Some(items);
                }
                DataPayload::Users {
                    generation,
                    total_count,
                    items,
                } => {
                    if generation != state.generation {
                        return vec![];
                    }
                    state.fetching_users = false;
                    state.total_users = Some(total_count);
                    state.users = Some(items);
                }
            }
            state.rebuild_merged();
            vec![]
        }
        Action::SlotError {
            slot,
            generation,
            message,
        } => {
            if generation != state.generation {
                return vec![];
            }
            match slot {
                Slot::Repositories => {
                    state.fetching_repos = false;
                    state.error_repos = Some(message);
                }
                Slot::Users => {
                    state.fetching_users = false;
                    state.error_users = Some(message);
                }
            }
            vec![]
        }
        Action::MoveUp => {
            if state.dropdown_open
                && let Some(i) = state.focused
                && i > 0
            {
                state.focused = Some(i - 1);
            }
            vec![]
        }
        Action::MoveDown => {
            if state.dropdown_open && !state.merged.is_empty() {
                let last = state.merged.len() - 1;
                state.focused = match state.focused {
                    None => Some(0),
                    Some(i) => Some((i + 1).min(last)),
                };
            }
            vec![]
        }
        Action::OpenFocused => {
            if !state.dropdown_open {
                return vec![];
            }
            match state.focused_url() {
                Some(url) => vec![SideEffect::OpenUrl(url.to_string())],
                None => vec![],
            }
        }
        Action::FocusInput => {
            if !state.dropdown_open {
                state.dropdown_open = true;
                state.focused = None;
            }
            vec![]
        }
        Action::CloseDropdown => {
            state.dropdown_open = false;
            state.focused = None;
            vec![]
        }
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
    }
}

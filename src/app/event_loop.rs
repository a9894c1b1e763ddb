use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DataPayload, SideEffect, Slot};
use crate::app::debounce::Debouncer;
use crate::app::state::AppState;
use crate::app::update::update;
use crate::app::view;
use crate::cache::CacheStore;
use crate::github::models::SearchPage;
use crate::github::{GithubClient, Repository, UserAccount};
use crate::ui::layout::screen_layout;
use crate::util::config::AppConfig;

pub async fn run(
    config: AppConfig,
    client: GithubClient,
    cache_store: Option<CacheStore>,
    initial_query: Option<String>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, cache_store, initial_query).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    cache_store: Option<CacheStore>,
    initial_query: Option<String>,
) -> Result<()> {
    let mut state = AppState::new(config.search.min_chars);
    state.show_stats = config.ui.show_stats;

    let mut debouncer = Debouncer::new(Duration::from_millis(config.search.debounce_ms));
    if let Some(query) = initial_query {
        state.search_query = query.clone();
        state.dropdown_open = true;
        debouncer.note_input(query, Instant::now());
    }

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut event_stream = event::EventStream::new();

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        let area = {
            let size = terminal.size()?;
            Rect::new(0, 0, size.width, size.height)
        };

        // Sleep until the pending debounce deadline, or forever when
        // none is armed. Only the deadline is captured so the arms
        // below keep mutable access to the debouncer.
        let deadline = debouncer.deadline();
        let debounce_due = async move {
            match deadline {
                Some(d) => tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state, area) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            handle_effect(effect, &mut debouncer, &config, &client, &cache_store, &action_tx);
                        }
                    }
            }
            // Actions from background fetch tasks
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    handle_effect(effect, &mut debouncer, &config, &client, &cache_store, &action_tx);
                }
            }
            // Debounce window elapsed
            _ = debounce_due => {
                if let Some(value) = debouncer.poll(Instant::now()) {
                    let effects = update(&mut state, Action::DebounceElapsed(value));
                    for effect in effects {
                        handle_effect(effect, &mut debouncer, &config, &client, &cache_store, &action_tx);
                    }
                }
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState, area: Rect) -> Option<Action> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: event::KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Esc => {
                if state.dropdown_open {
                    Some(Action::CloseDropdown)
                } else {
                    Some(Action::Quit)
                }
            }
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Enter => Some(Action::OpenFocused),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(_),
            column,
            row,
            ..
        }) => {
            // Pointer-up inside the widget opens the dropdown, outside
            // closes it. Hit-testing uses the same layout the renderer
            // drew with.
            let layout = screen_layout(area);
            let pos = Position::new(*column, *row);
            let inside = layout.input.contains(pos)
                || (state.dropdown_open && layout.dropdown.contains(pos));
            if inside {
                Some(Action::FocusInput)
            } else {
                Some(Action::CloseDropdown)
            }
        }
        _ => None,
    }
}

fn handle_effect(
    effect: SideEffect,
    debouncer: &mut Debouncer,
    config: &AppConfig,
    client: &GithubClient,
    cache_store: &Option<CacheStore>,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::Debounce(value) => {
            debouncer.note_input(value, Instant::now());
        }
        SideEffect::SearchRepositories { query, generation } => {
            spawn_search_repositories(
                query,
                generation,
                config.search.per_page,
                client.clone(),
                cache_store.clone(),
                action_tx.clone(),
            );
        }
        SideEffect::SearchUsers { query, generation } => {
            spawn_search_users(
                query,
                generation,
                config.search.per_page,
                client.clone(),
                cache_store.clone(),
                action_tx.clone(),
            );
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}

fn spawn_search_repositories(
    query: String,
    generation: u64,
    per_page: u32,
    client: GithubClient,
    cache: Option<CacheStore>,
    tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        debug!(query = %query, generation, "Searching repositories");

        let cache_key = format!("repos {}", query);
        if let Some(ref cache) = cache
            && let Some(page) = cache.get::<SearchPage<Repository>>(&cache_key)
        {
            let _ = tx.send(Action::DataLoaded(DataPayload::Repositories {
                generation,
                total_count: page.total_count,
                items: page.items,
            }));
            return;
        }

        match client.search_repositories(&query, per_page).await {
            Ok(page) => {
                if let Some(ref cache) = cache
                    && let Err(e) = cache.set(&cache_key, &page)
                {
                    error!(error = %e, "Failed to cache repository results");
                }
                let _ = tx.send(Action::DataLoaded(DataPayload::Repositories {
                    generation,
                    total_count: page.total_count,
                    items: page.items,
                }));
            }
            Err(e) => {
                error!(query = %query, error = %e, "Repository search failed");
                let _ = tx.send(Action::SlotError {
                    slot: Slot::Repositories,
                    generation,
                    message: e.to_string(),
                });
            }
        }
    });
}

fn spawn_search_users(
    query: String,
    generation: u64,
    per_page: u32,
    client: GithubClient,
    cache: Option<CacheStore>,
    tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        debug!(query = %query, generation, "Searching users");

        let cache_key = format!("users {}", query);
        if let Some(ref cache) = cache
            && let Some(page) = cache.get::<SearchPage<UserAccount>>(&cache_key)
        {
            let _ = tx.send(Action::DataLoaded(DataPayload::Users {
                generation,
                total_count: page.total_count,
                items: page.items,
            }));
            return;
        }

        match client.search_users(&query, per_page).await {
            Ok(page) => {
                if let Some(ref cache) = cache
                    && let Err(e) = cache.set(&cache_key, &page)
                {
                    error!(error = %e, "Failed to cache user results");
                }
                let _ = tx.send(Action::DataLoaded(DataPayload::Users {
                    generation,
                    total_count: page.total_count,
                    items: page.items,
                }));
            }
            Err(e) => {
                error!(query = %query, error = %e, "User search failed");
                let _ = tx.send(Action::SlotError {
                    slot: Slot::Users,
                    generation,
                    message: e.to_string(),
                });
            }
        }
    });
}

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::state::{AppState, DropdownView};
use crate::github::models::SearchEntry;
use crate::ui::layout::centered_offset;
use crate::ui::theme;

pub fn render_search_input(f: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.dropdown_open {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let para = if state.search_query.is_empty() {
        Paragraph::new(Span::styled("Search repositories and users", theme::DIM)).block(block)
    } else {
        Paragraph::new(state.search_query.as_str()).block(block)
    };
    f.render_widget(para, area);

    if state.dropdown_open && area.width > 2 && area.height > 1 {
        let cursor_x = area.x + 1 + (state.search_query.chars().count() as u16).min(area.width - 2);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

pub fn render_dropdown(f: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }

    match state.dropdown_view() {
        DropdownView::TooShort => {
            let msg = format!("Type at least {} characters to search", state.min_chars);
            f.render_widget(
                Paragraph::new(msg).style(theme::DIM).block(dropdown_block()),
                area,
            );
        }
        DropdownView::Spinner => {
            f.render_widget(
                Paragraph::new("Searching...")
                    .style(theme::DIM)
                    .block(dropdown_block()),
                area,
            );
        }
        DropdownView::Error => {
            let msg = state.display_error().unwrap_or("Search failed");
            f.render_widget(
                Paragraph::new(msg.to_string())
                    .style(theme::ERROR)
                    .block(dropdown_block()),
                area,
            );
        }
        DropdownView::NoResults => {
            f.render_widget(
                Paragraph::new("No results.")
                    .style(theme::DIM)
                    .block(dropdown_block()),
                area,
            );
        }
        DropdownView::Results => {
            render_result_rows(f, area, state);
        }
    }
}

fn dropdown_block() -> Block<'static> {
    Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED)
}

fn render_result_rows(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Results ({}) ", state.merged.len()))
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = match state.focused {
        Some(i) => centered_offset(i, state.merged.len(), viewport),
        None => 0,
    };

    let items: Vec<ListItem> = state
        .merged
        .iter()
        .enumerate()
        .skip(offset)
        .take(viewport)
        .map(|(i, entry)| result_row(entry, state.focused == Some(i), state.show_stats))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn result_row(entry: &SearchEntry, focused: bool, show_stats: bool) -> ListItem<'static> {
    let line = match entry {
        SearchEntry::Repo(repo) => {
            let mut spans = vec![Span::styled(
                repo.name.clone(),
                if focused { theme::HIGHLIGHT } else { theme::REPO_NAME },
            )];
            if let Some(desc) = &repo.description {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(desc.clone(), theme::DIM));
            }
            if show_stats {
                spans.push(Span::styled(
                    format!("  {} stars  {} watchers", repo.stargazers_count, repo.watchers),
                    theme::STATS,
                ));
            }
            Line::from(spans)
        }
        SearchEntry::User(user) => Line::from(Span::styled(
            format!("@{}", user.login),
            if focused { theme::HIGHLIGHT } else { theme::USER_LOGIN },
        )),
    };
    ListItem::new(line)
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }

    let key_hints = if state.dropdown_open {
        "Up/Down: move | Enter: open | Esc: close"
    } else {
        "type to search | Esc: quit"
    };

    let totals = match (state.total_repositories, state.total_users) {
        (Some(r), Some(u)) => format!("{} repos · {} users", r, u),
        (Some(r), None) => format!("{} repos", r),
        (None, Some(u)) => format!("{} users", u),
        (None, None) => String::new(),
    };

    let padding = (area.width as usize)
        .saturating_sub(key_hints.len())
        .saturating_sub(totals.len());

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(totals, theme::STATUS_BAR),
    ]);

    f.render_widget(Paragraph::new(line).style(theme::STATUS_BAR), area);
}

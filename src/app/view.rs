use ratatui::Frame;

use crate::app::state::AppState;
use crate::ui::layout::screen_layout;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    let layout = screen_layout(f.area());

    widgets::render_search_input(f, layout.input, state);
    if state.dropdown_open {
        widgets::render_dropdown(f, layout.dropdown, state);
    }
    widgets::render_status_bar(f, layout.status, state);
}

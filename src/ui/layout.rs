use ratatui::layout::Rect;

/// Rows kept free between the dropdown's bottom edge and the status
/// bar.
pub const DROPDOWN_BOTTOM_MARGIN: u16 = 1;

/// The three regions of the screen. Renderer and pointer hit-testing
/// both go through this, so a click lands exactly where a widget was
/// drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub dropdown: Rect,
    pub status: Rect,
}

/// Derive the layout from the terminal area: search input on top, the
/// dropdown filling the viewport below it minus a fixed bottom margin,
/// status bar on the last row. Recomputed every render pass, which is
/// what makes terminal resizes free.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let input_height = area.height.min(3);
    let status_height = u16::from(area.height > input_height);

    let input = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: input_height,
    };
    let status = Rect {
        x: area.x,
        y: area.y + area.height - status_height,
        width: area.width,
        height: status_height,
    };

    let dropdown_top = input.y + input.height;
    let dropdown_height = status
        .y
        .saturating_sub(dropdown_top)
        .saturating_sub(DROPDOWN_BOTTOM_MARGIN);
    let dropdown = Rect {
        x: area.x,
        y: dropdown_top,
        width: area.width,
        height: dropdown_height,
    };

    ScreenLayout {
        input,
        dropdown,
        status,
    }
}

/// Scroll offset that keeps the focused row centered in the visible
/// window, clamped so the list never over-scrolls past its end.
pub fn centered_offset(focused: usize, len: usize, viewport: usize) -> usize {
    if viewport == 0 || len <= viewport {
        return 0;
    }
    focused.saturating_sub(viewport / 2).min(len - viewport)
}

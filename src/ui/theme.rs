use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const REPO_NAME: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

pub const USER_LOGIN: Style = Style::new().fg(Color::Yellow);

pub const STATS: Style = Style::new().fg(Color::DarkGray);

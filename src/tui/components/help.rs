//! Help modal and footer text.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Keybindings shown in the help modal.
/// Format: (description, keys)
const HELP_BINDINGS: &[(&str, &str)] = &[
    ("Move between slots", "Arrows"),
    ("Edit selected slot", "Enter"),
    ("Cycle default color", "Left / Right"),
    ("Next control", "Tab"),
    ("Previous control", "Shift+Tab"),
    ("Re-read the store", "r"),
    ("Help", "?"),
    ("Quit", "q"),
];

/// Footer line for the colors screen.
pub const COLORS_FOOTER: &str = "tab: next | enter: edit | r: reload | ?: help | q: quit";

/// Footer line for the picker screen.
pub const PICKER_FOOTER: &str = "up/down: channel | left/right: adjust | enter: apply | esc: cancel";

/// Calculate a centered popup area with given width/height percentages.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Render the help modal overlay.
pub fn render_help(frame: &mut Frame) {
    let area = popup_area(frame.area(), 50, 60);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(Span::styled("Keybindings", bold)),
        Line::from(""),
    ];
    for (description, keys) in HELP_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {description:<22}"), Style::default()),
            Span::styled(*keys, dim),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), layout[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press Esc, ?, or Enter to close",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, layout[1]);
}

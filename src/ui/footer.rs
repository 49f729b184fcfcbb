use crate::ui::dogs::DogsScreenState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const IDLE_HINTS: &str = " r: Reload │ ↑/↓: Move │ g/G: Top/Bottom │ q: Quit";
const LOADING_HINTS: &str = " Loading... │ q: Quit";

/// Bottom bar: key hints on the left, list position and version on the right.
pub fn footer_widget(screen: &DogsScreenState, width: u16) -> Paragraph<'static> {
    let hints = if screen.is_loading() {
        LOADING_HINTS
    } else {
        IDLE_HINTS
    };
    let position = position_label(screen);
    let version = format!("  v{} ", env!("CARGO_PKG_VERSION"));

    // Pad by chars, not bytes; the separators are multi-byte.
    let used = hints.chars().count() + position.chars().count() + version.chars().count();
    let padding = (width.saturating_sub(2) as usize).saturating_sub(used);

    let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, hint_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(position, Style::default().fg(ACCENT)),
        Span::styled(version, Style::default().fg(MUTED_TEXT)),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn position_label(screen: &DogsScreenState) -> String {
    match screen.dogs.len() {
        0 => "no dogs".to_string(),
        total => format!("{}/{}", screen.selected + 1, total),
    }
}

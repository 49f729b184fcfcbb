use crate::ui::dogs::DogsScreenState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: &DogsScreenState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status, status_style) = match screen.loading {
            Some(true) => ("● loading", Style::default().fg(STATUS_BUSY)),
            Some(false) => ("● ready", Style::default().fg(STATUS_OK)),
            None => ("○ idle", Style::default().fg(MUTED_TEXT)),
        };

        let line = Line::from(vec![
            Span::styled("  dogfeed", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} dogs", screen.dogs.len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

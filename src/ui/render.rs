use crate::api::Dog;
use crate::ui::app::App;
use crate::ui::dogs::DogsScreenState;
use crate::ui::footer::footer_widget;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();

    frame.render_widget(Header::new().widget(screen), header);
    frame.render_widget(Clear, body);

    // The list is hidden while loading; the dialog takes its place.
    if screen.is_loading() {
        draw_loading(frame, body);
    } else if screen.dogs.is_empty() {
        draw_empty(frame, body, screen);
    } else {
        draw_list(frame, body, screen);
    }

    frame.render_widget(footer_widget(screen, footer.width), footer);
}

fn draw_list(frame: &mut Frame<'_>, area: Rect, screen: &DogsScreenState) {
    let items: Vec<ListItem> = screen.dogs.iter().map(dog_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▌ ");

    let mut state = ListState::default().with_selected(Some(screen.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn dog_item(dog: &Dog) -> ListItem<'static> {
    let title = Line::from(vec![
        Span::styled(
            dog.format.to_lowercase(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(dog.time.clone(), Style::default().fg(HEADER_TEXT)),
    ]);
    let url = Line::from(Span::styled(dog.url.clone(), Style::default().fg(MUTED_TEXT)));
    ListItem::new(vec![title, url, Line::from("")])
}

fn draw_empty(frame: &mut Frame<'_>, area: Rect, screen: &DogsScreenState) {
    let message = match screen.loading {
        None => "Waiting for dogs...",
        Some(_) => "No dogs to show. Press r to reload.",
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(MUTED_TEXT),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect) {
    let lines = vec![Line::from("Fetching some cute little dogs...")];
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(body, content_width.saturating_add(4), 3);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Loading", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::DogsListViewModel;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_dogs_with_lowercase_format() {
        let view_model = DogsListViewModel::new();
        view_model.set_dogs(vec![Dog::new("1", "http://x/1.jpg", "2017-07-19", "JPG")]);
        view_model.set_loading(false);
        let app = App::new(view_model);

        let text = rendered(&app);
        assert!(text.contains("jpg"));
        assert!(text.contains("2017-07-19"));
        assert!(text.contains("http://x/1.jpg"));
        assert!(text.contains("1/1"));
    }

    #[test]
    fn test_loading_hides_list() {
        let view_model = DogsListViewModel::new();
        view_model.set_dogs(vec![Dog::new("1", "http://x/1.jpg", "2017-07-19", "jpg")]);
        view_model.set_loading(true);
        let app = App::new(view_model);

        let text = rendered(&app);
        assert!(text.contains("Loading"));
        assert!(!text.contains("http://x/1.jpg"));
    }
}

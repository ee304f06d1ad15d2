use crate::counter::CounterState;
use crate::ui::navigation::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OFF, STATUS_ON};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: Screen, counter: &CounterState) -> Paragraph<'static> {
        let title = match screen {
            Screen::Counter => "Counter++",
            Screen::Settings => "Settings",
        };
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style) = if counter.auto_enabled {
            ("●", Style::default().fg(STATUS_ON))
        } else {
            ("○", Style::default().fg(STATUS_OFF))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(title, title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, dot_style),
            Span::styled(format!(" auto every {}s", counter.interval_secs()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

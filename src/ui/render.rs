use crate::counter::CounterState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, layout_regions};
use crate::ui::navigation::Screen;
use crate::ui::slider::IntervalSlider;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, SLIDER_TRACK, STATUS_OFF, STATUS_ON};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen(), app.counter()), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Counter => draw_counter(frame, body, app.counter()),
        Screen::Settings => draw_settings(frame, body, app.slider()),
    }
    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);
}

fn draw_counter(frame: &mut Frame<'_>, area: Rect, counter: &CounterState) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let (mode, mode_style) = if counter.auto_enabled {
        ("ON", Style::default().fg(STATUS_ON).add_modifier(Modifier::BOLD))
    } else {
        ("OFF", Style::default().fg(STATUS_OFF).add_modifier(Modifier::BOLD))
    };
    let switch = if counter.auto_enabled { "[■ ]" } else { "[ □]" };

    let lines = vec![
        Line::from(Span::styled(
            counter.count.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Auto mode: ", text_style),
            Span::styled(mode, mode_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("[ +1 ]   [ -1 ]   [ Reset ]", text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Auto-Increment ", text_style),
            Span::styled(switch, mode_style),
        ]),
    ];

    let column = centered_column(60, lines.len() as u16, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        column,
    );
}

fn draw_settings(frame: &mut Frame<'_>, area: Rect, slider: IntervalSlider) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let column = centered_column(60, 9, area);
    let [title, _, value, _, gauge, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Auto-Increment Interval",
            text_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} seconds", slider.seconds()),
            Style::default().fg(ACCENT),
        )))
        .alignment(Alignment::Center),
        value,
    );
    frame.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .gauge_style(Style::default().fg(ACCENT).bg(SLIDER_TRACK))
            .ratio(slider.ratio())
            .label(format!("{}s", slider.seconds())),
        gauge,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Adjust auto-increment interval delay (1-10s).",
            text_style.add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center),
        hint,
    );
}

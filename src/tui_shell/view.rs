use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use time::OffsetDateTime;

use crate::alerts::Severity;
use crate::model::Stream;

use super::App;

pub(super) fn render_view_chrome<'a>(
    frame: &mut ratatui::Frame,
    header: Line<'a>,
    area: Rect,
) -> Rect {
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// "just now", "5m ago", "3h ago"; older than two days shows the date.
pub(super) fn fmt_since(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let secs = (now - then).whole_seconds().max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else {
        format!("{}-{:02}-{:02}", then.year(), u8::from(then.month()), then.day())
    }
}

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    draw_stream_list(frame, app, body[0]);
    draw_details(frame, app, body[1]);

    draw_alerts(frame, app, chunks[2]);

    let hints = if app.modal.is_some() {
        "esc close"
    } else {
        "↑/↓ select  n new  d delete  s service  r refresh  x dismiss  q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        chunks[3],
    );

    if let Some(modal) = &app.modal {
        super::modal::draw_modal(frame, modal, &app.controller);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "SJ Console",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(app.base_url.as_str()),
    ];
    if let Some(at) = app.updated_at {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", fmt_since(at, OffsetDateTime::now_utc())),
            Style::default().fg(Color::Gray),
        ));
    }
    if app.controller.saving {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("saving...", Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn draw_stream_list(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let c = &app.controller;
    let header = Line::from(Span::styled(
        format!("Streams ({})", c.streams.len()),
        Style::default().fg(Color::Yellow),
    ));
    let inner = render_view_chrome(frame, header, area);

    if c.streams.is_empty() {
        let msg = c
            .last_error
            .as_deref()
            .map(|e| format!("could not load streams: {}", e))
            .unwrap_or_else(|| "(no streams)".to_string());
        frame.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false }),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = c
        .streams
        .iter()
        .map(|s| ListItem::new(Line::from(s.name.as_str())))
        .collect();
    let mut state = ListState::default();
    state.select(c.streams.iter().position(|s| c.is_selected(&s.name)));
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, inner, &mut state);
}

pub(super) fn stream_detail_lines(stream: &Stream) -> Vec<String> {
    let mut lines = vec![
        format!("name: {}", stream.name),
        format!("type: {}", stream.stream_type),
        format!("service: {}", stream.service),
    ];
    if let Some(desc) = &stream.description {
        lines.push(format!("description: {}", desc));
    }
    if !stream.tags.is_empty() {
        lines.push(format!("tags: {}", stream.tags.join(", ")));
    }
    if let Some(p) = stream.partitions {
        lines.push(format!("partitions: {}", p));
    }
    if let Some(r) = stream.replication_factor {
        lines.push(format!("replication factor: {}", r));
    }
    if let Some(primary) = &stream.primary {
        lines.push(format!("primary: {}", primary));
    }
    if let Some(g) = &stream.generator {
        lines.push(format!(
            "generator: {} (service: {}, instances: {})",
            g.generator_type, g.service, g.instance_count
        ));
    }
    lines
}

fn draw_details(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let header = Line::from(Span::styled("Details", Style::default().fg(Color::Yellow)));
    let inner = render_view_chrome(frame, header, area);
    let lines: Vec<Line> = match app.controller.current_stream() {
        Some(stream) => stream_detail_lines(stream)
            .into_iter()
            .map(Line::from)
            .collect(),
        None => vec![Line::from("(nothing selected)")],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_alerts(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .controller
        .alerts
        .iter()
        .rev()
        .map(|a| {
            let color = match a.severity {
                Severity::Success => Color::Green,
                Severity::Danger => Color::Red,
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", a.severity.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(a.message.as_str()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Alerts"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
#[path = "../tests/tui_shell/view_tests.rs"]
mod tests;

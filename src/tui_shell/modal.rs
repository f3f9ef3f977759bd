use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent};

use crate::streams::StreamsController;

use super::form::{FormAction, GENERATOR_TYPES};
use super::{App, CreateForm, FormField};

#[derive(Debug)]
pub(super) enum ModalKind {
    /// Read-only text (service info).
    Viewer,
    /// Waiting for y/n on the pending deletion.
    ConfirmDelete,
    CreateStream(CreateForm),
}

#[derive(Debug)]
pub(super) struct Modal {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) scroll: usize,
    pub(super) kind: ModalKind,
}

impl Modal {
    pub(super) fn viewer(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
        }
    }
}

fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w);
    let h = area.height.saturating_sub(6).clamp(8, max_h);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w.min(area.width),
        height: h.min(area.height),
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal, controller: &StreamsController) {
    let box_area = centered(frame.area(), 90, 22);
    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Viewer | ModalKind::ConfirmDelete => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(inner);
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                parts[0],
            );
            let hint = if matches!(modal.kind, ModalKind::ConfirmDelete) {
                "y delete  n/esc cancel"
            } else {
                "esc close  ↑/↓ scroll"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
                parts[1],
            );
        }
        ModalKind::CreateStream(form) => draw_form(frame, form, controller, inner),
    }
}

fn draw_form(
    frame: &mut ratatui::Frame,
    form: &CreateForm,
    controller: &StreamsController,
    area: Rect,
) {
    let types = &controller.types;
    let focused = form.focused(types);
    let mut lines = Vec::new();
    let mut cursor = None;

    for (row, field) in form.fields(types).into_iter().enumerate() {
        let label_style = if field == focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = format!("{:>13}: ", field.label());
        let label_w = label.chars().count() as u16;
        let mut spans = vec![Span::styled(label, label_style)];

        match field {
            FormField::Type => spans.push(Span::raw(format!(
                "< {} >",
                form.selected_type(types).unwrap_or("(no types)")
            ))),
            FormField::Service => spans.push(Span::raw(format!(
                "< {} >",
                controller
                    .services
                    .get(form.service_idx)
                    .map(|s| s.name.as_str())
                    .unwrap_or("(no services)")
            ))),
            FormField::GeneratorType => spans.push(Span::raw(format!(
                "< {} >",
                GENERATOR_TYPES[form.generator_type_idx]
            ))),
            FormField::Tags => {
                let mut used = 0u16;
                for tag in controller.tags.tags() {
                    let chip = format!("[{}] ", tag);
                    used += chip.chars().count() as u16;
                    spans.push(Span::styled(chip, Style::default().fg(Color::Cyan)));
                }
                let partial = controller.tags.partial();
                spans.push(Span::raw(partial.to_string()));
                if field == focused {
                    cursor = Some((label_w + used + partial.chars().count() as u16, row as u16));
                }
            }
            _ => {
                if let Some(input) = form.input(field) {
                    spans.push(Span::raw(input.buf.as_str()));
                    if field == focused {
                        cursor = Some((label_w + input.cursor as u16, row as u16));
                    }
                }
            }
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "tab next field  ←/→ choose  ctrl-t tags  enter save  esc close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
    if let Some((x, y)) = cursor
        && x < area.width
        && y < area.height
    {
        frame.set_cursor_position((area.x + x, area.y + y));
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        ConfirmDelete,
        CancelDelete,
        SubmitCreate,
    }

    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };

        match &mut m.kind {
            ModalKind::Viewer => match key.code {
                KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < m.lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
            ModalKind::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::ConfirmDelete
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ModalAction::CancelDelete
                }
                _ => ModalAction::None,
            },
            ModalKind::CreateStream(form) => {
                let c = &mut app.controller;
                match form.handle_key(key, &mut c.tags, &c.types, &c.services) {
                    FormAction::None => ModalAction::None,
                    FormAction::Close => ModalAction::Close,
                    FormAction::Submit => ModalAction::SubmitCreate,
                }
            }
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::ConfirmDelete => app.confirm_delete(),
        ModalAction::CancelDelete => app.cancel_delete(),
        ModalAction::SubmitCreate => app.submit_create(),
    }
}

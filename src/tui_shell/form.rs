//! The "new stream" form shown in a modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Generator, Service, Stream, T_STREAM_TYPE};
use crate::tags::TagBuffer;

use super::Input;

pub(super) const GENERATOR_TYPES: &[&str] = &["local", "global", "per-stream"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FormField {
    Name,
    Type,
    Service,
    Description,
    Partitions,
    Tags,
    GeneratorType,
    GeneratorService,
    InstanceCount,
}

impl FormField {
    pub(super) fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Type => "Type",
            FormField::Service => "Service",
            FormField::Description => "Description",
            FormField::Partitions => "Partitions",
            FormField::Tags => "Tags",
            FormField::GeneratorType => "Generator",
            FormField::GeneratorService => "Gen. service",
            FormField::InstanceCount => "Instances",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, FormField::Partitions | FormField::InstanceCount)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum FormAction {
    None,
    Submit,
    Close,
}

#[derive(Debug, Default)]
pub(super) struct CreateForm {
    pub(super) focus: usize,
    pub(super) name: Input,
    pub(super) description: Input,
    pub(super) partitions: Input,
    pub(super) generator_service: Input,
    pub(super) instance_count: Input,
    pub(super) type_idx: usize,
    pub(super) service_idx: usize,
    pub(super) generator_type_idx: usize,
}

impl CreateForm {
    /// Fields in tab order; generator settings only apply to t-streams.
    pub(super) fn fields(&self, types: &[String]) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Name,
            FormField::Type,
            FormField::Service,
            FormField::Description,
            FormField::Partitions,
            FormField::Tags,
        ];
        if self.selected_type(types) == Some(T_STREAM_TYPE) {
            fields.extend([
                FormField::GeneratorType,
                FormField::GeneratorService,
                FormField::InstanceCount,
            ]);
        }
        fields
    }

    pub(super) fn focused(&self, types: &[String]) -> FormField {
        let fields = self.fields(types);
        fields[self.focus.min(fields.len() - 1)]
    }

    pub(super) fn selected_type<'a>(&self, types: &'a [String]) -> Option<&'a str> {
        types.get(self.type_idx).map(String::as_str)
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut Input> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Partitions => Some(&mut self.partitions),
            FormField::GeneratorService => Some(&mut self.generator_service),
            FormField::InstanceCount => Some(&mut self.instance_count),
            _ => None,
        }
    }

    pub(super) fn input(&self, field: FormField) -> Option<&Input> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Description => Some(&self.description),
            FormField::Partitions => Some(&self.partitions),
            FormField::GeneratorService => Some(&self.generator_service),
            FormField::InstanceCount => Some(&self.instance_count),
            _ => None,
        }
    }

    fn move_focus(&mut self, forward: bool, tags: &mut TagBuffer, types: &[String]) {
        let len = self.fields(types).len();
        if self.focused(types) == FormField::Tags {
            tags.blur();
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn focus_field(&mut self, field: FormField, types: &[String]) {
        if let Some(i) = self.fields(types).iter().position(|f| *f == field) {
            self.focus = i;
        }
    }

    fn cycle(idx: &mut usize, len: usize, forward: bool) {
        if len == 0 {
            return;
        }
        *idx = if forward {
            (*idx + 1) % len
        } else {
            (*idx + len - 1) % len
        };
    }

    pub(super) fn handle_key(
        &mut self,
        key: KeyEvent,
        tags: &mut TagBuffer,
        types: &[String],
        services: &[Service],
    ) -> FormAction {
        let field = self.focused(types);
        match key.code {
            KeyCode::Esc => return FormAction::Close,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab => self.move_focus(true, tags, types),
            KeyCode::BackTab => self.move_focus(false, tags, types),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                tags.request_focus();
            }
            _ => match field {
                FormField::Tags => match key.code {
                    KeyCode::Char(' ') => tags.press_space(),
                    KeyCode::Backspace => tags.press_backspace(),
                    KeyCode::Char(c) => tags.type_char(c),
                    _ => {}
                },
                FormField::Type => match key.code {
                    KeyCode::Left => Self::cycle(&mut self.type_idx, types.len(), false),
                    KeyCode::Right => Self::cycle(&mut self.type_idx, types.len(), true),
                    _ => {}
                },
                FormField::Service => match key.code {
                    KeyCode::Left => Self::cycle(&mut self.service_idx, services.len(), false),
                    KeyCode::Right => Self::cycle(&mut self.service_idx, services.len(), true),
                    _ => {}
                },
                FormField::GeneratorType => match key.code {
                    KeyCode::Left => {
                        Self::cycle(&mut self.generator_type_idx, GENERATOR_TYPES.len(), false)
                    }
                    KeyCode::Right => {
                        Self::cycle(&mut self.generator_type_idx, GENERATOR_TYPES.len(), true)
                    }
                    _ => {}
                },
                _ => {
                    let numeric = field.is_numeric();
                    if let Some(input) = self.input_mut(field) {
                        match key.code {
                            KeyCode::Char(c) if !numeric || c.is_ascii_digit() => {
                                input.insert_char(c)
                            }
                            KeyCode::Backspace => input.backspace(),
                            KeyCode::Delete => input.delete(),
                            KeyCode::Left => input.move_left(),
                            KeyCode::Right => input.move_right(),
                            _ => {}
                        }
                    }
                }
            },
        }
        if tags.take_focus_request() {
            self.focus_field(FormField::Tags, types);
        }
        FormAction::None
    }

    /// Copies the form into `draft`. Tags are taken separately from the tag buffer.
    pub(super) fn apply_to(
        &self,
        draft: &mut Stream,
        types: &[String],
        services: &[Service],
    ) -> Result<(), String> {
        let name = self.name.value().ok_or("Stream name is required")?;
        let stream_type = self
            .selected_type(types)
            .ok_or("No stream types loaded")?
            .to_string();
        draft.name = name;
        draft.stream_type = stream_type;
        draft.service = services
            .get(self.service_idx)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        draft.description = self.description.value();
        draft.partitions = parse_count(&self.partitions, "Partitions")?;
        let generator = draft.generator.get_or_insert_with(Generator::default);
        generator.generator_type = GENERATOR_TYPES[self.generator_type_idx].to_string();
        generator.service = self.generator_service.value().unwrap_or_default();
        generator.instance_count = parse_count(&self.instance_count, "Instances")?.unwrap_or(0);
        Ok(())
    }
}

fn parse_count(input: &Input, label: &str) -> Result<Option<u32>, String> {
    match input.value() {
        None => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("{} must be a whole number", label)),
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/form_tests.rs"]
mod tests;

//! Keyboard editing and input-layer checks for the contact form.
//!
//! Field values live in the submission controller. This module only tracks
//! which field has focus and where each cursor sits, and turns key presses
//! into new field values.

use crate::core::contact::{ContactField, ContactForm};
use crossterm::event::KeyCode;

/// Result of applying a key to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// The key was not an editing key
    Ignored,
    /// Only the cursor moved
    Moved,
    /// The value changed
    Changed(String),
}

/// Focus and cursor positions for the four contact inputs
#[derive(Debug, Clone, Default)]
pub struct FormCursor {
    focus: usize,
    cursors: [usize; 4],
    /// Fields flagged by the last refused submit
    flagged: Vec<ContactField>,
}

impl FormCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> ContactField {
        ContactField::ALL[self.focus]
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focus = index_of(field);
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ContactField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + ContactField::ALL.len() - 1) % ContactField::ALL.len();
    }

    /// Cursor position (in chars) for `field`
    pub fn cursor(&self, field: ContactField) -> usize {
        self.cursors[index_of(field)]
    }

    pub fn is_flagged(&self, field: ContactField) -> bool {
        self.flagged.contains(&field)
    }

    pub fn set_flagged(&mut self, fields: Vec<ContactField>) {
        self.flagged = fields;
    }

    /// Move every cursor back to the start (after the form is cleared)
    pub fn reset(&mut self) {
        self.cursors = [0; 4];
        self.flagged.clear();
        self.focus = 0;
    }

    /// Apply `key` to the focused field whose current text is `value`
    pub fn edit(&mut self, value: &str, key: KeyCode) -> FieldEdit {
        let field = self.focused();
        let len = value.chars().count();
        let cursor = &mut self.cursors[index_of(field)];
        *cursor = (*cursor).min(len);

        match key {
            KeyCode::Char(c) => {
                let mut next = value.to_string();
                next.insert(byte_offset(value, *cursor), c);
                *cursor += 1;
                self.flagged.retain(|f| *f != field);
                FieldEdit::Changed(next)
            }
            KeyCode::Backspace if *cursor > 0 => {
                let mut next = value.to_string();
                let start = byte_offset(value, *cursor - 1);
                let end = byte_offset(value, *cursor);
                next.replace_range(start..end, "");
                *cursor -= 1;
                FieldEdit::Changed(next)
            }
            KeyCode::Delete if *cursor < len => {
                let mut next = value.to_string();
                let start = byte_offset(value, *cursor);
                let end = byte_offset(value, *cursor + 1);
                next.replace_range(start..end, "");
                FieldEdit::Changed(next)
            }
            KeyCode::Left => {
                *cursor = cursor.saturating_sub(1);
                FieldEdit::Moved
            }
            KeyCode::Right => {
                *cursor = (*cursor + 1).min(len);
                FieldEdit::Moved
            }
            KeyCode::Home => {
                *cursor = 0;
                FieldEdit::Moved
            }
            KeyCode::End => {
                *cursor = len;
                FieldEdit::Moved
            }
            KeyCode::Backspace | KeyCode::Delete => FieldEdit::Moved,
            _ => FieldEdit::Ignored,
        }
    }
}

fn index_of(field: ContactField) -> usize {
    ContactField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}

fn byte_offset(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Loose check the way a browser `type="email"` input does it
pub fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => None,
        _ => Some("Please enter a valid email address".to_string()),
    }
}

/// Fields that keep the form from being submitted
pub fn blocking_fields(form: &ContactForm) -> Vec<ContactField> {
    let mut fields = form.missing_fields();
    if !fields.contains(&ContactField::Email) && validate_email(&form.email).is_some() {
        fields.push(ContactField::Email);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace_are_char_safe() {
        let mut cursor = FormCursor::new();
        let FieldEdit::Changed(v) = cursor.edit("", KeyCode::Char('س')) else {
            panic!("expected change");
        };
        let FieldEdit::Changed(v) = cursor.edit(&v, KeyCode::Char('a')) else {
            panic!("expected change");
        };
        assert_eq!(v, "سa");
        cursor.edit(&v, KeyCode::Left);
        let FieldEdit::Changed(v) = cursor.edit(&v, KeyCode::Backspace) else {
            panic!("expected change");
        };
        assert_eq!(v, "a");
        assert_eq!(cursor.cursor(ContactField::Name), 0);
    }

    #[test]
    fn test_focus_wraps() {
        let mut cursor = FormCursor::new();
        cursor.focus_prev();
        assert_eq!(cursor.focused(), ContactField::Message);
        cursor.focus_next();
        assert_eq!(cursor.focused(), ContactField::Name);
    }

    #[test]
    fn test_blocking_fields_include_bad_email() {
        let form = ContactForm {
            name: "Jo".to_string(),
            email: "not-an-email".to_string(),
            phone: "555".to_string(),
            message: "Hi".to_string(),
        };
        assert_eq!(blocking_fields(&form), vec![ContactField::Email]);
        assert!(validate_email("jo@example.com").is_none());
    }
}

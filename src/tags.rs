//! Tag entry: building an ordered list of tags from single-line keyboard input.
//!
//! [`TagBuffer::key_up`] follows the key-up model of a text field: by the time a
//! key-up arrives, the key's effect on the field has already been applied. A space
//! key-up therefore sees the partial tag *with* the space at its end, and a
//! backspace key-up sees it after the deletion.
//!
//! [`TagBuffer::press_backspace`] is the keyboard-driven entry point and decides on
//! the state *before* the erase, so deleting the last character of a partial tag
//! only empties it; the next backspace pops the previous tag.

/// Keys the tag field reacts to on key-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKey {
    Space,
    Backspace,
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagBuffer {
    tags: Vec<String>,
    partial: String,
    focus_requested: bool,
}

impl TagBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn partial(&self) -> &str {
        &self.partial
    }

    /// Field-level edit: a character lands in the partial tag.
    pub fn type_char(&mut self, c: char) {
        self.partial.push(c);
    }

    /// Field-level edit: the last character of the partial tag is deleted.
    pub fn erase_char(&mut self) {
        self.partial.pop();
    }

    /// Reacts to a key-up after the field has applied the key.
    pub fn key_up(&mut self, key: TagKey) {
        match key {
            TagKey::Space => {
                let mut tag = std::mem::take(&mut self.partial);
                // The committed text still ends with the space that triggered it.
                if tag.ends_with(char::is_whitespace) {
                    tag.pop();
                }
                self.commit(tag);
            }
            TagKey::Backspace if self.partial.is_empty() => {
                if let Some(last) = self.tags.pop() {
                    self.partial = last;
                }
            }
            TagKey::Backspace | TagKey::Other => {}
        }
    }

    /// Space pressed in the field: insert, then key-up.
    pub fn press_space(&mut self) {
        self.type_char(' ');
        self.key_up(TagKey::Space);
    }

    /// Backspace pressed in the field, judged before the erase. On an empty partial
    /// the last tag comes back for editing; otherwise one character is erased and no
    /// tag is popped, even when that empties the partial.
    pub fn press_backspace(&mut self) {
        if self.partial.is_empty() {
            self.key_up(TagKey::Backspace);
        } else {
            self.erase_char();
        }
    }

    /// Leaving the field commits whatever is still being typed.
    pub fn blur(&mut self) {
        if !self.partial.is_empty() {
            let tag = std::mem::take(&mut self.partial);
            self.commit(tag);
        }
    }

    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Returns and clears a pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Commits the partial tag and hands back the finished list.
    pub fn finish(mut self) -> Vec<String> {
        self.blur();
        self.tags
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn commit(&mut self, tag: String) {
        if tag.trim().is_empty() {
            return;
        }
        self.tags.push(tag);
    }
}

#[cfg(test)]
#[path = "tests/tags_tests.rs"]
mod tests;

//! Typed stand-ins for the page controls the handlers read from.

use crate::api::SelectedFile;

/// A form submission. Handlers call [`SubmitEvent::prevent_default`] before
/// doing anything else, so the default navigation never happens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// File picker. Only the first selected file is ever submitted.
#[derive(Debug, Default, Clone)]
pub struct FileInput {
    files: Vec<SelectedFile>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file: SelectedFile) -> Self {
        Self { files: vec![file] }
    }

    pub fn select(&mut self, file: SelectedFile) {
        self.files.push(file);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn first(&self) -> Option<&SelectedFile> {
        self.files.first()
    }
}

/// Single-line text control.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_file_input_submits_first_selection() {
        let mut input = FileInput::new();
        assert!(input.first().is_none());

        input.select(SelectedFile::new("a.txt", "first"));
        input.select(SelectedFile::new("b.txt", "second"));
        assert_eq!(input.first().map(|f| f.file_name.as_str()), Some("a.txt"));

        input.clear();
        assert!(input.first().is_none());
    }
}

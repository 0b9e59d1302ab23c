//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new on/off field
    pub fn toggle(name: &str, label: &str, initial: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Toggle(initial),
        }
    }

    /// Get the text value (returns empty string for toggle fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }

    /// Get the toggle value (returns false for text fields)
    pub fn as_bool(&self) -> bool {
        match &self.value {
            FieldValue::Toggle(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Flip a toggle field; no-op for text
    pub fn toggle_value(&mut self) {
        if let FieldValue::Toggle(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Toggle(b) => {
                if c == ' ' {
                    *b = !*b;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }
}

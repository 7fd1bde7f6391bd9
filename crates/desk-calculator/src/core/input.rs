//! The operand being typed

/// Most digits an operand may hold; sign and decimal point do not count
pub const MAX_DIGITS: usize = 9;

/// Text of the in-progress operand.
///
/// Always holds a value, starting at `"0"`. Appends beyond [`MAX_DIGITS`]
/// and second decimal points are ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Creates a buffer holding `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    /// Returns the buffer text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resets to `"0"`
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push('0');
    }

    /// Replaces the text wholesale, as when a total is loaded for chaining
    pub fn load(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of digit characters held
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.text.chars().filter(char::is_ascii_digit).count()
    }

    /// Returns true while another digit can be appended
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.digit_count() < MAX_DIGITS
    }

    /// Returns true if the text contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.text.contains('.')
    }

    /// Returns true if the text carries a minus sign
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// Appends a digit and drops a redundant leading zero
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || !self.has_room() {
            return;
        }
        self.text.push(digit);
        self.trim_leading_zero();
    }

    /// Appends a decimal point unless one is already present
    pub fn push_decimal(&mut self) {
        if self.has_decimal() || !self.has_room() {
            return;
        }
        self.text.push('.');
    }

    /// Prepends or strips the minus sign
    pub fn toggle_sign(&mut self) {
        if self.is_negative() {
            self.text.remove(0);
        } else {
            self.text.insert(0, '-');
        }
    }

    fn trim_leading_zero(&mut self) {
        if self.has_decimal() {
            return;
        }
        if self.text.len() > 1 && self.text.starts_with('0') {
            self.text.remove(0);
        } else if self.text.len() > 2 && self.text.starts_with("-0") {
            self.text.remove(1);
        }
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

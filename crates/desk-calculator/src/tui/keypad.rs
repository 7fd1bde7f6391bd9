//! Numerical keypad for the TUI calculator
//!
//! The keypad can be clicked with the mouse, highlights the button for the
//! last keystroke, and outlines the selected operator or `=` after a total.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Key, Operator, Selection};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The keystroke this button sends
    pub key: Key,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// Whether the button is the selected operator or `=` after a total
    pub outlined: bool,
}

impl KeypadButton {
    /// Creates a released button for a key
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
            outlined: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::new(Key::Digit(d))
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self::new(Key::Operator(op))
    }

    /// Label drawn on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.key.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let base = match self.key {
            Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
            Key::Operator(_) => Style::default().fg(Color::Yellow),
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Sign => Style::default().fg(Color::Cyan),
        };
        if self.outlined {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

/// The keypad layout, a 4-column grid of buttons
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ ± ] [ + ]
/// [ C ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 /
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Divide),
            // Row 2: 4 5 6 *
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Multiply),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Subtract),
            // Row 4: 0 . ± +
            KeypadButton::digit(0),
            KeypadButton::new(Key::Decimal),
            KeypadButton::new(Key::Sign),
            KeypadButton::operator(Operator::Add),
            // Row 5: C =
            KeypadButton::new(Key::Clear),
            KeypadButton::new(Key::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button sending a key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for a key, releasing the rest
    pub fn highlight(&mut self, key: Key) {
        for btn in &mut self.buttons {
            btn.set_pressed(btn.key == key);
        }
    }

    /// Outlines the button behind the current selection, if any
    pub fn outline(&mut self, selection: Selection) {
        for btn in &mut self.buttons {
            btn.outlined = match (btn.key, selection) {
                (Key::Operator(a), Selection::Operator(b)) => a == b,
                (Key::Equals, Selection::Total) => true,
                _ => false,
            };
        }
    }

    /// Returns the outlined button, if any
    #[must_use]
    pub fn outlined(&self) -> Option<Key> {
        self.buttons.iter().find(|b| b.outlined).map(|b| b.key)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the bordered area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        let index = row * self.cols + col;

        (row < self.rows && col < self.cols && index < self.buttons.len()).then_some(index)
    }

    /// Key of the button under a click position
    #[must_use]
    pub fn key_at(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        self.hit_test(area, x, y)
            .and_then(|i| self.get_button(i))
            .map(|b| b.key)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), btn_width);
                }
            }
        }
    }
}

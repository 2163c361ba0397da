//! Inline keyboard layouts and screens.

use crate::action::Action;

/// A single button: visible label and the action sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Ordered rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuLayout {
    rows: Vec<Vec<Button>>,
}

impl MenuLayout {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// All buttons, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// What the user sees after a transition: message text plus keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub layout: MenuLayout,
}

impl Screen {
    pub fn new(text: impl Into<String>, layout: MenuLayout) -> Self {
        Self {
            text: text.into(),
            layout,
        }
    }
}

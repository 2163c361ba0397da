//! Menu layouts. Both builders are pure: the result depends only on the fixed catalog.

use cbot_core::{catalog, Action, Button, MenuLayout};

/// Buttons per row in the currency picker.
const PICKER_COLUMNS: usize = 2;

/// Main menu: 2x2 grid of Rates, Convert, Favorites, About.
pub fn main_menu() -> MenuLayout {
    MenuLayout::new(vec![
        vec![
            Button::new("📊 Rates", Action::Rates),
            Button::new("💱 Convert", Action::Convert),
        ],
        vec![
            Button::new("❤️ Favorites", Action::Favorites),
            Button::new("ℹ️ About", Action::About),
        ],
    ])
}

/// Currency picker: every catalog code, two per row in catalog order, then a Back row.
pub fn currency_picker() -> MenuLayout {
    let mut rows: Vec<Vec<Button>> = catalog()
        .chunks(PICKER_COLUMNS)
        .map(|chunk| {
            chunk
                .iter()
                .map(|code| Button::new(code.code(), Action::Select(*code)))
                .collect()
        })
        .collect();
    rows.push(vec![Button::new("🔙 Back", Action::MainMenu)]);
    MenuLayout::new(rows)
}

//! Converts [`MenuLayout`] to a Telegram inline keyboard. Callback data is the action string.

use cbot_core::MenuLayout;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn to_inline_keyboard(layout: &MenuLayout) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = layout
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.action.to_string()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{currency_picker, main_menu};
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data.as_str(),
            other => panic!("expected callback button, got {:?}", other),
        }
    }

    #[test]
    fn test_main_menu_keyboard() {
        let markup = to_inline_keyboard(&main_menu());
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "📊 Rates");
        assert_eq!(callback_data(&markup.inline_keyboard[0][0]), "rates");
        assert_eq!(callback_data(&markup.inline_keyboard[0][1]), "convert");
        assert_eq!(callback_data(&markup.inline_keyboard[1][0]), "favorites");
        assert_eq!(callback_data(&markup.inline_keyboard[1][1]), "about");
    }

    #[test]
    fn test_picker_keyboard() {
        let markup = to_inline_keyboard(&currency_picker());
        assert_eq!(markup.inline_keyboard.len(), 6);
        assert_eq!(markup.inline_keyboard[0][1].text, "EUR");
        assert_eq!(callback_data(&markup.inline_keyboard[0][1]), "select:EUR");
        assert_eq!(markup.inline_keyboard[5].len(), 1);
        assert_eq!(callback_data(&markup.inline_keyboard[5][0]), "main_menu");
    }
}

//! UI Builder module for creating inline keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::t;

/// Callback payload for the "analyze an existing CV" choice
pub const CALLBACK_ANALYZE: &str = "analyze";
/// Callback payload for the "create a new CV" choice
pub const CALLBACK_CREATE_NEW: &str = "create_new";
/// Callback payload for the premium CV offer shown after an analysis
pub const CALLBACK_PREMIUM_CV: &str = "premium_cv";

/// Create the keyboard shown with the welcome message, one row per choice
pub fn create_start_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![InlineKeyboardButton::callback(
            t("button-analyze"),
            CALLBACK_ANALYZE,
        )],
        vec![InlineKeyboardButton::callback(
            t("button-create-new"),
            CALLBACK_CREATE_NEW,
        )],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// Create the single-button keyboard offering the paid CV service
pub fn create_premium_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        t("button-premium-cv"),
        CALLBACK_PREMIUM_CV,
    )]])
}

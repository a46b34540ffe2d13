//! # Bot Tests Module
//!
//! Tests for the inline keyboards and the message-handler helpers that do
//! not require a live Telegram connection.

use cvlens::bot::{create_premium_keyboard, create_start_keyboard, sanitize_file_name};
use cvlens::localization::init_localization;
use teloxide::types::InlineKeyboardButtonKind;

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_localization() {
        // Initialize localization if not already done
        let _ = init_localization();
    }

    /// The welcome keyboard offers exactly the two entry choices
    #[test]
    fn test_start_keyboard_has_two_choices() {
        setup_localization();

        let keyboard = create_start_keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);
        assert_eq!(keyboard.inline_keyboard[1].len(), 1);

        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "analyze"),
            other => panic!("unexpected button kind: {other:?}"),
        }
        match &keyboard.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "create_new"),
            other => panic!("unexpected button kind: {other:?}"),
        }

        // Labels come from the message catalogue
        assert!(keyboard.inline_keyboard[0][0].text.contains("تحليل"));
        assert!(keyboard.inline_keyboard[1][0].text.contains("إنشاء"));
    }

    /// The post-analysis keyboard offers only the premium CV button
    #[test]
    fn test_premium_keyboard_has_single_button() {
        setup_localization();

        let keyboard = create_premium_keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);

        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "premium_cv"),
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    /// Declared filenames are reduced to their final path component
    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_file_name("../../etc/resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_file_name("C:\\Users\\cv\\resume.docx"), "resume.docx");
        assert_eq!(sanitize_file_name("dir/"), "document");
        assert_eq!(sanitize_file_name(""), "document");
    }
}

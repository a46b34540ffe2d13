//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

// Import localization
use crate::localization::t;

use crate::config::Config;

use super::payment::send_payment_info;
use super::ui_builder::{CALLBACK_ANALYZE, CALLBACK_CREATE_NEW, CALLBACK_PREMIUM_CV};

/// Handle callback queries from inline keyboards
pub async fn callback_handler(bot: Bot, q: CallbackQuery, config: Arc<Config>) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query from user");

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;

        match q.data.as_deref() {
            Some(CALLBACK_ANALYZE) => {
                bot.send_message(chat_id, t("upload-prompt")).await?;
            }
            Some(CALLBACK_CREATE_NEW) | Some(CALLBACK_PREMIUM_CV) => {
                send_payment_info(&bot, chat_id, &config).await?;
            }
            other => {
                debug!(user_id = %q.from.id, data = ?other, "Ignoring unknown callback payload");
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

//! Payment instructions for the paid CV-writing service.
//!
//! One photo message: the configured QR code image with a fixed caption
//! describing the amount, the payment channel, the confirmation steps and
//! the manager contact. Informational only, no payment gateway involved.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::debug;

use crate::config::Config;
use crate::localization::t_args;

/// Send the payment QR photo with the instruction caption
pub async fn send_payment_info(bot: &Bot, chat_id: ChatId, config: &Config) -> Result<()> {
    debug!(user_id = %chat_id, "Sending payment instructions");

    let caption = t_args(
        "payment-caption",
        &[("manager", config.manager_username.as_str())],
    );

    bot.send_photo(chat_id, InputFile::url(config.qr_code_url.clone()))
        .caption(caption)
        .await?;

    Ok(())
}

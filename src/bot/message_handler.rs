//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

// Import localization
use crate::localization::{t, t_args};

use crate::analysis::{truncate_reply, AnalysisClient, MAX_REPLY_CHARS};
use crate::extraction::{extract_text, DocumentKind};

// Import UI builder functions
use super::ui_builder::{create_premium_keyboard, create_start_keyboard};

/// Download a Telegram file into `dir` under `file_name`
pub async fn download_file(
    bot: &Bot,
    file_id: teloxide::types::FileId,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let file = bot.get_file(file_id).await?;
    let url = format!(
        "https://api.telegram.org/file/bot{}/{}",
        bot.token(),
        file.path
    );

    let response = reqwest::get(&url).await?;
    let bytes = response.bytes().await?;

    let path = dir.join(file_name);
    std::fs::write(&path, &bytes)?;

    Ok(path)
}

/// Reduce a declared filename to its final path component.
///
/// Telegram clients control the declared name; stripping directories keeps
/// a crafted name from escaping the per-request temp directory.
pub fn sanitize_file_name(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    if base.is_empty() {
        "document"
    } else {
        base
    }
}

async fn handle_text_message(bot: &Bot, msg: &Message) -> Result<()> {
    if let Some(text) = msg.text() {
        debug!(user_id = %msg.chat.id, message_length = text.len(), "Received text message from user");

        // Handle /start command
        if text == "/start" {
            bot.send_message(msg.chat.id, t("welcome"))
                .reply_markup(create_start_keyboard())
                .await?;
        }
        // Handle regular text messages
        else {
            bot.send_message(msg.chat.id, t("text-fallback")).await?;
        }
    }
    Ok(())
}

async fn handle_document_message(
    bot: &Bot,
    msg: &Message,
    analysis: &AnalysisClient,
) -> Result<()> {
    let Some(doc) = msg.document() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    let Some(file_name) = doc.file_name.clone() else {
        debug!(user_id = %chat_id, "Received document without a filename");
        bot.send_message(chat_id, t("error-unsupported-type"))
            .await?;
        return Ok(());
    };

    // Unsupported suffixes are rejected before anything touches the disk
    let Some(kind) = DocumentKind::from_filename(&file_name) else {
        debug!(user_id = %chat_id, file_name = %file_name, "Rejecting unsupported document type");
        bot.send_message(chat_id, t("error-unsupported-type"))
            .await?;
        return Ok(());
    };

    bot.send_message(
        chat_id,
        t_args("analyzing-document", &[("name", file_name.as_str())]),
    )
    .await?;

    // One scoped directory per upload; removed with everything in it when
    // this handler returns
    let temp_dir = tempfile::tempdir()?;

    let file_path = match download_file(
        bot,
        doc.file.id.clone(),
        temp_dir.path(),
        sanitize_file_name(&file_name),
    )
    .await
    {
        Ok(path) => {
            debug!(user_id = %chat_id, path = %path.display(), "Document downloaded successfully");
            path
        }
        Err(e) => {
            error!(user_id = %chat_id, error = %e, "Failed to download document for user");
            bot.send_message(chat_id, t("error-download-failed"))
                .await?;
            return Err(e);
        }
    };

    let result = analyze_and_reply(bot, chat_id, &file_path, kind, analysis).await;

    // Always clean up the downloaded file, success or failure
    if let Err(cleanup_err) = std::fs::remove_file(&file_path) {
        error!(path = %file_path.display(), error = %cleanup_err, "Failed to clean up downloaded file");
    } else {
        debug!(path = %file_path.display(), "Downloaded file cleaned up successfully");
    }

    result
}

/// Extract text from the downloaded document, run the remote analysis and
/// send the replies. Every failure ends in exactly one user-visible message.
async fn analyze_and_reply(
    bot: &Bot,
    chat_id: ChatId,
    file_path: &Path,
    kind: DocumentKind,
    analysis: &AnalysisClient,
) -> Result<()> {
    let extracted = match extract_text(file_path, kind) {
        Ok(text) => text,
        Err(e) => {
            error!(user_id = %chat_id, error = %e, "Text extraction failed");
            let err_text = e.to_string();
            bot.send_message(
                chat_id,
                t_args("error-processing-failed", &[("error", err_text.as_str())]),
            )
            .await?;
            return Ok(());
        }
    };

    if extracted.trim().is_empty() {
        warn!(user_id = %chat_id, "Document yielded no extractable text");
        bot.send_message(chat_id, t("error-unreadable")).await?;
        return Ok(());
    }

    info!(
        user_id = %chat_id,
        chars_extracted = extracted.len(),
        "Text extraction completed successfully"
    );

    match analysis.analyze(&extracted).await {
        Ok(result) => {
            let reply = format!(
                "{}\n\n{}",
                t("analysis-header"),
                truncate_reply(&result, MAX_REPLY_CHARS)
            );
            bot.send_message(chat_id, reply).await?;

            // Offer the paid CV service after a successful free analysis
            bot.send_message(chat_id, t("premium-offer"))
                .reply_markup(create_premium_keyboard())
                .await?;
        }
        Err(e) => {
            error!(user_id = %chat_id, error = %e, "Remote analysis failed");
            let err_text = e.to_string();
            bot.send_message(
                chat_id,
                t_args("error-processing-failed", &[("error", err_text.as_str())]),
            )
            .await?;
        }
    }

    Ok(())
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "Received unsupported message type from user");

    bot.send_message(msg.chat.id, t("unsupported-message"))
        .await?;
    Ok(())
}

pub async fn message_handler(bot: Bot, msg: Message, analysis: Arc<AnalysisClient>) -> Result<()> {
    if msg.text().is_some() {
        handle_text_message(&bot, &msg).await?;
    } else if msg.document().is_some() {
        handle_document_message(&bot, &msg, &analysis).await?;
    } else {
        handle_unsupported_message(&bot, &msg).await?;
    }

    Ok(())
}

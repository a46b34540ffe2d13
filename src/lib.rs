//! # CvLens Telegram Bot
//!
//! A Telegram bot that extracts text from uploaded CV documents (PDF or
//! DOCX) and replies with an HR-style review produced by a remote
//! chat-completion model, plus a static QR payment flow for the paid
//! CV-writing service.

pub mod analysis;
pub mod bot;
pub mod config;
pub mod extraction;
pub mod extraction_errors;
pub mod localization;

//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text and document messages
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates the inline keyboards
//! - `payment`: Sends the payment QR photo and instructions

pub mod callback_handler;
pub mod message_handler;
pub mod payment;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use message_handler::{download_file, sanitize_file_name};
pub use payment::send_payment_info;
pub use ui_builder::{create_premium_keyboard, create_start_keyboard};

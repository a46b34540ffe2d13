//! User-facing message catalogue for the bot.
//!
//! All replies are fixed Arabic strings loaded from a Fluent resource at
//! startup. The bot's output language does not vary per user, so a single
//! `ar` bundle is enough.

use anyhow::{Context, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::fs;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;

/// Localization manager for the CvLens bot
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Create a new localization manager from the `ar` resource file
    pub fn new() -> Result<Self> {
        let locale: LanguageIdentifier = "ar".parse()?;
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);

        let resource_path = format!("./locales/{locale}/main.ftl");
        let content = fs::read_to_string(&resource_path)
            .with_context(|| format!("failed to read locale resource {resource_path}"))?;
        let resource = FluentResource::try_new(content)
            .map_err(|_| anyhow::anyhow!("failed to parse locale resource {resource_path}"))?;
        let _ = bundle.add_resource(resource);

        Ok(Self { bundle })
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let mut value = String::new();
        let _ = self
            .bundle
            .write_pattern(&mut value, pattern, args, &mut vec![]);

        value
    }
}

/// Global localization instance
static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

/// Initialize the global localization manager.
///
/// Called once from `main` before the dispatcher starts; a second call is a
/// no-op so tests can initialize unconditionally.
pub fn init_localization() -> Result<()> {
    let manager = LocalizationManager::new()?;
    let _ = LOCALIZATION_MANAGER.set(manager);
    Ok(())
}

/// Get the global localization manager
fn get_localization_manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER
        .get()
        .expect("Localization manager not initialized")
}

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    get_localization_manager().get_message(key, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut fluent_args = FluentArgs::new();
    for (k, v) in args {
        fluent_args.set(*k, FluentValue::from(*v));
    }
    get_localization_manager().get_message(key, Some(&fluent_args))
}

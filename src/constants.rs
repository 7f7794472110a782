//! Application constants and configuration

pub const APP_NAME: &str = "Image Editor History";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LOG_FILE_NAME: &str = "image-editor-history.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const LOCALE_FILE_NAME: &str = "locale.json";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info,image_editor_history=debug";

/// History panel title key (localized)
pub const HISTORY_TITLE: &str = "History";

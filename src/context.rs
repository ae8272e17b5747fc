//! Application Context
//!
//! Read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn title(&self) -> String {
        self.config.with_value(|config| config.title.clone())
    }

    /// Whether clearing the list needs a `window.confirm`
    pub fn confirm_clear(&self) -> bool {
        self.config.with_value(|config| config.confirm_clear)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

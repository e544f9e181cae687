use serde::{Deserialize, Serialize};

use super::display_format::DisplayFormat;
use super::theme::Theme;

/// User preferences shared by every calculator on the page.
/// Persisted through a [`crate::storage::store::PreferenceStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Grouping convention for all rendered results
    pub display_format: DisplayFormat,

    /// Active page theme
    pub theme: Theme,

    /// `true` once the user picked a theme explicitly (or one was loaded from storage).
    /// While `false`, the theme follows the system colour scheme.
    #[serde(default)]
    pub theme_explicit: bool,
}

impl Preferences {
    /// Defaults for a first visit: standard grouping, theme from the system.
    #[must_use]
    pub fn for_system(system_prefers_dark: bool) -> Self {
        Self {
            display_format: DisplayFormat::default(),
            theme: Theme::resolve(None, system_prefers_dark),
            theme_explicit: false,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::for_system(false)
    }
}

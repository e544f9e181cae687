use log::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::display_format::DisplayFormat;
use crate::models::preferences::Preferences;
use crate::models::theme::Theme;

use super::store::PreferenceStore;

/// Storage key of the number format preference.
pub const NUMBER_FORMAT_KEY: &str = "numberFormat";

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// High-level load/save of [`Preferences`] through any [`PreferenceStore`].
pub struct PreferenceManager;

impl PreferenceManager {
    /// Read preferences, falling back to defaults for anything missing or unreadable.
    ///
    /// A stored theme counts as an explicit choice; without one the theme
    /// follows `system_prefers_dark`.
    pub fn load(
        store: &dyn PreferenceStore,
        system_prefers_dark: bool,
    ) -> Result<Preferences, CoreError> {
        let mut prefs = Preferences::for_system(system_prefers_dark);

        if let Some(raw) = store.get(NUMBER_FORMAT_KEY)? {
            match raw.parse::<DisplayFormat>() {
                Ok(format) => prefs.display_format = format,
                Err(e) => warn!("Ignoring stored {NUMBER_FORMAT_KEY}: {e}"),
            }
        }

        if let Some(raw) = store.get(THEME_KEY)? {
            match raw.parse::<Theme>() {
                Ok(theme) => {
                    prefs.theme = theme;
                    prefs.theme_explicit = true;
                }
                Err(e) => warn!("Ignoring stored {THEME_KEY}: {e}"),
            }
        }

        debug!("Loaded preferences: {prefs:?}");
        Ok(prefs)
    }

    /// Write the number format, and the theme if it was chosen explicitly.
    pub fn save(store: &mut dyn PreferenceStore, prefs: &Preferences) -> Result<(), CoreError> {
        store.set(NUMBER_FORMAT_KEY, prefs.display_format.key())?;
        if prefs.theme_explicit {
            store.set(THEME_KEY, prefs.theme.key())?;
        } else {
            store.remove(THEME_KEY)?;
        }
        info!(
            "Saved preferences: format={}, theme={}",
            prefs.display_format.key(),
            prefs.theme
        );
        Ok(())
    }

    /// Forget every stored preference.
    pub fn clear(store: &mut dyn PreferenceStore) -> Result<(), CoreError> {
        store.remove(NUMBER_FORMAT_KEY)?;
        store.remove(THEME_KEY)
    }
}

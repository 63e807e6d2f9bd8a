//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
use crate::config::THEME_STORAGE_KEY;

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Display theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Value persisted in `localStorage`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `"dark"`/`"light"` is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Pick the initial theme: any stored value wins (only `"dark"` means dark),
/// and the system color-scheme signal decides only when nothing is stored.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(raw) => Theme::parse(raw).unwrap_or(Theme::Light),
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Read the theme preference from localStorage.
///
/// Falls back to `(prefers-color-scheme: dark)` when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

        let system_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        resolve_initial(stored.as_deref(), system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let classes = el.class_list();
            let _ = if theme.is_dark() {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Invert the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    toggle_with(current, persist)
}

/// Toggle with an explicit writer for the stored value.
pub(crate) fn toggle_with(current: Theme, write: impl FnOnce(&str)) -> Theme {
    let next = current.inverted();
    apply(next);
    write(next.as_str());
    next
}

fn persist(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(THEME_STORAGE_KEY, value).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

//! Light/dark theme preference.

use crate::storage::{LocalStore, THEME_KEY};

/// The two themes. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value stored in the local store and set as `data-theme`
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Name used in the feedback message
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light Mode",
            ThemePreference::Dark => "Dark Mode",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
        }
    }

    pub fn icons(&self) -> ThemeIcons {
        match self {
            ThemePreference::Light => ThemeIcons {
                light: IconState::SHOWN,
                dark: IconState::HIDDEN,
            },
            ThemePreference::Dark => ThemeIcons {
                light: IconState::HIDDEN,
                dark: IconState::SHOWN,
            },
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual state of one toggle icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconState {
    pub opacity: f32,
    pub rotation_deg: u16,
}

impl IconState {
    pub const SHOWN: IconState = IconState {
        opacity: 1.0,
        rotation_deg: 0,
    };
    pub const HIDDEN: IconState = IconState {
        opacity: 0.0,
        rotation_deg: 180,
    };

    /// Inline style for the icon element
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: rotate({}deg);",
            self.opacity, self.rotation_deg
        )
    }
}

/// Sun and moon icon states for a preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeIcons {
    pub light: IconState,
    pub dark: IconState,
}

/// Owns the current preference and keeps the local store in sync
pub struct ThemeController {
    preference: ThemePreference,
    store: LocalStore,
}

impl ThemeController {
    /// Read the saved preference, falling back to light
    pub fn load(store: LocalStore) -> Self {
        let preference = match store.get_item(THEME_KEY) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unrecognised theme preference, using light");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read theme preference");
                ThemePreference::default()
            }
        };

        Self { preference, store }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn icons(&self) -> ThemeIcons {
        self.preference.icons()
    }

    /// Flip the theme and persist it. Returns the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();

        if let Err(e) = self.store.set_item(THEME_KEY, self.preference.as_str()) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }

        tracing::info!(theme = %self.preference, "Theme changed");
        self.preference
    }
}

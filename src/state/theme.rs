//! Dark/light theme preference: resolution, persistence and change broadcast

use super::timers::TimerQueue;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::broadcast;

/// Storage key of the persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: [0xf1, 0xf5, 0xf9],
                background: [0x0f, 0x17, 0x2a],
                border: [0x33, 0x41, 0x55],
            },
            Self::Light => Palette {
                text: [0x1e, 0x29, 0x3b],
                background: [0xf8, 0xfa, 0xfc],
                border: [0xe2, 0xe8, 0xf0],
            },
        }
    }

    /// Icon offered by the toggle: a sun to leave dark mode, a moon to leave light mode
    pub fn icon(&self) -> ThemeIcon {
        match self {
            Self::Dark => ThemeIcon {
                class: "fas fa-sun text-yellow-300",
                title: "Switch to Light Mode",
            },
            Self::Light => ThemeIcon {
                class: "fas fa-moon text-indigo-600",
                title: "Switch to Dark Mode",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Theme-dependent colours as RGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: [u8; 3],
    pub background: [u8; 3],
    pub border: [u8; 3],
}

impl Palette {
    pub fn hex(rgb: [u8; 3]) -> String {
        format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIcon {
    pub class: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTimer {
    TransitionEnd,
}

/// Owns the page's theme state
pub struct ThemeController {
    current: Theme,
    /// Value of the document-level `data-theme` marker
    document_theme: Theme,
    /// Toggle icon, when the page carries one
    icon: Option<ThemeIcon>,
    store: Box<dyn KeyValueStore>,
    /// True until the user picks a theme explicitly
    follows_system: bool,
    transitioning: bool,
    events: broadcast::Sender<Theme>,
}

impl ThemeController {
    /// How long the transition marker stays on after a toggle
    pub const TRANSITION: Duration = Duration::from_millis(500);

    /// Resolve the initial theme: persisted value, then system preference, then dark
    pub fn new(store: Box<dyn KeyValueStore>, system: Option<Theme>, has_icon: bool) -> Self {
        let persisted = store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| value.parse::<Theme>().ok());
        let initial = persisted.or(system).unwrap_or_default();
        let (events, _) = broadcast::channel(16);

        let mut controller = Self {
            current: initial,
            document_theme: initial,
            icon: has_icon.then(|| initial.icon()),
            store,
            follows_system: persisted.is_none(),
            transitioning: false,
            events,
        };
        // A system or default theme is shown but never written back
        controller.show(initial);
        controller
    }

    /// Mark the document, update the icon, persist and broadcast
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!("could not persist theme preference: {err}");
        }
        self.show(theme);
    }

    /// Everything `apply_theme` does except persisting
    fn show(&mut self, theme: Theme) {
        self.document_theme = theme;
        if let Some(icon) = self.icon.as_mut() {
            *icon = theme.icon();
        }
        self.current = theme;
        tracing::info!("Theme changed to: {theme}");
        // No subscribers is fine
        let _ = self.events.send(theme);
    }

    /// Flip the theme and animate the switch
    pub fn toggle_theme<T: From<ThemeTimer>>(&mut self, timers: &mut TimerQueue<T>) -> Theme {
        self.follows_system = false;
        let next = self.current.toggled();
        self.apply_theme(next);
        self.transitioning = true;
        timers.schedule(Self::TRANSITION, ThemeTimer::TransitionEnd);
        next
    }

    /// Set a theme by name; anything but "dark"/"light" is ignored
    pub fn set_theme(&mut self, name: &str) -> bool {
        match name.parse::<Theme>() {
            Ok(theme) => {
                self.follows_system = false;
                self.apply_theme(theme);
                true
            }
            Err(err) => {
                tracing::debug!("{err}");
                false
            }
        }
    }

    /// System colour scheme changed; honoured only until the user chooses
    pub fn system_preference_changed(&mut self, theme: Theme) -> bool {
        if !self.follows_system {
            return false;
        }
        self.show(theme);
        true
    }

    pub fn on_timer(&mut self, timer: ThemeTimer) {
        match timer {
            ThemeTimer::TransitionEnd => self.transitioning = false,
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current == Theme::Dark
    }

    pub fn is_light_mode(&self) -> bool {
        self.current == Theme::Light
    }

    pub fn document_theme(&self) -> Theme {
        self.document_theme
    }

    pub fn icon(&self) -> Option<ThemeIcon> {
        self.icon
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn follows_system(&self) -> bool {
        self.follows_system
    }

    pub fn palette(&self) -> Palette {
        self.current.palette()
    }

    /// Persisted value, as the store currently holds it
    pub fn persisted(&self) -> Option<String> {
        self.store.get(THEME_STORAGE_KEY)
    }

    /// Receive every theme applied from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Theme> {
        self.events.subscribe()
    }
}

//! Platform-specific keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for save/search shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for help text
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Search shortcut display for help text
#[cfg(target_os = "macos")]
pub const SEARCH_SHORTCUT: &str = "Cmd+K";

#[cfg(not(target_os = "macos"))]
pub const SEARCH_SHORTCUT: &str = "Ctrl+K";

pub const THEME_SHORTCUT: &str = "Alt+T";

/// Page-level keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+S
    Save,
    /// Ctrl/Cmd+K
    FocusSearch,
    /// Escape
    CloseModals,
    /// Alt+D
    Dashboard,
    /// Alt+P
    Projects,
    /// Alt+T
    ToggleTheme,
}

impl Shortcut {
    /// Decode a key press. Either Ctrl or Cmd is accepted, as browsers do.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let command = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => Some(Self::CloseModals),
            KeyCode::Char(c) if command => match c.to_ascii_lowercase() {
                's' => Some(Self::Save),
                'k' => Some(Self::FocusSearch),
                _ => None,
            },
            KeyCode::Char(c) if alt => match c {
                'd' => Some(Self::Dashboard),
                'p' => Some(Self::Projects),
                't' => Some(Self::ToggleTheme),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether the shortcut is wired on the public site too
    pub fn is_global(&self) -> bool {
        matches!(self, Self::ToggleTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_and_cmd_both_save() {
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Shortcut::Save)
        );
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('s'), KeyModifiers::SUPER)),
            Some(Shortcut::Save)
        );
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('k'), SHORTCUT_MODIFIER)),
            Some(Shortcut::FocusSearch)
        );
    }

    #[test]
    fn test_alt_shortcuts() {
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('d'), KeyModifiers::ALT)),
            Some(Shortcut::Dashboard)
        );
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('p'), KeyModifiers::ALT)),
            Some(Shortcut::Projects)
        );
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('t'), KeyModifiers::ALT)),
            Some(Shortcut::ToggleTheme)
        );
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Char('s'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            Shortcut::from_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Shortcut::CloseModals)
        );
        assert!(Shortcut::ToggleTheme.is_global());
        assert!(!Shortcut::Save.is_global());
    }
}

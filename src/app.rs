//! Terminal preview state and key handling

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use directories::UserDirs;
use folio_ui::api::HttpPortfolioApi;
use folio_ui::clipboard::SystemClipboard;
use folio_ui::config::FolioConfig;
use folio_ui::features::ExportFile;
use folio_ui::page::{Focus, Navigation};
use folio_ui::platform::Shortcut;
use folio_ui::state::{PageMarkup, Surface, Theme};
use folio_ui::storage::open_default_store;
use folio_ui::{Collaborators, Page};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const PUBLIC_DEMO: &str = include_str!("../demos/public.json");
const ADMIN_DEMO: &str = include_str!("../demos/admin.json");

/// Pixels moved per arrow key
const SCROLL_STEP: f64 = 60.0;

/// Main application struct
pub struct App {
    pub page: Page,
    /// Wall-clock origin of page time
    started: Instant,
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Unsaved-changes prompt awaiting y/n
    pub confirm_prompt: Option<&'static str>,
    /// Column the next `s` press sorts by
    sort_column: usize,
    filter_index: usize,
    hero_hovered: bool,
}

impl App {
    /// Create the app from config and command-line arguments
    pub fn new(config: &FolioConfig, args: &[String]) -> Result<Self> {
        let markup = load_markup(config, args)?;
        let api = HttpPortfolioApi::new(config.api_base_url.as_deref())?;
        tracing::info!(base_url = %api.base_url(), "using backend");

        let page = Page::new(
            &markup,
            Collaborators {
                api: Box::new(api),
                clipboard: Box::new(SystemClipboard),
                store: open_default_store(),
                system_theme: system_theme(),
            },
        );

        Ok(Self {
            page,
            started: Instant::now(),
            quit: false,
            status_message: None,
            confirm_prompt: None,
            sort_column: 0,
            filter_index: 0,
            hero_hovered: false,
        })
    }

    /// Catch page time up with the wall clock
    pub async fn tick(&mut self) {
        let elapsed = self.started.elapsed();
        self.page.advance_to(elapsed).await;
    }

    /// Whether something on the page is animating and needs fast redraws
    pub fn is_animating(&self) -> bool {
        let smooth = self
            .page
            .scroll()
            .is_some_and(|s| s.is_smooth_scrolling());
        let soon = self
            .page
            .next_deadline()
            .is_some_and(|d| d.saturating_sub(self.page.now()) < Duration::from_millis(100));
        smooth || soon
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.confirm_prompt.is_some() {
            let leave = matches!(key.code, KeyCode::Char('y') | KeyCode::Enter);
            self.confirm_prompt = None;
            if let Some(target) = self.page.confirm_navigation(leave) {
                self.status_message = Some(format!("Navigated to {target}"));
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        // Escape leaves a focused input before it reaches page shortcuts
        let focused = self.page.focus().is_some();
        if focused && key.code == KeyCode::Esc {
            self.page.set_focus(None);
            return Ok(());
        }

        if Shortcut::from_key(&key).is_some() {
            let path_before = self.page.location().map(str::to_string);
            if self.page.handle_key(key).await {
                self.after_navigation(path_before);
                return Ok(());
            }
        }

        if focused {
            self.handle_focused_key(key).await;
        } else {
            self.handle_browse_key(key).await?;
        }
        Ok(())
    }

    fn after_navigation(&mut self, path_before: Option<String>) {
        if let Some(path) = self.page.pending_navigation() {
            tracing::debug!(path, "navigation needs confirmation");
            self.confirm_prompt = self.page.admin().and_then(|a| a.before_unload());
        } else if self.page.location().map(str::to_string) != path_before {
            if let Some(path) = self.page.location() {
                self.status_message = Some(format!("Navigated to {path}"));
            }
        }
    }

    async fn handle_focused_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.page.focus_next_field(false),
            KeyCode::BackTab => self.page.focus_next_field(true),
            KeyCode::Backspace => self.page.backspace(),
            KeyCode::Enter => {
                if let Some(Focus::Field(at)) = self.page.focus() {
                    self.page.submit(at.form).await;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.page.type_char(c)
            }
            _ => {}
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        let viewport = self.page.scroll().map_or(0.0, |s| s.viewport_height());
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Down | KeyCode::Char('j') => self.page.scroll_by(SCROLL_STEP),
            KeyCode::Up | KeyCode::Char('k') => self.page.scroll_by(-SCROLL_STEP),
            KeyCode::PageDown => self.page.scroll_by(viewport),
            KeyCode::PageUp => self.page.scroll_by(-viewport),
            KeyCode::Home | KeyCode::Char('g') => self.page.back_to_top(),
            KeyCode::Tab => self.page.focus_next_field(false),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let href = self
                    .page
                    .scroll()
                    .and_then(|s| s.nav_links().get(index))
                    .map(|l| l.href.clone());
                if let Some(href) = href {
                    let target = if href == "#" { "#home".to_string() } else { href };
                    self.page.follow_anchor(&target);
                }
            }
            KeyCode::Char('h') => {
                self.hero_hovered = !self.hero_hovered;
                self.page.hover_hero(self.hero_hovered);
            }
            _ => match self.page.surface() {
                Surface::Public => self.handle_site_key(key).await,
                Surface::Admin => self.handle_admin_key(key).await?,
            },
        }
        Ok(())
    }

    async fn handle_site_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') => {
                let filter = self.page.site().and_then(|s| {
                    let filters = s.filters();
                    (!filters.is_empty()).then(|| filters[self.filter_index % filters.len()].clone())
                });
                if let Some(filter) = filter {
                    self.filter_index += 1;
                    self.page.apply_filter(&filter);
                }
            }
            KeyCode::Char('l') => {
                if self.page.site().is_some_and(|s| s.has_load_more()) {
                    self.page.load_more_projects().await;
                }
            }
            KeyCode::Char('y') => {
                self.page.copy(0);
            }
            _ => {}
        }
    }

    async fn handle_admin_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('/') => {
                if let Some(index) = self.page.admin().and_then(|a| a.first_search()) {
                    self.page.set_focus(Some(Focus::Search(index)));
                }
            }
            KeyCode::Char('s') => {
                let columns = self
                    .page
                    .admin()
                    .and_then(|a| a.tables().first())
                    .map_or(0, |t| t.columns.len());
                if columns > 0 {
                    let column = self.sort_column % columns;
                    if !self.page.sort_table(0, column) {
                        self.status_message = Some("Column is not sortable".to_string());
                    }
                    self.sort_column += 1;
                }
            }
            KeyCode::Char('e') => self.export("projects")?,
            KeyCode::Char('E') => self.export("messages")?,
            KeyCode::Char('x') => {
                let id = self
                    .page
                    .admin()
                    .and_then(|a| a.projects().first())
                    .map(|p| p.id);
                if let Some(id) = id {
                    self.page.toggle_featured(id).await;
                }
            }
            KeyCode::Char('m') => {
                let id = self
                    .page
                    .admin()
                    .and_then(|a| a.modals().first())
                    .map(|m| m.id.clone());
                if let Some(id) = id {
                    self.page.open_modal(&id);
                }
            }
            KeyCode::Char('d') => {
                match self.page.navigate("/admin/logout") {
                    Navigation::Navigated(path) => {
                        self.status_message = Some(format!("Navigated to {path}"))
                    }
                    Navigation::NeedsConfirmation(prompt) => self.confirm_prompt = Some(prompt),
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn export(&mut self, kind: &str) -> Result<()> {
        let Some(file) = self.page.export(kind) else {
            return Ok(());
        };
        let path = write_export(&file)?;
        self.status_message = Some(format!("Exported {}", path.display()));
        Ok(())
    }
}

/// Save an export into the user's download directory
fn write_export(file: &ExportFile) -> Result<PathBuf> {
    let dir = UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(&file.filename);
    fs::write(&path, &file.contents)
        .with_context(|| format!("writing {} ({})", path.display(), file.mime_type))?;
    Ok(path)
}

/// Pick the page markup: explicit file argument, configured file, or a demo
fn load_markup(config: &FolioConfig, args: &[String]) -> Result<PageMarkup> {
    let admin_flag = args.iter().any(|a| a == "--admin");
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .or_else(|| config.markup_path.clone());

    if let Some(path) = path {
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        return PageMarkup::from_json(&content)
            .with_context(|| format!("parsing {}", path.display()));
    }

    let surface = if admin_flag {
        Surface::Admin
    } else {
        config.surface.unwrap_or_default()
    };
    let demo = match surface {
        Surface::Public => PUBLIC_DEMO,
        Surface::Admin => ADMIN_DEMO,
    };
    Ok(PageMarkup::from_json(demo)?)
}

/// Terminal background as reported by `COLORFGBG` ("fg;bg")
fn system_theme() -> Option<Theme> {
    let value = std::env::var("COLORFGBG").ok()?;
    parse_colorfgbg(&value)
}

fn parse_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.parse().ok()?;
    Some(match background {
        7 | 15 => Theme::Light,
        _ => Theme::Dark,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_pages_parse() {
        let public = PageMarkup::from_json(PUBLIC_DEMO).unwrap();
        assert_eq!(public.surface, Surface::Public);
        assert!(public.has_scroll_features());

        let admin = PageMarkup::from_json(ADMIN_DEMO).unwrap();
        assert_eq!(admin.surface, Surface::Admin);
        assert!(!admin.tables.is_empty());
    }

    #[test]
    fn test_admin_flag_selects_admin_demo() {
        let markup = load_markup(&FolioConfig::default(), &["--admin".to_string()]).unwrap();
        assert_eq!(markup.surface, Surface::Admin);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(parse_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(parse_colorfgbg("0;default;7"), Some(Theme::Light));
        assert_eq!(parse_colorfgbg("garbage"), None);
    }
}

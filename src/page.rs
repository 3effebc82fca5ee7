//! Page initialization and event routing
//!
//! `Page` builds every controller its markup asks for, owns the single
//! timer queue and sends each fired timer back to the controller that
//! scheduled it. Handlers run to completion; at most one request is
//! awaited per handler.

use crate::api::PortfolioApi;
use crate::clipboard::Clipboard;
use crate::features::{
    AdminTimer, AdminTools, ContactOutcome, ExportFile, SiteFeatures, SiteTimer, DASHBOARD_PATH,
    NO_ACTIVE_FORM_MESSAGE, PROJECTS_PATH,
};
use crate::platform::Shortcut;
use crate::state::{
    FieldRef, FormValidationController, NoticeTimer, NotificationCenter, PageMarkup, RuleSet,
    ScrollAnimationController, ScrollTimer, Severity, SubmitCheck, Surface, Theme,
    ThemeController, ThemeTimer, TimerQueue, FORM_ERRORS_MESSAGE,
};
use crate::storage::KeyValueStore;
use crossterm::event::KeyEvent;
use std::time::Duration;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please refresh the page.";
pub const FORM_SAVED_MESSAGE: &str = "Changes saved";

/// Every timer the page can schedule, tagged with its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    Notice(NoticeTimer),
    Theme(ThemeTimer),
    Scroll(ScrollTimer),
    Admin(AdminTimer),
    Site(SiteTimer),
}

impl From<NoticeTimer> for PageTimer {
    fn from(timer: NoticeTimer) -> Self {
        Self::Notice(timer)
    }
}

impl From<ThemeTimer> for PageTimer {
    fn from(timer: ThemeTimer) -> Self {
        Self::Theme(timer)
    }
}

impl From<ScrollTimer> for PageTimer {
    fn from(timer: ScrollTimer) -> Self {
        Self::Scroll(timer)
    }
}

impl From<AdminTimer> for PageTimer {
    fn from(timer: AdminTimer) -> Self {
        Self::Admin(timer)
    }
}

impl From<SiteTimer> for PageTimer {
    fn from(timer: SiteTimer) -> Self {
        Self::Site(timer)
    }
}

/// External services the page talks to
pub struct Collaborators {
    pub api: Box<dyn PortfolioApi>,
    pub clipboard: Box<dyn Clipboard>,
    pub store: Box<dyn KeyValueStore>,
    /// Colour scheme the system reports, if any
    pub system_theme: Option<Theme>,
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldRef),
    Search(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Navigated(String),
    /// Unsaved changes; the prompt must be confirmed first
    NeedsConfirmation(&'static str),
}

pub struct Page {
    surface: Surface,
    title: String,
    timers: TimerQueue<PageTimer>,
    notices: NotificationCenter,
    forms: Option<FormValidationController>,
    scroll: Option<ScrollAnimationController>,
    theme: ThemeController,
    admin: Option<AdminTools>,
    site: Option<SiteFeatures>,
    api: Box<dyn PortfolioApi>,
    clipboard: Box<dyn Clipboard>,
    focus: Option<Focus>,
    location: Option<String>,
    pending_location: Option<String>,
}

impl Page {
    /// Build the controllers the markup calls for and run their load-time work
    pub fn new(markup: &PageMarkup, collaborators: Collaborators) -> Self {
        let surface = markup.surface;
        let mut timers = TimerQueue::new();

        let mut scroll = ScrollAnimationController::from_markup(markup);
        if let Some(scroll) = scroll.as_mut() {
            scroll.start(&mut timers);
        }

        let (admin, site) = match surface {
            Surface::Admin => (Some(AdminTools::from_markup(markup)), None),
            Surface::Public => (None, Some(SiteFeatures::from_markup(markup))),
        };

        let page = Self {
            surface,
            title: markup.title.clone(),
            notices: NotificationCenter::new(surface.into()),
            forms: FormValidationController::from_markup(&markup.forms, RuleSet::from(surface)),
            scroll,
            theme: ThemeController::new(
                collaborators.store,
                collaborators.system_theme,
                markup.theme_icon,
            ),
            admin,
            site,
            api: collaborators.api,
            clipboard: collaborators.clipboard,
            focus: None,
            location: None,
            pending_location: None,
            timers,
        };
        tracing::info!(
            surface = surface.label(),
            forms = page.forms.as_ref().map_or(0, |f| f.forms().len()),
            scroll = page.scroll.is_some(),
            "page initialized"
        );
        page
    }

    /// Run every timer due at or before `until`, in deadline order
    pub async fn advance_to(&mut self, until: Duration) {
        while let Some(timer) = self.timers.pop_due(until) {
            self.dispatch(timer).await;
        }
        self.timers.set_now(until);

        if let Some(scroll) = self.scroll.as_mut() {
            if scroll.is_smooth_scrolling() {
                scroll.tick(&mut self.timers, until);
            }
        }
    }

    pub async fn advance_by(&mut self, delta: Duration) {
        let until = self.timers.now() + delta;
        self.advance_to(until).await;
    }

    async fn dispatch(&mut self, timer: PageTimer) {
        tracing::debug!(?timer, at = ?self.timers.now(), "timer fired");
        match timer {
            PageTimer::Notice(timer) => self.notices.on_timer(&mut self.timers, timer),
            PageTimer::Theme(timer) => self.theme.on_timer(timer),
            PageTimer::Scroll(timer) => {
                if let Some(scroll) = self.scroll.as_mut() {
                    scroll.on_timer(&mut self.timers, timer);
                }
            }
            PageTimer::Admin(timer) => {
                let due = self.admin.as_mut().and_then(|admin| admin.on_timer(timer));
                if let Some(index) = due {
                    self.autosave(index).await;
                }
            }
            PageTimer::Site(timer) => {
                if let Some(site) = self.site.as_mut() {
                    site.on_timer(timer);
                }
            }
        }
    }

    async fn autosave(&mut self, index: usize) {
        let (Some(admin), Some(forms)) = (self.admin.as_ref(), self.forms.as_ref()) else {
            return;
        };
        if let Some(form) = forms.form(index) {
            admin
                .autosave(self.api.as_ref(), &mut self.notices, &mut self.timers, form)
                .await;
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notices.notify(&mut self.timers, message, severity);
    }

    /// Last-resort handler for errors nothing else caught
    pub fn report_error(&mut self, err: &dyn std::error::Error) {
        tracing::error!("Global error: {err}");
        self.notify(GENERIC_ERROR_MESSAGE, Severity::Error);
    }

    // Forms

    /// Replace a field's value, as one input event
    pub fn input(&mut self, at: FieldRef, value: impl Into<String>) {
        let Some(forms) = self.forms.as_mut() else {
            return;
        };
        forms.on_input(at, value);
        if let (Some(admin), Some(form)) = (self.admin.as_mut(), forms.form_mut(at.form)) {
            admin.on_form_input(&mut self.timers, at.form, form);
        }
    }

    pub fn blur(&mut self, at: FieldRef) -> bool {
        self.forms.as_mut().is_some_and(|forms| forms.on_blur(at))
    }

    /// Move focus, blurring the field that loses it
    pub fn set_focus(&mut self, focus: Option<Focus>) {
        if let Some(Focus::Field(previous)) = self.focus {
            if focus != self.focus {
                self.blur(previous);
            }
        }
        if let (Some(Focus::Field(at)), Some(forms)) = (focus, self.forms.as_mut()) {
            if let Some(form) = forms.form_mut(at.form) {
                form.set_active_field(at.field);
            }
        }
        self.focus = focus;
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Cycle focus through the fields of the focused form, or into the first form
    pub fn focus_next_field(&mut self, backwards: bool) {
        let Some(forms) = self.forms.as_mut() else {
            return;
        };
        let next = match self.focus {
            Some(Focus::Field(at)) => forms.form_mut(at.form).and_then(|form| {
                form.set_active_field(at.field);
                if backwards {
                    form.prev_field();
                } else {
                    form.next_field();
                }
                (form.field_count() > 0)
                    .then(|| FieldRef::new(at.form, form.active_field_index))
            }),
            _ => forms
                .forms()
                .iter()
                .position(|f| f.field_count() > 0)
                .map(|form| FieldRef::new(form, 0)),
        };
        if next.is_some() {
            self.set_focus(next.map(Focus::Field));
        }
    }

    /// Type a character into whatever has focus
    pub fn type_char(&mut self, c: char) {
        match self.focus {
            Some(Focus::Field(at)) => {
                let value = self.field_value(at).map(|v| format!("{v}{c}"));
                if let Some(value) = value {
                    self.input(at, value);
                }
            }
            Some(Focus::Search(index)) => {
                let term = self.search_term(index).map(|t| format!("{t}{c}"));
                if let Some(term) = term {
                    self.search_input(index, term);
                }
            }
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Some(Focus::Field(at)) => {
                let value = self.field_value(at).map(|v| {
                    let mut v = v.to_string();
                    v.pop();
                    v
                });
                if let Some(value) = value {
                    self.input(at, value);
                }
            }
            Some(Focus::Search(index)) => {
                let term = self.search_term(index).map(|t| {
                    let mut t = t.to_string();
                    t.pop();
                    t
                });
                if let Some(term) = term {
                    self.search_input(index, term);
                }
            }
            None => {}
        }
    }

    fn field_value(&self, at: FieldRef) -> Option<&str> {
        self.forms.as_ref()?.field(at).map(|f| f.value())
    }

    fn search_term(&self, index: usize) -> Option<&str> {
        self.admin
            .as_ref()?
            .searches()
            .get(index)
            .map(|s| s.term.as_str())
    }

    /// Intercept a form submission. Valid forms are sent to their action.
    pub async fn submit(&mut self, form: usize) -> SubmitCheck {
        let Some(forms) = self.forms.as_mut() else {
            return SubmitCheck::Cancelled;
        };
        if forms.check_submission(form) == SubmitCheck::Cancelled {
            self.notices
                .notify(&mut self.timers, FORM_ERRORS_MESSAGE, Severity::Error);
            return SubmitCheck::Cancelled;
        }

        let Some(state) = forms.form_mut(form) else {
            return SubmitCheck::Cancelled;
        };

        if let Some(admin) = self.admin.as_mut() {
            admin.clear_unsaved(state);
            match self.api.submit_form(&state.action, state.pairs()).await {
                Ok(reply) if reply.success => {
                    let message = reply
                        .message
                        .unwrap_or_else(|| FORM_SAVED_MESSAGE.to_string());
                    self.notices
                        .notify(&mut self.timers, message, Severity::Success);
                }
                Ok(reply) => {
                    let message = reply
                        .message
                        .unwrap_or_else(|| FORM_ERRORS_MESSAGE.to_string());
                    self.notices.notify(&mut self.timers, message, Severity::Error);
                }
                Err(err) => {
                    tracing::error!(form = %state.id, "Global error: {err}");
                    self.notices
                        .notify(&mut self.timers, GENERIC_ERROR_MESSAGE, Severity::Error);
                }
            }
        } else if let Some(site) = self.site.as_mut() {
            let outcome = site
                .submit_contact(self.api.as_ref(), &mut self.notices, &mut self.timers, state)
                .await;
            if outcome == ContactOutcome::Sent {
                state.reset();
            }
        }
        SubmitCheck::Proceed
    }

    // Keyboard

    /// Route a key press through the page shortcuts. Returns false when the
    /// key is not a shortcut on this surface.
    pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(shortcut) = Shortcut::from_key(&key) else {
            return false;
        };
        if !shortcut.is_global() && self.surface != Surface::Admin {
            return false;
        }

        match shortcut {
            Shortcut::Save => self.save_current_form().await,
            Shortcut::FocusSearch => {
                if let Some(index) = self.admin.as_ref().and_then(|a| a.first_search()) {
                    self.set_focus(Some(Focus::Search(index)));
                }
            }
            Shortcut::CloseModals => {
                if let Some(admin) = self.admin.as_mut() {
                    admin.close_modals();
                }
            }
            Shortcut::Dashboard => {
                self.navigate(DASHBOARD_PATH);
            }
            Shortcut::Projects => {
                self.navigate(PROJECTS_PATH);
            }
            Shortcut::ToggleTheme => {
                self.toggle_theme();
            }
        }
        true
    }

    /// Ctrl/Cmd+S: submit the form holding focus
    pub async fn save_current_form(&mut self) {
        match self.focus {
            Some(Focus::Field(at)) => {
                self.submit(at.form).await;
            }
            _ => self.notify(NO_ACTIVE_FORM_MESSAGE, Severity::Info),
        }
    }

    /// Leave for `path`, unless unsaved changes need confirming first
    pub fn navigate(&mut self, path: &str) -> Navigation {
        if let Some(prompt) = self.admin.as_ref().and_then(|a| a.before_unload()) {
            self.pending_location = Some(path.to_string());
            return Navigation::NeedsConfirmation(prompt);
        }
        self.location = Some(path.to_string());
        Navigation::Navigated(path.to_string())
    }

    /// Answer the unsaved-changes prompt
    pub fn confirm_navigation(&mut self, leave: bool) -> Option<String> {
        let target = self.pending_location.take()?;
        if !leave {
            return None;
        }
        self.location = Some(target.clone());
        Some(target)
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn pending_navigation(&self) -> Option<&str> {
        self.pending_location.as_deref()
    }

    // Scrolling

    pub fn scroll_to(&mut self, y: f64) {
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.on_scroll(&mut self.timers, y);
        }
    }

    pub fn scroll_by(&mut self, delta: f64) {
        if let Some(y) = self.scroll.as_ref().map(|s| s.scroll_y() + delta) {
            self.scroll_to(y);
        }
    }

    /// In-page link click
    pub fn follow_anchor(&mut self, href: &str) -> bool {
        let now = self.timers.now();
        self.scroll
            .as_mut()
            .is_some_and(|scroll| scroll.scroll_to_anchor(href, now))
    }

    pub fn back_to_top(&mut self) {
        let now = self.timers.now();
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.smooth_scroll_to(0.0, now);
        }
    }

    pub fn hover_hero(&mut self, inside: bool) {
        if let Some(scroll) = self.scroll.as_mut() {
            scroll.hover_hero(&mut self.timers, inside);
        }
    }

    // Theme

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle_theme(&mut self.timers)
    }

    pub fn set_theme(&mut self, name: &str) -> bool {
        self.theme.set_theme(name)
    }

    pub fn system_preference_changed(&mut self, theme: Theme) -> bool {
        self.theme.system_preference_changed(theme)
    }

    // Admin tools

    pub fn search_input(&mut self, index: usize, term: impl Into<String>) {
        if let Some(admin) = self.admin.as_mut() {
            admin.search_input(&mut self.timers, index, term);
        }
    }

    pub fn sort_table(&mut self, table: usize, column: usize) -> bool {
        self.admin
            .as_mut()
            .is_some_and(|admin| admin.sort_table(table, column))
    }

    pub fn open_modal(&mut self, id: &str) -> bool {
        self.admin.as_mut().is_some_and(|admin| admin.open_modal(id))
    }

    pub fn export(&mut self, kind: &str) -> Option<ExportFile> {
        let result = self.admin.as_ref()?.export(kind);
        match result {
            Ok(file) => file,
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    pub async fn toggle_featured(&mut self, project_id: u64) {
        if let Some(admin) = self.admin.as_mut() {
            admin
                .toggle_featured(self.api.as_ref(), &mut self.notices, &mut self.timers, project_id)
                .await;
        }
    }

    // Public site

    pub fn apply_filter(&mut self, filter: &str) -> bool {
        self.site
            .as_mut()
            .is_some_and(|site| site.apply_filter(&mut self.timers, filter))
    }

    pub async fn load_more_projects(&mut self) -> usize {
        match self.site.as_mut() {
            Some(site) => {
                site.load_more_projects(self.api.as_ref(), &mut self.notices, &mut self.timers)
                    .await
            }
            None => 0,
        }
    }

    pub fn copy(&mut self, button: usize) -> bool {
        match self.site.as_ref() {
            Some(site) => site.copy(
                self.clipboard.as_mut(),
                &mut self.notices,
                &mut self.timers,
                button,
            ),
            None => false,
        }
    }

    // Accessors

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn notices(&self) -> &NotificationCenter {
        &self.notices
    }

    pub fn forms(&self) -> Option<&FormValidationController> {
        self.forms.as_ref()
    }

    pub fn scroll(&self) -> Option<&ScrollAnimationController> {
        self.scroll.as_ref()
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn admin(&self) -> Option<&AdminTools> {
        self.admin.as_ref()
    }

    pub fn site(&self) -> Option<&SiteFeatures> {
        self.site.as_ref()
    }
}

//! Public site features: contact form submission, project filtering,
//! loading more projects and copy buttons.

use crate::api::{PortfolioApi, ProjectSummary};
use crate::clipboard::Clipboard;
use crate::state::{
    CopyMarkup, FormState, NoticeTimer, NotificationCenter, PageMarkup, ProjectMarkup, Severity,
    TimerId, TimerQueue,
};
use std::time::Duration;

pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const CONTACT_FAILED_MESSAGE: &str =
    "Error sending message. Please try again or email me directly.";
pub const LOAD_MORE_FAILED_MESSAGE: &str = "Error loading more projects";
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

pub const ALL_FILTER: &str = "all";
pub const CARD_FADE_IN_DELAY: Duration = Duration::from_millis(100);
pub const CARD_HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTimer {
    CardFadeIn(usize),
    CardHide(usize),
}

/// Visual state of a project card while filters change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Shown,
    /// Displayed, waiting to fade in
    FadingIn,
    /// Still displayed while it fades out
    FadingOut,
    Hidden,
}

impl CardState {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub project: ProjectMarkup,
    pub state: CardState,
    pending: Option<TimerId>,
}

impl ProjectCard {
    fn new(project: ProjectMarkup) -> Self {
        Self {
            project,
            state: CardState::Shown,
            pending: None,
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter == ALL_FILTER || self.project.categories.iter().any(|c| c == filter)
    }
}

impl From<ProjectSummary> for ProjectMarkup {
    fn from(summary: ProjectSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            tech_stack: summary.tech_stack,
            categories: Vec::new(),
            featured: summary.featured,
        }
    }
}

/// Result of a contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// Server answered `success: false`
    Rejected(String),
    Failed,
    /// A previous submission is still in flight
    Busy,
}

#[derive(Debug)]
pub struct SiteFeatures {
    is_loading: bool,
    filters: Vec<String>,
    active_filter: Option<String>,
    location_hash: Option<String>,
    cards: Vec<ProjectCard>,
    copy_buttons: Vec<CopyMarkup>,
    load_more: bool,
}

impl SiteFeatures {
    pub fn from_markup(markup: &PageMarkup) -> Self {
        Self {
            is_loading: false,
            filters: markup.filters.clone(),
            active_filter: None,
            location_hash: None,
            cards: markup.projects.iter().cloned().map(ProjectCard::new).collect(),
            copy_buttons: markup.copy_buttons.clone(),
            load_more: markup.load_more,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// POST the contact form. The caller resets the form on `Sent`.
    pub async fn submit_contact<T: From<NoticeTimer>>(
        &mut self,
        api: &dyn PortfolioApi,
        notices: &mut NotificationCenter,
        timers: &mut TimerQueue<T>,
        form: &FormState,
    ) -> ContactOutcome {
        if self.is_loading {
            return ContactOutcome::Busy;
        }
        self.is_loading = true;
        let outcome = match api.submit_form(&form.action, form.pairs()).await {
            Ok(reply) if reply.success => {
                tracing::info!(form = %form.id, "contact message sent");
                notices.notify(timers, CONTACT_SENT_MESSAGE, Severity::Success);
                ContactOutcome::Sent
            }
            Ok(reply) => {
                let message = reply.message.unwrap_or_default();
                tracing::warn!(form = %form.id, "contact message rejected: {message}");
                notices.notify(
                    timers,
                    format!("Error sending message: {message}"),
                    Severity::Error,
                );
                ContactOutcome::Rejected(message)
            }
            Err(err) => {
                tracing::error!(form = %form.id, "contact form error: {err}");
                notices.notify(timers, CONTACT_FAILED_MESSAGE, Severity::Error);
                ContactOutcome::Failed
            }
        };
        self.is_loading = false;
        outcome
    }

    /// Filter button click; `false` for a filter the page does not offer
    pub fn apply_filter<T: From<SiteTimer>>(&mut self, timers: &mut TimerQueue<T>, filter: &str) -> bool {
        if !self.filters.iter().any(|f| f == filter) {
            return false;
        }
        self.active_filter = Some(filter.to_string());

        for (index, card) in self.cards.iter_mut().enumerate() {
            if let Some(id) = card.pending.take() {
                timers.cancel(id);
            }
            if card.matches(filter) {
                card.state = CardState::FadingIn;
                card.pending = Some(timers.schedule(CARD_FADE_IN_DELAY, SiteTimer::CardFadeIn(index)));
            } else {
                card.state = CardState::FadingOut;
                card.pending = Some(timers.schedule(CARD_HIDE_DELAY, SiteTimer::CardHide(index)));
            }
        }

        self.location_hash = Some(format!("#projects-{filter}"));
        tracing::debug!(filter, "project filter applied");
        true
    }

    pub fn on_timer(&mut self, timer: SiteTimer) {
        match timer {
            SiteTimer::CardFadeIn(index) => {
                if let Some(card) = self.cards.get_mut(index) {
                    card.pending = None;
                    card.state = CardState::Shown;
                }
            }
            SiteTimer::CardHide(index) => {
                if let Some(card) = self.cards.get_mut(index) {
                    card.pending = None;
                    card.state = CardState::Hidden;
                }
            }
        }
    }

    /// Fetch the project list and append cards not yet on the page
    pub async fn load_more_projects<T: From<NoticeTimer>>(
        &mut self,
        api: &dyn PortfolioApi,
        notices: &mut NotificationCenter,
        timers: &mut TimerQueue<T>,
    ) -> usize {
        match api.list_projects().await {
            Ok(projects) => {
                let count = projects.len();
                for summary in projects {
                    if !self.cards.iter().any(|c| c.project.id == summary.id) {
                        self.cards.push(ProjectCard::new(summary.into()));
                    }
                }
                notices.notify(timers, format!("Loaded {count} projects"), Severity::Success);
                count
            }
            Err(err) => {
                if err.is_network() {
                    tracing::warn!("backend unreachable while loading projects: {err}");
                } else {
                    tracing::error!("loading projects failed: {err}");
                }
                notices.notify(timers, LOAD_MORE_FAILED_MESSAGE, Severity::Error);
                0
            }
        }
    }

    pub fn copy<T: From<NoticeTimer>>(
        &self,
        clipboard: &mut dyn Clipboard,
        notices: &mut NotificationCenter,
        timers: &mut TimerQueue<T>,
        button: usize,
    ) -> bool {
        let Some(button) = self.copy_buttons.get(button) else {
            return false;
        };
        match clipboard.set_text(&button.text) {
            Ok(()) => {
                notices.notify(timers, COPIED_MESSAGE, Severity::Success);
                true
            }
            Err(err) => {
                tracing::error!(button = %button.id, "failed to copy: {err}");
                notices.notify(timers, COPY_FAILED_MESSAGE, Severity::Error);
                false
            }
        }
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn location_hash(&self) -> Option<&str> {
        self.location_hash.as_deref()
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn copy_buttons(&self) -> &[CopyMarkup] {
        &self.copy_buttons
    }

    pub fn has_load_more(&self) -> bool {
        self.load_more
    }
}

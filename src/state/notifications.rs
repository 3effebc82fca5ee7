//! Toast notifications and their enter/show/leave lifecycle

use super::markup::Surface;
use super::timers::TimerQueue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How severe a notification is; affects colour and icon only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }

    /// Accent colour name used for the border/background
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Success => "green",
            Self::Error => "red",
        }
    }
}

/// Lifecycle of a notification element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Inserted offscreen, waiting for the slide-in
    Entering,
    Visible,
    /// Sliding out, about to be removed
    Leaving,
    Removed,
}

/// What to do with existing toasts when a new one arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePolicy {
    /// Toasts pile up (admin panel)
    Stack,
    /// A new toast removes every toast on screen first (public site)
    ReplaceAll,
}

impl From<Surface> for NoticePolicy {
    fn from(surface: Surface) -> Self {
        match surface {
            Surface::Admin => Self::Stack,
            Surface::Public => Self::ReplaceAll,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub phase: NoticePhase,
}

impl Notification {
    /// Slid in and not yet gone; entering toasts are still offscreen
    pub fn is_on_screen(&self) -> bool {
        matches!(self.phase, NoticePhase::Visible | NoticePhase::Leaving)
    }
}

/// Timer steps of a single notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTimer {
    Show(Uuid),
    Hide(Uuid),
    Remove(Uuid),
}

/// Owns the page's notification list
#[derive(Debug)]
pub struct NotificationCenter {
    policy: NoticePolicy,
    notices: Vec<Notification>,
}

impl NotificationCenter {
    /// Delay before the slide-in starts
    pub const ENTRY_DELAY: Duration = Duration::from_millis(100);
    /// How long a notification stays fully visible
    pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);
    /// Slide-out time before the element is removed
    pub const EXIT_DELAY: Duration = Duration::from_millis(300);

    pub fn new(policy: NoticePolicy) -> Self {
        Self {
            policy,
            notices: Vec::new(),
        }
    }

    pub fn policy(&self) -> NoticePolicy {
        self.policy
    }

    /// Show a transient message.
    ///
    /// Concurrent calls get independent timers; nothing is queued or
    /// deduplicated.
    pub fn notify<T: From<NoticeTimer>>(
        &mut self,
        timers: &mut TimerQueue<T>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Uuid {
        if self.policy == NoticePolicy::ReplaceAll {
            self.notices.clear();
        }

        let notice = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
            phase: NoticePhase::Entering,
        };
        let id = notice.id;
        tracing::debug!(%id, ?severity, message = %notice.message, "notification raised");
        self.notices.push(notice);

        timers.schedule(Self::ENTRY_DELAY, NoticeTimer::Show(id));
        timers.schedule(
            Self::ENTRY_DELAY + Self::DISPLAY_DURATION,
            NoticeTimer::Hide(id),
        );
        id
    }

    /// Advance one notification's lifecycle. Timers for notifications that
    /// were already removed are ignored.
    pub fn on_timer<T: From<NoticeTimer>>(&mut self, timers: &mut TimerQueue<T>, timer: NoticeTimer) {
        match timer {
            NoticeTimer::Show(id) => {
                if let Some(notice) = self.get_mut(id) {
                    notice.phase = NoticePhase::Visible;
                }
            }
            NoticeTimer::Hide(id) => {
                if let Some(notice) = self.get_mut(id) {
                    notice.phase = NoticePhase::Leaving;
                    timers.schedule(Self::EXIT_DELAY, NoticeTimer::Remove(id));
                }
            }
            NoticeTimer::Remove(id) => {
                self.notices.retain(|n| n.id != id);
            }
        }
    }

    /// Notifications currently in the page, oldest first
    pub fn notices(&self) -> &[Notification] {
        &self.notices
    }

    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.notices.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Notification> {
        self.notices.iter_mut().find(|n| n.id == id)
    }

    /// Phase of a notification; anything no longer in the page is `Removed`
    pub fn phase_of(&self, id: Uuid) -> NoticePhase {
        self.get(id).map_or(NoticePhase::Removed, |n| n.phase)
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

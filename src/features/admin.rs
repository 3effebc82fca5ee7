//! Admin panel tooling
//!
//! Unsaved-changes tracking, debounced auto-save, live search, sortable
//! tables, data export, the featured toggle and modal overlays.

use crate::api::PortfolioApi;
use crate::error::Result;
use crate::state::{
    ColumnMarkup, Debouncer, FormState, MessageMarkup, NoticeTimer, NotificationCenter, PageMarkup,
    ProjectMarkup, Severity, SortKind, TableMarkup, TimerQueue,
};
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Duration;

pub const UNSAVED_CHANGES_PROMPT: &str =
    "You have unsaved changes. Are you sure you want to leave?";
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const AUTOSAVED_MESSAGE: &str = "Changes saved automatically";
pub const FEATURED_UPDATED_MESSAGE: &str = "Project featured status updated";
pub const FEATURED_ERROR_MESSAGE: &str = "Error updating featured status";
pub const NO_ACTIVE_FORM_MESSAGE: &str = "No active form to save";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
pub const PROJECTS_PATH: &str = "/admin/projects";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTimer {
    /// Auto-save the form at this index
    AutoSave(usize),
    /// Run the search box at this index
    Search(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct SearchBox {
    pub id: String,
    pub term: String,
    pub items: Vec<SearchItem>,
    debounce: Debouncer,
}

impl SearchBox {
    fn perform(&mut self) {
        let term = self.term.to_lowercase();
        for item in &mut self.items {
            item.visible = item.text.to_lowercase().contains(&term);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|i| i.visible).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SortableTable {
    pub id: String,
    pub columns: Vec<ColumnMarkup>,
    pub rows: Vec<Vec<String>>,
    /// Column carrying the sort marker; only one at a time
    pub sorted: Option<(usize, SortOrder)>,
}

impl SortableTable {
    fn from_markup(markup: &TableMarkup) -> Self {
        Self {
            id: markup.id.clone(),
            columns: markup.columns.clone(),
            rows: markup.rows.clone(),
            sorted: None,
        }
    }

    /// Header click. Returns false when the column is not sortable.
    pub fn sort_by(&mut self, column: usize) -> bool {
        let Some(kind) = self.columns.get(column).and_then(|c| c.sort) else {
            return false;
        };
        let order = match self.sorted {
            Some((col, SortOrder::Asc)) if col == column => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        self.rows.sort_by(|a, b| {
            let a = a.get(column).map(|s| s.trim()).unwrap_or_default();
            let b = b.get(column).map(|s| s.trim()).unwrap_or_default();
            let ordering = compare_cells(kind, a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        self.sorted = Some((column, order));
        true
    }

    pub fn marker(&self, column: usize) -> Option<&'static str> {
        self.sorted
            .filter(|(col, _)| *col == column)
            .map(|(_, order)| order.marker())
    }
}

fn compare_cells(kind: SortKind, a: &str, b: &str) -> Ordering {
    match kind {
        // Non-numeric cells sort after every number
        SortKind::Numeric => match (a.parse::<f64>().ok(), b.parse::<f64>().ok()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKind::Text => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub id: String,
    pub hidden: bool,
}

/// A file produced by an export button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: String,
    pub contents: String,
}

#[derive(Serialize)]
struct ProjectsExport<'a> {
    projects: &'a [ProjectMarkup],
}

/// Star icon class for a project's featured flag
pub fn featured_icon(featured: bool) -> &'static str {
    if featured {
        "fas fa-star text-yellow-400"
    } else {
        "far fa-star text-gray-400"
    }
}

#[derive(Debug)]
pub struct AdminTools {
    unsaved: bool,
    autosave: Vec<Debouncer>,
    searches: Vec<SearchBox>,
    tables: Vec<SortableTable>,
    modals: Vec<Modal>,
    projects: Vec<ProjectMarkup>,
    messages: Vec<MessageMarkup>,
}

impl AdminTools {
    /// Auto-save slots line up with `markup.forms` by index
    pub fn from_markup(markup: &PageMarkup) -> Self {
        Self {
            unsaved: false,
            autosave: markup
                .forms
                .iter()
                .map(|_| Debouncer::new(AUTOSAVE_DELAY))
                .collect(),
            searches: markup
                .search_boxes
                .iter()
                .map(|s| SearchBox {
                    id: s.id.clone(),
                    term: String::new(),
                    items: s
                        .items
                        .iter()
                        .map(|text| SearchItem {
                            text: text.clone(),
                            visible: true,
                        })
                        .collect(),
                    debounce: Debouncer::new(SEARCH_DEBOUNCE),
                })
                .collect(),
            tables: markup.tables.iter().map(SortableTable::from_markup).collect(),
            modals: markup
                .modals
                .iter()
                .map(|id| Modal {
                    id: id.clone(),
                    hidden: true,
                })
                .collect(),
            projects: markup.projects.clone(),
            messages: markup.messages.clone(),
        }
    }

    pub fn mark_form_changed(&mut self, form: &mut FormState) {
        self.unsaved = true;
        form.unsaved = true;
    }

    /// Input in `form`; also (re)starts its auto-save countdown
    pub fn on_form_input<T: From<AdminTimer>>(
        &mut self,
        timers: &mut TimerQueue<T>,
        index: usize,
        form: &mut FormState,
    ) {
        self.mark_form_changed(form);
        if form.autosave {
            if let Some(debounce) = self.autosave.get_mut(index) {
                debounce.schedule(timers, AdminTimer::AutoSave(index));
            }
        }
    }

    /// Submission went ahead; nothing is pending any more
    pub fn clear_unsaved(&mut self, form: &mut FormState) {
        self.unsaved = false;
        form.unsaved = false;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Prompt to show when the user tries to leave the page
    pub fn before_unload(&self) -> Option<&'static str> {
        self.unsaved.then_some(UNSAVED_CHANGES_PROMPT)
    }

    /// Handle a fired timer. Returns the index of a form that is due for auto-save.
    pub fn on_timer(&mut self, timer: AdminTimer) -> Option<usize> {
        match timer {
            AdminTimer::AutoSave(index) => {
                if let Some(debounce) = self.autosave.get_mut(index) {
                    debounce.fired();
                }
                Some(index)
            }
            AdminTimer::Search(index) => {
                if let Some(search) = self.searches.get_mut(index) {
                    search.debounce.fired();
                    search.perform();
                    tracing::debug!(search = %search.id, visible = search.visible_count(), "search applied");
                }
                None
            }
        }
    }

    /// POST the form in the background. Failures are logged, never shown.
    pub async fn autosave<T: From<NoticeTimer>>(
        &self,
        api: &dyn PortfolioApi,
        notices: &mut NotificationCenter,
        timers: &mut TimerQueue<T>,
        form: &FormState,
    ) {
        match api.submit_form(&form.action, form.pairs()).await {
            Ok(reply) if reply.success => {
                tracing::info!(form = %form.id, "auto-saved");
                notices.notify(timers, AUTOSAVED_MESSAGE, Severity::Success);
            }
            Ok(reply) => tracing::warn!(
                form = %form.id,
                message = reply.message.as_deref().unwrap_or_default(),
                "auto-save was rejected"
            ),
            Err(err) => tracing::error!(form = %form.id, "auto-save failed: {err}"),
        }
    }

    /// Typing in a search box; filtering runs once typing settles
    pub fn search_input<T: From<AdminTimer>>(
        &mut self,
        timers: &mut TimerQueue<T>,
        index: usize,
        term: impl Into<String>,
    ) {
        if let Some(search) = self.searches.get_mut(index) {
            search.term = term.into();
            search.debounce.schedule(timers, AdminTimer::Search(index));
        }
    }

    pub fn searches(&self) -> &[SearchBox] {
        &self.searches
    }

    /// Index of the search box Ctrl/Cmd+K focuses
    pub fn first_search(&self) -> Option<usize> {
        (!self.searches.is_empty()).then_some(0)
    }

    pub fn sort_table(&mut self, table: usize, column: usize) -> bool {
        self.tables
            .get_mut(table)
            .is_some_and(|t| t.sort_by(column))
    }

    pub fn tables(&self) -> &[SortableTable] {
        &self.tables
    }

    pub fn open_modal(&mut self, id: &str) -> bool {
        match self.modals.iter_mut().find(|m| m.id == id) {
            Some(modal) => {
                modal.hidden = false;
                true
            }
            None => false,
        }
    }

    pub fn close_modals(&mut self) {
        for modal in &mut self.modals {
            modal.hidden = true;
        }
    }

    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    /// Build the download for an export button; unknown kinds produce nothing
    pub fn export(&self, kind: &str) -> Result<Option<ExportFile>> {
        let file = match kind {
            "projects" => ExportFile {
                filename: "projects.json".to_string(),
                mime_type: "application/json".to_string(),
                contents: serde_json::to_string_pretty(&ProjectsExport {
                    projects: &self.projects,
                })?,
            },
            "messages" => ExportFile {
                filename: "messages.csv".to_string(),
                mime_type: "text/csv".to_string(),
                contents: self.messages_csv()?,
            },
            other => {
                tracing::debug!(kind = other, "ignoring unknown export kind");
                return Ok(None);
            }
        };
        Ok(Some(file))
    }

    fn messages_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Name", "Email", "Subject", "Date"])?;
        for message in &self.messages {
            writer.write_record([
                &message.name,
                &message.email,
                &message.subject,
                &message.date,
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| crate::error::FolioError::Storage(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn toggle_featured<T: From<NoticeTimer>>(
        &mut self,
        api: &dyn PortfolioApi,
        notices: &mut NotificationCenter,
        timers: &mut TimerQueue<T>,
        project_id: u64,
    ) {
        match api.toggle_featured(project_id).await {
            Ok(reply) if reply.success => {
                notices.notify(timers, FEATURED_UPDATED_MESSAGE, Severity::Success);
                if let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) {
                    project.featured = reply.featured;
                }
            }
            Ok(_) => tracing::warn!(project_id, "featured toggle was refused"),
            Err(err) => {
                tracing::error!(project_id, "featured toggle failed: {err}");
                notices.notify(timers, FEATURED_ERROR_MESSAGE, Severity::Error);
            }
        }
    }

    pub fn projects(&self) -> &[ProjectMarkup] {
        &self.projects
    }

    pub fn messages(&self) -> &[MessageMarkup] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FeaturedReply, FormReply, MockPortfolioApi};
    use crate::error::FolioError;
    use crate::state::{FieldMarkup, FormMarkup, NoticePolicy, RuleSet, SearchMarkup};
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    enum Timer {
        Admin(AdminTimer),
        Notice(NoticeTimer),
    }

    impl From<AdminTimer> for Timer {
        fn from(timer: AdminTimer) -> Self {
            Self::Admin(timer)
        }
    }

    impl From<NoticeTimer> for Timer {
        fn from(timer: NoticeTimer) -> Self {
            Self::Notice(timer)
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn markup() -> PageMarkup {
        PageMarkup {
            forms: vec![FormMarkup {
                id: "project-form".into(),
                action: "/admin/projects/1/edit".into(),
                autosave: true,
                fields: vec![FieldMarkup {
                    name: "title".into(),
                    required: true,
                    ..Default::default()
                }],
            }],
            search_boxes: vec![SearchMarkup {
                id: "search".into(),
                items: vec!["Folio Site".into(), "Chat Bot".into(), "Portfolio API".into()],
            }],
            tables: vec![TableMarkup {
                id: "projects".into(),
                columns: vec![
                    ColumnMarkup {
                        label: "Title".into(),
                        sort: Some(SortKind::Text),
                    },
                    ColumnMarkup {
                        label: "Views".into(),
                        sort: Some(SortKind::Numeric),
                    },
                    ColumnMarkup {
                        label: "Actions".into(),
                        sort: None,
                    },
                ],
                rows: vec![
                    vec!["beta".into(), "10".into(), "".into()],
                    vec!["Alpha".into(), "9".into(), "".into()],
                    vec!["gamma".into(), "100".into(), "".into()],
                ],
            }],
            modals: vec!["confirm-delete".into()],
            projects: vec![ProjectMarkup {
                id: 1,
                title: "Folio".into(),
                ..Default::default()
            }],
            messages: vec![MessageMarkup {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Hi, there".into(),
                date: "2024-01-02".into(),
            }],
            ..Default::default()
        }
    }

    fn form() -> FormState {
        FormState::from_markup(&markup().forms[0], RuleSet::Admin)
    }

    fn run_until(
        admin: &mut AdminTools,
        timers: &mut TimerQueue<Timer>,
        until: Duration,
    ) -> Vec<usize> {
        let mut due = Vec::new();
        while let Some(timer) = timers.pop_due(until) {
            if let Timer::Admin(timer) = timer {
                due.extend(admin.on_timer(timer));
            }
        }
        timers.set_now(until);
        due
    }

    mod unsaved {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_marks_page_and_form() {
            let mut timers = TimerQueue::<Timer>::new();
            let mut admin = AdminTools::from_markup(&markup());
            let mut form = form();
            assert!(admin.before_unload().is_none());

            admin.on_form_input(&mut timers, 0, &mut form);
            assert!(form.unsaved);
            assert_eq!(admin.before_unload(), Some(UNSAVED_CHANGES_PROMPT));

            admin.clear_unsaved(&mut form);
            assert!(!form.unsaved);
            assert!(!admin.has_unsaved_changes());
        }

        #[test]
        fn test_autosave_debounced_once_after_burst() {
            let mut timers = TimerQueue::<Timer>::new();
            let mut admin = AdminTools::from_markup(&markup());
            let mut form = form();

            admin.on_form_input(&mut timers, 0, &mut form);
            timers.set_now(ms(1500));
            admin.on_form_input(&mut timers, 0, &mut form);
            timers.set_now(ms(3000));
            admin.on_form_input(&mut timers, 0, &mut form);

            assert!(run_until(&mut admin, &mut timers, ms(4999)).is_empty());
            assert_eq!(run_until(&mut admin, &mut timers, ms(5000)), vec![0]);
            assert!(run_until(&mut admin, &mut timers, ms(20_000)).is_empty());
        }

        #[test]
        fn test_no_autosave_without_attribute() {
            let mut timers = TimerQueue::<Timer>::new();
            let mut admin = AdminTools::from_markup(&markup());
            let mut form = form();
            form.autosave = false;
            admin.on_form_input(&mut timers, 0, &mut form);
            assert_eq!(timers.pending_count(), 0);
        }
    }

    mod autosave {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_notifies() {
            let mut api = MockPortfolioApi::new();
            api.expect_submit_form()
                .withf(|action, fields| {
                    action.contains("/admin/projects/1/edit") && fields[0].0 == "title"
                })
                .times(1)
                .returning(|_, _| {
                    Ok(FormReply {
                        success: true,
                        message: None,
                    })
                });
            let mut timers = TimerQueue::<Timer>::new();
            let mut notices = NotificationCenter::new(NoticePolicy::Stack);
            let admin = AdminTools::from_markup(&markup());

            admin.autosave(&api, &mut notices, &mut timers, &form()).await;
            assert_eq!(notices.notices()[0].message, AUTOSAVED_MESSAGE);
            assert_eq!(notices.notices()[0].severity, Severity::Success);
        }

        #[tokio::test]
        async fn test_rejected_reply_is_silent() {
            let mut api = MockPortfolioApi::new();
            api.expect_submit_form().returning(|_, _| {
                Ok(FormReply {
                    success: false,
                    message: Some("Title is taken".into()),
                })
            });
            let mut timers = TimerQueue::<Timer>::new();
            let mut notices = NotificationCenter::new(NoticePolicy::Stack);
            let admin = AdminTools::from_markup(&markup());

            admin.autosave(&api, &mut notices, &mut timers, &form()).await;
            assert!(notices.is_empty());
        }

        #[tokio::test]
        async fn test_failure_is_silent() {
            let mut api = MockPortfolioApi::new();
            api.expect_submit_form().returning(|_, _| {
                Err(FolioError::Status {
                    status: 500,
                    url: "/admin".into(),
                })
            });
            let mut timers = TimerQueue::<Timer>::new();
            let mut notices = NotificationCenter::new(NoticePolicy::Stack);
            let admin = AdminTools::from_markup(&markup());

            admin.autosave(&api, &mut notices, &mut timers, &form()).await;
            assert!(notices.is_empty());
        }
    }

    mod search {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filters_after_debounce() {
            let mut timers = TimerQueue::<Timer>::new();
            let mut admin = AdminTools::from_markup(&markup());

            admin.search_input(&mut timers, 0, "f");
            timers.set_now(ms(200));
            admin.search_input(&mut timers, 0, "FOLIO");
            run_until(&mut admin, &mut timers, ms(499));
            assert_eq!(admin.searches()[0].visible_count(), 3);

            run_until(&mut admin, &mut timers, ms(500));
            let visible: Vec<_> = admin.searches()[0]
                .items
                .iter()
                .map(|i| i.visible)
                .collect();
            assert_eq!(visible, vec![true, false, true]);
        }

        #[test]
        fn test_empty_term_shows_everything() {
            let mut timers = TimerQueue::<Timer>::new();
            let mut admin = AdminTools::from_markup(&markup());
            admin.search_input(&mut timers, 0, "bot");
            run_until(&mut admin, &mut timers, ms(300));
            admin.search_input(&mut timers, 0, "");
            run_until(&mut admin, &mut timers, ms(600));
            assert_eq!(admin.searches()[0].visible_count(), 3);
        }

        #[test]
        fn test_first_search() {
            assert_eq!(AdminTools::from_markup(&markup()).first_search(), Some(0));
            assert_eq!(
                AdminTools::from_markup(&PageMarkup::default()).first_search(),
                None
            );
        }
    }

    mod tables {
        use super::*;
        use pretty_assertions::assert_eq;

        fn column(admin: &AdminTools, index: usize) -> Vec<String> {
            admin.tables()[0]
                .rows
                .iter()
                .map(|r| r[index].clone())
                .collect()
        }

        #[test]
        fn test_numeric_sort_toggles() {
            let mut admin = AdminTools::from_markup(&markup());
            assert!(admin.sort_table(0, 1));
            assert_eq!(column(&admin, 1), vec!["9", "10", "100"]);
            assert_eq!(admin.tables()[0].marker(1), Some("asc"));

            admin.sort_table(0, 1);
            assert_eq!(column(&admin, 1), vec!["100", "10", "9"]);
            assert_eq!(admin.tables()[0].marker(1), Some("desc"));
        }

        #[test]
        fn test_text_sort_and_single_marker() {
            let mut admin = AdminTools::from_markup(&markup());
            admin.sort_table(0, 1);
            admin.sort_table(0, 0);
            assert_eq!(column(&admin, 0), vec!["Alpha", "beta", "gamma"]);
            assert_eq!(admin.tables()[0].marker(0), Some("asc"));
            assert_eq!(admin.tables()[0].marker(1), None);
        }

        #[test]
        fn test_numeric_sort_puts_text_cells_last() {
            let mut markup = markup();
            markup.tables[0].rows = (0..60)
                .map(|i| {
                    let views = if i % 3 == 0 {
                        "n/a".to_string()
                    } else {
                        ((i * 37) % 101).to_string()
                    };
                    vec![format!("row {i}"), views, String::new()]
                })
                .collect();
            let mut admin = AdminTools::from_markup(&markup);

            assert!(admin.sort_table(0, 1));
            let views = column(&admin, 1);
            assert_eq!(views.len(), 60);
            let (numbers, rest) = views.split_at(40);
            assert!(rest.iter().all(|v| v == "n/a"));
            let numbers: Vec<f64> = numbers.iter().map(|v| v.parse().unwrap()).collect();
            assert!(numbers.windows(2).all(|w| w[0] <= w[1]));

            admin.sort_table(0, 1);
            let views = column(&admin, 1);
            assert!(views[..20].iter().all(|v| v == "n/a"));
            assert!(views[20..].iter().all(|v| v != "n/a"));
        }

        #[test]
        fn test_unsortable_column() {
            let mut admin = AdminTools::from_markup(&markup());
            assert!(!admin.sort_table(0, 2));
            assert!(!admin.sort_table(3, 0));
            assert_eq!(admin.tables()[0].sorted, None);
        }
    }

    mod export {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_projects_json() {
            let admin = AdminTools::from_markup(&markup());
            let file = admin.export("projects").unwrap().unwrap();
            assert_eq!(file.filename, "projects.json");
            assert_eq!(file.mime_type, "application/json");

            let value: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
            assert_eq!(value["projects"][0]["title"], "Folio");
            assert!(file.contents.contains('\n'));
        }

        #[test]
        fn test_messages_csv() {
            let admin = AdminTools::from_markup(&markup());
            let file = admin.export("messages").unwrap().unwrap();
            assert_eq!(file.filename, "messages.csv");
            assert_eq!(file.mime_type, "text/csv");
            assert_eq!(
                file.contents,
                "Name,Email,Subject,Date\nAda,ada@example.com,\"Hi, there\",2024-01-02\n"
            );
        }

        #[test]
        fn test_empty_messages_is_header_only() {
            let admin = AdminTools::from_markup(&PageMarkup::default());
            let file = admin.export("messages").unwrap().unwrap();
            assert_eq!(file.contents, "Name,Email,Subject,Date\n");
        }

        #[test]
        fn test_unknown_kind() {
            let admin = AdminTools::from_markup(&markup());
            assert_eq!(admin.export("users").unwrap(), None);
        }
    }

    mod featured {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_updates_icon() {
            let mut api = MockPortfolioApi::new();
            api.expect_toggle_featured()
                .withf(|id| *id == 1)
                .returning(|_| {
                    Ok(FeaturedReply {
                        success: true,
                        featured: true,
                    })
                });
            let mut timers = TimerQueue::<Timer>::new();
            let mut notices = NotificationCenter::new(NoticePolicy::Stack);
            let mut admin = AdminTools::from_markup(&markup());

            admin
                .toggle_featured(&api, &mut notices, &mut timers, 1)
                .await;
            assert_eq!(notices.notices()[0].message, FEATURED_UPDATED_MESSAGE);
            assert!(admin.projects()[0].featured);
            assert_eq!(
                featured_icon(admin.projects()[0].featured),
                "fas fa-star text-yellow-400"
            );
        }

        #[tokio::test]
        async fn test_transport_error_notifies() {
            let mut api = MockPortfolioApi::new();
            api.expect_toggle_featured().returning(|_| {
                Err(FolioError::Status {
                    status: 502,
                    url: "/admin/projects/1/toggle-featured".into(),
                })
            });
            let mut timers = TimerQueue::<Timer>::new();
            let mut notices = NotificationCenter::new(NoticePolicy::Stack);
            let mut admin = AdminTools::from_markup(&markup());

            admin
                .toggle_featured(&api, &mut notices, &mut timers, 1)
                .await;
            assert_eq!(notices.notices()[0].message, FEATURED_ERROR_MESSAGE);
            assert_eq!(notices.notices()[0].severity, Severity::Error);
            assert!(!admin.projects()[0].featured);
        }
    }

    #[test]
    fn test_escape_closes_modals() {
        let mut admin = AdminTools::from_markup(&markup());
        assert!(admin.open_modal("confirm-delete"));
        assert!(!admin.modals()[0].hidden);
        assert!(!admin.open_modal("missing"));

        admin.close_modals();
        assert!(admin.modals().iter().all(|m| m.hidden));
    }
}

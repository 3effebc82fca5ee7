//! Scroll-driven page behaviour
//!
//! Reveal-on-scroll with staggered children, skill bar fills, navbar
//! hide/show, active navigation link tracking, back-to-top and reading
//! progress, anchor smooth scrolling and the hero typewriter.

use super::markup::PageMarkup;
use super::timers::{Debouncer, TimerQueue};
use super::typewriter::Typewriter;
use std::collections::BTreeSet;
use std::time::Duration;

/// Fraction of a target that must be visible before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Viewport bottom is pulled up by this much so reveals trigger a little early
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
pub const NAV_DEBOUNCE: Duration = Duration::from_millis(100);
/// Lookahead added to the scroll offset when picking the current section
pub const NAV_PROBE_OFFSET: f64 = 100.0;
pub const NAVBAR_HIDE_AFTER: f64 = 100.0;
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 500.0;
pub const SKILL_THRESHOLD: f64 = 0.5;
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(200);
/// Height of the fixed header that anchor jumps leave room for
pub const ANCHOR_OFFSET: f64 = 80.0;
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Timer steps owned by the scroll controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTimer {
    UpdateActiveNav,
    FillSkillBar(usize),
    TypeStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

/// Visible fraction of the box `[top, top + height)` inside `[view_top, view_bottom)`
pub fn intersection_ratio(top: f64, height: f64, view_top: f64, view_bottom: f64) -> f64 {
    if height <= 0.0 {
        return if top >= view_top && top < view_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerChild {
    pub id: String,
    pub delay: Option<Duration>,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub id: String,
    pub top: f64,
    pub height: f64,
    pub animation: Option<String>,
    pub stagger: bool,
    pub children: Vec<StaggerChild>,
    pub classes: BTreeSet<String>,
    /// Set once; a revealed target is no longer observed
    pub revealed: bool,
}

impl RevealTarget {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn reveal(&mut self) {
        self.revealed = true;
        self.classes.insert("animated".to_string());
        if self.stagger {
            for (index, child) in self.children.iter_mut().enumerate() {
                child.delay = Some(STAGGER_STEP * index as u32);
                child.classes.insert("animate-slide-up".to_string());
            }
        }
        if let Some(animation) = &self.animation {
            self.classes.insert(format!("animate-{animation}"));
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillBar {
    pub name: String,
    pub level: u8,
    pub top: f64,
    pub height: f64,
    /// Current fill width in percent
    pub width: u8,
    observed: bool,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navbar {
    /// Translated off-screen
    pub hidden: bool,
    /// Solid background once the page has moved
    pub scrolled: bool,
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    pub from: f64,
    pub to: f64,
    pub started_at: Duration,
}

impl SmoothScroll {
    /// Position at page time `now` and whether the animation has finished
    pub fn position(&self, now: Duration) -> (f64, bool) {
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_in_out(progress) as f64;
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[derive(Debug)]
pub struct ScrollAnimationController {
    viewport_height: f64,
    document_height: f64,
    scroll_y: f64,
    last_scroll_y: f64,
    direction: ScrollDirection,
    targets: Vec<RevealTarget>,
    skill_bars: Vec<SkillBar>,
    sections: Vec<Section>,
    nav_links: Vec<NavLink>,
    navbar: Option<Navbar>,
    nav_debounce: Debouncer,
    back_to_top_visible: bool,
    typewriter: Option<Typewriter>,
    smooth: Option<SmoothScroll>,
}

impl ScrollAnimationController {
    /// Build the controller, or `None` when the page has nothing scroll-driven
    pub fn from_markup(markup: &PageMarkup) -> Option<Self> {
        if !markup.has_scroll_features() {
            return None;
        }
        Some(Self {
            viewport_height: markup.viewport_height,
            document_height: markup.document_height(),
            scroll_y: 0.0,
            last_scroll_y: 0.0,
            direction: ScrollDirection::default(),
            targets: markup
                .reveal_targets
                .iter()
                .map(|t| RevealTarget {
                    id: t.id.clone(),
                    top: t.top,
                    height: t.height,
                    animation: t.animation.clone(),
                    stagger: t.stagger,
                    children: t
                        .children
                        .iter()
                        .map(|id| StaggerChild {
                            id: id.clone(),
                            delay: None,
                            classes: BTreeSet::new(),
                        })
                        .collect(),
                    classes: BTreeSet::from(["scroll-animate".to_string()]),
                    revealed: false,
                })
                .collect(),
            skill_bars: markup
                .skill_bars
                .iter()
                .map(|s| SkillBar {
                    name: s.name.clone(),
                    level: s.level.min(100),
                    top: s.top,
                    height: s.height,
                    width: 0,
                    observed: true,
                })
                .collect(),
            sections: markup
                .sections
                .iter()
                .map(|s| Section {
                    id: s.id.clone(),
                    title: s.title.clone().unwrap_or_else(|| s.id.clone()),
                    top: s.top,
                    height: s.height,
                })
                .collect(),
            nav_links: markup
                .nav_links
                .iter()
                .map(|l| NavLink {
                    href: l.href.clone(),
                    label: l.label.clone(),
                    active: false,
                })
                .collect(),
            navbar: markup.navbar.then(Navbar::default),
            nav_debounce: Debouncer::new(NAV_DEBOUNCE),
            back_to_top_visible: false,
            typewriter: markup.typewriter.as_ref().map(Typewriter::from_markup),
            smooth: None,
        })
    }

    /// Initial pass after load: reveal whatever is already in view and start typing
    pub fn start<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>) {
        self.observe(timers);
        if let Some(writer) = self.typewriter.as_mut() {
            writer.start(timers);
        }
    }

    /// Handle a scroll event to offset `y`
    pub fn on_scroll<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>, y: f64) {
        let y = y.clamp(0.0, self.max_scroll());
        self.scroll_y = y;

        // Navbar reacts to every event, without debounce
        if y > self.last_scroll_y && y > NAVBAR_HIDE_AFTER {
            self.direction = ScrollDirection::Down;
            if let Some(navbar) = self.navbar.as_mut() {
                navbar.hidden = true;
            }
        } else {
            self.direction = ScrollDirection::Up;
            if let Some(navbar) = self.navbar.as_mut() {
                navbar.hidden = false;
            }
        }
        if let Some(navbar) = self.navbar.as_mut() {
            navbar.scrolled = y > NAVBAR_SCROLLED_AFTER;
        }
        self.last_scroll_y = y;

        self.back_to_top_visible = y > BACK_TO_TOP_AFTER;
        self.observe(timers);

        if !self.sections.is_empty() && !self.nav_links.is_empty() {
            self.nav_debounce.schedule(timers, ScrollTimer::UpdateActiveNav);
        }
    }

    pub fn on_timer<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>, timer: ScrollTimer) {
        match timer {
            ScrollTimer::UpdateActiveNav => {
                self.nav_debounce.fired();
                self.update_active_nav();
            }
            ScrollTimer::FillSkillBar(index) => {
                if let Some(bar) = self.skill_bars.get_mut(index) {
                    bar.width = bar.level;
                }
            }
            ScrollTimer::TypeStep => {
                if let Some(writer) = self.typewriter.as_mut() {
                    writer.step(timers);
                }
            }
        }
    }

    /// Check every still-observed element against the viewport
    fn observe<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>) {
        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y + self.viewport_height;

        for target in self.targets.iter_mut().filter(|t| !t.revealed) {
            let ratio = intersection_ratio(
                target.top,
                target.height,
                view_top,
                view_bottom - REVEAL_BOTTOM_MARGIN,
            );
            if ratio >= REVEAL_THRESHOLD {
                tracing::debug!(target = %target.id, "revealed");
                target.reveal();
            }
        }

        for (index, bar) in self.skill_bars.iter_mut().enumerate() {
            if !bar.observed {
                continue;
            }
            if intersection_ratio(bar.top, bar.height, view_top, view_bottom) >= SKILL_THRESHOLD {
                bar.observed = false;
                timers.schedule(SKILL_FILL_DELAY, ScrollTimer::FillSkillBar(index));
            }
        }
    }

    /// Mark the link of the section under the probe as active.
    ///
    /// When sections overlap the later one in document order wins.
    pub fn update_active_nav(&mut self) -> String {
        let probe = self.scroll_y + NAV_PROBE_OFFSET;
        let current = self
            .sections
            .iter()
            .filter(|s| s.contains(probe))
            .last()
            .map(|s| s.id.clone())
            .unwrap_or_default();

        let target = format!("#{current}");
        for link in &mut self.nav_links {
            link.active = link.href == target || (current == "home" && link.href == "#");
        }
        current
    }

    /// Start an eased jump to the section an in-page link points at
    pub fn scroll_to_anchor(&mut self, href: &str, now: Duration) -> bool {
        let Some(id) = href.strip_prefix('#') else {
            return false;
        };
        let Some(section) = self.sections.iter().find(|s| s.id == id) else {
            return false;
        };
        self.smooth_scroll_to(section.top - ANCHOR_OFFSET, now);
        true
    }

    /// Start an eased scroll to offset `y`
    pub fn smooth_scroll_to(&mut self, y: f64, now: Duration) {
        self.smooth = Some(SmoothScroll {
            from: self.scroll_y,
            to: y.clamp(0.0, self.max_scroll()),
            started_at: now,
        });
    }

    /// Advance a running smooth scroll to page time `now`
    pub fn tick<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>, now: Duration) {
        let Some(smooth) = self.smooth else {
            return;
        };
        let (y, done) = smooth.position(now);
        if done {
            self.smooth = None;
        }
        self.on_scroll(timers, y);
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    /// Hero title hover; pauses or resumes the typewriter
    pub fn hover_hero<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>, inside: bool) {
        if let Some(writer) = self.typewriter.as_mut() {
            if inside {
                writer.pause();
            } else {
                writer.resume(timers);
            }
        }
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Reading progress in percent
    pub fn progress(&self) -> f64 {
        let scrollable = self.max_scroll();
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn navbar(&self) -> Option<Navbar> {
        self.navbar
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn target(&self, id: &str) -> Option<&RevealTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn skill_bars(&self) -> &[SkillBar] {
        &self.skill_bars
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.nav_links.iter().find(|l| l.active)
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::markup::{
        NavLinkMarkup, RevealMarkup, SectionMarkup, SkillBarMarkup, TypewriterMarkup,
    };
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn section(id: &str, top: f64, height: f64) -> SectionMarkup {
        SectionMarkup {
            id: id.to_string(),
            title: None,
            top,
            height,
        }
    }

    fn link(href: &str) -> NavLinkMarkup {
        NavLinkMarkup {
            href: href.to_string(),
            label: href.to_string(),
        }
    }

    fn page() -> PageMarkup {
        PageMarkup {
            viewport_height: 800.0,
            navbar: true,
            sections: vec![
                section("home", 0.0, 1000.0),
                section("about", 1000.0, 1000.0),
                section("projects", 2000.0, 1000.0),
            ],
            nav_links: vec![link("#"), link("#about"), link("#projects")],
            reveal_targets: vec![
                RevealMarkup {
                    id: "hero".into(),
                    top: 100.0,
                    height: 300.0,
                    animation: Some("fade-in".into()),
                    ..Default::default()
                },
                RevealMarkup {
                    id: "cards".into(),
                    top: 2100.0,
                    height: 500.0,
                    stagger: true,
                    children: vec!["c1".into(), "c2".into(), "c3".into()],
                    ..Default::default()
                },
            ],
            skill_bars: vec![SkillBarMarkup {
                name: "Rust".into(),
                level: 90,
                top: 1200.0,
                height: 20.0,
            }],
            ..Default::default()
        }
    }

    fn run_until(
        controller: &mut ScrollAnimationController,
        timers: &mut TimerQueue<ScrollTimer>,
        until: Duration,
    ) {
        while let Some(timer) = timers.pop_due(until) {
            controller.on_timer(timers, timer);
        }
        timers.set_now(until);
    }

    #[test]
    fn test_absent_without_markup() {
        assert!(ScrollAnimationController::from_markup(&PageMarkup::default()).is_none());
    }

    mod intersection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ratio() {
            assert_eq!(intersection_ratio(0.0, 100.0, 0.0, 800.0), 1.0);
            assert_eq!(intersection_ratio(750.0, 100.0, 0.0, 800.0), 0.5);
            assert_eq!(intersection_ratio(900.0, 100.0, 0.0, 800.0), 0.0);
        }

        #[test]
        fn test_zero_height() {
            assert_eq!(intersection_ratio(10.0, 0.0, 0.0, 800.0), 1.0);
            assert_eq!(intersection_ratio(810.0, 0.0, 0.0, 800.0), 0.0);
        }
    }

    mod reveal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_visible_targets_reveal_on_start() {
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.start(&mut timers);

            let hero = scroll.target("hero").unwrap();
            assert!(hero.revealed);
            assert!(hero.has_class("animated"));
            assert!(hero.has_class("animate-fade-in"));
            assert!(!scroll.target("cards").unwrap().revealed);
        }

        #[test]
        fn test_bottom_margin_delays_reveal() {
            let mut markup = page();
            // 40px of this target sits in the last 50px of the viewport
            markup.reveal_targets = vec![RevealMarkup {
                id: "edge".into(),
                top: 760.0,
                height: 100.0,
                ..Default::default()
            }];
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&markup).unwrap();
            scroll.start(&mut timers);
            assert!(!scroll.target("edge").unwrap().revealed);

            scroll.on_scroll(&mut timers, 20.0);
            assert!(scroll.target("edge").unwrap().revealed);
        }

        #[test]
        fn test_reveal_is_monotonic() {
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.start(&mut timers);
            scroll.on_scroll(&mut timers, 2000.0);
            scroll.on_scroll(&mut timers, 0.0);

            assert!(scroll.target("cards").unwrap().revealed);
            assert!(scroll.target("cards").unwrap().has_class("animated"));
        }

        #[test]
        fn test_stagger_delays() {
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.on_scroll(&mut timers, 1900.0);

            let cards = scroll.target("cards").unwrap();
            let delays: Vec<_> = cards.children.iter().map(|c| c.delay).collect();
            assert_eq!(delays, vec![Some(ms(0)), Some(ms(100)), Some(ms(200))]);
            assert!(cards
                .children
                .iter()
                .all(|c| c.classes.contains("animate-slide-up")));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_active_link_after_debounce() {
            let mut timers = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.on_scroll(&mut timers, 950.0);

            run_until(&mut scroll, &mut timers, ms(99));
            assert!(scroll.active_link().is_none());
            run_until(&mut scroll, &mut timers, ms(100));
            assert_eq!(scroll.active_link().unwrap().href, "#about");
        }

        #[test]
        fn test_burst_updates_once() {
            let mut timers = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.on_scroll(&mut timers, 100.0);
            timers.set_now(ms(50));
            scroll.on_scroll(&mut timers, 2500.0);

            run_until(&mut scroll, &mut timers, ms(149));
            assert!(scroll.active_link().is_none());
            run_until(&mut scroll, &mut timers, ms(150));
            assert_eq!(scroll.active_link().unwrap().href, "#projects");
            let active = scroll.nav_links().iter().filter(|l| l.active).count();
            assert_eq!(active, 1);
        }

        #[test]
        fn test_home_matches_bare_hash() {
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            assert_eq!(scroll.update_active_nav(), "home");
            assert_eq!(scroll.active_link().unwrap().href, "#");
        }

        #[test]
        fn test_overlap_picks_later_section() {
            let mut markup = page();
            markup.sections.push(section("contact", 0.0, 500.0));
            markup.nav_links.push(link("#contact"));
            let mut scroll = ScrollAnimationController::from_markup(&markup).unwrap();

            assert_eq!(scroll.update_active_nav(), "contact");
            assert_eq!(scroll.active_link().unwrap().href, "#contact");
        }
    }

    mod navbar {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_hides_on_scroll_down_past_threshold() {
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();

            scroll.on_scroll(&mut timers, 80.0);
            let navbar = scroll.navbar().unwrap();
            assert!(!navbar.hidden);
            assert!(navbar.scrolled);

            scroll.on_scroll(&mut timers, 300.0);
            assert!(scroll.navbar().unwrap().hidden);
            assert_eq!(scroll.direction(), ScrollDirection::Down);

            scroll.on_scroll(&mut timers, 250.0);
            assert!(!scroll.navbar().unwrap().hidden);
            assert_eq!(scroll.direction(), ScrollDirection::Up);
        }

        #[test]
        fn test_scrolled_background_toggles() {
            let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
            let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
            scroll.on_scroll(&mut timers, 60.0);
            assert!(scroll.navbar().unwrap().scrolled);
            scroll.on_scroll(&mut timers, 10.0);
            assert!(!scroll.navbar().unwrap().scrolled);
        }
    }

    #[test]
    fn test_back_to_top_and_progress() {
        let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
        let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
        scroll.on_scroll(&mut timers, 501.0);
        assert!(scroll.back_to_top_visible());

        scroll.on_scroll(&mut timers, 1100.0);
        assert_eq!(scroll.progress(), 50.0);

        scroll.on_scroll(&mut timers, 10_000.0);
        assert_eq!(scroll.scroll_y(), 2200.0);
        assert_eq!(scroll.progress(), 100.0);
    }

    #[test]
    fn test_skill_bar_fills_after_delay() {
        let mut timers = TimerQueue::new();
        let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
        scroll.on_scroll(&mut timers, 600.0);
        assert_eq!(scroll.skill_bars()[0].width, 0);

        let now = timers.now();
        run_until(&mut scroll, &mut timers, now + ms(200));
        assert_eq!(scroll.skill_bars()[0].width, 90);
    }

    #[test]
    fn test_smooth_scroll_to_anchor() {
        let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
        let mut scroll = ScrollAnimationController::from_markup(&page()).unwrap();
        assert!(!scroll.scroll_to_anchor("#missing", ms(0)));
        assert!(scroll.scroll_to_anchor("#about", ms(0)));

        scroll.tick(&mut timers, ms(300));
        let halfway = scroll.scroll_y();
        assert!(halfway > 0.0 && halfway < 920.0);

        scroll.tick(&mut timers, SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.scroll_y(), 920.0);
        assert!(!scroll.is_smooth_scrolling());
    }

    #[test]
    fn test_typewriter_runs_through_controller() {
        let mut markup = page();
        markup.typewriter = Some(TypewriterMarkup {
            texts: Some(vec!["Rust".into()]),
            ..Default::default()
        });
        let mut timers = TimerQueue::new();
        let mut scroll = ScrollAnimationController::from_markup(&markup).unwrap();
        scroll.start(&mut timers);

        run_until(&mut scroll, &mut timers, ms(1100));
        assert_eq!(scroll.typewriter().unwrap().text(), "Ru");

        scroll.hover_hero(&mut timers, true);
        run_until(&mut scroll, &mut timers, ms(3000));
        assert_eq!(scroll.typewriter().unwrap().text(), "Ru");
    }
}

//! Hero title that types and deletes a rotating list of phrases

use super::markup::TypewriterMarkup;
use super::scroll::ScrollTimer;
use super::timers::{TimerId, TimerQueue};
use std::time::Duration;

const DEFAULT_TEXTS: [&str; 3] = ["Full-Stack Developer", "AI Enthusiast", "Problem Solver"];

#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    speed: Duration,
    delete_speed: Duration,
    /// Hold time once a phrase is fully typed
    delay: Duration,
    text_index: usize,
    char_index: usize,
    deleting: bool,
    paused: bool,
    text: String,
    pending: Option<TimerId>,
}

impl Typewriter {
    /// Wait after page load before the first keystroke
    pub const START_DELAY: Duration = Duration::from_millis(1000);
    /// Pause between finishing a deletion and typing the next phrase
    pub const NEXT_PHRASE_PAUSE: Duration = Duration::from_millis(500);
    /// Wait after the pointer leaves before typing resumes
    pub const RESUME_DELAY: Duration = Duration::from_millis(500);

    pub fn from_markup(markup: &TypewriterMarkup) -> Self {
        let texts = markup
            .texts
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TEXTS.iter().map(|s| s.to_string()).collect());
        Self {
            texts,
            speed: Duration::from_millis(markup.speed.filter(|&s| s > 0).unwrap_or(100)),
            delete_speed: Duration::from_millis(markup.delete_speed.filter(|&s| s > 0).unwrap_or(50)),
            delay: Duration::from_millis(markup.delay.filter(|&s| s > 0).unwrap_or(2000)),
            text_index: 0,
            char_index: 0,
            deleting: false,
            paused: false,
            text: String::new(),
            pending: None,
        }
    }

    pub fn start<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>) {
        self.pending = Some(timers.schedule(Self::START_DELAY, ScrollTimer::TypeStep));
    }

    /// Type or delete one character and schedule the next step
    pub fn step<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>) {
        self.pending = None;
        if self.paused {
            return;
        }

        let current: Vec<char> = self.texts[self.text_index].chars().collect();
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index += 1;
        }
        self.text = current.iter().take(self.char_index).collect();

        let mut next = if self.deleting {
            self.delete_speed
        } else {
            self.speed
        };
        if !self.deleting && self.char_index >= current.len() {
            next = self.delay;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            next = Self::NEXT_PHRASE_PAUSE;
        }

        self.pending = Some(timers.schedule(next, ScrollTimer::TypeStep));
    }

    /// Pointer entered the title
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the title; typing picks up after a short wait
    pub fn resume<T: From<ScrollTimer>>(&mut self, timers: &mut TimerQueue<T>) {
        self.paused = false;
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
        self.pending = Some(timers.schedule(Self::RESUME_DELAY, ScrollTimer::TypeStep));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrase_index(&self) -> usize {
        self.text_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn writer(texts: &[&str]) -> Typewriter {
        Typewriter::from_markup(&TypewriterMarkup {
            texts: Some(texts.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        })
    }

    fn run_until(writer: &mut Typewriter, timers: &mut TimerQueue<ScrollTimer>, until: Duration) {
        while let Some(timer) = timers.pop_due(until) {
            assert_eq!(timer, ScrollTimer::TypeStep);
            writer.step(timers);
        }
        timers.set_now(until);
    }

    #[test]
    fn test_defaults_when_no_texts() {
        let writer = Typewriter::from_markup(&TypewriterMarkup::default());
        assert_eq!(writer.texts.len(), 3);
        assert_eq!(writer.speed, ms(100));
        assert_eq!(writer.delete_speed, ms(50));
        assert_eq!(writer.delay, ms(2000));
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut timers = TimerQueue::new();
        let mut w = writer(&["Hey"]);
        w.start(&mut timers);

        run_until(&mut w, &mut timers, ms(999));
        assert_eq!(w.text(), "");
        run_until(&mut w, &mut timers, ms(1000));
        assert_eq!(w.text(), "H");
        run_until(&mut w, &mut timers, ms(1100));
        assert_eq!(w.text(), "He");
        run_until(&mut w, &mut timers, ms(1200));
        assert_eq!(w.text(), "Hey");
        assert!(w.is_deleting());
    }

    #[test]
    fn test_holds_then_deletes_and_moves_on() {
        let mut timers = TimerQueue::new();
        let mut w = writer(&["Hi", "Yo"]);
        w.start(&mut timers);

        // typed at 1000 and 1100, hold 2000 ms
        run_until(&mut w, &mut timers, ms(3099));
        assert_eq!(w.text(), "Hi");
        run_until(&mut w, &mut timers, ms(3100));
        assert_eq!(w.text(), "H");
        run_until(&mut w, &mut timers, ms(3150));
        assert_eq!(w.text(), "");
        assert_eq!(w.phrase_index(), 1);
        run_until(&mut w, &mut timers, ms(3650));
        assert_eq!(w.text(), "Y");
    }

    #[test]
    fn test_pause_stops_chain_and_resume_restarts() {
        let mut timers = TimerQueue::new();
        let mut w = writer(&["Hello"]);
        w.start(&mut timers);
        run_until(&mut w, &mut timers, ms(1000));
        assert_eq!(w.text(), "H");

        w.pause();
        run_until(&mut w, &mut timers, ms(5000));
        assert_eq!(w.text(), "H");
        assert_eq!(timers.pending_count(), 0);

        w.resume(&mut timers);
        run_until(&mut w, &mut timers, ms(5500));
        assert_eq!(w.text(), "He");
    }

    #[test]
    fn test_quick_hover_does_not_double_the_chain() {
        let mut timers: TimerQueue<ScrollTimer> = TimerQueue::new();
        let mut w = writer(&["Hello"]);
        w.start(&mut timers);
        w.pause();
        w.resume(&mut timers);
        assert_eq!(timers.pending_count(), 1);
    }
}

use anyhow::{bail, Result};
use log::{debug, warn};

/// What a slide must be able to do for the controller: flip between its
/// active and inactive states. How that looks on screen is up to the slide.
pub trait Slide {
    fn activate(&mut self);
    fn deactivate(&mut self);
}

/// A manual navigation request, from a key press or a recognized swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    GoTo(i64),
}

// At most one of these exists at a time; replacing the Option is how a new
// timer cancels the previous one.
struct Autoplay {
    interval: f32, // seconds between automatic advances
    elapsed: f32,  // accumulated since the last advance or reset
}

pub struct SlideshowController<S: Slide> {
    slides: Vec<S>,
    current: usize,
    autoplay: Option<Autoplay>,
}

impl<S: Slide> SlideshowController<S> {
    /// Takes ownership of the slide deck and activates the first slide.
    /// An empty deck is refused.
    pub fn new(mut slides: Vec<S>) -> Result<Self> {
        if slides.is_empty() {
            bail!("a slideshow needs at least one slide");
        }
        slides[0].activate();
        Ok(Self {
            slides,
            current: 0,
            autoplay: None,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Activate the slide at `index`, wrapping any integer (negative or past
    /// the end) into range. Selecting the already active slide is a no-op:
    /// the visible slide must not blink off and back on.
    pub fn go_to_slide(&mut self, index: i64) {
        let target = index.rem_euclid(self.slides.len() as i64) as usize;
        if target == self.current {
            return;
        }
        self.slides[self.current].deactivate();
        self.slides[target].activate();
        debug!("slide {} -> {}", self.current, target);
        self.current = target;
    }

    pub fn next_slide(&mut self) {
        self.go_to_slide(self.current as i64 + 1);
    }

    pub fn prev_slide(&mut self) {
        self.go_to_slide(self.current as i64 - 1);
    }

    /// Start advancing automatically every `interval` seconds. The first
    /// advance happens one full interval from now. A timer that is already
    /// running is replaced, never doubled up.
    pub fn start_autoplay(&mut self, interval: f32) {
        if interval <= 0.0 || interval.is_nan() {
            warn!("ignoring autoplay start with interval {interval}");
            return;
        }
        self.autoplay = Some(Autoplay {
            interval,
            elapsed: 0.0,
        });
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = None;
    }

    /// Rearm the running timer so the next automatic advance is a full
    /// interval away. Does nothing when autoplay is stopped.
    pub fn reset_autoplay(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.elapsed = 0.0;
        }
    }

    /// Feed the frame delta to the autoplay timer. A delta spanning several
    /// intervals advances once per interval, in order. Whole loops of the
    /// deck in the backlog cancel out first, so one call steps at most one
    /// full loop however small the interval or large the delta.
    pub fn tick(&mut self, dt: f32) {
        let Some(autoplay) = self.autoplay.as_mut() else {
            return;
        };
        autoplay.elapsed += dt;
        if autoplay.elapsed < autoplay.interval {
            return;
        }
        // Division instead of repeated subtraction: an interval below the
        // accumulator's float precision must not spin this loop forever.
        let intervals = (autoplay.elapsed / autoplay.interval) as u64;
        autoplay.elapsed = (autoplay.elapsed - intervals as f32 * autoplay.interval).max(0.0);
        let steps = intervals % self.slides.len() as u64;
        for _ in 0..steps {
            self.next_slide();
        }
    }

    /// The one path every manual control goes through: perform the
    /// navigation, then snooze the next automatic advance.
    pub fn handle(&mut self, command: NavCommand) {
        match command {
            NavCommand::Next => self.next_slide(),
            NavCommand::Prev => self.prev_slide(),
            NavCommand::GoTo(index) => self.go_to_slide(index),
        }
        self.reset_autoplay();
    }
}

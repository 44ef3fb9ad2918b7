use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    TowardPrevious, // finger travelled right: pull the previous slide back in
    TowardNext,     // finger travelled left
}

/// Recognizes horizontal swipes from two observations: where a press started
/// and where it ended. Purely passive: it never consumes the events it is
/// told about, so the host keeps handling them however it wants.
pub struct SwipeDetector {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Yields a swipe only when the horizontal travel
    /// strictly exceeds the threshold; anything shorter is a tap or a
    /// scroll and navigates nowhere.
    pub fn release(&mut self, x: f32) -> Option<Swipe> {
        let start_x = self.start_x.take()?;
        let delta = x - start_x;
        let swipe = if delta > self.threshold {
            Some(Swipe::TowardPrevious)
        } else if delta < -self.threshold {
            Some(Swipe::TowardNext)
        } else {
            None
        };
        if let Some(swipe) = swipe {
            debug!("swipe {swipe:?} (delta {delta:+.1}px)");
        }
        swipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> SwipeDetector {
        SwipeDetector::new(50.0)
    }

    #[test]
    fn a_long_leftward_drag_swipes_toward_the_next_slide() {
        let mut d = detector();
        d.press(100.0);
        assert_eq!(d.release(40.0), Some(Swipe::TowardNext));
    }

    #[test]
    fn a_long_rightward_drag_swipes_toward_the_previous_slide() {
        let mut d = detector();
        d.press(40.0);
        assert_eq!(d.release(100.0), Some(Swipe::TowardPrevious));
    }

    #[test]
    fn travel_below_the_threshold_is_not_a_swipe() {
        let mut d = detector();
        d.press(100.0);
        assert_eq!(d.release(70.0), None);
    }

    #[test]
    fn travel_exactly_at_the_threshold_is_not_a_swipe() {
        let mut d = detector();
        d.press(0.0);
        assert_eq!(d.release(50.0), None);
        d.press(0.0);
        assert_eq!(d.release(-50.0), None);
    }

    #[test]
    fn a_release_without_a_press_is_ignored() {
        let mut d = detector();
        assert_eq!(d.release(500.0), None);
    }

    #[test]
    fn each_press_is_consumed_by_one_release() {
        let mut d = detector();
        d.press(100.0);
        assert_eq!(d.release(30.0), Some(Swipe::TowardNext));
        assert_eq!(d.release(30.0), None); // gesture is over
    }

    #[test]
    fn a_new_press_replaces_a_dangling_one() {
        let mut d = detector();
        d.press(500.0);
        d.press(100.0);
        assert_eq!(d.release(40.0), Some(Swipe::TowardNext));
    }
}

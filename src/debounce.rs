use crate::types::Digit;

/// Frame-count debouncer for digit gestures.
///
/// Each frame's candidate (a digit or no match) is compared with the previous
/// frame's. A repeat extends the streak, anything else restarts it at zero.
/// While the streak is above the threshold the candidate digit is emitted on
/// every frame, not only on the frame it first qualifies.
///
/// The session starts with candidate `0` and an empty streak, so a session
/// that opens on the zero gesture qualifies one frame earlier than any other
/// digit would.
#[derive(Clone, Debug)]
pub struct Debouncer {
    threshold: u32,
    candidate: Option<Digit>,
    streak: u32,
    last_committed: Option<Digit>,
}

impl Debouncer {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            candidate: Some(Digit::Zero),
            streak: 0,
            last_committed: None,
        }
    }

    /// Feed one frame's candidate and return the digit to emit, if any.
    pub fn observe(&mut self, candidate: Option<Digit>) -> Option<Digit> {
        if candidate == self.candidate {
            // Only needs to stay above the threshold, not count forever.
            self.streak = (self.streak + 1).min(self.threshold.saturating_add(1));
        } else {
            self.streak = 0;
            self.candidate = candidate;
        }

        if self.streak <= self.threshold {
            return None;
        }
        let digit = self.candidate?;
        if self.last_committed != Some(digit) {
            log::debug!("committed digit {digit} after {} repeats", self.streak);
        }
        self.last_committed = Some(digit);
        Some(digit)
    }

    pub fn candidate(&self) -> Option<Digit> {
        self.candidate
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_committed(&self) -> Option<Digit> {
        self.last_committed
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(debouncer: &mut Debouncer, frames: &[Option<Digit>]) -> Vec<Option<Digit>> {
        frames.iter().map(|&c| debouncer.observe(c)).collect()
    }

    #[test]
    fn emits_on_third_repeat_and_keeps_firing() {
        let mut debouncer = Debouncer::default();
        let one = Some(Digit::One);
        let emitted = feed(&mut debouncer, &[one, one, one, one, one]);
        // Frame 1 switches away from the initial candidate; frames 2..4 repeat it.
        assert_eq!(emitted, vec![None, None, None, one, one]);
        assert_eq!(debouncer.last_committed(), one);
    }

    #[test]
    fn switching_before_threshold_never_emits() {
        let mut debouncer = Debouncer::default();
        let emitted = feed(
            &mut debouncer,
            &[
                Some(Digit::Two),
                Some(Digit::Two),
                Some(Digit::Two),
                Some(Digit::Three),
                Some(Digit::Three),
                Some(Digit::Two),
            ],
        );
        assert!(emitted.iter().all(Option::is_none));
        assert_eq!(debouncer.last_committed(), None);
        assert_eq!(debouncer.candidate(), Some(Digit::Two));
        assert_eq!(debouncer.streak(), 0);
    }

    #[test]
    fn no_match_breaks_the_streak() {
        let mut debouncer = Debouncer::default();
        let one = Some(Digit::One);
        let emitted = feed(&mut debouncer, &[one, one, one, None, one, one, one]);
        assert!(emitted.iter().all(Option::is_none));
        assert_eq!(debouncer.streak(), 2);
    }

    #[test]
    fn repeated_no_match_never_emits() {
        let mut debouncer = Debouncer::default();
        let emitted = feed(&mut debouncer, &[None; 6]);
        assert!(emitted.iter().all(Option::is_none));
        assert_eq!(debouncer.candidate(), None);
    }

    #[test]
    fn initial_zero_candidate_qualifies_a_frame_early() {
        let mut debouncer = Debouncer::default();
        let zero = Some(Digit::Zero);
        let emitted = feed(&mut debouncer, &[zero, zero, zero]);
        assert_eq!(emitted, vec![None, None, zero]);
    }

    #[test]
    fn streak_is_capped() {
        let mut debouncer = Debouncer::default();
        for _ in 0..100 {
            debouncer.observe(Some(Digit::Three));
        }
        assert_eq!(debouncer.streak(), 3);
        assert_eq!(debouncer.observe(Some(Digit::Three)), Some(Digit::Three));
    }

    #[test]
    fn custom_threshold() {
        let mut debouncer = Debouncer::new(0);
        assert_eq!(debouncer.observe(Some(Digit::Two)), None);
        assert_eq!(debouncer.observe(Some(Digit::Two)), Some(Digit::Two));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut debouncer = Debouncer::default();
        feed(&mut debouncer, &[Some(Digit::Two); 5]);
        debouncer.reset();
        assert_eq!(debouncer.candidate(), Some(Digit::Zero));
        assert_eq!(debouncer.streak(), 0);
        assert_eq!(debouncer.last_committed(), None);
    }
}

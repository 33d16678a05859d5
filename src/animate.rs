//! State machines behind the page's two animations: the hero's typing cycle
//! and the one-shot reveal latch used by the scroll wrappers.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingCycleError {
    #[error("phrase list must not be empty")]
    EmptyPhraseList,
}

/// Where the typing cycle currently sits for its active phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Revealing one character per tick.
    Typing,
    /// Holding the fully revealed phrase before deletion starts.
    Pausing,
    /// Retracting one character per tick.
    Deleting,
}

/// Tick delays for a [`TypingCycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub pause: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(75),
            pause: Duration::from_millis(1500),
        }
    }
}

/// Cycles through a fixed phrase list forever: type out the current phrase,
/// hold it, delete it, move to the next one (wrapping after the last).
///
/// The machine itself has no notion of wall-clock time. Callers ask
/// [`TypingCycle::delay`] how long to wait, then call [`TypingCycle::step`]
/// once the delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingCycle {
    phrases: Vec<String>,
    timings: TypingTimings,
    index: usize,
    // revealed prefix length, counted in chars
    shown: usize,
    phase: TypingPhase,
}

impl TypingCycle {
    pub fn new(
        phrases: Vec<String>,
        timings: TypingTimings,
    ) -> Result<Self, TypingCycleError> {
        if phrases.is_empty() {
            return Err(TypingCycleError::EmptyPhraseList);
        }
        Ok(Self {
            phrases,
            timings,
            index: 0,
            shown: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// The full phrase currently being typed or deleted.
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// The revealed prefix of the current phrase, sliced at char boundaries.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((boundary, _)) => &phrase[..boundary],
            None => phrase,
        }
    }

    /// How long to wait before the next [`step`](Self::step).
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => self.timings.type_delay,
            TypingPhase::Pausing => self.timings.pause,
            TypingPhase::Deleting => self.timings.delete_delay,
        }
    }

    /// Perform exactly one transition. Never terminates the cycle: after the
    /// last phrase is deleted the index wraps back to the first.
    pub fn step(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                let len = self.current_phrase().chars().count();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = TypingPhase::Pausing;
                }
            }
            TypingPhase::Pausing => {
                self.phase = TypingPhase::Deleting;
            }
            TypingPhase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                }
            }
        }
    }
}

/// One-shot visibility latch for a reveal-on-scroll wrapper.
///
/// Flips false→true on the first qualifying intersection (or via
/// [`reveal`](Self::reveal) when observation is unavailable) and never
/// transitions back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealOnce {
    visible: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection observation. Returns `true` only on the
    /// observation that flips the latch; everything after that is ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// Force the latch open. Used when the observation capability is absent:
    /// content must fail open, never stay hidden.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn timings(type_delay: u64, delete_delay: u64, pause: u64) -> TypingTimings {
        TypingTimings {
            type_delay: ms(type_delay),
            delete_delay: ms(delete_delay),
            pause: ms(pause),
        }
    }

    fn cycle(phrases: &[&str], t: TypingTimings) -> TypingCycle {
        let phrases = phrases.iter().map(|s| s.to_string()).collect();
        TypingCycle::new(phrases, t).expect("test phrase list should be valid")
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let err = TypingCycle::new(Vec::new(), TypingTimings::default());
        assert_eq!(err, Err(TypingCycleError::EmptyPhraseList));
    }

    #[test]
    fn test_reference_timing_scenario() {
        // phrases=["Hi","Bye"], type=100ms, delete=50ms, pause=200ms
        let mut c = cycle(&["Hi", "Bye"], timings(100, 50, 200));

        // t=0
        assert_eq!(c.text(), "");
        assert_eq!(c.phase(), TypingPhase::Typing);
        assert_eq!(c.delay(), ms(100));

        c.step(); // t=100
        assert_eq!(c.text(), "H");
        assert_eq!(c.delay(), ms(100));

        c.step(); // t=200, full phrase reached
        assert_eq!(c.text(), "Hi");
        assert_eq!(c.phase(), TypingPhase::Pausing);
        assert_eq!(c.delay(), ms(200));

        c.step(); // t=400, deletion begins
        assert_eq!(c.text(), "Hi");
        assert_eq!(c.phase(), TypingPhase::Deleting);
        assert_eq!(c.delay(), ms(50));

        c.step(); // t=450
        assert_eq!(c.text(), "H");

        c.step(); // t=500, empty again, next phrase active
        assert_eq!(c.text(), "");
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.current_phrase(), "Bye");
        assert_eq!(c.phase(), TypingPhase::Typing);
        assert_eq!(c.delay(), ms(100));
    }

    #[test]
    fn test_single_phrase_cycles() {
        let mut c = cycle(&["X"], TypingTimings::default());
        for _ in 0..3 {
            c.step();
            assert_eq!(c.text(), "X");
            assert_eq!(c.phase(), TypingPhase::Pausing);
            c.step();
            assert_eq!(c.phase(), TypingPhase::Deleting);
            c.step();
            assert_eq!(c.text(), "");
            assert_eq!(c.phrase_index(), 0);
            assert_eq!(c.phase(), TypingPhase::Typing);
        }
    }

    #[test]
    fn test_index_wraps_in_order() {
        let mut c = cycle(&["a", "b", "c"], TypingTimings::default());
        let mut seen = vec![c.phrase_index()];
        // run several full cycles, recording the index each time a phrase
        // finishes deleting
        for _ in 0..6 {
            loop {
                let before = c.phrase_index();
                c.step();
                if c.phrase_index() != before {
                    seen.push(c.phrase_index());
                    break;
                }
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_text_is_always_a_prefix_of_current_phrase() {
        let mut c = cycle(
            &["Code Wizard 🧙‍♂️", "Coffee Consumer ☕", ""],
            TypingTimings::default(),
        );
        for _ in 0..500 {
            let text = c.text().to_string();
            assert!(
                c.current_phrase().starts_with(&text),
                "{text:?} is not a prefix of {:?}",
                c.current_phrase()
            );
            c.step();
        }
    }

    #[test]
    fn test_multibyte_phrase_never_splits_a_scalar() {
        // text() slices by byte index; an off-boundary slice would panic
        let mut c = cycle(&["Bit Whisperer 💻"], TypingTimings::default());
        for _ in 0..100 {
            let _ = c.text();
            c.step();
        }
    }

    #[test]
    fn test_empty_phrase_entry_passes_through() {
        let mut c = cycle(&["", "ok"], TypingTimings::default());
        // "" is already fully typed: first step only moves to Pausing
        c.step();
        assert_eq!(c.text(), "");
        assert_eq!(c.phase(), TypingPhase::Pausing);
        c.step();
        assert_eq!(c.phase(), TypingPhase::Deleting);
        c.step();
        assert_eq!(c.phrase_index(), 1);
        assert_eq!(c.phase(), TypingPhase::Typing);
    }

    #[test]
    fn test_reveal_latch_is_monotonic() {
        let mut latch = RevealOnce::new();
        assert!(!latch.is_visible());

        // non-qualifying events leave the latch closed
        assert!(!latch.observe(false));
        assert!(!latch.is_visible());

        // first qualifying event flips it
        assert!(latch.observe(true));
        assert!(latch.is_visible());

        // nothing un-sets it, and later events report no flip
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_reveal_fail_open() {
        let mut latch = RevealOnce::new();
        latch.reveal();
        assert!(latch.is_visible());
        // still monotonic afterwards
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }
}

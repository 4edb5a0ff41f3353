/// The engine's view of the external score store.
///
/// The engine never owns the score; it only asks the store to move it.
pub trait ScoreSink {
    /// One piece of food was eaten
    fn increment(&mut self);

    /// The game ended; drop the score back to its starting value
    fn decrement_to_baseline(&mut self);

    fn current_value(&self) -> u32;
}

impl<T: ScoreSink + ?Sized> ScoreSink for &mut T {
    fn increment(&mut self) {
        (**self).increment();
    }

    fn decrement_to_baseline(&mut self) {
        (**self).decrement_to_baseline();
    }

    fn current_value(&self) -> u32 {
        (**self).current_value()
    }
}

/// In-process score store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    value: u32,
    baseline: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `baseline` instead of zero; resets return here too.
    pub fn with_baseline(baseline: u32) -> Self {
        Self {
            value: baseline,
            baseline,
        }
    }

    pub fn baseline(&self) -> u32 {
        self.baseline
    }
}

impl ScoreSink for ScoreBoard {
    fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    fn decrement_to_baseline(&mut self) {
        self.value = self.baseline;
    }

    fn current_value(&self) -> u32 {
        self.value
    }
}

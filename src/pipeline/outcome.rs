/// Result of a stage that may run without anything to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    /// The stage had no input and did nothing; an advisory was logged.
    SkippedNoContent,
}

impl StageOutcome {
    pub fn is_completed(self) -> bool {
        self == StageOutcome::Completed
    }
}

/// Summary of one `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub lines: usize,
    pub words_seen: usize,
    pub tokens_kept: usize,
    pub words_dropped: usize,
    pub parse: StageOutcome,
    pub store: StageOutcome,
}

impl RunReport {
    pub fn wrote_output(&self) -> bool {
        self.store.is_completed()
    }
}

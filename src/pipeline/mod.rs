pub mod cleaner;
pub mod error;
pub mod outcome;

pub use cleaner::TextTokenCleaner;
pub use error::{CleanerError, StoreError};
pub use outcome::{RunReport, StageOutcome};

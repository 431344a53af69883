pub mod outcome;
pub mod request;

pub use outcome::{
    group_sections, BuildOutcome, BuildReport, DeckEntry, DeckSection, PoolFingerprint,
    RerankStatus, RoleLine, RoleSuggestion, RoleSummary,
};
pub use request::{BuildError, BuildRequest, Theme};

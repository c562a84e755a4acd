//! Result types for extraction output.

use serde::Serialize;

use crate::record::QuestionRecord;

/// Result of running the extraction pipeline over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractResult {
    /// Questions ordered by strictly increasing number.
    pub questions: Vec<QuestionRecord>,

    /// Counters describing what the pipeline discarded.
    pub stats: ExtractStats,
}

/// Per-run counters.
///
/// `spans == dropped_empty_prompt + dropped_no_options + duplicates + kept`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Question spans found by the segmenter.
    pub spans: usize,
    /// Spans whose normalized prompt was empty.
    pub dropped_empty_prompt: usize,
    /// Spans without a single usable option.
    pub dropped_no_options: usize,
    /// Records discarded because their number was already taken.
    pub duplicates: usize,
    /// Records in the final output.
    pub kept: usize,
}

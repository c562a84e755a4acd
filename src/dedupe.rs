//! Deduplication and ordering of assembled records.

use std::collections::HashSet;

use tracing::debug;

use crate::record::QuestionRecord;

/// Keeps the first record of every question number, then sorts by number.
///
/// Later records sharing a number are discarded even when their content
/// differs. The sort is stable; with unique numbers it only reorders spans
/// that the segmenter emitted out of sequence.
#[must_use]
pub fn finalize(candidates: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut kept: Vec<QuestionRecord> = candidates
        .into_iter()
        .filter(|record| {
            let first = seen.insert(record.number());
            if !first {
                debug!(number = record.number(), "discarding duplicate question");
            }
            first
        })
        .collect();
    kept.sort_by_key(QuestionRecord::number);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{AnswerOption, OptionLabel};
    use crate::Options;

    fn record(number: u32, text: &str) -> QuestionRecord {
        QuestionRecord::assemble(
            number,
            text,
            vec![AnswerOption {
                label: OptionLabel::Letter('A'),
                text: "Sim".to_string(),
            }],
            &Options::default(),
        )
        .expect("record")
    }

    #[test]
    fn first_occurrence_wins() {
        let out = finalize(vec![record(3, "primeira"), record(3, "segunda")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text(), "primeira");
    }

    #[test]
    fn output_is_strictly_increasing() {
        let out = finalize(vec![
            record(8, "oito"),
            record(1, "um"),
            record(9, "nove"),
            record(1, "um de novo"),
            record(2, "dois"),
        ]);
        let numbers: Vec<u32> = out.iter().map(QuestionRecord::number).collect();
        assert_eq!(numbers, [1, 2, 8, 9]);
        assert_eq!(out[0].text(), "um");
    }

    #[test]
    fn empty_input() {
        assert!(finalize(Vec::new()).is_empty());
    }
}

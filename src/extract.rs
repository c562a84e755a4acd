//! Extraction pipeline orchestration.
//!
//! document -> normalize -> segment -> (options, classify, assemble) per
//! span -> deduplicate and sort.

use tracing::debug;

use crate::answers::extract_options;
use crate::dedupe::finalize;
use crate::error::{Error, Result};
use crate::normalize::{normalize, strip_page_number};
use crate::record::QuestionRecord;
use crate::result::{ExtractResult, ExtractStats};
use crate::segment::segment;
use crate::Options;

/// Runs the full pipeline over one document string.
pub(crate) fn extract_questions(document: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;
    if document.len() > options.max_document_len {
        return Err(Error::DocumentTooLarge {
            len: document.len(),
            max: options.max_document_len,
        });
    }

    let document = normalize(document);
    let spans = segment(&document, options.segmentation);

    let mut stats = ExtractStats {
        spans: spans.len(),
        ..ExtractStats::default()
    };

    let mut candidates = Vec::with_capacity(spans.len());
    for span in &spans {
        let answers = extract_options(span.body, &options.likert_anchors);
        if answers.is_empty() {
            debug!(number = span.number, "dropping question without options");
            stats.dropped_no_options += 1;
            continue;
        }
        match QuestionRecord::assemble(span.number, span.prompt, answers, options) {
            Some(record) => candidates.push(record),
            None => {
                debug!(number = span.number, "dropping question with empty prompt");
                stats.dropped_empty_prompt += 1;
            }
        }
    }

    let assembled = candidates.len();
    let questions = finalize(candidates);
    stats.duplicates = assembled - questions.len();
    stats.kept = questions.len();

    debug!(
        spans = stats.spans,
        kept = stats.kept,
        duplicates = stats.duplicates,
        "extraction finished"
    );

    Ok(ExtractResult { questions, stats })
}

/// Joins per-page text in page order, optionally dropping page footers.
pub(crate) fn join_pages<S: AsRef<str>>(pages: &[S], strip_footers: bool) -> String {
    let mut document = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());
    for page in pages {
        let text = if strip_footers {
            strip_page_number(page.as_ref())
        } else {
            page.as_ref()
        };
        if !document.is_empty() {
            document.push('\n');
        }
        document.push_str(text);
    }
    document
}

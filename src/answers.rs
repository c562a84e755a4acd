//! Answer-option extraction.
//!
//! Within one question body, every `X( )` marker opens an option whose text
//! runs up to the next marker or the end of the body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::normalize::normalize;
use crate::patterns::OPTION_MARKER;

/// Scale positions that carry meaning even without captured text
/// ("Discordo totalmente" / "Concordo totalmente").
pub const LIKERT_ANCHORS: [u8; 2] = [1, 6];

/// Label of an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OptionLabel {
    /// `A` to `Z`.
    Letter(char),
    /// Rating-scale position `1` to `9`.
    Scale(u8),
    /// `NA`, "não se aplica".
    NotApplicable,
}

impl OptionLabel {
    /// Returns `true` if this label is one of the given scale anchors.
    #[must_use]
    pub fn is_anchor(self, anchors: &[u8]) -> bool {
        matches!(self, OptionLabel::Scale(n) if anchors.contains(&n))
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionLabel::Letter(c) => write!(f, "{c}"),
            OptionLabel::Scale(n) => write!(f, "{n}"),
            OptionLabel::NotApplicable => f.write_str("NA"),
        }
    }
}

/// Error returned when a string is not a valid option label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid option label: {0:?}")]
pub struct ParseLabelError(String);

impl FromStr for OptionLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "NA" {
            return Ok(OptionLabel::NotApplicable);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ 'A'..='Z'), None) => Ok(OptionLabel::Letter(c)),
            (Some(c @ '1'..='9'), None) => Ok(OptionLabel::Scale(c as u8 - b'0')),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

impl From<OptionLabel> for String {
    fn from(label: OptionLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for OptionLabel {
    type Error = ParseLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Marker label.
    pub label: OptionLabel,
    /// Normalized option text; empty only for scale anchors.
    pub text: String,
}

/// Extracts the answer options of one question body, in document order.
///
/// Options whose normalized text is empty are dropped unless their label is
/// one of `anchors`. A body without markers yields an empty list.
///
/// # Examples
///
/// ```
/// use survey_questions::answers::{extract_options, OptionLabel, LIKERT_ANCHORS};
///
/// let options = extract_options(" A( ) Sim B( ) Não", &LIKERT_ANCHORS);
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[1].label, OptionLabel::Letter('B'));
/// assert_eq!(options[1].text, "Não");
/// ```
#[must_use]
pub fn extract_options(body: &str, anchors: &[u8]) -> Vec<AnswerOption> {
    let markers: Vec<(OptionLabel, usize, usize)> = OPTION_MARKER
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str().parse().ok()?;
            Some((label, whole.start(), whole.end()))
        })
        .collect();

    let mut options = Vec::with_capacity(markers.len());
    for (i, &(label, _, text_start)) in markers.iter().enumerate() {
        let text_end = markers.get(i + 1).map_or(body.len(), |next| next.1);
        let text = normalize(&body[text_start..text_end]);
        if text.is_empty() && !label.is_anchor(anchors) {
            trace!(%label, "dropping empty option");
            continue;
        }
        options.push(AnswerOption { label, text });
    }
    options
}

//! Configuration options for question extraction.
//!
//! The `Options` struct carries every layout-specific constant of the
//! pipeline. The defaults reproduce the questionnaire the heuristics were
//! tuned on; another document format can override them without touching
//! the extraction code, either in code or through environment variables.

use tracing::warn;

use crate::classify::{DEFAULT_CATEGORY_BOUNDS, MULTIPLE_CHOICE_MAX_LEN};
use crate::answers::LIKERT_ANCHORS;
use crate::error::{Error, Result};

/// Default upper bound on document size (8 MiB).
pub const DEFAULT_MAX_DOCUMENT_LEN: usize = 8 * 1024 * 1024;

/// Default prompt length limit for [`Segmentation::Strict`].
pub const DEFAULT_STRICT_PROMPT_LEN: usize = 600;

/// Inclusive upper question number of each section.
///
/// Numbers above `academic` belong to the `licenciatura` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBounds {
    /// Last question of `dados-pessoais`.
    pub personal_data: u32,
    /// Last question of `financeiro`.
    pub financial: u32,
    /// Last question of `formacao`.
    pub education: u32,
    /// Last question of `academico`.
    pub academic: u32,
}

impl CategoryBounds {
    fn is_increasing(&self) -> bool {
        self.personal_data >= 1
            && self.personal_data < self.financial
            && self.financial < self.education
            && self.education < self.academic
    }
}

impl Default for CategoryBounds {
    fn default() -> Self {
        DEFAULT_CATEGORY_BOUNDS
    }
}

/// How question boundaries are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// Every integer starts a question; the prompt runs to the next option
    /// marker. Integers inside option text become spurious questions that
    /// the deduplicator usually absorbs.
    #[default]
    Greedy,

    /// An integer starts a question only if it is a standalone token, the
    /// first option marker follows within `max_prompt_len` characters and
    /// its number is larger than the previously accepted one. Rejected
    /// integers stay part of the surrounding text.
    Strict {
        /// Maximum prompt length in characters.
        max_prompt_len: usize,
    },
}

/// Configuration options for question extraction.
///
/// # Example
///
/// ```rust
/// use survey_questions::{Options, Segmentation};
///
/// let options = Options {
///     multiple_choice_max_len: 120,
///     segmentation: Segmentation::Strict { max_prompt_len: 400 },
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Question-number ranges of the document sections.
    ///
    /// Default: 4 / 10 / 19 / 44
    pub category_bounds: CategoryBounds,

    /// A question whose first option is strictly shorter than this many
    /// characters is `multiple-choice`, otherwise `likert`.
    ///
    /// Default: `100`
    pub multiple_choice_max_len: usize,

    /// Scale positions kept even when their option text is empty.
    ///
    /// Default: `[1, 6]`
    pub likert_anchors: [u8; 2],

    /// Question boundary detection.
    ///
    /// Default: [`Segmentation::Greedy`]
    pub segmentation: Segmentation,

    /// Strip the trailing page number of every page before joining pages.
    ///
    /// Only used by `extract_pages`.
    ///
    /// Default: `true`
    pub strip_page_footers: bool,

    /// Largest accepted document, in bytes.
    ///
    /// Default: 8 MiB
    pub max_document_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            category_bounds: CategoryBounds::default(),
            multiple_choice_max_len: MULTIPLE_CHOICE_MAX_LEN,
            likert_anchors: LIKERT_ANCHORS,
            segmentation: Segmentation::Greedy,
            strip_page_footers: true,
            max_document_len: DEFAULT_MAX_DOCUMENT_LEN,
        }
    }
}

impl Options {
    /// Checks that the options describe a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] when the category bounds are not
    /// strictly increasing from at least 1, when the multiple-choice
    /// threshold is zero, or when a strict prompt length is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.category_bounds.is_increasing() {
            return Err(Error::InvalidOptions(format!(
                "category bounds must be strictly increasing from 1, got {:?}",
                self.category_bounds
            )));
        }
        if self.multiple_choice_max_len == 0 {
            return Err(Error::InvalidOptions(
                "multiple_choice_max_len must be positive".to_string(),
            ));
        }
        if let Segmentation::Strict { max_prompt_len: 0 } = self.segmentation {
            return Err(Error::InvalidOptions(
                "strict segmentation needs a positive max_prompt_len".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds options from the defaults overlaid with `SURVEY_*` environment
    /// variables.
    ///
    /// | variable | format |
    /// |---|---|
    /// | `SURVEY_MC_MAX_LEN` | integer |
    /// | `SURVEY_CATEGORY_BOUNDS` | `4,10,19,44` |
    /// | `SURVEY_LIKERT_ANCHORS` | `1,6` |
    /// | `SURVEY_SEGMENTATION` | `greedy`, `strict` or `strict:N` |
    /// | `SURVEY_STRIP_PAGE_FOOTERS` | `true` / `false` |
    /// | `SURVEY_MAX_DOCUMENT_LEN` | integer (bytes) |
    ///
    /// Values that do not parse are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Options::from_env`] with an arbitrary variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            category_bounds: parse_var(&lookup, "SURVEY_CATEGORY_BOUNDS", parse_bounds)
                .unwrap_or(default.category_bounds),
            multiple_choice_max_len: parse_var(&lookup, "SURVEY_MC_MAX_LEN", |v| v.parse().ok())
                .unwrap_or(default.multiple_choice_max_len),
            likert_anchors: parse_var(&lookup, "SURVEY_LIKERT_ANCHORS", parse_anchors)
                .unwrap_or(default.likert_anchors),
            segmentation: parse_var(&lookup, "SURVEY_SEGMENTATION", parse_segmentation)
                .unwrap_or(default.segmentation),
            strip_page_footers: parse_var(&lookup, "SURVEY_STRIP_PAGE_FOOTERS", |v| v.parse().ok())
                .unwrap_or(default.strip_page_footers),
            max_document_len: parse_var(&lookup, "SURVEY_MAX_DOCUMENT_LEN", |v| v.parse().ok())
                .unwrap_or(default.max_document_len),
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!(variable = key, value = %raw, "ignoring unparsable setting");
    }
    parsed
}

fn parse_list<T: std::str::FromStr, const N: usize>(value: &str) -> Option<[T; N]> {
    let items: Vec<T> = value
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    items.try_into().ok()
}

fn parse_bounds(value: &str) -> Option<CategoryBounds> {
    let [personal_data, financial, education, academic] = parse_list::<u32, 4>(value)?;
    Some(CategoryBounds {
        personal_data,
        financial,
        education,
        academic,
    })
}

fn parse_anchors(value: &str) -> Option<[u8; 2]> {
    parse_list::<u8, 2>(value)
}

fn parse_segmentation(value: &str) -> Option<Segmentation> {
    let lower = value.to_ascii_lowercase();
    match lower.split_once(':') {
        None if lower == "greedy" => Some(Segmentation::Greedy),
        None if lower == "strict" => Some(Segmentation::Strict {
            max_prompt_len: DEFAULT_STRICT_PROMPT_LEN,
        }),
        Some(("strict", len)) => len
            .trim()
            .parse()
            .ok()
            .map(|max_prompt_len| Segmentation::Strict { max_prompt_len }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_increasing_bounds() {
        let options = Options {
            category_bounds: CategoryBounds {
                personal_data: 4,
                financial: 4,
                education: 19,
                academic: 44,
            },
            ..Options::default()
        };
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn rejects_zero_thresholds() {
        let options = Options {
            multiple_choice_max_len: 0,
            ..Options::default()
        };
        assert!(options.validate().is_err());

        let options = Options {
            segmentation: Segmentation::Strict { max_prompt_len: 0 },
            ..Options::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn lookup_overrides_selected_fields() {
        let options = Options::from_lookup(lookup_from(&[
            ("SURVEY_MC_MAX_LEN", "80"),
            ("SURVEY_CATEGORY_BOUNDS", "2, 6, 12, 30"),
            ("SURVEY_SEGMENTATION", "strict:250"),
        ]));
        assert_eq!(options.multiple_choice_max_len, 80);
        assert_eq!(
            options.category_bounds,
            CategoryBounds {
                personal_data: 2,
                financial: 6,
                education: 12,
                academic: 30,
            }
        );
        assert_eq!(options.segmentation, Segmentation::Strict { max_prompt_len: 250 });
        assert_eq!(options.likert_anchors, LIKERT_ANCHORS);
        assert!(options.strip_page_footers);
    }

    #[test]
    fn lookup_ignores_garbage() {
        let options = Options::from_lookup(lookup_from(&[
            ("SURVEY_MC_MAX_LEN", "lots"),
            ("SURVEY_CATEGORY_BOUNDS", "1,2,3"),
            ("SURVEY_LIKERT_ANCHORS", "1,2,3"),
            ("SURVEY_SEGMENTATION", "fuzzy"),
        ]));
        assert_eq!(options, Options::default());
    }

    #[test]
    fn segmentation_parsing() {
        assert_eq!(parse_segmentation("GREEDY"), Some(Segmentation::Greedy));
        assert_eq!(
            parse_segmentation("strict"),
            Some(Segmentation::Strict {
                max_prompt_len: DEFAULT_STRICT_PROMPT_LEN
            })
        );
        assert_eq!(parse_segmentation("strict:x"), None);
    }
}

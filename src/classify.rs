//! Question classification.
//!
//! Category is a pure function of the question number; type is a pure
//! function of the first option's length. Neither looks at meaning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::{CategoryBounds, Options};

/// Section ranges of the questionnaire layout: 1-4, 5-10, 11-19, 20-44, 45+.
pub const DEFAULT_CATEGORY_BOUNDS: CategoryBounds = CategoryBounds {
    personal_data: 4,
    financial: 10,
    education: 19,
    academic: 44,
};

/// First options shorter than this (in characters) mark a multiple-choice item.
pub const MULTIPLE_CHOICE_MAX_LEN: usize = 100;

/// Document section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Personal data.
    DadosPessoais,
    /// Family income and funding.
    Financeiro,
    /// Schooling background.
    Formacao,
    /// Evaluation of the undergraduate course.
    Academico,
    /// Teaching-degree specific items.
    Licenciatura,
}

impl Category {
    /// Section of question `number` under the given bounds.
    ///
    /// Ranges are checked in ascending order; the first that contains
    /// `number` wins.
    #[must_use]
    pub fn from_number(number: u32, bounds: &CategoryBounds) -> Self {
        if number <= bounds.personal_data {
            Category::DadosPessoais
        } else if number <= bounds.financial {
            Category::Financeiro
        } else if number <= bounds.education {
            Category::Formacao
        } else if number <= bounds.academic {
            Category::Academico
        } else {
            Category::Licenciatura
        }
    }

    /// Wire name, e.g. `dados-pessoais`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::DadosPessoais => "dados-pessoais",
            Category::Financeiro => "financeiro",
            Category::Formacao => "formacao",
            Category::Academico => "academico",
            Category::Licenciatura => "licenciatura",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Short labeled choices.
    MultipleChoice,
    /// Long discursive or rating-scale items.
    Likert,
}

impl QuestionType {
    /// Type implied by the first option's text.
    ///
    /// `None` (no options) classifies as `Likert`; records without options
    /// are never materialized, so this only matters to direct callers.
    #[must_use]
    pub fn from_first_option(first_option_text: Option<&str>, max_len: usize) -> Self {
        match first_option_text {
            Some(text) if text.chars().count() < max_len => QuestionType::MultipleChoice,
            _ => QuestionType::Likert,
        }
    }

    /// Wire name, e.g. `multiple-choice`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Likert => "likert",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives category and type of a question.
///
/// Precondition: the question has at least one option; callers pass the
/// normalized text of the first one.
#[must_use]
pub fn classify(number: u32, first_option_text: &str, options: &Options) -> (Category, QuestionType) {
    (
        Category::from_number(number, &options.category_bounds),
        QuestionType::from_first_option(Some(first_option_text), options.multiple_choice_max_len),
    )
}

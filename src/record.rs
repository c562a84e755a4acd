//! Question records.
//!
//! A `QuestionRecord` can only be obtained through [`QuestionRecord::assemble`]
//! or by deserializing data that passes the same checks, so every record in
//! hand has a non-empty prompt, at least one option and `id == number`.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerOption;
use crate::classify::{classify, Category, QuestionType};
use crate::error::Error;
use crate::normalize::normalize;
use crate::Options;

/// One extracted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionRecord")]
pub struct QuestionRecord {
    id: u32,
    number: u32,
    text: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    category: Category,
    options: Vec<AnswerOption>,
}

impl QuestionRecord {
    /// Builds a record from a segmented question.
    ///
    /// `text` is normalized here. Returns `None` when the normalized prompt
    /// is empty or `options` is empty; otherwise the record is classified
    /// from `number` and its first option.
    #[must_use]
    pub fn assemble(
        number: u32,
        text: &str,
        options: Vec<AnswerOption>,
        config: &Options,
    ) -> Option<Self> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }
        let first = options.first()?;
        let (category, question_type) = classify(number, &first.text, config);
        Some(Self {
            id: number,
            number,
            text,
            question_type,
            category,
            options,
        })
    }

    /// Record identifier; always equal to [`number`](Self::number).
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Question number as printed in the document.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Normalized prompt.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answer format.
    #[must_use]
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    /// Document section.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Options in document order; never empty.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }
}

#[derive(Deserialize)]
struct RawQuestionRecord {
    id: u32,
    number: u32,
    text: String,
    #[serde(rename = "type")]
    question_type: QuestionType,
    category: Category,
    options: Vec<AnswerOption>,
}

impl TryFrom<RawQuestionRecord> for QuestionRecord {
    type Error = Error;

    fn try_from(raw: RawQuestionRecord) -> Result<Self, Self::Error> {
        if raw.id != raw.number {
            return Err(Error::InvalidRecord(format!(
                "id {} differs from number {}",
                raw.id, raw.number
            )));
        }
        if raw.text.trim().is_empty() {
            return Err(Error::InvalidRecord(format!(
                "question {} has an empty prompt",
                raw.number
            )));
        }
        if raw.options.is_empty() {
            return Err(Error::InvalidRecord(format!(
                "question {} has no options",
                raw.number
            )));
        }
        Ok(Self {
            id: raw.id,
            number: raw.number,
            text: raw.text,
            question_type: raw.question_type,
            category: raw.category,
            options: raw.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::OptionLabel;

    fn option(label: char, text: &str) -> AnswerOption {
        AnswerOption {
            label: OptionLabel::Letter(label),
            text: text.to_string(),
        }
    }

    #[test]
    fn assemble_classifies_and_normalizes() {
        let record = QuestionRecord::assemble(
            5,
            "  Qual a renda\n total? ",
            vec![option('A', "Nenhuma"), option('B', "Até 1,5 salário mínimo")],
            &Options::default(),
        )
        .expect("record");
        assert_eq!(record.id(), 5);
        assert_eq!(record.number(), 5);
        assert_eq!(record.text(), "Qual a renda total?");
        assert_eq!(record.category(), Category::Financeiro);
        assert_eq!(record.question_type(), QuestionType::MultipleChoice);
        assert_eq!(record.options().len(), 2);
    }

    #[test]
    fn assemble_rejects_empty_prompt() {
        let record = QuestionRecord::assemble(3, " \n 12 ", vec![option('A', "Sim")], &Options::default());
        assert!(record.is_none());
    }

    #[test]
    fn assemble_rejects_missing_options() {
        let record = QuestionRecord::assemble(3, "Prompt", Vec::new(), &Options::default());
        assert!(record.is_none());
    }

    #[test]
    fn long_first_option_is_likert() {
        let long = "a".repeat(150);
        let record = QuestionRecord::assemble(30, "Prompt", vec![option('A', &long)], &Options::default())
            .expect("record");
        assert_eq!(record.question_type(), QuestionType::Likert);
        assert_eq!(record.category(), Category::Academico);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let record = QuestionRecord::assemble(1, "Nome?", vec![option('A', "Ana")], &Options::default())
            .expect("record");
        let json = serde_json::to_value(&record).expect("json");
        assert_eq!(json["type"], "multiple-choice");
        assert_eq!(json["category"], "dados-pessoais");
        assert_eq!(json["options"][0]["label"], "A");
        assert_eq!(json["id"], json["number"]);
    }

    #[test]
    fn deserialize_rechecks_invariants() {
        let bad = r#"{"id":2,"number":3,"text":"x","type":"likert","category":"financeiro",
                      "options":[{"label":"A","text":"y"}]}"#;
        assert!(serde_json::from_str::<QuestionRecord>(bad).is_err());

        let no_options = r#"{"id":3,"number":3,"text":"x","type":"likert","category":"financeiro",
                             "options":[]}"#;
        assert!(serde_json::from_str::<QuestionRecord>(no_options).is_err());
    }
}

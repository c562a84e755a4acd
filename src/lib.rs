//! # survey-questions
//!
//! Extracts structured questions from the linear text of a multi-page
//! survey document.
//!
//! The input is the text a PDF text layer yields, page after page: prompts,
//! checkbox markers and footers run together with arbitrary line breaks.
//! The pipeline recovers question boundaries, answer options and labels
//! from that stream and returns an ordered, deduplicated list of records.
//!
//! ## Quick Start
//!
//! ```rust
//! use survey_questions::{extract, Category, QuestionType};
//!
//! let text = "1 What is your name? A( ) Option A B( ) Option B";
//! let result = extract(text)?;
//!
//! let question = &result.questions[0];
//! assert_eq!(question.number(), 1);
//! assert_eq!(question.text(), "What is your name?");
//! assert_eq!(question.category(), Category::DadosPessoais);
//! assert_eq!(question.question_type(), QuestionType::MultipleChoice);
//! # Ok::<(), survey_questions::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`normalize`]: strips page-number footers and collapses whitespace
//! - [`segment`]: finds question spans with the leading-integer heuristic
//! - [`answers`]: splits each span's option block into labeled options
//! - [`classify`]: derives category from the number and type from the first option
//! - [`dedupe`]: keeps the first record of each number and sorts
//!
//! Every stage is a pure function, so independent documents can be
//! processed concurrently without coordination. Pages of one document
//! must be joined in page order before segmentation.

mod error;
mod extract;
mod options;
mod patterns;
mod record;
mod result;

/// Answer-option extraction.
pub mod answers;

/// Category and type classification.
pub mod classify;

/// Deduplication and ordering of records.
pub mod dedupe;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Text normalization.
pub mod normalize;

/// Question segmentation.
pub mod segment;

// Public API - re-exports
pub use answers::{AnswerOption, OptionLabel};
pub use classify::{Category, QuestionType};
pub use error::{Error, Result};
pub use options::{CategoryBounds, Options, Segmentation};
pub use record::QuestionRecord;
pub use result::{ExtractResult, ExtractStats};

/// Extracts questions from a document using default options.
///
/// A document without recognisable questions yields an empty result, not
/// an error.
///
/// # Example
///
/// ```rust
/// use survey_questions::extract;
///
/// assert!(extract("")?.questions.is_empty());
/// # Ok::<(), survey_questions::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(document: &str) -> Result<ExtractResult> {
    extract_with_options(document, &Options::default())
}

/// Extracts questions from a document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if `options` fail validation and
/// [`Error::DocumentTooLarge`] if the document exceeds
/// `options.max_document_len`.
///
/// # Example
///
/// ```rust
/// use survey_questions::{extract_with_options, Options, Segmentation};
///
/// let options = Options {
///     segmentation: Segmentation::Strict { max_prompt_len: 300 },
///     ..Options::default()
/// };
/// let text = "8 Renda? A( ) Até 1,5 salário B( ) De 1,5 a 3 salários 9 Moradia? A( ) Própria";
/// let result = extract_with_options(text, &options)?;
/// assert_eq!(result.questions.len(), 2);
/// assert_eq!(result.questions[0].options().len(), 2);
/// # Ok::<(), survey_questions::Error>(())
/// ```
pub fn extract_with_options(document: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_questions(document, options)
}

/// Extracts questions from per-page text, given in page order.
///
/// Pages are joined with a line break. When `options.strip_page_footers` is
/// set, each page's trailing page number is removed first so it cannot be
/// read as the start of a question.
///
/// # Errors
///
/// Same as [`extract_with_options`].
///
/// # Example
///
/// ```rust
/// use survey_questions::{extract_pages, Options};
///
/// let pages = ["1 Nome? A( ) Ana B( ) Bia\n1", "2 Idade? A( ) Menos de vinte B( ) Mais\n2"];
/// let result = extract_pages(&pages, &Options::default())?;
/// let numbers: Vec<u32> = result.questions.iter().map(|q| q.number()).collect();
/// assert_eq!(numbers, [1, 2]);
/// # Ok::<(), survey_questions::Error>(())
/// ```
pub fn extract_pages<S: AsRef<str>>(pages: &[S], options: &Options) -> Result<ExtractResult> {
    let document = extract::join_pages(pages, options.strip_page_footers);
    extract_with_options(&document, options)
}

/// Extracts questions from raw document bytes with encoding detection.
///
/// Text with a UTF-8 or UTF-16 byte-order mark, or valid UTF-8, is decoded
/// as such; anything else is read as windows-1252.
///
/// # Errors
///
/// Same as [`extract_with_options`].
///
/// # Example
///
/// ```rust
/// use survey_questions::{extract_bytes, Options};
///
/// // windows-1252 encoded "Não"
/// let bytes = b"1 Trabalha? A( ) Sim B( ) N\xE3o";
/// let result = extract_bytes(bytes, &Options::default())?;
/// assert_eq!(result.questions[0].options()[1].text, "Não");
/// # Ok::<(), survey_questions::Error>(())
/// ```
pub fn extract_bytes(bytes: &[u8], options: &Options) -> Result<ExtractResult> {
    let document = encoding::transcode_to_utf8(bytes);
    extract_with_options(&document, options)
}

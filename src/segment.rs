//! Question segmentation.
//!
//! Splits a document into question spans using the leading-integer
//! heuristic: an integer starts a question, its prompt runs up to the next
//! option marker, and its option block runs from there to the start of the
//! next question.
//!
//! The heuristic is ambiguous. Under [`Segmentation::Greedy`] any integer in
//! option text (`De 1 a 3 salários`) is read as a new question, which cuts
//! the current option block short and yields a spurious span; the
//! deduplicator drops such spans when their number was already seen.
//! [`Segmentation::Strict`] narrows what counts as a question start.

use tracing::{debug, trace};

use crate::options::Segmentation;
use crate::patterns::{LEADING_INTEGER, OPTION_MARKER, SCALE_MARKER_PREFIX};

/// One question as located in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpan<'a> {
    /// Leading integer of the question.
    pub number: u32,
    /// Raw text between the number and the first option marker.
    pub prompt: &'a str,
    /// Raw option block: from the first marker to the next question.
    pub body: &'a str,
    /// Byte offset of the leading integer in the document.
    pub offset: usize,
}

struct Head {
    number: u32,
    offset: usize,
    prompt_start: usize,
    prompt_end: usize,
}

/// Locates question spans in `document`, in document order.
///
/// The scan is a single left-to-right pass; spans never overlap. A document
/// without integers yields no spans.
///
/// # Examples
///
/// ```
/// use survey_questions::segment::segment;
/// use survey_questions::Segmentation;
///
/// let spans = segment("1 Qual o seu nome? A( ) Ana B( ) Bia", Segmentation::Greedy);
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].number, 1);
/// assert_eq!(spans[0].prompt.trim(), "Qual o seu nome?");
/// assert_eq!(spans[0].body, "A( ) Ana B( ) Bia");
/// ```
#[must_use]
pub fn segment(document: &str, mode: Segmentation) -> Vec<QuestionSpan<'_>> {
    let heads = find_heads(document, mode);

    heads
        .iter()
        .enumerate()
        .map(|(i, head)| {
            let body_end = heads.get(i + 1).map_or(document.len(), |next| next.offset);
            let span = QuestionSpan {
                number: head.number,
                prompt: &document[head.prompt_start..head.prompt_end],
                body: &document[head.prompt_end..body_end],
                offset: head.offset,
            };
            trace!(number = span.number, offset = span.offset, "question span");
            span
        })
        .collect()
}

fn find_heads(document: &str, mode: Segmentation) -> Vec<Head> {
    let mut heads = Vec::new();
    let mut cursor = 0;
    let mut last_number = 0;

    while let Some(m) = LEADING_INTEGER.find_at(document, cursor) {
        if SCALE_MARKER_PREFIX.is_match(&document[m.start()..]) {
            cursor = m.end();
            continue;
        }

        let number = match m.as_str().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                debug!(digits = m.as_str(), offset = m.start(), "skipping non-question integer");
                cursor = m.end();
                continue;
            }
        };

        let marker = OPTION_MARKER.find_at(document, m.end()).map(|d| d.start());
        let prompt_end = marker.unwrap_or(document.len());

        if let Segmentation::Strict { max_prompt_len } = mode {
            let prompt = &document[m.end()..prompt_end];
            let accepted = marker.is_some()
                && number > last_number
                && is_standalone(document, m.start(), m.end())
                && !prompt.trim().is_empty()
                && prompt.chars().count() <= max_prompt_len;
            if !accepted {
                debug!(number, offset = m.start(), "strict mode rejected question start");
                cursor = m.end();
                continue;
            }
        }

        heads.push(Head {
            number,
            offset: m.start(),
            prompt_start: m.end(),
            prompt_end,
        });
        last_number = number;
        // Digits are word characters, so a marker never starts at `m.end()`
        // and the cursor always advances.
        cursor = prompt_end;
    }

    heads
}

/// Whether the integer at `start..end` is a token of its own, allowing the
/// usual numbering punctuation after it (`12.`, `12)`, `12-`).
fn is_standalone(document: &str, start: usize, end: usize) -> bool {
    let before_ok = document[..start]
        .chars()
        .next_back()
        .is_none_or(char::is_whitespace);
    let after_ok = document[end..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || matches!(c, '.' | ')' | '-' | ':' | '–'));
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: Segmentation = Segmentation::Strict { max_prompt_len: 200 };

    fn numbers(spans: &[QuestionSpan<'_>]) -> Vec<u32> {
        spans.iter().map(|s| s.number).collect()
    }

    #[test]
    fn empty_and_integer_free_documents_yield_nothing() {
        assert!(segment("", Segmentation::Greedy).is_empty());
        assert!(segment("Questionário do estudante", Segmentation::Greedy).is_empty());
    }

    #[test]
    fn body_runs_to_next_question() {
        let doc = "1 Nome? A( ) Ana B( ) Bia 2 Idade? A( ) 18 anos";
        let spans = segment(doc, Segmentation::Greedy);
        // "18" inside the last option is read as a question start.
        assert_eq!(numbers(&spans), [1, 2, 18]);
        assert_eq!(spans[0].body, "A( ) Ana B( ) Bia ");
        assert_eq!(spans[1].prompt.trim(), "Idade?");
        assert_eq!(spans[1].body, "A( ) ");
        assert_eq!(spans[2].prompt, " anos");
        assert_eq!(spans[2].body, "");
    }

    #[test]
    fn last_question_without_marker_runs_to_end() {
        let spans = segment("7 Some prompt with no markers at all", Segmentation::Greedy);
        assert_eq!(numbers(&spans), [7]);
        assert_eq!(spans[0].prompt, " Some prompt with no markers at all");
        assert!(spans[0].body.is_empty());
    }

    #[test]
    fn digits_inside_prompt_stay_in_prompt() {
        let spans = segment("12 Em 2020 você trabalhava? A( ) Sim", Segmentation::Greedy);
        assert_eq!(numbers(&spans), [12]);
        assert_eq!(spans[0].prompt.trim(), "Em 2020 você trabalhava?");
    }

    #[test]
    fn scale_markers_are_not_question_starts() {
        let doc = "21 O curso contribuiu? 1( ) Discordo 2( ) 3( ) 4( ) 5( ) 6( ) Concordo \
                   22 As aulas? 1( ) Discordo 6( ) Concordo";
        let spans = segment(doc, Segmentation::Greedy);
        assert_eq!(numbers(&spans), [21, 22]);
        assert!(spans[0].body.starts_with("1( ) Discordo"));
        assert!(spans[0].body.ends_with("Concordo "));
    }

    #[test]
    fn zero_and_overflowing_integers_are_skipped() {
        let doc = "0 x A( ) y 99999999999 z A( ) w";
        assert!(segment(doc, Segmentation::Greedy).is_empty());
    }

    #[test]
    fn repeated_numbers_are_all_reported() {
        let doc = "3 Primeira? A( ) Sim 3 Segunda? A( ) Não";
        let spans = segment(doc, Segmentation::Greedy);
        assert_eq!(numbers(&spans), [3, 3]);
        assert_eq!(spans[0].body, "A( ) Sim ");
    }

    #[test]
    fn strict_ignores_numbers_in_option_text() {
        let doc = "8 Renda familiar? A( ) Até 1,5 salário B( ) De 1,5 a 3 salários C( ) Mais \
                   9 Moradia? A( ) Própria";
        let greedy = segment(doc, Segmentation::Greedy);
        assert_ne!(numbers(&greedy), [8, 9]);

        let strict = segment(doc, STRICT);
        assert_eq!(numbers(&strict), [8, 9]);
        assert!(strict[0].body.contains("C( ) Mais"));
    }

    #[test]
    fn strict_requires_nearby_marker() {
        let doc = format!("4 {} A( ) x", "palavra ".repeat(40));
        assert!(segment(&doc, STRICT).is_empty());
        assert_eq!(numbers(&segment(&doc, Segmentation::Greedy)), [4]);
    }

    #[test]
    fn strict_accepts_numbering_punctuation() {
        let spans = segment("1. Nome? A( ) Ana 2) Idade? A( ) 20", STRICT);
        assert_eq!(numbers(&spans), [1, 2]);
    }

    #[test]
    fn standalone_check() {
        assert!(is_standalone("12 x", 0, 2));
        assert!(!is_standalone("a12 x", 1, 3));
        assert!(!is_standalone("12,5", 0, 2));
    }
}

//! Compiled regex patterns for question extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Normalization Patterns
// =============================================================================

/// Trailing run of digits and whitespace, i.e. a page-number footer.
///
/// The run is taken as a whole ("... texto 12 \n 13") so that stripping it
/// once leaves nothing further to strip.
pub static TRAILING_PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d\s]+$").expect("TRAILING_PAGE_NUMBER regex"));

/// Any run of whitespace, newlines included.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

// =============================================================================
// Segmentation Patterns
// =============================================================================

/// A candidate question number.
pub static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("LEADING_INTEGER regex"));

/// A scale marker such as `3( )` at the very start of the haystack.
///
/// Used to reject integers that label a Likert position rather than start
/// a question.
pub static SCALE_MARKER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\s*\(\s*\)").expect("SCALE_MARKER_PREFIX regex"));

// =============================================================================
// Option Patterns
// =============================================================================

/// An answer-option marker: a label followed by an empty parenthesis pair.
///
/// `NA` is tried before the single letter so `NA( )` is one marker. The word
/// boundary keeps words like `CPF( )` from yielding a spurious `F`.
pub static OPTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(NA|[A-Z]|[1-9])\s*\(\s*\)").expect("OPTION_MARKER regex")
});

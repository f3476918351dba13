//! Splitting running text into Georgian runs and everything else
//!
//! The walkers here know nothing about syllables. They find the spans that
//! should be segmented and hand each one to a caller-supplied closure,
//! copying every other byte through unchanged.

pub mod html;

use std::sync::OnceLock;

use regex::Regex;

pub use html::{walk_html, OPAQUE_TAGS};

/// Shortest Georgian run that is worth segmenting
pub const MIN_RUN_CHARS: usize = 4;

static GEORGIAN_RUN: OnceLock<Regex> = OnceLock::new();

fn georgian_run() -> &'static Regex {
    GEORGIAN_RUN.get_or_init(|| {
        Regex::new(r"[\x{10D0}-\x{10F0}]+").expect("Georgian run pattern is valid")
    })
}

/// A span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal run of Georgian letters
    Georgian(&'a str),
    /// Anything between Georgian runs
    Other(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying text
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Georgian(s) | Segment::Other(s) => s,
        }
    }
}

/// Split text into alternating Georgian and non-Georgian segments
///
/// Concatenating the segments reproduces the input.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut last = 0;

    for run in georgian_run().find_iter(text) {
        if run.start() > last {
            result.push(Segment::Other(&text[last..run.start()]));
        }
        result.push(Segment::Georgian(run.as_str()));
        last = run.end();
    }
    if last < text.len() {
        result.push(Segment::Other(&text[last..]));
    }

    result
}

/// Rewrite every Georgian run of at least `min_run` characters
pub fn walk_text<F>(text: &str, min_run: usize, mut segment: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len() + text.len() / 4);

    for part in segments(text) {
        match part {
            Segment::Georgian(run) if run.chars().count() >= min_run => {
                output.push_str(&segment(run));
            }
            other => output.push_str(other.as_str()),
        }
    }

    output
}

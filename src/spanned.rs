use std::ops::Range;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    #[error("span {start}..{end} does not fit in text of {len} characters")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

/// An annotation attached to a half-open range of character indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<T> {
    pub range: Range<usize>,
    pub value: T,
}

/// Text carrying out-of-band annotations, such as formatting.
///
/// Span ranges count Unicode scalar values, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedText<T> {
    text: String,
    len: usize,
    spans: Vec<Span<T>>,
}

impl<T> SpannedText<T> {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            spans: Vec::new(),
        }
    }

    pub fn with_span(mut self, range: Range<usize>, value: T) -> Result<Self, SpanError> {
        self.add_span(range, value)?;
        Ok(self)
    }

    pub fn add_span(&mut self, range: Range<usize>, value: T) -> Result<(), SpanError> {
        if range.start > range.end || range.end > self.len {
            return Err(SpanError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        self.spans.push(Span { range, value });
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span<T>] {
        &self.spans
    }

    pub fn char_len(&self) -> usize {
        self.len
    }

    pub fn is_spanned(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Ranges past the end are clamped; an inverted range yields `""`.
    pub fn slice(&self, span: &Span<T>) -> &str {
        let end = self.byte_offset(span.range.end);
        let start = self.byte_offset(span.range.start).min(end);
        &self.text[start..end]
    }

    pub fn into_parts(self) -> (String, Vec<Span<T>>) {
        (self.text, self.spans)
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Build from parts that are already known to be in range.
    pub(crate) fn from_trusted_parts(text: String, len: usize, spans: Vec<Span<T>>) -> Self {
        debug_assert!(spans.iter().all(|s| s.range.start <= s.range.end && s.range.end <= len));
        Self { text, len, spans }
    }
}

impl<T> From<String> for SpannedText<T> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<T> From<&str> for SpannedText<T> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

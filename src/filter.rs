//! Look-alike substitution for characters outside a 7-bit alphabet.
//!
//! A message containing a single character outside GSM 03.38 has to be sent
//! as UCS-2, which drops the per-message limit from 160 to 70 characters.
//! [`UnicodeFilter`] replaces such characters with visually similar ones so
//! the message stays in the cheaper encoding.

mod table;

use log::{log_enabled, trace, Level};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::FilterConfig;
use crate::encoding::{Alphabet, Gsm7};
use crate::spanned::{Span, SpannedText};

pub use table::substitute;

/// How annotations are carried over when substitution changes the length of
/// the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanPolicy {
    /// Move each annotation to where its characters ended up in the output.
    Remap,
    /// Keep the original indices, clamped to the output length.
    Legacy,
}

impl Default for SpanPolicy {
    fn default() -> Self {
        SpanPolicy::Remap
    }
}

fn is_combining_diacritical_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

#[derive(Clone, Debug)]
pub struct UnicodeFilter<A = Gsm7> {
    alphabet: A,
    strip_non_decodable_only: bool,
    span_policy: SpanPolicy,
}

impl UnicodeFilter<Gsm7> {
    pub fn new(strip_non_decodable_only: bool) -> Self {
        Self::with_alphabet(Gsm7, strip_non_decodable_only)
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.strip_non_decodable_only).span_policy(config.span_policy)
    }
}

impl<A: Alphabet> UnicodeFilter<A> {
    /// Filter against `alphabet` instead of GSM 03.38.
    pub fn with_alphabet(alphabet: A, strip_non_decodable_only: bool) -> Self {
        Self {
            alphabet,
            strip_non_decodable_only,
            span_policy: SpanPolicy::default(),
        }
    }

    pub fn span_policy(mut self, policy: SpanPolicy) -> Self {
        self.span_policy = policy;
        self
    }

    pub fn strip_non_decodable_only(&self) -> bool {
        self.strip_non_decodable_only
    }

    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    pub fn needs_substitution(&self, ch: char) -> bool {
        !self.strip_non_decodable_only || !self.alphabet.can_encode(ch)
    }

    /// Append the filtered form of `ch` to `output`, returning the number of
    /// characters written. This may be zero for a lone combining mark.
    pub fn filter_char(&self, ch: char, output: &mut String) -> usize {
        if !self.needs_substitution(ch) {
            output.push(ch);
            return 1;
        }

        let start = output.len();
        let mut written = 0;
        for base in std::iter::once(ch).nfkd() {
            if is_combining_diacritical_mark(base) {
                continue;
            }
            match substitute(base) {
                Some(replacement) => {
                    output.push_str(replacement);
                    written += replacement.chars().count();
                }
                None => {
                    output.push(base);
                    written += 1;
                }
            }
        }

        if log_enabled!(Level::Trace) {
            let emitted = &output[start..];
            if emitted.chars().ne(std::iter::once(ch)) {
                trace!("substituted {:?} with {:?}", ch, emitted);
            }
        }
        written
    }

    pub fn filter(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());
        for ch in source.chars() {
            self.filter_char(ch, &mut output);
        }
        output
    }

    pub fn filter_spanned<T: Clone>(&self, source: &SpannedText<T>) -> SpannedText<T> {
        let mut output = String::with_capacity(source.text().len());
        let mut offsets = Vec::with_capacity(source.char_len() + 1);
        let mut position = 0;
        for ch in source.text().chars() {
            offsets.push(position);
            position += self.filter_char(ch, &mut output);
        }
        offsets.push(position);

        let spans = source
            .spans()
            .iter()
            .map(|span| {
                let range = match self.span_policy {
                    SpanPolicy::Remap => offsets[span.range.start]..offsets[span.range.end],
                    SpanPolicy::Legacy => {
                        span.range.start.min(position)..span.range.end.min(position)
                    }
                };
                Span {
                    range,
                    value: span.value.clone(),
                }
            })
            .collect();

        SpannedText::from_trusted_parts(output, position, spans)
    }
}

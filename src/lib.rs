//! Keep SMS text inside the GSM 03.38 7-bit alphabet by replacing characters
//! it cannot carry with visually similar ones.
//!
//! ```
//! use gsmfilter::UnicodeFilter;
//!
//! let filter = UnicodeFilter::new(true);
//! assert_eq!(filter.filter("Œuvre à São Paulo"), "OEuvre à Sao Paulo");
//! ```

pub mod config;
pub mod encoding;
pub mod filter;
pub mod spanned;

pub use config::{load_config, FilterConfig};
pub use encoding::{Alphabet, Gsm7, Septet};
pub use filter::{SpanPolicy, UnicodeFilter};
pub use spanned::{Span, SpannedText};

mod gsm0338;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use snafu::{ensure, OptionExt, Snafu};

pub use gsm0338::ESC;

/// Septets in a single, unsegmented message.
pub const SINGLE_MESSAGE_SEPTETS: usize = 160;
/// Septets left per part once the concatenation header is accounted for.
pub const CONCATENATED_PART_SEPTETS: usize = 153;

#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
pub enum EncodeError {
    #[snafu(display("character {:?} at index {} has no GSM 7-bit encoding", ch, index))]
    Unencodable { ch: char, index: usize },
    #[snafu(display("invalid septet {:#04x} at index {}", septet, index))]
    InvalidSeptet { septet: u8, index: usize },
    #[snafu(display("escape at index {} is not followed by an extension code", index))]
    DanglingEscape { index: usize },
}

/// A single GSM code unit. Extension codes are sent behind [`ESC`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Septet {
    Default(u8),
    Extended(u8),
}

impl Septet {
    pub fn width(self) -> usize {
        match self {
            Septet::Default(_) => 1,
            Septet::Extended(_) => 2,
        }
    }

    pub fn encode_into(self, output: &mut Vec<u8>) {
        match self {
            Septet::Default(code) => output.push(code),
            Septet::Extended(code) => output.extend_from_slice(&[ESC, code]),
        }
    }
}

/// A constrained character repertoire that a message may be sent in.
///
/// `from_unicode` is the capability test used by the filter: a character the
/// alphabet cannot represent yields `None`.
pub trait Alphabet {
    fn from_unicode(&self, ch: char) -> Option<Septet>;
    fn to_unicode(&self, septet: Septet) -> Option<char>;

    fn can_encode(&self, ch: char) -> bool {
        self.from_unicode(ch).is_some()
    }

    fn count_septets(&self, text: &str) -> Result<usize, EncodeError> {
        let mut total = 0;
        for (index, ch) in text.chars().enumerate() {
            total += self.from_unicode(ch).context(Unencodable { ch, index })?.width();
        }
        Ok(total)
    }

    fn encode_unpacked(&self, text: &str) -> Result<Vec<u8>, EncodeError> {
        let mut output = Vec::with_capacity(text.len());
        for (index, ch) in text.chars().enumerate() {
            self.from_unicode(ch)
                .context(Unencodable { ch, index })?
                .encode_into(&mut output);
        }
        Ok(output)
    }

    fn decode_unpacked(&self, septets: &[u8]) -> Result<String, EncodeError> {
        let mut output = String::with_capacity(septets.len());
        let mut iter = septets.iter().copied().enumerate();
        while let Some((index, septet)) = iter.next() {
            ensure!(septet < 0x80, InvalidSeptet { septet, index });
            let ch = if septet == ESC {
                let (index, code) = iter.next().context(DanglingEscape { index })?;
                self.to_unicode(Septet::Extended(code))
                    .context(InvalidSeptet { septet: code, index })?
            } else {
                self.to_unicode(Septet::Default(septet))
                    .context(InvalidSeptet { septet, index })?
            };
            output.push(ch);
        }
        Ok(output)
    }
}

/// The GSM 03.38 default alphabet with the default single-shift table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gsm7;

static ENCODE_MAP: Lazy<HashMap<char, Septet>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(gsm0338::DECODE_TBL.len() + gsm0338::EXTENSION_TBL.len());
    for (code, &ch) in gsm0338::DECODE_TBL.iter().enumerate() {
        if code as u8 != ESC {
            map.insert(ch, Septet::Default(code as u8));
        }
    }
    for &(code, ch) in gsm0338::EXTENSION_TBL.iter() {
        map.entry(ch).or_insert(Septet::Extended(code));
    }
    map
});

impl Alphabet for Gsm7 {
    fn from_unicode(&self, ch: char) -> Option<Septet> {
        ENCODE_MAP.get(&ch).copied()
    }

    fn to_unicode(&self, septet: Septet) -> Option<char> {
        match septet {
            Septet::Default(ESC) => None,
            Septet::Default(code) => gsm0338::DECODE_TBL.get(code as usize).copied(),
            Septet::Extended(code) => gsm0338::EXTENSION_TBL
                .iter()
                .find(|&&(ext, _)| ext == code)
                .map(|&(_, ch)| ch),
        }
    }
}

/// Pack septets LSB-first into octets, as sent in an SMS user data field.
pub fn pack_septets(septets: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity((septets.len() * 7 + 7) / 8);
    let mut acc: u16 = 0;
    let mut bits = 0;
    for &septet in septets {
        acc |= u16::from(septet & 0x7F) << bits;
        bits += 7;
        while bits >= 8 {
            output.push((acc & 0xFF) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        output.push((acc & 0xFF) as u8);
    }
    output
}

/// Number of SMS parts needed to carry `septets`.
pub fn segments(septets: usize) -> usize {
    if septets <= SINGLE_MESSAGE_SEPTETS {
        1
    } else {
        (septets - 1) / CONCATENATED_PART_SEPTETS + 1
    }
}

/// Look-alike replacements for characters that survive NFKD decomposition
/// and mark stripping but are still outside the GSM alphabet.
///
/// Greek letters without a Latin twin map to the capital form, which GSM
/// carries in its default table.
pub fn substitute(ch: char) -> Option<&'static str> {
    Some(match ch {
        'Œ' => "OE",
        'œ' => "oe",
        'Ł' => "L",
        'ł' => "l",
        'Đ' => "Dj",
        'đ' => "dj",

        'Α' | 'α' => "A",
        'Β' | 'β' => "B",
        'Ε' | 'ε' => "E",
        'Ζ' | 'ζ' => "Z",
        'Η' | 'η' => "H",
        'Ι' | 'ι' => "I",
        'Κ' | 'κ' => "K",
        'Μ' | 'μ' => "M",
        'Ν' | 'ν' => "N",
        'Ο' | 'ο' => "O",
        'Ρ' | 'ρ' => "P",
        'Τ' | 'τ' => "T",
        'Υ' | 'υ' => "Y",
        'Χ' | 'χ' => "X",

        'γ' => "Γ",
        'δ' => "Δ",
        'θ' => "Θ",
        'λ' => "Λ",
        'ξ' => "Ξ",
        'π' => "Π",
        'σ' | 'ς' => "Σ",
        'φ' => "Φ",
        'ψ' => "Ψ",
        'ω' => "Ω",

        _ => return None,
    })
}

#[cfg(test)]
pub(crate) const KEYS: &[char] = &[
    'Œ', 'œ', 'Ł', 'ł', 'Đ', 'đ', 'Α', 'α', 'Β', 'β', 'Ε', 'ε', 'Ζ', 'ζ', 'Η', 'η', 'Ι', 'ι', 'Κ',
    'κ', 'Μ', 'μ', 'Ν', 'ν', 'Ο', 'ο', 'Ρ', 'ρ', 'Τ', 'τ', 'Υ', 'υ', 'Χ', 'χ', 'γ', 'δ', 'θ', 'λ',
    'ξ', 'π', 'σ', 'ς', 'φ', 'ψ', 'ω',
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Alphabet, Gsm7};

    #[test]
    fn every_key_is_replaced() {
        for &ch in KEYS {
            assert!(substitute(ch).is_some(), "{:?} missing", ch);
        }
        assert_eq!(substitute('a'), None);
        assert_eq!(substitute('Γ'), None);
    }

    #[test]
    fn replacements_are_not_keys() {
        for &ch in KEYS {
            let replacement = substitute(ch).unwrap();
            assert!(
                replacement.chars().all(|r| substitute(r).is_none()),
                "{:?} -> {:?} would be rewritten again",
                ch,
                replacement
            );
        }
    }

    #[test]
    fn replacements_are_gsm_encodable() {
        for &ch in KEYS {
            let replacement = substitute(ch).unwrap();
            assert!(Gsm7.count_septets(replacement).is_ok(), "{:?}", replacement);
        }
    }
}

use gsmfilter::encoding::{Alphabet, Gsm7, Septet};
use gsmfilter::{SpanPolicy, SpannedText, UnicodeFilter};
use proptest::prelude::*;

fn gsm_text() -> impl Strategy<Value = String> {
    let repertoire: Vec<char> = (0u8..0x80)
        .filter_map(|code| Gsm7.to_unicode(Septet::Default(code)))
        .chain("^{}\\[~]|€".chars())
        .collect();
    proptest::collection::vec(proptest::sample::select(repertoire), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn is_diacritical_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

proptest! {
    #[test]
    fn any_input_is_accepted(input in any::<String>(), strip in any::<bool>()) {
        let _ = UnicodeFilter::new(strip).filter(&input);
    }

    #[test]
    fn encodable_text_passes_through(input in gsm_text()) {
        prop_assert_eq!(UnicodeFilter::new(true).filter(&input), input);
    }

    #[test]
    fn encodable_characters_are_never_touched(input in any::<String>()) {
        let filter = UnicodeFilter::new(true);
        for ch in input.chars().filter(|&ch| Gsm7.can_encode(ch)) {
            let mut output = String::new();
            filter.filter_char(ch, &mut output);
            prop_assert_eq!(output, ch.to_string());
        }
    }

    #[test]
    fn substituted_output_has_no_diacritical_marks(input in any::<String>()) {
        let output = UnicodeFilter::new(false).filter(&input);
        prop_assert!(!output.chars().any(is_diacritical_mark), "mark left in {:?}", output);
    }

    #[test]
    fn filtering_twice_changes_nothing(input in any::<String>()) {
        let filter = UnicodeFilter::new(true);
        let once = filter.filter(&input);
        prop_assert_eq!(filter.filter(&once), once);
    }

    #[test]
    fn whole_text_annotation_covers_output(input in any::<String>(), strip in any::<bool>()) {
        let len = input.chars().count();
        let source = SpannedText::new(input).with_span(0..len, "whole").unwrap();
        let output = UnicodeFilter::new(strip).filter_spanned(&source);
        prop_assert_eq!(output.spans().len(), 1);
        prop_assert_eq!(output.spans()[0].range.clone(), 0..output.char_len());
        prop_assert_eq!(output.spans()[0].value, "whole");
    }

    #[test]
    fn legacy_annotations_stay_in_bounds(input in any::<String>()) {
        let len = input.chars().count();
        let source = SpannedText::new(input).with_span(0..len, ()).unwrap();
        let output = UnicodeFilter::new(false)
            .span_policy(SpanPolicy::Legacy)
            .filter_spanned(&source);
        prop_assert_eq!(output.spans()[0].range.start, 0);
        prop_assert!(output.spans()[0].range.end <= output.char_len());
    }
}

#[test]
fn unmappable_punctuation_still_needs_ucs2() {
    let filter = UnicodeFilter::new(true);
    let output = filter.filter("Μία φωνή: «Ça va?» — Łukasz & Chloë");
    let septets = Gsm7.count_septets(&output);
    // Guillemets and the em dash have no GSM look-alike.
    assert!(septets.is_err());
    assert_eq!(output, "MIA ΦΩNH: «Ça va?» — Lukasz & Chloe");
}

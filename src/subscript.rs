use crate::locale::digit_value;
use crate::types::{PartContent, PartKind, PartValue};

const SUBSCRIPT_ZERO: u32 = 0x2080;

/// Render a count with Unicode subscript digits (U+2080..U+2089), most
/// significant digit first: `12` becomes `"\u{2081}\u{2082}"`. A minus sign
/// stays a literal `-` (there is no subscript minus); any other non-digit
/// character passes through unconverted.
pub fn to_subscript_number(n: i64) -> String {
    subscript_digits(&n.to_string())
}

fn subscript_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(SUBSCRIPT_ZERO + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Split a run of fractional digits into display parts, compressing a run of
/// two or more leading zeros into one zero digit plus a subscript marker
/// carrying the run length. `"00009"` becomes `0`, `"\u{2084}"`, `9`; a
/// single leading zero is left alone. Lossless: the marker's count re-expands
/// to the zero run it replaced.
pub fn build_fraction_parts_with_subscript(fraction_digits: &str) -> Vec<PartContent> {
    let digits: Vec<u8> = fraction_digits.chars().filter_map(digit_value).collect();
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    if zeros <= 1 {
        return digits.into_iter().map(fraction_digit).collect();
    }
    let mut parts = Vec::with_capacity(digits.len() - zeros + 2);
    parts.push(fraction_digit(0));
    parts.push(PartContent::new(
        PartKind::Subscript,
        PartValue::Text(to_subscript_number(zeros as i64)),
    ));
    parts.extend(digits[zeros..].iter().copied().map(fraction_digit));
    parts
}

fn fraction_digit(d: u8) -> PartContent {
    PartContent::new(PartKind::Fraction, PartValue::Digit(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> PartContent {
        PartContent::new(PartKind::Fraction, PartValue::Digit(d))
    }

    fn subscript(s: &str) -> PartContent {
        PartContent::new(PartKind::Subscript, PartValue::Text(s.to_string()))
    }

    #[test]
    fn subscript_numbers() {
        assert_eq!(to_subscript_number(0), "\u{2080}");
        assert_eq!(to_subscript_number(4), "\u{2084}");
        assert_eq!(to_subscript_number(12), "\u{2081}\u{2082}");
        assert_eq!(to_subscript_number(-12), "-\u{2081}\u{2082}");
    }

    #[test]
    fn compresses_leading_zero_run() {
        assert_eq!(
            build_fraction_parts_with_subscript("00009"),
            vec![digit(0), subscript("\u{2084}"), digit(9)]
        );
        assert_eq!(
            build_fraction_parts_with_subscript("00001200"),
            vec![
                digit(0),
                subscript("\u{2084}"),
                digit(1),
                digit(2),
                digit(0),
                digit(0),
            ]
        );
    }

    #[test]
    fn all_zeros() {
        assert_eq!(
            build_fraction_parts_with_subscript("0000"),
            vec![digit(0), subscript("\u{2084}")]
        );
    }

    #[test]
    fn short_runs_left_alone() {
        assert_eq!(build_fraction_parts_with_subscript("1"), vec![digit(1)]);
        assert_eq!(build_fraction_parts_with_subscript("09"), vec![digit(0), digit(9)]);
        assert_eq!(build_fraction_parts_with_subscript("90"), vec![digit(9), digit(0)]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(build_fraction_parts_with_subscript(""), Vec::new());
    }

    #[test]
    fn long_run_multi_digit_count() {
        let twelve_zeros = "0".repeat(12) + "5";
        assert_eq!(
            build_fraction_parts_with_subscript(&twelve_zeros),
            vec![digit(0), subscript("\u{2081}\u{2082}"), digit(5)]
        );
    }

    #[test]
    fn non_latin_digits() {
        // arab digits: zero zero four -> compressed like latn.
        assert_eq!(
            build_fraction_parts_with_subscript("\u{0660}\u{0660}\u{0664}"),
            vec![digit(0), subscript("\u{2082}"), digit(4)]
        );
    }
}

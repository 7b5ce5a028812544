use rustc_hash::FxHashMap;

use crate::locale::digit_value;
use crate::subscript::build_fraction_parts_with_subscript;
use crate::types::{ClassifiedPart, PartContent, PartKind, PartValue, PartsResult, RawPart};

/// Bucket raw formatter parts into `pre` / `integer` / `fraction` / `post`
/// and assign stable keys.
///
/// Symbols keep their physical position: anything before the first numeric
/// part goes to `pre`, anything after to `post`. Digit runs are split into
/// one part per digit. Integer parts are keyed from the least-significant
/// digit so the trailing digits of a growing number keep their keys;
/// fraction parts are keyed from the most-significant digit so truncating
/// precision from the right leaves the rest untouched.
pub(crate) fn classify_parts(
    raw: &[RawPart],
    formatted: String,
    enable_subscript_notation: bool,
) -> PartsResult {
    let mut pre = Vec::new();
    let mut post = Vec::new();
    let mut integer_unkeyed: Vec<PartContent> = Vec::new();
    let mut fraction_unkeyed: Vec<PartContent> = Vec::new();
    let mut saw_numeric = false;
    // Shared across the whole traversal so pre and post never collide.
    let mut occurrences: FxHashMap<PartKind, usize> = FxHashMap::default();

    for part in raw {
        match part.kind {
            PartKind::Integer => {
                for c in part.text.chars() {
                    if let Some(d) = digit_value(c) {
                        integer_unkeyed.push(PartContent::new(PartKind::Integer, PartValue::Digit(d)));
                    }
                }
                saw_numeric = true;
            }
            PartKind::Group => {
                integer_unkeyed
                    .push(PartContent::new(PartKind::Group, PartValue::Text(part.text.clone())));
                saw_numeric = true;
            }
            PartKind::Decimal => {
                fraction_unkeyed
                    .push(PartContent::new(PartKind::Decimal, PartValue::Text(part.text.clone())));
                saw_numeric = true;
            }
            PartKind::Fraction => {
                if enable_subscript_notation {
                    fraction_unkeyed.extend(build_fraction_parts_with_subscript(&part.text));
                } else {
                    for c in part.text.chars() {
                        if let Some(d) = digit_value(c) {
                            fraction_unkeyed
                                .push(PartContent::new(PartKind::Fraction, PartValue::Digit(d)));
                        }
                    }
                }
                saw_numeric = true;
            }
            _ => {
                let keyed = with_occurrence_key(
                    PartContent::new(part.kind, PartValue::Text(part.text.clone())),
                    &mut occurrences,
                );
                if saw_numeric {
                    post.push(keyed);
                } else {
                    pre.push(keyed);
                }
            }
        }
    }

    PartsResult {
        pre,
        integer: key_reversed(integer_unkeyed),
        fraction: key_forward(fraction_unkeyed),
        post,
        formatted,
    }
}

/// Occurrence-indexed keys in display order: the leftmost part of each kind
/// gets index 0.
pub(crate) fn key_forward(parts: Vec<PartContent>) -> Vec<ClassifiedPart> {
    let mut occurrences = FxHashMap::default();
    parts
        .into_iter()
        .map(|p| with_occurrence_key(p, &mut occurrences))
        .collect()
}

/// Occurrence-indexed keys counted from the rightmost end, restored to
/// display order. The rightmost part of each kind gets index 0, so digits
/// prepended on the left never re-key the ones already on screen.
pub(crate) fn key_reversed(parts: Vec<PartContent>) -> Vec<ClassifiedPart> {
    let mut occurrences = FxHashMap::default();
    let mut keyed: Vec<ClassifiedPart> = parts
        .into_iter()
        .rev()
        .map(|p| with_occurrence_key(p, &mut occurrences))
        .collect();
    keyed.reverse();
    keyed
}

fn with_occurrence_key(
    part: PartContent,
    occurrences: &mut FxHashMap<PartKind, usize>,
) -> ClassifiedPart {
    let n = occurrences.entry(part.kind).or_insert(0);
    let key = format!("{}:{n}", part.kind.as_str());
    *n += 1;
    ClassifiedPart { kind: part.kind, value: part.value, key }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: PartKind, text: &str) -> RawPart {
        RawPart::new(kind, text)
    }

    fn keys(parts: &[ClassifiedPart]) -> Vec<&str> {
        parts.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn buckets_by_position() {
        // "-$98,345.67"
        let parts = vec![
            raw(PartKind::MinusSign, "-"),
            raw(PartKind::Currency, "$"),
            raw(PartKind::Integer, "98"),
            raw(PartKind::Group, ","),
            raw(PartKind::Integer, "345"),
            raw(PartKind::Decimal, "."),
            raw(PartKind::Fraction, "67"),
        ];
        let result = classify_parts(&parts, "-$98,345.67".to_string(), false);

        assert_eq!(keys(&result.pre), vec!["minusSign:0", "currency:0"]);
        assert_eq!(
            result.integer.iter().map(|p| p.value.to_string()).collect::<Vec<_>>(),
            vec!["9", "8", ",", "3", "4", "5"]
        );
        assert_eq!(
            keys(&result.integer),
            vec!["integer:4", "integer:3", "group:0", "integer:2", "integer:1", "integer:0"]
        );
        assert_eq!(keys(&result.fraction), vec!["decimal:0", "fraction:0", "fraction:1"]);
        assert!(result.post.is_empty());
    }

    #[test]
    fn trailing_symbols_go_to_post() {
        // "0,00009 $" (suffix-currency locale)
        let parts = vec![
            raw(PartKind::Integer, "0"),
            raw(PartKind::Decimal, ","),
            raw(PartKind::Fraction, "00009"),
            raw(PartKind::Literal, "\u{00A0}"),
            raw(PartKind::Currency, "$"),
        ];
        let result = classify_parts(&parts, "0,00009\u{00A0}$".to_string(), false);
        assert!(result.pre.is_empty());
        assert_eq!(keys(&result.post), vec!["literal:0", "currency:0"]);
        assert_eq!(result.post[1].value.to_string(), "$");
    }

    #[test]
    fn partition_is_complete() {
        let parts = vec![
            raw(PartKind::MinusSign, "-"),
            raw(PartKind::Currency, "$"),
            raw(PartKind::Integer, "1"),
            raw(PartKind::Group, ","),
            raw(PartKind::Integer, "000"),
            raw(PartKind::Decimal, "."),
            raw(PartKind::Fraction, "50"),
            raw(PartKind::Literal, " "),
            raw(PartKind::Unit, "km"),
        ];
        let result = classify_parts(&parts, "-$1,000.50 km".to_string(), false);

        let non_numeric = parts.iter().filter(|p| !p.kind.is_numeric()).count();
        assert_eq!(result.pre.len() + result.post.len(), non_numeric);
        assert!(result.pre.iter().chain(&result.post).all(|p| !p.kind.is_numeric()));
        assert!(result.integer.iter().chain(&result.fraction).all(|p| p.kind.is_numeric()));
        // 4 integer digits + 1 group, decimal + 2 fraction digits.
        assert_eq!(result.integer.len(), 5);
        assert_eq!(result.fraction.len(), 3);
    }

    #[test]
    fn integer_keys_stable_under_growth() {
        let small = classify_parts(&[raw(PartKind::Integer, "999")], "999".to_string(), false);
        let large = classify_parts(
            &[
                raw(PartKind::Integer, "1"),
                raw(PartKind::Group, ","),
                raw(PartKind::Integer, "000"),
            ],
            "1,000".to_string(),
            false,
        );

        assert_eq!(keys(&small.integer), vec!["integer:2", "integer:1", "integer:0"]);
        assert_eq!(
            keys(&large.integer),
            vec!["integer:3", "group:0", "integer:2", "integer:1", "integer:0"]
        );
        // The three trailing digits keep exactly the keys the old digits had.
        let tail: Vec<&str> = keys(&large.integer)[2..].to_vec();
        assert_eq!(tail, keys(&small.integer));
    }

    #[test]
    fn fraction_keys_stable_under_truncation() {
        let wide = classify_parts(
            &[raw(PartKind::Decimal, "."), raw(PartKind::Fraction, "1234")],
            "0.1234".to_string(),
            false,
        );
        let narrow = classify_parts(
            &[raw(PartKind::Decimal, "."), raw(PartKind::Fraction, "12")],
            "0.12".to_string(),
            false,
        );
        assert_eq!(
            keys(&wide.fraction),
            vec!["decimal:0", "fraction:0", "fraction:1", "fraction:2", "fraction:3"]
        );
        assert_eq!(keys(&narrow.fraction), keys(&wide.fraction)[..3].to_vec());
    }

    #[test]
    fn subscript_notation_in_fraction_bucket() {
        let parts = vec![
            raw(PartKind::Integer, "0"),
            raw(PartKind::Decimal, "."),
            raw(PartKind::Fraction, "00009"),
        ];
        let result = classify_parts(&parts, "0.00009".to_string(), true);
        let kinds: Vec<PartKind> = result.fraction.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PartKind::Decimal, PartKind::Fraction, PartKind::Subscript, PartKind::Fraction]
        );
        assert_eq!(result.fraction[2].value.to_string(), "\u{2084}");
        assert_eq!(
            keys(&result.fraction),
            vec!["decimal:0", "fraction:0", "subscript:0", "fraction:1"]
        );
    }

    #[test]
    fn keying_strategies_agree_on_single_part() {
        let part = PartContent::new(PartKind::Integer, PartValue::Digit(5));
        assert_eq!(key_forward(vec![part.clone()]), key_reversed(vec![part]));
    }

    #[test]
    fn keying_strategies_differ_by_direction() {
        let parts = vec![
            PartContent::new(PartKind::Integer, PartValue::Digit(1)),
            PartContent::new(PartKind::Group, PartValue::Text(",".to_string())),
            PartContent::new(PartKind::Integer, PartValue::Digit(2)),
        ];
        let forward = key_forward(parts.clone());
        let reversed = key_reversed(parts);
        assert_eq!(keys(&forward), vec!["integer:0", "group:0", "integer:1"]);
        assert_eq!(keys(&reversed), vec!["integer:1", "group:0", "integer:0"]);
    }

    #[test]
    fn empty_input() {
        let result = classify_parts(&[], String::new(), false);
        assert!(result.pre.is_empty());
        assert!(result.integer.is_empty());
        assert!(result.fraction.is_empty());
        assert!(result.post.is_empty());
    }
}

use icu::locale::Locale as IcuLocale;

use super::notation::compact_suffix_and_divisor;
use crate::locale;
use crate::options::{CurrencyDisplay, CurrencySign, FormatOptions, Notation, NumberStyle};
use crate::symbols;
use crate::types::{PartKind, RawPart};

/// Decompose a rendered string back into ordered, kind-tagged segments.
///
/// Affixes this crate applied itself (currency symbol, unit suffix, compact
/// suffix, percent sign) are peeled off by re-deriving them from the same
/// options; the remaining span is read as sign / digits / separators.
/// Concatenating the part texts reproduces the input exactly.
pub(crate) fn decompose(
    formatted: &str,
    value: f64,
    options: &FormatOptions,
    locale: &IcuLocale,
    language: &str,
) -> Vec<RawPart> {
    let work_value = match options.style {
        NumberStyle::Percent => value * 100.0,
        _ => value,
    };

    let mut work = formatted.to_string();
    let mut style_suffix: Vec<RawPart> = Vec::new();
    let mut compact_suffix: Vec<RawPart> = Vec::new();

    // Strip outermost first: the style affix wraps the compact suffix.
    strip_style_suffix(&mut work, &mut style_suffix, work_value, options, language);
    if options.notation == Notation::Compact {
        strip_compact_suffix(&mut work, &mut compact_suffix, work_value, options, locale);
    }

    let mut parts: Vec<RawPart> = Vec::new();
    let rest = consume_prefix(&work, &mut parts, options, language);
    walk_number(rest, &mut parts, options, language);

    parts.extend(compact_suffix);
    parts.extend(style_suffix);
    parts
}

fn strip_style_suffix(
    work: &mut String,
    out: &mut Vec<RawPart>,
    value: f64,
    options: &FormatOptions,
    language: &str,
) {
    match options.style {
        NumberStyle::Unit => {
            let unit = options.unit.as_deref().unwrap_or_default();
            let suffix = symbols::unit_suffix(unit, options.unit_display, value);
            let trimmed = suffix.trim_start();
            let pad = &suffix[..suffix.len() - trimmed.len()];
            if !trimmed.is_empty() && work.ends_with(trimmed) {
                work.truncate(work.len() - trimmed.len());
                if !pad.is_empty() && work.ends_with(pad) {
                    work.truncate(work.len() - pad.len());
                    out.push(RawPart::new(PartKind::Literal, pad));
                }
                out.push(RawPart::new(PartKind::Unit, trimmed));
            }
        }
        NumberStyle::Currency => {
            let code = options.currency.as_deref().unwrap_or("USD");
            if options.currency_display == CurrencyDisplay::Name {
                let name = symbols::currency_name(code);
                if work.ends_with(&name) {
                    work.truncate(work.len() - name.len());
                    if work.ends_with(' ') {
                        work.truncate(work.len() - 1);
                        out.push(RawPart::new(PartKind::Literal, " "));
                    }
                    out.push(RawPart::new(PartKind::Currency, name));
                }
            } else if locale::currency_position_after(language) {
                let symbol = symbols::currency_symbol(code, options.currency_display, language);
                if work.ends_with(&symbol) {
                    work.truncate(work.len() - symbol.len());
                    if work.ends_with('\u{00A0}') {
                        work.truncate(work.len() - '\u{00A0}'.len_utf8());
                        out.push(RawPart::new(PartKind::Literal, "\u{00A0}"));
                    } else if work.ends_with(' ') {
                        work.truncate(work.len() - 1);
                        out.push(RawPart::new(PartKind::Literal, " "));
                    }
                    out.push(RawPart::new(PartKind::Currency, symbol));
                }
            }
        }
        NumberStyle::Percent => {
            if work.ends_with('%') {
                work.truncate(work.len() - 1);
                if work.ends_with('\u{00A0}') {
                    work.truncate(work.len() - '\u{00A0}'.len_utf8());
                    out.push(RawPart::new(PartKind::Literal, "\u{00A0}"));
                }
                out.push(RawPart::new(PartKind::PercentSign, "%"));
            }
        }
        NumberStyle::Decimal => {}
    }
}

fn strip_compact_suffix(
    work: &mut String,
    out: &mut Vec<RawPart>,
    value: f64,
    options: &FormatOptions,
    locale: &IcuLocale,
) {
    let (divisor, suffix) =
        compact_suffix_and_divisor(value.abs(), locale, options.compact_display);
    if divisor <= 1.0 || suffix.is_empty() {
        return;
    }
    let trimmed = suffix.trim_start();
    let pad = &suffix[..suffix.len() - trimmed.len()];
    if work.ends_with(trimmed) {
        work.truncate(work.len() - trimmed.len());
        if !pad.is_empty() && work.ends_with(pad) {
            work.truncate(work.len() - pad.len());
            out.push(RawPart::new(PartKind::Literal, pad));
        }
        out.push(RawPart::new(PartKind::Compact, trimmed));
    }
}

// Sign and currency symbol ahead of the digits for prefix-currency locales,
// including the accounting "(" wrapper.
fn consume_prefix<'s>(
    work: &'s str,
    parts: &mut Vec<RawPart>,
    options: &FormatOptions,
    language: &str,
) -> &'s str {
    if options.style != NumberStyle::Currency
        || options.currency_display == CurrencyDisplay::Name
        || locale::currency_position_after(language)
    {
        return work;
    }
    let code = options.currency.as_deref().unwrap_or("USD");
    let symbol = symbols::currency_symbol(code, options.currency_display, language);
    let mut rest = work;

    if options.currency_sign == CurrencySign::Accounting && rest.starts_with('(') {
        parts.push(RawPart::new(PartKind::Literal, "("));
        rest = &rest[1..];
    } else if let Some(r) = rest.strip_prefix('-') {
        parts.push(RawPart::new(PartKind::MinusSign, "-"));
        rest = r;
    } else if let Some(r) = rest.strip_prefix('\u{2212}') {
        parts.push(RawPart::new(PartKind::MinusSign, "\u{2212}"));
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        parts.push(RawPart::new(PartKind::PlusSign, "+"));
        rest = r;
    }
    if let Some(r) = rest.strip_prefix(symbol.as_str()) {
        parts.push(RawPart::new(PartKind::Currency, symbol));
        rest = r;
    }
    rest
}

fn walk_number(rest: &str, parts: &mut Vec<RawPart>, options: &FormatOptions, language: &str) {
    let decimal_sep = locale::decimal_separator(language);
    let scientific = matches!(options.notation, Notation::Scientific | Notation::Engineering);

    let mut chars = rest.chars().peekable();
    let mut current = String::new();
    let mut past_decimal = false;

    while let Some(&c) = chars.peek() {
        if locale::digit_value(c).is_some() {
            current.push(c);
            chars.next();
        } else if c == decimal_sep || c == '\u{066B}' {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            parts.push(RawPart::new(PartKind::Decimal, c.to_string()));
            past_decimal = true;
        } else if matches!(c, ',' | '.' | '\u{066C}' | '\u{2019}' | '\'') {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            parts.push(RawPart::new(PartKind::Group, c.to_string()));
        } else if matches!(c, ' ' | '\u{00A0}' | '\u{202F}') {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            // Between digit runs this is a group separator; otherwise it
            // starts the literal tail.
            if chars.peek().is_some_and(|&n| locale::digit_value(n).is_some()) {
                parts.push(RawPart::new(PartKind::Group, c.to_string()));
            } else {
                let mut tail = c.to_string();
                tail.extend(chars.by_ref());
                parts.push(RawPart::new(PartKind::Literal, tail));
            }
        } else if matches!(c, '-' | '+' | '\u{2212}') {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            let kind = if c == '+' { PartKind::PlusSign } else { PartKind::MinusSign };
            parts.push(RawPart::new(kind, c.to_string()));
        } else if matches!(c, '\u{061C}' | '\u{200E}' | '\u{200F}') {
            // Bidi mark: belongs to an adjacent sign when there is one.
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            let mut text = c.to_string();
            if let Some(&sign) = chars.peek()
                && matches!(sign, '-' | '+' | '\u{2212}')
            {
                chars.next();
                text.push(sign);
                if let Some(&trail) = chars.peek()
                    && matches!(trail, '\u{061C}' | '\u{200E}' | '\u{200F}')
                {
                    chars.next();
                    text.push(trail);
                }
                let kind = if sign == '+' { PartKind::PlusSign } else { PartKind::MinusSign };
                parts.push(RawPart::new(kind, text));
            } else {
                parts.push(RawPart::new(PartKind::Literal, text));
            }
        } else if c == ')' {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            parts.push(RawPart::new(PartKind::Literal, ")"));
        } else if c == 'E' && scientific {
            flush_digits(&mut current, past_decimal, parts);
            chars.next();
            parts.push(RawPart::new(PartKind::ExponentSeparator, "E"));
            if chars.peek() == Some(&'-') {
                chars.next();
                parts.push(RawPart::new(PartKind::ExponentMinusSign, "-"));
            }
            let mut exponent = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    exponent.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            if !exponent.is_empty() {
                parts.push(RawPart::new(PartKind::ExponentInteger, exponent));
            }
        } else {
            // Anything unrecognized ends the number; keep it verbatim.
            flush_digits(&mut current, past_decimal, parts);
            let tail: String = chars.by_ref().collect();
            parts.push(RawPart::new(PartKind::Literal, tail));
        }
    }
    flush_digits(&mut current, past_decimal, parts);
}

fn flush_digits(current: &mut String, past_decimal: bool, parts: &mut Vec<RawPart>) {
    if current.is_empty() {
        return;
    }
    let kind = if past_decimal { PartKind::Fraction } else { PartKind::Integer };
    parts.push(RawPart::new(kind, current.clone()));
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CompactDisplay, UnitDisplay};

    fn parts(
        formatted: &str,
        value: f64,
        options: &FormatOptions,
        locale_tag: &str,
    ) -> Vec<(PartKind, String)> {
        let locale: IcuLocale = locale_tag.parse().unwrap();
        let language = locale.id.language.as_str().to_ascii_lowercase();
        decompose(formatted, value, options, &locale, &language)
            .into_iter()
            .map(|p| (p.kind, p.text))
            .collect()
    }

    fn pair(kind: PartKind, text: &str) -> (PartKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn plain_decimal() {
        let opts = FormatOptions::default();
        assert_eq!(
            parts("98,345.67", 98345.67, &opts, "en-US"),
            vec![
                pair(PartKind::Integer, "98"),
                pair(PartKind::Group, ","),
                pair(PartKind::Integer, "345"),
                pair(PartKind::Decimal, "."),
                pair(PartKind::Fraction, "67"),
            ]
        );
    }

    #[test]
    fn german_decimal() {
        let opts = FormatOptions::default();
        assert_eq!(
            parts("1.234,5", 1234.5, &opts, "de-DE"),
            vec![
                pair(PartKind::Integer, "1"),
                pair(PartKind::Group, "."),
                pair(PartKind::Integer, "234"),
                pair(PartKind::Decimal, ","),
                pair(PartKind::Fraction, "5"),
            ]
        );
    }

    #[test]
    fn negative_sign() {
        let opts = FormatOptions::default();
        assert_eq!(
            parts("-1,234.5", -1234.5, &opts, "en-US")[0],
            pair(PartKind::MinusSign, "-")
        );
    }

    #[test]
    fn currency_prefix() {
        let opts = FormatOptions::currency("USD");
        assert_eq!(
            parts("-$98,345.67", -98345.67, &opts, "en-US")[..2],
            [pair(PartKind::MinusSign, "-"), pair(PartKind::Currency, "$")]
        );
    }

    #[test]
    fn currency_suffix() {
        let opts = FormatOptions::currency("USD");
        assert_eq!(
            parts("0,00009\u{00A0}$", 0.00009, &opts, "de-DE"),
            vec![
                pair(PartKind::Integer, "0"),
                pair(PartKind::Decimal, ","),
                pair(PartKind::Fraction, "00009"),
                pair(PartKind::Literal, "\u{00A0}"),
                pair(PartKind::Currency, "$"),
            ]
        );
    }

    #[test]
    fn currency_name_suffix() {
        let opts = FormatOptions {
            currency_display: CurrencyDisplay::Name,
            ..FormatOptions::currency("USD")
        };
        assert_eq!(
            parts("5.00 US dollars", 5.0, &opts, "en-US"),
            vec![
                pair(PartKind::Integer, "5"),
                pair(PartKind::Decimal, "."),
                pair(PartKind::Fraction, "00"),
                pair(PartKind::Literal, " "),
                pair(PartKind::Currency, "US dollars"),
            ]
        );
    }

    #[test]
    fn accounting_parentheses() {
        let opts = FormatOptions {
            currency_sign: CurrencySign::Accounting,
            ..FormatOptions::currency("USD")
        };
        assert_eq!(
            parts("($5.00)", -5.0, &opts, "en-US"),
            vec![
                pair(PartKind::Literal, "("),
                pair(PartKind::Currency, "$"),
                pair(PartKind::Integer, "5"),
                pair(PartKind::Decimal, "."),
                pair(PartKind::Fraction, "00"),
                pair(PartKind::Literal, ")"),
            ]
        );
    }

    #[test]
    fn percent_with_space() {
        let opts = FormatOptions::percent();
        assert_eq!(
            parts("5\u{00A0}%", 0.05, &opts, "de-DE"),
            vec![
                pair(PartKind::Integer, "5"),
                pair(PartKind::Literal, "\u{00A0}"),
                pair(PartKind::PercentSign, "%"),
            ]
        );
        assert_eq!(
            parts("5%", 0.05, &opts, "en-US"),
            vec![pair(PartKind::Integer, "5"), pair(PartKind::PercentSign, "%")]
        );
    }

    #[test]
    fn unit_suffix_parts() {
        let opts = FormatOptions::unit("kilometer");
        assert_eq!(
            parts("5 km", 5.0, &opts, "en-US"),
            vec![
                pair(PartKind::Integer, "5"),
                pair(PartKind::Literal, " "),
                pair(PartKind::Unit, "km"),
            ]
        );

        let opts = FormatOptions {
            unit_display: UnitDisplay::Narrow,
            ..FormatOptions::unit("celsius")
        };
        assert_eq!(
            parts("21\u{00B0}C", 21.0, &opts, "en-US"),
            vec![pair(PartKind::Integer, "21"), pair(PartKind::Unit, "\u{00B0}C")]
        );
    }

    #[test]
    fn compact_suffix_parts() {
        let opts = FormatOptions { notation: Notation::Compact, ..Default::default() };
        assert_eq!(
            parts("12M", 12345678.0, &opts, "en-US"),
            vec![pair(PartKind::Integer, "12"), pair(PartKind::Compact, "M")]
        );

        let opts = FormatOptions {
            notation: Notation::Compact,
            compact_display: CompactDisplay::Long,
            ..Default::default()
        };
        assert_eq!(
            parts("12 million", 12345678.0, &opts, "en-US"),
            vec![
                pair(PartKind::Integer, "12"),
                pair(PartKind::Literal, " "),
                pair(PartKind::Compact, "million"),
            ]
        );
    }

    #[test]
    fn scientific_exponent_parts() {
        let opts = FormatOptions { notation: Notation::Scientific, ..Default::default() };
        assert_eq!(
            parts("1.2E-4", 0.00012, &opts, "en-US"),
            vec![
                pair(PartKind::Integer, "1"),
                pair(PartKind::Decimal, "."),
                pair(PartKind::Fraction, "2"),
                pair(PartKind::ExponentSeparator, "E"),
                pair(PartKind::ExponentMinusSign, "-"),
                pair(PartKind::ExponentInteger, "4"),
            ]
        );
    }

    #[test]
    fn narrow_space_grouping() {
        // Some locales group with narrow no-break spaces.
        let opts = FormatOptions::default();
        assert_eq!(
            parts("1\u{202F}234,5", 1234.5, &opts, "fr-FR"),
            vec![
                pair(PartKind::Integer, "1"),
                pair(PartKind::Group, "\u{202F}"),
                pair(PartKind::Integer, "234"),
                pair(PartKind::Decimal, ","),
                pair(PartKind::Fraction, "5"),
            ]
        );
    }
}

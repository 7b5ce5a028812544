use fixed_decimal::{SignedRoundingMode, UnsignedRoundingMode};
use icu::locale::Locale as IcuLocale;

use super::{
    cached_formatter, decimal_from_f64, round_to_significant_digits, sign_display_to_fd,
    wrap_style,
};
use crate::error::FormatError;
use crate::locale;
use crate::options::{
    CompactDisplay, FormatOptions, Grouping, Notation, RoundingMode, SignDisplayOption,
};

pub(crate) fn render_scientific(value: f64, options: &FormatOptions, language: &str) -> String {
    let (min_frac, max_frac) = options.resolved_fraction_digits();
    let engineering = options.notation == Notation::Engineering;

    if value == 0.0 {
        let mantissa = if let Some(min_sd) = options.minimum_significant_digits {
            if min_sd <= 1 {
                "0".to_string()
            } else {
                format!("0.{}", "0".repeat(min_sd as usize - 1))
            }
        } else if min_frac > 0 {
            format!("0.{}", "0".repeat(min_frac as usize))
        } else {
            "0".to_string()
        };
        let sign = if value.is_sign_negative()
            && options.sign_display == SignDisplayOption::Auto
        {
            "-"
        } else {
            ""
        };
        let mantissa = localize_decimal_point(&mantissa, language);
        return wrap_style(&format!("{sign}{mantissa}E0"), value, options, language);
    }

    let abs = value.abs();
    let exp = abs.log10().floor() as i32;
    let exp = if engineering { (exp as f64 / 3.0).floor() as i32 * 3 } else { exp };
    let mantissa_val = abs / 10f64.powi(exp);

    let mantissa = if options.uses_significant_digits() {
        let min_sd = options.minimum_significant_digits.unwrap_or(1);
        let max_sd = options.maximum_significant_digits.unwrap_or(min_sd);
        // Engineering mantissas can carry up to three integer digits; never
        // round those away.
        let int_digits = if engineering { mantissa_val.abs().log10().floor() as u32 + 1 } else { 1 };
        mantissa_sig_digits(mantissa_val, min_sd.max(int_digits), max_sd.max(int_digits))
    } else {
        mantissa_frac_digits(mantissa_val, min_frac, max_frac)
    };

    let sign = if value < 0.0 {
        match options.sign_display {
            SignDisplayOption::Never => "",
            _ => "-",
        }
    } else {
        match options.sign_display {
            SignDisplayOption::Always | SignDisplayOption::ExceptZero => "+",
            _ => "",
        }
    };

    let mantissa = localize_decimal_point(&mantissa, language);
    wrap_style(&format!("{sign}{mantissa}E{exp}"), value, options, language)
}

fn mantissa_sig_digits(value: f64, min_sd: u32, max_sd: u32) -> String {
    let s = format!("{:.prec$}", value, prec = (max_sd as usize).saturating_sub(1));
    let Some((int_part, frac_part)) = s.split_once('.') else {
        return s;
    };
    let int_sig = if int_part == "0" { 0 } else { int_part.len() };
    let min_frac = (min_sd as usize).saturating_sub(int_sig);
    let kept = frac_part.trim_end_matches('0').len().max(min_frac);
    if kept == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &frac_part[..kept])
    }
}

fn mantissa_frac_digits(value: f64, min_frac: u32, max_frac: u32) -> String {
    let s = format!("{:.prec$}", value, prec = max_frac as usize);
    if min_frac == max_frac {
        return s;
    }
    let Some((int_part, frac_part)) = s.split_once('.') else {
        if min_frac > 0 {
            return format!("{s}.{}", "0".repeat(min_frac as usize));
        }
        return s;
    };
    let kept = frac_part.trim_end_matches('0').len().max(min_frac as usize);
    if kept == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &frac_part[..kept])
    }
}

fn localize_decimal_point(s: &str, language: &str) -> String {
    let separator = locale::decimal_separator(language);
    if separator == '.' {
        s.to_string()
    } else {
        s.replace('.', &separator.to_string())
    }
}

/// Divisor and display suffix for compact notation; `(1.0, "")` means the
/// value stays uncompressed. The suffix may carry a leading separator that
/// becomes a literal part.
pub(crate) fn compact_suffix_and_divisor(
    abs_val: f64,
    locale: &IcuLocale,
    display: CompactDisplay,
) -> (f64, String) {
    let long = display == CompactDisplay::Long;
    let language = locale.id.language.as_str();
    let region_in = locale.id.region.is_some_and(|r| r.as_str() == "IN");

    // Indian English counts in lakh/crore.
    if language == "en" && region_in {
        return if abs_val >= 1e9 {
            (1e9, if long { " billion" } else { "B" }.to_string())
        } else if abs_val >= 1e7 {
            (1e7, if long { " crore" } else { "Cr" }.to_string())
        } else if abs_val >= 1e5 {
            (1e5, if long { " lakh" } else { "L" }.to_string())
        } else if abs_val >= 1e3 {
            (1e3, if long { " thousand" } else { "K" }.to_string())
        } else {
            (1.0, String::new())
        };
    }

    match language {
        // Myriad grouping.
        "ja" | "zh" => {
            if abs_val >= 1e8 {
                (1e8, "\u{5104}".to_string())
            } else if abs_val >= 1e4 {
                let suffix = if language == "ja" { "\u{4E07}" } else { "\u{842C}" };
                (1e4, suffix.to_string())
            } else {
                (1.0, String::new())
            }
        }
        "ko" => {
            if abs_val >= 1e8 {
                (1e8, "\u{C5B5}".to_string())
            } else if abs_val >= 1e4 {
                (1e4, "\u{B9CC}".to_string())
            } else if abs_val >= 1e3 {
                (1e3, "\u{CC9C}".to_string())
            } else {
                (1.0, String::new())
            }
        }
        "de" => {
            if abs_val >= 1e12 {
                (1e12, if long { " Billionen" } else { "\u{00A0}Bio." }.to_string())
            } else if abs_val >= 1e9 {
                (1e9, if long { " Milliarden" } else { "\u{00A0}Mrd." }.to_string())
            } else if abs_val >= 1e6 {
                (1e6, if long { " Millionen" } else { "\u{00A0}Mio." }.to_string())
            } else if abs_val >= 1e3 && long {
                (1e3, " Tausend".to_string())
            } else {
                (1.0, String::new())
            }
        }
        _ => {
            if abs_val >= 1e15 {
                (1e15, if long { " quadrillion" } else { "Q" }.to_string())
            } else if abs_val >= 1e12 {
                (1e12, if long { " trillion" } else { "T" }.to_string())
            } else if abs_val >= 1e9 {
                (1e9, if long { " billion" } else { "B" }.to_string())
            } else if abs_val >= 1e6 {
                (1e6, if long { " million" } else { "M" }.to_string())
            } else if abs_val >= 1e3 {
                (1e3, if long { " thousand" } else { "K" }.to_string())
            } else {
                (1.0, String::new())
            }
        }
    }
}

pub(crate) fn render_compact(
    value: f64,
    options: &FormatOptions,
    locale: &IcuLocale,
    language: &str,
) -> Result<String, FormatError> {
    let (divisor, suffix) = compact_suffix_and_divisor(value.abs(), locale, options.compact_display);
    let scaled = value / divisor;

    // Compressed values never regroup; uncompressed ones keep at least two
    // integer digits before a separator appears.
    let grouping = if divisor > 1.0 { Grouping::Never } else { Grouping::Min2 };
    let formatter = cached_formatter(locale, grouping)?;

    let mut dec = if options.uses_significant_digits() {
        let min_sd = options.minimum_significant_digits.unwrap_or(1);
        let max_sd = options.maximum_significant_digits.unwrap_or(min_sd);
        round_to_significant_digits(scaled, min_sd, max_sd, options.rounding_mode)
    } else if scaled.abs() >= 10.0 || scaled.abs() == 0.0 {
        let mut dec = decimal_from_f64(scaled);
        dec.round_with_mode(
            0,
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
        dec.absolute.trim_end();
        dec
    } else {
        round_to_significant_digits(scaled, 1, 2, RoundingMode::HalfExpand)
    };

    if options.minimum_integer_digits > 1 {
        dec.absolute.pad_start(options.minimum_integer_digits as i16 - 1);
    }
    if let Some(min_frac) = options.minimum_fraction_digits
        && min_frac > 0
    {
        dec.absolute.pad_end(-(min_frac as i16));
    }
    dec.apply_sign_display(sign_display_to_fd(options.sign_display));

    let num = formatter.format(&dec).to_string();
    Ok(wrap_style(&format!("{num}{suffix}"), value, options, language))
}

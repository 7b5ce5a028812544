use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use fixed_decimal::{
    Decimal, FloatPrecision, SignDisplay, SignedRoundingMode, UnsignedRoundingMode,
};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale as IcuLocale;
use rustc_hash::FxHashMap;

use crate::error::FormatError;
use crate::locale;
use crate::options::{
    CurrencyDisplay, CurrencySign, FormatOptions, Grouping, NumberStyle, Notation, RoundingMode,
    SignDisplayOption,
};
use crate::symbols;
use crate::types::RawPart;

mod notation;
mod raw;

/// Locale-aware number formatter for one `(value, options, locale)` triple.
///
/// Construction validates the options and locale; `format` renders the
/// string and `format_to_raw_parts` decomposes the same rendering into
/// ordered, kind-tagged segments.
pub struct LocaleNumberFormatter<'a> {
    value: f64,
    options: &'a FormatOptions,
    locale: IcuLocale,
    language: String,
}

impl<'a> LocaleNumberFormatter<'a> {
    pub fn new(
        value: f64,
        options: &'a FormatOptions,
        locale_tag: &str,
    ) -> Result<Self, FormatError> {
        options.validate()?;
        let locale = locale::parse_tag(locale_tag)?;
        let language = locale::primary_language(&locale);
        Ok(Self { value, options, locale, language })
    }

    pub fn format(&self) -> Result<String, FormatError> {
        render(self.value, self.options, &self.locale, &self.language)
    }

    pub fn format_to_raw_parts(&self) -> Result<Vec<RawPart>, FormatError> {
        let formatted = self.format()?;
        Ok(raw::decompose(
            &formatted,
            self.value,
            self.options,
            &self.locale,
            &self.language,
        ))
    }
}

fn render(
    value: f64,
    options: &FormatOptions,
    locale: &IcuLocale,
    language: &str,
) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::InvalidValue(format!(
            "cannot format non-finite value {value}"
        )));
    }
    let work = match options.style {
        NumberStyle::Percent => value * 100.0,
        _ => value,
    };
    match options.notation {
        Notation::Scientific | Notation::Engineering => {
            Ok(notation::render_scientific(work, options, language))
        }
        Notation::Compact => notation::render_compact(work, options, locale, language),
        Notation::Standard => render_standard(work, options, locale, language),
    }
}

fn render_standard(
    value: f64,
    options: &FormatOptions,
    locale: &IcuLocale,
    language: &str,
) -> Result<String, FormatError> {
    let formatter = cached_formatter(locale, options.grouping)?;
    let (min_frac, max_frac) = options.resolved_fraction_digits();

    let mut dec = if options.uses_significant_digits() {
        let min_sd = options.minimum_significant_digits.unwrap_or(1);
        let max_sd = options.maximum_significant_digits.unwrap_or(21);
        round_to_significant_digits(value, min_sd, max_sd, options.rounding_mode)
    } else {
        let mut dec = decimal_from_f64(value);
        dec.round_with_mode(-(max_frac as i16), rounding_mode_to_fd(options.rounding_mode));
        dec.absolute.trim_end();
        if min_frac > 0 {
            dec.absolute.pad_end(-(min_frac as i16));
        }
        dec
    };

    if options.minimum_integer_digits > 1 {
        dec.absolute.pad_start(options.minimum_integer_digits as i16 - 1);
    }
    dec.apply_sign_display(sign_display_to_fd(options.sign_display));

    let mut out = formatter.format(&dec).to_string();
    if options.minimum_integer_digits > 1 {
        out = ensure_minimum_integer_digits(out, options.minimum_integer_digits, language);
    }
    Ok(wrap_style(&out, value, options, language))
}

pub(crate) fn decimal_from_f64(value: f64) -> Decimal {
    match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
        Ok(dec) => dec,
        Err(_) => match Decimal::try_from_str(&format!("{value}")) {
            Ok(dec) => dec,
            Err(_) => Decimal::from(0),
        },
    }
}

pub(crate) fn round_to_significant_digits(
    value: f64,
    min_sd: u32,
    max_sd: u32,
    mode: RoundingMode,
) -> Decimal {
    let mut dec = decimal_from_f64(value);

    let start = dec.absolute.nonzero_magnitude_start();
    let end = dec.absolute.nonzero_magnitude_end();
    let current = if dec.absolute.is_zero() { 1i16 } else { (start - end + 1).max(1) };
    if current > max_sd as i16 {
        dec.round_with_mode(start - max_sd as i16 + 1, rounding_mode_to_fd(mode));
    }

    // Pad back up if rounding (or the value itself) left too few digits.
    let start = dec.absolute.nonzero_magnitude_start();
    let remaining = if dec.absolute.is_zero() {
        1i16
    } else {
        (start - dec.absolute.nonzero_magnitude_end() + 1).max(1)
    };
    if remaining < min_sd as i16 {
        dec.absolute.pad_end(start - min_sd as i16 + 1);
    }
    dec
}

// pad_start does not reliably cover zero values, so re-check the rendered
// string and insert zeros after any sign/symbol prefix.
fn ensure_minimum_integer_digits(num_str: String, min_int: u32, language: &str) -> String {
    let Some(first_digit) = num_str
        .char_indices()
        .find(|&(_, c)| locale::digit_value(c).is_some())
        .map(|(i, _)| i)
    else {
        return num_str;
    };
    let prefix = &num_str[..first_digit];
    let digits = &num_str[first_digit..];
    let separator = locale::decimal_separator(language);
    let int_part = match digits.find(separator).or_else(|| digits.find('\u{066B}')) {
        Some(pos) => &digits[..pos],
        None => digits,
    };
    let count = int_part.chars().filter(|&c| locale::digit_value(c).is_some()).count();
    if count < min_int as usize {
        format!("{prefix}{}{digits}", "0".repeat(min_int as usize - count))
    } else {
        num_str
    }
}

type CacheKey = (String, Grouping);
type FormatterCache = Mutex<FxHashMap<CacheKey, Arc<DecimalFormatter>>>;

/// One `DecimalFormatter` per (locale, grouping) pair, shared process-wide.
/// Purely a construction-cost optimization; output never depends on it.
pub(crate) fn cached_formatter(
    locale: &IcuLocale,
    grouping: Grouping,
) -> Result<Arc<DecimalFormatter>, FormatError> {
    static CACHE: OnceLock<FormatterCache> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(FxHashMap::default()));
    let key = (locale.to_string(), grouping);

    if let Some(formatter) = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(formatter.clone());
    }

    let prefs = DecimalFormatterPreferences::from(locale);
    let mut opts = DecimalFormatterOptions::default();
    opts.grouping_strategy = Some(grouping_to_icu(grouping));
    let formatter = DecimalFormatter::try_new(prefs, opts).map_err(|e| {
        FormatError::Configuration(format!("no decimal formatter for \"{}\": {e}", key.0))
    })?;
    let formatter = Arc::new(formatter);
    cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, formatter.clone());
    Ok(formatter)
}

fn grouping_to_icu(grouping: Grouping) -> GroupingStrategy {
    match grouping {
        Grouping::Auto => GroupingStrategy::Auto,
        Grouping::Always => GroupingStrategy::Always,
        Grouping::Min2 => GroupingStrategy::Min2,
        Grouping::Never => GroupingStrategy::Never,
    }
}

pub(crate) fn sign_display_to_fd(sign_display: SignDisplayOption) -> SignDisplay {
    match sign_display {
        SignDisplayOption::Auto => SignDisplay::Auto,
        SignDisplayOption::Never => SignDisplay::Never,
        SignDisplayOption::Always => SignDisplay::Always,
        SignDisplayOption::ExceptZero => SignDisplay::ExceptZero,
        SignDisplayOption::Negative => SignDisplay::Negative,
    }
}

pub(crate) fn rounding_mode_to_fd(mode: RoundingMode) -> SignedRoundingMode {
    match mode {
        RoundingMode::Ceil => SignedRoundingMode::Ceil,
        RoundingMode::Floor => SignedRoundingMode::Floor,
        RoundingMode::Expand => SignedRoundingMode::Unsigned(UnsignedRoundingMode::Expand),
        RoundingMode::Trunc => SignedRoundingMode::Unsigned(UnsignedRoundingMode::Trunc),
        RoundingMode::HalfCeil => SignedRoundingMode::HalfCeil,
        RoundingMode::HalfFloor => SignedRoundingMode::HalfFloor,
        RoundingMode::HalfTrunc => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfTrunc),
        RoundingMode::HalfEven => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfEven),
        RoundingMode::HalfExpand => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    }
}

/// Apply the style affixes around the bare number: currency symbol on the
/// locale's side of the number, percent sign, or unit suffix.
pub(crate) fn wrap_style(
    num_str: &str,
    value: f64,
    options: &FormatOptions,
    language: &str,
) -> String {
    match options.style {
        NumberStyle::Currency => {
            let code = options.currency.as_deref().unwrap_or("USD");
            let symbol = symbols::currency_symbol(code, options.currency_display, language);
            let after = locale::currency_position_after(language)
                && options.currency_display != CurrencyDisplay::Name;
            let is_negative = num_str.starts_with('-') || num_str.starts_with('\u{2212}');

            if options.currency_display == CurrencyDisplay::Name {
                format!("{num_str} {symbol}")
            } else if after {
                if options.currency_sign == CurrencySign::Accounting && is_negative {
                    let abs = num_str.trim_start_matches(['-', '\u{2212}']);
                    format!("-{abs}\u{00A0}{symbol}")
                } else {
                    format!("{num_str}\u{00A0}{symbol}")
                }
            } else if options.currency_sign == CurrencySign::Accounting && is_negative {
                let abs = num_str.trim_start_matches(['-', '\u{2212}']);
                format!("({symbol}{abs})")
            } else if let Some(rest) = num_str
                .strip_prefix('-')
                .or_else(|| num_str.strip_prefix('\u{2212}'))
            {
                format!("-{symbol}{rest}")
            } else if let Some(rest) = num_str.strip_prefix('+') {
                format!("+{symbol}{rest}")
            } else {
                format!("{symbol}{num_str}")
            }
        }
        NumberStyle::Percent => {
            if locale::percent_has_space(language) {
                format!("{num_str}\u{00A0}%")
            } else {
                format!("{num_str}%")
            }
        }
        NumberStyle::Unit => {
            let unit = options.unit.as_deref().unwrap_or_default();
            let suffix = symbols::unit_suffix(unit, options.unit_display, value);
            format!("{num_str}{suffix}")
        }
        NumberStyle::Decimal => num_str.to_string(),
    }
}

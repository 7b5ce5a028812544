mod classify;
mod error;
mod formatter;
mod locale;
mod options;
mod subscript;
mod symbols;
mod types;

pub use error::FormatError;
pub use formatter::LocaleNumberFormatter;
pub use options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, FormatOptions, Grouping, Notation, NumberStyle,
    PartsOptions, RoundingMode, SignDisplayOption, UnitDisplay,
};
pub use subscript::{build_fraction_parts_with_subscript, to_subscript_number};
pub use types::{ClassifiedPart, PartContent, PartKind, PartValue, PartsResult, RawPart};

/// Format a value as a plain string for the given locale.
pub fn format(value: f64, options: &FormatOptions, locale: &str) -> Result<String, FormatError> {
    LocaleNumberFormatter::new(value, options, locale)?.format()
}

/// Format a value and bucket the result into keyed `pre` / `integer` /
/// `fraction` / `post` part arrays for an animated-digit UI.
///
/// The keys survive value changes: integer digits are keyed from the ones
/// place outward and fraction digits from the decimal point outward, so a
/// digit that stays on screen keeps its key while the number grows, shrinks,
/// or changes precision around it.
pub fn format_to_parts(
    value: f64,
    options: &FormatOptions,
    locale: &str,
    parts_options: &PartsOptions,
) -> Result<PartsResult, FormatError> {
    let formatter = LocaleNumberFormatter::new(value, options, locale)?;
    let raw = formatter.format_to_raw_parts()?;
    let formatted = formatter.format()?;
    Ok(classify::classify_parts(
        &raw,
        formatted,
        parts_options.enable_subscript_notation,
    ))
}

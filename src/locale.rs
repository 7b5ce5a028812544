use icu::locale::Locale as IcuLocale;

use crate::error::FormatError;

/// Parse a BCP-47 tag. Unicode extension keywords (`-u-nu-…` etc.) are kept
/// so the decimal formatter preferences can honor them. An unparseable tag
/// is a configuration error, never a silent English fallback.
pub(crate) fn parse_tag(locale_str: &str) -> Result<IcuLocale, FormatError> {
    locale_str
        .parse()
        .map_err(|_| FormatError::Configuration(format!("unsupported locale tag \"{locale_str}\"")))
}

pub(crate) fn primary_language(locale: &IcuLocale) -> String {
    locale.id.language.as_str().to_ascii_lowercase()
}

/// The decimal-separator character the locale's number pattern uses. Needed
/// to tell group separators from the decimal point when re-reading a
/// formatted string.
pub(crate) fn decimal_separator(language: &str) -> char {
    match language {
        "de" | "fr" | "es" | "pt" | "it" | "nl" | "da" | "fi" | "nb" | "nn" | "no" | "sv"
        | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr" | "el" | "uk"
        | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ca" | "gl" | "eu" => ',',
        _ => '.',
    }
}

/// Locales that place the currency symbol after the number ("1,23 $").
pub(crate) fn currency_position_after(language: &str) -> bool {
    matches!(
        language,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ms"
    )
}

/// Locales that separate the percent sign with a no-break space ("5 %").
pub(crate) fn percent_has_space(language: &str) -> bool {
    matches!(
        language,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt" | "ar" | "he" | "fa" | "hi"
            | "bn" | "ta" | "te" | "mr" | "gu" | "kn" | "ml" | "si" | "th" | "ka" | "hy"
            | "az" | "kk" | "uz" | "ky" | "mn" | "sq" | "mk" | "bs" | "mt" | "is" | "ga"
            | "cy" | "eu" | "gl" | "af" | "zu" | "xh" | "sw" | "rw"
    )
}

// Zero code points of the decimal numbering systems the formatter can emit.
const DIGIT_ZEROS: &[u32] = &[
    0x0030,  // latn
    0x0660,  // arab
    0x06F0,  // arabext
    0x0966,  // deva
    0x09E6,  // beng
    0x0A66,  // guru
    0x0AE6,  // gujr
    0x0B66,  // orya
    0x0BE6,  // tamldec
    0x0C66,  // telu
    0x0CE6,  // knda
    0x0D66,  // mlym
    0x0E50,  // thai
    0x0ED0,  // laoo
    0x0F20,  // tibt
    0x1040,  // mymr
    0x17E0,  // khmr
    0xFF10,  // fullwide
];

/// Decimal value of a digit character in any covered numbering system.
pub(crate) fn digit_value(c: char) -> Option<u8> {
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|&zero| (cp - zero) as u8)
}

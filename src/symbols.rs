use crate::options::{CurrencyDisplay, UnitDisplay};

/// ISO-4217 minor-unit count; drives the default fraction digits for
/// currency style.
pub(crate) fn currency_digits(currency: &str) -> u32 {
    match currency.to_ascii_uppercase().as_str() {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
        | "UGX" | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        _ => 2,
    }
}

/// Display text for a currency in the given language. Unknown codes fall
/// back to the code itself.
pub(crate) fn currency_symbol(currency: &str, display: CurrencyDisplay, language: &str) -> String {
    match display {
        CurrencyDisplay::Code => return currency.to_ascii_uppercase(),
        CurrencyDisplay::Name => return currency_name(currency),
        CurrencyDisplay::Symbol | CurrencyDisplay::NarrowSymbol => {}
    }
    let narrow = display == CurrencyDisplay::NarrowSymbol;
    let code = currency.to_ascii_uppercase();
    match code.as_str() {
        "USD" => {
            if narrow || matches!(language, "en" | "ja" | "de" | "fr") {
                "$".to_string()
            } else {
                "US$".to_string()
            }
        }
        "EUR" => "\u{20AC}".to_string(),
        "GBP" => "\u{00A3}".to_string(),
        "JPY" | "CNY" => "\u{00A5}".to_string(),
        "KRW" => "\u{20A9}".to_string(),
        "INR" => "\u{20B9}".to_string(),
        "RUB" => "\u{20BD}".to_string(),
        "BRL" => "R$".to_string(),
        "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "ARS" | "CLP" | "COP" => {
            if narrow {
                "$".to_string()
            } else {
                format!("{}$", &code[..2])
            }
        }
        "CHF" => "CHF".to_string(),
        "SEK" | "NOK" | "DKK" | "ISK" | "CZK" => "kr".to_string(),
        "PLN" => "z\u{0142}".to_string(),
        "THB" => "\u{0E3F}".to_string(),
        "TRY" => "\u{20BA}".to_string(),
        "ILS" => "\u{20AA}".to_string(),
        "ZAR" => "R".to_string(),
        "TWD" => {
            if narrow {
                "$".to_string()
            } else {
                "NT$".to_string()
            }
        }
        other => other.to_string(),
    }
}

pub(crate) fn currency_name(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "US dollars".to_string(),
        "EUR" => "euros".to_string(),
        "GBP" => "British pounds".to_string(),
        "JPY" => "Japanese yen".to_string(),
        "CNY" => "Chinese yuan".to_string(),
        "KRW" => "South Korean won".to_string(),
        "INR" => "Indian rupees".to_string(),
        "CAD" => "Canadian dollars".to_string(),
        "AUD" => "Australian dollars".to_string(),
        "CHF" => "Swiss francs".to_string(),
        "BRL" => "Brazilian reais".to_string(),
        other => other.to_string(),
    }
}

// (identifier, narrow, short, long one, long other); leading spaces are part
// of the suffix text.
const UNITS: &[(&str, &str, &str, &str, &str)] = &[
    ("kilometer", "km", " km", " kilometer", " kilometers"),
    ("meter", "m", " m", " meter", " meters"),
    ("centimeter", "cm", " cm", " centimeter", " centimeters"),
    ("millimeter", "mm", " mm", " millimeter", " millimeters"),
    ("mile", "mi", " mi", " mile", " miles"),
    ("foot", "ft", " ft", " foot", " feet"),
    ("inch", "in", " in", " inch", " inches"),
    ("yard", "yd", " yd", " yard", " yards"),
    ("kilogram", "kg", " kg", " kilogram", " kilograms"),
    ("gram", "g", " g", " gram", " grams"),
    ("pound", "lb", " lb", " pound", " pounds"),
    ("ounce", "oz", " oz", " ounce", " ounces"),
    ("liter", "L", " L", " liter", " liters"),
    ("milliliter", "mL", " mL", " milliliter", " milliliters"),
    ("gallon", "gal", " gal", " gallon", " gallons"),
    ("hour", "h", " hr", " hour", " hours"),
    ("minute", "min", " min", " minute", " minutes"),
    ("second", "s", " sec", " second", " seconds"),
    ("millisecond", "ms", " ms", " millisecond", " milliseconds"),
    ("day", "d", " day", " day", " days"),
    ("week", "w", " wk", " week", " weeks"),
    ("month", "mo", " mth", " month", " months"),
    ("year", "y", " yr", " year", " years"),
    ("byte", "B", " byte", " byte", " bytes"),
    ("kilobyte", "kB", " kB", " kilobyte", " kilobytes"),
    ("megabyte", "MB", " MB", " megabyte", " megabytes"),
    ("gigabyte", "GB", " GB", " gigabyte", " gigabytes"),
    ("terabyte", "TB", " TB", " terabyte", " terabytes"),
    ("percent", "%", "%", " percent", " percent"),
    ("degree", "\u{00B0}", "\u{00B0}", " degree", " degrees"),
    ("celsius", "\u{00B0}C", " \u{00B0}C", " degree Celsius", " degrees Celsius"),
    ("fahrenheit", "\u{00B0}F", " \u{00B0}F", " degree Fahrenheit", " degrees Fahrenheit"),
];

pub(crate) fn is_sanctioned_unit(unit: &str) -> bool {
    UNITS.iter().any(|(id, ..)| *id == unit)
}

/// The suffix appended after the number for unit style, leading space
/// included where the pattern has one.
pub(crate) fn unit_suffix(unit: &str, display: UnitDisplay, value: f64) -> String {
    let Some((_, narrow, short, long_one, long_other)) =
        UNITS.iter().find(|(id, ..)| *id == unit)
    else {
        return String::new();
    };
    match display {
        UnitDisplay::Narrow => (*narrow).to_string(),
        UnitDisplay::Short => (*short).to_string(),
        UnitDisplay::Long => {
            // English cardinal rule: only exactly one is singular.
            if value.abs() == 1.0 {
                (*long_one).to_string()
            } else {
                (*long_other).to_string()
            }
        }
    }
}

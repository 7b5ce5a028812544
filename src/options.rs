use crate::error::FormatError;
use crate::symbols;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Decimal,
    Currency,
    Percent,
    Unit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
    Engineering,
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Grouping {
    #[default]
    Auto,
    Always,
    Min2,
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SignDisplayOption {
    #[default]
    Auto,
    Never,
    Always,
    ExceptZero,
    Negative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurrencySign {
    #[default]
    Standard,
    Accounting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    Narrow,
    #[default]
    Short,
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundingMode {
    Ceil,
    Floor,
    Expand,
    Trunc,
    HalfCeil,
    HalfFloor,
    HalfTrunc,
    HalfEven,
    #[default]
    HalfExpand,
}

/// Formatting options, mirroring the option bag of a platform number
/// formatter. `Default` gives plain decimal formatting with locale-default
/// grouping and up to three fraction digits.
#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub style: NumberStyle,
    pub currency: Option<String>,
    pub currency_display: CurrencyDisplay,
    pub currency_sign: CurrencySign,
    pub unit: Option<String>,
    pub unit_display: UnitDisplay,
    pub notation: Notation,
    pub compact_display: CompactDisplay,
    pub minimum_integer_digits: u32,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub grouping: Grouping,
    pub sign_display: SignDisplayOption,
    pub rounding_mode: RoundingMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            currency: None,
            currency_display: CurrencyDisplay::default(),
            currency_sign: CurrencySign::default(),
            unit: None,
            unit_display: UnitDisplay::default(),
            notation: Notation::default(),
            compact_display: CompactDisplay::default(),
            minimum_integer_digits: 1,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            minimum_significant_digits: None,
            maximum_significant_digits: None,
            grouping: Grouping::default(),
            sign_display: SignDisplayOption::default(),
            rounding_mode: RoundingMode::default(),
        }
    }
}

impl FormatOptions {
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            style: NumberStyle::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn percent() -> Self {
        Self { style: NumberStyle::Percent, ..Self::default() }
    }

    pub fn unit(unit: impl Into<String>) -> Self {
        Self {
            style: NumberStyle::Unit,
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), FormatError> {
        if self.style == NumberStyle::Currency {
            match self.currency.as_deref() {
                None => {
                    return Err(FormatError::Configuration(
                        "currency style requires a currency code".to_string(),
                    ));
                }
                Some(code) if !is_well_formed_currency_code(code) => {
                    return Err(FormatError::Configuration(format!(
                        "malformed currency code \"{code}\""
                    )));
                }
                _ => {}
            }
        }
        if self.style == NumberStyle::Unit {
            match self.unit.as_deref() {
                None => {
                    return Err(FormatError::Configuration(
                        "unit style requires a unit identifier".to_string(),
                    ));
                }
                Some(unit) if !symbols::is_sanctioned_unit(unit) => {
                    return Err(FormatError::Configuration(format!(
                        "unsupported unit identifier \"{unit}\""
                    )));
                }
                _ => {}
            }
        }
        if !(1..=21).contains(&self.minimum_integer_digits) {
            return Err(FormatError::Configuration(
                "minimumIntegerDigits must be in 1..=21".to_string(),
            ));
        }
        for digits in [self.minimum_fraction_digits, self.maximum_fraction_digits]
            .into_iter()
            .flatten()
        {
            if digits > 100 {
                return Err(FormatError::Configuration(
                    "fraction digits must be in 0..=100".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.minimum_fraction_digits, self.maximum_fraction_digits)
            && min > max
        {
            return Err(FormatError::Configuration(format!(
                "minimumFractionDigits {min} exceeds maximumFractionDigits {max}"
            )));
        }
        for digits in [
            self.minimum_significant_digits,
            self.maximum_significant_digits,
        ]
        .into_iter()
        .flatten()
        {
            if !(1..=21).contains(&digits) {
                return Err(FormatError::Configuration(
                    "significant digits must be in 1..=21".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (
            self.minimum_significant_digits,
            self.maximum_significant_digits,
        ) && min > max
        {
            return Err(FormatError::Configuration(format!(
                "minimumSignificantDigits {min} exceeds maximumSignificantDigits {max}"
            )));
        }
        Ok(())
    }

    /// Effective (minimum, maximum) fraction digits after style defaults:
    /// three for decimal and unit, the currency's minor-unit count for
    /// currency, none for percent.
    pub(crate) fn resolved_fraction_digits(&self) -> (u32, u32) {
        let (default_min, default_max) = match self.style {
            NumberStyle::Currency => {
                let digits = symbols::currency_digits(self.currency.as_deref().unwrap_or("USD"));
                (digits, digits)
            }
            NumberStyle::Percent => (0, 0),
            NumberStyle::Decimal | NumberStyle::Unit => (0, 3),
        };
        let min = self.minimum_fraction_digits.unwrap_or(default_min);
        let max = self.maximum_fraction_digits.unwrap_or(default_max.max(min));
        (min.min(max), max)
    }

    pub(crate) fn uses_significant_digits(&self) -> bool {
        self.minimum_significant_digits.is_some() || self.maximum_significant_digits.is_some()
    }
}

fn is_well_formed_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Options for part classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PartsOptions {
    /// Compress runs of two or more leading fractional zeros into a single
    /// zero plus a subscript run-length marker.
    pub enable_subscript_notation: bool,
}

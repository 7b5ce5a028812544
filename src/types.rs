use std::fmt;

/// Semantic tag for one segment of a formatted number. Raw decomposition
/// uses every variant except `Subscript`, which only appears after
/// classification with subscript notation enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartKind {
    Integer,
    Group,
    Decimal,
    Fraction,
    Subscript,
    MinusSign,
    PlusSign,
    Currency,
    PercentSign,
    Unit,
    Literal,
    Compact,
    ExponentSeparator,
    ExponentMinusSign,
    ExponentInteger,
}

impl PartKind {
    /// Canonical name, also the prefix of every part key.
    pub fn as_str(self) -> &'static str {
        match self {
            PartKind::Integer => "integer",
            PartKind::Group => "group",
            PartKind::Decimal => "decimal",
            PartKind::Fraction => "fraction",
            PartKind::Subscript => "subscript",
            PartKind::MinusSign => "minusSign",
            PartKind::PlusSign => "plusSign",
            PartKind::Currency => "currency",
            PartKind::PercentSign => "percentSign",
            PartKind::Unit => "unit",
            PartKind::Literal => "literal",
            PartKind::Compact => "compact",
            PartKind::ExponentSeparator => "exponentSeparator",
            PartKind::ExponentMinusSign => "exponentMinusSign",
            PartKind::ExponentInteger => "exponentInteger",
        }
    }

    /// Numeric kinds land in the integer/fraction buckets; everything else
    /// splits into pre/post by position relative to the first numeric part.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PartKind::Integer
                | PartKind::Group
                | PartKind::Decimal
                | PartKind::Fraction
                | PartKind::Subscript
        )
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment as emitted by the locale formatter, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPart {
    pub kind: PartKind,
    pub text: String,
}

impl RawPart {
    pub(crate) fn new(kind: PartKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// Payload of a classified part: a decoded digit for digit parts, the
/// literal text for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Digit(u8),
    Text(String),
}

impl PartValue {
    pub fn as_digit(&self) -> Option<u8> {
        match self {
            PartValue::Digit(d) => Some(*d),
            PartValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartValue::Digit(d) => write!(f, "{d}"),
            PartValue::Text(s) => f.write_str(s),
        }
    }
}

/// A part before key assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartContent {
    pub kind: PartKind,
    pub value: PartValue,
}

impl PartContent {
    pub(crate) fn new(kind: PartKind, value: PartValue) -> Self {
        Self { kind, value }
    }
}

/// A classified, keyed part. `key` is `"{kind}:{n}"` where `n` is the
/// occurrence index of `kind` in the bucket's keying order; it is unique
/// within its containing array and identical across repeated calls with the
/// same inputs, so a UI can match parts between renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedPart {
    pub kind: PartKind,
    pub value: PartValue,
    pub key: String,
}

/// The four part buckets plus the plain formatted string. Concatenating the
/// values of `pre + integer + fraction + post` reproduces `formatted`
/// (with subscript markers standing in for the zero run they compress).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartsResult {
    pub pre: Vec<ClassifiedPart>,
    pub integer: Vec<ClassifiedPart>,
    pub fraction: Vec<ClassifiedPart>,
    pub post: Vec<ClassifiedPart>,
    pub formatted: String,
}

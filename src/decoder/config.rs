use std::str::FromStr;
use std::sync::OnceLock;

/// How a numeric segment's final group is read when one digit remains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericRemainder {
    /// Always read a remainder as a 7-bit, 2-digit group, even for a lone
    /// digit. Symbols ending in a single digit decode one digit too many and
    /// the stream after it is misaligned.
    #[default]
    Legacy,
    /// Read a lone trailing digit from 4 bits
    Standard,
}

impl FromStr for NumericRemainder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(NumericRemainder::Legacy),
            "standard" => Ok(NumericRemainder::Standard),
            other => Err(format!(
                "unknown numeric remainder policy '{other}' (expected legacy or standard)"
            )),
        }
    }
}

/// Knobs for a single decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub numeric_remainder: NumericRemainder,
}

impl DecodeOptions {
    /// Options with the given numeric remainder policy
    pub fn with_numeric_remainder(numeric_remainder: NumericRemainder) -> Self {
        Self { numeric_remainder }
    }
}

impl Default for DecodeOptions {
    /// Process-wide defaults, read once from the environment
    fn default() -> Self {
        Self {
            numeric_remainder: numeric_remainder(),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(variable = name, value = %v, "ignoring unparsable setting");
                default
            }
        },
        Err(_) => default,
    }
}

static NUMERIC_REMAINDER: OnceLock<NumericRemainder> = OnceLock::new();

/// `QR_NUMERIC_REMAINDER`: `legacy` (default) or `standard`
pub(crate) fn numeric_remainder() -> NumericRemainder {
    *NUMERIC_REMAINDER
        .get_or_init(|| parse_env("QR_NUMERIC_REMAINDER", NumericRemainder::default()))
}

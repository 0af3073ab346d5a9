/// Number of fractional digits in the default literal format.
pub const DEFAULT_PRECISION: usize = 6;

/// Controls how constants are rendered as text.
///
/// Every format renders text the lexer reads back as the identical `f64`.
/// Exponent notation is never used, and infinities and NaN render as
/// `inf`, `-inf` and `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// A fixed number of fractional digits, e.g. `2.000000` for `Fixed(6)`.
    ///
    /// Values that need more digits than that are written in their shortest
    /// exact form instead, e.g. `0.1234567`.
    Fixed(usize),
    /// The shortest text that parses back to the identical `f64`, e.g. `2`
    /// or `0.1`.
    Shortest,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::Fixed(DEFAULT_PRECISION)
    }
}

/// Formats a constant according to `format`.
///
/// ## Example
/// ```
/// use polexpr::util::num::{NumberFormat, format_number};
///
/// assert_eq!(format_number(2.0, NumberFormat::default()), "2.000000");
/// assert_eq!(format_number(-0.5, NumberFormat::Fixed(2)), "-0.50");
/// assert_eq!(format_number(0.123_456_7, NumberFormat::default()), "0.1234567");
/// assert_eq!(format_number(1e-7, NumberFormat::default()), "0.0000001");
/// assert_eq!(format_number(0.1, NumberFormat::Shortest), "0.1");
/// assert_eq!(format_number(f64::NEG_INFINITY, NumberFormat::default()), "-inf");
/// ```
#[must_use]
pub fn format_number(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Fixed(precision) => {
            let fixed = format!("{value:.precision$}");
            if fixed.parse::<f64>().is_ok_and(|parsed| parsed.to_bits() == value.to_bits()) {
                fixed
            } else {
                format!("{value}")
            }
        },
        NumberFormat::Shortest => format!("{value}"),
    }
}

/// Reads the spelling of an infinity or NaN written by [`format_number`].
///
/// ## Example
/// ```
/// use polexpr::util::num::non_finite;
///
/// assert_eq!(non_finite("-inf"), Some(f64::NEG_INFINITY));
/// assert!(non_finite("NaN").is_some_and(f64::is_nan));
/// assert_eq!(non_finite("infinity"), None);
/// ```
#[must_use]
pub fn non_finite(text: &str) -> Option<f64> {
    match text {
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => None,
    }
}

/// Converts a byte offset into `source` to a 1-based character column.
///
/// Offsets past the end map to the column just after the last character.
///
/// ## Example
/// ```
/// use polexpr::util::num::column_at;
///
/// assert_eq!(column_at("+|1|2", 0), 1);
/// assert_eq!(column_at("+|1|2", 4), 5);
/// assert_eq!(column_at("+|1|2", 99), 6);
/// ```
#[must_use]
pub fn column_at(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.char_indices().take_while(|(i, _)| *i < offset).count() + 1
}

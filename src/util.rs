/// Numeric literal formatting and source position helpers.
///
/// This module decides how constants are written back out as text, which in
/// turn decides whether a serialized tree reproduces its constants exactly,
/// and converts byte offsets into the 1-based character columns used in
/// diagnostics.
pub mod num;

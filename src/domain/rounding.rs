//! Explicit rounding mode for exact-to-decimal conversions.

/// Rounding mode applied when an exact rational is turned into a
/// fixed-decimal string or an integer.
///
/// Intermediate computation always stays exact; a `Rounding` is only
/// consulted at that boundary. The default is [`Rounding::Down`].
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::Rounding;
///
/// assert_eq!(Rounding::default(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards zero (truncate).
    #[default]
    Down,
    /// Round to nearest; ties go away from zero.
    HalfUp,
    /// Round away from zero.
    Up,
}

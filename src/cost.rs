use num_traits::CheckedAdd;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;

/// The numeric type of edge weights, distances and heuristic estimates.
///
/// Distances are summed with [`CheckedAdd`], so the maximum value is an
/// ordinary cost and only sums past it are dropped. Estimates are summed with
/// [`SaturatingAdd`].
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + CheckedAdd
    + SaturatingAdd
    + UpperBounded
    + Zero
    + std::ops::Add<Self, Output = Self>
    + std::ops::Sub<Self, Output = Self>
    + std::ops::AddAssign
{
    /// Whether this value can be used as an edge weight or heuristic estimate.
    ///
    /// ```
    /// use wayfinder::cost::Cost;
    /// assert!(0i32.is_non_negative());
    /// assert!(7u8.is_non_negative());
    /// assert!(!(-1i64).is_non_negative());
    /// ```
    #[inline(always)]
    fn is_non_negative(&self) -> bool {
        *self >= Self::zero()
    }

    /// The unbounded cost ceiling.
    #[inline(always)]
    fn unbounded() -> Self {
        <Self as UpperBounded>::max_value()
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(impl Cost for $t {})*
    };
}

impl_integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

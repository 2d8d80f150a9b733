use std::fmt::Debug;

use derive_more::Display;
use num_traits::CheckedAdd;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// A totally ordered floating point cost.
///
/// Infinity is the saturation sentinel, and a checked sum that reaches it
/// fails. `NaN` is never accepted as a weight.
///
/// ```
/// use num_traits::CheckedAdd;
/// use wayfinder::FloatCost;
///
/// let a = FloatCost::new(0.25f64) + FloatCost::new(0.5);
/// assert_eq!(a.into_inner(), 0.75);
/// assert_eq!(a.checked_add(&a), Some(FloatCost::new(1.5)));
/// assert_eq!(a.checked_add(&FloatCost::infinity()), None);
/// ```
#[derive(Copy, Clone, Default, Debug, Display, PartialEq, PartialOrd)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F>
where
    F: FloatCore + Debug + std::fmt::Display,
{
    #[inline(always)]
    fn is_non_negative(&self) -> bool {
        !self.0.is_nan() && self.0 >= OrderedFloat::zero()
    }
}

impl<F> FloatCost<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }
    pub fn from_ordered_float(f: OrderedFloat<F>) -> Self {
        Self(f)
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self(OrderedFloat::infinity())
    }

    pub fn into_inner(self) -> F {
        self.0.into_inner()
    }
}

/// Forwards an operator to the wrapped `OrderedFloat`.
macro_rules! forward_op {
    ($op:ident, $method:ident) => {
        impl<F: FloatCore> std::ops::$op for FloatCost<F> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(std::ops::$op::$method(self.0, rhs.0))
            }
        }
    };
}
forward_op!(Add, add);
forward_op!(Sub, sub);

impl<F: FloatCore> std::ops::AddAssign for FloatCost<F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Float addition already saturates at infinity.
impl<F: FloatCore> SaturatingAdd for FloatCost<F> {
    #[inline(always)]
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

/// Fails once the sum is no longer finite.
impl<F: FloatCore> CheckedAdd for FloatCost<F> {
    #[inline(always)]
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let sum = *self + *rhs;
        sum.0.is_finite().then_some(sum)
    }
}

impl<F: FloatCore> Zero for FloatCost<F> {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    #[inline(always)]
    fn zero() -> Self {
        Self(OrderedFloat::zero())
    }
}

impl<F: FloatCore> UpperBounded for FloatCost<F> {
    #[inline(always)]
    fn max_value() -> Self {
        Self::infinity()
    }
}

// `OrderedFloat` is `Eq` and `Ord` even when `F` isn't, so these can't be
// derived.
impl<F: FloatCore> Eq for FloatCost<F> {}
impl<F: FloatCore> Ord for FloatCost<F> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<F: FloatCore> From<F> for FloatCost<F> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

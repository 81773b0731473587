// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Repeat Counts
//!
//! `Count` is the "how many times" argument of the repetition and padding
//! producers. It is either a finite number of units or the unbounded
//! sentinel, so both cases are handled exhaustively instead of overloading
//! a nullable integer.
//!
//! Plain integers of every primitive type convert into a `Count` through
//! [`IntoCount`]. Negative values and values that do not fit into `usize`
//! are rejected with a [`SequenceError`].
//!
//! ```rust
//! use yail::count::{Count, IntoCount};
//!
//! assert_eq!(3_i32.try_into_count(), Ok(Count::Finite(3)));
//! assert!((-1_i64).try_into_count().is_err());
//! assert_eq!(Count::Unbounded.try_into_count(), Ok(Count::Unbounded));
//! ```

use crate::error::SequenceError;

/// A non-negative repeat count or the unbounded sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
    /// Exactly this many units.
    Finite(usize),
    /// No limit; the producer never stops on its own.
    Unbounded,
}

impl Count {
    /// A count of zero units.
    pub const ZERO: Self = Self::Finite(0);

    /// Returns `true` for [`Count::Unbounded`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::count::Count;
    /// assert!(Count::Unbounded.is_unbounded());
    /// assert!(!Count::Finite(4).is_unbounded());
    /// ```
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` for a finite count of zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(0))
    }

    /// Returns the finite value, or `None` when unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::count::Count;
    /// assert_eq!(Count::Finite(4).finite(), Some(4));
    /// assert_eq!(Count::Unbounded.finite(), None);
    /// ```
    #[inline]
    pub const fn finite(&self) -> Option<usize> {
        match self {
            Self::Finite(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    /// Consumes one unit. Returns `false` once a finite count is used up.
    #[inline]
    pub(crate) fn take_one(&mut self) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Finite(0) => false,
            Self::Finite(n) => {
                *n -= 1;
                true
            }
        }
    }

    /// Size hint of a producer emitting one element per remaining unit.
    #[inline]
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Finite(n) => (*n, Some(*n)),
            Self::Unbounded => (usize::MAX, None),
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Conversion into a validated [`Count`].
///
/// Implemented for `Count` itself and for all primitive integer types.
pub trait IntoCount {
    /// Converts `self` into a `Count`, rejecting negative or oversized values.
    fn try_into_count(self) -> Result<Count, SequenceError>;
}

impl IntoCount for Count {
    #[inline]
    fn try_into_count(self) -> Result<Count, SequenceError> {
        Ok(self)
    }
}

macro_rules! impl_into_count_unsigned {
    ($t:ty) => {
        impl IntoCount for $t {
            #[inline]
            fn try_into_count(self) -> Result<Count, SequenceError> {
                usize::try_from(self)
                    .map(Count::Finite)
                    .map_err(|_| SequenceError::CountOverflow {
                        value: self as u128,
                    })
            }
        }
    };
}

macro_rules! impl_into_count_signed {
    ($t:ty) => {
        impl IntoCount for $t {
            #[inline]
            fn try_into_count(self) -> Result<Count, SequenceError> {
                if self < 0 {
                    return Err(SequenceError::NegativeCount {
                        value: self as i128,
                    });
                }
                usize::try_from(self)
                    .map(Count::Finite)
                    .map_err(|_| SequenceError::CountOverflow {
                        value: self as u128,
                    })
            }
        }
    };
}

impl_into_count_unsigned!(u8);
impl_into_count_unsigned!(u16);
impl_into_count_unsigned!(u32);
impl_into_count_unsigned!(u64);
impl_into_count_unsigned!(u128);
impl_into_count_unsigned!(usize);

impl_into_count_signed!(i8);
impl_into_count_signed!(i16);
impl_into_count_signed!(i32);
impl_into_count_signed!(i64);
impl_into_count_signed!(i128);
impl_into_count_signed!(isize);

/// Converts into a count that must be finite.
///
/// `name` identifies the parameter in the error.
#[inline]
pub(crate) fn try_finite<C: IntoCount>(n: C, name: &'static str) -> Result<usize, SequenceError> {
    match n.try_into_count()? {
        Count::Finite(n) => Ok(n),
        Count::Unbounded => Err(SequenceError::UnboundedCount { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_conversion() {
        assert_eq!(0_u8.try_into_count(), Ok(Count::Finite(0)));
        assert_eq!(7_u32.try_into_count(), Ok(Count::Finite(7)));
        assert_eq!(usize::MAX.try_into_count(), Ok(Count::Finite(usize::MAX)));
    }

    #[test]
    fn test_signed_conversion() {
        assert_eq!(5_i64.try_into_count(), Ok(Count::Finite(5)));
        assert_eq!(0_isize.try_into_count(), Ok(Count::Finite(0)));
        assert_eq!(
            (-1_i32).try_into_count(),
            Err(SequenceError::NegativeCount { value: -1 })
        );
        assert_eq!(
            i8::MIN.try_into_count(),
            Err(SequenceError::NegativeCount { value: -128 })
        );
    }

    #[test]
    fn test_overflow() {
        let big = u128::MAX;
        assert_eq!(
            big.try_into_count(),
            Err(SequenceError::CountOverflow { value: u128::MAX })
        );
    }

    #[test]
    fn test_take_one_finite() {
        let mut c = Count::Finite(2);
        assert!(c.take_one());
        assert!(c.take_one());
        assert!(!c.take_one());
        assert!(c.is_zero());
    }

    #[test]
    fn test_take_one_unbounded() {
        let mut c = Count::Unbounded;
        for _ in 0..100 {
            assert!(c.take_one());
        }
        assert_eq!(c, Count::Unbounded);
    }

    #[test]
    fn test_try_finite() {
        assert_eq!(try_finite(3_u8, "n"), Ok(3));
        assert_eq!(
            try_finite(Count::Unbounded, "n"),
            Err(SequenceError::UnboundedCount { name: "n" })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Count::Finite(12).to_string(), "12");
        assert_eq!(Count::Unbounded.to_string(), "unbounded");
    }

    #[test]
    fn test_size_hint() {
        assert_eq!(Count::Finite(3).size_hint(), (3, Some(3)));
        assert_eq!(Count::Unbounded.size_hint(), (usize::MAX, None));
    }
}

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

//! # Stepped Ranges and Sub-Range Splitting
//!
//! [`StepRange`] is a half-open range `[start, end)` walked with a positive
//! step, generic over every primitive integer type. [`subrange_stepped`]
//! partitions a larger range into consecutive chunks of `step` values, the
//! last chunk possibly shorter, and yields each chunk as a `StepRange`
//! walked with `substep`.
//!
//! ## Usage
//!
//! ```rust
//! use yail::range::{subrange, subrange_stepped};
//!
//! let chunks: Vec<Vec<i32>> = subrange_stepped(0, 12, 3, 2)
//!     .map(|r| r.iter().collect())
//!     .collect();
//! assert_eq!(chunks, vec![vec![0, 2], vec![3, 5], vec![6, 8], vec![9, 11]]);
//!
//! let singles: Vec<Vec<u8>> = subrange(3_u8).map(|r| r.into_iter().collect()).collect();
//! assert_eq!(singles, vec![vec![0], vec![1], vec![2]]);
//! ```

use crate::error::{SequenceError, expect_valid};
use itertools::{Itertools, TupleWindows};
use num_traits::{NumCast, PrimInt};
use std::iter::FusedIterator;

/// Distance `hi - lo` for `lo <= hi`, computed without overflowing `T`.
#[inline]
fn distance<T>(lo: T, hi: T) -> u128
where
    T: PrimInt,
{
    match (lo.to_i128(), hi.to_i128()) {
        (Some(lo), Some(hi)) => hi.abs_diff(lo),
        // Only u128 values above i128::MAX end up here.
        _ => match (lo.to_u128(), hi.to_u128()) {
            (Some(lo), Some(hi)) => hi.abs_diff(lo),
            _ => 0,
        },
    }
}

/// Number of points `start, start + step, ...` below `end`.
#[inline]
fn point_count<T>(start: T, end: T, step: T) -> u128
where
    T: PrimInt,
{
    if start >= end {
        return 0;
    }
    step.to_u128()
        .map_or(0, |step| distance(start, end).div_ceil(step))
}

/// A half-open range `[start, end)` stepping by a positive `step`.
///
/// # Invariants
/// `start <= end` and `step > 0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRange<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
    step: T,
}

/// An iterator over the points of a `StepRange`.
///
/// The size hint is exact whenever the remaining point count fits into
/// `usize`; wider ranges report `(usize::MAX, None)`.
///
/// # Examples
///
/// ```rust
/// # use yail::range::StepRange;
/// let r = StepRange::new(1, 8, 3);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 4, 7]);
/// assert_eq!(r.iter().rev().collect::<Vec<_>>(), vec![7, 4, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct StepRangeIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    step: T,
    remaining: u128,
}

impl<T> Iterator for StepRangeIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.front + self.step;
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for StepRangeIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.back - self.step;
        }
        Some(result)
    }
}

impl<T> FusedIterator for StepRangeIterator<T> where T: PrimInt {}

impl<T> StepRange<T>
where
    T: PrimInt,
{
    /// Creates a new `StepRange`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive` or `step <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::range::StepRange;
    /// let r = StepRange::new(0, 10, 2);
    /// assert_eq!(r.len(), 5);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T, step: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "Invalid range: start_inclusive must be less than or equal to end_exclusive"
        );
        assert!(step > T::zero(), "Invalid range: step must be positive");
        Self {
            start_inclusive,
            end_exclusive,
            step,
        }
    }

    /// Creates a new `StepRange` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_exclusive` or `step <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::range::StepRange;
    /// assert!(StepRange::try_new(0, 10, 1).is_some());
    /// assert!(StepRange::try_new(10, 0, 1).is_none());
    /// assert!(StepRange::try_new(0, 10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T, step: T) -> Option<Self> {
        if start_inclusive <= end_exclusive && step > T::zero() {
            Some(Self {
                start_inclusive,
                end_exclusive,
                step,
            })
        } else {
            None
        }
    }

    /// Creates a new `StepRange` without checking invariants in release builds.
    #[inline]
    pub(crate) fn new_unchecked(start_inclusive: T, end_exclusive: T, step: T) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "Invalid range: start_inclusive must be less than or equal to end_exclusive"
        );
        debug_assert!(step > T::zero(), "Invalid range: step must be positive");
        Self {
            start_inclusive,
            end_exclusive,
            step,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns the step between consecutive points.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the number of points in the range, saturating at `usize::MAX`.
    ///
    /// Use [`StepRange::point_count`] for the exact count of ranges wider
    /// than `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::range::StepRange;
    /// assert_eq!(StepRange::new(0, 12, 3).len(), 4);
    /// assert_eq!(StepRange::new(0, 10, 3).len(), 4);
    /// assert_eq!(StepRange::new(-128_i8, 127, 1).len(), 255);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.point_count()).unwrap_or(usize::MAX)
    }

    /// Returns the exact number of points in the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::range::StepRange;
    /// assert_eq!(StepRange::new(0_i128, i128::MAX, 1).point_count(), i128::MAX as u128);
    /// ```
    #[inline]
    pub fn point_count(&self) -> u128 {
        point_count(self.start_inclusive, self.end_exclusive, self.step)
    }

    /// Returns `true` if the range contains no points (`start == end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if `value` is one of the points of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use yail::range::StepRange;
    /// let r = StepRange::new(0, 10, 3);
    /// assert!(r.contains(9));
    /// assert!(!r.contains(8));
    /// assert!(!r.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start_inclusive <= value
            && value < self.end_exclusive
            && self
                .step
                .to_u128()
                .is_some_and(|step| distance(self.start_inclusive, value) % step == 0)
    }

    /// Creates an iterator over the points of the range.
    pub fn iter(&self) -> StepRangeIterator<T> {
        let remaining = self.point_count();
        let back = if remaining == 0 {
            self.start_inclusive
        } else {
            // The last point sits `(end - 1 - start) % step` below `end - 1`;
            // that remainder is smaller than `step` and therefore fits into `T`.
            let last = self.end_exclusive - T::one();
            let offset = distance(self.start_inclusive, last)
                % self.step.to_u128().unwrap_or(1);
            last - <T as NumCast>::from(offset).expect("StepRange: remainder is smaller than step")
        };
        StepRangeIterator {
            front: self.start_inclusive,
            back,
            step: self.step,
            remaining,
        }
    }
}

impl<T> std::fmt::Debug for StepRange<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRange")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for StepRange<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}) step {}",
            self.start_inclusive, self.end_exclusive, self.step
        )
    }
}

impl<T> std::ops::RangeBounds<T> for StepRange<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start_inclusive)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end_exclusive)
    }
}

impl<T> IntoIterator for StepRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = StepRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &StepRange<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = StepRangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for StepRange<T>
where
    T: PrimInt,
{
    /// Converts a plain range into a `StepRange` with step one.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end, T::one())
    }
}

/// Chunk boundaries `start, start + step, ... < stop`, followed by `stop`.
#[derive(Debug, Clone)]
pub(crate) struct Boundaries<T>
where
    T: PrimInt,
{
    next: Option<T>,
    stop: T,
    step: T,
    stop_emitted: bool,
}

impl<T> Iterator for Boundaries<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.next.filter(|&current| current < self.stop) {
            // Overflow past the type's maximum ends the stepped part.
            self.next = current.checked_add(&self.step);
            return Some(current);
        }
        self.next = None;
        if self.stop_emitted {
            return None;
        }
        self.stop_emitted = true;
        Some(self.stop)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let stepped = self
            .next
            .map_or(0, |current| point_count(current, self.stop, self.step));
        let total = stepped + <u128 as From<bool>>::from(!self.stop_emitted);
        match usize::try_from(total) {
            Ok(total) => (total, Some(total)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Boundaries<T> where T: PrimInt {}

/// Iterator returned by [`subrange`] and [`subrange_stepped`].
#[derive(Debug, Clone)]
pub struct Subranges<T>
where
    T: PrimInt,
{
    windows: TupleWindows<Boundaries<T>, (T, T)>,
    substep: T,
}

/// Splits `[0, stop)` into unit chunks.
///
/// Equivalent to `subrange_stepped(0, stop, 1, 1)`. A non-positive `stop`
/// yields nothing.
///
/// # Examples
///
/// ```rust
/// # use yail::range::subrange;
/// let starts: Vec<i64> = subrange(5_i64).map(|r| r.start()).collect();
/// assert_eq!(starts, vec![0, 1, 2, 3, 4]);
/// ```
#[inline]
pub fn subrange<T>(stop: T) -> Subranges<T>
where
    T: PrimInt,
{
    build_subranges(T::zero(), stop, T::one(), T::one())
}

/// Splits `[start, stop)` into chunks of `step` values, each walked by `substep`.
///
/// The chunk boundaries are `start, start + step, ...` below `stop`, and
/// `stop` itself, so the last chunk may be shorter than `step`. An empty or
/// reversed range (`start >= stop`) yields nothing.
///
/// # Panics
///
/// Panics if `step` or `substep` is not positive.
///
/// # Examples
///
/// ```rust
/// # use yail::range::subrange_stepped;
/// let chunks: Vec<String> = subrange_stepped(0, 10, 4, 1).map(|r| r.to_string()).collect();
/// assert_eq!(chunks, vec!["[0, 4) step 1", "[4, 8) step 1", "[8, 10) step 1"]);
/// ```
#[inline]
#[track_caller]
pub fn subrange_stepped<T>(start: T, stop: T, step: T, substep: T) -> Subranges<T>
where
    T: PrimInt,
{
    expect_valid(try_subrange_stepped(start, stop, step, substep))
}

/// Fallible variant of [`subrange_stepped`].
pub fn try_subrange_stepped<T>(
    start: T,
    stop: T,
    step: T,
    substep: T,
) -> Result<Subranges<T>, SequenceError>
where
    T: PrimInt,
{
    if step <= T::zero() {
        return Err(SequenceError::NonPositiveStep { name: "step" });
    }
    if substep <= T::zero() {
        return Err(SequenceError::NonPositiveStep { name: "substep" });
    }
    Ok(build_subranges(start, stop, step, substep))
}

#[inline]
fn build_subranges<T>(start: T, stop: T, step: T, substep: T) -> Subranges<T>
where
    T: PrimInt,
{
    let boundaries = Boundaries {
        next: Some(start),
        stop,
        step,
        stop_emitted: false,
    };
    Subranges {
        windows: boundaries.tuple_windows(),
        substep,
    }
}

impl<T> Iterator for Subranges<T>
where
    T: PrimInt,
{
    type Item = StepRange<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let substep = self.substep;
        self.windows
            .next()
            .map(|(lo, hi)| StepRange::new_unchecked(lo, hi, substep))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<T> FusedIterator for Subranges<T> where T: PrimInt {}

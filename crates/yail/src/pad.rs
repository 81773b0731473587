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

//! # Padding
//!
//! Surrounds a sequence with a fill value, a fixed number of times or
//! forever on either side.
//!
//! An unbounded `before` extent wins over everything else: the source and
//! the `after` extent are never consulted and only the fill value is
//! produced. An unbounded `after` extent is applied once the source ends.
//!
//! To pad with "no value", lift the sequence into `Option` and fill with
//! `None`:
//!
//! ```rust
//! use yail::pad::pad;
//!
//! let padded: Vec<_> = pad([1, 2, 3].map(Some), 1, 0, None).collect();
//! assert_eq!(padded, vec![None, Some(1), Some(2), Some(3)]);
//! ```

use crate::count::{Count, IntoCount};
use crate::error::{SequenceError, expect_valid};
use std::iter::{Fuse, FusedIterator};

/// Iterator returned by [`pad`].
#[derive(Debug, Clone)]
pub struct Pad<I>
where
    I: Iterator,
{
    before: Count,
    iter: Fuse<I>,
    after: Count,
    fill: I::Item,
}

/// Pads `seq` with `fill`, `before` times in front and `after` times behind.
///
/// Either extent may be [`Count::Unbounded`].
///
/// # Panics
///
/// Panics if an extent is negative or does not fit into `usize`.
///
/// # Examples
///
/// ```rust
/// # use yail::count::Count;
/// # use yail::pad::pad;
/// assert_eq!(pad(2..4, 1, 2, 0).collect::<Vec<_>>(), vec![0, 2, 3, 0, 0]);
///
/// let tail: Vec<_> = pad([1, 2], 0, Count::Unbounded, 9).take(4).collect();
/// assert_eq!(tail, vec![1, 2, 9, 9]);
/// ```
#[inline]
#[track_caller]
pub fn pad<I, B, A>(seq: I, before: B, after: A, fill: I::Item) -> Pad<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
    B: IntoCount,
    A: IntoCount,
{
    expect_valid(try_pad(seq, before, after, fill))
}

/// Fallible variant of [`pad`].
pub fn try_pad<I, B, A>(
    seq: I,
    before: B,
    after: A,
    fill: I::Item,
) -> Result<Pad<I::IntoIter>, SequenceError>
where
    I: IntoIterator,
    I::Item: Clone,
    B: IntoCount,
    A: IntoCount,
{
    let before = before.try_into_count()?;
    let after = after.try_into_count()?;
    if before.is_unbounded() || after.is_unbounded() {
        log::debug!("pad: creating an unbounded producer (before: {before}, after: {after})");
    }
    Ok(Pad {
        before,
        iter: seq.into_iter().fuse(),
        after,
        fill,
    })
}

impl<I> Iterator for Pad<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.before.take_one() {
            return Some(self.fill.clone());
        }
        if let Some(item) = self.iter.next() {
            return Some(item);
        }
        if self.after.take_one() {
            return Some(self.fill.clone());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Count::Finite(before) = self.before else {
            return (usize::MAX, None);
        };
        let (lo, hi) = self.iter.size_hint();
        let (after_lo, after_hi) = self.after.size_hint();
        let lo = before.saturating_add(lo).saturating_add(after_lo);
        let hi = match (hi, after_hi) {
            (Some(hi), Some(after_hi)) => before
                .checked_add(hi)
                .and_then(|n| n.checked_add(after_hi)),
            _ => None,
        };
        (lo, hi)
    }
}

impl<I> FusedIterator for Pad<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_default_extents() {
        assert_eq!(pad([1, 2, 3], 0, 0, 0).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pad_before_with_none_fill() {
        let padded: Vec<Option<i32>> = pad([1, 2, 3].map(Some), 1, 0, None).collect();
        assert_eq!(padded, vec![None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_pad_after_with_none_fill() {
        let padded: Vec<Option<i32>> = pad([1, 2, 3].map(Some), 0, 2, None).collect();
        assert_eq!(padded, vec![Some(1), Some(2), Some(3), None, None]);
    }

    #[test]
    fn test_pad_both_sides() {
        assert_eq!(
            pad([1, 2, 3], 1, 2, 0).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 0, 0]
        );
    }

    #[test]
    fn test_pad_empty_source() {
        assert_eq!(pad(Vec::<u8>::new(), 2, 1, 5).collect::<Vec<_>>(), vec![5, 5, 5]);
    }

    #[test]
    fn test_pad_unbounded_before_overrides_everything() {
        let padded: Vec<(usize, Option<i32>)> = (0..3)
            .zip(pad([1, 2, 3].map(Some), Count::Unbounded, 0, None))
            .collect();
        assert_eq!(padded, vec![(0, None), (1, None), (2, None)]);

        let both: Vec<i32> = pad([1, 2, 3], Count::Unbounded, Count::Unbounded, 0)
            .take(10)
            .collect();
        assert_eq!(both, vec![0; 10]);
    }

    #[test]
    fn test_pad_unbounded_before_never_pulls_source() {
        let source = std::iter::from_fn(|| -> Option<i32> { panic!("source must not be pulled") });
        let padded: Vec<i32> = pad(source, Count::Unbounded, 3, -1).take(4).collect();
        assert_eq!(padded, vec![-1; 4]);
    }

    #[test]
    fn test_pad_unbounded_after() {
        let padded: Vec<(usize, Option<i32>)> = (0..6)
            .zip(pad([1, 2, 3].map(Some), 0, Count::Unbounded, None))
            .collect();
        assert_eq!(
            padded,
            vec![
                (0, Some(1)),
                (1, Some(2)),
                (2, Some(3)),
                (3, None),
                (4, None),
                (5, None)
            ]
        );
    }

    #[test]
    fn test_pad_infinite_source() {
        let padded: Vec<u32> = pad(10_u32.., 2, 2, 0).take(4).collect();
        assert_eq!(padded, vec![0, 0, 10, 11]);
    }

    #[test]
    fn test_pad_size_hint() {
        let mut p = pad(vec![1, 2, 3], 1, 2, 0);
        assert_eq!(p.size_hint(), (6, Some(6)));
        p.next();
        assert_eq!(p.size_hint(), (5, Some(5)));
        assert_eq!(pad([1], Count::Unbounded, 0, 0).size_hint(), (usize::MAX, None));
        assert_eq!(pad([1], 0, Count::Unbounded, 0).size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_pad_fused() {
        let mut p = pad([1], 0, 1, 0);
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), Some(0));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    #[should_panic(expected = "n must be non-negative, but got n = -1")]
    fn test_pad_negative_before_panics() {
        let _ = pad([1, 2, 3], -1, 0, 0);
    }

    #[test]
    fn test_try_pad_negative_after() {
        assert_eq!(
            try_pad([1, 2, 3], 0, -2_i64, 0).unwrap_err(),
            SequenceError::NegativeCount { value: -2 }
        );
    }
}

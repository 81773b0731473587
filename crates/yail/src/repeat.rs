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

//! # Repetition Producers
//!
//! Bounded and unbounded repetition of a whole sequence ([`cycles`]) and of
//! each of its elements ([`duplicate`]).
//!
//! ## Re-traversal
//!
//! `cycles` replays its source by cloning the source iterator, so the
//! iterator must be `Clone`. Each replay is an independent traversal from
//! the start. If the source never ends, the first pass never completes and
//! only the first pass ever yields data.
//!
//! ## Validation
//!
//! Counts are checked when the producer is created, not on the first pull:
//!
//! ```rust,should_panic
//! # use yail::repeat::cycles;
//! let _ = cycles([1, 2, 3], -1); // panics here
//! ```

use crate::count::{Count, IntoCount, try_finite};
use crate::error::{SequenceError, expect_valid};
use itertools::RepeatN;
use std::iter::FusedIterator;

/// Iterator returned by [`cycles`].
#[derive(Debug, Clone)]
pub struct Cycles<I> {
    orig: I,
    iter: I,
    /// Passes left, including the one in progress.
    passes: Count,
    yielded: bool,
}

/// Cycles through `seq` `n` times, or forever when `n` is [`Count::Unbounded`].
///
/// `n = 0` and an empty `seq` both produce an empty sequence.
///
/// # Panics
///
/// Panics if `n` is negative or does not fit into `usize`.
///
/// # Examples
///
/// ```rust
/// # use yail::count::Count;
/// # use yail::repeat::cycles;
/// assert_eq!(cycles([1, 2, 3], 2).collect::<Vec<_>>(), vec![1, 2, 3, 1, 2, 3]);
///
/// let forever: Vec<_> = cycles([1, 2], Count::Unbounded).take(5).collect();
/// assert_eq!(forever, vec![1, 2, 1, 2, 1]);
/// ```
#[inline]
#[track_caller]
pub fn cycles<I, C>(seq: I, n: C) -> Cycles<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    C: IntoCount,
{
    expect_valid(try_cycles(seq, n))
}

/// Fallible variant of [`cycles`].
///
/// # Examples
///
/// ```rust
/// # use yail::repeat::try_cycles;
/// assert!(try_cycles([1], 3_u8).is_ok());
/// assert!(try_cycles([1], -3_i8).is_err());
/// ```
pub fn try_cycles<I, C>(seq: I, n: C) -> Result<Cycles<I::IntoIter>, SequenceError>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    C: IntoCount,
{
    let passes = n.try_into_count()?;
    if passes.is_unbounded() {
        log::debug!("cycles: creating an unbounded producer");
    }
    let iter = seq.into_iter();
    Ok(Cycles {
        orig: iter.clone(),
        iter,
        passes,
        yielded: false,
    })
}

impl<I> Iterator for Cycles<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.passes.is_zero() {
                return None;
            }
            if let Some(item) = self.iter.next() {
                self.yielded = true;
                return Some(item);
            }
            if !self.yielded {
                // A pass that yields nothing means every replay is empty.
                self.passes = Count::ZERO;
                return None;
            }
            self.passes.take_one();
            if self.passes.is_zero() {
                return None;
            }
            log::trace!("cycles: starting pass, remaining passes: {}", self.passes);
            self.iter = self.orig.clone();
            self.yielded = false;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.passes {
            Count::Finite(0) => (0, Some(0)),
            Count::Finite(passes) => {
                let rest = passes - 1;
                let (lo, hi) = self.iter.size_hint();
                let (orig_lo, orig_hi) = self.orig.size_hint();
                let lo = lo.saturating_add(orig_lo.saturating_mul(rest));
                let hi = hi.and_then(|hi| {
                    orig_hi
                        .and_then(|orig_hi| orig_hi.checked_mul(rest))
                        .and_then(|replays| hi.checked_add(replays))
                });
                (lo, hi)
            }
            Count::Unbounded => match self.orig.size_hint() {
                empty @ (0, Some(0)) => empty,
                (0, _) => (0, None),
                _ => (usize::MAX, None),
            },
        }
    }
}

impl<I> FusedIterator for Cycles<I> where I: Iterator + Clone {}

/// Iterator returned by [`duplicate`].
#[derive(Debug, Clone)]
pub struct Duplicate<I>
where
    I: Iterator,
{
    iter: I,
    n: usize,
    current: Option<RepeatN<I::Item>>,
}

/// Emits every element of `seq` `n` times in a row before moving on.
///
/// Works on infinite sources. `n = 0` yields nothing and never pulls `seq`.
///
/// # Panics
///
/// Panics if `n` is negative, does not fit into `usize`, or is
/// [`Count::Unbounded`].
///
/// # Examples
///
/// ```rust
/// # use yail::repeat::duplicate;
/// assert_eq!(duplicate([1, 2, 3], 2).collect::<Vec<_>>(), vec![1, 1, 2, 2, 3, 3]);
/// ```
#[inline]
#[track_caller]
pub fn duplicate<I, C>(seq: I, n: C) -> Duplicate<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
    C: IntoCount,
{
    expect_valid(try_duplicate(seq, n))
}

/// Fallible variant of [`duplicate`].
pub fn try_duplicate<I, C>(seq: I, n: C) -> Result<Duplicate<I::IntoIter>, SequenceError>
where
    I: IntoIterator,
    I::Item: Clone,
    C: IntoCount,
{
    let n = try_finite(n, "n")?;
    Ok(Duplicate {
        iter: seq.into_iter(),
        n,
        current: None,
    })
}

impl<I> Iterator for Duplicate<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n == 0 {
            return None;
        }
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            let item = self.iter.next()?;
            self.current = Some(itertools::repeat_n(item, self.n));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.n == 0 {
            return (0, Some(0));
        }
        let pending = self.current.as_ref().map_or(0, |r| r.size_hint().0);
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_mul(self.n).saturating_add(pending);
        let hi = hi
            .and_then(|hi| hi.checked_mul(self.n))
            .and_then(|hi| hi.checked_add(pending));
        (lo, hi)
    }
}

impl<I> FusedIterator for Duplicate<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

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

//! # Sliding Windows
//!
//! Overlapping fixed-size windows over a sequence. [`sliding_window`] is the
//! plain primitive; [`sliding_window_filled`] first pads the sequence with
//! `n - 1` fill values on either or both ends, so that every element also
//! appears at the leading or trailing edge of a window.
//!
//! Window sizes are chosen at runtime, so windows are emitted as `Vec`s.
//! A window always has exactly `n` elements; a sequence shorter than `n`
//! yields no windows at all.
//!
//! ```rust
//! use yail::window::sliding_window_filled;
//!
//! let windows: Vec<_> = sliding_window_filled((0..3).map(Some), 2, true, true, None).collect();
//! assert_eq!(
//!     windows,
//!     vec![
//!         vec![None, Some(0)],
//!         vec![Some(0), Some(1)],
//!         vec![Some(1), Some(2)],
//!         vec![Some(2), None],
//!     ]
//! );
//! ```

use crate::error::{SequenceError, expect_valid};
use crate::pad::{Pad, try_pad};
use std::collections::VecDeque;
use std::iter::{Fuse, FusedIterator};

/// Iterator over overlapping windows of a fixed size.
#[derive(Debug, Clone)]
pub struct SlidingWindow<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    size: usize,
    buffer: VecDeque<I::Item>,
    done: bool,
}

/// Windows over a padded sequence, see [`sliding_window_filled`].
pub type SlidingWindowFilled<I> = SlidingWindow<Pad<I>>;

/// Creates overlapping windows of `n` consecutive elements of `seq`.
///
/// Lazy: the first window pulls `n` elements, each later window one more.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Examples
///
/// ```rust
/// # use yail::window::sliding_window;
/// let w: Vec<_> = sliding_window(1..5, 3).collect();
/// assert_eq!(w, vec![vec![1, 2, 3], vec![2, 3, 4]]);
/// assert_eq!(sliding_window(1..3, 3).count(), 0);
/// ```
#[inline]
#[track_caller]
pub fn sliding_window<I>(seq: I, n: usize) -> SlidingWindow<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    expect_valid(try_sliding_window(seq, n))
}

/// Fallible variant of [`sliding_window`].
pub fn try_sliding_window<I>(seq: I, n: usize) -> Result<SlidingWindow<I::IntoIter>, SequenceError>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if n == 0 {
        return Err(SequenceError::ZeroWindow);
    }
    Ok(SlidingWindow {
        iter: seq.into_iter().fuse(),
        size: n,
        buffer: VecDeque::with_capacity(n),
        done: false,
    })
}

/// Creates windows of size `n` over `seq`, optionally padded with `fill`.
///
/// `pad_before` prepends and `pad_after` appends `n - 1` copies of `fill`.
/// Without padding a sequence of length `len >= n` yields `len - n + 1`
/// windows.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Examples
///
/// ```rust
/// # use yail::window::sliding_window_filled;
/// let w: Vec<_> = sliding_window_filled(0..5, 2, false, true, -1).collect();
/// assert_eq!(w.last(), Some(&vec![4, -1]));
/// assert_eq!(w.len(), 5);
/// ```
#[inline]
#[track_caller]
pub fn sliding_window_filled<I>(
    seq: I,
    n: usize,
    pad_before: bool,
    pad_after: bool,
    fill: I::Item,
) -> SlidingWindowFilled<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    expect_valid(try_sliding_window_filled(
        seq, n, pad_before, pad_after, fill,
    ))
}

/// Fallible variant of [`sliding_window_filled`].
pub fn try_sliding_window_filled<I>(
    seq: I,
    n: usize,
    pad_before: bool,
    pad_after: bool,
    fill: I::Item,
) -> Result<SlidingWindowFilled<I::IntoIter>, SequenceError>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if n == 0 {
        return Err(SequenceError::ZeroWindow);
    }
    let extent = |enabled: bool| if enabled { n - 1 } else { 0 };
    log::trace!(
        "sliding_window_filled: n = {n}, pad_before = {pad_before}, pad_after = {pad_after}"
    );
    let padded = try_pad(seq, extent(pad_before), extent(pad_after), fill)?;
    try_sliding_window(padded, n)
}

impl<I> SlidingWindow<I>
where
    I: Iterator,
{
    /// Returns the window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.size
    }

    #[inline]
    fn finish(&mut self) -> Option<Vec<I::Item>> {
        self.done = true;
        self.buffer.clear();
        None
    }
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.buffer.len() < self.size {
            while self.buffer.len() < self.size {
                match self.iter.next() {
                    Some(item) => self.buffer.push_back(item),
                    None => return self.finish(),
                }
            }
        } else {
            match self.iter.next() {
                Some(item) => {
                    self.buffer.pop_front();
                    self.buffer.push_back(item);
                }
                None => return self.finish(),
            }
        }
        Some(self.buffer.iter().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        if self.buffer.len() == self.size {
            return (lo, hi);
        }
        // Elements still needed before the first window is complete.
        let need = self.size - self.buffer.len();
        let windows = |len: usize| len.checked_sub(need).map_or(0, |rest| rest + 1);
        (windows(lo), hi.map(windows))
    }
}

impl<I> FusedIterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

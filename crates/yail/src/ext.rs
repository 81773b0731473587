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

//! # Method Syntax
//!
//! [`SequenceExt`] exposes the producers as iterator adaptors so they chain
//! with the standard library ones. Each method has exactly the contract of
//! the free function of the same name, including eager validation.
//!
//! ```rust
//! use yail::SequenceExt;
//!
//! let out: Vec<i32> = [1, 2].into_iter().duplicate(2).cycles(2).collect();
//! assert_eq!(out, vec![1, 1, 2, 2, 1, 1, 2, 2]);
//! ```

use crate::count::IntoCount;
use crate::pad::{Pad, pad};
use crate::repeat::{Cycles, Duplicate, cycles, duplicate};
use crate::window::{SlidingWindow, SlidingWindowFilled, sliding_window, sliding_window_filled};

/// Extension methods for every [`Iterator`].
pub trait SequenceExt: Iterator + Sized {
    /// See [`cycles`](crate::repeat::cycles).
    #[track_caller]
    fn cycles<C>(self, n: C) -> Cycles<Self>
    where
        Self: Clone,
        C: IntoCount,
    {
        cycles(self, n)
    }

    /// See [`duplicate`](crate::repeat::duplicate).
    #[track_caller]
    fn duplicate<C>(self, n: C) -> Duplicate<Self>
    where
        Self::Item: Clone,
        C: IntoCount,
    {
        duplicate(self, n)
    }

    /// See [`pad`](crate::pad::pad).
    #[track_caller]
    fn pad<B, A>(self, before: B, after: A, fill: Self::Item) -> Pad<Self>
    where
        Self::Item: Clone,
        B: IntoCount,
        A: IntoCount,
    {
        pad(self, before, after, fill)
    }

    /// See [`sliding_window`](crate::window::sliding_window).
    #[track_caller]
    fn sliding_window(self, n: usize) -> SlidingWindow<Self>
    where
        Self::Item: Clone,
    {
        sliding_window(self, n)
    }

    /// See [`sliding_window_filled`](crate::window::sliding_window_filled).
    #[track_caller]
    fn sliding_window_filled(
        self,
        n: usize,
        pad_before: bool,
        pad_after: bool,
        fill: Self::Item,
    ) -> SlidingWindowFilled<Self>
    where
        Self::Item: Clone,
    {
        sliding_window_filled(self, n, pad_before, pad_after, fill)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::SequenceExt;
    use crate::count::Count;

    #[test]
    fn test_chained_adaptors() {
        let out: Vec<Vec<i32>> = (1..=3).duplicate(2).sliding_window(3).collect();
        assert_eq!(
            out,
            vec![
                vec![1, 1, 2],
                vec![1, 2, 2],
                vec![2, 2, 3],
                vec![2, 3, 3]
            ]
        );
    }

    #[test]
    fn test_pad_then_cycle() {
        let out: Vec<i32> = [5].into_iter().pad(1, 1, 0).cycles(2).collect();
        assert_eq!(out, vec![0, 5, 0, 0, 5, 0]);
    }

    #[test]
    fn test_unbounded_cycles_method() {
        let out: Vec<char> = "ab".chars().cycles(Count::Unbounded).take(5).collect();
        assert_eq!(out, vec!['a', 'b', 'a', 'b', 'a']);
    }

    #[test]
    fn test_sliding_window_filled_method() {
        let out: Vec<Vec<u8>> = [1_u8, 2].into_iter().sliding_window_filled(2, true, false, 0).collect();
        assert_eq!(out, vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    #[should_panic(expected = "n must be non-negative")]
    fn test_method_validation_matches_free_function() {
        let _ = [1].into_iter().duplicate(-1);
    }
}

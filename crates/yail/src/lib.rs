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

//! # yail
//!
//! Yet another iterator library: small, lazy sequence producers that fill
//! the gaps between `std::iter` and `itertools`. Every producer is a plain
//! `Iterator`, computes elements on demand, and validates its arguments
//! when it is created rather than on the first pull.
//!
//! ## Modules
//!
//! - `basic`: `generator` (pass-through wrapper), `empty`, `single`.
//! - `repeat`: `cycles` (repeat a whole sequence `n` times or forever) and
//!   `duplicate` (repeat each element `n` times).
//! - `pad`: surround a sequence with a fill value, finitely or forever.
//! - `window`: runtime-sized sliding windows, optionally padded at the edges.
//! - `index`: row-major iteration over all multi-indices of a shape.
//! - `range`: `StepRange` and splitting a range into stepped sub-ranges.
//! - `count`: the `Count` argument, finite or unbounded.
//! - `error`: `SequenceError`, returned by the `try_*` factories.
//! - `ext`: `SequenceExt`, the producers in method position.
//!
//! ## Example
//!
//! ```rust
//! use yail::{Count, cycles, duplicate, pad, subrange_stepped};
//!
//! assert_eq!(cycles([1, 2, 3], 2).collect::<Vec<_>>(), vec![1, 2, 3, 1, 2, 3]);
//! assert_eq!(duplicate([1, 2, 3], 2).collect::<Vec<_>>(), vec![1, 1, 2, 2, 3, 3]);
//! assert_eq!(pad([1, 2, 3], 1, 2, 0).collect::<Vec<_>>(), vec![0, 1, 2, 3, 0, 0]);
//!
//! let endless: Vec<_> = pad([1], Count::Unbounded, 0, 0).take(3).collect();
//! assert_eq!(endless, vec![0, 0, 0]);
//!
//! let chunks: Vec<Vec<i32>> = subrange_stepped(0, 12, 3, 2).map(|r| r.iter().collect()).collect();
//! assert_eq!(chunks, vec![vec![0, 2], vec![3, 5], vec![6, 8], vec![9, 11]]);
//! ```
//!
//! ## Infinite producers
//!
//! `cycles` with `Count::Unbounded` and `pad` with an unbounded extent never
//! stop on their own. Bound them with `take`, `zip` or similar adaptors.

pub mod basic;
pub mod count;
pub mod error;
pub mod ext;
pub mod index;
pub mod pad;
pub mod range;
pub mod repeat;
pub mod window;

pub use basic::{Generator, empty, generator, single};
pub use count::{Count, IntoCount};
pub use error::SequenceError;
pub use ext::SequenceExt;
pub use index::{Index, Indices, indices};
pub use pad::{Pad, pad, try_pad};
pub use range::{StepRange, Subranges, subrange, subrange_stepped, try_subrange_stepped};
pub use repeat::{Cycles, Duplicate, cycles, duplicate, try_cycles, try_duplicate};
pub use window::{
    SlidingWindow, SlidingWindowFilled, sliding_window, sliding_window_filled,
    try_sliding_window, try_sliding_window_filled,
};

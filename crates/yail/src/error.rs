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

//! # Precondition Errors
//!
//! Argument validation for the sequence factories. Every panicking factory
//! (`cycles`, `duplicate`, `pad`, `sliding_window_filled`, ...) validates its
//! arguments before the lazy producer is returned and panics with the
//! `Display` text of a [`SequenceError`]. The matching `try_*` factories
//! return the error instead, for callers that forward untrusted input.
//!
//! Running out of elements is never an error: exhausted producers simply
//! return `None` from `Iterator::next`.

use std::fmt::Display;

/// An invalid argument passed to one of the sequence factories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A repeat or padding count was negative.
    NegativeCount {
        /// The rejected value.
        value: i128,
    },
    /// A count does not fit into `usize`.
    CountOverflow {
        /// The rejected value.
        value: u128,
    },
    /// `Count::Unbounded` was passed where only finite counts are allowed.
    UnboundedCount {
        /// The parameter that received the unbounded count.
        name: &'static str,
    },
    /// A window size of zero was requested.
    ZeroWindow,
    /// A range step was zero or negative.
    NonPositiveStep {
        /// The parameter that received the step (`step` or `substep`).
        name: &'static str,
    },
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeCount { value } => {
                write!(f, "n must be non-negative, but got n = {value}")
            }
            Self::CountOverflow { value } => {
                write!(f, "n must fit into usize, but got n = {value}")
            }
            Self::UnboundedCount { name } => {
                write!(f, "{name} must be a finite count, but got an unbounded count")
            }
            Self::ZeroWindow => write!(f, "window size must be positive, but got n = 0"),
            Self::NonPositiveStep { name } => write!(f, "{name} must be positive"),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Unwraps a validated argument or panics with the error message.
///
/// Used by the panicking factories so that validation logic lives in one place.
#[inline]
#[track_caller]
pub(crate) fn expect_valid<T>(result: Result<T, SequenceError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

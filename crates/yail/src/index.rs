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

//! # Index Products
//!
//! Iterates over every multi-index of a shape, the Cartesian product of
//! `0..s` for each size `s`, in row-major order (last index fastest),
//! matching a set of nested loops with the last dimension innermost.
//!
//! ```rust
//! use yail::indices;
//!
//! let all: Vec<Vec<usize>> = indices![3, 2].map(|ix| ix.to_vec()).collect();
//! assert_eq!(
//!     all,
//!     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1], vec![2, 0], vec![2, 1]]
//! );
//! ```
//!
//! A shape without dimensions has exactly one (empty) index; a shape with a
//! zero-sized dimension has none.

use smallvec::SmallVec;
use std::iter::FusedIterator;

/// A multi-index. Shapes of up to four dimensions stay on the stack.
pub type Index = SmallVec<usize, 4>;

/// Iterator returned by [`indices`].
#[derive(Debug, Clone)]
pub struct Indices {
    sizes: Index,
    next: Option<Index>,
    /// `None` when the total count overflows `usize`.
    remaining: Option<usize>,
}

/// Iterates over all indices of the shape given by `sizes`.
///
/// See also the variadic [`indices!`](crate::indices!) macro.
///
/// # Examples
///
/// ```rust
/// # use yail::index::indices;
/// assert_eq!(indices([2, 2, 2]).count(), 8);
/// assert_eq!(indices([4, 0, 3]).count(), 0);
/// assert_eq!(indices(std::iter::empty()).count(), 1);
/// ```
pub fn indices<S>(sizes: S) -> Indices
where
    S: IntoIterator<Item = usize>,
{
    let sizes: Index = sizes.into_iter().collect();
    let (next, remaining): (Option<Index>, Option<usize>) = if sizes.contains(&0) {
        (None, Some(0))
    } else {
        let remaining = sizes.iter().try_fold(1_usize, |acc, &s| acc.checked_mul(s));
        (Some(sizes.iter().map(|_| 0).collect()), remaining)
    };
    Indices {
        sizes,
        next,
        remaining,
    }
}

impl Indices {
    /// Returns the shape being iterated.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.sizes
    }

    /// Advances `index` to its row-major successor.
    ///
    /// Returns `false` when every digit wrapped around.
    #[inline]
    fn advance(&self, index: &mut Index) -> bool {
        for (digit, &size) in index.iter_mut().zip(self.sizes.iter()).rev() {
            *digit += 1;
            if *digit < size {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Indices {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if self.advance(&mut successor) {
            self.next = Some(successor);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Indices {}

/// Iterates over all indices of a shape given as separate sizes.
///
/// `indices![a, b, c]` is shorthand for `indices([a, b, c])`, and
/// `indices![]` yields the single empty index.
///
/// # Examples
///
/// ```rust
/// # use yail::indices;
/// let empty: Vec<_> = indices![].collect();
/// assert_eq!(empty.len(), 1);
/// assert!(empty[0].is_empty());
///
/// assert_eq!(indices![3].map(|ix| ix[0]).collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[macro_export]
macro_rules! indices {
    () => {
        $crate::index::indices(::core::iter::empty::<usize>())
    };
    ($($size:expr),+ $(,)?) => {
        $crate::index::indices([$($size),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(it: Indices) -> Vec<Vec<usize>> {
        it.map(|ix| ix.to_vec()).collect()
    }

    #[test]
    fn test_indices_row_major() {
        assert_eq!(
            collect(indices([3, 2])),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![1, 0],
                vec![1, 1],
                vec![2, 0],
                vec![2, 1]
            ]
        );
    }

    #[test]
    fn test_indices_no_dimensions() {
        assert_eq!(collect(indices(Vec::new())), vec![Vec::<usize>::new()]);
        assert_eq!(collect(crate::indices![]), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_indices_zero_size() {
        assert_eq!(indices([0]).next(), None);
        assert_eq!(indices([3, 0, 2]).count(), 0);
        assert_eq!(indices([3, 0]).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_indices_single_dimension() {
        assert_eq!(collect(indices([3])), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_indices_matches_nested_loops() {
        let mut expected = Vec::new();
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    expected.push(vec![i, j, k]);
                }
            }
        }
        assert_eq!(collect(crate::indices![2, 3, 4]), expected);
    }

    #[test]
    fn test_indices_more_dimensions_than_inline_capacity() {
        let all = collect(indices([2; 6]));
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], vec![0; 6]);
        assert_eq!(all[63], vec![1; 6]);
    }

    #[test]
    fn test_indices_size_hint() {
        let mut it = indices([2, 3]);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        assert_eq!(it.size_hint(), (5, Some(5)));
        assert_eq!(indices([usize::MAX, 2]).size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_indices_overflowing_shape_is_lazy() {
        let first: Vec<Vec<usize>> = indices([usize::MAX, usize::MAX])
            .take(2)
            .map(|ix| ix.to_vec())
            .collect();
        assert_eq!(first, vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_indices_fused() {
        let mut it = indices([1]);
        assert_eq!(it.next().map(|ix| ix.to_vec()), Some(vec![0]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_indices_shape() {
        assert_eq!(indices([4, 5]).shape(), &[4, 5]);
    }
}

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

//! # Basic Producers
//!
//! The leaf producers: a pass-through wrapper that turns any `IntoIterator`
//! into a lazy sequence, the empty sequence, and the one-element sequence.
//!
//! ## Usage
//!
//! ```rust
//! use yail::basic::{empty, generator, single};
//!
//! assert_eq!(generator(0..5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(empty::<i32>().next(), None);
//! assert_eq!(single('x').collect::<Vec<_>>(), vec!['x']);
//! ```

use std::iter::FusedIterator;

/// A lazy pass-through over another iterator.
///
/// Order and count are preserved exactly; `size_hint`, double-ended,
/// exact-size and fused behavior are forwarded from the source.
///
/// # Examples
///
/// ```rust
/// # use yail::basic::generator;
/// let mut g = generator(vec![1, 2, 3]);
/// assert_eq!(g.next(), Some(1));
/// assert_eq!(g.next_back(), Some(3));
/// assert_eq!(g.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<I> {
    inner: I,
}

impl<I> Generator<I> {
    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Creates a lazy sequence from anything iterable.
///
/// # Examples
///
/// ```rust
/// # use yail::basic::generator;
/// assert_eq!(generator("ab".chars()).collect::<String>(), "ab");
/// ```
#[inline]
pub fn generator<I>(source: I) -> Generator<I::IntoIter>
where
    I: IntoIterator,
{
    Generator {
        inner: source.into_iter(),
    }
}

impl<I: Iterator> Iterator for Generator<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> DoubleEndedIterator for Generator<I>
where
    I: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<I> ExactSizeIterator for Generator<I>
where
    I: ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<I> FusedIterator for Generator<I> where I: FusedIterator {}

/// Creates a sequence that is exhausted on the first pull.
///
/// # Examples
///
/// ```rust
/// # use yail::basic::empty;
/// assert_eq!(empty::<u8>().count(), 0);
/// ```
#[inline]
pub fn empty<T>() -> std::iter::Empty<T> {
    std::iter::empty()
}

/// Creates a sequence producing `value` exactly once.
///
/// # Examples
///
/// ```rust
/// # use yail::basic::single;
/// let mut s = single(1);
/// assert_eq!(s.next(), Some(1));
/// assert_eq!(s.next(), None);
/// ```
#[inline]
pub fn single<T>(value: T) -> std::iter::Once<T> {
    std::iter::once(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_preserves_order_and_count() {
        let g = generator(0..5);
        assert_eq!(g.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_generator_from_vec() {
        let data = vec!["a", "b", "c"];
        let mut g = generator(data);
        assert_eq!(g.next(), Some("a"));
        assert_eq!(g.next(), Some("b"));
        assert_eq!(g.next(), Some("c"));
        assert_eq!(g.next(), None);
    }

    #[test]
    fn test_generator_size_hint_and_len() {
        let mut g = generator(vec![1, 2, 3, 4]);
        assert_eq!(g.size_hint(), (4, Some(4)));
        g.next();
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_generator_double_ended() {
        let mut g = generator(1..4);
        assert_eq!(g.next(), Some(1));
        assert_eq!(g.next_back(), Some(3));
        assert_eq!(g.next(), Some(2));
        assert_eq!(g.next(), None);
    }

    #[test]
    fn test_generator_infinite_source() {
        // Only pulls what is requested
        let g = generator(std::iter::repeat(7));
        assert_eq!(g.take(3).collect::<Vec<_>>(), vec![7, 7, 7]);
    }

    #[test]
    fn test_generator_clone_is_independent() {
        let data = [1, 2, 3];
        let mut a = generator(data.iter());
        let b = a.clone();
        a.next();
        assert_eq!(b.count(), 3);
        assert_eq!(a.count(), 2);
    }

    #[test]
    fn test_generator_fused() {
        fn assert_fused<I: FusedIterator>(_: I) {}
        let mut g = generator(vec![1]);
        assert_eq!(g.next(), Some(1));
        assert_eq!(g.next(), None);
        assert_eq!(g.next(), None);
        assert_fused(g);
    }

    #[test]
    fn test_generator_into_inner() {
        let g = generator(vec![1, 2]);
        assert_eq!(g.into_inner().len(), 2);
    }

    #[test]
    fn test_empty() {
        let mut e = empty::<i32>();
        assert_eq!(e.next(), None);
        assert_eq!(empty::<i32>().collect::<Vec<_>>(), Vec::<i32>::new());
    }

    #[test]
    fn test_single() {
        assert_eq!(single(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(single("only").size_hint(), (1, Some(1)));
    }
}

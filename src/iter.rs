//! Borrowing iterator over buffered entries

use core::iter::FusedIterator;
use core::slice::ChunksExact;

/// Front-to-back iterator over the entries of a [`RingBuffer`](crate::RingBuffer)
///
/// 从前到后遍历 [`RingBuffer`](crate::RingBuffer) 条目的迭代器
///
/// Each item is one entry, `entry_size` slots long.
///
/// 每一项是一个条目，长度为 `entry_size` 个槽位。
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    front: ChunksExact<'a, T>,
    back: ChunksExact<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [T], back: &'a [T], entry_size: usize) -> Self {
        Self {
            front: front.chunks_exact(entry_size),
            back: back.chunks_exact(entry_size),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_both_halves() {
        let front = [1u8, 2, 3, 4];
        let back = [5u8, 6];
        let iter = Iter::new(&front, &back, 2);
        assert_eq!(iter.len(), 3);

        let entries: Vec<&[u8]> = iter.collect();
        assert_eq!(entries, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn test_iter_reversed() {
        let front = [1u32, 2];
        let back = [3u32];
        let reversed: Vec<u32> = Iter::new(&front, &back, 1).rev().map(|e| e[0]).collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }
}

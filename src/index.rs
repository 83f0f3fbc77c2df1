//! Core ring index arithmetic - shared by every entry width
//!
//! 核心环形索引运算 - 所有条目宽度共享
//!
//! This module holds the only non-trivial logic of the crate:
//! - Head/tail bookkeeping with an explicit free counter
//! - Wrap-around of indices at the storage boundary
//! - Splitting a bulk run into at most two contiguous segments
//!
//! 此模块包含本 crate 唯一的复杂逻辑：
//! - 带显式空闲计数器的头/尾索引管理
//! - 存储边界处的索引环绕
//! - 将批量区间拆分为最多两个连续段
//!
//! All indices here count entries, not storage slots. Callers scale ranges by
//! the entry stride with [`scale`] right before touching storage.
//!
//! 这里的所有索引都以条目计数，而不是存储槽位。调用者在访问存储前使用
//! [`scale`] 按条目步长缩放区间。

use core::ops::Range;

/// Head/tail state of a ring of `capacity` entries
///
/// 容量为 `capacity` 个条目的环的头/尾状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RingCore {
    /// Total entry slots, fixed at construction
    ///
    /// 条目槽位总数，构造时确定
    capacity: usize,

    /// Index of the oldest unread entry
    ///
    /// 最旧未读条目的索引
    head: usize,

    /// Index of the next write position
    ///
    /// 下一个写入位置的索引
    tail: usize,

    /// Unused slots. Kept explicitly so that `head == tail` is unambiguous.
    ///
    /// 未使用的槽位数。显式保存以区分 `head == tail` 时的空和满。
    free: usize,
}

/// A run of entries split at the storage boundary
///
/// 在存储边界处拆分的条目区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segments {
    /// Run starting at the requested index, up to the boundary at most
    ///
    /// 从请求索引开始、最多到边界的区间
    pub first: Range<usize>,

    /// Wrapped remainder starting at index 0, empty when no wrap happens
    ///
    /// 从索引 0 开始的环绕剩余部分，无环绕时为空
    pub second: Range<usize>,

    /// Index right after the run, already wrapped
    ///
    /// 区间之后的索引（已环绕）
    pub next: usize,
}

impl Segments {
    #[inline]
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }
}

impl RingCore {
    /// Create an empty core for `capacity` entries
    ///
    /// 为 `capacity` 个条目创建空的核心状态
    ///
    /// `capacity` must be non-zero; the buffer validates that before calling.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            head: 0,
            tail: 0,
            free: capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub fn free(&self) -> usize {
        self.free
    }

    /// Number of occupied entries
    ///
    /// 已占用的条目数量
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity - self.free
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free == self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// Move `index` forward by `count` entries, wrapping at the boundary
    ///
    /// 将 `index` 前移 `count` 个条目，在边界处环绕
    #[inline]
    pub fn advance(&self, index: usize, count: usize) -> usize {
        debug_assert!(index < self.capacity && count <= self.capacity);
        let first_run = self.capacity - index;
        if count < first_run {
            index + count
        } else {
            count - first_run
        }
    }

    /// Split a run of `count` entries starting at `start`
    ///
    /// 拆分从 `start` 开始的 `count` 个条目的区间
    ///
    /// When the distance to the boundary is at least `count` the run is a
    /// single contiguous segment. Otherwise the first segment ends at the
    /// boundary and the remainder restarts at index 0.
    ///
    /// 当到边界的距离不小于 `count` 时，区间是一个连续段。否则第一段在边界
    /// 处结束，剩余部分从索引 0 重新开始。
    pub fn segments(&self, start: usize, count: usize) -> Segments {
        debug_assert!(start < self.capacity);
        debug_assert!(count <= self.capacity);

        let first_run = self.capacity - start;
        if first_run >= count {
            // No wrap-around: single continuous run
            // 无环绕：单个连续区间
            let end = start + count;
            Segments {
                first: start..end,
                second: 0..0,
                next: if end == self.capacity { 0 } else { end },
            }
        } else {
            // Wrap-around: two runs
            // 环绕：两个区间
            let rest = count - first_run;
            Segments {
                first: start..self.capacity,
                second: 0..rest,
                next: rest,
            }
        }
    }

    /// Segments covering the `count` oldest entries
    ///
    /// 覆盖最旧的 `count` 个条目的区间
    #[inline]
    pub fn read_segments(&self, count: usize) -> Segments {
        self.segments(self.head, count)
    }

    /// Segments covering the next `count` free slots
    ///
    /// 覆盖接下来 `count` 个空闲槽位的区间
    #[inline]
    pub fn write_segments(&self, count: usize) -> Segments {
        self.segments(self.tail, count)
    }

    /// Record `count` entries as written
    ///
    /// 记录已写入 `count` 个条目
    ///
    /// Free space is consumed in one step together with the tail move.
    /// Caller must have checked `count <= free`.
    #[inline]
    pub fn commit_write(&mut self, count: usize) {
        debug_assert!(count <= self.free);
        self.free -= count;
        self.tail = self.advance(self.tail, count);
        self.check_invariants();
    }

    /// Record `count` entries as read
    ///
    /// 记录已读取 `count` 个条目
    ///
    /// Caller must have checked `count <= len()`.
    #[inline]
    pub fn commit_read(&mut self, count: usize) {
        debug_assert!(count <= self.len());
        self.free += count;
        self.head = self.advance(self.head, count);
        self.check_invariants();
    }

    /// Forget every entry and rewind both indices to 0
    ///
    /// 丢弃所有条目并将两个索引重置为 0
    #[inline]
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.free = self.capacity;
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.free <= self.capacity);
        debug_assert!(self.head < self.capacity && self.tail < self.capacity);
        let distance = if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.tail + (self.capacity - self.head)
        };
        debug_assert_eq!(distance, self.len() % self.capacity);
    }
}

/// Convert an entry range into a storage slot range
///
/// 将条目区间转换为存储槽位区间
///
/// Both ends are multiplied by the same stride, so a boundary segment is
/// always a whole number of entries regardless of width.
///
/// 两端乘以相同步长，因此无论宽度如何，边界段总是整数个条目。
#[inline(always)]
pub(crate) fn scale(range: Range<usize>, stride: usize) -> Range<usize> {
    range.start * stride..range.end * stride
}

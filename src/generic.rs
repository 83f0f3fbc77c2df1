//! Fixed-capacity FIFO over caller-supplied storage
//!
//! 基于调用者提供存储的固定容量 FIFO
//!
//! This module provides a single ring buffer implementation that serves every
//! entry width:
//! - Typed buffers (`u8`, `u16`, `u32`, any `Copy` type) with one slot per entry
//! - Byte-entry buffers where each entry spans `entry_size` bytes
//! - Non-overwrite discipline: writes are rejected when there is no room
//! - Bulk push/pop that wrap around the storage boundary in at most two copies
//!
//! 本模块提供一个服务所有条目宽度的环形缓冲区实现：
//! - 每个条目占一个槽位的类型化缓冲区（`u8`、`u16`、`u32` 或任意 `Copy` 类型）
//! - 每个条目占 `entry_size` 字节的字节条目缓冲区
//! - 非覆盖策略：空间不足时拒绝写入
//! - 在存储边界处环绕的批量推送/弹出，最多两次拷贝

use crate::config::FifoConfig;
use crate::error::{FifoError, FifoResult};
use crate::index::{RingCore, Segments, scale};
use crate::iter::Iter;
use crate::storage::Storage;
use log::{debug, trace};

/// Fixed-capacity FIFO ring buffer
///
/// 固定容量的 FIFO 环形缓冲区
///
/// # Type Parameters
/// - `S`: Backing storage, see [`Storage`]. The slot type is `S::Item`.
///
/// # 类型参数
/// - `S`: 底层存储，参见 [`Storage`]。槽位类型为 `S::Item`。
///
/// # Concurrency
///
/// Every mutating method takes `&mut self`, so the single-producer /
/// single-consumer discipline is enforced by the borrow checker instead of
/// being left to platform atomicity. The buffer is `Send` whenever its storage
/// is; splitting it between an interrupt handler and a main loop needs an
/// external critical section.
///
/// # 并发
///
/// 所有修改操作都需要 `&mut self`，因此单生产者/单消费者约束由借用检查器保证，
/// 而不是依赖平台的原子性。只要存储是 `Send` 的，缓冲区就是 `Send` 的；
/// 在中断处理程序和主循环之间共享时需要外部临界区。
///
/// # Examples
///
/// ```
/// use fixedring::{FifoConfig, FifoError, RingBuffer};
///
/// let mut storage = [0u8; 4];
/// let mut fifo = RingBuffer::new(&mut storage[..], FifoConfig::default()).unwrap();
///
/// for value in 1..=4 {
///     fifo.push(value).unwrap();
/// }
/// assert_eq!(fifo.push(5), Err(FifoError::BufferFull));
///
/// assert_eq!(fifo.pop(), Ok(1));
/// fifo.push(5).unwrap();
///
/// let mut out = [0u8; 4];
/// fifo.pop_bulk(&mut out, 4).unwrap();
/// assert_eq!(out, [2, 3, 4, 5]);
/// assert!(fifo.is_empty());
/// ```
#[derive(Debug)]
pub struct RingBuffer<S: Storage> {
    /// Caller-supplied backing block
    ///
    /// 调用者提供的底层内存块
    storage: S,

    /// Head/tail/free bookkeeping in entry units
    ///
    /// 以条目为单位的头/尾/空闲计数
    core: RingCore,

    /// Slots per entry
    ///
    /// 每个条目占用的槽位数
    entry_size: usize,

    /// Exclusive end of the used storage region, `capacity * entry_size`
    ///
    /// 已用存储区域的结束位置（不含），即 `capacity * entry_size`
    limit: usize,

    zero_on_clear: bool,
}

impl<S: Storage> RingBuffer<S> {
    /// Bind a buffer to `storage` with an explicit capacity and entry size
    ///
    /// 以显式容量和条目大小将缓冲区绑定到 `storage`
    ///
    /// # Parameters
    /// - `storage`: Backing block, at least `capacity * entry_size` slots long
    /// - `capacity`: Number of entries the buffer holds
    /// - `entry_size`: Slots per entry (1 for typed buffers)
    /// - `config`: Zero-fill options
    ///
    /// # 参数
    /// - `storage`: 底层内存块，长度至少为 `capacity * entry_size` 个槽位
    /// - `capacity`: 缓冲区可容纳的条目数
    /// - `entry_size`: 每个条目的槽位数（类型化缓冲区为 1）
    /// - `config`: 填零选项
    ///
    /// # Errors
    ///
    /// `FifoError::InvalidArgument` if `capacity` or `entry_size` is zero, if
    /// `capacity * entry_size` overflows, or if `storage` is too short.
    ///
    /// # 错误
    ///
    /// 当 `capacity` 或 `entry_size` 为零、`capacity * entry_size` 溢出或
    /// `storage` 过短时返回 `FifoError::InvalidArgument`。
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::{FifoConfig, RingBuffer};
    ///
    /// // Three 4-byte entries in a 12-byte block
    /// let mut storage = [0xffu8; 12];
    /// let config = FifoConfig::default().with_clear_on_init(true);
    /// let fifo = RingBuffer::init(&mut storage[..], 3, 4, config).unwrap();
    /// assert_eq!(fifo.capacity(), 3);
    /// assert_eq!(fifo.entry_size(), 4);
    /// assert_eq!(fifo.into_storage(), &[0u8; 12][..]);
    /// ```
    pub fn init(
        mut storage: S,
        capacity: usize,
        entry_size: usize,
        config: FifoConfig,
    ) -> FifoResult<Self> {
        if capacity == 0 {
            trace!("ring buffer init rejected: zero capacity");
            return Err(FifoError::InvalidArgument("capacity must be non-zero"));
        }
        if entry_size == 0 {
            trace!("ring buffer init rejected: zero entry size");
            return Err(FifoError::InvalidArgument("entry size must be non-zero"));
        }
        let limit = capacity
            .checked_mul(entry_size)
            .ok_or(FifoError::InvalidArgument("capacity * entry size overflows"))?;
        let available = storage.slots().len();
        if available < limit {
            trace!("ring buffer init rejected: storage holds {available} slots, {limit} required");
            return Err(FifoError::InvalidArgument(
                "storage shorter than capacity * entry size",
            ));
        }

        if config.clear_on_init {
            storage.slots_mut()[..limit].fill(S::Item::default());
        }

        debug!(
            "ring buffer initialized: capacity={capacity}, entry_size={entry_size}, cleared={}",
            config.clear_on_init
        );

        Ok(Self {
            storage,
            core: RingCore::new(capacity),
            entry_size,
            limit,
            zero_on_clear: config.zero_on_clear,
        })
    }

    /// Bind a typed buffer using the whole of `storage`, one slot per entry
    ///
    /// 使用整个 `storage` 绑定类型化缓冲区，每个条目一个槽位
    ///
    /// # Errors
    ///
    /// `FifoError::InvalidArgument` if `storage` is empty.
    #[inline]
    pub fn new(storage: S, config: FifoConfig) -> FifoResult<Self> {
        let capacity = storage.slots().len();
        Self::init(storage, capacity, 1, config)
    }

    /// Bind an entry buffer fitting as many `entry_size` entries as `storage` allows
    ///
    /// 绑定条目缓冲区，容纳 `storage` 允许的最多 `entry_size` 大小的条目
    ///
    /// Trailing slots that do not form a whole entry are left unused.
    ///
    /// # Errors
    ///
    /// `FifoError::InvalidArgument` if `entry_size` is zero or larger than
    /// `storage`.
    pub fn with_entry_size(storage: S, entry_size: usize, config: FifoConfig) -> FifoResult<Self> {
        if entry_size == 0 {
            trace!("ring buffer init rejected: zero entry size");
            return Err(FifoError::InvalidArgument("entry size must be non-zero"));
        }
        let capacity = storage.slots().len() / entry_size;
        Self::init(storage, capacity, entry_size, config)
    }

    /// Get the capacity of the buffer in entries
    ///
    /// 获取缓冲区容量（以条目计）
    #[inline]
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    /// Get the number of slots one entry occupies
    ///
    /// 获取单个条目占用的槽位数
    #[inline]
    pub fn entry_size(&self) -> usize {
        self.entry_size
    }

    /// Get the number of entries currently in the buffer
    ///
    /// 获取缓冲区中当前的条目数量
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Get the number of entries that can still be pushed
    ///
    /// 获取仍可推送的条目数量
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.core.free()
    }

    /// Check if the buffer holds no entries
    ///
    /// 检查缓冲区是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Check if every entry slot is occupied
    ///
    /// 检查缓冲区是否已满
    #[inline]
    pub fn is_full(&self) -> bool {
        self.core.is_full()
    }

    /// Drop every entry and rewind the buffer
    ///
    /// 丢弃所有条目并重置缓冲区
    ///
    /// Head and tail go back to the start of storage and all capacity becomes
    /// free. With `zero_on_clear` (the default) the storage region is also
    /// filled with `Default::default()`. Calling it twice is the same as
    /// calling it once.
    ///
    /// 头尾索引回到存储起点，全部容量变为空闲。启用 `zero_on_clear`（默认）时
    /// 存储区域也会被填充为 `Default::default()`。连续调用两次与调用一次相同。
    pub fn clear(&mut self) {
        self.core.reset();
        if self.zero_on_clear {
            self.storage.slots_mut()[..self.limit].fill(S::Item::default());
        }
        debug!("ring buffer cleared: capacity={}", self.core.capacity());
    }

    /// Push one entry
    ///
    /// 推送一个条目
    ///
    /// # Errors
    ///
    /// - `FifoError::InvalidArgument` if `entry.len() != entry_size`
    /// - `FifoError::BufferFull` if no slot is free; nothing is overwritten
    ///
    /// # 错误
    ///
    /// - `entry.len() != entry_size` 时返回 `FifoError::InvalidArgument`
    /// - 没有空闲槽位时返回 `FifoError::BufferFull`，不会覆盖任何数据
    pub fn push_entry(&mut self, entry: &[S::Item]) -> FifoResult<()> {
        if entry.len() != self.entry_size {
            trace!(
                "push rejected: entry of {} slots, entry size is {}",
                entry.len(),
                self.entry_size
            );
            return Err(FifoError::InvalidArgument("entry length must equal entry size"));
        }
        if self.core.is_full() {
            trace!("push rejected: buffer full");
            return Err(FifoError::BufferFull);
        }

        let tail = self.core.tail();
        let range = scale(tail..tail + 1, self.entry_size);
        self.storage.slots_mut()[range].copy_from_slice(entry);
        self.core.commit_write(1);
        Ok(())
    }

    /// Pop the oldest entry into `out`
    ///
    /// 将最旧的条目弹出到 `out`
    ///
    /// # Errors
    ///
    /// - `FifoError::InvalidArgument` if `out.len() != entry_size`
    /// - `FifoError::BufferEmpty` if there is nothing to pop
    ///
    /// # 错误
    ///
    /// - `out.len() != entry_size` 时返回 `FifoError::InvalidArgument`
    /// - 没有可弹出的数据时返回 `FifoError::BufferEmpty`
    pub fn pop_entry(&mut self, out: &mut [S::Item]) -> FifoResult<()> {
        if out.len() != self.entry_size {
            trace!(
                "pop rejected: destination of {} slots, entry size is {}",
                out.len(),
                self.entry_size
            );
            return Err(FifoError::InvalidArgument(
                "destination length must equal entry size",
            ));
        }
        if self.core.is_empty() {
            trace!("pop rejected: buffer empty");
            return Err(FifoError::BufferEmpty);
        }

        let head = self.core.head();
        let range = scale(head..head + 1, self.entry_size);
        out.copy_from_slice(&self.storage.slots()[range]);
        self.core.commit_read(1);
        Ok(())
    }

    /// Push a single value into a one-slot-per-entry buffer
    ///
    /// 向每条目单槽位的缓冲区推送单个值
    ///
    /// # Errors
    ///
    /// `FifoError::InvalidArgument` on a buffer with `entry_size != 1`,
    /// `FifoError::BufferFull` when full.
    #[inline]
    pub fn push(&mut self, value: S::Item) -> FifoResult<()> {
        self.push_entry(core::slice::from_ref(&value))
    }

    /// Pop a single value from a one-slot-per-entry buffer
    ///
    /// 从每条目单槽位的缓冲区弹出单个值
    ///
    /// # Errors
    ///
    /// `FifoError::InvalidArgument` on a buffer with `entry_size != 1`,
    /// `FifoError::BufferEmpty` when empty.
    #[inline]
    pub fn pop(&mut self) -> FifoResult<S::Item> {
        let mut out = [S::Item::default()];
        self.pop_entry(&mut out)?;
        Ok(out[0])
    }

    /// Push `count` entries read from the front of `source`
    ///
    /// 从 `source` 开头读取 `count` 个条目并推送
    ///
    /// The run is copied starting at the tail. If it crosses the end of
    /// storage, the part up to the boundary is copied first and the rest lands
    /// at the start of storage. Free space is consumed before copying.
    ///
    /// 区间从尾部开始拷贝。如果跨越存储末尾，先拷贝到边界的部分，剩余部分
    /// 写入存储起点。拷贝前先扣减空闲空间。
    ///
    /// # Errors
    ///
    /// - `FifoError::ZeroLength` if `count == 0`
    /// - `FifoError::InvalidArgument` if `source` holds fewer than
    ///   `count * entry_size` slots
    /// - `FifoError::InsufficientSpace` if `count` exceeds the free entries
    ///
    /// # 错误
    ///
    /// - `count == 0` 时返回 `FifoError::ZeroLength`
    /// - `source` 少于 `count * entry_size` 个槽位时返回 `FifoError::InvalidArgument`
    /// - `count` 超过空闲条目数时返回 `FifoError::InsufficientSpace`
    pub fn push_bulk(&mut self, source: &[S::Item], count: usize) -> FifoResult<()> {
        let slots = self.bulk_slots(count, source.len(), "source")?;
        let free = self.core.free();
        if count > free {
            trace!("bulk push rejected: {count} entries requested, {free} free");
            return Err(FifoError::InsufficientSpace {
                requested: count,
                free,
            });
        }

        let segments = self.core.write_segments(count);
        self.core.commit_write(count);
        self.copy_in(&segments, &source[..slots]);
        Ok(())
    }

    /// Pop the `count` oldest entries into the front of `destination`
    ///
    /// 将最旧的 `count` 个条目弹出到 `destination` 开头
    ///
    /// Mirrors [`push_bulk`](Self::push_bulk) on the head side. The request is
    /// checked against the entries actually held, so stale slots are never
    /// read.
    ///
    /// 在头部一侧与 [`push_bulk`](Self::push_bulk) 对称。请求数量按实际持有的
    /// 条目数检查，因此不会读取过期槽位。
    ///
    /// # Errors
    ///
    /// - `FifoError::ZeroLength` if `count == 0`
    /// - `FifoError::InvalidArgument` if `destination` holds fewer than
    ///   `count * entry_size` slots
    /// - `FifoError::InsufficientData` if `count` exceeds [`len`](Self::len)
    pub fn pop_bulk(&mut self, destination: &mut [S::Item], count: usize) -> FifoResult<()> {
        let slots = self.bulk_slots(count, destination.len(), "destination")?;
        let available = self.core.len();
        if count > available {
            trace!("bulk pop rejected: {count} entries requested, {available} available");
            return Err(FifoError::InsufficientData {
                requested: count,
                available,
            });
        }

        let segments = self.core.read_segments(count);
        self.core.commit_read(count);
        self.copy_out(&segments, &mut destination[..slots]);
        Ok(())
    }

    /// Push every entry of `values`
    ///
    /// 推送 `values` 中的所有条目
    ///
    /// # Errors
    ///
    /// As [`push_bulk`](Self::push_bulk), plus `FifoError::InvalidArgument` if
    /// `values.len()` is not a multiple of the entry size.
    pub fn push_slice(&mut self, values: &[S::Item]) -> FifoResult<()> {
        let count = self.whole_entries(values.len())?;
        self.push_bulk(values, count)
    }

    /// Fill `dest` with the oldest entries
    ///
    /// 用最旧的条目填满 `dest`
    ///
    /// # Errors
    ///
    /// As [`pop_bulk`](Self::pop_bulk), plus `FifoError::InvalidArgument` if
    /// `dest.len()` is not a multiple of the entry size.
    pub fn pop_slice(&mut self, dest: &mut [S::Item]) -> FifoResult<()> {
        let count = self.whole_entries(dest.len())?;
        self.pop_bulk(dest, count)
    }

    /// Peek at the oldest entry without removing it
    ///
    /// 查看最旧的条目但不移除它
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::{EntryFifo, FifoConfig};
    ///
    /// let mut storage = [0u8; 6];
    /// let mut fifo = EntryFifo::with_entry_size(&mut storage[..], 2, FifoConfig::default()).unwrap();
    /// fifo.push_entry(&[0xab, 0xcd]).unwrap();
    /// assert_eq!(fifo.peek_entry(), Some(&[0xab, 0xcd][..]));
    /// assert_eq!(fifo.len(), 1);
    /// ```
    #[inline]
    pub fn peek_entry(&self) -> Option<&[S::Item]> {
        if self.core.is_empty() {
            return None;
        }
        let head = self.core.head();
        Some(&self.storage.slots()[scale(head..head + 1, self.entry_size)])
    }

    /// Peek at the first slot of the oldest entry
    ///
    /// 查看最旧条目的第一个槽位
    #[inline]
    pub fn peek(&self) -> Option<&S::Item> {
        self.peek_entry().and_then(|entry| entry.first())
    }

    /// Live data as at most two contiguous slices, oldest first
    ///
    /// 以最多两个连续切片返回有效数据，最旧的在前
    ///
    /// The second slice is empty unless the data wraps around the end of
    /// storage.
    ///
    /// 除非数据环绕存储末尾，否则第二个切片为空。
    pub fn as_slices(&self) -> (&[S::Item], &[S::Item]) {
        let segments = self.core.read_segments(self.core.len());
        let slots = &self.storage.slots()[..self.limit];
        (
            &slots[scale(segments.first, self.entry_size)],
            &slots[scale(segments.second, self.entry_size)],
        )
    }

    /// Iterate over the entries front to back without consuming them
    ///
    /// 从前到后遍历条目而不消费它们
    #[inline]
    pub fn iter(&self) -> Iter<'_, S::Item> {
        let (front, back) = self.as_slices();
        Iter::new(front, back, self.entry_size)
    }

    /// Release the buffer and hand the backing storage back to the caller
    ///
    /// 释放缓冲区并将底层存储归还给调用者
    #[inline]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Validate a bulk request and return its length in slots
    fn bulk_slots(&self, count: usize, provided: usize, what: &'static str) -> FifoResult<usize> {
        if count == 0 {
            trace!("bulk operation rejected: zero length");
            return Err(FifoError::ZeroLength);
        }
        match count.checked_mul(self.entry_size) {
            Some(slots) if slots <= provided => Ok(slots),
            _ => {
                trace!(
                    "bulk operation rejected: {what} holds {provided} slots, {count} entries of {} requested",
                    self.entry_size
                );
                Err(FifoError::InvalidArgument(
                    "caller slice shorter than count * entry size",
                ))
            }
        }
    }

    fn whole_entries(&self, slots: usize) -> FifoResult<usize> {
        if slots % self.entry_size != 0 {
            trace!(
                "slice of {slots} slots is not a multiple of entry size {}",
                self.entry_size
            );
            return Err(FifoError::InvalidArgument(
                "slice length must be a multiple of entry size",
            ));
        }
        Ok(slots / self.entry_size)
    }

    /// Copy `source` into storage along `segments`
    ///
    /// 沿 `segments` 将 `source` 拷贝到存储
    fn copy_in(&mut self, segments: &Segments, source: &[S::Item]) {
        debug_assert_eq!(segments.len() * self.entry_size, source.len());
        let first = scale(segments.first.clone(), self.entry_size);
        let second = scale(segments.second.clone(), self.entry_size);
        let (head_part, tail_part) = source.split_at(first.len());
        debug_assert_eq!(tail_part.len(), second.len());

        let slots = self.storage.slots_mut();
        slots[first].copy_from_slice(head_part);
        slots[second].copy_from_slice(tail_part);
    }

    /// Copy storage along `segments` into `dest`
    ///
    /// 沿 `segments` 将存储拷贝到 `dest`
    fn copy_out(&self, segments: &Segments, dest: &mut [S::Item]) {
        debug_assert_eq!(segments.len() * self.entry_size, dest.len());
        let first = scale(segments.first.clone(), self.entry_size);
        let second = scale(segments.second.clone(), self.entry_size);
        let (head_part, tail_part) = dest.split_at_mut(first.len());
        debug_assert_eq!(tail_part.len(), second.len());

        let slots = self.storage.slots();
        head_part.copy_from_slice(&slots[first]);
        tail_part.copy_from_slice(&slots[second]);
    }
}

impl<'a, S: Storage> IntoIterator for &'a RingBuffer<S> {
    type Item = &'a [S::Item];
    type IntoIter = Iter<'a, S::Item>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

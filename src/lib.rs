//! # Fixed-Capacity FIFO Ring Buffer
//!
//! 固定容量 FIFO 环形缓冲区
//!
//! `fixedring` is a bounded First-In-First-Out ring buffer for embedded and
//! resource-constrained targets. It never allocates: the caller supplies the
//! backing storage and gets it back when done.
//!
//! `fixedring` 是面向嵌入式和资源受限目标的有界先进先出环形缓冲区。
//! 它从不分配内存：由调用者提供底层存储，使用完毕后归还。
//!
//! ## Features
//!
//! 特性
//!
//! - **No Allocation** - Works on `&mut [T]`, `[T; N]` or any [`Storage`]
//! - **One Implementation** - Byte, half-word, word and arbitrary-size entries share one code path
//! - **Non-Overwrite** - Pushes fail when there is no room, unread data is never lost
//! - **Wrap-Aware Bulk Copy** - `push_bulk` / `pop_bulk` cross the storage boundary in at most two copies
//! - **`no_std`** - Only `core` is required; `alloc` adds `Vec` / `Box` storage
//!
//! - **无分配** - 适用于 `&mut [T]`、`[T; N]` 或任意 [`Storage`]
//! - **单一实现** - 字节、半字、字和任意大小条目共享同一代码路径
//! - **非覆盖** - 空间不足时推送失败，未读数据不会丢失
//! - **环绕感知批量拷贝** - `push_bulk` / `pop_bulk` 最多两次拷贝跨越存储边界
//! - **`no_std`** - 仅依赖 `core`；`alloc` 特性增加 `Vec` / `Box` 存储
//!
//! ## Quick Start
//!
//! 快速开始
//!
//! ```rust
//! use fixedring::{ByteFifo, FifoConfig, FifoError};
//!
//! let mut storage = [0u8; 4];
//! let mut fifo: ByteFifo = ByteFifo::new(&mut storage[..], FifoConfig::default()).unwrap();
//!
//! fifo.push(1).unwrap();
//! fifo.push(2).unwrap();
//! assert_eq!(fifo.pop(), Ok(1));
//! assert_eq!(fifo.len(), 1);
//! assert_eq!(fifo.free_slots(), 3);
//!
//! fifo.clear();
//! assert_eq!(fifo.pop(), Err(FifoError::BufferEmpty));
//! ```
//!
//! ## Entries Wider Than One Slot
//!
//! 宽于一个槽位的条目
//!
//! ```rust
//! use fixedring::{EntryFifo, FifoConfig};
//!
//! // 5 entries of 3 bytes each
//! // 5 个条目，每个 3 字节
//! let mut storage = [0u8; 15];
//! let mut fifo = EntryFifo::init(&mut storage[..], 5, 3, FifoConfig::default()).unwrap();
//!
//! fifo.push_bulk(&[1, 1, 1, 2, 2, 2], 2).unwrap();
//! fifo.push_entry(&[3, 3, 3]).unwrap();
//!
//! let mut entry = [0u8; 3];
//! fifo.pop_entry(&mut entry).unwrap();
//! assert_eq!(entry, [1, 1, 1]);
//!
//! let mut rest = [0u8; 6];
//! fifo.pop_bulk(&mut rest, 2).unwrap();
//! assert_eq!(rest, [2, 2, 2, 3, 3, 3]);
//! ```
//!
//! ## Error Handling
//!
//! 错误处理
//!
//! Every operation returns a [`FifoResult`]. Nothing waits and nothing is
//! retried; spinning until space or data appears is up to the caller.
//!
//! 所有操作都返回 [`FifoResult`]。不会等待也不会重试；是否轮询等待空间或数据
//! 由调用者决定。
//!
//! ## Notes
//!
//! 注意事项
//!
//! - Capacity is exactly what was requested; no rounding
//! - Mutation needs `&mut self`; share between contexts only behind a lock
//! - Failed operations leave the buffer unchanged
//!
//! - 容量与请求值完全一致，不做取整
//! - 修改操作需要 `&mut self`；跨上下文共享时必须加锁
//! - 失败的操作不会改变缓冲区

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod config;
mod error;
mod generic;
mod index;
mod iter;
mod storage;

#[cfg(test)]
mod tests;

pub use config::FifoConfig;
pub use error::{FifoError, FifoResult};
pub use generic::RingBuffer;
pub use iter::Iter;
pub use storage::Storage;

/// FIFO of `u8` values
///
/// `u8` 值的 FIFO
pub type ByteFifo<'a> = RingBuffer<&'a mut [u8]>;

/// FIFO of `u16` values
///
/// `u16` 值的 FIFO
pub type HalfWordFifo<'a> = RingBuffer<&'a mut [u16]>;

/// FIFO of `u32` values
///
/// `u32` 值的 FIFO
pub type WordFifo<'a> = RingBuffer<&'a mut [u32]>;

/// FIFO of fixed-size byte entries, built with an explicit entry size
///
/// 固定大小字节条目的 FIFO，使用显式条目大小构建
pub type EntryFifo<'a> = RingBuffer<&'a mut [u8]>;

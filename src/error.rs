//! Error taxonomy for ring buffer operations
//!
//! 环形缓冲区操作的错误类型
//!
//! Every failing precondition maps to exactly one variant. Nothing is retried
//! internally and nothing panics on caller input; a rejected operation leaves
//! the buffer untouched.
//!
//! 每个失败的前置条件都恰好对应一个变体。内部不做重试，也不会因调用者输入而
//! panic；被拒绝的操作不会修改缓冲区状态。

use thiserror::Error;

/// Result alias used by every fallible buffer operation
///
/// 所有可失败缓冲区操作使用的结果别名
pub type FifoResult<T, E = FifoError> = Result<T, E>;

/// Ring buffer operation error
///
/// 环形缓冲区操作错误
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FifoError {
    /// A construction parameter or a caller slice is unusable
    ///
    /// 构造参数或调用者提供的切片不可用
    ///
    /// Zero capacity, zero entry size, storage too short for
    /// `capacity * entry_size`, or a slice whose length does not match the
    /// entry stride.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Bulk operation requested with a count of zero
    ///
    /// 批量操作的数量为零
    #[error("bulk operation requested with zero length")]
    ZeroLength,

    /// Single push on a full buffer
    ///
    /// 缓冲区已满时推送单个元素
    #[error("buffer is full")]
    BufferFull,

    /// Single pop on an empty buffer
    ///
    /// 缓冲区为空时弹出单个元素
    #[error("buffer is empty")]
    BufferEmpty,

    /// Bulk push larger than the free space
    ///
    /// 批量推送超过剩余空间
    #[error("insufficient space: requested {requested} entries, {free} free")]
    InsufficientSpace { requested: usize, free: usize },

    /// Bulk pop larger than the data currently held
    ///
    /// 批量弹出超过当前可用数据
    #[error("insufficient data: requested {requested} entries, {available} available")]
    InsufficientData { requested: usize, available: usize },
}

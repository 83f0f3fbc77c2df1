//! Buffer construction options
//!
//! 缓冲区构造选项

/// Zero-fill behaviour applied at init and clear
///
/// 初始化和清空时的填零行为
///
/// # Examples
///
/// ```
/// use fixedring::FifoConfig;
///
/// let config = FifoConfig::default().with_clear_on_init(true);
/// assert!(config.clear_on_init);
/// assert!(config.zero_on_clear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoConfig {
    /// Fill the first `capacity * entry_size` slots with `Default::default()` during init
    ///
    /// 初始化时用 `Default::default()` 填充前 `capacity * entry_size` 个槽位
    pub clear_on_init: bool,

    /// Fill the first `capacity * entry_size` slots with `Default::default()` on `clear()`
    ///
    /// 调用 `clear()` 时用 `Default::default()` 填充前 `capacity * entry_size` 个槽位
    pub zero_on_clear: bool,
}

impl FifoConfig {
    /// Create the default configuration: no fill on init, zero-fill on clear
    ///
    /// 创建默认配置：初始化时不填充，清空时填零
    pub const fn new() -> Self {
        FifoConfig {
            clear_on_init: false,
            zero_on_clear: true,
        }
    }

    #[inline]
    pub const fn with_clear_on_init(mut self, clear_on_init: bool) -> Self {
        self.clear_on_init = clear_on_init;
        self
    }

    #[inline]
    pub const fn with_zero_on_clear(mut self, zero_on_clear: bool) -> Self {
        self.zero_on_clear = zero_on_clear;
        self
    }
}

impl Default for FifoConfig {
    fn default() -> Self {
        FifoConfig::new()
    }
}

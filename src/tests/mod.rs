//! Integration-style unit tests
//!
//! 集成风格的单元测试

mod entry;

/// Route `log` output through the test harness; safe to call repeatedly
///
/// 将 `log` 输出接入测试框架；可重复调用
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

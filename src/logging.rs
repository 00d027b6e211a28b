// ==========================================
// 表格导入配置 - 日志初始化
// ==========================================
// 事件来源: 策略标签写入（debug）、标签拒绝与序号冲突（warn）
// 级别: RUST_LOG 优先,否则只输出本库事件
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的过滤器
pub const DEFAULT_FILTER: &str = "sheet_import=info";

/// 测试使用的过滤器（含标签写入的 debug 事件）
pub const TEST_FILTER: &str = "sheet_import=debug";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 为宿主程序安装全局日志
///
/// # 返回
/// - true: 本次调用完成安装
/// - false: 进程内已有全局 subscriber,保持原样
///
/// # 示例
/// ```no_run
/// sheet_import::logging::init();
/// ```
pub fn init() -> bool {
    fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}

/// 初始化测试环境的日志（输出到测试捕获的 writer）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}

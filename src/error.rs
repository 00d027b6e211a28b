// ==========================================
// 表格导入配置 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入配置错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportConfigError {
    // ===== 策略标签错误 =====
    #[error("无效的{policy}标签: '{label}'")]
    InvalidPolicyLabel { policy: &'static str, label: String },

    // ===== 配置集合错误 =====
    #[error("工作表序号重复: {index}")]
    DuplicateSheetIndex { index: usize },

    #[error("工作表不存在: {index}")]
    SheetNotFound { index: usize },

    // ===== 默认配置错误 =====
    #[error("默认导入配置格式错误: {0}")]
    InvalidDefaults(String),

    #[error("默认导入配置读取失败: {0}")]
    DefaultsReadError(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportConfigError {
    fn from(err: std::io::Error) -> Self {
        ImportConfigError::DefaultsReadError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportConfigError {
    fn from(err: serde_json::Error) -> Self {
        ImportConfigError::InvalidDefaults(err.to_string())
    }
}

/// Result 类型别名
pub type ImportConfigResult<T> = Result<T, ImportConfigError>;

// ==========================================
// 表格导入配置 - 核心库
// ==========================================
// 职责: 多工作表导入时的逐表配置
// - 是否导入、目标表名
// - 目标表已存在策略 / 类型转换失败策略
// - 策略枚举 ↔ 显示标签 的双向转换
// 不包含: 表格文件解析、建表与写入、界面绑定
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 配置记录与策略
pub mod domain;

// 配置层 - 默认导入配置
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::ImportDefaults;
pub use domain::{
    label_of, labels, member_of, ConversionFailPolicy, PolicyLabel, SheetImportConfig,
    SheetImportSet, TableExistsPolicy,
};
pub use error::{ImportConfigError, ImportConfigResult};

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

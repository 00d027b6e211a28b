// ==========================================
// 表格导入配置 - 配置层
// ==========================================
// 职责: 新发现工作表的默认导入配置
// ==========================================

pub mod import_defaults;

pub use import_defaults::ImportDefaults;

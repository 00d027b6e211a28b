// ==========================================
// 表格导入配置 - 领域层
// ==========================================
// 职责: 工作表导入配置、导入策略及其显示标签
// ==========================================

pub mod policy;
pub mod sheet_config;
pub mod sheet_set;

pub use policy::{
    label_of, labels, member_of, ConversionFailPolicy, PolicyLabel, TableExistsPolicy,
};
pub use sheet_config::SheetImportConfig;
pub use sheet_set::SheetImportSet;

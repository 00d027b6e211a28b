// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的工作簿配置样例
// ==========================================

#![allow(dead_code)]

use sheet_import::{ImportDefaults, SheetImportSet};

/// 样例工作簿的工作表名称（按工作簿顺序）
pub const SAMPLE_SHEETS: [&str; 3] = ["Customers", "Orders", "Notes"];

/// 按默认配置创建样例配置集合
pub fn sample_set() -> SheetImportSet {
    sheet_import::logging::init_test();
    SheetImportSet::from_sheet_names(SAMPLE_SHEETS, &ImportDefaults::default())
}

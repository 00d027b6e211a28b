// ==========================================
// 表格导入配置 - 单个工作表导入配置
// ==========================================
// 职责: 记录单个工作表是否导入、目标表名及两项导入策略
// 生命周期: 发现工作表时创建 → 编辑界面修改 → 导入执行时只读
// 红线: 本结构只保存策略,不负责执行冲突处理
// ==========================================

use crate::config::ImportDefaults;
use crate::domain::policy::{label_of, member_of, ConversionFailPolicy, TableExistsPolicy};
use crate::error::ImportConfigResult;
use serde::{Deserialize, Serialize};

// ==========================================
// SheetImportConfig - 工作表导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SheetImportConfig {
    /// 工作表在工作簿中的序号（从 0 开始）
    pub index: usize,

    /// 工作表原始名称
    pub original_name: String,

    /// 导入后的目标表名
    pub new_name: String,

    /// 是否导入该工作表
    pub to_be_imported: bool,

    /// 目标表已存在策略（默认: 删除并重建）
    #[serde(default)]
    pub table_exists: TableExistsPolicy,

    /// 类型转换失败策略（默认: 终止导入）
    #[serde(default)]
    pub conversion_fail: ConversionFailPolicy,
}

impl SheetImportConfig {
    /// 创建工作表配置
    ///
    /// 目标表名初始与原始名称相同,默认不勾选导入,策略取默认值
    pub fn new(index: usize, original_name: impl Into<String>) -> Self {
        let original_name = original_name.into();
        Self {
            index,
            new_name: original_name.clone(),
            original_name,
            to_be_imported: false,
            table_exists: TableExistsPolicy::default(),
            conversion_fail: ConversionFailPolicy::default(),
        }
    }

    /// 按默认导入配置创建工作表配置
    pub fn with_defaults(
        index: usize,
        original_name: impl Into<String>,
        defaults: &ImportDefaults,
    ) -> Self {
        Self {
            to_be_imported: defaults.import_by_default,
            table_exists: defaults.table_exists,
            conversion_fail: defaults.conversion_fail,
            ..Self::new(index, original_name)
        }
    }

    // ===== 目标表已存在策略 =====

    /// 当前目标表已存在策略的显示标签
    pub fn table_exists_label(&self) -> &'static str {
        label_of(self.table_exists)
    }

    /// 按显示标签设置目标表已存在策略
    ///
    /// # 返回
    /// - Err(InvalidPolicyLabel): 标签未知,字段保持不变
    pub fn set_table_exists_label(&mut self, label: &str) -> ImportConfigResult<()> {
        match member_of::<TableExistsPolicy>(label) {
            Ok(policy) => {
                tracing::debug!(sheet = %self.original_name, label, "目标表已存在策略已更新");
                self.table_exists = policy;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(sheet = %self.original_name, "{}", e);
                Err(e)
            }
        }
    }

    // ===== 类型转换失败策略 =====

    /// 当前类型转换失败策略的显示标签
    pub fn conversion_fail_label(&self) -> &'static str {
        label_of(self.conversion_fail)
    }

    /// 按显示标签设置类型转换失败策略
    ///
    /// # 返回
    /// - Err(InvalidPolicyLabel): 标签未知,字段保持不变
    pub fn set_conversion_fail_label(&mut self, label: &str) -> ImportConfigResult<()> {
        match member_of::<ConversionFailPolicy>(label) {
            Ok(policy) => {
                tracing::debug!(sheet = %self.original_name, label, "类型转换失败策略已更新");
                self.conversion_fail = policy;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(sheet = %self.original_name, "{}", e);
                Err(e)
            }
        }
    }
}

// ==========================================
// 表格导入配置 - 默认导入配置
// ==========================================
// 职责: 新发现工作表的初始配置（是否导入 + 两项策略）
// 存储: JSON（策略以标签文本保存）
// ==========================================

use crate::domain::policy::{ConversionFailPolicy, TableExistsPolicy};
use crate::error::ImportConfigResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_import_by_default() -> bool {
    true
}

/// 默认导入配置
///
/// 缺省字段按以下默认值补齐:
/// - import_by_default: true
/// - table_exists: Drop table and recreate
/// - conversion_fail: Stop import with error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDefaults {
    /// 新发现的工作表是否默认勾选导入
    #[serde(default = "default_import_by_default")]
    pub import_by_default: bool,

    /// 目标表已存在策略
    #[serde(default)]
    pub table_exists: TableExistsPolicy,

    /// 类型转换失败策略
    #[serde(default)]
    pub conversion_fail: ConversionFailPolicy,
}

impl Default for ImportDefaults {
    fn default() -> Self {
        Self {
            import_by_default: default_import_by_default(),
            table_exists: TableExistsPolicy::default(),
            conversion_fail: ConversionFailPolicy::default(),
        }
    }
}

impl ImportDefaults {
    /// 从 JSON 文本解析
    ///
    /// # 返回
    /// - Err(InvalidDefaults): JSON 格式错误或策略标签未知
    pub fn from_json_str(raw: &str) -> ImportConfigResult<Self> {
        let defaults: ImportDefaults = serde_json::from_str(raw)?;
        tracing::debug!(?defaults, "默认导入配置已加载");
        Ok(defaults)
    }

    /// 从 JSON 文件读取
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportConfigResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// 序列化为 JSON 文本
    pub fn to_json_string(&self) -> ImportConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

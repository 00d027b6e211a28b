// ==========================================
// 表格导入配置 - 导入策略枚举
// ==========================================
// 职责: 目标表已存在策略 / 类型转换失败策略
// 红线: 标签文本是已保存导入任务与界面下拉框的契约,不得改动
// ==========================================

use crate::error::{ImportConfigError, ImportConfigResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ==========================================
// PolicyLabel - 成员 ↔ 标签 对照表
// ==========================================
/// 枚举策略与显示标签之间的静态双向映射
///
/// 两个策略字段的标签读写都经由 `LABELS`,不存在第二份文本。
/// 仅本模块内的策略枚举可实现。
pub trait PolicyLabel: sealed::Sealed + Copy + PartialEq + Sized + 'static {
    /// 策略名称（用于错误信息）
    const POLICY_NAME: &'static str;

    /// 成员与标签的对照表（每个成员恰好出现一次）
    const LABELS: &'static [(Self, &'static str)];
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::TableExistsPolicy {}
    impl Sealed for super::ConversionFailPolicy {}
}

/// 取成员对应的标签
pub fn label_of<P: PolicyLabel>(member: P) -> &'static str {
    P::LABELS
        .iter()
        .find(|(known, _)| *known == member)
        .map(|(_, label)| *label)
        .unwrap_or_default()
}

/// 按标签查找成员（精确匹配,区分大小写）
///
/// # 返回
/// - Ok(P): 匹配到的成员
/// - Err(InvalidPolicyLabel): 标签不在对照表中
pub fn member_of<P: PolicyLabel>(label: &str) -> ImportConfigResult<P> {
    P::LABELS
        .iter()
        .find(|(_, known)| *known == label)
        .map(|(member, _)| *member)
        .ok_or_else(|| ImportConfigError::InvalidPolicyLabel {
            policy: P::POLICY_NAME,
            label: label.to_string(),
        })
}

/// 全部标签（声明顺序）,供下拉框等编辑界面使用
pub fn labels<P: PolicyLabel>() -> impl Iterator<Item = &'static str> {
    P::LABELS.iter().map(|(_, label)| *label)
}

// serde 辅助: 以标签文本读写
fn serialize_label<P: PolicyLabel, S: Serializer>(member: P, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(label_of(member))
}

fn deserialize_label<'de, P: PolicyLabel, D: Deserializer<'de>>(deserializer: D) -> Result<P, D::Error> {
    let label = String::deserialize(deserializer)?;
    member_of(&label).map_err(serde::de::Error::custom)
}

// ==========================================
// 目标表已存在策略 (Table Exists Policy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableExistsPolicy {
    AppendNewRows,      // 追加到已有表
    DeleteExistingRows, // 清空已有行后导入
    #[default]
    DropTable,          // 删除并重建表
}

impl PolicyLabel for TableExistsPolicy {
    const POLICY_NAME: &'static str = "目标表已存在策略";

    const LABELS: &'static [(Self, &'static str)] = &[
        (TableExistsPolicy::AppendNewRows, "Append new rows"),
        (TableExistsPolicy::DeleteExistingRows, "Delete existing rows"),
        (TableExistsPolicy::DropTable, "Drop table and recreate"),
    ];
}

impl fmt::Display for TableExistsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(label_of(*self))
    }
}

impl FromStr for TableExistsPolicy {
    type Err = ImportConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        member_of(s)
    }
}

impl Serialize for TableExistsPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_label(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for TableExistsPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_label(deserializer)
    }
}

// ==========================================
// 类型转换失败策略 (Conversion Fail Policy)
// ==========================================
// 单元格值无法转换为目标列类型时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionFailPolicy {
    ImportAsText, // 按文本导入该值
    SkipRow,      // 跳过该行
    #[default]
    Abort,        // 终止导入并报错
}

impl PolicyLabel for ConversionFailPolicy {
    const POLICY_NAME: &'static str = "类型转换失败策略";

    const LABELS: &'static [(Self, &'static str)] = &[
        (ConversionFailPolicy::ImportAsText, "Import the value as text"),
        (ConversionFailPolicy::SkipRow, "Skip the row"),
        (ConversionFailPolicy::Abort, "Stop import with error"),
    ];
}

impl fmt::Display for ConversionFailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(label_of(*self))
    }
}

impl FromStr for ConversionFailPolicy {
    type Err = ImportConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        member_of(s)
    }
}

impl Serialize for ConversionFailPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_label(*self, serializer)
    }
}

impl<'de> Deserialize<'de> for ConversionFailPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_label(deserializer)
    }
}

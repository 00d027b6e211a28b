// ==========================================
// 表格导入配置 - 工作簿配置集合
// ==========================================
// 职责: 持有一次导入任务中全部工作表的配置
// 红线: 同一集合内工作表序号唯一
// ==========================================

use crate::config::ImportDefaults;
use crate::domain::sheet_config::SheetImportConfig;
use crate::error::{ImportConfigError, ImportConfigResult};
use serde::{Deserialize, Serialize};

// ==========================================
// SheetImportSet - 工作簿配置集合
// ==========================================
// 内部按 index 升序保存,便于二分查找
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<SheetImportConfig>",
    into = "Vec<SheetImportConfig>"
)]
pub struct SheetImportSet {
    sheets: Vec<SheetImportConfig>,
}

impl SheetImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按发现顺序为每个工作表名称创建配置
    ///
    /// # 参数
    /// - names: 工作表名称（按工作簿顺序）
    /// - defaults: 默认导入配置
    ///
    /// # 说明
    /// - index 取名称在序列中的位置,天然唯一
    pub fn from_sheet_names<I, S>(names: I, defaults: &ImportDefaults) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sheets: Vec<SheetImportConfig> = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| SheetImportConfig::with_defaults(index, name, defaults))
            .collect();

        tracing::info!(sheet_count = sheets.len(), "工作表导入配置已创建");
        Self { sheets }
    }

    /// 加入一个工作表配置
    ///
    /// # 返回
    /// - Err(DuplicateSheetIndex): 序号已存在,集合保持不变
    pub fn insert(&mut self, config: SheetImportConfig) -> ImportConfigResult<()> {
        match self.position(config.index) {
            Ok(_) => {
                tracing::warn!(index = config.index, sheet = %config.original_name, "工作表序号重复");
                Err(ImportConfigError::DuplicateSheetIndex {
                    index: config.index,
                })
            }
            Err(pos) => {
                self.sheets.insert(pos, config);
                Ok(())
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&SheetImportConfig> {
        self.position(index).ok().map(|pos| &self.sheets[pos])
    }

    /// 编辑一个工作表配置
    ///
    /// 编辑在副本上进行,成功后才写回集合;改动 index 时重新按序号排列
    ///
    /// # 返回
    /// - Err(SheetNotFound): 序号不存在
    /// - Err(DuplicateSheetIndex): 新序号已被其他工作表占用
    /// - Err(..): 编辑函数自身返回的错误
    ///
    /// 任何错误下集合保持不变
    pub fn update<F, T>(&mut self, index: usize, edit: F) -> ImportConfigResult<T>
    where
        F: FnOnce(&mut SheetImportConfig) -> ImportConfigResult<T>,
    {
        let pos = self
            .position(index)
            .map_err(|_| ImportConfigError::SheetNotFound { index })?;

        let mut edited = self.sheets[pos].clone();
        let output = edit(&mut edited)?;

        if edited.index == index {
            self.sheets[pos] = edited;
            return Ok(output);
        }

        match self.position(edited.index) {
            Ok(_) => {
                tracing::warn!(from = index, to = edited.index, "工作表序号重复");
                Err(ImportConfigError::DuplicateSheetIndex {
                    index: edited.index,
                })
            }
            Err(_) => {
                self.sheets.remove(pos);
                let new_pos = self
                    .position(edited.index)
                    .unwrap_or_else(|free| free);
                self.sheets.insert(new_pos, edited);
                Ok(output)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SheetImportConfig> {
        self.sheets.iter()
    }

    pub fn records(&self) -> &[SheetImportConfig] {
        &self.sheets
    }

    pub fn into_records(self) -> Vec<SheetImportConfig> {
        self.sheets
    }

    /// 勾选导入的工作表（按序号升序）
    pub fn selected(&self) -> impl Iterator<Item = &SheetImportConfig> {
        self.sheets.iter().filter(|s| s.to_be_imported)
    }

    /// 全选 / 全不选
    pub fn set_all_imported(&mut self, to_be_imported: bool) {
        for sheet in &mut self.sheets {
            sheet.to_be_imported = to_be_imported;
        }
    }

    fn position(&self, index: usize) -> Result<usize, usize> {
        self.sheets.binary_search_by_key(&index, |s| s.index)
    }
}

impl TryFrom<Vec<SheetImportConfig>> for SheetImportSet {
    type Error = ImportConfigError;

    fn try_from(records: Vec<SheetImportConfig>) -> Result<Self, Self::Error> {
        let mut set = SheetImportSet::new();
        for record in records {
            set.insert(record)?;
        }
        Ok(set)
    }
}

impl From<SheetImportSet> for Vec<SheetImportConfig> {
    fn from(set: SheetImportSet) -> Self {
        set.sheets
    }
}

impl<'a> IntoIterator for &'a SheetImportSet {
    type Item = &'a SheetImportConfig;
    type IntoIter = std::slice::Iter<'a, SheetImportConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_index_order() {
        let mut set = SheetImportSet::new();
        set.insert(SheetImportConfig::new(2, "C")).unwrap();
        set.insert(SheetImportConfig::new(0, "A")).unwrap();
        set.insert(SheetImportConfig::new(1, "B")).unwrap();

        let names: Vec<_> = set.iter().map(|s| s.original_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_insert_duplicate_index() {
        let mut set = SheetImportSet::new();
        set.insert(SheetImportConfig::new(0, "A")).unwrap();

        let err = set.insert(SheetImportConfig::new(0, "B")).unwrap_err();
        assert_eq!(err, ImportConfigError::DuplicateSheetIndex { index: 0 });
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().original_name, "A");
    }

    #[test]
    fn test_empty_set() {
        let mut set = SheetImportSet::new();
        assert!(set.is_empty());
        assert!(set.records().is_empty());

        set.insert(SheetImportConfig::new(0, "A")).unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.records().len(), 1);
        assert_eq!(set.records()[0].original_name, "A");
    }

    #[test]
    fn test_update_missing_index() {
        let mut set = SheetImportSet::from_sheet_names(["A"], &ImportDefaults::default());
        let err = set.update(5, |_| Ok(())).unwrap_err();
        assert_eq!(err, ImportConfigError::SheetNotFound { index: 5 });
    }

    #[test]
    fn test_update_moves_record_to_new_index() {
        let mut set = SheetImportSet::from_sheet_names(["A", "B"], &ImportDefaults::default());
        set.update(0, |s| {
            s.index = 7;
            Ok(())
        })
        .unwrap();

        let indexes: Vec<_> = set.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![1, 7]);
        assert_eq!(set.get(7).unwrap().original_name, "A");
        assert!(set.get(0).is_none());
    }

    #[test]
    fn test_update_failed_edit_keeps_record() {
        let mut set = SheetImportSet::from_sheet_names(["A"], &ImportDefaults::default());
        let result = set.update(0, |s| {
            s.new_name = "renamed".to_string();
            s.set_conversion_fail_label("Frobnicate")
        });

        assert!(matches!(result, Err(ImportConfigError::InvalidPolicyLabel { .. })));
        assert_eq!(set.get(0).unwrap().new_name, "A");
    }

    #[test]
    fn test_get_missing() {
        let set = SheetImportSet::from_sheet_names(["A"], &ImportDefaults::default());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn test_selected_and_set_all() {
        let mut set = SheetImportSet::from_sheet_names(["A", "B", "C"], &ImportDefaults::default());
        assert_eq!(set.selected().count(), 3);

        set.update(1, |s| {
            s.to_be_imported = false;
            Ok(())
        })
        .unwrap();
        let selected: Vec<_> = set.selected().map(|s| s.index).collect();
        assert_eq!(selected, vec![0, 2]);

        set.set_all_imported(false);
        assert_eq!(set.selected().count(), 0);
    }
}

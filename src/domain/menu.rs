// ==========================================
// 餐饮连锁销售数据模拟系统 - 菜单价格表
// ==========================================
// 结构: 类目 → 菜品 → 单价
// 约束: 单价非负; 单价为 0 的菜品视为不可售分配单元,
//       不进入随机抽取池（避免分配循环无法收敛）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// MenuCatalog - 菜单价格表
// ==========================================
// 内部使用 BTreeMap 保证类目/菜品遍历顺序确定，
// 固定随机种子时生成结果可复现
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    categories: BTreeMap<String, BTreeMap<String, f64>>,
}

impl MenuCatalog {
    /// 创建空价格表
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个类目及其全部菜品
    pub fn insert_category(&mut self, category: &str, items: &[(&str, f64)]) {
        let entry = self.categories.entry(category.to_string()).or_default();
        for (name, price) in items {
            entry.insert((*name).to_string(), *price);
        }
    }

    /// 是否包含某类目
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// 类目名称列表（字典序）
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|s| s.as_str())
    }

    /// 某类目的全部菜品（含单价为 0 的不可售项）
    pub fn items(&self, category: &str) -> Option<&BTreeMap<String, f64>> {
        self.categories.get(category)
    }

    /// 某类目的可售抽取池: 仅保留单价 > 0 的菜品，按菜品名排序
    ///
    /// # 返回
    /// - Vec<(菜品名, 单价)>; 类目不存在时为空
    pub fn purchasable_items(&self, category: &str) -> Vec<(&str, f64)> {
        self.categories
            .get(category)
            .map(|items| {
                items
                    .iter()
                    .filter(|(_, price)| **price > 0.0)
                    .map(|(name, price)| (name.as_str(), *price))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 某类目可售菜品的最高单价（空池返回 None）
    pub fn max_purchasable_price(&self, category: &str) -> Option<f64> {
        self.purchasable_items(category)
            .iter()
            .map(|(_, price)| *price)
            .fold(None, |acc, p| Some(acc.map_or(p, |m: f64| m.max(p))))
    }

    /// 类目总数
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

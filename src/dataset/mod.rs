// ==========================================
// 餐饮连锁销售数据模拟系统 - 数据集层
// ==========================================
// 职责: 生成结果的输出容器与运行元数据
// 红线: 不做去重、不做再聚合 —— 同一菜品同日可出现多行,
//       按唯一组合折叠是下游消费方的职责
// ==========================================

pub mod summary;

use crate::domain::SaleRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

// ==========================================
// GenerationRun - 生成运行元数据
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRun {
    pub run_id: String,              // 运行ID (UUID)
    pub seed: u64,                   // 主随机种子
    pub year: i32,                   // 目标日历年
    pub generated_at: NaiveDateTime, // 生成时间
}

// ==========================================
// SalesDataset - 销售明细数据集
// ==========================================
// 全部 (门店, 日期, 类目) 桶的明细按门店字典序拼接而成
#[derive(Debug, Clone)]
pub struct SalesDataset {
    pub run: GenerationRun,
    pub records: Vec<SaleRecord>,
}

impl SalesDataset {
    /// 构造数据集
    pub fn new(run: GenerationRun, records: Vec<SaleRecord>) -> Self {
        Self { run, records }
    }

    /// 明细行数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否为空数据集
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全量净销售额
    pub fn total_net_sales(&self) -> f64 {
        self.records.iter().map(|r| r.net_sales).sum()
    }

    /// 全量销售数量
    pub fn total_quantity(&self) -> u64 {
        self.records.iter().map(|r| r.quantity_sold as u64).sum()
    }
}

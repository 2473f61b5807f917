// ==========================================
// 餐饮连锁销售数据模拟系统 - 销售明细领域模型
// ==========================================
// SaleRecord 是生成链路的原子输出记录，落地后不可变
// DailyTarget / CategoryTarget 为链路中间派生值，不持久化
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// SaleRecord - 销售明细行
// ==========================================
// 列顺序与下游 CSV 表头保持一致:
// region, location, date, category, menu_item, quantity_sold, net_sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub region: String,     // 销售区域
    pub location: String,   // 门店名称
    pub date: NaiveDate,    // 销售日期
    pub category: String,   // 菜单类目
    pub menu_item: String,  // 菜品名称
    pub quantity_sold: u32, // 销售数量（正整数）
    pub net_sales: f64,     // 净销售额 = 数量 × 单价
}

// ==========================================
// DailyTarget - 门店单日销售目标
// ==========================================
// 由时间分解引擎按 年度 → 月度 → 日度 级联产生,
// 立即被类目拆分引擎消费
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTarget {
    pub location: String, // 门店名称
    pub date: NaiveDate,  // 日历日期
    pub amount: f64,      // 当日销售目标金额
}

// ==========================================
// CategoryTarget - 类目子目标
// ==========================================
// 键: (门店, 日期, 类目)，由分配引擎用随机明细填充
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTarget {
    pub category: String, // 菜单类目
    pub amount: f64,      // 子目标金额 = 日目标 × 类目权重
}

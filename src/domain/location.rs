// ==========================================
// 餐饮连锁销售数据模拟系统 - 门店领域模型
// ==========================================
// 一次生成运行期间门店属性不可变
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Location - 连锁门店
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,                // 门店名称（数据集中 location 列）
    pub city: String,                // 城市
    pub state: String,               // 州/省
    pub store_number: u32,           // 门店编号
    pub region: String,              // 所属销售区域
    pub projected_annual_sales: f64, // 年度销售目标（美元，非负）
}

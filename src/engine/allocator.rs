// ==========================================
// 餐饮连锁销售数据模拟系统 - 菜品分配引擎
// ==========================================
// 职责: 用离散随机明细填充类目子目标（贪心有界随机填充）
// 终止: 下一候选将导致超额时立即终止（丢弃该候选）
//       显式状态机 {Accumulating, Terminated}
// 安全: 与单价数据无关的抽取次数上限, 畸形抽取池下也必然终止
// 随机: 均匀抽菜品（忽略价格）+ 均匀抽数量 [1, 5],
//       随机源由调用方注入（种子化可复现）
// ==========================================

use crate::domain::{Location, SaleRecord};
use crate::engine::error::EngineError;
use chrono::NaiveDate;
use rand::Rng;

/// 单笔明细最小数量
pub const MIN_QUANTITY: u32 = 1;

/// 单笔明细最大数量
pub const MAX_QUANTITY: u32 = 5;

/// 默认单桶随机抽取次数上限
pub const DEFAULT_MAX_DRAWS: u32 = 100_000;

// ==========================================
// AllocatorState - 分配循环状态机
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorState {
    /// 累积中: 继续抽取候选明细
    Accumulating,
    /// 已终止: 下一候选会超出子目标
    Terminated,
}

// ==========================================
// ItemAllocator - 菜品分配引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct ItemAllocator {
    max_draws: u32,
}

impl Default for ItemAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemAllocator {
    /// 构造函数（默认抽取上限）
    pub fn new() -> Self {
        Self {
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }

    /// 构造函数（自定义抽取上限, 用于测试或防御性收紧）
    pub fn with_max_draws(max_draws: u32) -> Self {
        Self { max_draws }
    }

    /// 填充一个 (门店, 日期, 类目) 桶
    ///
    /// 循环:
    /// 1) 均匀抽取一个可售菜品（忽略价格）
    /// 2) 均匀抽取数量 qty ∈ [1, 5], 候选金额 = qty × 单价
    /// 3) 若 累计 + 候选 > 子目标: 丢弃候选并终止
    /// 4) 否则记录明细并累计, 回到 1)
    ///
    /// 终止论证: 抽取池仅含单价 > 0 的菜品, 每笔被接受的明细
    /// 至少推进池内最低单价, 故循环受 sub_target / min_price 约束;
    /// 另有与价格无关的 max_draws 上限兜底
    ///
    /// # 参数
    /// - location: 门店（提供 region/location 两列）
    /// - date: 销售日期
    /// - category: 菜单类目
    /// - sub_target: 类目子目标金额
    /// - pool: 可售抽取池 (菜品名, 单价>0), 见 MenuCatalog::purchasable_items
    /// - rng: 注入的随机源
    ///
    /// # 返回
    /// - Ok(Vec<SaleRecord>): 明细金额之和 ≤ sub_target,
    ///   且缺口严格小于被拒候选的金额（≤ 5 × 池内最高单价）
    /// - Err(DegenerateCatalog): 子目标为正但抽取池为空
    /// - Err(DrawBudgetExhausted): 抽取次数达到安全上限
    pub fn fill_bucket<R: Rng>(
        &self,
        location: &Location,
        date: NaiveDate,
        category: &str,
        sub_target: f64,
        pool: &[(&str, f64)],
        rng: &mut R,
    ) -> Result<Vec<SaleRecord>, EngineError> {
        // 子目标为 0（权重为 0 的月份/类目）: 合法的空桶, 不是错误
        if sub_target <= 0.0 {
            return Ok(Vec::new());
        }

        if pool.is_empty() {
            return Err(EngineError::DegenerateCatalog {
                location: location.name.clone(),
                date,
                category: category.to_string(),
            });
        }

        let mut state = AllocatorState::Accumulating;
        let mut running_total = 0.0f64;
        let mut records = Vec::new();
        let mut draws = 0u32;

        while state == AllocatorState::Accumulating {
            if draws >= self.max_draws {
                return Err(EngineError::DrawBudgetExhausted {
                    location: location.name.clone(),
                    date,
                    category: category.to_string(),
                    max_draws: self.max_draws,
                });
            }
            draws += 1;

            let (menu_item, unit_price) = pool[rng.gen_range(0..pool.len())];
            let quantity = rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY);
            let candidate_amount = quantity as f64 * unit_price;

            if running_total + candidate_amount > sub_target {
                // 超额: 丢弃候选, 终止本桶
                state = AllocatorState::Terminated;
            } else {
                running_total += candidate_amount;
                records.push(SaleRecord {
                    region: location.region.clone(),
                    location: location.name.clone(),
                    date,
                    category: category.to_string(),
                    menu_item: menu_item.to_string(),
                    quantity_sold: quantity,
                    net_sales: candidate_amount,
                });
            }
        }

        Ok(records)
    }
}

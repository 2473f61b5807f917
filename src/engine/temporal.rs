// ==========================================
// 餐饮连锁销售数据模拟系统 - 时间分解引擎
// ==========================================
// 职责: 把门店年度销售目标级联分解为逐日销售目标
// 级联: 年度 × 月度季节性权重 → 月度目标
//       月度目标 × 星期权重 ÷ 该星期当月出现次数 → 日度目标
// 输出: 按日历升序的 DailyTarget 序列（确定性, 无随机）
// ==========================================

use crate::domain::{DailyTarget, Location};
use crate::engine::error::EngineError;
use crate::params::GenerationParams;
use chrono::{Datelike, NaiveDate};
use tracing::instrument;

// ==========================================
// TemporalDecomposer - 时间分解引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalDecomposer;

impl TemporalDecomposer {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 生成门店某年的全部日度销售目标
    ///
    /// 规则:
    /// 1) monthly_target = 年度目标 × 该区域该月季节性权重
    /// 2) weekday_total = monthly_target × 星期权重
    ///    （该星期当月全部日历日共同承担的金额）
    /// 3) 每个日历日的目标 = weekday_total ÷ 该星期当月出现次数
    ///    （同星期的 4~5 个日历日均摊）
    ///
    /// 季节性权重为 0 的月份自然产生全 0 的日度目标;
    /// 星期出现次数在任何真实月份都 ≥ 4, 除法无需额外防护
    ///
    /// # 参数
    /// - params: 生成参数表
    /// - location: 门店
    /// - year: 目标日历年
    ///
    /// # 返回
    /// 按日期升序的 DailyTarget 列表（覆盖全年每一天）
    #[instrument(skip(self, params, location), fields(location = %location.name, region = %location.region, year))]
    pub fn daily_targets(
        &self,
        params: &GenerationParams,
        location: &Location,
        year: i32,
    ) -> Result<Vec<DailyTarget>, EngineError> {
        let curve = params.seasonality_for(&location.region)?;

        let mut targets = Vec::with_capacity(366);
        for month in 1..=12u32 {
            let monthly_target =
                location.projected_annual_sales * curve.weight_of_month(month);

            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .ok_or(EngineError::InvalidYear(year))?;

            // 统计本月每个星期的出现次数（4 或 5 次）
            let mut weekday_counts = [0u32; 7];
            let mut date = first;
            while date.month() == month {
                weekday_counts[date.weekday().num_days_from_monday() as usize] += 1;
                date = match date.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }

            // 各星期在本月承担的总金额
            let mut weekday_totals = [0.0f64; 7];
            for (idx, total) in weekday_totals.iter_mut().enumerate() {
                *total = monthly_target * params.weekday_volume.0[idx];
            }

            // 均摊给同星期的每个日历日, 按日期升序输出
            let mut date = first;
            while date.month() == month {
                let idx = date.weekday().num_days_from_monday() as usize;
                let amount = weekday_totals[idx] / weekday_counts[idx] as f64;
                targets.push(DailyTarget {
                    location: location.name.clone(),
                    date,
                    amount,
                });
                date = match date.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        Ok(targets)
    }
}

// ==========================================
// 餐饮连锁销售数据模拟系统 - 权重曲线
// ==========================================
// 月度季节性曲线: 每区域 12 个月份权重，和约等于 1.0
// 星期分布曲线: 全区域共享的 7 个星期权重，和约等于 1.0
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// 月份名称（一月起），用于日志与报表展示
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// 星期名称（周一起），与 `WeekdayCurve` 的下标一致
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ==========================================
// MonthCurve - 月度季节性曲线
// ==========================================
// 下标 0 = 一月
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthCurve(pub [f64; 12]);

impl MonthCurve {
    /// 获取某月的季节性权重
    ///
    /// # 参数
    /// - month: 日历月份（1..=12）
    pub fn weight_of_month(&self, month: u32) -> f64 {
        debug_assert!((1..=12).contains(&month));
        self.0[(month as usize).saturating_sub(1).min(11)]
    }

    /// 权重之和（校验用）
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

// ==========================================
// WeekdayCurve - 星期分布曲线
// ==========================================
// 下标 0 = 周一（chrono::Weekday::num_days_from_monday 对齐）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayCurve(pub [f64; 7]);

impl WeekdayCurve {
    /// 获取某星期的销量权重
    pub fn weight_of(&self, weekday: Weekday) -> f64 {
        self.0[weekday.num_days_from_monday() as usize]
    }

    /// 权重之和（校验用）
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

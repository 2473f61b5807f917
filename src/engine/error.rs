// ==========================================
// 餐饮连锁销售数据模拟系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 引擎不做 I/O, 所有错误均为永久性错误, 必须上抛给调用方
// ==========================================

use crate::params::ParamsError;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 配置错误（生成前校验阶段）=====
    #[error("参数校验失败: {0}")]
    InvalidParams(#[from] ParamsError),

    // ===== 退化目录错误（运行期兜底）=====
    // 校验阶段已拒绝权重为正的退化类目, 此处兜底防御
    // 直接调用分配引擎时传入的非法抽取池
    #[error("退化抽取池: category={category} 无可售菜品但子目标为正 (location={location}, date={date})")]
    DegenerateCatalog {
        location: String,
        date: NaiveDate,
        category: String,
    },

    // ===== 随机抽取安全上限 =====
    // 与单价数据无关的迭代上限, 保证恶意/畸形参数下循环必然终止
    #[error("随机抽取次数超出安全上限: location={location}, date={date}, category={category}, max_draws={max_draws}")]
    DrawBudgetExhausted {
        location: String,
        date: NaiveDate,
        category: String,
        max_draws: u32,
    },

    // ===== 日历错误 =====
    #[error("生成年份非法: {0}")]
    InvalidYear(i32),

    // ===== 并行任务错误 =====
    #[error("门店生成任务执行失败: {0}")]
    TaskJoin(String),
}

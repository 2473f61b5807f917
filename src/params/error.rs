// ==========================================
// 餐饮连锁销售数据模拟系统 - 参数层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 所有参数错误均为致命错误: 校验阶段立即上报，不重试
// ==========================================

use thiserror::Error;

/// 参数层错误类型
#[derive(Error, Debug)]
pub enum ParamsError {
    // ===== 引用完整性错误 =====
    #[error("区域缺少月度季节性曲线: region={0}")]
    MissingSeasonality(String),

    #[error("区域缺少类目偏好分布: region={0}")]
    MissingCategoryPreference(String),

    #[error("类目偏好分布引用了菜单中不存在的类目: region={region}, category={category}")]
    UnknownCategory { region: String, category: String },

    // ===== 权重与数值错误 =====
    #[error("权重之和偏离 1.0: table={table}, key={key}, sum={sum}")]
    WeightSumMismatch {
        table: &'static str,
        key: String,
        sum: f64,
    },

    #[error("权重非法(负数或非有限值): table={table}, key={key}, value={value}")]
    InvalidWeight {
        table: &'static str,
        key: String,
        value: f64,
    },

    #[error("门店年度销售目标非法: location={location}, value={value}")]
    InvalidAnnualTarget { location: String, value: f64 },

    #[error("菜品单价非法: category={category}, item={item}, price={price}")]
    InvalidUnitPrice {
        category: String,
        item: String,
        price: f64,
    },

    // ===== 退化目录错误 =====
    // 类目权重为正但无可售菜品(单价>0)时，分配循环的
    // 自然终止论证不成立，必须在生成前拒绝
    #[error("退化类目: category={0} 权重为正但不含任何单价>0的菜品")]
    DegenerateCategory(String),

    // ===== 参数文件错误 =====
    #[error("参数文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("参数文件解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

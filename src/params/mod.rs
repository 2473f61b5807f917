// ==========================================
// 餐饮连锁销售数据模拟系统 - 参数层
// ==========================================
// 职责: 生成参数表的持有、载入与校验
// 红线: 参数对象构造一次、全程只读，禁止环境级全局状态
// ==========================================

pub mod defaults;
pub mod error;
pub mod store;
pub mod validator;

// 重导出核心类型
pub use error::ParamsError;
pub use store::GenerationParams;
pub use validator::{validate, WEIGHT_SUM_TOLERANCE};

// ==========================================
// 餐饮连锁销售数据模拟系统 - 数据仓储层
// ==========================================
// 职责: 销售明细的 SQLite 持久化
// 消费方: 入库管道（暂存 CSV → 应用库）与下游看板
// ==========================================

pub mod error;
pub mod sales_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use sales_repo::SalesRepository;

// ==========================================
// 餐饮连锁销售数据模拟系统 - 引擎层
// ==========================================
// 职责: 实现生成链路的业务规则引擎
// 链路: TemporalDecomposer → CategorySplitter → ItemAllocator
//       由 SalesOrchestrator 编排并汇总
// 红线: 引擎只读参数表, 不做任何 I/O; 所有随机性来自注入的种子化随机源
// ==========================================

pub mod allocator;
pub mod category;
pub mod error;
pub mod orchestrator;
pub mod temporal;

// 重导出核心引擎
pub use allocator::{AllocatorState, ItemAllocator, DEFAULT_MAX_DRAWS, MAX_QUANTITY, MIN_QUANTITY};
pub use category::CategorySplitter;
pub use error::EngineError;
pub use orchestrator::{generate_location, SalesOrchestrator};
pub use temporal::TemporalDecomposer;

// ==========================================
// 餐饮连锁销售数据模拟系统 - 核心库
// ==========================================
// 系统定位: 合成交易数据生成引擎
// 生成链路: 年度目标 → 月度(季节性) → 日度(星期分布)
//           → 类目子目标 → 随机菜品分配 → 销售明细数据集
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 参数层 - 生成参数表(门店/曲线/菜单)
pub mod params;

// 引擎层 - 生成规则
pub mod engine;

// 数据集层 - 输出容器与汇总报表
pub mod dataset;

// 数据仓储层 - 销售明细落库
pub mod repository;

// 导出层 - CSV 导出与入库管道
pub mod export;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CategoryTarget, DailyTarget, Location, MenuCatalog, MonthCurve, SaleRecord, WeekdayCurve,
};

// 参数层
pub use params::{GenerationParams, ParamsError};

// 引擎
pub use engine::{
    CategorySplitter, EngineError, ItemAllocator, SalesOrchestrator, TemporalDecomposer,
};

// 数据集
pub use dataset::{GenerationRun, SalesDataset};

// 导出
pub use export::{CsvExporter, DatasetExporter, ExportError, SqliteExporter};

// 仓储
pub use repository::{RepositoryError, SalesRepository};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "餐饮连锁销售数据模拟系统";

// ==========================================
// 餐饮连锁销售数据模拟系统 - 领域层
// ==========================================
// 职责: 定义生成链路中的领域实体与派生值
// 红线: 领域类型不持有任何 I/O 逻辑
// ==========================================

pub mod curves;
pub mod location;
pub mod menu;
pub mod sale;

// 重导出核心实体
pub use curves::{MonthCurve, WeekdayCurve, MONTH_NAMES, WEEKDAY_NAMES};
pub use location::Location;
pub use menu::MenuCatalog;
pub use sale::{CategoryTarget, DailyTarget, SaleRecord};

// ==========================================
// 餐饮连锁销售数据模拟系统 - 销售明细仓储
// ==========================================
// 职责: sales 表的建表、批量写入与聚合查询
// 红线: 批量写入必须在事务中完成
// ==========================================

use crate::domain::SaleRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// SalesRepository - 销售明细仓储
// ==========================================
pub struct SalesRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SalesRepository {
    /// 创建仓储实例（复用已配置的连接）
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 打开数据库文件并初始化表结构
    ///
    /// # 参数
    /// - db_path: SQLite 数据库文件路径
    pub fn open(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self::new(Arc::new(Mutex::new(conn)));
        repo.init_schema()?;
        Ok(repo)
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 初始化表结构（幂等）
    pub fn init_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sales (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                region        TEXT    NOT NULL,
                location      TEXT    NOT NULL,
                date          TEXT    NOT NULL,
                category      TEXT    NOT NULL,
                menu_item     TEXT    NOT NULL,
                quantity_sold INTEGER NOT NULL,
                net_sales     REAL    NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_sales_location_date ON sales(location, date);
            CREATE INDEX IF NOT EXISTS idx_sales_category ON sales(category);",
        )?;
        Ok(())
    }

    /// 批量插入销售明细
    ///
    /// # 参数
    /// - records: 明细列表
    ///
    /// # 返回
    /// - Ok(count): 插入成功的记录数
    /// - Err: 数据库错误
    pub fn batch_insert(&self, records: &[SaleRecord]) -> RepositoryResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO sales
                    (region, location, date, category, menu_item, quantity_sold, net_sales)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;

            for record in records {
                stmt.execute(params![
                    record.region,
                    record.location,
                    record.date,
                    record.category,
                    record.menu_item,
                    record.quantity_sold,
                    record.net_sales,
                ])?;
            }
        }

        tx.commit()?;
        Ok(records.len())
    }

    /// 全量替换销售明细（入库管道使用: 最新暂存快照覆盖旧数据）
    pub fn replace_all(&self, records: &[SaleRecord]) -> RepositoryResult<usize> {
        {
            let conn = self.get_conn()?;
            conn.execute("DELETE FROM sales", [])?;
        }
        self.batch_insert(records)
    }

    /// 明细行数
    pub fn count_rows(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 总净销售额
    pub fn total_net_sales(&self) -> RepositoryResult<f64> {
        let conn = self.get_conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(net_sales), 0.0) FROM sales",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// 按门店统计净销售额（校验/看板查询）
    pub fn net_sales_by_location(&self) -> RepositoryResult<Vec<(String, f64)>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT location, SUM(net_sales)
             FROM sales
             GROUP BY location
             ORDER BY SUM(net_sales) DESC",
        )?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// 数据集覆盖的日期区间
    pub fn date_range(&self) -> RepositoryResult<Option<(NaiveDate, NaiveDate)>> {
        let conn = self.get_conn()?;
        let range: (Option<NaiveDate>, Option<NaiveDate>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM sales",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        match range {
            (Some(min), Some(max)) => Ok(Some((min, max))),
            _ => Ok(None),
        }
    }
}

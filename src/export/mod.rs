// ==========================================
// 餐饮连锁销售数据模拟系统 - 导出层
// ==========================================
// 职责: 数据集的落地与流转
// 流程: 生成结果 → 暂存 CSV → 最新快照提升至应用 SQLite 库
// 红线: 生成核心不感知任何持久化格式, 导出层是外部协作方
// ==========================================

pub mod csv_exporter;
pub mod pipeline;

use crate::dataset::SalesDataset;
use crate::repository::RepositoryError;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

// 重导出核心类型
pub use csv_exporter::CsvExporter;
pub use pipeline::{
    latest_staging_csv, load_staging_csv, promote_latest_to_app_db, PipelineReport, SqliteExporter,
};

// ==========================================
// ExportError - 导出层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件 I/O 失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 读写失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("暂存目录中没有可用的 CSV 文件: {0}")]
    NoStagingFiles(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

// ==========================================
// DatasetExporter Trait
// ==========================================
// 用途: 数据集落地接口
// 实现者: CsvExporter（暂存目录）、SqliteExporter（应用库）
#[async_trait]
pub trait DatasetExporter: Send + Sync {
    /// 导出数据集
    ///
    /// # 参数
    /// - dataset: 生成结果数据集
    ///
    /// # 返回
    /// - Ok(PathBuf): 落地文件路径
    /// - Err: 文件/数据库错误
    async fn export_dataset(&self, dataset: &SalesDataset) -> Result<PathBuf, ExportError>;
}

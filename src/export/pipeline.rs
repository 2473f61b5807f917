// ==========================================
// 餐饮连锁销售数据模拟系统 - 入库管道
// ==========================================
// 职责: 把暂存目录中最近生成的 CSV 快照提升至应用 SQLite 库,
//       供下游看板消费; 同时报告两种落地格式的体积对比
// 规则: 永远取"最后修改时间最新"的暂存文件; 应用库全量覆盖
// ==========================================

use crate::dataset::SalesDataset;
use crate::domain::SaleRecord;
use crate::export::{DatasetExporter, ExportError};
use crate::repository::SalesRepository;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::info;

// ==========================================
// SqliteExporter - 应用库导出器
// ==========================================
// 直接把数据集写入应用 SQLite 库（不经过暂存 CSV）
pub struct SqliteExporter {
    db_path: PathBuf,
}

impl SqliteExporter {
    /// 创建导出器
    ///
    /// # 参数
    /// - db_path: 应用库文件路径（父目录不存在时自动创建）
    pub fn new<P: Into<PathBuf>>(db_path: P) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

#[async_trait]
impl DatasetExporter for SqliteExporter {
    async fn export_dataset(&self, dataset: &SalesDataset) -> Result<PathBuf, ExportError> {
        if let Some(parent) = self.db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let repo = SalesRepository::open(&self.db_path.to_string_lossy())?;
        let rows = repo.replace_all(&dataset.records)?;

        info!(
            path = %self.db_path.display(),
            rows,
            "数据集已写入应用库"
        );
        Ok(self.db_path.clone())
    }
}

// ==========================================
// PipelineReport - 管道执行报告
// ==========================================
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub source_csv: PathBuf,   // 被提升的暂存 CSV
    pub app_db: PathBuf,       // 应用库文件
    pub rows_promoted: usize,  // 提升的明细行数
    pub csv_size_bytes: u64,   // 暂存 CSV 体积
    pub db_size_bytes: u64,    // 应用库体积
}

/// 查找暂存目录中最后修改时间最新的 CSV 文件
pub fn latest_staging_csv(staging_dir: &Path) -> Result<PathBuf, ExportError> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(staging_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map(|ext| ext == "csv") != Some(true) {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let newer = match &latest {
            Some((current, _)) => modified > *current,
            None => true,
        };
        if newer {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| ExportError::NoStagingFiles(staging_dir.display().to_string()))
}

/// 载入暂存 CSV 为明细列表
pub fn load_staging_csv(path: &Path) -> Result<Vec<SaleRecord>, ExportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize::<SaleRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// 把最新暂存 CSV 提升至应用库
///
/// # 参数
/// - staging_dir: 暂存目录
/// - app_db_path: 应用库文件路径
///
/// # 返回
/// 管道执行报告（含两种格式的体积对比）
pub fn promote_latest_to_app_db(
    staging_dir: &Path,
    app_db_path: &Path,
) -> Result<PipelineReport, ExportError> {
    let source_csv = latest_staging_csv(staging_dir)?;
    info!(source = %source_csv.display(), "发现最新暂存 CSV");

    let records = load_staging_csv(&source_csv)?;

    if let Some(parent) = app_db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let repo = SalesRepository::open(&app_db_path.to_string_lossy())?;
    let rows_promoted = repo.replace_all(&records)?;

    let csv_size_bytes = fs::metadata(&source_csv)?.len();
    let db_size_bytes = fs::metadata(app_db_path)?.len();

    info!(
        rows = rows_promoted,
        csv_size = %convert_bytes(csv_size_bytes),
        db_size = %convert_bytes(db_size_bytes),
        "暂存数据已提升至应用库"
    );

    Ok(PipelineReport {
        source_csv,
        app_db: app_db_path.to_path_buf(),
        rows_promoted,
        csv_size_bytes,
        db_size_bytes,
    })
}

/// 把字节数格式化为人类可读单位
pub fn convert_bytes(num: u64) -> String {
    let mut size = num as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

// ==========================================
// 餐饮连锁销售数据模拟系统 - CSV 导出器
// ==========================================
// 职责: 把数据集写入暂存目录
// 文件名: sales_data_per_location_<生成时间戳>.csv
// 表头: region, location, date, category, menu_item,
//       quantity_sold, net_sales（由 SaleRecord 字段顺序决定）
// ==========================================

use crate::dataset::SalesDataset;
use crate::domain::SaleRecord;
use crate::export::{DatasetExporter, ExportError};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// ==========================================
// CsvExporter - 暂存 CSV 导出器
// ==========================================
pub struct CsvExporter {
    staging_dir: PathBuf,
}

impl CsvExporter {
    /// 创建导出器
    ///
    /// # 参数
    /// - staging_dir: 暂存目录（不存在时自动创建）
    pub fn new<P: Into<PathBuf>>(staging_dir: P) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    /// 数据集对应的暂存文件名
    fn staged_file_name(dataset: &SalesDataset) -> String {
        format!(
            "sales_data_per_location_{}.csv",
            dataset.run.generated_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// 把明细列表写入指定 CSV 文件
    pub fn write_csv(path: &Path, records: &[SaleRecord]) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl DatasetExporter for CsvExporter {
    async fn export_dataset(&self, dataset: &SalesDataset) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.staging_dir)?;

        let path = self.staging_dir.join(Self::staged_file_name(dataset));
        Self::write_csv(&path, &dataset.records)?;

        info!(
            path = %path.display(),
            records = dataset.len(),
            "数据集已写入暂存 CSV"
        );
        Ok(path)
    }
}

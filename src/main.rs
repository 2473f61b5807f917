// ==========================================
// 餐饮连锁销售数据模拟系统 - 主入口
// ==========================================
// 流程: 载入参数 → 生成数据集 → 暂存 CSV
//       → 提升至应用库 → 打印汇总报表
// ==========================================

use anyhow::{bail, Context};
use restaurant_sales_sim::dataset::summary;
use restaurant_sales_sim::export::{promote_latest_to_app_db, CsvExporter, DatasetExporter};
use restaurant_sales_sim::params::GenerationParams;
use restaurant_sales_sim::{logging, SalesOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;

/// 命令行选项
struct CliOptions {
    year: i32,                     // 目标日历年
    seed: Option<u64>,             // 主随机种子（缺省用当前时间戳）
    params_file: Option<PathBuf>,  // 外部 JSON 参数文件
    data_dir: Option<PathBuf>,     // 数据目录（含 staging/ 与 app/）
    skip_app_db: bool,             // 只导出暂存 CSV, 跳过入库管道
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            year: 2023,
            seed: None,
            params_file: None,
            data_dir: None,
            skip_app_db: false,
        }
    }
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--year" => {
                let value = args.next().context("--year 缺少取值")?;
                options.year = value.parse().with_context(|| format!("年份非法: {}", value))?;
            }
            "--seed" => {
                let value = args.next().context("--seed 缺少取值")?;
                options.seed =
                    Some(value.parse().with_context(|| format!("种子非法: {}", value))?);
            }
            "--params" => {
                options.params_file = Some(PathBuf::from(args.next().context("--params 缺少取值")?));
            }
            "--data-dir" => {
                options.data_dir = Some(PathBuf::from(args.next().context("--data-dir 缺少取值")?));
            }
            "--skip-app-db" => {
                options.skip_app_db = true;
            }
            other => bail!("未知参数: {}", other),
        }
    }

    Ok(options)
}

/// 解析默认数据目录
///
/// 优先级: 环境变量 RESTAURANT_SALES_SIM_DATA_DIR
///         → 用户数据目录/restaurant-sales-sim → ./data
fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("RESTAURANT_SALES_SIM_DATA_DIR") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("restaurant-sales-sim"),
        None => PathBuf::from("./data"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", restaurant_sales_sim::APP_NAME);
    tracing::info!("系统版本: {}", restaurant_sales_sim::VERSION);
    tracing::info!("==================================================");

    let options = parse_args()?;

    // 载入生成参数表
    let params = match &options.params_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "载入外部参数文件");
            GenerationParams::from_json_file(path)?
        }
        None => {
            tracing::info!("使用内置默认参数表");
            GenerationParams::builtin()
        }
    };

    let seed = options
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp() as u64);
    let data_dir = options.data_dir.clone().unwrap_or_else(default_data_dir);
    let staging_dir = data_dir.join("staging");
    tracing::info!(data_dir = %data_dir.display(), year = options.year, seed, "生成配置就绪");

    // 执行生成链路
    let orchestrator = SalesOrchestrator::new(Arc::new(params));
    let dataset = orchestrator.generate(options.year, seed).await?;

    // 导出暂存 CSV
    let exporter = CsvExporter::new(&staging_dir);
    let staged_path = exporter.export_dataset(&dataset).await?;
    tracing::info!(path = %staged_path.display(), "暂存 CSV 导出完成");

    // 最新暂存快照提升至应用库
    if options.skip_app_db {
        tracing::info!("已按 --skip-app-db 跳过入库管道");
    } else {
        let app_db_path = data_dir.join("app").join("sales_data.db");
        let report = promote_latest_to_app_db(&staging_dir, &app_db_path)?;
        tracing::info!(
            rows = report.rows_promoted,
            app_db = %report.app_db.display(),
            "入库管道执行完成"
        );
    }

    // 打印汇总报表
    summary::print_overview(&dataset);

    Ok(())
}

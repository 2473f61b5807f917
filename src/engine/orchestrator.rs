// ==========================================
// 餐饮连锁销售数据模拟系统 - 生成编排器
// ==========================================
// 用途: 协调三个核心引擎, 跑完整生成链路
// 并行: 各门店的生成相互独立（只读共享参数表）,
//       按门店并行执行, 各门店使用私有累积器,
//       最后按门店字典序合并 —— 无需任何锁
// 复现: 每门店随机流种子由主种子确定性派生,
//       固定主种子 ⇒ 数据集逐字节可复现
// ==========================================

use crate::dataset::{GenerationRun, SalesDataset};
use crate::domain::{Location, SaleRecord};
use crate::engine::allocator::ItemAllocator;
use crate::engine::category::CategorySplitter;
use crate::engine::error::EngineError;
use crate::engine::temporal::TemporalDecomposer;
use crate::params::{validate, GenerationParams};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// SalesOrchestrator - 生成编排器
// ==========================================
pub struct SalesOrchestrator {
    params: Arc<GenerationParams>,
    allocator: ItemAllocator,
}

impl SalesOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - params: 校验前的生成参数表（generate 时统一校验）
    pub fn new(params: Arc<GenerationParams>) -> Self {
        Self {
            params,
            allocator: ItemAllocator::new(),
        }
    }

    /// 创建编排器并指定分配引擎（自定义抽取上限时使用）
    pub fn with_allocator(params: Arc<GenerationParams>, allocator: ItemAllocator) -> Self {
        Self { params, allocator }
    }

    /// 执行完整生成链路
    ///
    /// 流程:
    /// 1) 参数校验（配置错误在此全部拦截, 不进入生成）
    /// 2) 按门店并行: 时间分解 → 类目拆分 → 随机填充
    /// 3) 按门店字典序合并各私有累积器
    ///
    /// # 参数
    /// - year: 目标日历年
    /// - seed: 主随机种子（相同种子 ⇒ 相同数据集）
    ///
    /// # 返回
    /// 含运行元数据的销售明细数据集
    pub async fn generate(&self, year: i32, seed: u64) -> Result<SalesDataset, EngineError> {
        // 步骤1: 生成前参数校验
        validate(&self.params)?;

        let run_id = Uuid::new_v4().to_string();
        info!(
            run_id = %run_id,
            year,
            seed,
            locations = self.params.locations.len(),
            "开始执行销售数据生成"
        );

        // 步骤2: 按门店并行生成（spawn_blocking: 纯 CPU 任务）
        let mut handles = Vec::with_capacity(self.params.locations.len());
        for location in self.params.locations.values() {
            let params = Arc::clone(&self.params);
            let location = location.clone();
            let allocator = self.allocator;
            let location_seed = derive_location_seed(seed, &location);

            handles.push(tokio::task::spawn_blocking(move || {
                generate_location(&params, &location, year, location_seed, &allocator)
            }));
        }

        // 步骤3: 按提交顺序（即门店字典序）合并, 与完成顺序无关
        let mut records: Vec<SaleRecord> = Vec::new();
        for result in futures::future::join_all(handles).await {
            let location_records =
                result.map_err(|e| EngineError::TaskJoin(e.to_string()))??;
            records.extend(location_records);
        }

        info!(
            run_id = %run_id,
            records = records.len(),
            "销售数据生成完成"
        );

        Ok(SalesDataset::new(
            GenerationRun {
                run_id,
                seed,
                year,
                generated_at: Local::now().naive_local(),
            },
            records,
        ))
    }
}

/// 生成单个门店全年的销售明细（同步执行）
///
/// 编排器的并行工作单元; 也可直接调用以便测试单门店链路
///
/// # 参数
/// - params: 生成参数表
/// - location: 门店
/// - year: 目标日历年
/// - seed: 该门店的随机流种子
/// - allocator: 菜品分配引擎
pub fn generate_location(
    params: &GenerationParams,
    location: &Location,
    year: i32,
    seed: u64,
    allocator: &ItemAllocator,
) -> Result<Vec<SaleRecord>, EngineError> {
    let decomposer = TemporalDecomposer::new();
    let splitter = CategorySplitter::new();
    let mut rng = StdRng::seed_from_u64(seed);

    let daily_targets = decomposer.daily_targets(params, location, year)?;

    let mut records = Vec::new();
    for daily in &daily_targets {
        let category_targets = splitter.split(params, &location.region, daily)?;
        for target in &category_targets {
            let pool = params.menu.purchasable_items(&target.category);
            let bucket = allocator.fill_bucket(
                location,
                daily.date,
                &target.category,
                target.amount,
                &pool,
                &mut rng,
            )?;
            records.extend(bucket);
        }
    }

    debug!(
        location = %location.name,
        records = records.len(),
        "门店生成完成"
    );
    Ok(records)
}

/// 由主种子确定性派生门店随机流种子
///
/// 门店名与门店编号共同参与混合, 保证不同门店的随机流独立,
/// 且派生结果与并行调度顺序无关
fn derive_location_seed(master_seed: u64, location: &Location) -> u64 {
    let mut mixed = master_seed ^ 0x9E37_79B9_7F4A_7C15;
    for byte in location.name.as_bytes() {
        mixed = mixed.wrapping_mul(31).wrapping_add(*byte as u64);
    }
    mixed.wrapping_add(location.store_number as u64)
}

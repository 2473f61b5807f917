// ==========================================
// CategorySplitter 引擎集成测试
// ==========================================
// 测试目标: 验证日度目标按类目偏好的纯函数拆分
// 覆盖范围: 金额守恒、零权重类目、确定性输出、缺失区域
// ==========================================

use chrono::NaiveDate;
use restaurant_sales_sim::domain::{DailyTarget, Location, MonthCurve, WeekdayCurve};
use restaurant_sales_sim::engine::{CategorySplitter, EngineError};
use restaurant_sales_sim::params::{GenerationParams, ParamsError};
use restaurant_sales_sim::MenuCatalog;
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

fn create_daily_target(amount: f64) -> DailyTarget {
    DailyTarget {
        location: "Testville".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        amount,
    }
}

/// 创建带两个类目（其中一个权重为 0）的参数表
fn create_two_category_params() -> GenerationParams {
    let location = Location {
        name: "Testville".to_string(),
        city: "Testville".to_string(),
        state: "Test State".to_string(),
        store_number: 20001,
        region: "Central".to_string(),
        projected_annual_sales: 1_000_000.0,
    };

    let mut menu = MenuCatalog::new();
    menu.insert_category("mains", &[("Burger", 16.0)]);
    menu.insert_category("desserts", &[("Cheesecake", 9.0)]);

    GenerationParams {
        locations: BTreeMap::from([("Testville".to_string(), location)]),
        monthly_seasonality: BTreeMap::from([(
            "Central".to_string(),
            MonthCurve([1.0 / 12.0; 12]),
        )]),
        weekday_volume: WeekdayCurve([1.0 / 7.0; 7]),
        category_preference: BTreeMap::from([(
            "Central".to_string(),
            BTreeMap::from([("mains".to_string(), 1.0), ("desserts".to_string(), 0.0)]),
        )]),
        menu,
    }
}

// ==========================================
// 测试用例 1: 子目标之和等于日度目标
// ==========================================

#[test]
fn test_sub_targets_sum_to_daily_target() {
    let params = GenerationParams::builtin();
    let splitter = CategorySplitter::new();
    let daily = create_daily_target(10_000.0);

    let sub_targets = splitter.split(&params, "Midwest", &daily).unwrap();

    assert_eq!(sub_targets.len(), 10);
    let total: f64 = sub_targets.iter().map(|t| t.amount).sum();
    assert!(
        (total - daily.amount).abs() < 1e-6,
        "类目子目标之和应等于日度目标: total={}",
        total
    );
}

// ==========================================
// 测试用例 2: 零权重类目产出零子目标
// ==========================================

#[test]
fn test_zero_weight_category_yields_zero_sub_target() {
    let params = create_two_category_params();
    let splitter = CategorySplitter::new();
    let daily = create_daily_target(5_000.0);

    let sub_targets = splitter.split(&params, "Central", &daily).unwrap();

    // BTreeMap 字典序: desserts 在 mains 之前
    assert_eq!(sub_targets.len(), 2);
    assert_eq!(sub_targets[0].category, "desserts");
    assert_eq!(sub_targets[0].amount, 0.0);
    assert_eq!(sub_targets[1].category, "mains");
    assert_eq!(sub_targets[1].amount, 5_000.0);
}

// ==========================================
// 测试用例 3: 纯函数幂等且顺序确定
// ==========================================

#[test]
fn test_split_is_idempotent_with_deterministic_order() {
    let params = GenerationParams::builtin();
    let splitter = CategorySplitter::new();
    let daily = create_daily_target(42_000.0);

    let first = splitter.split(&params, "West", &daily).unwrap();
    let second = splitter.split(&params, "West", &daily).unwrap();

    assert_eq!(first, second);

    let categories: Vec<&str> = first.iter().map(|t| t.category.as_str()).collect();
    let mut sorted = categories.clone();
    sorted.sort_unstable();
    assert_eq!(categories, sorted, "子目标必须按类目名字典序输出");
}

// ==========================================
// 测试用例 4: 零日度目标产出全零子目标
// ==========================================

#[test]
fn test_zero_daily_target_yields_all_zero_sub_targets() {
    let params = GenerationParams::builtin();
    let splitter = CategorySplitter::new();
    let daily = create_daily_target(0.0);

    let sub_targets = splitter.split(&params, "Southeast", &daily).unwrap();

    assert!(sub_targets.iter().all(|t| t.amount == 0.0));
}

// ==========================================
// 测试用例 5: 缺失区域分布为致命配置错误
// ==========================================

#[test]
fn test_missing_region_preference_is_fatal() {
    let params = GenerationParams::builtin();
    let splitter = CategorySplitter::new();
    let daily = create_daily_target(1_000.0);

    let result = splitter.split(&params, "Atlantis", &daily);

    assert!(matches!(
        result,
        Err(EngineError::InvalidParams(ParamsError::MissingCategoryPreference(region))) if region == "Atlantis"
    ));
}

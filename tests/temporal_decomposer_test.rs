// ==========================================
// TemporalDecomposer 引擎集成测试
// ==========================================
// 测试目标: 验证 年度 → 月度 → 日度 级联分解
// 覆盖范围: 总额守恒、星期均摊、零权重月份、确定性输出
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use restaurant_sales_sim::domain::{Location, MonthCurve, WeekdayCurve};
use restaurant_sales_sim::engine::{EngineError, TemporalDecomposer};
use restaurant_sales_sim::params::{GenerationParams, ParamsError};
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的单区域参数表
fn create_single_region_params(annual_sales: f64, curve: MonthCurve) -> GenerationParams {
    let location = Location {
        name: "Testville".to_string(),
        city: "Testville".to_string(),
        state: "Test State".to_string(),
        store_number: 20001,
        region: "Central".to_string(),
        projected_annual_sales: annual_sales,
    };

    let mut menu = restaurant_sales_sim::MenuCatalog::new();
    menu.insert_category("mains", &[("Burger", 16.0)]);

    GenerationParams {
        locations: BTreeMap::from([("Testville".to_string(), location)]),
        monthly_seasonality: BTreeMap::from([("Central".to_string(), curve)]),
        weekday_volume: WeekdayCurve([1.0 / 7.0; 7]),
        category_preference: BTreeMap::from([(
            "Central".to_string(),
            BTreeMap::from([("mains".to_string(), 1.0)]),
        )]),
        menu,
    }
}

fn uniform_month_curve() -> MonthCurve {
    MonthCurve([1.0 / 12.0; 12])
}

// ==========================================
// 测试用例 1: 年度总额守恒
// ==========================================

#[test]
fn test_daily_targets_sum_to_annual_target() {
    let params = GenerationParams::builtin();
    let decomposer = TemporalDecomposer::new();
    let chicago = params.locations.get("Chicago").unwrap();

    let targets = decomposer
        .daily_targets(&params, chicago, 2023)
        .expect("内置参数下分解不应失败");

    let total: f64 = targets.iter().map(|t| t.amount).sum();
    assert!(
        (total - chicago.projected_annual_sales).abs() < 1e-3,
        "全年日度目标之和应等于年度目标: total={}",
        total
    );
}

// ==========================================
// 测试用例 2: 覆盖全年且按日期升序
// ==========================================

#[test]
fn test_daily_targets_cover_year_in_ascending_order() {
    let params = create_single_region_params(1_000_000.0, uniform_month_curve());
    let decomposer = TemporalDecomposer::new();
    let location = params.locations.get("Testville").unwrap();

    let targets = decomposer.daily_targets(&params, location, 2023).unwrap();

    // 2023 年为平年
    assert_eq!(targets.len(), 365);
    assert_eq!(targets[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    assert_eq!(
        targets[364].date,
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    );
    assert!(targets.windows(2).all(|pair| pair[0].date < pair[1].date));

    // 闰年覆盖 366 天
    let leap_targets = decomposer.daily_targets(&params, location, 2024).unwrap();
    assert_eq!(leap_targets.len(), 366);
}

// ==========================================
// 测试用例 3: 同星期日历日均摊
// ==========================================

#[test]
fn test_same_weekday_dates_share_equal_amount_within_month() {
    let params = GenerationParams::builtin();
    let decomposer = TemporalDecomposer::new();
    let boston = params.locations.get("Boston").unwrap();

    let targets = decomposer.daily_targets(&params, boston, 2023).unwrap();

    // 2023 年 3 月的所有周五金额应完全一致
    let march_fridays: Vec<f64> = targets
        .iter()
        .filter(|t| t.date.month() == 3 && t.date.weekday() == Weekday::Fri)
        .map(|t| t.amount)
        .collect();

    assert!(march_fridays.len() >= 4);
    for amount in &march_fridays {
        assert_eq!(*amount, march_fridays[0]);
    }
}

// ==========================================
// 测试用例 4: 零权重月份产出全 0 目标
// ==========================================

#[test]
fn test_zero_weight_month_yields_zero_targets() {
    // 一月权重 0, 其余月份均分
    let mut weights = [1.0 / 11.0; 12];
    weights[0] = 0.0;
    let params = create_single_region_params(500_000.0, MonthCurve(weights));
    let decomposer = TemporalDecomposer::new();
    let location = params.locations.get("Testville").unwrap();

    let targets = decomposer.daily_targets(&params, location, 2023).unwrap();

    for target in targets.iter().filter(|t| t.date.month() == 1) {
        assert_eq!(target.amount, 0.0, "零权重月份的日度目标必须为 0");
    }
    for target in targets.iter().filter(|t| t.date.month() == 2) {
        assert!(target.amount > 0.0);
    }
}

// ==========================================
// 测试用例 5: 纯函数幂等
// ==========================================

#[test]
fn test_decomposition_is_idempotent() {
    let params = GenerationParams::builtin();
    let decomposer = TemporalDecomposer::new();
    let miami = params.locations.get("Miami").unwrap();

    let first = decomposer.daily_targets(&params, miami, 2023).unwrap();
    let second = decomposer.daily_targets(&params, miami, 2023).unwrap();

    assert_eq!(first, second);
}

// ==========================================
// 测试用例 6: 缺失区域曲线为致命配置错误
// ==========================================

#[test]
fn test_missing_region_curve_is_fatal() {
    let mut params = create_single_region_params(1_000_000.0, uniform_month_curve());
    params.monthly_seasonality.clear();
    let decomposer = TemporalDecomposer::new();
    let location = params.locations.get("Testville").unwrap().clone();

    let result = decomposer.daily_targets(&params, &location, 2023);

    assert!(matches!(
        result,
        Err(EngineError::InvalidParams(ParamsError::MissingSeasonality(region))) if region == "Central"
    ));
}

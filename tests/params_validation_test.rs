// ==========================================
// 参数校验集成测试
// ==========================================
// 测试目标: 验证生成前的参数完整性校验
// 覆盖范围: 内置参数表、区域引用完整性、权重和约束、
//           类目引用完整性、退化类目、JSON 参数文件往返
// ==========================================

use restaurant_sales_sim::domain::{Location, MonthCurve, WeekdayCurve};
use restaurant_sales_sim::params::{validate, GenerationParams, ParamsError};
use restaurant_sales_sim::MenuCatalog;
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建最小合法参数表（单区域双类目）
fn create_minimal_params() -> GenerationParams {
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
    menu.insert_category("freebies", &[("Water", 0.0)]);

    GenerationParams {
        locations: BTreeMap::from([("Testville".to_string(), location)]),
        monthly_seasonality: BTreeMap::from([(
            "Central".to_string(),
            MonthCurve([1.0 / 12.0; 12]),
        )]),
        weekday_volume: WeekdayCurve([1.0 / 7.0; 7]),
        category_preference: BTreeMap::from([(
            "Central".to_string(),
            BTreeMap::from([("mains".to_string(), 1.0), ("freebies".to_string(), 0.0)]),
        )]),
        menu,
    }
}

// ==========================================
// 测试用例 1: 内置参数表通过全部校验
// ==========================================

#[test]
fn test_builtin_params_are_valid() {
    let params = GenerationParams::builtin();
    validate(&params).expect("内置参数表必须通过校验");
}

// ==========================================
// 测试用例 2: 区域引用完整性
// ==========================================

#[test]
fn test_location_region_must_have_seasonality() {
    let mut params = create_minimal_params();
    params.monthly_seasonality.clear();

    assert!(matches!(
        validate(&params),
        Err(ParamsError::MissingSeasonality(region)) if region == "Central"
    ));
}

#[test]
fn test_location_region_must_have_category_preference() {
    let mut params = create_minimal_params();
    params.category_preference.clear();

    assert!(matches!(
        validate(&params),
        Err(ParamsError::MissingCategoryPreference(region)) if region == "Central"
    ));
}

// ==========================================
// 测试用例 3: 权重和必须约等于 1.0
// ==========================================

#[test]
fn test_weekday_curve_sum_must_be_one() {
    let mut params = create_minimal_params();
    params.weekday_volume = WeekdayCurve([0.2; 7]);

    assert!(matches!(
        validate(&params),
        Err(ParamsError::WeightSumMismatch {
            table: "weekday_volume",
            ..
        })
    ));
}

#[test]
fn test_seasonality_sum_must_be_one() {
    let mut params = create_minimal_params();
    params
        .monthly_seasonality
        .insert("Central".to_string(), MonthCurve([0.1; 12]));

    assert!(matches!(
        validate(&params),
        Err(ParamsError::WeightSumMismatch {
            table: "monthly_seasonality",
            ..
        })
    ));
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut params = create_minimal_params();
    let mut weights = [1.0 / 11.0; 12];
    weights[3] = -1.0 / 11.0;
    params
        .monthly_seasonality
        .insert("Central".to_string(), MonthCurve(weights));

    assert!(matches!(
        validate(&params),
        Err(ParamsError::InvalidWeight {
            table: "monthly_seasonality",
            ..
        })
    ));
}

// ==========================================
// 测试用例 4: 类目引用完整性
// ==========================================

#[test]
fn test_preference_category_must_exist_in_menu() {
    let mut params = create_minimal_params();
    if let Some(weights) = params.category_preference.get_mut("Central") {
        weights.insert("brunch".to_string(), 0.0);
    }

    assert!(matches!(
        validate(&params),
        Err(ParamsError::UnknownCategory { category, .. }) if category == "brunch"
    ));
}

// ==========================================
// 测试用例 5: 退化类目
// ==========================================

#[test]
fn test_positive_weight_degenerate_category_is_rejected() {
    let mut params = create_minimal_params();
    if let Some(weights) = params.category_preference.get_mut("Central") {
        weights.insert("mains".to_string(), 0.95);
        weights.insert("freebies".to_string(), 0.05);
    }

    assert!(matches!(
        validate(&params),
        Err(ParamsError::DegenerateCategory(category)) if category == "freebies"
    ));
}

#[test]
fn test_zero_weight_degenerate_category_is_allowed() {
    // freebies 只含单价 0 的菜品, 但权重为 0: 合法的"无明细"类目
    let params = create_minimal_params();
    validate(&params).expect("零权重退化类目不应导致校验失败");
}

// ==========================================
// 测试用例 6: 非法数值
// ==========================================

#[test]
fn test_negative_annual_target_is_rejected() {
    let mut params = create_minimal_params();
    if let Some(location) = params.locations.get_mut("Testville") {
        location.projected_annual_sales = -1.0;
    }

    assert!(matches!(
        validate(&params),
        Err(ParamsError::InvalidAnnualTarget { .. })
    ));
}

#[test]
fn test_negative_unit_price_is_rejected() {
    let mut params = create_minimal_params();
    params.menu.insert_category("mains", &[("Mystery Meat", -5.0)]);

    assert!(matches!(
        validate(&params),
        Err(ParamsError::InvalidUnitPrice { item, .. }) if item == "Mystery Meat"
    ));
}

// ==========================================
// 测试用例 7: JSON 参数文件往返
// ==========================================

#[test]
fn test_json_file_round_trip() {
    let params = GenerationParams::builtin();
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("params.json");

    params.to_json_file(&path).expect("写出参数文件失败");
    let reloaded = GenerationParams::from_json_file(&path).expect("载入参数文件失败");

    assert_eq!(params, reloaded);
    validate(&reloaded).expect("往返后的参数表必须仍然合法");
}

// ==========================================
// 餐饮连锁销售数据模拟系统 - 参数校验器
// ==========================================
// 职责: 在任何生成运行之前对参数表做完整性校验
// 校验项:
// - 门店年度目标非负且有限
// - 门店引用的区域在季节性/类目偏好表中存在
// - 各权重曲线非负、有限、和约等于 1.0
// - 类目偏好引用的类目在菜单中存在
// - 退化类目拒绝（权重为正但无可售菜品）
// 所有错误为致命错误，立即上报，不重试
// ==========================================

use crate::params::error::ParamsError;
use crate::params::store::GenerationParams;
use tracing::debug;

/// 权重之和允许的浮点容差
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// 校验生成参数表
///
/// # 返回
/// - Ok(()): 参数可用于生成
/// - Err(ParamsError): 首个被发现的致命配置错误
pub fn validate(params: &GenerationParams) -> Result<(), ParamsError> {
    validate_locations(params)?;
    validate_weekday_curve(params)?;
    validate_seasonality_curves(params)?;
    validate_category_preferences(params)?;
    validate_menu_prices(params)?;
    validate_no_degenerate_categories(params)?;

    debug!(
        locations = params.locations.len(),
        regions = params.monthly_seasonality.len(),
        categories = params.menu.category_count(),
        "参数校验通过"
    );
    Ok(())
}

// ===== 门店表 =====
fn validate_locations(params: &GenerationParams) -> Result<(), ParamsError> {
    for (name, location) in &params.locations {
        if !location.projected_annual_sales.is_finite() || location.projected_annual_sales < 0.0 {
            return Err(ParamsError::InvalidAnnualTarget {
                location: name.clone(),
                value: location.projected_annual_sales,
            });
        }

        // 区域引用完整性: 三张曲线表中只有星期曲线是全局共享的
        params.seasonality_for(&location.region)?;
        params.category_preference_for(&location.region)?;
    }
    Ok(())
}

// ===== 星期分布曲线 =====
fn validate_weekday_curve(params: &GenerationParams) -> Result<(), ParamsError> {
    for (idx, weight) in params.weekday_volume.0.iter().enumerate() {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ParamsError::InvalidWeight {
                table: "weekday_volume",
                key: crate::domain::WEEKDAY_NAMES[idx].to_string(),
                value: *weight,
            });
        }
    }

    let sum = params.weekday_volume.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ParamsError::WeightSumMismatch {
            table: "weekday_volume",
            key: "global".to_string(),
            sum,
        });
    }
    Ok(())
}

// ===== 月度季节性曲线 =====
fn validate_seasonality_curves(params: &GenerationParams) -> Result<(), ParamsError> {
    for (region, curve) in &params.monthly_seasonality {
        for (idx, weight) in curve.0.iter().enumerate() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ParamsError::InvalidWeight {
                    table: "monthly_seasonality",
                    key: format!("{}/{}", region, crate::domain::MONTH_NAMES[idx]),
                    value: *weight,
                });
            }
        }

        let sum = curve.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ParamsError::WeightSumMismatch {
                table: "monthly_seasonality",
                key: region.clone(),
                sum,
            });
        }
    }
    Ok(())
}

// ===== 类目偏好分布 =====
fn validate_category_preferences(params: &GenerationParams) -> Result<(), ParamsError> {
    for (region, weights) in &params.category_preference {
        for (category, weight) in weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ParamsError::InvalidWeight {
                    table: "category_preference",
                    key: format!("{}/{}", region, category),
                    value: *weight,
                });
            }

            // 被引用的类目必须在菜单价格表中存在（权重为 0 也不例外）
            if !params.menu.contains_category(category) {
                return Err(ParamsError::UnknownCategory {
                    region: region.clone(),
                    category: category.clone(),
                });
            }
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ParamsError::WeightSumMismatch {
                table: "category_preference",
                key: region.clone(),
                sum,
            });
        }
    }
    Ok(())
}

// ===== 菜单单价 =====
fn validate_menu_prices(params: &GenerationParams) -> Result<(), ParamsError> {
    for category in params.menu.category_names() {
        if let Some(items) = params.menu.items(category) {
            for (item, price) in items {
                if !price.is_finite() || *price < 0.0 {
                    return Err(ParamsError::InvalidUnitPrice {
                        category: category.to_string(),
                        item: item.clone(),
                        price: *price,
                    });
                }
            }
        }
    }
    Ok(())
}

// ===== 退化类目 =====
// 权重为正的类目若只含单价为 0 的菜品，分配循环无法向子目标推进
fn validate_no_degenerate_categories(params: &GenerationParams) -> Result<(), ParamsError> {
    for weights in params.category_preference.values() {
        for (category, weight) in weights {
            if *weight > 0.0 && params.menu.purchasable_items(category).is_empty() {
                return Err(ParamsError::DegenerateCategory(category.clone()));
            }
        }
    }
    Ok(())
}

// ==========================================
// 餐饮连锁销售数据模拟系统 - 生成参数存储
// ==========================================
// 职责: 持有一次生成运行所需的全部业务参数表
// 来源: 内置默认参数表，或外部 JSON 参数文件
// 红线: 构造后只读; 引擎通过引用访问，禁止全局可变状态
// ==========================================

use crate::domain::{Location, MenuCatalog, MonthCurve, WeekdayCurve};
use crate::params::error::ParamsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ==========================================
// GenerationParams - 生成参数对象
// ==========================================
// 全部容器使用 BTreeMap，保证遍历顺序确定，
// 配合固定随机种子实现逐字节可复现的数据集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// 门店表（键 = 门店名称）
    pub locations: BTreeMap<String, Location>,

    /// 区域月度季节性曲线（键 = 区域名称）
    pub monthly_seasonality: BTreeMap<String, MonthCurve>,

    /// 星期销量分布曲线（全区域共享）
    pub weekday_volume: WeekdayCurve,

    /// 区域类目偏好分布（键 = 区域名称 → 类目 → 权重）
    pub category_preference: BTreeMap<String, BTreeMap<String, f64>>,

    /// 菜单价格表
    pub menu: MenuCatalog,
}

impl GenerationParams {
    /// 内置默认参数表（19 家门店 / 5 个区域 / 10 个菜单类目）
    pub fn builtin() -> Self {
        crate::params::defaults::builtin()
    }

    /// 从 JSON 字符串解析参数
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 参数文件载入
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 写出 JSON 参数文件（缩进格式，便于人工调整）
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// 获取区域的月度季节性曲线
    ///
    /// # 返回
    /// - Err(ParamsError::MissingSeasonality): 区域未配置曲线
    pub fn seasonality_for(&self, region: &str) -> Result<&MonthCurve, ParamsError> {
        self.monthly_seasonality
            .get(region)
            .ok_or_else(|| ParamsError::MissingSeasonality(region.to_string()))
    }

    /// 获取区域的类目偏好分布
    ///
    /// # 返回
    /// - Err(ParamsError::MissingCategoryPreference): 区域未配置分布
    pub fn category_preference_for(
        &self,
        region: &str,
    ) -> Result<&BTreeMap<String, f64>, ParamsError> {
        self.category_preference
            .get(region)
            .ok_or_else(|| ParamsError::MissingCategoryPreference(region.to_string()))
    }
}

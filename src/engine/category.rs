// ==========================================
// 餐饮连锁销售数据模拟系统 - 类目拆分引擎
// ==========================================
// 职责: 把日度目标按区域类目偏好拆分为类目子目标
// 性质: 纯函数, 无状态, 无随机; 相同输入必得相同输出
// ==========================================

use crate::domain::{CategoryTarget, DailyTarget};
use crate::engine::error::EngineError;
use crate::params::GenerationParams;

// ==========================================
// CategorySplitter - 类目拆分引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySplitter;

impl CategorySplitter {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 拆分日度目标为类目子目标
    ///
    /// sub_target[c] = 日度目标 × 区域类目权重[c]
    ///
    /// 权重为 0 的类目照常产出金额为 0 的子目标,
    /// 由分配引擎将其识别为"无明细"而非错误
    ///
    /// # 参数
    /// - params: 生成参数表
    /// - region: 门店所属区域
    /// - daily: 日度目标
    ///
    /// # 返回
    /// 按类目名字典序的 CategoryTarget 列表
    pub fn split(
        &self,
        params: &GenerationParams,
        region: &str,
        daily: &DailyTarget,
    ) -> Result<Vec<CategoryTarget>, EngineError> {
        let weights = params.category_preference_for(region)?;

        Ok(weights
            .iter()
            .map(|(category, weight)| CategoryTarget {
                category: category.clone(),
                amount: daily.amount * weight,
            })
            .collect())
    }
}

// ==========================================
// 餐饮连锁销售数据模拟系统 - 数据集汇总报表
// ==========================================
// 职责: 生成结果的探索性汇总（菜品/类目/门店三个维度）
// 输出: 控制台 Markdown 表格, 金额千分位格式化
// 注意: 报表只读数据集, 折叠聚合发生在这里而非生成核心
// ==========================================

use crate::dataset::SalesDataset;
use crate::domain::SaleRecord;
use num_format::{Locale, ToFormattedString};
use std::collections::BTreeMap;
use tabled::{settings::Style, Table, Tabled};

// ==========================================
// 汇总行类型
// ==========================================

#[derive(Debug, Clone, Tabled)]
pub struct ItemSummaryRow {
    #[tabled(rename = "menu_item")]
    pub menu_item: String,
    #[tabled(rename = "quantity_sold")]
    pub quantity_sold: String,
    #[tabled(rename = "net_sales")]
    pub net_sales: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct CategorySummaryRow {
    #[tabled(rename = "category")]
    pub category: String,
    #[tabled(rename = "quantity_sold")]
    pub quantity_sold: String,
    #[tabled(rename = "net_sales")]
    pub net_sales: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct LocationSummaryRow {
    #[tabled(rename = "location")]
    pub location: String,
    #[tabled(rename = "region")]
    pub region: String,
    #[tabled(rename = "net_sales")]
    pub net_sales: String,
}

// 聚合累积器
#[derive(Default, Clone)]
struct Agg {
    quantity: u64,
    net_sales: f64,
}

fn aggregate_by<K, F>(records: &[SaleRecord], key_fn: F) -> BTreeMap<K, Agg>
where
    K: Ord,
    F: Fn(&SaleRecord) -> K,
{
    let mut map: BTreeMap<K, Agg> = BTreeMap::new();
    for record in records {
        let entry = map.entry(key_fn(record)).or_default();
        entry.quantity += record.quantity_sold as u64;
        entry.net_sales += record.net_sales;
    }
    map
}

// ==========================================
// 汇总函数
// ==========================================

/// 按菜品汇总销量与净销售额（净销售额降序, 取前 top 行）
pub fn by_menu_item(records: &[SaleRecord], top: usize) -> Vec<ItemSummaryRow> {
    let mut rows: Vec<(String, Agg)> = aggregate_by(records, |r| r.menu_item.clone())
        .into_iter()
        .collect();
    rows.sort_by(|a, b| b.1.net_sales.total_cmp(&a.1.net_sales));

    rows.into_iter()
        .take(top)
        .map(|(menu_item, agg)| ItemSummaryRow {
            menu_item,
            quantity_sold: format_quantity(agg.quantity),
            net_sales: format_usd(agg.net_sales),
        })
        .collect()
}

/// 按类目汇总销量与净销售额（净销售额降序）
pub fn by_category(records: &[SaleRecord]) -> Vec<CategorySummaryRow> {
    let mut rows: Vec<(String, Agg)> = aggregate_by(records, |r| r.category.clone())
        .into_iter()
        .collect();
    rows.sort_by(|a, b| b.1.net_sales.total_cmp(&a.1.net_sales));

    rows.into_iter()
        .map(|(category, agg)| CategorySummaryRow {
            category,
            quantity_sold: format_quantity(agg.quantity),
            net_sales: format_usd(agg.net_sales),
        })
        .collect()
}

/// 按门店汇总净销售额（净销售额降序）
pub fn by_location(records: &[SaleRecord]) -> Vec<LocationSummaryRow> {
    let mut rows: Vec<((String, String), Agg)> =
        aggregate_by(records, |r| (r.location.clone(), r.region.clone()))
            .into_iter()
            .collect();
    rows.sort_by(|a, b| b.1.net_sales.total_cmp(&a.1.net_sales));

    rows.into_iter()
        .map(|((location, region), agg)| LocationSummaryRow {
            location,
            region,
            net_sales: format_usd(agg.net_sales),
        })
        .collect()
}

/// 打印数据集总览（总额 + 三张维度汇总表）
pub fn print_overview(dataset: &SalesDataset) {
    println!("\n--- 销售数据集总览 ---\n");
    println!("运行ID: {}", dataset.run.run_id);
    println!("目标年份: {}  随机种子: {}", dataset.run.year, dataset.run.seed);
    println!("明细行数: {}", format_quantity(dataset.len() as u64));
    println!("总销售数量: {}", format_quantity(dataset.total_quantity()));
    println!("总净销售额: {}", format_usd(dataset.total_net_sales()));

    print_table("菜品净销售额 Top 25", &by_menu_item(&dataset.records, 25));
    print_table("类目汇总", &by_category(&dataset.records));
    print_table("门店汇总", &by_location(&dataset.records));
}

fn print_table<T: Tabled>(title: &str, rows: &[T]) {
    println!("\n--- {} ---\n", title);
    if rows.is_empty() {
        println!("(no rows)\n");
        return;
    }
    println!("{}\n", Table::new(rows).with(Style::markdown()));
}

// ==========================================
// 格式化辅助
// ==========================================

fn format_quantity(quantity: u64) -> String {
    quantity.to_formatted_string(&Locale::en)
}

fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let dollars = cents / 100;
    let remainder = (cents % 100).abs();
    format!("${}.{:02}", dollars.to_formatted_string(&Locale::en), remainder)
}

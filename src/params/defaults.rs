// ==========================================
// 餐饮连锁销售数据模拟系统 - 内置默认参数表
// ==========================================
// 内容: 连锁门店组合、区域月度季节性、星期销量分布、
//       区域类目偏好、菜单价格表
// 约束: 各权重曲线之和必须为 1.0（validator 在生成前校验）
// ==========================================

use crate::domain::{Location, MenuCatalog, MonthCurve, WeekdayCurve};
use crate::params::store::GenerationParams;
use std::collections::BTreeMap;

/// 构造内置默认参数表
pub fn builtin() -> GenerationParams {
    GenerationParams {
        locations: builtin_locations(),
        monthly_seasonality: builtin_monthly_seasonality(),
        weekday_volume: builtin_weekday_volume(),
        category_preference: builtin_category_preference(),
        menu: builtin_menu(),
    }
}

fn location(
    name: &str,
    state: &str,
    store_number: u32,
    region: &str,
    projected_annual_sales: f64,
) -> (String, Location) {
    (
        name.to_string(),
        Location {
            name: name.to_string(),
            city: name.to_string(),
            state: state.to_string(),
            store_number,
            region: region.to_string(),
            projected_annual_sales,
        },
    )
}

// ==========================================
// 门店组合
// ==========================================
fn builtin_locations() -> BTreeMap<String, Location> {
    BTreeMap::from([
        location("Atlanta", "Georgia", 10001, "Southeast", 7_000_000.0),
        location("Austin", "Texas", 10002, "Southwest", 9_000_000.0),
        location("Boston", "Massachusetts", 10003, "Northeast", 11_000_000.0),
        location("Chicago", "Illinois", 10004, "Midwest", 14_000_000.0),
        location("Dallas", "Texas", 10005, "Southwest", 12_000_000.0),
        location("Denver", "Colorado", 10006, "West", 10_000_000.0),
        location("Detroit", "Michigan", 10007, "Midwest", 6_000_000.0),
        location("Houston", "Texas", 10008, "Southwest", 9_000_000.0),
        location("Las Vegas", "Nevada", 10009, "West", 14_000_000.0),
        location("Los Angeles", "California", 10010, "West", 16_000_000.0),
        location("Miami", "Florida", 10011, "Southeast", 15_000_000.0),
        location("Minneapolis", "Minnesota", 10012, "Midwest", 8_000_000.0),
        location("Nashville", "Tennessee", 10013, "Southeast", 9_000_000.0),
        location("New Orleans", "Louisiana", 10014, "Southeast", 7_000_000.0),
        location("New York", "New York", 10015, "Northeast", 18_000_000.0),
        location("Philadelphia", "Pennsylvania", 10016, "Northeast", 10_000_000.0),
        location("Portland", "Oregon", 10017, "West", 9_000_000.0),
        location("San Francisco", "California", 10018, "West", 14_000_000.0),
        location("Seattle", "Washington", 10019, "West", 12_000_000.0),
    ])
}

// ==========================================
// 区域月度季节性曲线（下标 0 = 一月）
// ==========================================
fn builtin_monthly_seasonality() -> BTreeMap<String, MonthCurve> {
    BTreeMap::from([
        (
            "Midwest".to_string(),
            MonthCurve([
                0.04, 0.04, 0.06, 0.08, 0.10, 0.12, 0.12, 0.10, 0.09, 0.09, 0.08, 0.08,
            ]),
        ),
        (
            "Northeast".to_string(),
            MonthCurve([
                0.04, 0.04, 0.06, 0.08, 0.09, 0.10, 0.11, 0.10, 0.09, 0.09, 0.10, 0.10,
            ]),
        ),
        (
            "Southeast".to_string(),
            MonthCurve([
                0.07, 0.07, 0.09, 0.09, 0.10, 0.10, 0.09, 0.09, 0.07, 0.07, 0.08, 0.08,
            ]),
        ),
        (
            "Southwest".to_string(),
            MonthCurve([
                0.05, 0.05, 0.07, 0.08, 0.09, 0.09, 0.09, 0.09, 0.09, 0.10, 0.10, 0.10,
            ]),
        ),
        (
            "West".to_string(),
            MonthCurve([
                0.05, 0.05, 0.07, 0.08, 0.09, 0.10, 0.10, 0.10, 0.09, 0.09, 0.09, 0.09,
            ]),
        ),
    ])
}

// ==========================================
// 星期销量分布曲线（下标 0 = 周一）
// ==========================================
// 周末为销量高峰，周一/周二最低
fn builtin_weekday_volume() -> WeekdayCurve {
    WeekdayCurve([0.09, 0.09, 0.10, 0.11, 0.20, 0.22, 0.19])
}

fn prefs(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(category, weight)| ((*category).to_string(), *weight))
        .collect()
}

// ==========================================
// 区域类目偏好分布
// ==========================================
fn builtin_category_preference() -> BTreeMap<String, BTreeMap<String, f64>> {
    BTreeMap::from([
        (
            "Midwest".to_string(),
            prefs(&[
                ("starters", 0.14),
                ("salads", 0.06),
                ("mains", 0.30),
                ("sides", 0.08),
                ("add-ons", 0.05),
                ("desserts", 0.07),
                ("beer", 0.12),
                ("wine", 0.06),
                ("cocktails", 0.07),
                ("non_alcoholic_beverages", 0.05),
            ]),
        ),
        (
            "Northeast".to_string(),
            prefs(&[
                ("starters", 0.10),
                ("salads", 0.10),
                ("mains", 0.22),
                ("sides", 0.18),
                ("add-ons", 0.05),
                ("desserts", 0.05),
                ("beer", 0.05),
                ("wine", 0.08),
                ("cocktails", 0.12),
                ("non_alcoholic_beverages", 0.05),
            ]),
        ),
        (
            "Southeast".to_string(),
            prefs(&[
                ("starters", 0.10),
                ("salads", 0.05),
                ("mains", 0.30),
                ("sides", 0.10),
                ("add-ons", 0.10),
                ("desserts", 0.05),
                ("beer", 0.09),
                ("wine", 0.06),
                ("cocktails", 0.10),
                ("non_alcoholic_beverages", 0.05),
            ]),
        ),
        (
            "Southwest".to_string(),
            prefs(&[
                ("starters", 0.10),
                ("salads", 0.10),
                ("mains", 0.30),
                ("sides", 0.10),
                ("add-ons", 0.05),
                ("desserts", 0.05),
                ("beer", 0.10),
                ("wine", 0.10),
                ("cocktails", 0.05),
                ("non_alcoholic_beverages", 0.05),
            ]),
        ),
        (
            "West".to_string(),
            prefs(&[
                ("starters", 0.09),
                ("salads", 0.12),
                ("mains", 0.28),
                ("sides", 0.09),
                ("add-ons", 0.05),
                ("desserts", 0.05),
                ("beer", 0.05),
                ("wine", 0.15),
                ("cocktails", 0.07),
                ("non_alcoholic_beverages", 0.05),
            ]),
        ),
    ])
}

// ==========================================
// 菜单价格表
// ==========================================
// 注意: "Water" 单价为 0，属于不可售分配单元，
// 由 MenuCatalog::purchasable_items 在抽取池中排除
fn builtin_menu() -> MenuCatalog {
    let mut menu = MenuCatalog::new();

    menu.insert_category(
        "starters",
        &[
            ("Chicken Wings", 12.0),
            ("Shrimp Cocktail", 14.0),
            ("Calamari", 12.0),
            ("Charcuterie Board", 22.0),
            ("Fried Pickles", 8.0),
            ("Bruschetta", 10.0),
            ("Spinach & Artichoke Dip", 9.0),
            ("Baked Brie", 14.0),
        ],
    );

    menu.insert_category(
        "salads",
        &[
            ("Caesar Salad", 12.0),
            ("Garden Salad", 10.0),
            ("Greek Salad", 14.0),
            ("Cobb Salad", 16.0),
            ("Caprese Salad", 14.0),
            ("Wedge Salad", 12.0),
            ("Tuna Nicoise Salad", 16.0),
            ("Kale & Quinoa Salad", 14.0),
            ("Beet & Goat Cheese Salad", 14.0),
        ],
    );

    menu.insert_category(
        "mains",
        &[
            ("Burger", 16.0),
            ("Fried Chicken Sandwich", 14.0),
            ("Ribeye Steak", 45.0),
            ("NY Strip Steak", 42.0),
            ("Smoked Beef Rib", 48.0),
            ("Pork Chop", 32.0),
            ("Lamb Chops", 38.0),
            ("Duck Breast", 36.0),
            ("Blackened Chicken", 22.0),
            ("Salmon", 28.0),
            ("Rainbow Trout", 26.0),
            ("Scallops", 32.0),
            ("Lobster Tail", 48.0),
            ("Shrimp Scampi", 28.0),
            ("Grilled Cheese", 12.0),
        ],
    );

    menu.insert_category(
        "sides",
        &[
            ("French Fries", 6.0),
            ("Sweet Potato Fries", 8.0),
            ("Mashed Potatoes", 6.0),
            ("Mac & Cheese", 10.0),
            ("Onion Rings", 8.0),
            ("Brussels Sprouts", 10.0),
            ("Grilled Asparagus", 10.0),
            ("Side Salad", 6.0),
            ("Garlic Bread", 6.0),
            ("Roasted Fingerling Potatoes", 9.0),
            ("Creamed Spinach", 9.0),
        ],
    );

    menu.insert_category(
        "add-ons",
        &[
            ("add Bacon", 3.0),
            ("add Avocado", 3.0),
            ("add Fried Egg", 2.0),
            ("add Cheese", 2.0),
            ("add Sauce", 1.0),
            ("add Dressing", 1.0),
            ("add Grilled Chicken", 6.0),
            ("add Grilled Shrimp", 8.0),
            ("add Grilled Salmon", 10.0),
            ("add Grilled NY Strip Steak", 12.0),
        ],
    );

    menu.insert_category(
        "desserts",
        &[
            ("Cheesecake", 9.0),
            ("Devil's Food Cake", 8.0),
            ("Tiramisu", 10.0),
            ("Ice Cream", 6.0),
            ("Chocolate Mousse", 8.0),
            ("Apple Pie", 8.0),
            ("Flourless Chocolate Torte", 9.0),
            ("Raspberry Tart", 10.0),
        ],
    );

    menu.insert_category(
        "beer",
        &[
            ("Bell's Two Hearted Ale", 6.0),
            ("Founders All Day IPA", 5.0),
            ("Bell's Oberon Ale", 6.0),
            ("New Belgium Fat Tire", 5.0),
            ("Guinness Draught", 6.0),
            ("Coors Light", 4.0),
            ("Corona Extra", 5.0),
            ("Modelo Especial", 5.0),
            ("Modelo Negra", 5.0),
            ("Hamm's", 3.0),
        ],
    );

    menu.insert_category(
        "wine",
        &[
            ("Cabernet Sauvignon", 12.0),
            ("Pinot Noir", 10.0),
            ("Chardonnay", 10.0),
            ("Sauvignon Blanc", 10.0),
            ("Merlot", 10.0),
            ("Riesling", 10.0),
            ("Malbec", 12.0),
            ("Rose", 10.0),
            ("Prosecco", 10.0),
            ("Champagne", 15.0),
            ("Port", 12.0),
        ],
    );

    menu.insert_category(
        "cocktails",
        &[
            ("Old Fashioned", 12.0),
            ("Margarita", 10.0),
            ("Martini", 12.0),
            ("Mojito", 10.0),
            ("Cosmopolitan", 10.0),
            ("Moscow Mule", 10.0),
            ("Negroni", 12.0),
            ("Whiskey Sour", 10.0),
        ],
    );

    menu.insert_category(
        "non_alcoholic_beverages",
        &[
            ("Water", 0.0),
            ("Bottled Still Water", 6.0),
            ("Bottled Sparkling Water", 6.0),
            ("Coffee", 3.0),
            ("Latte", 5.0),
            ("Cappuccino", 5.0),
            ("Hot Tea", 3.0),
            ("Iced Tea", 2.0),
            ("Coke", 2.0),
            ("Diet Coke", 2.0),
            ("Sprite", 2.0),
            ("Root Beer", 2.0),
        ],
    );

    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_complete() {
        let params = builtin();
        assert_eq!(params.locations.len(), 19);
        assert_eq!(params.monthly_seasonality.len(), 5);
        assert_eq!(params.category_preference.len(), 5);
        assert_eq!(params.menu.category_count(), 10);
    }

    #[test]
    fn test_builtin_regions_cover_all_locations() {
        let params = builtin();
        for location in params.locations.values() {
            assert!(
                params.monthly_seasonality.contains_key(&location.region),
                "region {} missing seasonality",
                location.region
            );
            assert!(
                params.category_preference.contains_key(&location.region),
                "region {} missing category preference",
                location.region
            );
        }
    }
}

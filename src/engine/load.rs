// ==========================================
// 校园食堂点餐系统 - 厨房负载计算
// ==========================================
// 职责: 时间窗内在途订单筛选与餐品数量归并
// 红线: 纯函数, 不按状态二次过滤 (口径由调用方决定)
// ==========================================

use crate::domain::order::ActiveOrder;
use crate::domain::slot::TimeWindow;

// ==========================================
// CapacityLoadCalculator - 负载计算器
// ==========================================
pub struct CapacityLoadCalculator;

impl CapacityLoadCalculator {
    /// 筛选占用区间与查询窗相交的订单
    ///
    /// 相交判定 (半开区间): scheduled_prep_time < window.end
    /// 且 pickup_window.end > window.start
    pub fn orders_in_window<'a>(
        orders: &'a [ActiveOrder],
        window: &TimeWindow,
    ) -> Vec<&'a ActiveOrder> {
        orders
            .iter()
            .filter(|order| order.occupied_span().overlaps(window))
            .collect()
    }

    /// 订单集合的总餐品数量 (跨订单跨条目求和)
    pub fn total_quantity(orders: &[&ActiveOrder]) -> i64 {
        orders.iter().map(|order| order.total_quantity()).sum()
    }

    /// 窗口负载: 先筛窗再求和
    pub fn load_in_window(orders: &[ActiveOrder], window: &TimeWindow) -> i64 {
        Self::total_quantity(&Self::orders_in_window(orders, window))
    }
}

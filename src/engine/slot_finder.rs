// ==========================================
// 校园食堂点餐系统 - 改选时段搜索
// ==========================================
// 职责: 请求时段被拒后向后搜索最近可用时段
// 输入: 原请求取餐时刻 + 新订单餐品数 + 在途订单 + 有效产能
// 输出: TimeWindow (必有返回值, 搜索无果时返回兜底时段)
// ==========================================

use crate::config::constants::{
    FALLBACK_SLOT_OFFSET_MINUTES, SLOT_SEARCH_MAX_ATTEMPTS, SLOT_STEP_MINUTES,
    TRAILING_LOAD_WINDOW_MINUTES,
};
use crate::domain::order::ActiveOrder;
use crate::domain::slot::TimeWindow;
use crate::engine::load::CapacityLoadCalculator;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

// ==========================================
// SlotFinder - 改选时段搜索器
// ==========================================
pub struct SlotFinder;

impl SlotFinder {
    /// 从请求时刻起按 10 分钟步进向后搜索, 最多 12 步 (2 小时窗)
    ///
    /// 每个候选时刻 t 以回看窗 [t-15min, t) 计算负载,
    /// 首次满足 load + item_count <= capacity 即返回 [t, t+10min)。
    /// 注意: capacity 沿用原请求时刻高峰水平折算出的有效产能,
    /// 不按候选时刻重算。
    /// 搜索无果时无条件返回 [请求+120min, 请求+130min) 兜底时段。
    pub fn find_next_available_slot(
        requested_time: DateTime<Utc>,
        item_count: i64,
        active_orders: &[ActiveOrder],
        capacity: i64,
    ) -> TimeWindow {
        let mut check_time = requested_time;

        for attempt in 0..SLOT_SEARCH_MAX_ATTEMPTS {
            check_time += Duration::minutes(SLOT_STEP_MINUTES);

            let trailing_window = TimeWindow::new(
                check_time - Duration::minutes(TRAILING_LOAD_WINDOW_MINUTES),
                check_time,
            );
            let load = CapacityLoadCalculator::load_in_window(active_orders, &trailing_window);

            if load + item_count <= capacity {
                debug!(attempt, load, capacity, slot_start = %check_time, "找到可用改选时段");
                return TimeWindow::from_start(check_time, SLOT_STEP_MINUTES);
            }
        }

        // 兜底: 2 小时后的时段, 不再校验可用性
        debug!(requested = %requested_time, "搜索无果, 返回兜底时段");
        TimeWindow::new(
            requested_time + Duration::minutes(FALLBACK_SLOT_OFFSET_MINUTES),
            requested_time + Duration::minutes(FALLBACK_SLOT_OFFSET_MINUTES + SLOT_STEP_MINUTES),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderItemSnapshot;
    use crate::domain::types::OrderStatus;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    fn blocking_order(start: DateTime<Utc>, end: DateTime<Utc>, qty: u32) -> ActiveOrder {
        ActiveOrder {
            order_id: Uuid::new_v4(),
            canteen_id: "C01".to_string(),
            items: vec![OrderItemSnapshot {
                menu_item_id: Uuid::new_v4(),
                name: "扬州炒饭".to_string(),
                unit_price_cents: 1200,
                quantity: qty,
                prep_time_minutes: Some(10),
            }],
            scheduled_prep_time: start,
            pickup_window: TimeWindow::new(end - Duration::minutes(5), end),
            status: OrderStatus::Confirmed,
        }
    }

    #[test]
    fn test_first_step_free_when_no_orders() {
        let slot = SlotFinder::find_next_available_slot(at(12, 0), 2, &[], 3);
        assert_eq!(slot.start, at(12, 10));
        assert_eq!(slot.end, at(12, 20));
    }

    #[test]
    fn test_skips_busy_steps() {
        // 在途订单占用 [11:55, 12:40) 共 3 件, 产能 3, 新增 2 件。
        // 候选回看窗与占用区间相交则繁忙; 首个不相交的候选是 13:00
        // (回看窗 [12:45, 13:00) 已在订单结束之后)
        let orders = vec![blocking_order(at(11, 55), at(12, 40), 3)];
        let slot = SlotFinder::find_next_available_slot(at(12, 0), 2, &orders, 3);
        assert_eq!(slot.start, at(13, 0));
        assert_eq!(slot.duration_minutes(), 10);
    }

    #[test]
    fn test_fallback_after_exhausted_horizon() {
        // 全天压满, 12 步均不可用
        let orders = vec![blocking_order(at(11, 0), at(18, 0), 10)];
        let slot = SlotFinder::find_next_available_slot(at(12, 0), 1, &orders, 3);
        assert_eq!(slot.start, at(14, 0));
        assert_eq!(slot.end, at(14, 10));
    }
}

// ==========================================
// FeasibilityChecker 引擎集成测试
// ==========================================
// 测试目标: 验证取餐时段准入判定
// 覆盖范围: 准入 / 时间过近 / 产能不足 / 单调性 / 幂等性 / 退化输入
// ==========================================

use canteen_scheduler::domain::order::{ActiveOrder, OrderItemSnapshot};
use canteen_scheduler::domain::slot::TimeWindow;
use canteen_scheduler::domain::types::{FeasibilityReason, OrderStatus};
use canteen_scheduler::engine::FeasibilityChecker;
use canteen_scheduler::logging;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

// ==========================================
// 测试辅助函数
// ==========================================

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
}

/// 创建候选订单条目
fn candidate_item(quantity: u32, prep_minutes: u32) -> OrderItemSnapshot {
    OrderItemSnapshot {
        menu_item_id: Uuid::new_v4(),
        name: "黄焖鸡米饭".to_string(),
        unit_price_cents: 1600,
        quantity,
        prep_time_minutes: Some(prep_minutes),
    }
}

/// 创建在途订单 (占用 [prep_start, pickup_end) 共 quantity 件)
fn active_order(prep_start: DateTime<Utc>, pickup_end: DateTime<Utc>, quantity: u32) -> ActiveOrder {
    ActiveOrder {
        order_id: Uuid::new_v4(),
        canteen_id: "C01".to_string(),
        items: vec![OrderItemSnapshot {
            menu_item_id: Uuid::new_v4(),
            name: "番茄鸡蛋面".to_string(),
            unit_price_cents: 1100,
            quantity,
            prep_time_minutes: Some(10),
        }],
        scheduled_prep_time: prep_start,
        pickup_window: TimeWindow::new(pickup_end - Duration::minutes(10), pickup_end),
        status: OrderStatus::Confirmed,
    }
}

// ==========================================
// 测试 1: 准入场景
// ==========================================

#[test]
fn test_admit_when_capacity_available() {
    logging::init_test();
    let checker = FeasibilityChecker::default();
    let now = at(10, 0);
    let pickup = now + Duration::minutes(20);

    let result = checker.check(pickup, &[candidate_item(1, 10)], &[], 5, now);

    assert!(result.feasible);
    assert_eq!(result.reason, FeasibilityReason::SlotAvailable);
    // 开火时刻 = 取餐 - (10 + 2) 分钟
    assert_eq!(result.scheduled_prep_time, Some(pickup - Duration::minutes(12)));
    assert_eq!(result.estimated_wait_minutes, Some(0));
    assert_eq!(result.current_load, Some(0));
    // 10:20 非高峰: floor(5 × (1 - 0.2 × 0.3)) = 4
    assert_eq!(result.effective_capacity, Some(4));
    assert_eq!(result.rush_intensity, Some(0.2));
    assert!(result.suggested_slot.is_none());
}

// ==========================================
// 测试 2: 取餐时间过近
// ==========================================

#[test]
fn test_reject_pickup_too_soon() {
    let checker = FeasibilityChecker::default();
    let now = at(10, 0);
    let pickup = now + Duration::minutes(5);

    let result = checker.check(pickup, &[candidate_item(1, 10)], &[], 5, now);

    assert!(!result.feasible);
    assert_eq!(result.reason, FeasibilityReason::PickupTooSoon);
    // 建议时段: [now + 12min, +10min), 不携带产能指标
    let slot = result.suggested_slot.expect("应给出建议时段");
    assert_eq!(slot.start, now + Duration::minutes(12));
    assert_eq!(slot.duration_minutes(), 10);
    assert!(result.current_load.is_none());
    assert!(result.effective_capacity.is_none());
    assert!(result.rush_intensity.is_none());
    assert!(result.scheduled_prep_time.is_none());
}

// ==========================================
// 测试 3: 午餐高峰产能不足
// ==========================================

#[test]
fn test_reject_when_slot_busy_at_lunch_rush() {
    let checker = FeasibilityChecker::default();
    let now = at(11, 30);
    let pickup = at(12, 30); // 午餐高峰, 强度 1.0

    // 四个在途订单各 1 件, 均占用 [12:15, 12:45), 覆盖开火窗 [12:18, 12:30)
    let active: Vec<ActiveOrder> = (0..4)
        .map(|_| active_order(at(12, 15), at(12, 45), 1))
        .collect();

    let result = checker.check(pickup, &[candidate_item(2, 10)], &active, 5, now);

    assert!(!result.feasible);
    assert_eq!(result.reason, FeasibilityReason::SlotBusy);
    // floor(5 × (1 - 1.0 × 0.3)) = 3, 阈值 max(3,2)=3, 负载 4 + 新增 2 > 3
    assert_eq!(result.current_load, Some(4));
    assert_eq!(result.effective_capacity, Some(3));
    assert_eq!(result.rush_intensity, Some(1.0));

    // 改选搜索: 候选 12:40/12:50 的回看窗仍与占用区间相交,
    // 13:00 回看窗 [12:45, 13:00) 已空闲
    let slot = result.suggested_slot.expect("应给出建议时段");
    assert_eq!(slot.start, at(13, 0));
    assert_eq!(slot.end, at(13, 10));
    assert_eq!(result.describe(), "时段繁忙 (4/3), 请改选建议时段");
}

// ==========================================
// 测试 4: 产能单调性
// ==========================================

#[test]
fn test_feasibility_monotone_in_capacity() {
    let checker = FeasibilityChecker::default();
    let now = at(11, 30);
    let pickup = at(12, 30);
    let active: Vec<ActiveOrder> = (0..3)
        .map(|_| active_order(at(12, 15), at(12, 45), 1))
        .collect();
    let items = [candidate_item(2, 10)];

    // 产能增大后, 可行结论不可由 true 翻转为 false
    let mut was_feasible = false;
    for capacity in 0..=20 {
        let feasible = checker.check(pickup, &items, &active, capacity, now).feasible;
        assert!(
            !was_feasible || feasible,
            "产能 {} 下可行性出现回退",
            capacity
        );
        was_feasible = feasible;
    }
}

// ==========================================
// 测试 5: 幂等性
// ==========================================

#[test]
fn test_idempotent_for_identical_arguments() {
    let checker = FeasibilityChecker::default();
    let now = at(11, 30);
    let pickup = at(12, 30);
    let active: Vec<ActiveOrder> = (0..4)
        .map(|_| active_order(at(12, 15), at(12, 45), 1))
        .collect();
    let items = [candidate_item(2, 10)];

    let first = checker.check(pickup, &items, &active, 5, now);
    let second = checker.check(pickup, &items, &active, 5, now);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ==========================================
// 测试 6: 退化输入
// ==========================================

#[test]
fn test_empty_items_admitted_trivially() {
    let checker = FeasibilityChecker::default();
    let now = at(10, 0);
    let pickup = now + Duration::minutes(5);

    // 空订单: 最长备餐 0, 开火时刻 = 取餐 - 2 分钟, 仍在未来
    let result = checker.check(pickup, &[], &[], 5, now);
    assert!(result.feasible);
    assert_eq!(result.scheduled_prep_time, Some(pickup - Duration::minutes(2)));
}

#[test]
fn test_zero_capacity_still_admits_small_orders() {
    let checker = FeasibilityChecker::default();
    let now = at(10, 0);
    let pickup = now + Duration::minutes(30);

    // 有效产能 0, 但阈值下限 2 保证小单仍可准入
    let result = checker.check(pickup, &[candidate_item(2, 10)], &[], 0, now);
    assert!(result.feasible);
    assert_eq!(result.effective_capacity, Some(0));

    // 超出下限即拒绝
    let result = checker.check(pickup, &[candidate_item(3, 10)], &[], 0, now);
    assert!(!result.feasible);
}

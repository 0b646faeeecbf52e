// ==========================================
// 并发准入控制集成测试
// ==========================================
// 测试目标: 验证 "查快照 -> 准入检查 -> 落库" 的竞态防护
// 场景: 多个请求同时下单同一食堂, 无闸门时可能双双准入超卖,
//       经 AdmissionGate 串行化后总负载不超过阈值
// ==========================================

use canteen_scheduler::domain::order::{ActiveOrder, OrderItemSnapshot};
use canteen_scheduler::domain::slot::TimeWindow;
use canteen_scheduler::domain::types::OrderStatus;
use canteen_scheduler::{AdmissionGate, FeasibilityChecker};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// 测试辅助函数
// ==========================================

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
}

fn candidate(quantity: u32) -> Vec<OrderItemSnapshot> {
    vec![OrderItemSnapshot {
        menu_item_id: Uuid::new_v4(),
        name: "鱼香肉丝饭".to_string(),
        unit_price_cents: 1500,
        quantity,
        prep_time_minutes: Some(10),
    }]
}

/// 模拟宿主落库: 把准入订单写入共享快照
fn persist(store: &Mutex<Vec<ActiveOrder>>, items: Vec<OrderItemSnapshot>, prep_start: DateTime<Utc>, pickup: DateTime<Utc>) {
    store.lock().unwrap().push(ActiveOrder {
        order_id: Uuid::new_v4(),
        canteen_id: "C01".to_string(),
        items,
        scheduled_prep_time: prep_start,
        pickup_window: TimeWindow::from_start(pickup, 10),
        status: OrderStatus::Confirmed,
    });
}

// ==========================================
// 测试: 闸门串行化后不超卖
// ==========================================

#[test]
fn test_gated_admissions_never_overshoot_threshold() {
    let gate = Arc::new(AdmissionGate::new());
    let checker = Arc::new(FeasibilityChecker::default());
    let store = Arc::new(Mutex::new(Vec::<ActiveOrder>::new()));

    let now = at(10, 0);
    let pickup = at(10, 30); // 非高峰: 阈值 floor(5 × 0.94) = 4

    // 8 个并发请求, 各 1 件; 阈值 4 只应放行 4 单
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gate = gate.clone();
            let checker = checker.clone();
            let store = store.clone();
            std::thread::spawn(move || {
                gate.with_canteen("C01", || {
                    let snapshot = store.lock().unwrap().clone();
                    let items = candidate(1);
                    let result = checker.check(pickup, &items, &snapshot, 5, now);
                    if result.feasible {
                        persist(
                            &store,
                            items,
                            result.scheduled_prep_time.unwrap(),
                            pickup,
                        );
                    }
                    result.feasible
                })
            })
        })
        .collect();

    let admitted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&feasible| feasible)
        .count();

    assert_eq!(admitted, 4, "串行化后恰好放行至阈值");
    assert_eq!(store.lock().unwrap().len(), 4);
}

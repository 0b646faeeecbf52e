// ==========================================
// 校园食堂点餐系统 - 订单领域模型
// ==========================================
// 职责: 订单快照 / 取消策略 / 催单标记
// 红线: 快照对象与在线菜单记录解耦, 调度核心不回写
// ==========================================

use crate::config::constants::{
    CANCELLED_ITEM_EXPIRY_MINUTES, DEFAULT_PREP_TIME_MINUTES, DISCOUNT_PERCENT,
    URGENT_THRESHOLD_MINUTES,
};
use crate::domain::slot::{minutes_between, TimeWindow};
use crate::domain::types::{OrderStatus, RefundStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// OrderItemSnapshot - 订单项快照
// ==========================================
// 下单时刻从菜单记录拷贝, 菜单后续变更不影响已建订单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemSnapshot {
    pub menu_item_id: Uuid,
    pub name: String,
    /// 单价 (分)
    pub unit_price_cents: i64,
    /// 数量, 约定 >= 1
    pub quantity: u32,
    /// 备餐时长 (分钟); 菜单未维护时缺省
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
}

impl OrderItemSnapshot {
    /// 备餐时长, 缺省回退为 10 分钟
    pub fn prep_minutes(&self) -> u32 {
        self.prep_time_minutes.unwrap_or(DEFAULT_PREP_TIME_MINUTES)
    }
}

// ==========================================
// ActiveOrder - 在途订单快照
// ==========================================
// 调度输入对象: 由宿主按调用口径预过滤状态后传入,
// 本层不再按状态二次筛选 (准入检查与排队预估口径不同)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub order_id: Uuid,
    pub canteen_id: String,
    pub items: Vec<OrderItemSnapshot>,
    /// 后厨计划开始备餐时刻
    pub scheduled_prep_time: DateTime<Utc>,
    /// 学生取餐时段
    pub pickup_window: TimeWindow,
    pub status: OrderStatus,
}

impl ActiveOrder {
    /// 订单最长备餐时长 (分钟), 空订单为 0
    pub fn max_prep_time_minutes(&self) -> i64 {
        max_prep_time_minutes(&self.items)
    }

    /// 订单总餐品数量
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }

    /// 厨房占用区间 [开始备餐, 取餐时段结束)
    pub fn occupied_span(&self) -> TimeWindow {
        TimeWindow::new(self.scheduled_prep_time, self.pickup_window.end)
    }

    /// 距计划备餐时刻的分钟数 (已过为负)
    pub fn time_until_prep_minutes(&self, now: DateTime<Utc>) -> i64 {
        minutes_between(now, self.scheduled_prep_time)
    }

    /// 档口看板催单标记: 5 分钟内须开始备餐且仍未接单
    pub fn is_urgent(&self, now: DateTime<Utc>) -> bool {
        self.time_until_prep_minutes(now) <= URGENT_THRESHOLD_MINUTES
            && self.status == OrderStatus::Confirmed
    }
}

/// 一组订单项的最长备餐时长 (分钟), 空列表为 0
///
/// 准入检查与排队预估共用此口径
pub fn max_prep_time_minutes(items: &[OrderItemSnapshot]) -> i64 {
    items
        .iter()
        .map(|i| i64::from(i.prep_minutes()))
        .max()
        .unwrap_or(0)
}

// ==========================================
// CancelledItemOffer - 已取消餐品折扣供应
// ==========================================
// 备餐开始后取消的餐品转入折扣池, 30 分钟内可被其他学生认领
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelledItemOffer {
    pub offer_id: Uuid,
    pub order_id: Uuid,
    pub canteen_id: String,
    pub menu_item_id: Uuid,
    pub item_name: String,
    pub original_price_cents: i64,
    pub discounted_price_cents: i64,
    pub discount_percent: u32,
    pub quantity: u32,
    pub expires_at: DateTime<Utc>,
}

impl CancelledItemOffer {
    fn from_item(order: &ActiveOrder, item: &OrderItemSnapshot, now: DateTime<Utc>) -> Self {
        let discounted =
            (item.unit_price_cents as f64 * (1.0 - f64::from(DISCOUNT_PERCENT) / 100.0)).round()
                as i64;
        Self {
            offer_id: Uuid::new_v4(),
            order_id: order.order_id,
            canteen_id: order.canteen_id.clone(),
            menu_item_id: item.menu_item_id,
            item_name: item.name.clone(),
            original_price_cents: item.unit_price_cents,
            discounted_price_cents: discounted,
            discount_percent: DISCOUNT_PERCENT,
            quantity: item.quantity,
            expires_at: now + Duration::minutes(CANCELLED_ITEM_EXPIRY_MINUTES),
        }
    }
}

// ==========================================
// CancellationPolicy - 订单取消策略
// ==========================================
// 规则:
// 1) 终态订单 (collected/cancelled) 不可取消
// 2) 备餐前取消全额退款
// 3) 备餐开始后取消部分退款, 餐品进入折扣池
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CancelDecision {
    /// 不可取消 (终态订单)
    Rejected,
    /// 可取消, 携带退款类型与折扣池记录
    Accepted {
        refund: RefundStatus,
        offers: Vec<CancelledItemOffer>,
    },
}

pub struct CancellationPolicy;

impl CancellationPolicy {
    /// 判定订单取消结果
    ///
    /// 纯函数: 不修改订单, 落库与广播由宿主处理
    pub fn decide(order: &ActiveOrder, now: DateTime<Utc>) -> CancelDecision {
        if order.status.is_terminal() {
            return CancelDecision::Rejected;
        }

        if matches!(order.status, OrderStatus::Preparing | OrderStatus::Ready) {
            let offers = order
                .items
                .iter()
                .map(|item| CancelledItemOffer::from_item(order, item, now))
                .collect();
            return CancelDecision::Accepted {
                refund: RefundStatus::Partial,
                offers,
            };
        }

        // pending/confirmed: 尚未开火, 全额退款
        CancelDecision::Accepted {
            refund: RefundStatus::Full,
            offers: Vec::new(),
        }
    }
}

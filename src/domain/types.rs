// ==========================================
// 校园食堂点餐系统 - 领域类型定义
// ==========================================
// 职责: 订单状态机 / 可行性结论码 / 退款类型
// 序列化格式: 小写 (与宿主服务 API 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 状态流转: confirmed -> preparing -> ready -> collected
// 取消分支: confirmed/preparing -> cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,   // 待确认 (支付前)
    Confirmed, // 已确认
    Preparing, // 备餐中
    Ready,     // 待取餐
    Collected, // 已取餐
    Cancelled, // 已取消
}

impl OrderStatus {
    /// 是否参与厨房负载计算 (准入检查的默认口径)
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Preparing)
    }

    /// 是否为终态 (不可再流转)
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Collected | OrderStatus::Cancelled)
    }

    /// 校验状态流转是否合法
    ///
    /// 流转表:
    /// - confirmed -> preparing / cancelled
    /// - preparing -> ready / cancelled
    /// - ready -> collected
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        matches!(
            (self, target),
            (OrderStatus::Confirmed, OrderStatus::Preparing)
                | (OrderStatus::Confirmed, OrderStatus::Cancelled)
                | (OrderStatus::Preparing, OrderStatus::Ready)
                | (OrderStatus::Preparing, OrderStatus::Cancelled)
                | (OrderStatus::Ready, OrderStatus::Collected)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Collected => write!(f, "collected"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ==========================================
// 可行性结论码 (Feasibility Reason)
// ==========================================
// 红线: 规则必须输出 reason, 且为枚举码而非自由文本
// 宿主可由码 + 结构化字段渲染本地化文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityReason {
    /// 时段可用, 订单准入
    SlotAvailable,
    /// 取餐时间过近, 厨房来不及备餐 (未做产能检查即拒绝)
    PickupTooSoon,
    /// 时段繁忙, 产能不足
    SlotBusy,
}

impl fmt::Display for FeasibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeasibilityReason::SlotAvailable => write!(f, "slot_available"),
            FeasibilityReason::PickupTooSoon => write!(f, "pickup_too_soon"),
            FeasibilityReason::SlotBusy => write!(f, "slot_busy"),
        }
    }
}

// ==========================================
// 退款类型 (Refund Status)
// ==========================================
// 规则: 备餐开始前取消全额退款, 开始后部分退款
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    Full,    // 全额退款
    Partial, // 部分退款 (餐品转入折扣池)
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefundStatus::Full => write!(f, "full"),
            RefundStatus::Partial => write!(f, "partial"),
        }
    }
}

// ==========================================
// 校园食堂点餐系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod canteen;
pub mod order;
pub mod slot;
pub mod types;

// 重导出核心类型
pub use canteen::Canteen;
pub use order::{
    max_prep_time_minutes, ActiveOrder, CancelDecision, CancellationPolicy, CancelledItemOffer,
    OrderItemSnapshot,
};
pub use slot::{format_clock, minutes_between, FeasibilityResult, TimeSlot, TimeWindow};
pub use types::{FeasibilityReason, OrderStatus, RefundStatus};

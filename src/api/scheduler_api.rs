// ==========================================
// 校园食堂点餐系统 - 调度 API
// ==========================================
// 职责: 面向宿主服务的调度入口, 组合各引擎
// 架构: API 层 -> Engine 层 (纯计算), 无存储依赖
// 红线: 入参只读, 所有入口显式注入 now
// ==========================================

use crate::config::{ConfigError, SchedulerConfig};
use crate::domain::order::{ActiveOrder, OrderItemSnapshot};
use crate::domain::slot::{FeasibilityResult, TimeSlot};
use crate::engine::{FeasibilityChecker, QueueDelayPredictor, TimeSlotGenerator};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

// ==========================================
// SchedulerApi - 调度 API
// ==========================================

/// 调度API
///
/// 职责:
/// 1. 下单前的取餐时段准入检查
/// 2. 选餐界面的时段列表
/// 3. 排队延迟参考值
///
/// 并发约定: 本层无内部状态, 可被多请求并发调用;
/// 但 "查快照 -> 准入检查 -> 落库" 三步不具原子性,
/// 宿主须按食堂串行化该序列 (参见 AdmissionGate)
/// 或在事务内提交前复检
pub struct SchedulerApi {
    feasibility: FeasibilityChecker,
    slot_generator: TimeSlotGenerator,
}

impl SchedulerApi {
    /// 以校验过的配置构造调度 API
    ///
    /// # 错误
    /// 配置校验不通过时返回 ConfigError
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            feasibility: FeasibilityChecker::new(&config),
            slot_generator: TimeSlotGenerator::new(&config),
        })
    }

    /// 缺省高峰配置的调度 API
    pub fn with_defaults() -> Self {
        Self {
            feasibility: FeasibilityChecker::default(),
            slot_generator: TimeSlotGenerator::default(),
        }
    }

    /// 下单前准入检查
    ///
    /// 宿主在 feasible=true 时以 scheduled_prep_time 持久化订单,
    /// feasible=false 时把 suggested_slot 返回给学生, 不落库
    #[instrument(skip(self, items, active_orders), fields(pickup_time = %pickup_time))]
    pub fn check_feasibility(
        &self,
        pickup_time: DateTime<Utc>,
        items: &[OrderItemSnapshot],
        active_orders: &[ActiveOrder],
        kitchen_capacity: i64,
        now: DateTime<Utc>,
    ) -> FeasibilityResult {
        let result = self
            .feasibility
            .check(pickup_time, items, active_orders, kitchen_capacity, now);
        info!(
            feasible = result.feasible,
            reason = %result.reason,
            "准入检查完成"
        );
        result
    }

    /// 选餐界面时段列表 (只读参考数据)
    #[instrument(skip(self), fields(now = %now))]
    pub fn list_time_slots(
        &self,
        now: DateTime<Utc>,
        horizon_hours: i64,
        interval_minutes: i64,
    ) -> Vec<TimeSlot> {
        self.slot_generator.generate(now, horizon_hours, interval_minutes)
    }

    /// 排队延迟参考值 (分钟)
    #[instrument(skip(self, active_orders))]
    pub fn predict_queue_delay(
        &self,
        active_orders: &[ActiveOrder],
        canteen_id: &str,
        kitchen_capacity: i64,
    ) -> i64 {
        QueueDelayPredictor::predict(active_orders, canteen_id, kitchen_capacity)
    }
}

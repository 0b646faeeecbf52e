// ==========================================
// 校园食堂点餐系统 - 准入检查引擎
// ==========================================
// 职责: 判定请求取餐时段能否在既有负载下按时出餐
// 输入: 取餐时刻 + 候选订单条目 + 预过滤在途订单 + 产能 + 当前时刻
// 输出: FeasibilityResult (准入 / 拒绝 + 建议时段)
// 红线: 全域有值, 不抛错; "now" 必须显式传入
// ==========================================

use crate::config::constants::{BUFFER_TIME_MINUTES, MIN_ADMISSION_THRESHOLD, RUSH_CAPACITY_DISCOUNT, SLOT_STEP_MINUTES};
use crate::config::SchedulerConfig;
use crate::domain::order::{max_prep_time_minutes, ActiveOrder, OrderItemSnapshot};
use crate::domain::slot::{FeasibilityResult, TimeWindow};
use crate::engine::load::CapacityLoadCalculator;
use crate::engine::rush::RushIntensityModel;
use crate::engine::slot_finder::SlotFinder;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

// ==========================================
// FeasibilityChecker - 准入检查引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct FeasibilityChecker {
    rush_model: RushIntensityModel,
}

impl FeasibilityChecker {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            rush_model: RushIntensityModel::new(config),
        }
    }

    /// 准入检查
    ///
    /// 步骤:
    /// 1) 取候选条目最长备餐时长与总数量 (空订单退化为 0/0)
    /// 2) 必须开火时刻 = 取餐时刻 - (最长备餐 + 2 分钟余量)
    /// 3) 开火时刻已过 -> 直接拒绝 (不做产能检查), 建议最早可取时段
    /// 4) 统计开火窗 [开火时刻, 取餐时刻) 内的在途负载
    /// 5) 有效产能 = floor(产能 × (1 - 高峰强度 × 0.3)), 阈值下限 2
    /// 6) 负载 + 新增 <= 阈值 -> 准入, 否则搜索改选时段后拒绝
    ///
    /// # 参数
    /// - `pickup_time`: 请求取餐时刻
    /// - `items`: 候选订单条目 (未持久化)
    /// - `active_orders`: 宿主预过滤的在途订单快照
    /// - `kitchen_capacity`: 厨房产能 (非正值按算式传导, 阈值下限兜底)
    /// - `now`: 当前时刻 (显式注入, 保证可复现)
    #[instrument(skip(self, items, active_orders), fields(
        pickup_time = %pickup_time,
        item_kinds = items.len(),
        active_count = active_orders.len(),
        kitchen_capacity
    ))]
    pub fn check(
        &self,
        pickup_time: DateTime<Utc>,
        items: &[OrderItemSnapshot],
        active_orders: &[ActiveOrder],
        kitchen_capacity: i64,
        now: DateTime<Utc>,
    ) -> FeasibilityResult {
        // 1. 候选订单口径
        let max_prep = max_prep_time_minutes(items);
        let total_item_count: i64 = items.iter().map(|i| i64::from(i.quantity)).sum();

        // 2. 必须开火时刻
        let lead_minutes = max_prep + BUFFER_TIME_MINUTES;
        let required_start_time = pickup_time - Duration::minutes(lead_minutes);

        // 3. 开火时刻已过: 时间不可行短路产能检查
        if required_start_time < now {
            let minimum_pickup = now + Duration::minutes(lead_minutes);
            debug!(%minimum_pickup, "取餐时间过近, 建议最早可取时段");
            return FeasibilityResult::pickup_too_soon(TimeWindow::from_start(
                minimum_pickup,
                SLOT_STEP_MINUTES,
            ));
        }

        // 4. 开火窗内在途负载
        let cook_window = TimeWindow::new(required_start_time, pickup_time);
        let current_load = CapacityLoadCalculator::load_in_window(active_orders, &cook_window);

        // 5. 高峰折减后的有效产能
        let rush_intensity = self.rush_model.intensity_at(pickup_time);
        let effective_capacity =
            (kitchen_capacity as f64 * (1.0 - rush_intensity * RUSH_CAPACITY_DISCOUNT)).floor()
                as i64;
        let threshold = effective_capacity.max(MIN_ADMISSION_THRESHOLD);

        // 6. 准入判定
        if current_load + total_item_count <= threshold {
            debug!(current_load, effective_capacity, rush_intensity, "时段可用, 订单准入");
            return FeasibilityResult::admitted(
                required_start_time,
                current_load,
                effective_capacity,
                rush_intensity,
            );
        }

        // 拒绝: 沿用本次请求时刻的有效产能搜索改选时段
        let suggested_slot = SlotFinder::find_next_available_slot(
            pickup_time,
            total_item_count,
            active_orders,
            effective_capacity,
        );
        debug!(current_load, effective_capacity, suggested = %suggested_slot.start, "时段繁忙, 返回改选建议");
        FeasibilityResult::slot_busy(
            suggested_slot,
            current_load,
            effective_capacity,
            rush_intensity,
        )
    }
}

impl Default for FeasibilityChecker {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

// ==========================================
// 校园食堂点餐系统 - 时段领域模型
// ==========================================
// 职责: 时间窗 / 可选时段 / 可行性结果对象
// 红线: 窗口判定统一使用半开区间语义
// ==========================================

use crate::domain::types::FeasibilityReason;
use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// TimeWindow - 时间窗
// ==========================================
// 语义: [start, end), 要求 start < end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// 由起点和分钟宽度构造
    pub fn from_start(start: DateTime<Utc>, minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    /// 区间重叠判定 (两端半开)
    ///
    /// 占用区间 [a.start, a.end) 与查询窗 [b.start, b.end) 相交
    /// 当且仅当 a.start < b.end 且 a.end > b.start
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// 窗口宽度 (分钟)
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// 渲染 "HH:MM - HH:MM" 标签 (24 小时制)
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

/// 渲染时刻为 "HH:MM"
pub fn format_clock(t: DateTime<Utc>) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// 两时刻间隔 (分钟, 向零取整)
pub fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}

// ==========================================
// TimeSlot - 可选取餐时段 (选餐界面用)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// 展示标签, 例如 "12:10 - 12:20"
    pub label: String,
    /// 该时段起点的高峰强度 [0,1]
    pub rush_intensity: f64,
}

// ==========================================
// FeasibilityResult - 准入检查结果
// ==========================================
// 约定: 准入时填充 scheduled_prep_time / estimated_wait_minutes,
//       拒绝时填充 suggested_slot; 产能指标仅在做过产能检查时存在
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub feasible: bool,
    pub reason: FeasibilityReason,

    // ===== 准入字段 =====
    /// 后厨开始备餐时刻 (宿主持久化订单时使用)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_prep_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_wait_minutes: Option<i64>,

    // ===== 拒绝字段 =====
    /// 建议改选的取餐时段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_slot: Option<TimeWindow>,

    // ===== 产能指标 (时间过近分支不填充) =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_load: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rush_intensity: Option<f64>,
}

impl FeasibilityResult {
    /// 准入结果
    pub fn admitted(
        scheduled_prep_time: DateTime<Utc>,
        current_load: i64,
        effective_capacity: i64,
        rush_intensity: f64,
    ) -> Self {
        Self {
            feasible: true,
            reason: FeasibilityReason::SlotAvailable,
            scheduled_prep_time: Some(scheduled_prep_time),
            estimated_wait_minutes: Some(0),
            suggested_slot: None,
            current_load: Some(current_load),
            effective_capacity: Some(effective_capacity),
            rush_intensity: Some(rush_intensity),
        }
    }

    /// 拒绝: 取餐时间过近 (不做产能检查, 不携带产能指标)
    pub fn pickup_too_soon(suggested_slot: TimeWindow) -> Self {
        Self {
            feasible: false,
            reason: FeasibilityReason::PickupTooSoon,
            scheduled_prep_time: None,
            estimated_wait_minutes: None,
            suggested_slot: Some(suggested_slot),
            current_load: None,
            effective_capacity: None,
            rush_intensity: None,
        }
    }

    /// 拒绝: 时段产能不足
    pub fn slot_busy(
        suggested_slot: TimeWindow,
        current_load: i64,
        effective_capacity: i64,
        rush_intensity: f64,
    ) -> Self {
        Self {
            feasible: false,
            reason: FeasibilityReason::SlotBusy,
            scheduled_prep_time: None,
            estimated_wait_minutes: None,
            suggested_slot: Some(suggested_slot),
            current_load: Some(current_load),
            effective_capacity: Some(effective_capacity),
            rush_intensity: Some(rush_intensity),
        }
    }

    /// 由结论码与结构化字段渲染展示文案
    pub fn describe(&self) -> String {
        match self.reason {
            FeasibilityReason::SlotAvailable => "时段可用".to_string(),
            FeasibilityReason::PickupTooSoon => {
                "取餐时间过近, 厨房备餐时间不足, 请改选建议时段".to_string()
            }
            FeasibilityReason::SlotBusy => format!(
                "时段繁忙 ({}/{}), 请改选建议时段",
                self.current_load.unwrap_or(0),
                self.effective_capacity.unwrap_or(0)
            ),
        }
    }
}

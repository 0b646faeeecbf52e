// ==========================================
// 校园食堂点餐系统 - 取餐时段生成
// ==========================================
// 职责: 为选餐界面生成未来数小时的可浏览时段
// 纯函数: 相同 now 重复调用结果一致, 无隐藏状态
// ==========================================

use crate::config::constants::MIN_PREP_BUFFER_MINUTES;
use crate::config::SchedulerConfig;
use crate::domain::slot::{TimeSlot, TimeWindow};
use crate::engine::rush::RushIntensityModel;
use chrono::{DateTime, Duration, TimeZone, Utc};

// ==========================================
// TimeSlotGenerator - 时段生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct TimeSlotGenerator {
    rush_model: RushIntensityModel,
}

impl TimeSlotGenerator {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            rush_model: RushIntensityModel::new(config),
        }
    }

    /// 生成连续取餐时段列表
    ///
    /// 先把 now 上取整到下一个 interval_minutes 边界, 再加 15 分钟
    /// 最小备餐缓冲得到首个时段起点; 共生成
    /// horizon_hours * 60 / interval_minutes 个互不重叠的时段,
    /// 每个时段标注其起点的高峰强度与展示标签
    ///
    /// # 参数
    /// - `now`: 当前时刻
    /// - `horizon_hours`: 生成时长 (小时), 界面默认 4
    /// - `interval_minutes`: 时段宽度 (分钟), 界面默认 10
    pub fn generate(&self, now: DateTime<Utc>, horizon_hours: i64, interval_minutes: i64) -> Vec<TimeSlot> {
        let interval_ms = interval_minutes * 60_000;
        let rounded_ms = div_ceil(now.timestamp_millis(), interval_ms) * interval_ms;
        let first_start = Utc.timestamp_millis_opt(rounded_ms).single().unwrap_or(now)
            + Duration::minutes(MIN_PREP_BUFFER_MINUTES);

        let count = horizon_hours * 60 / interval_minutes;
        (0..count)
            .map(|i| {
                let window = TimeWindow::from_start(
                    first_start + Duration::minutes(i * interval_minutes),
                    interval_minutes,
                );
                TimeSlot {
                    start: window.start,
                    end: window.end,
                    label: window.label(),
                    rush_intensity: self.rush_model.intensity_at(window.start),
                }
            })
            .collect()
    }
}

impl Default for TimeSlotGenerator {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

/// 向上取整除法 (毫秒时间戳上取整到步进边界)
fn div_ceil(value: i64, step: i64) -> i64 {
    (value + step - 1) / step
}

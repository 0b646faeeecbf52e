// ==========================================
// 校园食堂点餐系统 - 高峰强度模型
// ==========================================
// 职责: 时刻 -> 负载系数 [0,1] 映射
// 输入: 时刻 (仅取时分, 忽略日期)
// 输出: 高峰强度
// ==========================================

use crate::config::{RushWindow, SchedulerConfig};
use chrono::{DateTime, Timelike, Utc};

// ==========================================
// RushIntensityModel - 高峰强度模型
// ==========================================
#[derive(Debug, Clone)]
pub struct RushIntensityModel {
    windows: Vec<RushWindow>,
    baseline: f64,
}

impl RushIntensityModel {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            windows: config.rush_windows.clone(),
            baseline: config.baseline_intensity,
        }
    }

    /// 计算某一时刻的高峰强度
    ///
    /// 将时刻折算为小数小时 h = hour + minute/60,
    /// 按声明顺序取第一个满足 start <= h < end 的窗口强度,
    /// 均不命中时返回基线强度
    pub fn intensity_at(&self, time: DateTime<Utc>) -> f64 {
        let hour_value = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;

        for window in &self.windows {
            if window.contains(hour_value) {
                return window.intensity;
            }
        }
        self.baseline
    }
}

impl Default for RushIntensityModel {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}

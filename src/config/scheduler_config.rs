// ==========================================
// 校园食堂点餐系统 - 调度配置
// ==========================================
// 职责: 高峰时段窗口配置 (内存对象, 不落库)
// 红线: 窗口按声明顺序判定, 互不重叠
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::constants::BASELINE_RUSH_INTENSITY;

// ==========================================
// RushWindow - 高峰时段窗口
// ==========================================
// 以小数小时表示一天内的半开区间 [start_hour, end_hour)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RushWindow {
    pub start_hour: f64,
    pub end_hour: f64,
    /// 高峰强度 [0,1]
    pub intensity: f64,
}

impl RushWindow {
    pub fn new(start_hour: f64, end_hour: f64, intensity: f64) -> Self {
        Self {
            start_hour,
            end_hour,
            intensity,
        }
    }

    /// 小数小时是否落入本窗口
    pub fn contains(&self, hour_value: f64) -> bool {
        hour_value >= self.start_hour && hour_value < self.end_hour
    }
}

// ==========================================
// SchedulerConfig - 调度器配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// 高峰窗口, 按声明顺序取第一个命中项
    pub rush_windows: Vec<RushWindow>,
    /// 所有窗口之外的基线强度
    #[serde(default = "default_baseline")]
    pub baseline_intensity: f64,
}

fn default_baseline() -> f64 {
    BASELINE_RUSH_INTENSITY
}

impl Default for SchedulerConfig {
    /// 缺省高峰配置: 早间课间 / 午餐高峰 / 下午茶
    fn default() -> Self {
        Self {
            rush_windows: vec![
                RushWindow::new(9.0, 10.0, 0.9),
                RushWindow::new(12.0, 13.5, 1.0),
                RushWindow::new(15.5, 17.0, 0.7),
            ],
            baseline_intensity: BASELINE_RUSH_INTENSITY,
        }
    }
}

impl SchedulerConfig {
    /// 从 JSON 文本加载配置
    ///
    /// # 错误
    /// 解析失败或校验不通过时返回 ConfigError
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SchedulerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置合法性
    ///
    /// 规则:
    /// 1) 强度与基线均在 [0,1]
    /// 2) 窗口须满足 0 <= start < end <= 24
    /// 3) 窗口互不重叠
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.baseline_intensity) {
            return Err(ConfigError::IntensityOutOfRange {
                value: self.baseline_intensity,
            });
        }

        for window in &self.rush_windows {
            if !(0.0..=1.0).contains(&window.intensity) {
                return Err(ConfigError::IntensityOutOfRange {
                    value: window.intensity,
                });
            }
            if window.start_hour >= window.end_hour
                || window.start_hour < 0.0
                || window.end_hour > 24.0
            {
                return Err(ConfigError::InvalidWindow {
                    start_hour: window.start_hour,
                    end_hour: window.end_hour,
                });
            }
        }

        for (i, a) in self.rush_windows.iter().enumerate() {
            for b in &self.rush_windows[i + 1..] {
                if a.start_hour < b.end_hour && a.end_hour > b.start_hour {
                    return Err(ConfigError::OverlappingWindows {
                        first_start: a.start_hour,
                        first_end: a.end_hour,
                        second_start: b.start_hour,
                        second_end: b.end_hour,
                    });
                }
            }
        }

        Ok(())
    }
}

// ==========================================
// ConfigError - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 注意: 调度入口本身全域有值, 错误只出现在配置边界
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {0}")]
    ParseError(String),

    #[error("强度超出 [0,1] 范围: {value}")]
    IntensityOutOfRange { value: f64 },

    #[error("非法高峰窗口: start={start_hour}, end={end_hour}")]
    InvalidWindow { start_hour: f64, end_hour: f64 },

    #[error("高峰窗口重叠: [{first_start},{first_end}) 与 [{second_start},{second_end})")]
    OverlappingWindows {
        first_start: f64,
        first_end: f64,
        second_start: f64,
        second_end: f64,
    },
}

// ==========================================
// 校园食堂点餐系统 - 食堂领域模型
// ==========================================
// 调度核心只消费 kitchen_capacity 与 is_active,
// 其余字段由宿主服务维护
// ==========================================

use crate::config::constants::DEFAULT_KITCHEN_CAPACITY;
use serde::{Deserialize, Serialize};

/// 食堂档口记录 (宿主传入的只读快照)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canteen {
    pub canteen_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    /// 厨房并发产能 (同时在备餐品数量上限)
    #[serde(default = "default_kitchen_capacity")]
    pub kitchen_capacity: i64,
    pub is_active: bool,
}

fn default_kitchen_capacity() -> i64 {
    DEFAULT_KITCHEN_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_defaults_when_absent() {
        let c: Canteen = serde_json::from_str(
            r#"{"canteen_id":"C01","name":"一食堂","is_active":true}"#,
        )
        .unwrap();
        assert_eq!(c.kitchen_capacity, 5);
        assert!(c.location.is_none());
    }
}

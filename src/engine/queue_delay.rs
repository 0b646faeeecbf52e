// ==========================================
// 校园食堂点餐系统 - 排队延迟预估
// ==========================================
// 职责: 给出某食堂的粗粒度等待预估 (界面提示用)
// 注意: 独立于准入路径, 不看高峰强度与时间窗负载,
//       结果仅为参考值, 不参与准入判定
// ==========================================

use crate::domain::order::ActiveOrder;
use tracing::instrument;

// ==========================================
// QueueDelayPredictor - 排队延迟预估器
// ==========================================
pub struct QueueDelayPredictor;

impl QueueDelayPredictor {
    /// 预估某食堂当前的排队延迟 (分钟)
    ///
    /// 过滤出该食堂 confirmed/preparing 状态的订单; 无订单返回 0,
    /// 否则取各订单最长备餐时长的均值再除以厨房产能, 向上取整。
    /// 产能除数下限为 1 (非正产能不影响准入路径的算式传导)
    #[instrument(skip(active_orders))]
    pub fn predict(active_orders: &[ActiveOrder], canteen_id: &str, kitchen_capacity: i64) -> i64 {
        let canteen_orders: Vec<&ActiveOrder> = active_orders
            .iter()
            .filter(|order| order.canteen_id == canteen_id && order.status.is_active())
            .collect();

        if canteen_orders.is_empty() {
            return 0;
        }

        let total_prep: i64 = canteen_orders
            .iter()
            .map(|order| order.max_prep_time_minutes())
            .sum();
        let avg_prep = total_prep as f64 / canteen_orders.len() as f64;

        (avg_prep / kitchen_capacity.max(1) as f64).ceil() as i64
    }
}

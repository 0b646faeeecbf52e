// ==========================================
// 校园食堂点餐系统 - 配置层
// ==========================================
// 职责: 调度参数配置与算法常量
// 存储: 内存对象, 由宿主在进程启动时构造
// ==========================================

pub mod scheduler_config;

// 重导出核心配置对象
pub use scheduler_config::{ConfigError, RushWindow, SchedulerConfig};

// ==========================================
// 算法常量 (与原有业务口径一致, 不做配置化)
// ==========================================
pub mod constants {
    /// 取餐前固定安全余量 (分钟)
    pub const BUFFER_TIME_MINUTES: i64 = 2;

    /// 菜单未维护备餐时长时的缺省值 (分钟)
    pub const DEFAULT_PREP_TIME_MINUTES: u32 = 10;

    /// 食堂记录缺省厨房产能
    pub const DEFAULT_KITCHEN_CAPACITY: i64 = 5;

    /// 高峰窗口之外的基线强度
    pub const BASELINE_RUSH_INTENSITY: f64 = 0.2;

    /// 高峰对可用产能的最大折减比例 (峰值折减 30%)
    pub const RUSH_CAPACITY_DISCOUNT: f64 = 0.3;

    /// 准入阈值下限: 无论高峰如何, 厨房至少可并发 2 件
    pub const MIN_ADMISSION_THRESHOLD: i64 = 2;

    /// 改选时段的步进宽度 (分钟)
    pub const SLOT_STEP_MINUTES: i64 = 10;

    /// 向后搜索的最大步数 (覆盖 2 小时)
    pub const SLOT_SEARCH_MAX_ATTEMPTS: usize = 12;

    /// 候选时段负载回看窗口 (分钟)
    pub const TRAILING_LOAD_WINDOW_MINUTES: i64 = 15;

    /// 搜索无果时的兜底时段偏移 (分钟)
    pub const FALLBACK_SLOT_OFFSET_MINUTES: i64 = 120;

    /// 时段列表的最小备餐缓冲 (分钟)
    pub const MIN_PREP_BUFFER_MINUTES: i64 = 15;

    /// 档口看板催单阈值 (距备餐分钟数)
    pub const URGENT_THRESHOLD_MINUTES: i64 = 5;

    /// 已取消餐品折扣比例 (%)
    pub const DISCOUNT_PERCENT: u32 = 10;

    /// 已取消餐品认领有效期 (分钟)
    pub const CANCELLED_ITEM_EXPIRY_MINUTES: i64 = 30;
}

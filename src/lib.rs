// ==========================================
// 校园食堂点餐系统 - 调度核心库
// ==========================================
// 系统定位: 厨房产能准入调度 (纯计算, 无存储无 I/O)
// 宿主职责: 鉴权 / 持久化 / 推送 / 取餐码 / HTTP 路由
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 调度参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FeasibilityReason, OrderStatus, RefundStatus};

// 领域实体
pub use domain::{
    ActiveOrder, CancelDecision, CancellationPolicy, CancelledItemOffer, Canteen,
    FeasibilityResult, OrderItemSnapshot, TimeSlot, TimeWindow,
};

// 引擎
pub use engine::{
    CapacityLoadCalculator, FeasibilityChecker, QueueDelayPredictor, RushIntensityModel,
    SlotFinder, TimeSlotGenerator,
};

// 配置
pub use config::{ConfigError, RushWindow, SchedulerConfig};

// API
pub use api::{AdmissionGate, SchedulerApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "校园食堂点餐调度核心";

// ==========================================
// 预编译检查
// ==========================================

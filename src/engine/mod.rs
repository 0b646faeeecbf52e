// ==========================================
// 校园食堂点餐系统 - 引擎层
// ==========================================
// 职责: 实现调度业务规则, 不访问存储
// 红线: 引擎全部为纯函数/无状态对象, 规则必须输出 reason
// ==========================================

pub mod feasibility;
pub mod load;
pub mod queue_delay;
pub mod rush;
pub mod slot_finder;
pub mod slot_generator;

// 重导出核心引擎
pub use feasibility::FeasibilityChecker;
pub use load::CapacityLoadCalculator;
pub use queue_delay::QueueDelayPredictor;
pub use rush::RushIntensityModel;
pub use slot_finder::SlotFinder;
pub use slot_generator::TimeSlotGenerator;

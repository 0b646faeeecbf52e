// ==========================================
// 校园食堂点餐系统 - API 层
// ==========================================
// 职责: 面向宿主服务的业务接口
// 架构: API 层 -> Engine 层, 不含传输与存储
// ==========================================

pub mod admission_gate;
pub mod scheduler_api;

// 重导出核心接口
pub use admission_gate::AdmissionGate;
pub use scheduler_api::SchedulerApi;

// ==========================================
// 校园食堂点餐系统 - 准入串行化闸门
// ==========================================
// 背景: "查快照 -> 准入检查 -> 落库" 对同一食堂不具原子性,
//       两个并发请求可能同时观察到产能空闲而双双准入超卖。
// 方案: 按食堂粒度的互斥闸门, 宿主自愿把整段序列包进闸门;
//       引擎本身保持无锁无状态, 有事务复检能力的宿主可不用
// ==========================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ==========================================
// AdmissionGate - 按食堂串行化闸门
// ==========================================
#[derive(Default)]
pub struct AdmissionGate {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AdmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在某食堂的闸门内执行闭包
    ///
    /// 同一食堂的调用互相串行, 不同食堂互不阻塞。
    /// 闭包内通常执行: 取在途订单快照 -> check_feasibility -> 落库
    pub fn with_canteen<T>(&self, canteen_id: &str, f: impl FnOnce() -> T) -> T {
        let gate = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks
                .entry(canteen_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = gate.lock().unwrap_or_else(|e| e.into_inner());
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_serializes_same_canteen() {
        let gate = Arc::new(AdmissionGate::new());
        let counter = Arc::new(AtomicI64::new(0));
        let peak = Arc::new(AtomicI64::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                let counter = counter.clone();
                let peak = peak.clone();
                std::thread::spawn(move || {
                    gate.with_canteen("C01", || {
                        let inside = counter.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(inside, Ordering::SeqCst);
                        std::thread::sleep(std::time::Duration::from_millis(2));
                        counter.fetch_sub(1, Ordering::SeqCst);
                    });
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // 同一食堂闸门内同时至多一个调用
        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_different_canteens_do_not_block() {
        let gate = AdmissionGate::new();
        // 嵌套进入不同食堂的闸门不可死锁
        let value = gate.with_canteen("C01", || gate.with_canteen("C02", || 42));
        assert_eq!(value, 42);
    }
}

//! 节流服务 - 业务能力层
//!
//! 只负责"两次调用之间等待固定间隔"能力，不关心流程。
//! 节流策略单独成对象，后续若要换成自适应限流器，只需替换本模块。

use std::time::Duration;
use tracing::debug;

/// 固定间隔节流器
///
/// 每次 `pause()` 阻塞当前任务固定的时长，用于避免触发 API 频率限制
#[derive(Debug, Clone)]
pub struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    /// 创建新的节流器
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// 以秒为单位创建节流器
    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// 当前配置的间隔
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 等待一个间隔
    pub async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        debug!("⏱️ 等待 {:?} 后继续", self.interval);
        tokio::time::sleep(self.interval).await;
    }
}

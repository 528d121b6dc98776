//! 问题处理流程 - 流程层
//!
//! 核心职责：定义"一个问题"的完整处理流程
//!
//! 流程顺序：
//! 1. 记录进度日志
//! 2. 调用回答来源（LLM 或测试桩）
//! 3. 调用失败就地兜底，转为 `AnswerOutcome::Failed`
//!
//! 单次调用失败永远不会中断批处理，这是最小的错误包含边界。

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::question::{AnswerOutcome, AnsweredRecord, QuestionRecord};
use crate::services::llm_service::AnswerProvider;
use crate::utils::logging::truncate_text;

/// 问题处理流程
///
/// - 编排单个问题的完整处理过程
/// - 不持有任何资源（文件、输出路径）
/// - 只依赖回答能力（`AnswerProvider`）
pub struct AnswerFlow<P> {
    provider: P,
    verbose_logging: bool,
}

impl<P: AnswerProvider> AnswerFlow<P> {
    /// 创建新的问题处理流程
    pub fn new(provider: P, config: &Config) -> Self {
        Self {
            provider,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理单个问题，恰好产生一条回答记录
    ///
    /// # 参数
    /// - `record`: 问题记录
    /// - `index`: 问题序号（从 1 开始，仅用于日志）
    /// - `total`: 问题总数
    pub async fn run(&self, record: &QuestionRecord, index: usize, total: usize) -> AnsweredRecord {
        log_question_start(index, total);
        info!(
            "[问题 {}] 分类: {} | 内容: {}",
            index,
            record.category,
            truncate_text(&record.question, 80)
        );

        match self.provider.ask(&record.question).await {
            Ok(answer) => {
                info!("[问题 {}] ✓ 已获取回答", index);
                if self.verbose_logging {
                    debug!("[问题 {}] 回答: {}", index, truncate_text(&answer, 120));
                }
                AnsweredRecord::new(record, AnswerOutcome::Answered(answer))
            }
            Err(e) => {
                // 错误在这里兜底：转为可见的错误文本，批处理继续
                warn!("[问题 {}] ⚠️ 调用失败，记录错误信息: {}", index, e);
                AnsweredRecord::new(record, AnswerOutcome::Failed(e.to_string()))
            }
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_question_start(index: usize, total: usize) {
    info!("\n{}", "─".repeat(30));
    info!("处理第 {}/{} 个问题", index, total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    /// 永远成功的测试桩
    struct OkProvider;

    impl AnswerProvider for OkProvider {
        async fn ask(&self, question: &str) -> AppResult<String> {
            Ok(format!("answer to {}", question))
        }
    }

    /// 永远失败的测试桩
    struct FailProvider;

    impl AnswerProvider for FailProvider {
        async fn ask(&self, _question: &str) -> AppResult<String> {
            Err(AppError::Other("连接超时".to_string()))
        }
    }

    fn record() -> QuestionRecord {
        QuestionRecord {
            category: "general".to_string(),
            question: "What is 2+2?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_call_yields_answered_record() {
        let flow = AnswerFlow::new(OkProvider, &Config::default());

        let answered = flow.run(&record(), 1, 1).await;

        assert_eq!(answered.category, "general");
        assert_eq!(answered.question, "What is 2+2?");
        assert_eq!(
            answered.outcome,
            AnswerOutcome::Answered("answer to What is 2+2?".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_call_is_contained_as_failed_outcome() {
        let flow = AnswerFlow::new(FailProvider, &Config::default());

        let answered = flow.run(&record(), 1, 1).await;

        assert!(answered.outcome.is_failed());
        assert!(answered.outcome.as_text().starts_with("Error: "));
    }
}

//! 批量问题处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量问题的处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、构建 LLM 服务（模型白名单校验在此处失败）
//! 2. **批量加载**：从 CSV 加载全部问题（`Vec<QuestionRecord>`）
//! 3. **顺序处理**：按输入顺序逐个调用，两次调用之间固定间隔等待
//! 4. **结果累积**：每个问题恰好累积一条记录，失败的调用也不例外
//! 5. **文档渲染**：处理结束后一次性写出 Word 文档
//! 6. **全局统计**：汇总成功/失败数量

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::loaders::csv_loader;
use crate::services::{AnswerProvider, DocxRenderer, FixedIntervalPacer, LlmService};
use crate::workflow::AnswerFlow;
use crate::AppResult;

/// 应用主结构
pub struct App<P: AnswerProvider = LlmService> {
    config: Config,
    flow: AnswerFlow<P>,
    pacer: FixedIntervalPacer,
    renderer: DocxRenderer,
}

impl App<LlmService> {
    /// 初始化应用
    ///
    /// 模型不在白名单内时在这里直接失败，任何工作都不会开始
    pub fn initialize(config: Config) -> AppResult<Self> {
        let service = LlmService::new(&config)?;

        log_startup(&config);

        Ok(Self::with_provider(config, service))
    }
}

impl<P: AnswerProvider> App<P> {
    /// 使用自定义回答来源创建应用（测试时注入桩实现）
    pub fn with_provider(config: Config, provider: P) -> Self {
        let flow = AnswerFlow::new(provider, &config);
        let pacer = FixedIntervalPacer::from_secs(config.request_interval_secs);
        let renderer = DocxRenderer::new(&config.output_file);

        Self {
            config,
            flow,
            pacer,
            renderer,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载全部问题
        let questions = self.load_questions().await;

        if questions.is_empty() {
            warn!("⚠️ 没有加载到任何问题，程序结束");
            return Ok(());
        }

        let total = questions.len();
        log_questions_loaded(total, self.config.request_interval_secs);

        // 顺序处理全部问题
        let mut answered = Vec::with_capacity(total);
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (index, question) in questions.iter().enumerate() {
            let record = self.flow.run(question, index + 1, total).await;

            if record.outcome.is_failed() {
                stats.failed += 1;
            } else {
                stats.success += 1;
            }
            answered.push(record);

            // 固定间隔节流，避免触发 API 频率限制
            self.pacer.pause().await;
        }

        // 写出文档
        self.renderer.render(&answered)?;

        // 输出最终统计
        print_final_stats(&stats, self.renderer.output_path());

        Ok(())
    }

    /// 加载问题清单
    async fn load_questions(&self) -> Vec<crate::models::QuestionRecord> {
        info!("\n📁 正在加载问题清单...");
        csv_loader::load_questions(&self.config.questions_file).await
    }
}

/// 处理统计
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - CSV 批量问答模式");
    info!("📋 使用模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

fn log_questions_loaded(total: usize, interval_secs: u64) {
    info!("✓ 共 {} 个待处理的问题", total);
    info!("💡 每次调用之间等待 {} 秒\n", interval_secs);
}

fn print_final_stats(stats: &ProcessingStats, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n回答已保存至: {}", output_path.display());
}

//! # Ask Question Export
//!
//! 一个读取 CSV 问题清单、批量调用 Chat Completion API 并导出 Word 文档的自动化工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 问题记录、回答结果、模型白名单
//! - `csv_loader` - 从 CSV 文件加载问题清单
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个能力
//! - `LlmService` - Chat Completion 调用能力
//! - `FixedIntervalPacer` - 固定间隔节流能力
//! - `DocxRenderer` - Word 文档渲染能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个问题"的完整处理流程
//! - `AnswerFlow` - 流程编排（调用 LLM → 错误兜底 → 生成记录）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量问题处理器，顺序遍历并累积结果
//!
//! 另外附带一个与批处理流程互不耦合的静态页面服务（`server/`）。
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod server;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerOutcome, AnsweredRecord, ChatModel, QuestionRecord};
pub use orchestrator::App;
pub use services::{AnswerProvider, DocxRenderer, FixedIntervalPacer, LlmService};
pub use workflow::AnswerFlow;

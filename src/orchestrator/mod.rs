//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量问题处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载问题清单（Vec<QuestionRecord>）
//! - 顺序遍历，固定间隔节流
//! - 按输入顺序累积回答记录
//! - 渲染文档并输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<QuestionRecord>)
//!     ↓
//! workflow::AnswerFlow (处理单个 QuestionRecord)
//!     ↓
//! services (能力层：llm / throttle / docx)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单线程顺序执行**：没有并发调用，唯一的挂起点是固定间隔等待
//! 2. **向下依赖**：编排层 → workflow → services
//! 3. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};

pub mod docx_renderer;
pub mod llm_service;
pub mod throttle;

pub use docx_renderer::DocxRenderer;
pub use llm_service::{AnswerProvider, LlmService};
pub use throttle::FixedIntervalPacer;

//! LLM 服务 - 业务能力层
//!
//! 只负责"调用 Chat Completion"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};
use crate::models::chat_model::ChatModel;

/// 固定的系统角色设定
const SYSTEM_PREAMBLE: &str = "You are a helpful assistant.";

/// 单次回答的长度上限（token 数）
const MAX_RESPONSE_TOKENS: u32 = 500;

/// 固定采样温度
const TEMPERATURE: f32 = 0.7;

/// 回答来源
///
/// 流水线只依赖这个接口，测试时可以用桩实现替换真实的 LLM 调用
#[allow(async_fn_in_trait)]
pub trait AnswerProvider {
    /// 向外部服务提问并返回回答文本
    async fn ask(&self, question: &str) -> AppResult<String>;
}

/// LLM 服务
///
/// 职责：
/// - 调用 Chat Completion API 获取单个问题的回答
/// - 构建时校验模型白名单
/// - 只处理单个问题
/// - 不关心流程顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model: ChatModel,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// 模型名必须在白名单内，否则返回配置错误，批处理不会启动。
    /// API 密钥只从配置读取一次，缺失时发出警告但不阻止构建。
    pub fn new(config: &Config) -> AppResult<Self> {
        let model = ChatModel::from_str(&config.llm_model_name)
            .ok_or_else(|| AppError::invalid_model(&config.llm_model_name, ChatModel::allowed_list()))?;

        if config.llm_api_key.trim().is_empty() {
            warn!("⚠️ LLM_API_KEY 未设置，API 调用将会失败");
        }

        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.clone())
            .with_api_base(config.llm_api_base_url.clone());

        Ok(Self {
            client: Client::with_config(openai_config),
            model,
        })
    }

    /// 当前使用的模型
    pub fn model(&self) -> ChatModel {
        self.model
    }
}

impl AnswerProvider for LlmService {
    /// 发送一次 Chat Completion 请求
    ///
    /// 每次调用恰好发出一个网络请求，不做重试
    async fn ask(&self, question: &str) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", self.model);
        debug!("问题长度: {} 字符", question.len());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_PREAMBLE)
            .build()
            .map_err(|e| AppError::llm_api_failed(self.model.as_str(), e))?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(question)
            .build()
            .map_err(|e| AppError::llm_api_failed(self.model.as_str(), e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(TEMPERATURE)
            .max_tokens(MAX_RESPONSE_TOKENS)
            .build()
            .map_err(|e| AppError::llm_api_failed(self.model.as_str(), e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::llm_api_failed(self.model.as_str(), e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                AppError::Llm(LlmError::EmptyContent {
                    model: self.model.as_str().to_string(),
                })
            })?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的配置
    fn test_config(model: &str) -> Config {
        Config {
            llm_model_name: model.to_string(),
            llm_api_key: "test-key".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_accepts_allow_listed_model() {
        let service = LlmService::new(&test_config("gpt-4")).unwrap();
        assert_eq!(service.model(), ChatModel::Gpt4);
    }

    #[test]
    fn test_new_rejects_unknown_model_before_any_call() {
        // 白名单外的模型在构建阶段就失败，不会发出任何网络请求
        let err = match LlmService::new(&test_config("gpt-2")) {
            Ok(_) => panic!("白名单外的模型应该被拒绝"),
            Err(e) => e,
        };
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("gpt-2"));
    }

    #[test]
    fn test_new_error_lists_allowed_models() {
        let err = match LlmService::new(&test_config("not-a-model")) {
            Ok(_) => panic!("白名单外的模型应该被拒绝"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("gpt-3.5-turbo"));
        assert!(err.to_string().contains("gpt-4-1106-preview"));
    }

    /// 测试真实的 LLM 调用
    #[tokio::test]
    #[ignore] // 默认忽略，需要设置 LLM_API_KEY 后手动运行：cargo test -- --ignored
    async fn test_ask_real_api() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let service = LlmService::new(&config).expect("构建 LLM 服务失败");

        let answer = service.ask("What is 2+2?").await.expect("LLM 调用失败");
        println!("LLM 回答: {}", answer);
        assert!(!answer.is_empty());
    }
}

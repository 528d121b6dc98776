/// 模型白名单枚举
///
/// 只有这里列出的模型可以用于构建 `LlmService`，
/// 无效的模型名在构建阶段直接报配置错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatModel {
    /// gpt-3.5-turbo
    Gpt35Turbo,
    /// gpt-4
    Gpt4,
    /// gpt-4-1106-preview
    Gpt41106Preview,
}

impl ChatModel {
    /// 白名单中的全部模型
    pub fn all() -> &'static [ChatModel] {
        &[
            ChatModel::Gpt35Turbo,
            ChatModel::Gpt4,
            ChatModel::Gpt41106Preview,
        ]
    }

    /// 获取 API 使用的模型标识
    pub fn as_str(self) -> &'static str {
        match self {
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
            ChatModel::Gpt4 => "gpt-4",
            ChatModel::Gpt41106Preview => "gpt-4-1106-preview",
        }
    }

    /// 尝试从字符串解析模型（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gpt-3.5-turbo" => Some(ChatModel::Gpt35Turbo),
            "gpt-4" => Some(ChatModel::Gpt4),
            "gpt-4-1106-preview" => Some(ChatModel::Gpt41106Preview),
            _ => None,
        }
    }

    /// 白名单的可读形式，用于错误提示
    pub fn allowed_list() -> String {
        Self::all()
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 问题 CSV 文件路径
    pub questions_file: String,
    /// 输出 Word 文档路径
    pub output_file: String,
    /// 两次 API 调用之间的固定间隔（秒）
    pub request_interval_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- 静态页面服务配置 ---
    pub serve_ui: bool,
    pub server_bind_addr: String,
    pub static_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "questions.csv".to_string(),
            output_file: "chatgpt_responses.docx".to_string(),
            request_interval_secs: 2,
            verbose_logging: false,
            // API 密钥只从环境变量读取，不允许硬编码
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-3.5-turbo".to_string(),
            serve_ui: false,
            server_bind_addr: "127.0.0.1:8000".to_string(),
            static_file: "static/index.html".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            request_interval_secs: std::env::var("REQUEST_INTERVAL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_interval_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            serve_ui: std::env::var("SERVE_UI").ok().and_then(|v| v.parse().ok()).unwrap_or(default.serve_ui),
            server_bind_addr: std::env::var("SERVER_BIND_ADDR").unwrap_or(default.server_bind_addr),
            static_file: std::env::var("STATIC_FILE").unwrap_or(default.static_file),
        }
    }
}

//! 从 CSV 文件加载问题清单
//!
//! 输入文件为带表头的 UTF-8 CSV，必须包含 `category` 和 `question` 两列。
//! 文件缺失或解析失败都不是致命错误：报告后返回空列表，由调用方决定是否继续。

use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionRecord;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 从 CSV 文件加载问题清单
///
/// # 参数
/// - `path`: CSV 文件路径
///
/// # 返回
/// 按文件顺序返回问题记录；文件不存在或解析失败时返回空列表
pub async fn load_questions(path: &str) -> Vec<QuestionRecord> {
    match read_questions(path).await {
        Ok(questions) => {
            info!("✓ 成功从 {} 加载 {} 个问题", path, questions.len());
            questions
        }
        Err(e) => {
            warn!("⚠️ 加载问题失败: {}", e);
            Vec::new()
        }
    }
}

/// 读取并解析 CSV 文件
async fn read_questions(path: &str) -> AppResult<Vec<QuestionRecord>> {
    if !Path::new(path).exists() {
        return Err(AppError::File(FileError::NotFound {
            path: path.to_string(),
        }));
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut questions = Vec::new();

    for (index, row) in reader.deserialize::<QuestionRecord>().enumerate() {
        // 表头占第 1 行，数据从第 2 行开始
        let row_number = index + 2;
        let record = row.map_err(|e| AppError::csv_parse_failed(path, e))?;

        if record.category.trim().is_empty() || record.question.trim().is_empty() {
            return Err(AppError::File(FileError::MissingField {
                path: path.to_string(),
                row: row_number,
            }));
        }

        questions.push(record);
    }

    Ok(questions)
}

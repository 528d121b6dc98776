//! 问题与回答记录
//!
//! 整条流水线的数据模型：CSV 行 → `QuestionRecord` → `AnsweredRecord`

use serde::Deserialize;

/// 问题记录
///
/// 对应 CSV 文件中的一行，按文件顺序创建，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    /// 分类名称
    pub category: String,
    /// 问题内容
    pub question: String,
}

/// 单次调用的结果
///
/// 调用失败不会中断批处理，而是作为 `Failed` 保留在记录中，
/// 渲染时以可见的错误文本呈现
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// 调用成功，内容为去除首尾空白后的回答文本
    Answered(String),
    /// 调用失败，内容为失败原因
    Failed(String),
}

impl AnswerOutcome {
    /// 渲染到文档中的回答文本
    ///
    /// 失败的调用渲染为 `Error: <原因>`，保证文档中每个问题都有对应的回答块
    pub fn as_text(&self) -> String {
        match self {
            AnswerOutcome::Answered(text) => text.clone(),
            AnswerOutcome::Failed(cause) => format!("Error: {}", cause),
        }
    }

    /// 是否为失败的调用
    pub fn is_failed(&self) -> bool {
        matches!(self, AnswerOutcome::Failed(_))
    }
}

/// 已回答的问题记录
///
/// 每个 `QuestionRecord` 恰好产生一条，调用失败时也不例外（1:1 不变量）
#[derive(Debug, Clone)]
pub struct AnsweredRecord {
    pub category: String,
    pub question: String,
    pub outcome: AnswerOutcome,
}

impl AnsweredRecord {
    /// 由问题记录和调用结果构建
    pub fn new(record: &QuestionRecord, outcome: AnswerOutcome) -> Self {
        Self {
            category: record.category.clone(),
            question: record.question.clone(),
            outcome,
        }
    }
}

/// 按分类分组，保持首次出现的分类顺序，组内保持输入顺序
///
/// 注意：不能用 HashMap，否则分类顺序不稳定
pub fn group_by_category(records: &[AnsweredRecord]) -> Vec<(String, Vec<&AnsweredRecord>)> {
    let mut groups: Vec<(String, Vec<&AnsweredRecord>)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(category, _)| category == &record.category) {
            Some((_, entries)) => entries.push(record),
            None => groups.push((record.category.clone(), vec![record])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(category: &str, question: &str, answer: &str) -> AnsweredRecord {
        AnsweredRecord {
            category: category.to_string(),
            question: question.to_string(),
            outcome: AnswerOutcome::Answered(answer.to_string()),
        }
    }

    #[test]
    fn test_group_by_category_keeps_first_seen_order() {
        let records = vec![
            answered("general", "q1", "a1"),
            answered("science", "q2", "a2"),
            answered("general", "q3", "a3"),
        ];

        let groups = group_by_category(&records);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "general");
        assert_eq!(groups[1].0, "science");
    }

    #[test]
    fn test_group_by_category_keeps_input_order_within_group() {
        let records = vec![
            answered("general", "q1", "a1"),
            answered("science", "q2", "a2"),
            answered("general", "q3", "a3"),
            answered("general", "q4", "a4"),
        ];

        let groups = group_by_category(&records);

        let general: Vec<&str> = groups[0].1.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(general, vec!["q1", "q3", "q4"]);
    }

    #[test]
    fn test_group_by_category_drops_nothing() {
        let records = vec![
            answered("a", "q1", "a1"),
            answered("b", "q2", "a2"),
            answered("c", "q3", "a3"),
        ];

        let groups = group_by_category(&records);
        let total: usize = groups.iter().map(|(_, entries)| entries.len()).sum();

        assert_eq!(total, records.len());
    }

    #[test]
    fn test_failed_outcome_renders_error_prefix() {
        let outcome = AnswerOutcome::Failed("连接超时".to_string());
        assert!(outcome.as_text().starts_with("Error: "));
        assert!(outcome.is_failed());
    }

    #[test]
    fn test_answered_outcome_renders_plain_text() {
        let outcome = AnswerOutcome::Answered("4".to_string());
        assert_eq!(outcome.as_text(), "4");
        assert!(!outcome.is_failed());
    }
}

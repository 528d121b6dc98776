//! Word 文档渲染服务 - 业务能力层
//!
//! 只负责"把回答记录写成 .docx"能力，不关心流程
//!
//! ## 文档结构
//!
//! 按分类分组（保持首次出现顺序），每组依次输出：
//! - 分类标题（Heading 1）
//! - 每条记录：引用样式的问题段落 → 回答段落 → 空白段落
//! - 组末的硬分页符

use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::question::{group_by_category, AnsweredRecord};

/// 默认字体
const FONT_NAME: &str = "Calibri";

/// 默认字号（磅）
const FONT_SIZE_PT: usize = 11;

/// Word 文档渲染服务
///
/// 职责：
/// - 按分类分组并渲染全部回答记录
/// - 已存在的输出文件会被覆盖
/// - 只处理 `Vec<AnsweredRecord>` 到文件的转换
pub struct DocxRenderer {
    output_path: PathBuf,
}

impl DocxRenderer {
    /// 创建新的渲染服务
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// 输出文件路径
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 渲染全部记录并写入输出文件
    ///
    /// 写入失败是致命错误，直接返回给调用方；
    /// 文件句柄在函数返回前关闭
    pub fn render(&self, records: &[AnsweredRecord]) -> AppResult<()> {
        debug!("开始渲染文档，共 {} 条记录", records.len());

        let mut docx = Docx::new()
            .default_fonts(RunFonts::new().ascii(FONT_NAME))
            .default_size(FONT_SIZE_PT * 2)
            .add_style(heading_style())
            .add_style(quote_style());

        for (category, entries) in group_by_category(records) {
            debug!("渲染分类: {} ({} 条)", category, entries.len());

            // 分类标题
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(category.as_str()))
                    .style("Heading1"),
            );

            for record in entries {
                // 问题（引用样式）
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(format!("Question: {}", record.question)))
                        .style("Quote"),
                );

                // 回答（失败的调用渲染为 "Error: <原因>"）
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(format!("Solution: {}", record.outcome.as_text()))),
                );

                // 问答之间的空白段落
                docx = docx.add_paragraph(Paragraph::new());
            }

            // 每个分类之后硬分页
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        }

        let path_display = self.output_path.display().to_string();
        let file = File::create(&self.output_path)
            .map_err(|e| AppError::render_write_failed(&path_display, e))?;

        docx.build()
            .pack(file)
            .map_err(|e| AppError::render_write_failed(&path_display, e))?;

        info!("✓ 文档已保存至: {}", path_display);

        Ok(())
    }
}

/// 分类标题样式
fn heading_style() -> Style {
    Style::new("Heading1", StyleType::Paragraph)
        .name("Heading 1")
        .size(32)
        .bold()
}

/// 问题引用样式
fn quote_style() -> Style {
    Style::new("Quote", StyleType::Paragraph)
        .name("Quote")
        .italic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::AnswerOutcome;
    use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
    use std::path::Path;

    fn answered(category: &str, question: &str, answer: &str) -> AnsweredRecord {
        AnsweredRecord {
            category: category.to_string(),
            question: question.to_string(),
            outcome: AnswerOutcome::Answered(answer.to_string()),
        }
    }

    /// 读回文档的段落文本
    ///
    /// 分页符段落（有 Run 但没有文本）记为 "<page-break>"，
    /// 空白段落（没有 Run）记为空字符串
    fn read_paragraphs(path: &Path) -> Vec<String> {
        let bytes = std::fs::read(path).unwrap();
        let docx = read_docx(&bytes).unwrap();

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                let mut text = String::new();
                let mut has_run = false;
                for pc in &para.children {
                    if let ParagraphChild::Run(run) = pc {
                        has_run = true;
                        for rc in &run.children {
                            if let RunChild::Text(t) = rc {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                if text.is_empty() && has_run {
                    paragraphs.push("<page-break>".to_string());
                } else {
                    paragraphs.push(text);
                }
            }
        }
        paragraphs
    }

    #[test]
    fn test_render_emits_heading_qa_blocks_and_page_break() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let renderer = DocxRenderer::new(&output);

        let records = vec![
            answered("general", "What is 2+2?", "4"),
            answered("general", "Name a prime number", "3"),
        ];

        renderer.render(&records).unwrap();

        let paragraphs = read_paragraphs(&output);
        assert_eq!(
            paragraphs,
            vec![
                "general",
                "Question: What is 2+2?",
                "Solution: 4",
                "",
                "Question: Name a prime number",
                "Solution: 3",
                "",
                "<page-break>",
            ]
        );
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let renderer = DocxRenderer::new(&output);

        renderer
            .render(&[
                answered("a", "q1", "a1"),
                answered("b", "q2", "a2"),
            ])
            .unwrap();
        renderer.render(&[answered("a", "q1", "a1")]).unwrap();

        let paragraphs = read_paragraphs(&output);
        // 第二次渲染完全覆盖第一次的内容
        assert_eq!(paragraphs.iter().filter(|p| p.starts_with("Question:")).count(), 1);
        assert!(!paragraphs.contains(&"b".to_string()));
    }

    #[test]
    fn test_render_failed_outcome_as_visible_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let renderer = DocxRenderer::new(&output);

        let records = vec![AnsweredRecord {
            category: "science".to_string(),
            question: "What is H2O?".to_string(),
            outcome: AnswerOutcome::Failed("连接超时".to_string()),
        }];

        renderer.render(&records).unwrap();

        let paragraphs = read_paragraphs(&output);
        assert!(paragraphs
            .iter()
            .any(|p| p.starts_with("Solution: Error: ")));
    }
}

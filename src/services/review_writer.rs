//! 错题回顾写入服务 - 业务能力层
//!
//! 只负责"写回顾文件"能力，不关心回合流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::models::element::Element;

/// 错题回顾写入服务
///
/// 职责：
/// - 把每次答错的元素追加到回顾文件
/// - 只处理单次答错的记录
/// - 不关心回合顺序，写失败也不中断测验
pub struct ReviewWriter {
    review_file_path: String,
}

impl ReviewWriter {
    /// 创建新的回顾写入服务
    pub fn new() -> Self {
        Self {
            review_file_path: "review.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            review_file_path: path.into(),
        }
    }

    /// 记录一次答错
    ///
    /// # 参数
    /// - `element`: 本回合被提问的元素
    /// - `detail`: 用户的错误内容描述
    pub async fn write(&self, element: &Element, detail: &str) -> Result<()> {
        debug!(
            "写入回顾: {} ({}) | {}",
            element.symbol, element.name, detail
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.review_file_path)?;

        let line = format!(
            "#{} {} ({}) | {}\n",
            element.atomic_number, element.name, element.symbol, detail
        );

        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

impl Default for ReviewWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::Category;

    #[tokio::test]
    async fn write_appends_one_line_per_miss() {
        let path = std::env::temp_dir().join(format!("review_test_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let writer = ReviewWriter::with_path(path.to_string_lossy().to_string());
        let oxygen = Element {
            atomic_number: 8,
            symbol: "O".to_string(),
            name: "Oxygen".to_string(),
            group: 16,
            period: 2,
            category: Category::Nonmetal,
        };

        writer.write(&oxygen, "wrong name: \"oxigen\"").await.unwrap();
        writer.write(&oxygen, "wrong cell: 7").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "#8 Oxygen (O) | wrong name: \"oxigen\"");
        assert_eq!(lines[1], "#8 Oxygen (O) | wrong cell: 7");

        let _ = std::fs::remove_file(&path);
    }
}

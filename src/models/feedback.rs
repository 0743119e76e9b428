//! 反馈消息模型
//!
//! 每次状态迁移产生的用户可见消息；呈现层按级别着色渲染

use serde::{Deserialize, Serialize};

/// 消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// 提示（名称正确，等待点击格子）
    Info,
    /// 成功（双项全对）
    Success,
    /// 错误（名称或格子答错）
    Error,
}

/// 展示给用户的一条反馈消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub severity: Severity,
    pub text: String,
}

impl Feedback {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }
}

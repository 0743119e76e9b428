//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期与流程调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::quiz_session (会话：输入循环 + 定时器)
//!     ↓
//! workflow::RoundFlow (处理单个回合的状态机)
//!     ↓
//! services (能力层：catalog / name_matcher / review_writer)
//!     ↓
//! models (数据层：元素、反馈、内嵌周期表)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：会话只做调度和统计，不做计分判断
//! 2. **资源隔离**：只有编排层持有终端输入与回顾文件
//! 3. **向下依赖**：编排层 → workflow → services → models

pub mod quiz_session;

pub use quiz_session::{App, SessionStats};

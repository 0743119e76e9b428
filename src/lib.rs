//! # Periodic Quiz
//!
//! 一个终端版周期表测验：每回合按符号提问一个元素，用户先输入名称、
//! 再在周期表上点出对应格子，系统记录对错并用定时揭示驱动回合切换
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 元素、分类、反馈消息等数据类型
//! - 周期表数据内嵌于 TOML，启动时加载并校验一次，此后只读
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只管一项能力
//! - `ElementCatalog` - 目录查询 / 题库过滤能力
//! - `name_matcher` - 名称归一化比较能力
//! - `ReviewWriter` - 写错题回顾文件能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个回合"的完整状态机
//! - `RoundState` - 回合可观察状态（阶段、揭示、计分）
//! - `RoundFlow` - 迁移规则（提名 → 点格 → 揭示 → 下一回合）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/quiz_session` - 会话驱动器，管理输入循环与定时器
//!
//! 呈现层（`presentation/`）作为边界只负责网格渲染与命令解析，
//! 不参与任何计分判断

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, CatalogError};
pub use models::{Category, Element, Feedback, Severity};
pub use orchestrator::{App, SessionStats};
pub use services::element_catalog::ElementCatalog;
pub use workflow::{
    Phase, RevealPolarity, RoundFlow, RoundOutcome, RoundState, TimerAction, TimerRequest,
    Transition,
};

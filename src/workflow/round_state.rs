//! 回合状态 - 流程层
//!
//! 回合状态机的全部可观察字段。状态对象会话期间只创建一次，
//! 每个回合开始时复位；计分器跨回合累计，永不随回合重置

use crate::models::feedback::Feedback;

/// 回合状态机的离散阶段
///
/// 用带标签的枚举而不是多个布尔量，非法组合无法表达
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 等待用户输入名称
    AwaitingInput,
    /// 名称已确认，等待点击格子
    NameConfirmed,
    /// 正在揭示本回合结果，输入无效
    Resolving,
    /// 正确格子已揭示，新回合即将开始，输入无效
    Transitioning,
}

impl Phase {
    /// 当前阶段是否接受用户输入
    pub fn accepts_input(self) -> bool {
        matches!(self, Phase::AwaitingInput | Phase::NameConfirmed)
    }
}

/// 揭示格子的着色提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolarity {
    /// 无揭示
    None,
    /// 绿色（正确）
    Correct,
    /// 红色（错误）
    Incorrect,
}

/// 回合状态
#[derive(Debug)]
pub struct RoundState {
    /// 当前被提问元素的原子序数（首回合开始前为 None）
    pub current: Option<u8>,
    /// 用户最近一次提交的名称
    pub name_input: String,
    /// 当前被揭示的格子
    pub revealed: Option<u8>,
    /// 揭示格子的着色
    pub polarity: RevealPolarity,
    /// 答对计数（只增不减）
    pub correct_count: u32,
    /// 答错计数（只增不减）
    pub incorrect_count: u32,
    /// 当前阶段
    pub phase: Phase,
    /// 最近一条反馈消息
    pub message: Option<Feedback>,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            current: None,
            name_input: String::new(),
            revealed: None,
            polarity: RevealPolarity::None,
            correct_count: 0,
            incorrect_count: 0,
            phase: Phase::AwaitingInput,
            message: None,
        }
    }

    /// 回合开始时复位：换题并清空输入、揭示与消息，计分器保持不变
    pub fn reset_for_round(&mut self, atomic_number: u8) {
        self.current = Some(atomic_number);
        self.name_input.clear();
        self.revealed = None;
        self.polarity = RevealPolarity::None;
        self.message = None;
        self.phase = Phase::AwaitingInput;
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

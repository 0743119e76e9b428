//! 回合处理流程 - 流程层
//!
//! 核心职责：定义"一个回合"的完整状态机
//!
//! 流程顺序：
//! 1. start_round → 从题库均匀抽取元素，等待名称输入
//! 2. submit_name → 名称确认 / 名称错误（揭示正确格子，定时进入下一回合）
//! 3. select_cell → 计分并揭示；点错格子走两段揭示后再进入下一回合
//!
//! 流程自身不休眠：所有延时以 [`TimerRequest`] 形式交给编排层执行，
//! 到期回调带着回合代数返回，代数不匹配的过期定时器直接丢弃，
//! 保证旧回合的回调不会覆盖新回合的状态

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppResult, CatalogError};
use crate::models::element::Element;
use crate::models::feedback::Feedback;
use crate::services::element_catalog::ElementCatalog;
use crate::services::name_matcher;
use crate::workflow::round_state::{Phase, RevealPolarity, RoundState};

/// 单次操作的结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// 名称匹配，等待点击格子
    NameConfirmed,
    /// 名称与格子都正确
    BothCorrect,
    /// 格子正确但名称未确认
    CellCorrectNameWrong,
    /// 名称错误
    NameWrong,
    /// 点错格子
    CellWrong,
    /// 输入被忽略（阶段不接受输入 / 格子禁用 / 尚无当前元素）
    Ignored,
}

/// 定时动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// 揭示正确格子（点错格子后的第二阶段）
    RevealCorrect,
    /// 开始新回合
    AdvanceRound,
}

/// 延时请求
///
/// 由编排层负责真正休眠，到期后原样传回 [`RoundFlow::handle_timer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    /// 发起请求时的回合代数
    pub generation: u64,
    /// 延时时长
    pub delay: Duration,
    /// 到期后执行的动作
    pub action: TimerAction,
}

/// 一次操作引发的状态迁移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub outcome: RoundOutcome,
    /// 需要编排层调度的延时（没有则为 None）
    pub timer: Option<TimerRequest>,
}

impl Transition {
    fn ignored() -> Self {
        Self {
            outcome: RoundOutcome::Ignored,
            timer: None,
        }
    }

    fn of(outcome: RoundOutcome) -> Self {
        Self {
            outcome,
            timer: None,
        }
    }

    fn with_timer(outcome: RoundOutcome, timer: TimerRequest) -> Self {
        Self {
            outcome,
            timer: Some(timer),
        }
    }
}

/// 回合处理流程
///
/// - 持有题库与回合状态，实现全部迁移规则
/// - 不拥有终端，也不自己休眠
/// - 随机源从外部注入，固定种子时出题顺序可复现
pub struct RoundFlow {
    catalog: Arc<ElementCatalog>,
    /// 题库：可被提问的原子序数，升序
    pool: Vec<u8>,
    excluded_ranges: Vec<(u8, u8)>,
    state: RoundState,
    rng: StdRng,
    /// 回合代数：每开新回合加一，旧回合的定时器据此作废
    generation: u64,
    resolve_delay: Duration,
    wrong_cell_delay: Duration,
    correct_cell_delay: Duration,
}

impl RoundFlow {
    /// 创建新的回合流程
    ///
    /// 题库在此一次性推导；排除区间覆盖全表时报 `EmptyQuizPool`，
    /// 之后 `start_round` 不再有失败路径
    pub fn new(catalog: Arc<ElementCatalog>, config: &Config) -> AppResult<Self> {
        let pool: Vec<u8> = catalog
            .quiz_pool(&config.excluded_ranges)
            .iter()
            .map(|e| e.atomic_number)
            .collect();
        if pool.is_empty() {
            return Err(CatalogError::EmptyQuizPool.into());
        }

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            catalog,
            pool,
            excluded_ranges: config.excluded_ranges.clone(),
            state: RoundState::new(),
            rng,
            generation: 0,
            resolve_delay: Duration::from_millis(config.resolve_delay_ms),
            wrong_cell_delay: Duration::from_millis(config.wrong_cell_delay_ms),
            correct_cell_delay: Duration::from_millis(config.correct_cell_delay_ms),
        })
    }

    /// 只读访问回合状态（呈现层渲染用）
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// 当前回合代数（等于已开始的回合数）
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 题库大小
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// 当前被提问的元素
    pub fn current_element(&self) -> Option<&Element> {
        self.state.current.and_then(|n| self.catalog.get(n))
    }

    /// 格子是否可点击（不在排除区间内）
    pub fn is_cell_enabled(&self, atomic_number: u8) -> bool {
        !ElementCatalog::is_excluded(atomic_number, &self.excluded_ranges)
    }

    /// 开始新回合
    ///
    /// 推进到新题目的唯一入口，会话开始时必须首先调用。
    /// 在题库索引上做均匀抽取，允许与上一回合重复
    pub fn start_round(&mut self) {
        self.generation += 1;
        let index = self.rng.gen_range(0..self.pool.len());
        let atomic_number = self.pool[index];
        self.state.reset_for_round(atomic_number);

        if let Some(element) = self.catalog.get(atomic_number) {
            info!(
                "[回合 {}] 🎯 新回合开始: {} (#{})",
                self.generation, element.symbol, element.atomic_number
            );
        }
    }

    /// 提交名称猜测
    ///
    /// 任意字符串（含空串）都会被接受并比较；
    /// 名称确认后再次提交会重新比较一次
    pub fn submit_name(&mut self, text: &str) -> Transition {
        if !self.state.phase.accepts_input() {
            debug!(
                "[回合 {}] 名称输入被忽略（阶段 {:?}）",
                self.generation, self.state.phase
            );
            return Transition::ignored();
        }
        let Some(element) = self.current_element().cloned() else {
            return Transition::ignored();
        };

        self.state.name_input = text.to_string();

        if name_matcher::matches(text, &element.name) {
            self.state.phase = Phase::NameConfirmed;
            self.state.message = Some(Feedback::info(
                "Correct Name! Now click on the correct cell in the periodic table.",
            ));
            info!("[回合 {}] ✓ 名称正确，等待点击格子", self.generation);
            Transition::of(RoundOutcome::NameConfirmed)
        } else {
            self.state.incorrect_count += 1;
            self.state.revealed = Some(element.atomic_number);
            self.state.polarity = RevealPolarity::Incorrect;
            self.state.message = Some(Feedback::error(format!(
                "Incorrect Name! The correct name was: {}",
                element.name
            )));
            self.state.phase = Phase::Resolving;
            warn!(
                "[回合 {}] ❌ 名称错误: 输入 \"{}\"，正确为 {}",
                self.generation, text, element.name
            );
            Transition::with_timer(
                RoundOutcome::NameWrong,
                TimerRequest {
                    generation: self.generation,
                    delay: self.resolve_delay,
                    action: TimerAction::AdvanceRound,
                },
            )
        }
    }

    /// 点击周期表格子
    ///
    /// 禁用格子与表外标识直接忽略；揭示期间输入无效
    pub fn select_cell(&mut self, atomic_number: u8) -> Transition {
        let Some(element) = self.current_element().cloned() else {
            return Transition::ignored();
        };
        let Some(clicked_name) = self.catalog.get(atomic_number).map(|e| e.name.clone()) else {
            debug!(
                "[回合 {}] 点击被忽略: #{} 不在表上",
                self.generation, atomic_number
            );
            return Transition::ignored();
        };
        if ElementCatalog::is_excluded(atomic_number, &self.excluded_ranges) {
            debug!(
                "[回合 {}] 点击被忽略: #{} 在禁用区间",
                self.generation, atomic_number
            );
            return Transition::ignored();
        }
        if !self.state.phase.accepts_input() {
            debug!(
                "[回合 {}] 点击被忽略（阶段 {:?}）",
                self.generation, self.state.phase
            );
            return Transition::ignored();
        }

        let correct = element.atomic_number;
        if atomic_number == correct {
            // 点对格子后按名称是否已确认分为两种记分结果
            let outcome = if self.state.phase == Phase::NameConfirmed {
                self.state.correct_count += 1;
                self.state.message = Some(Feedback::success("Both Correct! Well done!"));
                info!("[回合 {}] ✅ 双项全对", self.generation);
                RoundOutcome::BothCorrect
            } else {
                self.state.incorrect_count += 1;
                self.state.message = Some(Feedback::error(format!(
                    "Correct Cell! But the name was incorrect. The correct name was: {}",
                    element.name
                )));
                warn!("[回合 {}] ❌ 格子正确但名称未确认", self.generation);
                RoundOutcome::CellCorrectNameWrong
            };
            self.state.revealed = Some(correct);
            self.state.polarity = RevealPolarity::Correct;
            self.state.phase = Phase::Resolving;
            Transition::with_timer(
                outcome,
                TimerRequest {
                    generation: self.generation,
                    delay: self.resolve_delay,
                    action: TimerAction::AdvanceRound,
                },
            )
        } else {
            // 点错格子不回看名称是否已确认，统一按一次答错处理
            self.state.incorrect_count += 1;
            self.state.message = Some(Feedback::error(format!(
                "Incorrect Cell! That is {}. The current element was {}.",
                clicked_name, element.name
            )));
            self.state.revealed = Some(atomic_number);
            self.state.polarity = RevealPolarity::Incorrect;
            self.state.phase = Phase::Resolving;
            warn!(
                "[回合 {}] ❌ 点错格子: #{}，正确为 #{}",
                self.generation, atomic_number, correct
            );
            Transition::with_timer(
                RoundOutcome::CellWrong,
                TimerRequest {
                    generation: self.generation,
                    delay: self.wrong_cell_delay,
                    action: TimerAction::RevealCorrect,
                },
            )
        }
    }

    /// 处理到期的定时回调
    ///
    /// 代数不匹配说明定时器来自已被取代的回合，按无操作丢弃；
    /// 返回下一段延时请求（点错格子的两段揭示），没有则为 None
    pub fn handle_timer(&mut self, request: TimerRequest) -> Option<TimerRequest> {
        if request.generation != self.generation {
            debug!(
                "[回合 {}] 忽略过期定时器（代数 {}）",
                self.generation, request.generation
            );
            return None;
        }

        match request.action {
            TimerAction::RevealCorrect => {
                if let Some(n) = self.state.current {
                    self.state.revealed = Some(n);
                    self.state.polarity = RevealPolarity::Correct;
                }
                self.state.phase = Phase::Transitioning;
                Some(TimerRequest {
                    generation: self.generation,
                    delay: self.correct_cell_delay,
                    action: TimerAction::AdvanceRound,
                })
            }
            TimerAction::AdvanceRound => {
                self.start_round();
                None
            }
        }
    }
}

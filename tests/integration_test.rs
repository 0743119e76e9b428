//! 端到端回合流程测试
//!
//! 用"只保留指定元素"的排除区间固定出题，从会话视角走完
//! 提名 → 点格 → 定时揭示 → 新回合的完整路径

use std::sync::Arc;
use std::time::Duration;

use periodic_quiz::config::Config;
use periodic_quiz::services::element_catalog::ElementCatalog;
use periodic_quiz::workflow::round_flow::{RoundFlow, RoundOutcome, TimerAction};
use periodic_quiz::workflow::round_state::{Phase, RevealPolarity};
use periodic_quiz::{Feedback, Severity};

/// 构造只保留给定元素的配置（其余原子序数全部排除）
fn config_keeping(kept: &[u8]) -> Config {
    let mut excluded = Vec::new();
    let mut low: u16 = 1;
    for &n in kept {
        let n = n as u16;
        if low < n {
            excluded.push((low as u8, (n - 1) as u8));
        }
        low = n + 1;
    }
    if low <= 118 {
        excluded.push((low as u8, 118));
    }
    Config {
        excluded_ranges: excluded,
        rng_seed: Some(7),
        ..Config::default()
    }
}

fn flow_keeping(kept: &[u8]) -> RoundFlow {
    let catalog = Arc::new(ElementCatalog::load().unwrap());
    RoundFlow::new(catalog, &config_keeping(kept)).unwrap()
}

fn advance_until(flow: &mut RoundFlow, atomic_number: u8) {
    for _ in 0..200 {
        flow.start_round();
        if flow.state().current == Some(atomic_number) {
            return;
        }
    }
    panic!("200 回合内未抽到 #{}", atomic_number);
}

#[test]
fn hydrogen_round_scores_both_correct() {
    let mut flow = flow_keeping(&[1]);
    flow.start_round();

    let hydrogen = flow.current_element().unwrap();
    assert_eq!(hydrogen.symbol, "H");
    assert_eq!(flow.state().phase, Phase::AwaitingInput);

    // 名称正确：只确认，不计分
    let transition = flow.submit_name("hydrogen");
    assert_eq!(transition.outcome, RoundOutcome::NameConfirmed);
    assert_eq!(flow.state().phase, Phase::NameConfirmed);
    assert_eq!(flow.state().correct_count, 0);
    assert_eq!(flow.state().incorrect_count, 0);
    assert_eq!(
        flow.state().message,
        Some(Feedback::info(
            "Correct Name! Now click on the correct cell in the periodic table."
        ))
    );

    // 点对格子：双项全对计一分
    let transition = flow.select_cell(1);
    assert_eq!(transition.outcome, RoundOutcome::BothCorrect);
    assert_eq!(flow.state().correct_count, 1);
    assert_eq!(flow.state().incorrect_count, 0);
    assert_eq!(flow.state().revealed, Some(1));
    assert_eq!(flow.state().polarity, RevealPolarity::Correct);

    // 2000ms 后进入新回合
    let timer = transition.timer.unwrap();
    assert_eq!(timer.delay, Duration::from_millis(2000));
    assert_eq!(timer.action, TimerAction::AdvanceRound);
    assert!(flow.handle_timer(timer).is_none());
    assert_eq!(flow.state().phase, Phase::AwaitingInput);
    assert_eq!(flow.state().revealed, None);
    assert_eq!(flow.state().correct_count, 1);
}

#[test]
fn misspelled_oxygen_reveals_and_restarts() {
    let mut flow = flow_keeping(&[8]);
    flow.start_round();
    assert_eq!(flow.current_element().unwrap().symbol, "O");

    let transition = flow.submit_name("oxigen");
    assert_eq!(transition.outcome, RoundOutcome::NameWrong);
    assert_eq!(flow.state().incorrect_count, 1);
    assert_eq!(flow.state().correct_count, 0);
    assert_eq!(flow.state().revealed, Some(8));
    assert_eq!(flow.state().polarity, RevealPolarity::Incorrect);
    let message = flow.state().message.clone().unwrap();
    assert_eq!(message.severity, Severity::Error);
    assert!(message.text.contains("Oxygen"));

    let timer = transition.timer.unwrap();
    assert_eq!(timer.delay, Duration::from_millis(2000));
    assert!(flow.handle_timer(timer).is_none());
    assert_eq!(flow.state().phase, Phase::AwaitingInput);
    assert_eq!(flow.state().incorrect_count, 1);
}

#[test]
fn carbon_wrong_cell_walks_two_stage_reveal() {
    let mut flow = flow_keeping(&[6, 7]);
    advance_until(&mut flow, 6);
    let round = flow.generation();

    // 点到氮（#7）：立即记一次答错，先揭示点错的格子
    let transition = flow.select_cell(7);
    assert_eq!(transition.outcome, RoundOutcome::CellWrong);
    assert_eq!(flow.state().incorrect_count, 1);
    assert_eq!(flow.state().revealed, Some(7));
    assert_eq!(flow.state().polarity, RevealPolarity::Incorrect);
    let message = flow.state().message.clone().unwrap();
    assert!(message.text.contains("Nitrogen"));
    assert!(message.text.contains("Carbon"));

    // 两段揭示期间输入无效
    assert_eq!(flow.submit_name("carbon").outcome, RoundOutcome::Ignored);
    assert_eq!(flow.select_cell(6).outcome, RoundOutcome::Ignored);

    // 第一段 1500ms：切换到正确格子
    let first = transition.timer.unwrap();
    assert_eq!(first.delay, Duration::from_millis(1500));
    assert_eq!(first.action, TimerAction::RevealCorrect);
    let second = flow.handle_timer(first).unwrap();
    assert_eq!(flow.state().revealed, Some(6));
    assert_eq!(flow.state().polarity, RevealPolarity::Correct);
    assert_eq!(flow.select_cell(6).outcome, RoundOutcome::Ignored);

    // 第二段 1500ms：恰好开始一个新回合
    assert_eq!(second.delay, Duration::from_millis(1500));
    assert_eq!(second.action, TimerAction::AdvanceRound);
    assert!(flow.handle_timer(second).is_none());
    assert_eq!(flow.generation(), round + 1);
    assert_eq!(flow.state().phase, Phase::AwaitingInput);
    assert_eq!(flow.state().incorrect_count, 1);
    assert_eq!(flow.state().correct_count, 0);
}

#[test]
fn score_counters_accumulate_across_rounds() {
    let mut flow = flow_keeping(&[1]);
    flow.start_round();

    // 第一回合：答错名称
    let transition = flow.submit_name("helium");
    assert_eq!(flow.state().incorrect_count, 1);
    flow.handle_timer(transition.timer.unwrap());

    // 第二回合：双项全对，计分器不被回合切换清零
    flow.submit_name("hydrogen");
    let transition = flow.select_cell(1);
    flow.handle_timer(transition.timer.unwrap());
    assert_eq!(flow.state().correct_count, 1);
    assert_eq!(flow.state().incorrect_count, 1);
}

#[test]
fn excluded_cells_stay_inert_through_a_session() {
    let mut flow = flow_keeping(&[1, 6]);
    advance_until(&mut flow, 6);

    // 被排除的格子（如 #39 钇）点击无效，计分与阶段都不变
    assert_eq!(flow.select_cell(39).outcome, RoundOutcome::Ignored);
    assert_eq!(flow.select_cell(89).outcome, RoundOutcome::Ignored);
    assert_eq!(flow.state().correct_count, 0);
    assert_eq!(flow.state().incorrect_count, 0);
    assert_eq!(flow.state().phase, Phase::AwaitingInput);
    assert_eq!(flow.state().revealed, None);
}

#[test]
fn stale_timer_cannot_touch_a_newer_round() {
    let mut flow = flow_keeping(&[1, 6, 8]);
    flow.start_round();

    let transition = flow.submit_name("definitely wrong");
    let stale = transition.timer.unwrap();

    // 新回合先开始，旧回合的定时器之后才到期
    flow.start_round();
    let current = flow.state().current;
    let generation = flow.generation();

    assert!(flow.handle_timer(stale).is_none());
    assert_eq!(flow.state().current, current);
    assert_eq!(flow.generation(), generation);
    assert_eq!(flow.state().phase, Phase::AwaitingInput);
}

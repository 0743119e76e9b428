//! 测验会话 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责会话生命周期与资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：建日志文件、加载目录、构建回合流程
//! 2. **事件循环**：用 `tokio::select!` 复用标准输入命令与揭示定时器
//! 3. **定时调度**：流程层只产出 [`TimerRequest`]，真正的休眠在这里执行，
//!    新请求直接顶替旧请求，配合流程层的代数校验保证过期回调无效
//! 4. **错题记录**：每次答错委托 `ReviewWriter` 追加一行
//! 5. **会话统计**：退出时输出统计块并导出 JSON
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一持有终端输入与回顾文件写入器的模块
//! - **向下委托**：所有计分判断都在 workflow 层，这里只做调度

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::presentation::command::{self, Command};
use crate::presentation::table_view;
use crate::services::element_catalog::ElementCatalog;
use crate::services::review_writer::ReviewWriter;
use crate::utils::logging;
use crate::workflow::round_flow::{RoundFlow, RoundOutcome, TimerRequest, Transition};

/// 会话统计
#[derive(Debug, Serialize)]
pub struct SessionStats {
    /// 已开始的回合数
    pub rounds_started: u64,
    /// 答对次数
    pub correct: u32,
    /// 答错次数
    pub incorrect: u32,
    /// 会话结束时间
    pub finished_at: String,
}

/// 应用主结构
pub struct App {
    config: Config,
    catalog: Arc<ElementCatalog>,
    flow: RoundFlow,
    review_writer: ReviewWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(&config);

        // 加载目录并推导题库
        let catalog = Arc::new(ElementCatalog::load()?);
        info!("✓ 周期表目录加载完成: {} 个元素", catalog.all().len());

        let flow = RoundFlow::new(catalog.clone(), &config)?;
        info!("📋 题库共 {} 个可提问元素", flow.pool_len());

        let review_writer = ReviewWriter::with_path(config.review_file.clone());

        Ok(Self {
            config,
            catalog,
            flow,
            review_writer,
        })
    }

    /// 运行会话主循环
    ///
    /// 读到 EOF 或 `quit` 命令时结束；结束后输出统计并导出 JSON
    pub async fn run(&mut self) -> Result<()> {
        self.flow.start_round();

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        // 至多一个待触发的揭示定时器；新回合的请求直接顶替旧请求
        let mut pending: Option<(Instant, TimerRequest)> = None;

        table_view::print_help();
        self.render();

        loop {
            let deadline = pending
                .map(|(at, _)| at)
                .unwrap_or_else(|| Instant::now() + Duration::from_secs(86400));

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("输入流结束，会话退出");
                        break;
                    };
                    if self.config.verbose_logging {
                        info!("收到输入: {}", line);
                    }
                    match command::parse(&line) {
                        Command::Quit => break,
                        Command::Help => {
                            table_view::print_help();
                            continue;
                        }
                        Command::Name(text) => {
                            let transition = self.flow.submit_name(&text);
                            self.settle(transition, &mut pending, &text).await;
                        }
                        Command::Cell(target) => {
                            match self.resolve_cell(&target) {
                                // 禁用格子不可点击，提示后不进入流程
                                Some(atomic_number) if !self.flow.is_cell_enabled(atomic_number) => {
                                    println!("⚠️ Cell #{} is disabled.", atomic_number);
                                }
                                Some(atomic_number) => {
                                    let transition = self.flow.select_cell(atomic_number);
                                    self.settle(transition, &mut pending, &target).await;
                                }
                                None => println!("⚠️ Unknown cell: {}", target),
                            }
                        }
                        Command::Empty => continue,
                    }
                    self.render();
                }
                _ = tokio::time::sleep_until(deadline), if pending.is_some() => {
                    if let Some((_, request)) = pending.take() {
                        if let Some(next) = self.flow.handle_timer(request) {
                            pending = Some((Instant::now() + next.delay, next));
                        }
                    }
                    self.render();
                }
            }
        }

        let stats = self.final_stats();
        logging::print_final_stats(&stats, &self.config);
        self.export_stats(&stats)?;

        Ok(())
    }

    /// 处理一次操作的后续：记录错题、调度定时器
    async fn settle(
        &mut self,
        transition: Transition,
        pending: &mut Option<(Instant, TimerRequest)>,
        user_input: &str,
    ) {
        let detail = match transition.outcome {
            RoundOutcome::NameWrong => Some(format!("wrong name: \"{}\"", user_input)),
            RoundOutcome::CellWrong => Some(format!("wrong cell: {}", user_input)),
            RoundOutcome::CellCorrectNameWrong => Some("cell correct, name not confirmed".to_string()),
            _ => None,
        };
        if let Some(detail) = detail {
            if let Some(element) = self.flow.current_element().cloned() {
                if let Err(e) = self.review_writer.write(&element, &detail).await {
                    warn!("⚠️ 写入回顾文件失败: {}", e);
                }
            }
        }

        if let Some(request) = transition.timer {
            *pending = Some((Instant::now() + request.delay, request));
        }
    }

    /// 把 cell 命令的目标解析为原子序数（数字或元素符号）
    fn resolve_cell(&self, target: &str) -> Option<u8> {
        if let Ok(n) = target.parse::<u8>() {
            return self.catalog.get(n).map(|e| e.atomic_number);
        }
        self.catalog.lookup_by_symbol(target).map(|e| e.atomic_number)
    }

    fn render(&self) {
        table_view::render(
            &self.catalog,
            &self.config.excluded_ranges,
            self.flow.state(),
        );
    }

    fn final_stats(&self) -> SessionStats {
        let state = self.flow.state();
        SessionStats {
            rounds_started: self.flow.generation(),
            correct: state.correct_count,
            incorrect: state.incorrect_count,
            finished_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// 导出会话统计 JSON
    fn export_stats(&self, stats: &SessionStats) -> Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        std::fs::write(&self.config.stats_file, json)
            .map_err(|e| AppError::file_write_failed(self.config.stats_file.clone(), e))?;
        info!("📊 统计已导出至: {}", self.config.stats_file);
        Ok(())
    }
}

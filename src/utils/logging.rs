//! 日志工具模块
//!
//! 提供订阅器初始化与统计输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;

use crate::config::Config;
use crate::orchestrator::quiz_session::SessionStats;

/// 初始化 tracing 订阅器
///
/// 日志级别由 `RUST_LOG` 控制，默认 info
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n周期表测验日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录会话启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 周期表测验模式");
    info!("📊 排除区间: {:?}", config.excluded_ranges);
    info!(
        "⏱️ 揭示时长: {}ms / {}ms+{}ms",
        config.resolve_delay_ms, config.wrong_cell_delay_ms, config.correct_cell_delay_ms
    );
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &SessionStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 会话结束统计");
    info!("完成时间: {}", stats.finished_at);
    info!("{}", "=".repeat(60));
    info!("✅ 答对: {}", stats.correct);
    info!("❌ 答错: {}", stats.incorrect);
    info!("🎯 共开始 {} 个回合", stats.rounds_started);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

use crate::error::{AppError, AppResult};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 不参与提问的原子序数闭区间（对应格子在表上禁用）
    pub excluded_ranges: Vec<(u8, u8)>,
    /// 答错后揭示结果的时长（毫秒）
    pub resolve_delay_ms: u64,
    /// 点错格子时，错误格子的揭示时长（毫秒）
    pub wrong_cell_delay_ms: u64,
    /// 点错格子时，随后正确格子的揭示时长（毫秒）
    pub correct_cell_delay_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 错题回顾文件
    pub review_file: String,
    /// 会话统计导出文件
    pub stats_file: String,
    /// 随机种子（固定后出题顺序可复现）
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_ranges: vec![(39, 45), (57, 77), (89, 118)],
            resolve_delay_ms: 2000,
            wrong_cell_delay_ms: 1500,
            correct_cell_delay_ms: 1500,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            review_file: "review.txt".to_string(),
            stats_file: "session_stats.json".to_string(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 标量变量解析失败时回退到默认值；`EXCLUDED_RANGES` 与 `RNG_SEED`
    /// 格式错误会直接报错，避免悄悄改变题库范围
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();

        let excluded_ranges = match std::env::var("EXCLUDED_RANGES") {
            Ok(v) => parse_ranges(&v)?,
            Err(_) => default.excluded_ranges.clone(),
        };
        let rng_seed = match std::env::var("RNG_SEED") {
            Ok(v) => Some(
                v.parse()
                    .map_err(|_| AppError::env_var_parse_failed("RNG_SEED", &v, "u64"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            excluded_ranges,
            resolve_delay_ms: std::env::var("RESOLVE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.resolve_delay_ms),
            wrong_cell_delay_ms: std::env::var("WRONG_CELL_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.wrong_cell_delay_ms),
            correct_cell_delay_ms: std::env::var("CORRECT_CELL_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.correct_cell_delay_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            review_file: std::env::var("REVIEW_FILE").unwrap_or(default.review_file),
            stats_file: std::env::var("STATS_FILE").unwrap_or(default.stats_file),
            rng_seed,
        })
    }
}

/// 解析 "39-45,57-77,89-118" 形式的区间列表
fn parse_ranges(spec: &str) -> AppResult<Vec<(u8, u8)>> {
    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let parse_err = || AppError::env_var_parse_failed("EXCLUDED_RANGES", part, "low-high");
        let (low, high) = part.split_once('-').ok_or_else(|| parse_err())?;
        let low: u8 = low.trim().parse().map_err(|_| parse_err())?;
        let high: u8 = high.trim().parse().map_err(|_| parse_err())?;
        if low > high {
            return Err(parse_err());
        }
        ranges.push((low, high));
    }
    Ok(ranges)
}

//! 周期表渲染 - 呈现层
//!
//! 把回合状态渲染成文本网格：18 列主表在上，镧系/锕系单独两行在下，
//! 主表第 6/7 周期第 3 族的位置放占位标记。格子默认只显示原子序数；
//! 被揭示的格子显示符号与对错标记，禁用格子用括号表示

use crate::models::element::Element;
use crate::models::feedback::Severity;
use crate::services::element_catalog::ElementCatalog;
use crate::workflow::round_state::{Phase, RevealPolarity, RoundState};

/// 网格行数：主表 7 行 + 镧系 1 行 + 锕系 1 行
const GRID_ROWS: usize = 9;
const GRID_COLS: usize = 18;
const LANTHANIDE_ROW: usize = 7;
const ACTINIDE_ROW: usize = 8;

/// 元素在文本网格中的位置（行、列，均从 0 起）
fn grid_position(element: &Element) -> (usize, usize) {
    match element.atomic_number {
        57..=71 => (LANTHANIDE_ROW, (element.atomic_number - 57 + 3) as usize),
        89..=103 => (ACTINIDE_ROW, (element.atomic_number - 89 + 3) as usize),
        _ => ((element.period - 1) as usize, (element.group - 1) as usize),
    }
}

/// 单个格子的渲染形式（宽度 5）
fn render_cell(element: &Element, excluded_ranges: &[(u8, u8)], state: &RoundState) -> String {
    let n = element.atomic_number;

    if state.revealed == Some(n) {
        let mark = match state.polarity {
            RevealPolarity::Correct => '✓',
            RevealPolarity::Incorrect => '✗',
            RevealPolarity::None => ' ',
        };
        return format!("[{:>2}{}]", element.symbol, mark);
    }
    // 名称确认后给正确格子一个待点击提示
    if state.phase == Phase::NameConfirmed && state.current == Some(n) {
        return format!("<{:>3}>", n);
    }
    if ElementCatalog::is_excluded(n, excluded_ranges) {
        return format!("({:>3})", n);
    }
    format!("{:>5}", n)
}

fn placeholder(row: usize, col: usize) -> String {
    match (row, col) {
        (5, 2) => "La-Lu".to_string(),
        (6, 2) => "Ac-Lr".to_string(),
        _ => "     ".to_string(),
    }
}

fn severity_mark(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "💡",
        Severity::Success => "✅",
        Severity::Error => "❌",
    }
}

/// 渲染整个界面：计分板、当前问题、最近消息与周期表网格
pub fn render(catalog: &ElementCatalog, excluded_ranges: &[(u8, u8)], state: &RoundState) {
    let mut grid: Vec<Vec<Option<&Element>>> = vec![vec![None; GRID_COLS]; GRID_ROWS];
    for element in catalog.all() {
        let (row, col) = grid_position(element);
        grid[row][col] = Some(element);
    }

    let rule = "=".repeat(GRID_COLS * 6 + 3);
    println!();
    println!("{}", rule);
    println!(
        " ✅ Correct: {}    ❌ Incorrect: {}",
        state.correct_count, state.incorrect_count
    );
    if let Some(element) = state.current.and_then(|n| catalog.get(n)) {
        println!(
            " ❓ What is the name of this element?  Symbol: {}",
            element.symbol
        );
    }
    if let Some(message) = &state.message {
        println!(" {} {}", severity_mark(message.severity), message.text);
    }
    println!("{}", rule);

    let header: String = (1..=GRID_COLS).map(|g| format!("{:>5} ", g)).collect();
    println!("   {}", header.trim_end());

    for (row_index, row) in grid.iter().enumerate() {
        if row_index == LANTHANIDE_ROW {
            println!();
        }
        let label = if row_index < LANTHANIDE_ROW {
            format!("{:>2} ", row_index + 1)
        } else {
            "   ".to_string()
        };
        let mut line = String::new();
        for (col_index, slot) in row.iter().enumerate() {
            let cell = match slot {
                Some(element) => render_cell(element, excluded_ranges, state),
                None => placeholder(row_index, col_index),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        println!("{}{}", label, line.trim_end());
    }
    println!();
}

/// 打印命令帮助
pub fn print_help() {
    println!("Commands:");
    println!("  name <text>      submit a name guess (bare text works too)");
    println!("  cell <n|symbol>  click a cell, e.g. `cell 8` or `cell Fe`");
    println!("  <digits>         bare digits also click a cell");
    println!("  help             show this help");
    println!("  quit             end the session");
    println!("Cells rendered as (..) are disabled and never asked.");
}

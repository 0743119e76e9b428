//! 终端命令解析 - 呈现层
//!
//! 语法：
//! - `name <文本>` 提交名称猜测
//! - `cell <原子序数|符号>` 点击格子
//! - `help` / `quit`
//! - 纯数字按点击格子处理，其余裸文本按名称猜测处理

use regex::Regex;

/// 用户输入的一条命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 提交名称猜测
    Name(String),
    /// 点击格子（原子序数或元素符号）
    Cell(String),
    /// 显示帮助
    Help,
    /// 结束会话
    Quit,
    /// 空行
    Empty,
}

/// 解析一行终端输入
pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Command::Quit,
        "help" | "h" | "?" => return Command::Help,
        _ => {}
    }

    if let Ok(re) = Regex::new(r"(?i)^cell\s+(\S+)$") {
        if let Some(caps) = re.captures(trimmed) {
            return Command::Cell(caps[1].to_string());
        }
    }
    if let Ok(re) = Regex::new(r"(?i)^name\s+(.+)$") {
        if let Some(caps) = re.captures(trimmed) {
            return Command::Name(caps[1].trim().to_string());
        }
    }

    // 裸数字视为点格子，其余视为名称猜测
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Command::Cell(trimmed.to_string());
    }
    Command::Name(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_commands() {
        assert_eq!(parse("name lithium"), Command::Name("lithium".to_string()));
        assert_eq!(parse("NAME  Tin "), Command::Name("Tin".to_string()));
        assert_eq!(parse("cell 12"), Command::Cell("12".to_string()));
        assert_eq!(parse("Cell Fe"), Command::Cell("Fe".to_string()));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse(" Q "), Command::Quit);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("   "), Command::Empty);
    }

    #[test]
    fn bare_digits_are_cell_clicks() {
        assert_eq!(parse("8"), Command::Cell("8".to_string()));
        assert_eq!(parse("118"), Command::Cell("118".to_string()));
    }

    #[test]
    fn bare_text_is_a_name_guess() {
        assert_eq!(parse("oxygen"), Command::Name("oxygen".to_string()));
        // 裸 "cell"（缺参数）没有命令含义，按名称猜测落空
        assert_eq!(parse("cell"), Command::Name("cell".to_string()));
    }
}

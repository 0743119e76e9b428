//! 名称匹配服务 - 业务能力层
//!
//! 负责把用户输入与元素名称在归一化后进行比较；
//! 空字符串也照常比较，不做输入合法性拒绝

use unicode_normalization::UnicodeNormalization;

/// 组合变音符区间（Combining Diacritical Marks）
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// 归一化：小写、去首尾空白、NFD 分解并去掉组合变音符
///
/// 幂等：`normalize(normalize(s)) == normalize(s)`
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// 判断用户输入是否与元素名称匹配
pub fn matches(guess: &str, name: &str) -> bool {
    normalize(guess) == normalize(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Lithium", "  CÉSIUM  ", "oganesson", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(normalize("Lithium"), normalize("lithium "));
        assert_eq!(normalize("Lithium"), normalize("LITHIUM"));
        assert_eq!(normalize("  Tin"), "tin");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize("Césium"), "cesium");
        // 预组合字符与显式组合符归一化到同一结果
        assert_eq!(normalize("Ce\u{0301}sium"), "cesium");
    }

    #[test]
    fn matches_compares_normalized_forms() {
        assert!(matches("hydrogen", "Hydrogen"));
        assert!(matches(" HYDROGEN ", "Hydrogen"));
        assert!(!matches("oxigen", "Oxygen"));
        assert!(!matches("", "Oxygen"));
        assert!(matches("", ""));
    }
}

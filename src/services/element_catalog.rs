//! 元素目录服务 - 业务能力层
//!
//! 持有整张周期表，只暴露只读查询能力：
//! - 全量有序遍历
//! - 按原子序数 / 符号查找
//! - 按排除区间过滤出题库
//!
//! 纯数据加纯函数，没有任何可变状态

use crate::error::{AppError, AppResult};
use crate::models::element::Element;
use crate::models::loaders::load_periodic_table;

/// 元素目录
///
/// 进程启动时加载一次，此后只读
pub struct ElementCatalog {
    elements: Vec<Element>,
}

impl ElementCatalog {
    /// 加载内嵌周期表数据并完成不变量校验
    pub fn load() -> AppResult<Self> {
        Ok(Self {
            elements: load_periodic_table()?,
        })
    }

    /// 全部 118 个元素，按原子序数升序
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// 按原子序数查找
    ///
    /// 超出 1-118 视为调用方违反契约，返回 `NotFound`
    pub fn lookup(&self, atomic_number: u8) -> AppResult<&Element> {
        self.get(atomic_number)
            .ok_or_else(|| AppError::catalog_not_found(atomic_number))
    }

    /// 按原子序数查找，不存在时返回 None
    pub fn get(&self, atomic_number: u8) -> Option<&Element> {
        if atomic_number == 0 {
            return None;
        }
        self.elements.get(atomic_number as usize - 1)
    }

    /// 按元素符号查找（忽略大小写，如 "Fe" / "fe"）
    pub fn lookup_by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    /// 题库：排除给定闭区间后剩余的元素，保持原顺序
    pub fn quiz_pool(&self, excluded_ranges: &[(u8, u8)]) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| !Self::is_excluded(e.atomic_number, excluded_ranges))
            .collect()
    }

    /// 判断原子序数是否落在任一排除区间内
    pub fn is_excluded(atomic_number: u8, excluded_ranges: &[(u8, u8)]) -> bool {
        excluded_ranges
            .iter()
            .any(|&(low, high)| atomic_number >= low && atomic_number <= high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn lookup_within_catalog() {
        let catalog = ElementCatalog::load().unwrap();
        let iron = catalog.lookup(26).unwrap();
        assert_eq!(iron.symbol, "Fe");
        assert_eq!(iron.name, "Iron");
    }

    #[test]
    fn lookup_outside_catalog_is_not_found() {
        let catalog = ElementCatalog::load().unwrap();
        assert!(catalog.lookup(0).is_err());
        assert!(catalog.lookup(119).is_err());
        assert!(catalog.lookup(200).is_err());
    }

    #[test]
    fn lookup_by_symbol_ignores_ascii_case() {
        let catalog = ElementCatalog::load().unwrap();
        assert_eq!(catalog.lookup_by_symbol("Fe").unwrap().atomic_number, 26);
        assert_eq!(catalog.lookup_by_symbol("fe").unwrap().atomic_number, 26);
        assert!(catalog.lookup_by_symbol("Zz").is_none());
    }

    #[test]
    fn default_quiz_pool_has_sixty_elements() {
        let catalog = ElementCatalog::load().unwrap();
        let pool = catalog.quiz_pool(&Config::default().excluded_ranges);
        assert_eq!(pool.len(), 60);
    }

    #[test]
    fn quiz_pool_respects_inclusive_boundaries() {
        let catalog = ElementCatalog::load().unwrap();
        let ranges = Config::default().excluded_ranges;
        let pool = catalog.quiz_pool(&ranges);
        let contains = |n: u8| pool.iter().any(|e| e.atomic_number == n);

        assert!(contains(38));
        assert!(!contains(39));
        assert!(!contains(45));
        assert!(contains(46));
        assert!(contains(56));
        assert!(!contains(57));
        assert!(!contains(77));
        assert!(contains(78));
        assert!(contains(88));
        assert!(!contains(89));
        assert!(!contains(118));
    }

    #[test]
    fn quiz_pool_preserves_catalog_order() {
        let catalog = ElementCatalog::load().unwrap();
        let pool = catalog.quiz_pool(&[(2, 117)]);
        let numbers: Vec<u8> = pool.iter().map(|e| e.atomic_number).collect();
        assert_eq!(numbers, vec![1, 118]);
    }

    #[test]
    fn empty_ranges_exclude_nothing() {
        let catalog = ElementCatalog::load().unwrap();
        assert_eq!(catalog.quiz_pool(&[]).len(), 118);
        assert!(!ElementCatalog::is_excluded(50, &[]));
    }
}

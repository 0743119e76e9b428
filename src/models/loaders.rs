//! 数据加载器
//!
//! 周期表数据内嵌在 `periodic_table.toml` 中，进程启动时解析并校验一次，
//! 之后只读

use serde::Deserialize;

use crate::error::{AppResult, CatalogError};
use crate::models::element::Element;

/// 内嵌的周期表数据文件
const PERIODIC_TABLE_TOML: &str = include_str!("periodic_table.toml");

/// 目录应有的条目数量
const ELEMENT_COUNT: usize = 118;

#[derive(Debug, Deserialize)]
struct ElementFile {
    elements: Vec<Element>,
}

/// 解析并校验内嵌的周期表数据
///
/// 校验目录不变量：恰好 118 条、原子序数无缝覆盖 1..=118（亦即升序）、
/// 符号与名称唯一。任何违反都是启动期致命错误
pub fn load_periodic_table() -> AppResult<Vec<Element>> {
    let file: ElementFile = toml::from_str(PERIODIC_TABLE_TOML)?;
    validate(&file.elements)?;
    Ok(file.elements)
}

fn validate(elements: &[Element]) -> Result<(), CatalogError> {
    if elements.len() != ELEMENT_COUNT {
        return Err(CatalogError::WrongEntryCount {
            expected: ELEMENT_COUNT,
            actual: elements.len(),
        });
    }

    for (i, element) in elements.iter().enumerate() {
        let expected = (i + 1) as u8;
        if element.atomic_number != expected {
            return Err(CatalogError::AtomicNumberGap {
                position: i,
                expected,
                actual: element.atomic_number,
            });
        }
    }

    let mut symbols = std::collections::HashSet::new();
    let mut names = std::collections::HashSet::new();
    for element in elements {
        if !symbols.insert(element.symbol.as_str()) {
            return Err(CatalogError::DuplicateSymbol {
                symbol: element.symbol.clone(),
            });
        }
        if !names.insert(element.name.to_lowercase()) {
            return Err(CatalogError::DuplicateName {
                name: element.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::Category;

    #[test]
    fn embedded_table_loads_and_validates() {
        let elements = load_periodic_table().unwrap();
        assert_eq!(elements.len(), 118);
    }

    #[test]
    fn atomic_numbers_cover_one_to_118_without_gaps() {
        let elements = load_periodic_table().unwrap();
        for (i, element) in elements.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1);
        }
    }

    #[test]
    fn spot_check_known_entries() {
        let elements = load_periodic_table().unwrap();

        let carbon = &elements[5];
        assert_eq!(carbon.symbol, "C");
        assert_eq!(carbon.name, "Carbon");
        assert_eq!(carbon.group, 14);
        assert_eq!(carbon.period, 2);
        assert_eq!(carbon.category, Category::Nonmetal);

        let uranium = &elements[91];
        assert_eq!(uranium.symbol, "U");
        assert_eq!(uranium.category, Category::Actinide);

        let oganesson = &elements[117];
        assert_eq!(oganesson.symbol, "Og");
        assert_eq!(oganesson.period, 7);
        assert_eq!(oganesson.group, 18);
    }

    #[test]
    fn validate_rejects_gaps_and_duplicates() {
        let mut elements = load_periodic_table().unwrap();
        elements[9].atomic_number = 99;
        assert!(matches!(
            validate(&elements),
            Err(CatalogError::AtomicNumberGap { position: 9, .. })
        ));

        let mut elements = load_periodic_table().unwrap();
        elements.truncate(100);
        assert!(matches!(
            validate(&elements),
            Err(CatalogError::WrongEntryCount { actual: 100, .. })
        ));
    }
}

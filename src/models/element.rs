//! 元素数据模型
//!
//! 周期表中单个元素的静态描述，以及元素分类枚举

use serde::{Deserialize, Serialize};

/// 元素分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// 碱金属
    AlkaliMetal,
    /// 碱土金属
    AlkalineEarthMetal,
    /// 过渡金属
    TransitionMetal,
    /// 后过渡金属
    PostTransitionMetal,
    /// 类金属
    Metalloid,
    /// 非金属
    Nonmetal,
    /// 卤素
    Halogen,
    /// 稀有气体
    NobleGas,
    /// 镧系
    Lanthanide,
    /// 锕系
    Actinide,
    /// 性质未知
    UnknownProperties,
}

impl Category {
    /// 获取标准名称（kebab-case，与数据文件一致）
    pub fn name(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali-metal",
            Category::AlkalineEarthMetal => "alkaline-earth-metal",
            Category::TransitionMetal => "transition-metal",
            Category::PostTransitionMetal => "post-transition-metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble-gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
            Category::UnknownProperties => "unknown-properties",
        }
    }

    /// 尝试从字符串解析分类（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alkali-metal" => Some(Category::AlkaliMetal),
            "alkaline-earth-metal" => Some(Category::AlkalineEarthMetal),
            "transition-metal" => Some(Category::TransitionMetal),
            "post-transition-metal" => Some(Category::PostTransitionMetal),
            "metalloid" => Some(Category::Metalloid),
            "nonmetal" => Some(Category::Nonmetal),
            "halogen" => Some(Category::Halogen),
            "noble-gas" => Some(Category::NobleGas),
            "lanthanide" => Some(Category::Lanthanide),
            "actinide" => Some(Category::Actinide),
            "unknown-properties" => Some(Category::UnknownProperties),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 周期表元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// 原子序数（1-118，唯一键）
    pub atomic_number: u8,
    /// 元素符号
    pub symbol: String,
    /// 英文名称
    pub name: String,
    /// 族（1-18；镧系/锕系在 6-7 周期记作第 3 族）
    pub group: u8,
    /// 周期（1-7）
    pub period: u8,
    /// 分类
    pub category: Category,
}

impl Element {
    /// 是否属于 f 区（镧系 57-71 / 锕系 89-103），渲染时单独成行
    pub fn is_f_block(&self) -> bool {
        matches!(self.atomic_number, 57..=71 | 89..=103)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, #{})", self.name, self.symbol, self.atomic_number)
    }
}

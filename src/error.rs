use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 元素目录错误
    Catalog(CatalogError),
    /// 配置错误
    Config(ConfigError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Catalog(e) => write!(f, "目录错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Catalog(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 元素目录错误
///
/// `NotFound` 对应调用方违反契约：所有合法输入都来自目录自身或
/// 界限在 1-118 内的格子标识，正常运行中不应出现
#[derive(Debug)]
pub enum CatalogError {
    /// 原子序数不在 1-118 范围内
    NotFound { atomic_number: u8 },
    /// 目录条目数量错误
    WrongEntryCount { expected: usize, actual: usize },
    /// 原子序数不连续或乱序
    AtomicNumberGap {
        position: usize,
        expected: u8,
        actual: u8,
    },
    /// 元素符号重复
    DuplicateSymbol { symbol: String },
    /// 元素名称重复（忽略大小写）
    DuplicateName { name: String },
    /// 题库为空（排除区间覆盖了全部元素）
    EmptyQuizPool,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { atomic_number } => {
                write!(f, "原子序数 {} 不在目录范围 1-118 内", atomic_number)
            }
            CatalogError::WrongEntryCount { expected, actual } => {
                write!(f, "目录条目数量错误: 期望 {}，实际 {}", expected, actual)
            }
            CatalogError::AtomicNumberGap {
                position,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "目录第 {} 条原子序数错误: 期望 {}，实际 {}",
                    position, expected, actual
                )
            }
            CatalogError::DuplicateSymbol { symbol } => {
                write!(f, "元素符号重复: {}", symbol)
            }
            CatalogError::DuplicateName { name } => {
                write!(f, "元素名称重复: {}", name)
            }
            CatalogError::EmptyQuizPool => {
                write!(f, "题库为空: 排除区间覆盖了全部元素")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { source } => {
                write!(f, "TOML解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::WriteFailed { source, .. } | FileError::TomlParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::Catalog(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建目录越界错误
    pub fn catalog_not_found(atomic_number: u8) -> Self {
        AppError::Catalog(CatalogError::NotFound { atomic_number })
    }

    /// 创建环境变量解析错误
    pub fn env_var_parse_failed(
        var_name: impl Into<String>,
        value: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.into(),
            value: value.into(),
            expected_type: expected_type.into(),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

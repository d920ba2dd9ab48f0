//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_qaforum_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum QAForumError {
            $($variant(String),)*
        }

        impl QAForumError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(QAForumError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(QAForumError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(QAForumError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl QAForumError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        QAForumError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_qaforum_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    Conflict("E003", "Duplicate Resource"),
    Authorization("E004", "Authorization Error"),
    DatabaseConfig("E005", "Database Configuration Error"),
    DatabaseConnection("E006", "Database Connection Error"),
    DatabaseOperation("E007", "Database Operation Error"),
    Serialization("E008", "Serialization Error"),
}

impl QAForumError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for QAForumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for QAForumError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for QAForumError {
    fn from(err: sea_orm::DbErr) -> Self {
        QAForumError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for QAForumError {
    fn from(err: serde_json::Error) -> Self {
        QAForumError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QAForumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QAForumError::validation("test").code(), "E001");
        assert_eq!(QAForumError::not_found("test").code(), "E002");
        assert_eq!(QAForumError::conflict("test").code(), "E003");
        assert_eq!(QAForumError::authorization("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            QAForumError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            QAForumError::authorization("test").error_type(),
            "Authorization Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = QAForumError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = QAForumError::not_found("Question 42 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Question 42 not found"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: QAForumError = parse_err.into();
        assert_eq!(err.code(), "E008");
    }
}

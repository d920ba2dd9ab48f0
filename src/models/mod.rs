pub mod courses;
pub mod notifications;
pub mod questions;
pub mod responses;
pub mod students;

/// 匿名发帖在所有读取路径上展示的名字
pub const ANONYMOUS_POSTER_NAME: &str = "Anonymous";

/// 发帖人已不存在时的兜底展示名
pub const UNKNOWN_POSTER_NAME: &str = "Unknown";

pub mod courses;
pub mod notifications;
pub mod policy;
pub mod questions;
pub mod responses;
pub mod students;

pub use courses::CourseService;
pub use notifications::NotificationService;
pub use questions::QuestionService;
pub use responses::ResponseService;
pub use students::StudentService;

use crate::models::students::entities::Student;
use crate::models::{ANONYMOUS_POSTER_NAME, UNKNOWN_POSTER_NAME};

/// 发帖人展示名
///
/// 匿名贴在所有读取路径上一律显示 Anonymous；
/// 发帖人记录已不存在时兜底为 Unknown。
pub(crate) fn poster_display_name(is_anonymous: bool, poster: Option<&Student>) -> String {
    if is_anonymous {
        ANONYMOUS_POSTER_NAME.to_string()
    } else {
        poster
            .map(Student::full_name)
            .unwrap_or_else(|| UNKNOWN_POSTER_NAME.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support;

//! 启动装配
//!
//! 本 crate 不包含任何传输层：宿主（HTTP 服务等）完成身份认证后，
//! 持有这里装配好的各个服务并以 acting_student_id 调用它们。

use std::sync::Arc;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::services::{
    CourseService, NotificationService, QuestionService, ResponseService, StudentService,
};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub students: StudentService,
    pub courses: CourseService,
    pub questions: QuestionService,
    pub responses: ResponseService,
    pub notifications: NotificationService,
}

impl StartupContext {
    /// 基于给定存储装配全部服务
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            students: StudentService::new(storage.clone()),
            courses: CourseService::new(storage.clone()),
            questions: QuestionService::new(storage.clone()),
            responses: ResponseService::new(storage.clone()),
            notifications: NotificationService::new(storage.clone()),
            storage,
        }
    }
}

/// 初始化日志
///
/// 开发环境输出带文件名行号的彩色日志，生产环境输出 JSON。
/// 返回的 guard 在宿主存活期间必须持有，否则缓冲日志会丢失。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}

/// 准备启动上下文：初始化存储（含迁移）并装配服务
pub async fn prepare_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    StartupContext::new(storage)
}

#[cfg(test)]
mod tests {
    use super::StartupContext;
    use crate::models::questions::requests::CreateQuestionRequest;
    use crate::services::test_support::{seed_course, seed_student, test_storage};

    #[tokio::test]
    async fn test_context_wires_all_services_over_one_storage() {
        let storage = test_storage().await;
        let context = StartupContext::new(storage);

        let student = context
            .students
            .get_student(
                seed_student(&context.storage, "Jane", "Doe", "jane.doe@university.edu")
                    .await
                    .id,
            )
            .await
            .unwrap();
        let course = seed_course(&context.storage, "CS-3420").await;

        // 同一份存储在各服务间共享
        let question = context
            .questions
            .create_question(CreateQuestionRequest {
                course_id: course.id,
                poster_id: student.id,
                title: "Wired together".to_string(),
                content: "Created through one service, read through another store handle."
                    .to_string(),
                is_anonymous: false,
            })
            .await
            .unwrap();

        assert!(
            context
                .storage
                .get_question_by_id(question.id)
                .await
                .unwrap()
                .is_some()
        );
    }
}

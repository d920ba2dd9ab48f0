//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod notifications;
mod questions;
mod responses;
mod students;

use crate::config::AppConfig;
use crate::errors::{QAForumError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| QAForumError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| QAForumError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "on");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| QAForumError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| QAForumError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(QAForumError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 将唯一约束冲突映射为 Conflict，其余数据库错误保持原样
pub(crate) fn map_unique_violation(
    err: sea_orm::DbErr,
    conflict_message: &str,
    context: &str,
) -> QAForumError {
    let msg = err.to_string();
    if msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key")
        || msg.contains("Duplicate entry")
    {
        QAForumError::conflict(conflict_message.to_string())
    } else {
        QAForumError::database_operation(format!("{context}: {err}"))
    }
}

// Storage trait 实现
use std::collections::HashMap;

use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionSort, UpdateQuestionRequest},
        responses::CascadeDeleteResult,
    },
    responses::{
        entities::Response,
        requests::{CreateResponseRequest, ResponseSort, UpdateResponseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn get_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>> {
        self.get_students_by_ids_impl(ids).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_for_student(&self, student_id: i64) -> Result<Vec<Course>> {
        self.list_courses_for_student_impl(student_id).await
    }

    async fn count_recent_questions(
        &self,
        course_ids: &[i64],
        window_hours: u64,
    ) -> Result<HashMap<i64, u64>> {
        self.count_recent_questions_impl(course_ids, window_hours)
            .await
    }

    // 问题模块
    async fn create_question(&self, question: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(question).await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(question_id).await
    }

    async fn list_questions_for_course(
        &self,
        course_id: i64,
        sort: QuestionSort,
    ) -> Result<Vec<Question>> {
        self.list_questions_for_course_impl(course_id, sort).await
    }

    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(question_id, update).await
    }

    async fn delete_question_cascade(
        &self,
        question_id: i64,
    ) -> Result<Option<CascadeDeleteResult>> {
        self.delete_question_cascade_impl(question_id).await
    }

    // 回答模块
    async fn create_response(&self, response: CreateResponseRequest) -> Result<Response> {
        self.create_response_impl(response).await
    }

    async fn get_response_by_id(&self, response_id: i64) -> Result<Option<Response>> {
        self.get_response_by_id_impl(response_id).await
    }

    async fn list_responses_for_question(
        &self,
        question_id: i64,
        sort: ResponseSort,
    ) -> Result<Vec<Response>> {
        self.list_responses_for_question_impl(question_id, sort)
            .await
    }

    async fn update_response(
        &self,
        response_id: i64,
        update: UpdateResponseRequest,
    ) -> Result<Option<Response>> {
        self.update_response_impl(response_id, update).await
    }

    async fn delete_response(&self, response_id: i64) -> Result<bool> {
        self.delete_response_impl(response_id).await
    }

    async fn delete_responses_by_question(&self, question_id: i64) -> Result<u64> {
        self.delete_responses_by_question_impl(question_id).await
    }

    // 通知模块
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn get_notification_by_id(&self, notification_id: i64) -> Result<Option<Notification>> {
        self.get_notification_by_id_impl(notification_id).await
    }

    async fn list_notifications_for_recipient(
        &self,
        recipient_id: i64,
        unread_only: bool,
    ) -> Result<Vec<Notification>> {
        self.list_notifications_for_recipient_impl(recipient_id, unread_only)
            .await
    }

    async fn mark_notification_read(&self, notification_id: i64) -> Result<Option<Notification>> {
        self.mark_notification_read_impl(notification_id).await
    }

    async fn mark_all_notifications_read(&self, recipient_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(recipient_id).await
    }

    async fn count_unread_notifications(&self, recipient_id: i64) -> Result<u64> {
        self.count_unread_notifications_impl(recipient_id).await
    }

    async fn delete_notifications_by_question(&self, question_id: i64) -> Result<u64> {
        self.delete_notifications_by_question_impl(question_id)
            .await
    }
}

#[cfg(test)]
pub(crate) mod test_harness {
    //! 测试用的内存 SQLite 存储
    //!
    //! 连接池上限为 1：内存库按连接隔离，多连接会各自拿到一个空库。

    use super::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    pub(crate) async fn open_test_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .expect("failed to open in-memory sqlite");

        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");

        SeaOrmStorage { db }
    }
}

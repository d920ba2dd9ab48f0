//! 所有权校验策略
//!
//! 存储层不感知请求者身份，所有归属判断集中在这里：
//! 服务层先取出实体，再用实体上的 poster_id 与请求者比对，
//! 绝不信任调用方自带的 "我是所有者" 声明。

use crate::errors::{QAForumError, Result};

/// 统一的所有权校验，任何变更操作都必须先通过这里
pub fn require_owner(acting_student_id: i64, owner_id: i64, resource: &'static str) -> Result<()> {
    if acting_student_id != owner_id {
        return Err(QAForumError::authorization(format!(
            "Student {acting_student_id} is not the poster of this {resource}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_passes() {
        assert!(require_owner(7, 7, "question").is_ok());
    }

    #[test]
    fn test_non_owner_rejected() {
        let err = require_owner(8, 7, "question").unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("question"));
    }
}

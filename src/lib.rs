//! QAForum - 课程问答论坛核心
//!
//! 面向课程的问答论坛数据一致性与鉴权层：问题、回答、通知的生命周期管理。
//! 传输层、凭据校验与页面渲染由宿主提供，不在本 crate 范围内。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 启动装配与日志初始化
//! - `services`: 业务逻辑层（鉴权、级联删除、通知扇出）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

//! # Quizify Client
//!
//! Quizify 答题服务的 Rust 客户端
//!
//! ## 架构设计
//!
//! 本系统采用分层架构，界面层可以被任意替换（终端、原生、Web）：
//!
//! ### ① 传输层（Transport）
//! - `clients/transport` - 唯一的 HTTP 出口，整个进程共享一个实例
//! - 非 2xx 状态码作为数据返回，只有连接失败才是错误
//!
//! ### ② 客户端层（Clients）
//! - `clients/catalog_client` - 已上传资源目录的查询能力
//! - `clients/upload_client` - PDF 上传与题目提取能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/quiz_session` - 一次答题的完整生命周期
//!   （Loading → Ready → Submitting → Completed，失败进入 Failed）
//! - `workflow/reconcile` - 判分结果与题目列表的按下标对齐
//!
//! ### ④ 应用层（App）
//! - `app` - 终端驱动：列资源 → 可选上传 → 答题 → 展示反馈
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{CatalogClient, HttpResponse, Transport, UploadClient, UploadOutcome};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, AnswerSheet, Question, QuestionResult, Resource, SubmitOutcome};
pub use workflow::{reconcile, QuestionFeedback, QuizSession, SessionState};

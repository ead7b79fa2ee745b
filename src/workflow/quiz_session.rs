//! 答题会话 - 流程层
//!
//! 核心职责：管理"一次答题"的完整生命周期
//!
//! 状态流转：
//! 1. Loading → open() 加载题目 → Ready
//! 2. Ready → set_answer() 记录作答（仅内存，无网络请求）
//! 3. Ready → submit() 提交答案 → Submitting → Completed
//! 4. 加载失败进入终态 Failed；提交失败回退到 Ready，可直接重试而无需重新加载

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::clients::Transport;
use crate::error::{AppError, AppResult, SessionError};
use crate::logger::truncate_text;
use crate::models::{Answer, AnswerSheet, Question, QuestionListResponse, SubmitOutcome};
use crate::workflow::reconcile::{reconcile, QuestionFeedback};

/// 会话状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// 题目尚未加载
    Loading,
    /// 题目已加载，可作答
    Ready,
    /// 答案提交中
    Submitting,
    /// 已收到判分结果
    Completed,
    /// 会话失败（终态）
    Failed { reason: String },
}

impl SessionState {
    /// 状态名称（用于错误信息）
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Loading => "Loading",
            SessionState::Ready => "Ready",
            SessionState::Submitting => "Submitting",
            SessionState::Completed => "Completed",
            SessionState::Failed { .. } => "Failed",
        }
    }
}

/// 答题会话
///
/// 每个会话独立持有自己的题目列表、作答状态和判分结果，
/// 随界面打开而创建、关闭而销毁，从不持久化。
/// 题目顺序从加载到提交保持不变，这是判分结果按下标对齐的前提
pub struct QuizSession {
    transport: Transport,
    file_name: String,
    state: SessionState,
    questions: Vec<Question>,
    answers: HashMap<i64, String>,
    outcome: Option<SubmitOutcome>,
}

impl QuizSession {
    /// 创建新的答题会话
    ///
    /// # 参数
    /// - `transport`: 共享的 HTTP 传输客户端
    /// - `file_name`: 资源文件名，决定加载哪份题目
    pub fn new(transport: Transport, file_name: impl Into<String>) -> Self {
        Self {
            transport,
            file_name: file_name.into(),
            state: SessionState::Loading,
            questions: Vec::new(),
            answers: HashMap::new(),
            outcome: None,
        }
    }

    /// 加载题目，Loading → Ready
    ///
    /// 调用 `GET /questions/{fileName}`。任何失败都使会话进入终态 Failed
    pub async fn open(&mut self) -> AppResult<&[Question]> {
        if self.state != SessionState::Loading {
            return Err(AppError::Session(SessionError::NotReady {
                operation: "open",
                state: self.state.name().to_string(),
            }));
        }

        info!("[{}] 🔍 正在加载题目...", self.file_name);

        let endpoint = format!("/questions/{}", self.file_name);
        match self.fetch_questions(&endpoint).await {
            Ok(questions) => {
                info!("[{}] ✓ 题目加载完成，共 {} 道", self.file_name, questions.len());
                for (i, question) in questions.iter().enumerate() {
                    debug!(
                        "[{}]   {}. {}",
                        self.file_name,
                        i + 1,
                        truncate_text(&question.question_text, 80)
                    );
                }
                self.questions = questions;
                self.state = SessionState::Ready;
                Ok(&self.questions)
            }
            Err(e) => {
                warn!("[{}] ❌ 题目加载失败: {}", self.file_name, e);
                self.state = SessionState::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// 记录一次作答，后写覆盖先写
    ///
    /// 仅在 Ready 状态下有效，无网络请求
    pub fn set_answer(&mut self, question_id: i64, choice: impl Into<String>) -> AppResult<()> {
        self.ensure_ready("set_answer")?;

        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(AppError::Session(SessionError::UnknownQuestion {
                question_id,
            }));
        }

        let choice = choice.into();
        debug!("[{}] 记录作答: 题目 {} → {}", self.file_name, question_id, choice);
        self.answers.insert(question_id, choice);
        Ok(())
    }

    /// 撤销一次作答，恢复为未作答
    pub fn clear_answer(&mut self, question_id: i64) -> AppResult<()> {
        self.ensure_ready("clear_answer")?;

        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(AppError::Session(SessionError::UnknownQuestion {
                question_id,
            }));
        }

        self.answers.remove(&question_id);
        Ok(())
    }

    /// 提交答案，Ready → Submitting → Completed
    ///
    /// 按题目加载顺序构建答案列表（未作答的题目提交 `null`），
    /// POST `/submit-answers`。失败时回退到 Ready，调用方可直接重试
    pub async fn submit(&mut self) -> AppResult<&SubmitOutcome> {
        self.ensure_ready("submit")?;

        let sheet = build_answer_sheet(&self.questions, &self.answers);

        info!(
            "[{}] 📤 正在提交答案 ({}/{} 道已作答)...",
            self.file_name,
            self.answers.len(),
            self.questions.len()
        );

        self.state = SessionState::Submitting;

        match self.send_answers(&sheet).await {
            Ok(outcome) => {
                info!(
                    "[{}] ✓ 判分完成: 得分 {}/{}",
                    self.file_name, outcome.score, outcome.total_questions
                );
                self.state = SessionState::Completed;
                Ok(self.outcome.insert(outcome))
            }
            Err(e) => {
                warn!("[{}] ⚠️ 提交失败，可重试: {}", self.file_name, e);
                self.state = SessionState::Ready;
                Err(e)
            }
        }
    }

    /// 当前会话状态
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 本会话对应的资源文件名
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 已加载的题目列表（加载顺序即显示顺序）
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 查询某道题当前记录的作答
    pub fn answer_for(&self, question_id: i64) -> Option<&str> {
        self.answers.get(&question_id).map(|s| s.as_str())
    }

    /// 已作答题目数量
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 判分结果（Completed 之后可用）
    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    /// 按题目顺序对齐后的逐题反馈
    ///
    /// Completed 之前返回空列表
    pub fn feedback(&self) -> Vec<QuestionFeedback> {
        match &self.outcome {
            Some(outcome) => reconcile(&self.questions, &outcome.results),
            None => Vec::new(),
        }
    }

    // ========== 内部辅助 ==========

    fn ensure_ready(&self, operation: &'static str) -> AppResult<()> {
        if self.state != SessionState::Ready {
            return Err(AppError::Session(SessionError::NotReady {
                operation,
                state: self.state.name().to_string(),
            }));
        }
        Ok(())
    }

    async fn fetch_questions(&self, endpoint: &str) -> AppResult<Vec<Question>> {
        let response = self.transport.get(endpoint).await?;
        parse_question_list(endpoint, response.status, &response.body)
    }

    async fn send_answers(&self, sheet: &AnswerSheet) -> AppResult<SubmitOutcome> {
        let endpoint = "/submit-answers";
        let response = self.transport.post_json(endpoint, sheet).await?;

        if !response.is_success() {
            return Err(AppError::bad_status(endpoint, response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| AppError::json_parse_failed(endpoint, e))
    }
}

/// 按题目加载顺序构建答案列表
///
/// 不论作答了多少题，答案数量恒等于题目数量，未作答的提交 `null`
fn build_answer_sheet(questions: &[Question], answers: &HashMap<i64, String>) -> AnswerSheet {
    let answers = questions
        .iter()
        .map(|q| Answer {
            question_id: q.id,
            answer: answers.get(&q.id).cloned(),
        })
        .collect();

    AnswerSheet { answers }
}

/// 解析题目列表响应
fn parse_question_list(endpoint: &str, status: u16, body: &str) -> AppResult<Vec<Question>> {
    if !(200..300).contains(&status) {
        return Err(AppError::bad_status(endpoint, status));
    }

    let parsed: QuestionListResponse =
        serde_json::from_str(body).map_err(|e| AppError::json_parse_failed(endpoint, e))?;

    Ok(parsed.questions)
}

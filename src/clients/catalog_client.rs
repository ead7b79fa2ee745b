/// 资源目录客户端
///
/// 封装已上传文档目录的查询能力
use crate::clients::Transport;
use crate::error::{AppError, AppResult};
use crate::models::{Question, QuestionListResponse, Resource, ResourceListResponse};
use tracing::debug;

/// 资源目录客户端
#[derive(Debug, Clone)]
pub struct CatalogClient {
    transport: Transport,
}

impl CatalogClient {
    /// 创建新的资源目录客户端
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// 获取已上传资源列表
    ///
    /// 调用 `GET /resources`。返回顺序即服务端顺序，客户端不做排序。
    /// 失败时调用方应保留原有列表，不做部分覆盖
    pub async fn list_resources(&self) -> AppResult<Vec<Resource>> {
        let endpoint = "/resources";
        let response = self.transport.get(endpoint).await?;

        if !response.is_success() {
            return Err(AppError::bad_status(endpoint, response.status));
        }

        let parsed: ResourceListResponse = serde_json::from_str(&response.body)
            .map_err(|e| AppError::json_parse_failed(endpoint, e))?;

        debug!("获取到 {} 个资源", parsed.questions.len());

        Ok(parsed.questions)
    }

    /// 获取全部已入库的题目（跨所有文件）
    ///
    /// 调用 `GET /questions`
    pub async fn list_all_questions(&self) -> AppResult<Vec<Question>> {
        let endpoint = "/questions";
        let response = self.transport.get(endpoint).await?;

        if !response.is_success() {
            return Err(AppError::bad_status(endpoint, response.status));
        }

        let parsed: QuestionListResponse = serde_json::from_str(&response.body)
            .map_err(|e| AppError::json_parse_failed(endpoint, e))?;

        debug!("获取到 {} 道题目", parsed.questions.len());

        Ok(parsed.questions)
    }
}

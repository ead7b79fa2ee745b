/// PDF 上传客户端
///
/// 负责把本地 PDF 打包成 multipart 请求发给后端做题目提取
use crate::clients::Transport;
use crate::error::{AppError, AppResult, FileError, UploadError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// 上传结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    /// 后端从 PDF 中提取出的题目数量
    pub questions_extracted: usize,
}

/// 上传响应体
///
/// 客户端只关心提取出的题目数量，数组元素不做结构化解析
/// （上传响应里的题目尚未入库，没有 id 字段）
#[derive(Debug, Deserialize)]
struct UploadResponse {
    questions: Vec<serde_json::Value>,
}

/// PDF 上传客户端
#[derive(Debug, Clone)]
pub struct UploadClient {
    transport: Transport,
}

impl UploadClient {
    /// 创建新的上传客户端
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// 上传本地 PDF 文件
    ///
    /// 文件名从路径中单独解析（文件句柄本身不携带显示名），
    /// 文件内容先整体读入内存再编码进 multipart 请求
    ///
    /// # 参数
    /// - `path`: 本地 PDF 文件路径
    ///
    /// # 返回
    /// 返回后端提取出的题目数量
    pub async fn upload_pdf(&self, path: &Path) -> AppResult<UploadOutcome> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| {
                AppError::File(FileError::NameUnresolvable {
                    path: path.display().to_string(),
                })
            })?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::Upload(UploadError::FilePreparationFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;

        debug!("已读取文件 {} ({} 字节)", file_name, bytes.len());

        self.upload_bytes(bytes, &file_name).await
    }

    /// 上传已就绪的文件内容
    ///
    /// # 参数
    /// - `bytes`: PDF 文件内容
    /// - `file_name`: 原始文件名，同时作为 `file-name` 请求头发送
    pub async fn upload_bytes(&self, bytes: Vec<u8>, file_name: &str) -> AppResult<UploadOutcome> {
        info!("📤 正在上传 {} ...", file_name);

        let response = self
            .transport
            .post_multipart(
                "/upload-pdf",
                "pdf",
                file_name,
                bytes,
                "application/pdf",
                &[("file-name", file_name)],
            )
            .await
            .map_err(|e| {
                AppError::Upload(UploadError::RequestFailed {
                    source: Box::new(e),
                })
            })?;

        if !response.is_success() {
            return Err(AppError::Upload(UploadError::BadStatus {
                status: response.status,
            }));
        }

        let questions_extracted = parse_question_count(&response.body).map_err(|e| {
            AppError::Upload(UploadError::ParseFailed {
                source: Box::new(e),
            })
        })?;

        info!("✓ 上传成功，提取出 {} 道题目", questions_extracted);

        Ok(UploadOutcome {
            questions_extracted,
        })
    }
}

/// 从上传响应体中解析题目数量
fn parse_question_count(body: &str) -> Result<usize, serde_json::Error> {
    let parsed: UploadResponse = serde_json::from_str(body)?;
    Ok(parsed.questions.len())
}

/// HTTP 传输层
///
/// 封装所有组件共用的 HTTP 请求能力。整个进程只创建一个 `Transport`，
/// 由各客户端和会话克隆持有（`reqwest::Client` 内部是引用计数的连接池）
use crate::config::Config;
use crate::error::{AppError, AppResult};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::debug;

/// HTTP 响应
///
/// 非 2xx 状态码不作为错误返回，由调用方自行检查 `status`
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 判断状态码是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 传输客户端
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    client: reqwest::Client,
}

impl Transport {
    /// 创建新的传输客户端
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.server_base_url.clone())
    }

    /// 使用指定服务地址创建传输客户端
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// 后端服务地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 发送 GET 请求
    pub async fn get(&self, path: &str) -> AppResult<HttpResponse> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(path, e))?;

        Self::read_response(path, response).await
    }

    /// 发送 JSON 请求体的 POST 请求
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> AppResult<HttpResponse> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::request_failed(path, e))?;

        Self::read_response(path, response).await
    }

    /// 发送 multipart/form-data 请求
    ///
    /// # 参数
    /// - `path`: 请求路径
    /// - `part_name`: 表单字段名
    /// - `file_name`: 上传文件名
    /// - `bytes`: 文件内容
    /// - `mime`: 文件 MIME 类型
    /// - `headers`: 附加请求头
    pub async fn post_multipart(
        &self,
        path: &str,
        part_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
        headers: &[(&str, &str)],
    ) -> AppResult<HttpResponse> {
        let url = self.url(path);
        debug!("POST {} (multipart, {} 字节)", url, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::Other(format!("非法的 MIME 类型 {}: {}", mime, e)))?;
        let form = Form::new().part(part_name.to_string(), part);

        let mut request = self.client.post(&url).multipart(form);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::request_failed(path, e))?;

        Self::read_response(path, response).await
    }

    /// 拼接完整 URL
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// 读取响应体
    async fn read_response(
        endpoint: &str,
        response: reqwest::Response,
    ) -> AppResult<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::body_read_failed(endpoint, e))?;

        debug!("响应状态码: {}, 响应体长度: {} 字节", status, body.len());

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let transport = Transport::with_base_url("http://127.0.0.1:3000/");
        assert_eq!(transport.url("/resources"), "http://127.0.0.1:3000/resources");
        assert_eq!(transport.url("resources"), "http://127.0.0.1:3000/resources");
    }

    #[test]
    fn test_http_response_is_success() {
        let ok = HttpResponse { status: 200, body: String::new() };
        let not_found = HttpResponse { status: 404, body: String::new() };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // 端口 1 上没有服务监听，连接会被拒绝
        let transport = Transport::with_base_url("http://127.0.0.1:1");
        let err = transport.get("/resources").await.unwrap_err();
        assert!(err.is_network(), "应返回网络错误，实际为: {}", err);
    }
}

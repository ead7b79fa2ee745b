use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 网络传输错误
    Network(NetworkError),
    /// HTTP 状态码错误
    Http(HttpError),
    /// 响应解析错误
    Parse(ParseError),
    /// 上传流程错误
    Upload(UploadError),
    /// 文件操作错误
    File(FileError),
    /// 答题会话错误
    Session(SessionError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "网络错误: {}", e),
            AppError::Http(e) => write!(f, "HTTP错误: {}", e),
            AppError::Parse(e) => write!(f, "解析错误: {}", e),
            AppError::Upload(e) => write!(f, "上传错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Session(e) => write!(f, "会话错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Http(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::Upload(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Session(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 网络传输错误
///
/// 仅表示连接层面的失败，非 2xx 状态码不属于此类
#[derive(Debug)]
pub enum NetworkError {
    /// 请求发送失败（连接失败、DNS 解析失败等）
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 读取响应体失败
    BodyReadFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::RequestFailed { endpoint, source } => {
                write!(f, "请求发送失败 ({}): {}", endpoint, source)
            }
            NetworkError::BodyReadFailed { endpoint, source } => {
                write!(f, "读取响应体失败 ({}): {}", endpoint, source)
            }
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetworkError::RequestFailed { source, .. }
            | NetworkError::BodyReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// HTTP 状态码错误
#[derive(Debug)]
pub enum HttpError {
    /// 服务器返回非 2xx 状态码
    BadStatus { endpoint: String, status: u16 },
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::BadStatus { endpoint, status } => {
                write!(f, "服务器返回错误状态码 ({}): {}", endpoint, status)
            }
        }
    }
}

impl std::error::Error for HttpError {}

/// 响应解析错误
#[derive(Debug)]
pub enum ParseError {
    /// JSON 解析失败（格式非法或缺少字段）
    JsonParseFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::JsonParseFailed { endpoint, source } => {
                write!(f, "JSON解析失败 ({}): {}", endpoint, source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::JsonParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 上传流程错误
///
/// 按阶段区分：准备文件、发送请求、状态码检查、解析响应
#[derive(Debug)]
pub enum UploadError {
    /// 读取本地文件失败
    FilePreparationFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 上传请求发送失败
    RequestFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务器返回非 2xx 状态码
    BadStatus { status: u16 },
    /// 解析上传响应失败
    ParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::FilePreparationFailed { path, source } => {
                write!(f, "准备上传文件失败 ({}): {}", path, source)
            }
            UploadError::RequestFailed { source } => {
                write!(f, "上传请求失败: {}", source)
            }
            UploadError::BadStatus { status } => {
                write!(f, "上传被服务器拒绝，状态码: {}", status)
            }
            UploadError::ParseFailed { source } => {
                write!(f, "解析上传响应失败: {}", source)
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UploadError::FilePreparationFailed { source, .. }
            | UploadError::RequestFailed { source }
            | UploadError::ParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            UploadError::BadStatus { .. } => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound { path: String },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 无法从路径解析出文件名
    NameUnresolvable { path: String },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::NameUnresolvable { path } => {
                write!(f, "无法从路径解析出文件名: {}", path)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 答题会话错误
#[derive(Debug)]
pub enum SessionError {
    /// 当前状态不允许该操作
    NotReady {
        operation: &'static str,
        state: String,
    },
    /// 题目 ID 不存在于本次会话
    UnknownQuestion { question_id: i64 },
    /// 会话已进入失败状态
    Failed { reason: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotReady { operation, state } => {
                write!(f, "当前状态 {} 不允许执行 {}", state, operation)
            }
            SessionError::UnknownQuestion { question_id } => {
                write!(f, "题目 ID {} 不存在于本次会话", question_id)
            }
            SessionError::Failed { reason } => {
                write!(f, "会话已失败: {}", reason)
            }
        }
    }
}

impl std::error::Error for SessionError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(ParseError::JsonParseFailed {
            endpoint: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建请求发送失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Network(NetworkError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建读取响应体失败错误
    pub fn body_read_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Network(NetworkError::BodyReadFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Http(HttpError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建 JSON 解析失败错误
    pub fn json_parse_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Parse(ParseError::JsonParseFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 判断是否为网络传输错误
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

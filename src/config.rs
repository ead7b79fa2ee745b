/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端服务地址
    pub server_base_url: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 待上传的 PDF 文件路径（可选）
    pub upload_pdf: Option<String>,
    /// 要答题的资源文件名（可选，默认取列表第一个）
    pub quiz_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_base_url: "http://127.0.0.1:3000".to_string(),
            verbose_logging: false,
            upload_pdf: None,
            quiz_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            server_base_url: std::env::var("SERVER_BASE_URL").unwrap_or(default.server_base_url),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            upload_pdf: std::env::var("UPLOAD_PDF").ok(),
            quiz_file: std::env::var("QUIZ_FILE").ok(),
        }
    }
}

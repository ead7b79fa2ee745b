use serde::{Deserialize, Serialize};

/// 已上传的资源
///
/// 对应资源列表接口返回的一行：文件名 + 已提取的题目数量
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    #[serde(rename = "fileName")]
    pub file_name: String,

    #[serde(rename = "questionCount")]
    pub question_count: u32,
}

/// GET /resources 响应体
///
/// 字段名沿用后端的 `questions`，实际内容是资源列表而非题目（后端命名如此）
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceListResponse {
    pub questions: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_list_preserves_server_order() {
        let body = r#"{
            "questions": [
                { "fileName": "b.pdf", "questionCount": 10 },
                { "fileName": "a.pdf", "questionCount": 3 },
                { "fileName": "c.pdf", "questionCount": 7 }
            ]
        }"#;

        let parsed: ResourceListResponse = serde_json::from_str(body).unwrap();

        // 客户端不排序，顺序即服务端返回顺序
        let names: Vec<&str> = parsed.questions.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_resource_list_missing_field_is_error() {
        let body = r#"{ "resources": [] }"#;
        assert!(serde_json::from_str::<ResourceListResponse>(body).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// 试题数据结构
///
/// `choices` 字段在 `/questions/{fileName}` 接口中是二次编码的 JSON 字符串
/// （数据库存的是 `JSON.stringify` 后的文本，例如 `"[\"A\",\"B\"]"`），
/// 反序列化时需要再解一次；普通数组形式同样接受
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,

    #[serde(rename = "questionText")]
    pub question_text: String,

    #[serde(deserialize_with = "deserialize_choices")]
    pub choices: Vec<String>,

    /// 题目类型（目前后端只生成 multiple-choice）
    #[serde(rename = "questionType", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,

    /// 难度等级（easy / medium / hard）
    #[serde(rename = "difficultyLevel", default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
}

/// 题目列表响应体 `{ "questions": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
}

// Helper function to deserialize choices as either a JSON-encoded string or a plain array
fn deserialize_choices<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{SeqAccess, Visitor};
    use std::fmt;

    struct ChoicesVisitor;

    impl<'de> Visitor<'de> for ChoicesVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON-encoded string or an array of choice strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            serde_json::from_str(value).map_err(E::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut choices = Vec::new();
            while let Some(choice) = seq.next_element::<String>()? {
                choices.push(choice);
            }
            Ok(choices)
        }
    }

    deserializer.deserialize_any(ChoicesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_double_encoded_string() {
        let body = r#"{
            "id": 1,
            "questionText": "中国的首都是哪里？",
            "choices": "[\"北京\",\"上海\",\"广州\",\"深圳\"]"
        }"#;

        let q: Question = serde_json::from_str(body).unwrap();
        assert_eq!(q.choices, vec!["北京", "上海", "广州", "深圳"]);
    }

    #[test]
    fn test_choices_plain_array() {
        let body = r#"{
            "id": 2,
            "questionText": "1 + 1 = ?",
            "choices": ["1", "2", "3", "4"]
        }"#;

        let q: Question = serde_json::from_str(body).unwrap();
        assert_eq!(q.choices, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_choices_malformed_inner_json_is_error() {
        let body = r#"{
            "id": 3,
            "questionText": "bad",
            "choices": "not a json array"
        }"#;

        assert!(serde_json::from_str::<Question>(body).is_err());
    }

    #[test]
    fn test_optional_metadata_fields() {
        let body = r#"{
            "id": 4,
            "questionText": "附带元数据的题目",
            "choices": "[\"A\",\"B\"]",
            "questionType": "multiple-choice",
            "difficultyLevel": "easy"
        }"#;

        let q: Question = serde_json::from_str(body).unwrap();
        assert_eq!(q.question_type.as_deref(), Some("multiple-choice"));
        assert_eq!(q.difficulty_level.as_deref(), Some("easy"));
    }

    #[test]
    fn test_question_list_malformed_body_is_error() {
        assert!(serde_json::from_str::<QuestionListResponse>("not json at all").is_err());
        assert!(serde_json::from_str::<QuestionListResponse>(r#"{ "items": [] }"#).is_err());
    }
}

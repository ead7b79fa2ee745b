use serde::{Deserialize, Serialize};

/// 单题作答
///
/// `answer` 为 `None` 表示未作答，提交时序列化为 `null`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: i64,

    pub answer: Option<String>,
}

/// 提交答案请求体 `{ "answers": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct AnswerSheet {
    pub answers: Vec<Answer>,
}

/// 单题判分结果
///
/// 结果列表与提交的答案列表按下标一一对应，后端不以题目 ID 作为关联键。
/// 后端会回显 `questionId` / `questionText` / `userAnswer` 等字段，
/// 这里照常解析但不用于对齐
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionResult {
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,

    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,

    #[serde(rename = "questionId", default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,

    #[serde(rename = "questionText", default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,

    #[serde(rename = "userAnswer", default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
}

/// 提交答案响应体
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOutcome {
    pub results: Vec<QuestionResult>,

    pub score: u32,

    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_wire_shape() {
        let answered = Answer {
            question_id: 1,
            answer: Some("北京".to_string()),
        };
        let unanswered = Answer {
            question_id: 2,
            answer: None,
        };

        assert_eq!(
            serde_json::to_value(&answered).unwrap(),
            json!({ "questionId": 1, "answer": "北京" })
        );
        // 未作答必须序列化为 null，不能省略字段
        assert_eq!(
            serde_json::to_value(&unanswered).unwrap(),
            json!({ "questionId": 2, "answer": null })
        );
    }

    #[test]
    fn test_answer_sheet_wrapper() {
        let sheet = AnswerSheet {
            answers: vec![Answer {
                question_id: 7,
                answer: None,
            }],
        };

        assert_eq!(
            serde_json::to_value(&sheet).unwrap(),
            json!({ "answers": [{ "questionId": 7, "answer": null }] })
        );
    }

    #[test]
    fn test_submit_outcome_parse() {
        let body = r#"{
            "results": [
                { "isCorrect": true, "correctAnswer": "北京" },
                { "isCorrect": false, "correctAnswer": "2", "questionId": 5, "userAnswer": "3" }
            ],
            "score": 1,
            "totalQuestions": 2
        }"#;

        let outcome: SubmitOutcome = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total_questions, 2);
        assert_eq!(outcome.results.len(), 2);
        assert!(outcome.results[0].is_correct);
        assert_eq!(outcome.results[1].question_id, Some(5));
        assert_eq!(outcome.results[1].user_answer.as_deref(), Some("3"));
    }
}

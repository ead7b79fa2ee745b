//! 结果对齐 - 纯函数
//!
//! 把判分结果列表按下标对齐回原题目列表。后端的结果不携带可靠的
//! 关联键，下标顺序是唯一的对应关系，因此题目顺序从加载到提交
//! 必须保持不变（由会话保证）

use crate::models::{Question, QuestionResult};

/// 单道题目的最终反馈
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFeedback {
    pub question: Question,
    pub result: QuestionResult,
}

/// 按下标把判分结果对齐回题目列表
///
/// - 结果少于题目时，末尾未覆盖的题目没有反馈条目，不报错
/// - 结果多于题目时，多出的结果被忽略
///
/// # 参数
/// - `questions`: 按加载顺序排列的题目列表
/// - `results`: 服务端按提交顺序返回的判分结果
///
/// # 返回
/// 返回逐题反馈列表，长度为两个输入中较短的一个
pub fn reconcile(questions: &[Question], results: &[QuestionResult]) -> Vec<QuestionFeedback> {
    questions
        .iter()
        .zip(results.iter())
        .map(|(question, result)| QuestionFeedback {
            question: question.clone(),
            result: result.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            question_text: text.to_string(),
            choices: vec!["A".to_string(), "B".to_string()],
            question_type: None,
            difficulty_level: None,
        }
    }

    fn result(is_correct: bool, correct_answer: &str) -> QuestionResult {
        QuestionResult {
            is_correct,
            correct_answer: correct_answer.to_string(),
            question_id: None,
            question_text: None,
            user_answer: None,
        }
    }

    #[test]
    fn test_equal_lengths_pair_positionally() {
        let questions = vec![question(1, "q1"), question(2, "q2"), question(3, "q3")];
        let results = vec![result(true, "A"), result(false, "B"), result(true, "A")];

        let feedback = reconcile(&questions, &results);

        assert_eq!(feedback.len(), 3);
        for (i, entry) in feedback.iter().enumerate() {
            assert_eq!(entry.question.id, questions[i].id);
            assert_eq!(entry.result, results[i]);
        }
    }

    #[test]
    fn test_fewer_results_leave_trailing_questions_without_feedback() {
        let questions = vec![question(1, "q1"), question(2, "q2"), question(3, "q3")];
        let results = vec![result(true, "A")];

        let feedback = reconcile(&questions, &results);

        // 只有前缀部分有反馈，绝不报错
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].question.id, 1);
    }

    #[test]
    fn test_extra_results_are_ignored() {
        let questions = vec![question(1, "q1")];
        let results = vec![result(true, "A"), result(false, "B")];

        let feedback = reconcile(&questions, &results);

        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].result, results[0]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(reconcile(&[], &[]).is_empty());
        assert!(reconcile(&[question(1, "q1")], &[]).is_empty());
        assert!(reconcile(&[], &[result(true, "A")]).is_empty());
    }

    #[test]
    fn test_two_question_walkthrough() {
        // 两道题：第一题答对，第二题未作答被判错，正确答案为 B
        let questions = vec![question(1, "q1"), question(2, "q2")];
        let results = vec![result(true, "A"), result(false, "B")];

        let feedback = reconcile(&questions, &results);

        assert_eq!(feedback.len(), 2);
        assert!(feedback[0].result.is_correct);
        assert!(!feedback[1].result.is_correct);
        assert_eq!(feedback[1].result.correct_answer, "B");
    }
}

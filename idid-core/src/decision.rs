use crate::lexicon::{GO_SIGNALS, REST_SIGNALS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SUGGEST_GO: &str = "지금은 ‘진행하는 쪽’이 더 낫겠습니다.";
const SUGGEST_REST: &str = "지금은 ‘쉬거나 보류하는 쪽’이 더 낫겠습니다.";
const SUGGEST_LIGHT: &str = "지금은 ‘가볍게 진행’이 좋겠습니다.";

/// The heuristic's answer to a "should I do this?" question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub suggestion: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// A recorded run of the decision helper. The history is append-only; the
/// app never mutates or deletes past decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub question: String,
    pub suggestion: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Decision {
    /// Stamps `advice` for `question` with a fresh id and timestamp.
    pub fn new(question: impl Into<String>, advice: Advice) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question: question.into(),
            suggestion: advice.suggestion,
            pros: advice.pros,
            cons: advice.cons,
        }
    }
}

/// Rule-based "should I do this?" helper.
///
/// Go-ahead lexicon words found as substrings push the score up, rest/defer
/// words push it down; the resulting band (>= 1, <= -1, else) selects one of
/// three fixed suggestion/pros/cons sets. Pure and deterministic; persisting
/// the outcome is the caller's job.
pub fn decide(question: &str) -> Advice {
    let q = question.trim().to_lowercase();
    let mut score: i32 = 0;
    for word in GO_SIGNALS {
        if q.contains(word) {
            score += 1;
        }
    }
    for word in REST_SIGNALS {
        if q.contains(word) {
            score -= 1;
        }
    }

    if score >= 1 {
        Advice {
            suggestion: SUGGEST_GO.to_string(),
            pros: vec![
                "미루면 남는 찜찜함을 줄일 수 있습니다.".to_string(),
                "오늘의 흐름을 타기 좋습니다.".to_string(),
            ],
            cons: vec![
                "에너지가 부족하면 지속이 어렵습니다.".to_string(),
                "완벽하게 하려다 부담이 생길 수 있습니다.".to_string(),
            ],
        }
    } else if score <= -1 {
        Advice {
            suggestion: SUGGEST_REST.to_string(),
            pros: vec![
                "컨디션 회복이 우선입니다.".to_string(),
                "무리로 인한 역효과를 줄입니다.".to_string(),
            ],
            cons: vec![
                "미루면 내일로 부담이 넘어갈 수 있습니다.".to_string(),
                "죄책감이 생길 수 있습니다(불필요하지만).".to_string(),
            ],
        }
    } else {
        Advice {
            suggestion: SUGGEST_LIGHT.to_string(),
            pros: vec![
                "작게 시작하면 심리적 부담이 적습니다.".to_string(),
                "상황을 보며 조절할 수 있습니다.".to_string(),
            ],
            cons: vec![
                "결론이 애매하게 느껴질 수 있습니다.".to_string(),
                "한 번 더 정리가 필요할 수 있습니다.".to_string(),
            ],
        }
    }
}

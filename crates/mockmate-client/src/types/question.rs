use serde::{Deserialize, Serialize};

use super::{Category, Difficulty, QuestionType};
use crate::query::{QueryParams, ToQuery};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub expected_answer: Option<String>,
    #[serde(default)]
    pub time_limit_minutes: Option<u32>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl Question {
    /// Comma-separated `tags`, trimmed, empties dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// One choice of a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default, rename = "isCorrect", alias = "correct")]
    pub is_correct: bool,
    #[serde(default)]
    pub option_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default, rename = "isHidden", alias = "hidden")]
    pub is_hidden: bool,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Filter for the question listings. Parameters are emitted as
/// `category`, `difficulty`, `type`, `limit`, skipping absent ones.
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionType>,
    pub limit: Option<u32>,
}

impl ToQuery for QuestionFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("category", self.category.as_ref())
            .with_opt("difficulty", self.difficulty)
            .with_opt("type", self.kind)
            .with_opt("limit", self.limit)
    }
}

/// Filter for `/questions/random`.
#[derive(Debug, Clone, Default)]
pub struct RandomQuestionFilter {
    pub categories: Vec<Category>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionType>,
    pub count: Option<u32>,
}

impl ToQuery for RandomQuestionFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_each("categories", &self.categories)
            .with_opt("difficulty", self.difficulty)
            .with_opt("type", self.kind)
            .with_opt("count", self.count)
    }
}

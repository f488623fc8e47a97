//! Question bank command handlers.

use anyhow::Result;
use mockmate_client::ApiGateway;
use mockmate_client::types::{
    Category, Difficulty, QuestionFilter, QuestionType, RandomQuestionFilter,
};

use super::print_json;

pub async fn list(
    gateway: &ApiGateway,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    kind: Option<QuestionType>,
    limit: Option<u32>,
) -> Result<()> {
    let filter = QuestionFilter {
        category,
        difficulty,
        kind,
        limit,
    };
    let questions = gateway.questions().list(&filter).await?;
    print_json(&questions)
}

pub async fn show(gateway: &ApiGateway, id: i64) -> Result<()> {
    let question = gateway.questions().get(id).await?;
    print_json(&question)
}

pub async fn random(
    gateway: &ApiGateway,
    categories: Vec<Category>,
    difficulty: Option<Difficulty>,
    kind: Option<QuestionType>,
    count: Option<u32>,
) -> Result<()> {
    let filter = RandomQuestionFilter {
        categories,
        difficulty,
        kind,
        count,
    };
    let questions = gateway.questions().random(&filter).await?;
    print_json(&questions)
}

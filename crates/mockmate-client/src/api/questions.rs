//! Question bank retrieval.

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::ToQuery;
use crate::types::{Question, QuestionFilter, RandomQuestionFilter};

pub struct QuestionsApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> QuestionsApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, filter: &QuestionFilter) -> ApiResult<Vec<Question>> {
        self.filtered("/questions", filter).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Question> {
        self.gateway.get(&format!("/questions/{id}"), None).await
    }

    pub async fn random(&self, filter: &RandomQuestionFilter) -> ApiResult<Vec<Question>> {
        self.gateway
            .get("/questions/random", Some(&filter.to_query()))
            .await
    }

    pub async fn coding(&self, filter: &QuestionFilter) -> ApiResult<Vec<Question>> {
        self.filtered("/questions/coding", filter).await
    }

    pub async fn mcq(&self, filter: &QuestionFilter) -> ApiResult<Vec<Question>> {
        self.filtered("/questions/mcq", filter).await
    }

    pub async fn behavioral(&self, filter: &QuestionFilter) -> ApiResult<Vec<Question>> {
        self.filtered("/questions/behavioral", filter).await
    }

    async fn filtered(&self, path: &str, filter: &QuestionFilter) -> ApiResult<Vec<Question>> {
        self.gateway.get(path, Some(&filter.to_query())).await
    }
}

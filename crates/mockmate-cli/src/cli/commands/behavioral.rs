//! Behavioral answer command handlers.

use anyhow::Result;
use mockmate_client::ApiGateway;
use mockmate_client::types::{ResponseFilter, SubmitResponseRequest};

use super::print_json;

pub async fn submit(
    gateway: &ApiGateway,
    question_id: i64,
    response: String,
    session: Option<i64>,
    time: Option<u32>,
) -> Result<()> {
    let mut request = SubmitResponseRequest::new(question_id, response);
    request.interview_session_id = session;
    request.response_time_seconds = time;
    let recorded = gateway.behavioral().submit(&request).await?;
    print_json(&recorded)
}

pub async fn responses(
    gateway: &ApiGateway,
    question: Option<i64>,
    session: Option<i64>,
) -> Result<()> {
    let filter = ResponseFilter {
        question_id: question,
        interview_session_id: session,
    };
    let responses = gateway.behavioral().responses(&filter).await?;
    print_json(&responses)
}

pub async fn analyze(gateway: &ApiGateway, id: i64) -> Result<()> {
    let analyzed = gateway.behavioral().analyze(id).await?;
    print_json(&analyzed)
}

//! Interview session command handlers.

use anyhow::Result;
use chrono::NaiveDateTime;
use mockmate_client::ApiGateway;
use mockmate_client::types::{CreateInterviewRequest, InterviewType, SessionStatus};

use super::print_json;

pub struct NewInterview {
    pub title: String,
    pub kind: InterviewType,
    pub scheduled_at: NaiveDateTime,
    pub duration: Option<u32>,
    pub description: Option<String>,
    pub mentor: Option<i64>,
    pub peer: Option<i64>,
}

impl From<NewInterview> for CreateInterviewRequest {
    fn from(new: NewInterview) -> Self {
        let mut request = CreateInterviewRequest::new(new.title, new.kind, new.scheduled_at);
        if let Some(minutes) = new.duration {
            request.duration_minutes = minutes;
        }
        request.description = new.description;
        request.mentor_id = new.mentor;
        request.is_peer_interview = new.peer.is_some();
        request.peer_user_id = new.peer;
        request
    }
}

pub async fn list(gateway: &ApiGateway, status: Option<SessionStatus>) -> Result<()> {
    let interviews = gateway.interviews().list(status).await?;
    print_json(&interviews)
}

pub async fn create(gateway: &ApiGateway, new: NewInterview) -> Result<()> {
    let interview = gateway.interviews().create(&new.into()).await?;
    print_json(&interview)
}

pub async fn start(gateway: &ApiGateway, id: i64) -> Result<()> {
    let interview = gateway.interviews().start(id).await?;
    print_json(&interview)
}

pub async fn complete(gateway: &ApiGateway, id: i64, feedback: &str) -> Result<()> {
    let interview = gateway.interviews().complete(id, feedback).await?;
    print_json(&interview)
}

pub async fn cancel(gateway: &ApiGateway, id: i64) -> Result<()> {
    gateway.interviews().cancel(id).await?;
    println!("✓ Cancelled interview {id}");
    Ok(())
}

pub async fn available(gateway: &ApiGateway) -> Result<()> {
    let interviews = gateway.interviews().available().await?;
    print_json(&interviews)
}

pub async fn join(gateway: &ApiGateway, id: i64) -> Result<()> {
    let interview = gateway.interviews().join(id).await?;
    print_json(&interview)
}

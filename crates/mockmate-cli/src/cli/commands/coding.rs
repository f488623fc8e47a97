//! Coding submission command handlers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mockmate_client::ApiGateway;
use mockmate_client::types::{
    ProgrammingLanguage, SubmissionFilter, SubmitCodeRequest, TestCodeRequest,
};

use super::print_json;

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read source file {}", path.display()))
}

pub async fn submit(
    gateway: &ApiGateway,
    question_id: i64,
    file: &Path,
    language: ProgrammingLanguage,
    session: Option<i64>,
) -> Result<()> {
    let request = SubmitCodeRequest {
        question_id,
        interview_session_id: session,
        code: read_source(file)?,
        language,
    };
    let submission = gateway.coding().submit(&request).await?;
    print_json(&submission)
}

pub async fn test(
    gateway: &ApiGateway,
    file: &Path,
    language: ProgrammingLanguage,
    input: String,
) -> Result<()> {
    let request = TestCodeRequest {
        code: read_source(file)?,
        language,
        input,
    };
    let result = gateway.coding().test(&request).await?;
    print_json(&result)
}

pub async fn submissions(
    gateway: &ApiGateway,
    question: Option<i64>,
    session: Option<i64>,
) -> Result<()> {
    let filter = SubmissionFilter {
        question_id: question,
        interview_session_id: session,
    };
    let submissions = gateway.coding().submissions(&filter).await?;
    print_json(&submissions)
}

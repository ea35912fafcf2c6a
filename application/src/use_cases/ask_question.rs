//! Ask Question use case
//!
//! Classifies a question, runs the generated SPARQL query against the
//! endpoint and phrases the rows as an answer.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{AskProgressNotifier, NoProgress};
use crate::ports::sparql_endpoint::{EndpointError, SparqlEndpoint};
use assistant_domain::{
    Binding, Category, DomainError, QueryInfo, Question, QuestionClassifier, ResultShape,
    StandardClassifier, format_response, truncate,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while answering a question
#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error(transparent)]
    InvalidQuestion(#[from] DomainError),

    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),
}

impl AskQuestionError {
    /// Message safe to show to end users; carries no upstream detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            AskQuestionError::InvalidQuestion(_) => "Question is required",
            AskQuestionError::Endpoint(_) => "Failed to process question",
        }
    }
}

/// Classification details attached to an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInfoSummary {
    pub category: Category,
    #[serde(rename = "type")]
    pub shape: ResultShape,
    pub description: String,
    /// Generated SPARQL, only when exposure is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparql_query: Option<String>,
}

/// Answer to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantAnswer {
    pub question: String,
    pub answer: String,
    pub data: Vec<Binding>,
    pub query_info: QueryInfoSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Use case for answering a question from the triple store
pub struct AskQuestionUseCase {
    endpoint: Arc<dyn SparqlEndpoint>,
    classifier: Arc<dyn QuestionClassifier>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AskQuestionUseCase {
    pub fn new(endpoint: Arc<dyn SparqlEndpoint>) -> Self {
        Self {
            endpoint,
            classifier: Arc::new(StandardClassifier),
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn QuestionClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Toggle SPARQL exposure (used by the chat `/sparql` command).
    pub fn set_expose_sparql(&mut self, expose: bool) {
        self.behavior.expose_sparql = expose;
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &str) -> Result<AssistantAnswer, AskQuestionError> {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &str,
        progress: &dyn AskProgressNotifier,
    ) -> Result<AssistantAnswer, AskQuestionError> {
        let question = Question::parse(question)?;

        let info = self.classifier.classify(question.content());
        info!(
            "Classified question as {} ({}): {}",
            info.category,
            info.shape,
            truncate(question.content(), 100)
        );
        debug!("Generated SPARQL:\n{}", info.query);

        self.conversation_logger.log(ConversationEvent::new(
            "question_classified",
            serde_json::json!({
                "question": question.content(),
                "category": info.category,
                "result_type": info.shape,
                "sparql": info.query,
            }),
        ));
        progress.on_classified(&info);

        let rows = match self.run_query(&info, progress).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("SPARQL query failed on {}", self.endpoint.location());
                debug!("Endpoint error: {}", e);
                progress.on_query_complete(None);
                self.conversation_logger.log(ConversationEvent::new(
                    "query_failed",
                    serde_json::json!({
                        "question": question.content(),
                        "error": e.to_string(),
                    }),
                ));
                return Err(e.into());
            }
        };
        progress.on_query_complete(Some(rows.len()));

        let formatted = format_response(rows, &info);

        self.conversation_logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({
                "question": question.content(),
                "rows": formatted.data.len(),
                "answer": formatted.answer,
            }),
        ));

        Ok(AssistantAnswer {
            question: question.into_content(),
            answer: formatted.answer,
            data: formatted.data,
            query_info: QueryInfoSummary {
                category: info.category,
                shape: formatted.shape,
                description: formatted.description,
                sparql_query: self.behavior.expose_sparql.then(|| info.query.clone()),
            },
            suggestion: info.suggestion,
        })
    }

    async fn run_query(
        &self,
        info: &QueryInfo,
        progress: &dyn AskProgressNotifier,
    ) -> Result<Vec<Binding>, EndpointError> {
        progress.on_query_start(&self.endpoint.location());

        let query = self.endpoint.select(&info.query);
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, query)
                .await
                .map_err(|_| EndpointError::Timeout)?,
            None => query.await,
        }
    }
}

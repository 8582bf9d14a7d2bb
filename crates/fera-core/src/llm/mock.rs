//! Scripted completion backend for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use fera_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use super::provider::LlmProvider;

#[derive(Default)]
struct Script {
    queued: VecDeque<Result<CompletionResponse, LlmError>>,
    requests: Vec<CompletionRequest>,
}

/// Replays queued results in order and records every request it receives.
///
/// When the queue is empty it answers with `"reply {n}"`, where `n` counts
/// requests from 1.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    name: String,
    script: Arc<Mutex<Script>>,
}

impl ScriptedProvider {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            script: Arc::new(Mutex::new(Script::default())),
        }
    }

    pub(crate) fn push_reply(&self, content: &str) {
        self.script
            .lock()
            .unwrap()
            .queued
            .push_back(Ok(response(content)));
    }

    pub(crate) fn push_error(&self, error: LlmError) {
        self.script.lock().unwrap().queued.push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

fn response(content: &str) -> CompletionResponse {
    CompletionResponse {
        id: "mock-id".to_string(),
        content: content.to_string(),
        model: "mock-model".to_string(),
        stop_reason: StopReason::EndTurn,
        usage: Usage {
            input_tokens: 10,
            output_tokens: 5,
        },
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send {
        let result = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(request.clone());
            let n = script.requests.len();
            script
                .queued
                .pop_front()
                .unwrap_or_else(|| Ok(response(&format!("reply {n}"))))
        };
        async move { result }
    }
}

//! Scripted backend for exercising the client without a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{Instant, sleep};

use super::backend::{ApiRequest, HttpBackend, RawResponse};
use super::client::WebmasterClient;
use super::error::ApiResult;

/// A scripted outcome for one attempt.
pub(crate) enum Step {
    Respond(u16, &'static str),
    Hang,
}

/// Backend replaying scripted steps and recording each attempt.
pub(crate) struct ScriptedBackend {
    steps: Mutex<VecDeque<Step>>,
    pub(crate) requests: Mutex<Vec<ApiRequest>>,
    pub(crate) sent_at: Mutex<Vec<Instant>>,
}

impl ScriptedBackend {
    pub(crate) fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            requests: Mutex::new(Vec::new()),
            sent_at: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn attempts(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl HttpBackend for ScriptedBackend {
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.sent_at.lock().unwrap().push(Instant::now());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(status, body)) => Ok(RawResponse::new(status, body)),
            Some(Step::Hang) => {
                sleep(Duration::from_secs(3_600)).await;
                Ok(RawResponse::new(200, "{}"))
            }
            None => Ok(RawResponse::new(500, "no scripted response")),
        }
    }
}

pub(crate) fn scripted_client(backend: Arc<ScriptedBackend>) -> WebmasterClient {
    WebmasterClient::new("test-token").with_backend(backend)
}

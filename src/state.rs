/// Popup state and the transitions that drive it
use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiError;
use crate::headline::{Headline, HeadlineError};
use crate::prediction::{HealthResponse, ModelInfo, Prediction};
use crate::verdict::ResultView;

/// Backend reachability as seen by the last health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Checking,
    Online,
    ModelNotLoaded,
    Offline,
}

impl Connectivity {
    pub fn from_health(outcome: &Result<HealthResponse, ApiError>) -> Connectivity {
        match outcome {
            Ok(health) if health.model_loaded => Connectivity::Online,
            Ok(_) => Connectivity::ModelNotLoaded,
            Err(_) => Connectivity::Offline,
        }
    }

    pub fn allows_action(self) -> bool {
        self == Connectivity::Online
    }

    pub fn status_text(self) -> &'static str {
        match self {
            Connectivity::Checking => "Bağlanıyor...",
            Connectivity::Online => "API Bağlı ✓",
            Connectivity::ModelNotLoaded => "Model Yüklenmedi",
            Connectivity::Offline => "API Bağlantısı Yok",
        }
    }

    /// Class of the status dot
    pub fn dot_class(self) -> &'static str {
        match self {
            Connectivity::Checking => "checking",
            Connectivity::Online => "online",
            Connectivity::ModelNotLoaded | Connectivity::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupState {
    pub input: String,
    pub connectivity: Connectivity,
    pub analysis_in_flight: bool,
    /// Token of the most recently started analysis; older answers are dropped.
    pub latest_request: u64,
    pub loading: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub api_version: Option<String>,
    pub model_info: Option<ModelInfo>,
}

impl PopupState {
    /// The analyze control is off while the backend is not ready or while
    /// an analysis is pending. Neither writer can override the other.
    pub fn action_disabled(&self) -> bool {
        !self.connectivity.allows_action() || self.analysis_in_flight
    }
}

/// What an analyze trigger (click or Enter) should do with the current state.
#[derive(Debug, PartialEq)]
pub enum AnalyzeDecision {
    /// Show the validation error; no request is made.
    Reject(HeadlineError),
    /// Issue one token and send this headline.
    Start(Headline),
    /// Valid input, but the control is disabled.
    Ignore,
}

/// Validation runs first so a bad headline is reported even while the
/// control is disabled. A valid headline only starts an analysis when the
/// control is enabled.
pub fn decide_analysis(state: &PopupState, min_chars: usize) -> AnalyzeDecision {
    match Headline::parse(&state.input, min_chars) {
        Err(err) => AnalyzeDecision::Reject(err),
        Ok(_) if state.action_disabled() => AnalyzeDecision::Ignore,
        Ok(headline) => AnalyzeDecision::Start(headline),
    }
}

pub enum PopupAction {
    InputChanged(String),
    Rejected(HeadlineError),
    AnalysisStarted { token: u64 },
    AnalysisFinished {
        token: u64,
        outcome: Result<Prediction, ApiError>,
    },
    HealthChecked(Result<HealthResponse, ApiError>),
    ModelInfoLoaded(ModelInfo),
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PopupAction::InputChanged(input) => {
                let mut next = (*self).clone();
                next.input = input;
                next.error = None;
                Rc::new(next)
            }

            // Validation failures only raise the error panel. Loading, the
            // previous result and the control are left alone.
            PopupAction::Rejected(err) => {
                let mut next = (*self).clone();
                next.error = Some(err.to_string());
                Rc::new(next)
            }

            PopupAction::AnalysisStarted { token } => {
                let mut next = (*self).clone();
                next.latest_request = token;
                next.analysis_in_flight = true;
                next.loading = true;
                next.result = None;
                next.error = None;
                Rc::new(next)
            }

            PopupAction::AnalysisFinished { token, outcome } => {
                if token != self.latest_request {
                    log::debug!(
                        "Dropping stale analysis response {} (latest {})",
                        token,
                        self.latest_request
                    );
                    return self;
                }

                let mut next = (*self).clone();
                next.analysis_in_flight = false;
                next.loading = false;
                match outcome {
                    Ok(prediction) => next.result = Some(ResultView::from(&prediction)),
                    Err(err) => next.error = Some(err.to_string()),
                }
                Rc::new(next)
            }

            PopupAction::HealthChecked(outcome) => {
                let connectivity = Connectivity::from_health(&outcome);
                let api_version = match &outcome {
                    Ok(health) => health.version.clone(),
                    Err(_) => self.api_version.clone(),
                };

                if connectivity == self.connectivity && api_version == self.api_version {
                    return self;
                }

                let mut next = (*self).clone();
                next.connectivity = connectivity;
                next.api_version = api_version;
                Rc::new(next)
            }

            PopupAction::ModelInfoLoaded(info) => {
                let mut next = (*self).clone();
                next.model_info = Some(info);
                Rc::new(next)
            }
        }
    }
}

/// Hands out increasing analysis tokens for the lifetime of the popup.
#[derive(Debug, Default)]
pub struct RequestTokens {
    last: Cell<u64>,
}

impl RequestTokens {
    pub fn issue(&self) -> u64 {
        let token = self.last.get() + 1;
        self.last.set(token);
        token
    }
}

//! Simulation launch state
//!
//! `SimulationLauncher` owns the whole request lifecycle behind the Run
//! button: reset to `Loading`, spawn the POST, then settle into `Success`
//! or `Failure` when the task finishes. Rendering goes through `LaunchView`,
//! a plain description of what should be on screen, so the GUI and the CLI
//! show the same thing.

use chrono::{DateTime, Local};
use eframe::egui;
use tokio::task::JoinHandle;

use crate::orchestrator::{
    LaunchError, OrchestratorClient, SIMULATIONS_PATH, SimulationRequest, SimulationResult,
};
use crate::state::StateEvent;
use crate::task::{PollResult, poll_task};

pub const RUN_LABEL: &str = "Run Full Simulation Workflow";
pub const RUNNING_LABEL: &str = "Orchestrating...";
pub const LOADING_TEXT: &str = "Loading... Please wait.";
pub const ERROR_TITLE: &str = "An Error Occurred";
pub const SUCCESS_TITLE: &str = "Orchestration Successful";

/// Where the launcher currently is.
///
/// Loading, error and result are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LaunchState {
    #[default]
    Idle,
    Loading,
    Success(SimulationResult),
    Failure(String),
}

impl LaunchState {
    /// Terminal state for a finished request
    pub fn settled(outcome: Result<SimulationResult, LaunchError>) -> Self {
        match outcome {
            Ok(result) => LaunchState::Success(result),
            Err(e) => LaunchState::Failure(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LaunchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LaunchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        match self {
            LaunchState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Describe what should be rendered for this state
    pub fn view(&self) -> LaunchView {
        let loading = self.is_loading();

        LaunchView {
            button_label: if loading { RUNNING_LABEL } else { RUN_LABEL },
            button_enabled: !loading,
            loading_text: loading.then_some(LOADING_TEXT),
            error_panel: self.error().map(|message| ErrorPanel {
                title: ERROR_TITLE,
                message: message.to_string(),
            }),
            result_panel: self.result().map(ResultPanel::from_result),
        }
    }
}

/// Everything the launch area shows for one state
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchView {
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub loading_text: Option<&'static str>,
    pub error_panel: Option<ErrorPanel>,
    pub result_panel: Option<ResultPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPanel {
    pub title: &'static str,
    /// Shown preformatted
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub title: &'static str,
    pub message: Option<String>,
    /// Known fields worth a label of their own, in display order
    pub highlights: Vec<(&'static str, String)>,
    /// Pretty-printed full result
    pub dump: String,
}

impl ResultPanel {
    fn from_result(result: &SimulationResult) -> Self {
        let mut highlights = Vec::new();
        if let Some(status) = result.simulation_status() {
            highlights.push(("Status", status.to_string()));
        }
        if let Some(cycle) = result.initial_cycle() {
            highlights.push(("Initial cycle", cycle.to_string()));
        }
        if let Some(tasks) = result.scheduled_tasks() {
            highlights.push(("Scheduled tasks", tasks.to_string()));
        }

        Self {
            title: SUCCESS_TITLE,
            message: result.message(),
            highlights,
            dump: result.pretty(),
        }
    }
}

/// Drives one orchestration request at a time for the GUI
#[derive(Default)]
pub struct SimulationLauncher {
    state: LaunchState,
    /// In-flight request; `Some` exactly while the state is `Loading`
    task: Option<JoinHandle<Result<SimulationResult, LaunchError>>>,
    /// When the last request settled
    pub last_finished: Option<DateTime<Local>>,
}

impl SimulationLauncher {
    pub fn state(&self) -> &LaunchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn view(&self) -> LaunchView {
        self.state.view()
    }

    /// Start a launch request.
    ///
    /// Prior error and result are cleared immediately. The Run button is
    /// disabled while loading, but nothing here enforces it: calling again
    /// detaches the previous request (it still completes, its outcome is
    /// dropped) and starts a new one.
    pub fn run_simulation(
        &mut self,
        client: &OrchestratorClient,
        request: SimulationRequest,
    ) -> Vec<StateEvent> {
        if self.task.take().is_some() {
            tracing::warn!("Launch requested while another is in flight; detaching it");
        }

        self.state = LaunchState::Loading;

        let endpoint = format!("{}{}", client.base_url(), SIMULATIONS_PATH);
        let client = client.clone();
        let package = request.app_package_id.clone();
        self.task = Some(tokio::spawn(async move {
            client.run_simulation(&request).await
        }));

        vec![
            StateEvent::StatusMessage(format!("Orchestrating {}...", package)),
            StateEvent::LogInfo(format!("Launching {} via {}", package, endpoint)),
        ]
    }

    /// Settle straight into `Failure` when no request could be issued
    pub fn fail_to_start(&mut self, error: LaunchError) -> Vec<StateEvent> {
        self.task = None;
        let mut events = vec![StateEvent::LogError(format!(
            "Could not start orchestration: {}",
            error
        ))];
        self.finish(LaunchState::settled(Err(error)), &mut events);
        events
    }

    /// Poll the in-flight request and settle the state once it finishes
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        let outcome = match poll_task(&mut self.task) {
            PollResult::Complete(Ok(outcome)) => outcome,
            PollResult::Complete(Err(e)) => {
                let msg = e.to_string();
                events.push(StateEvent::LogError(format!("Launch task panicked: {}", msg)));
                self.finish(LaunchState::Failure(msg), &mut events);
                return events;
            }
            PollResult::Pending => {
                ctx.request_repaint();
                return events;
            }
            PollResult::NoTask => return events,
        };

        match &outcome {
            Ok(result) => {
                events.push(StateEvent::LogInfo(format!(
                    "Orchestration succeeded: {}",
                    result.message().unwrap_or_default()
                )));
            }
            Err(e) => {
                events.push(StateEvent::LogError(format!("Orchestration failed: {}", e)));
            }
        }
        self.finish(LaunchState::settled(outcome), &mut events);

        events
    }

    fn finish(&mut self, state: LaunchState, events: &mut Vec<StateEvent>) {
        let now = Local::now();
        let summary = match &state {
            LaunchState::Success(_) => "Orchestration successful",
            _ => "Orchestration failed",
        };
        events.push(StateEvent::StatusMessage(format!(
            "{} at {}",
            summary,
            now.format("%H:%M:%S")
        )));

        self.state = state;
        self.last_finished = Some(now);
    }
}

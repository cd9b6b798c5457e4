use std::io;

use async_trait::async_trait;
use deploy_core::{CoreError, ExecutionStatus, ExecutionStore, FlowDefinition, FlowExecutor, LaunchArgs, ValidationError};
use deploy_domain::{HospitalProfile, ServerProfile};

fn three_step_flow() -> FlowDefinition {
    serde_json::from_str(r#"{
        "name": "部署主服务",
        "description": "拉取并重启主服务",
        "icon": "server",
        "parameters": [],
        "steps": [
            { "type": "runCommand", "name": "停止服务", "command": "systemctl stop app" },
            { "type": "transferPackage", "name": "传输安装包", "package": "app", "targetFile": "/opt/app.tar.gz" },
            { "type": "runCommand", "name": "启动服务", "command": "systemctl start app" }
        ]
    }"#).unwrap()
}

fn hospital() -> HospitalProfile {
    HospitalProfile { id: "h1".to_string(),
                      name: "仁济医院".to_string(),
                      main_server_ip: "10.0.0.1".to_string(),
                      database_server_ip: String::new(),
                      redis_server_ip: String::new(),
                      minio_server_ip: String::new(),
                      report_server_ip: String::new(),
                      file_preview_server_ip: String::new(),
                      dashboard_server_ip: String::new(),
                      big_screen_server_ip: String::new() }
}

fn server() -> ServerProfile {
    ServerProfile { id: "s1".to_string(),
                    hospital_id: "h1".to_string(),
                    name: "主服务器".to_string(),
                    host: "10.0.0.1".to_string(),
                    port: 22,
                    username: "root".to_string(),
                    password: "secret".to_string() }
}

struct OkExecutor;

#[async_trait]
impl FlowExecutor for OkExecutor {
    async fn execute_flow(&self, _h: &HospitalProfile, _s: &ServerProfile, _flow_name: &str, _args: &LaunchArgs) -> Result<(), CoreError> {
        Ok(())
    }
    async fn test_connection(&self, _s: &ServerProfile) -> Result<String, CoreError> {
        Ok("ubuntu 22.04".to_string())
    }
}

/// Rejects every launch with a bare message (no prefix added by the error).
struct FailExecutor(&'static str);

#[async_trait]
impl FlowExecutor for FailExecutor {
    async fn execute_flow(&self, _h: &HospitalProfile, _s: &ServerProfile, _flow_name: &str, _args: &LaunchArgs) -> Result<(), CoreError> {
        Err(CoreError::Io(io::Error::other(self.0)))
    }
    async fn test_connection(&self, _s: &ServerProfile) -> Result<String, CoreError> {
        Err(CoreError::AuthenticationFailed)
    }
}

#[test]
fn initial_state_is_idle_and_empty() {
    let store = ExecutionStore::new();
    let state = store.state();
    assert!(state.current_flow.is_none());
    assert_eq!(state.current_step, 0);
    assert_eq!(state.status, ExecutionStatus::Idle);
    assert!(state.error_message.is_none());
}

#[test]
fn begin_launch_marks_running_synchronously() {
    // The running phase must be observable before any executor future settles
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    store.begin_launch();
    assert_eq!(store.state().status, ExecutionStatus::Running);
    assert!(store.state().error_message.is_none());
}

#[test]
fn finish_launch_settles_exactly_into_terminal_status() {
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    store.begin_launch();
    store.finish_launch(Ok(()));
    assert_eq!(store.state().status, ExecutionStatus::Succeeded);
    assert!(store.state().error_message.is_none());
}

#[tokio::test]
async fn launch_success_ends_succeeded() {
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    let status = store.launch(&OkExecutor, &hospital(), &server(), &LaunchArgs::new()).await.unwrap();
    assert_eq!(status, ExecutionStatus::Succeeded);
    assert!(store.state().error_message.is_none());
}

#[tokio::test]
async fn launch_rejection_sets_failed_with_message() {
    // Scenario: the executor rejects with "SSH timeout"
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    let status = store.launch(&FailExecutor("SSH timeout"), &hospital(), &server(), &LaunchArgs::new()).await.unwrap();
    assert_eq!(status, ExecutionStatus::Failed);
    assert_eq!(store.state().error_message.as_deref(), Some("SSH timeout"));
}

#[tokio::test]
async fn error_message_present_iff_failed() {
    // Invariant: error_message is Some exactly when status is Failed
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    assert!(store.state().error_message.is_none());

    store.launch(&FailExecutor("boom"), &hospital(), &server(), &LaunchArgs::new()).await.unwrap();
    assert_eq!(store.state().status, ExecutionStatus::Failed);
    assert!(store.state().error_message.is_some());

    // A fresh launch after clear drops the stale message before running
    store.clear();
    store.set_flow(three_step_flow());
    store.begin_launch();
    assert_eq!(store.state().status, ExecutionStatus::Running);
    assert!(store.state().error_message.is_none());

    store.finish_launch(Ok(()));
    assert_eq!(store.state().status, ExecutionStatus::Succeeded);
    assert!(store.state().error_message.is_none());
}

#[tokio::test]
async fn clear_resets_fully_from_any_state() {
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    store.advance_step(2);
    store.launch(&FailExecutor("boom"), &hospital(), &server(), &LaunchArgs::new()).await.unwrap();

    store.clear();
    let state = store.state();
    assert!(state.current_flow.is_none());
    assert_eq!(state.current_step, 0);
    assert_eq!(state.status, ExecutionStatus::Idle);
    assert!(state.error_message.is_none());
}

#[tokio::test]
async fn failed_launch_is_terminal_until_explicit_clear() {
    // No retry inside the store: the user clears and launches again
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    store.launch(&FailExecutor("boom"), &hospital(), &server(), &LaunchArgs::new()).await.unwrap();
    assert_eq!(store.state().status, ExecutionStatus::Failed);

    store.clear();
    store.set_flow(three_step_flow());
    let status = store.launch(&OkExecutor, &hospital(), &server(), &LaunchArgs::new()).await.unwrap();
    assert_eq!(status, ExecutionStatus::Succeeded);
}

#[tokio::test]
async fn launch_without_flow_is_rejected_locally() {
    let mut store = ExecutionStore::new();
    let result = store.launch(&OkExecutor, &hospital(), &server(), &LaunchArgs::new()).await;
    assert_eq!(result.unwrap_err(), ValidationError::NoFlowSelected);
    // No transition happened
    assert_eq!(store.state().status, ExecutionStatus::Idle);
    assert!(store.state().error_message.is_none());
}

#[test]
fn advance_step_applies_the_index_verbatim() {
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    store.advance_step(1);
    store.advance_step(1); // duplicate, harmless no-op
    assert_eq!(store.state().current_step, 1);
    store.advance_step(2);
    assert_eq!(store.state().current_step, 2);
}

#[test]
fn set_flow_replaces_the_definition_wholesale() {
    let mut store = ExecutionStore::new();
    store.set_flow(three_step_flow());
    let mut other = three_step_flow();
    other.name = "部署报表服务".to_string();
    store.set_flow(other);
    assert_eq!(store.state().current_flow.as_ref().unwrap().name, "部署报表服务");
}

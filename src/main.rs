//! Demo del flujo completo: catálogo + perfiles + lanzamiento con un
//! ejecutor guionizado que publica los tres canales de evento.

use async_trait::async_trait;
use deploy_core::{plan_launch, step_description, ChannelProgressReporter, CoreError, EventBridge, EventEmitter,
                  ExecutionMonitor, FlowCatalog, FlowExecutor, LaunchArgs, LaunchPlan, ProgressEvent, ProgressReporter,
                  TerminalBuffer};
use deploy_domain::{HospitalProfile, ServerProfile};
use deploy_settings::{ProfileStore, SettingsConfig};

const DEMO_FLOW: &str = r#"{
    "name": "部署主服务",
    "description": "传输安装包并重启主服务",
    "icon": "server",
    "steps": [
        { "type": "runCommand", "name": "停止服务", "command": "systemctl stop app" },
        { "type": "transferPackage", "name": "传输安装包", "package": "app", "targetFile": "/opt/app.tar.gz" },
        { "type": "runCommand", "name": "启动服务", "command": "systemctl start app" }
    ]
}"#;

/// Ejecutor guionizado: recorre los pasos del flujo emitiendo salida,
/// cambios de paso y progreso como lo haría el bucle remoto real.
struct DemoExecutor {
    emitter: EventEmitter,
    steps: usize,
    fail_at: Option<usize>,
}

#[async_trait]
impl FlowExecutor for DemoExecutor {
    async fn execute_flow(&self,
                          _hospital: &HospitalProfile,
                          _server: &ServerProfile,
                          flow_name: &str,
                          _args: &LaunchArgs)
                          -> Result<(), CoreError> {
        for index in 0..self.steps {
            self.emitter.emit_step_change(index);
            if self.fail_at == Some(index) {
                return Err(CoreError::CommandExecutionFailed(format!("exit status 1 ({flow_name})")));
            }
            self.emitter.emit_output(format!("[{flow_name}] step {index} ok\r\n"));
            if index == 1 {
                // El paso de transferencia publica instantáneas de progreso
                let reporter = ChannelProgressReporter::new(self.emitter.clone());
                for processed in [250u64, 500, 750, 1000] {
                    reporter.report_progress(ProgressEvent::new(1000, processed)).await;
                }
            }
        }
        Ok(())
    }

    async fn test_connection(&self, server: &ServerProfile) -> Result<String, CoreError> {
        Ok(format!("ubuntu 22.04 @ {}", server.host))
    }
}

fn demo_profiles(store: &mut ProfileStore) -> Result<(HospitalProfile, ServerProfile), Box<dyn std::error::Error>> {
    let hospital = store.save_hospital(HospitalProfile { id: String::new(),
                                                         name: "仁济医院".to_string(),
                                                         main_server_ip: "10.0.0.1".to_string(),
                                                         database_server_ip: "10.0.0.2".to_string(),
                                                         redis_server_ip: "10.0.0.3".to_string(),
                                                         minio_server_ip: "10.0.0.4".to_string(),
                                                         report_server_ip: String::new(),
                                                         file_preview_server_ip: String::new(),
                                                         dashboard_server_ip: String::new(),
                                                         big_screen_server_ip: String::new() })?;
    let server = store.save_server(ServerProfile { id: String::new(),
                                                   hospital_id: hospital.id.clone(),
                                                   name: "主服务器".to_string(),
                                                   host: "10.0.0.1".to_string(),
                                                   port: 22,
                                                   username: "root".to_string(),
                                                   password: "secret".to_string() })?;
    Ok((hospital, server))
}

fn print_steps(monitor: &ExecutionMonitor<TerminalBuffer>) {
    let state = monitor.store().state();
    if let Some(flow) = &state.current_flow {
        for (index, step) in flow.steps.iter().enumerate() {
            println!("  [{}] {} - {}", index, step.name, step_description(state, index));
        }
    }
}

async fn run_successful_launch(hospital: &HospitalProfile, server: &ServerProfile) -> Result<(), Box<dyn std::error::Error>> {
    println!("== lanzamiento exitoso ==");
    let catalog = FlowCatalog::from_json_sources([DEMO_FLOW])?;
    let flow = catalog.get_flow("部署主服务").ok_or("demo flow missing from catalog")?.clone();

    let (emitter, mut subscription) = EventBridge::channel();
    let executor = DemoExecutor { emitter, steps: flow.len(), fail_at: None };
    let mut monitor = ExecutionMonitor::new(TerminalBuffer::new());
    monitor.mount_flow(flow.clone());

    match plan_launch(&flow, true)? {
        LaunchPlan::Immediate => {
            monitor.store_mut().launch(&executor, hospital, server, &LaunchArgs::new()).await?;
        }
        LaunchPlan::CollectParameters => unreachable!("demo flow declares no parameters"),
    }
    monitor.drain(&mut subscription);

    print_steps(&monitor);
    print!("{}", monitor.terminal().contents());
    Ok(())
}

async fn run_failing_launch(hospital: &HospitalProfile, server: &ServerProfile) -> Result<(), Box<dyn std::error::Error>> {
    println!("== lanzamiento con fallo en el paso 1 ==");
    let catalog = FlowCatalog::from_json_sources([DEMO_FLOW])?;
    let flow = catalog.get_flow("部署主服务").ok_or("demo flow missing from catalog")?.clone();

    let (emitter, mut subscription) = EventBridge::channel();
    let executor = DemoExecutor { emitter, steps: flow.len(), fail_at: Some(1) };
    let mut monitor = ExecutionMonitor::new(TerminalBuffer::new());
    monitor.mount_flow(flow);

    monitor.store_mut().launch(&executor, hospital, server, &LaunchArgs::new()).await?;
    monitor.drain(&mut subscription);
    print_steps(&monitor);
    Ok(())
}

fn run_rejected_dispatch() -> Result<(), Box<dyn std::error::Error>> {
    println!("== despacho sin servidor seleccionado ==");
    let catalog = FlowCatalog::from_json_sources([DEMO_FLOW])?;
    let flow = catalog.get_flow("部署主服务").ok_or("demo flow missing from catalog")?;
    match plan_launch(flow, false) {
        Ok(_) => unreachable!("the gate rejects a dispatch without a server"),
        Err(warning) => println!("  警告: {warning}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                             .init();

    let settings_dir = std::env::temp_dir().join("deployflow-demo-settings");
    let mut store = ProfileStore::open(&SettingsConfig::with_dir(&settings_dir))?;
    let (hospital, server) = demo_profiles(&mut store)?;
    println!("perfiles: {hospital} / {server}");
    println!("servidores del hospital: {}", store.servers_for_hospital(&hospital.id).len());

    run_successful_launch(&hospital, &server).await?;
    run_failing_launch(&hospital, &server).await?;
    run_rejected_dispatch()?;
    Ok(())
}

use deploy_domain::{DomainError, HospitalProfile, ServerProfile};

fn sample_hospital() -> HospitalProfile {
    HospitalProfile { id: "h1".to_string(),
                      name: "仁济医院".to_string(),
                      main_server_ip: "10.0.0.1".to_string(),
                      database_server_ip: "10.0.0.2".to_string(),
                      redis_server_ip: "10.0.0.3".to_string(),
                      minio_server_ip: "10.0.0.4".to_string(),
                      report_server_ip: String::new(),
                      file_preview_server_ip: String::new(),
                      dashboard_server_ip: String::new(),
                      big_screen_server_ip: String::new() }
}

fn sample_server() -> ServerProfile {
    ServerProfile { id: "s1".to_string(),
                    hospital_id: "h1".to_string(),
                    name: "主服务器".to_string(),
                    host: "10.0.0.1".to_string(),
                    port: 22,
                    username: "root".to_string(),
                    password: "secret".to_string() }
}

#[test]
fn test_hospital_validation_accepts_partial_ips() {
    // Secondary service ips may stay empty, only name and main ip are required
    assert!(sample_hospital().validate().is_ok());
}

#[test]
fn test_hospital_validation_rejects_empty_name() {
    let mut hospital = sample_hospital();
    hospital.name = "  ".to_string();
    assert!(matches!(hospital.validate(), Err(DomainError::ValidationError(_))));
}

#[test]
fn test_server_validation_rejects_zero_port() {
    let mut server = sample_server();
    server.port = 0;
    assert!(matches!(server.validate(), Err(DomainError::ValidationError(_))));
}

#[test]
fn test_server_wire_format_is_camel_case() {
    let json = serde_json::to_value(sample_server()).unwrap();
    assert_eq!(json["hospitalId"], "h1");
    assert_eq!(json["host"], "10.0.0.1");
}

#[test]
fn test_server_roundtrip_from_original_wire_shape() {
    let raw = r#"{
        "id": "s2",
        "hospitalId": "h1",
        "name": "备份服务器",
        "host": "10.0.0.9",
        "port": 2222,
        "username": "deploy",
        "password": "pw"
    }"#;
    let server: ServerProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(server.port, 2222);
    assert!(server.validate().is_ok());
}

use crate::*;

#[test]
fn decodes_the_chat_contract() {
    // The backend also sends fields this crate does not consume
    // (e.g. create_topology); decoding must tolerate them.
    let body = r#"{
        "success": true,
        "create_topology": true,
        "message": "Creating a ring topology with 6 devices.",
        "data": { "topology": "ring", "devices": 6 }
    }"#;
    let response = decode_chat_response(body).unwrap();
    assert!(response.success);
    assert_eq!(
        response.message.as_deref(),
        Some("Creating a ring topology with 6 devices.")
    );
    assert_eq!(response.data.topology.as_deref(), Some("ring"));
    assert_eq!(response.data.devices, Some(6));
}

#[test]
fn decodes_null_message_and_empty_data() {
    let body = r#"{
        "success": true,
        "message": null,
        "data": { "topology": null, "devices": null }
    }"#;
    let response = decode_chat_response(body).unwrap();
    assert_eq!(response.message, None);
    assert_eq!(response.data, ChatData::default());
}

#[test]
fn malformed_bodies_are_reported_as_errors() {
    let err = decode_chat_response("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("Malformed intent response:"));

    let err = decode_chat_response(r#"{ "success": "yes" }"#).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn topology_request_requires_both_halves() {
    let mut response = ChatResponse {
        success: true,
        message: None,
        data: ChatData {
            topology: Some("mesh".to_string()),
            devices: None,
        },
    };
    assert_eq!(response.topology_request(), None);

    response.data.devices = Some(4);
    let request = response.topology_request().unwrap();
    assert_eq!(request.kind, "mesh");
    assert_eq!(request.device_count, 4);
}

#[test]
fn topology_request_lowercases_the_kind() {
    let response = ChatResponse {
        success: true,
        message: None,
        data: ChatData {
            topology: Some("Star".to_string()),
            devices: Some(3),
        },
    };
    assert_eq!(response.topology_request().unwrap().kind, "star");
}

#[test]
fn failed_responses_yield_no_request() {
    let response = ChatResponse {
        success: false,
        message: Some("boom".to_string()),
        data: ChatData {
            topology: Some("star".to_string()),
            devices: Some(3),
        },
    };
    assert_eq!(response.topology_request(), None);
}

#[test]
fn topology_request_uses_the_wire_field_names() {
    let request = TopologyRequest {
        kind: "bus".to_string(),
        device_count: 2,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["kind"], "bus");
    assert_eq!(value["deviceCount"], 2);
}

#[test]
fn decodes_the_health_contract() {
    let body = r#"{ "status": "healthy", "rasa_healthy": true }"#;
    let health: HealthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.rasa_healthy);
}

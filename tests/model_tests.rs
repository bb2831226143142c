use eco_learn::{
    ApiError,
    models::{
        ApiResponse, CreateModuleRequest, CreateProjectRequest, Difficulty, Material, Module,
        ModuleCategory, ProjectDifficulty, QuizQuestion, RegisterUserRequest, Resource,
        ResourceType, UpdateModuleRequest,
    },
};

// --- Wire Format Tests ---

#[test]
fn test_resource_type_field_serializes_as_type() {
    // The Rust field is resource_type; the JSON key must stay "type".
    let resource = Resource {
        resource_type: ResourceType::Calculator,
        ..Resource::default()
    };

    let json_output = serde_json::to_string(&resource).unwrap();

    assert!(
        json_output.contains(r#""type":"calculator""#),
        "JSON output must use the 'type' key, got: {}",
        json_output
    );
    assert!(!json_output.contains("resource_type"));
}

#[test]
fn test_enums_use_kebab_case_values() {
    assert_eq!(
        serde_json::to_string(&ModuleCategory::RenewableEnergy).unwrap(),
        r#""renewable-energy""#
    );
    assert_eq!(
        serde_json::to_string(&ModuleCategory::FoodSustainability).unwrap(),
        r#""food-sustainability""#
    );
    assert_eq!(
        serde_json::to_string(&ProjectDifficulty::Medium).unwrap(),
        r#""medium""#
    );

    let parsed: ModuleCategory = serde_json::from_str(r#""waste-reduction""#).unwrap();
    assert_eq!(parsed, ModuleCategory::WasteReduction);
}

#[test]
fn test_unknown_enum_value_is_rejected() {
    let parsed = serde_json::from_str::<ModuleCategory>(r#""plastics""#);
    assert!(parsed.is_err());
}

#[test]
fn test_module_row_serializes_embedded_blocks() {
    let module = Module {
        quiz: vec![QuizQuestion {
            question: "Is solar renewable?".to_string(),
            options: vec!["No".to_string(), "Yes".to_string()],
            correct_answer: 1,
            explanation: None,
        }],
        ..Module::default()
    };

    let json_output = serde_json::to_string(&module).unwrap();

    assert!(json_output.contains(r#""correct_answer":1"#));
    assert!(json_output.contains(r#""category":"renewable-energy""#));
}

// --- Request Default Tests ---

#[test]
fn test_create_module_request_fills_defaults() {
    // Only the required fields are supplied.
    let payload = r#"{
        "title": "Wind Power Fundamentals",
        "description": "How turbines work",
        "category": "renewable-energy",
        "duration": 25,
        "content": "Lesson body."
    }"#;

    let req: CreateModuleRequest = serde_json::from_str(payload).unwrap();

    assert_eq!(req.points, 10);
    assert_eq!(req.difficulty, Difficulty::Beginner);
    assert_eq!(req.carbon_impact, 0.0);
    assert!(req.published);
    assert!(req.quiz.is_empty());
    assert!(req.thumbnail.is_none());
}

#[test]
fn test_create_project_request_fills_defaults() {
    let payload = r#"{
        "title": "Rain Barrel",
        "description": "Collect rainwater",
        "category": "water",
        "time_required": 120
    }"#;

    let req: CreateProjectRequest = serde_json::from_str(payload).unwrap();

    assert_eq!(req.points, 15);
    assert_eq!(req.difficulty, ProjectDifficulty::Easy);
    assert!(req.materials.is_empty());
    assert!(req.published);
}

#[test]
fn test_material_optional_flag_defaults_false() {
    let material: Material =
        serde_json::from_str(r#"{ "name": "Spigot", "quantity": "1" }"#).unwrap();

    assert!(!material.optional);
}

#[test]
fn test_update_module_request_optionality() {
    // Supports partial updates: absent fields stay None and are omitted on
    // the way back out.
    let partial_update = UpdateModuleRequest {
        title: Some("New Title Only".to_string()),
        ..UpdateModuleRequest::default()
    };

    let json_output = serde_json::to_string(&partial_update).unwrap();
    assert!(json_output.contains(r#""title":"New Title Only""#));
    assert!(!json_output.contains("description"));
    assert!(!json_output.contains("published"));
}

// --- Envelope Tests ---

#[test]
fn test_api_response_list_sets_count() {
    let envelope = ApiResponse::list(vec![1, 2, 3]);

    let json_output = serde_json::to_string(&envelope).unwrap();
    assert!(json_output.contains(r#""success":true"#));
    assert!(json_output.contains(r#""count":3"#));
    assert!(!json_output.contains("message"));
}

#[test]
fn test_api_response_data_omits_empty_fields() {
    let envelope = ApiResponse::data("payload");

    let json_output = serde_json::to_string(&envelope).unwrap();
    assert_eq!(json_output, r#"{"success":true,"data":"payload"}"#);
}

#[test]
fn test_api_response_failure_shape() {
    let envelope = ApiResponse::failure("Module not found");

    let json_output = serde_json::to_string(&envelope).unwrap();
    assert!(json_output.contains(r#""success":false"#));
    assert!(json_output.contains(r#""message":"Module not found""#));
    assert!(!json_output.contains("data"));
}

// --- Validation Tests ---

#[test]
fn test_create_module_rejects_blank_required_fields() {
    let mut req = CreateModuleRequest {
        title: "Solar".to_string(),
        description: "Basics".to_string(),
        category: ModuleCategory::RenewableEnergy,
        difficulty: Difficulty::Beginner,
        duration: 30,
        content: "Body".to_string(),
        video_url: None,
        resources: vec![],
        quiz: vec![],
        points: 10,
        carbon_impact: 5.0,
        thumbnail: None,
        published: true,
    };
    assert!(req.validate().is_ok());

    req.title = "  ".to_string();
    match req.validate() {
        Err(ApiError::Validation(msg)) => assert_eq!(msg, "Please provide a title"),
        _ => panic!("expected a validation error for a blank title"),
    }

    req.title = "Solar".to_string();
    req.content = String::new();
    match req.validate() {
        Err(ApiError::Validation(msg)) => assert_eq!(msg, "Please provide the module content"),
        _ => panic!("expected a validation error for empty content"),
    }
}

#[test]
fn test_quiz_questions_require_text() {
    let req = CreateModuleRequest {
        title: "Solar".to_string(),
        description: "Basics".to_string(),
        category: ModuleCategory::RenewableEnergy,
        difficulty: Difficulty::Beginner,
        duration: 30,
        content: "Body".to_string(),
        video_url: None,
        resources: vec![],
        quiz: vec![QuizQuestion {
            question: "".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_answer: 0,
            explanation: None,
        }],
        points: 10,
        carbon_impact: 5.0,
        thumbnail: None,
        published: true,
    };

    match req.validate() {
        Err(ApiError::Validation(msg)) => {
            assert_eq!(msg, "Please provide text for every quiz question")
        }
        _ => panic!("expected a validation error for an empty quiz question"),
    }
}

#[test]
fn test_update_validation_only_checks_supplied_fields() {
    // An empty partial update is valid; a supplied-but-blank field is not.
    assert!(UpdateModuleRequest::default().validate().is_ok());

    let req = UpdateModuleRequest {
        description: Some("".to_string()),
        ..UpdateModuleRequest::default()
    };
    assert!(matches!(req.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn test_register_request_requires_all_fields() {
    let req = RegisterUserRequest {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        password: "hunter2!".to_string(),
    };
    assert!(req.validate().is_ok());

    let req = RegisterUserRequest {
        name: "Jane".to_string(),
        email: " ".to_string(),
        password: "hunter2!".to_string(),
    };
    match req.validate() {
        Err(ApiError::Validation(msg)) => {
            assert_eq!(msg, "Please provide name, email and password")
        }
        _ => panic!("expected a validation error for a blank email"),
    }
}

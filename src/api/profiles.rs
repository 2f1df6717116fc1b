use super::models::ResourceId;

pub fn list_endpoint() -> Vec<String> {
    vec!["profiles".to_string()]
}

pub fn toggle_endpoint(id: &ResourceId) -> Vec<String> {
    vec![
        "profiles".to_string(),
        id.as_str().to_string(),
        "toggle".to_string(),
    ]
}

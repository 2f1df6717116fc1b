use super::models::MatchLogFilter;

pub const PAGE_SIZE: u32 = 100;

pub fn list_endpoint() -> Vec<String> {
    vec!["match-logs".to_string()]
}

pub fn list_query(limit: u32, offset: u32, filter: &MatchLogFilter) -> Vec<(String, String)> {
    let mut params = vec![
        ("limit".to_string(), limit.to_string()),
        ("offset".to_string(), offset.to_string()),
    ];

    for (key, value) in [
        ("start_date", &filter.start_date),
        ("end_date", &filter.end_date),
        ("profile_id", &filter.profile_id),
        ("device_id", &filter.device_id),
    ] {
        if let Some(value) = value {
            params.push((key.to_string(), value.clone()));
        }
    }

    params
}

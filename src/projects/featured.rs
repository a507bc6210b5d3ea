// Hardcoded featured projects.
// A curated list shown when no other source yields any records; it never
// touches the network.

use super::record::ProjectRecord;

/// The curated fallback list.
pub fn featured_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            slug: "aleksastajic/lite-erp-backend".to_string(),
            name: "lite-erp-backend".to_string(),
            description: "Lightweight ERP backend with double-entry inventory and invoicing."
                .to_string(),
            html_url: "https://github.com/aleksastajic/lite-erp-backend".to_string(),
            language: "Java".to_string(),
            stargazers_count: 0,
            homepage: None,
            owner: None,
            pushed_at: None,
            topics: vec![
                "java".to_string(),
                "spring-boot".to_string(),
                "erp".to_string(),
            ],
        },
        ProjectRecord {
            slug: "aleksastajic/banking-ledger-api".to_string(),
            name: "banking-ledger-api".to_string(),
            description: "Idempotent banking ledger API with strict balance invariants."
                .to_string(),
            html_url: "https://github.com/aleksastajic/banking-ledger-api".to_string(),
            language: "Java".to_string(),
            stargazers_count: 0,
            homepage: None,
            owner: None,
            pushed_at: None,
            topics: vec!["java".to_string(), "api".to_string()],
        },
    ]
}

// Site configuration.
// The profile, the repositories to show, and environment probes. These are
// deliberately inline constants; the page describes one person.

/// Repositories rendered on the page, in display order.
pub const REPOS_TO_SHOW: [&str; 4] = [
    "aleksastajic/lite-erp-backend",
    "aleksastajic/spring-react-task-manager",
    "aleksastajic/webhook-processor",
    "aleksastajic/banking-ledger-api",
];

/// Prebuilt project list checked before any cache or API access.
pub const STATIC_PROJECTS_FILE: &str = "projects.json";

/// Static profile fields bound into the page shell.
#[derive(Debug, Clone)]
pub struct Profile {
    pub display_name: String,
    pub tagline: String,
    pub bio: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub email: String,
    pub resume_href: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Aleksa Stajić".to_string(),
            tagline: "Backend & full-stack engineer — Java, Spring Boot, systems & APIs."
                .to_string(),
            bio: "I design and implement reliable backend systems with a focus on data \
                  integrity, idempotent operations, and clean APIs."
                .to_string(),
            github_url: "https://github.com/aleksastajic".to_string(),
            linkedin_url: "https://www.linkedin.com/in/aleksastajic".to_string(),
            email: "stajic1210@gmail.com".to_string(),
            resume_href: "/resume.pdf".to_string(),
        }
    }
}

/// Whether the decorative background should be skipped. A generator has no
/// media query to consult, so the signal is an environment variable; the
/// stylesheet carries a prefers-reduced-motion query as well.
pub fn reduced_motion() -> bool {
    std::env::var_os("FOLIO_REDUCED_MOTION").is_some()
}

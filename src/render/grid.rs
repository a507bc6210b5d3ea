// Project card grid.
// An injected render container: cleared and refilled by each display call,
// then emitted into the page's grid region.

use crate::projects::ProjectRecord;

use super::format::{escape_html, relative_time, visible_topics};

const EMPTY_MESSAGE: &str =
    r#"<p class="muted">No projects found. Check the configured repository slugs.</p>"#;
const FAILURE_MESSAGE: &str = r#"<p class="muted">Failed to fetch projects from GitHub.</p>"#;

/// The projects grid contents. Each display call replaces what was there
/// before; loading, empty, failure, and card states never coexist.
#[derive(Debug, Default)]
pub struct ProjectsGrid {
    children: Vec<String>,
}

impl ProjectsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the grid and insert `count` placeholder cards.
    pub fn show_skeletons(&mut self, count: usize) {
        self.children.clear();
        for _ in 0..count {
            self.children.push(skeleton_card());
        }
    }

    /// Clear the grid and render one card per record, in input order. An
    /// empty list renders the single empty-state message instead.
    pub fn display_repos(&mut self, repos: &[ProjectRecord]) {
        self.children.clear();
        if repos.is_empty() {
            self.children.push(EMPTY_MESSAGE.to_string());
            return;
        }
        for repo in repos {
            self.children.push(build_card(repo));
        }
    }

    /// Clear the grid and show the generic failure message.
    pub fn show_failure(&mut self) {
        self.children.clear();
        self.children.push(FAILURE_MESSAGE.to_string());
    }

    /// Emit the grid contents for insertion into the page.
    pub fn to_html(&self) -> String {
        self.children.join("\n")
    }
}

/// Build one project card.
fn build_card(repo: &ProjectRecord) -> String {
    let avatar = match repo
        .owner
        .as_ref()
        .and_then(|o| o.avatar_url.as_deref().map(|url| (o, url)))
    {
        Some((owner, url)) => format!(
            r#"<img class="repo-avatar" src="{}" alt="{} avatar" width="48" height="48">"#,
            url,
            escape_html(&owner.login)
        ),
        None => {
            let initial: String = repo.name.chars().take(1).collect();
            format!(
                r#"<div class="avatar-fallback">{}</div>"#,
                escape_html(&initial)
            )
        }
    };

    let (shown, extra) = visible_topics(&repo.topics);
    let topics_html = if shown.is_empty() {
        String::new()
    } else {
        let mut inner: String = shown
            .iter()
            .map(|t| format!(r#"<span class="topic">{}</span>"#, escape_html(t)))
            .collect();
        if extra > 0 {
            inner.push_str(&format!(r#"<span class="topic">+{}</span>"#, extra));
        }
        format!(r#"<div class="topics">{}</div>"#, inner)
    };

    let live_link = match &repo.homepage {
        Some(url) => format!(
            r#"<a class="badge" href="{}" target="_blank" rel="noopener noreferrer">Live</a>"#,
            url
        ),
        None => String::new(),
    };

    let updated = match &repo.pushed_at {
        Some(ts) => format!(
            r#"<span class="updated">Updated {}</span>"#,
            relative_time(ts)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="card">
  <div class="card-row">
    {avatar}
    <div class="card-body">
      <h3>{name} <span class="badge">{language}</span></h3>
      <p class="muted">{description}</p>
      {topics_html}
      <div class="meta">
        <a class="badge" href="{html_url}" target="_blank" rel="noopener noreferrer">Repo</a>
        {live_link}
        {updated}
      </div>
    </div>
  </div>
</div>"#,
        avatar = avatar,
        name = escape_html(&repo.name),
        language = escape_html(&repo.language),
        description = escape_html(&repo.description),
        topics_html = topics_html,
        html_url = repo.html_url,
        live_link = live_link,
        updated = updated,
    )
}

/// Placeholder card shown while the project list resolves.
fn skeleton_card() -> String {
    concat!(
        r#"<div class="card skeleton">"#,
        r#"<div class="card-row">"#,
        r#"<div class="skeleton-avatar"></div>"#,
        r#"<div class="card-body">"#,
        r#"<div class="skeleton-bar wide"></div>"#,
        r#"<div class="skeleton-bar narrow"></div>"#,
        r#"</div></div></div>"#
    )
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::github::Owner;

    fn record(name: &str) -> ProjectRecord {
        ProjectRecord {
            slug: format!("acme/{}", name),
            name: name.to_string(),
            description: String::new(),
            html_url: format!("https://github.com/acme/{}", name),
            language: "Rust".to_string(),
            stargazers_count: 0,
            homepage: None,
            owner: None,
            pushed_at: None,
            topics: Vec::new(),
        }
    }

    #[test]
    fn test_show_skeletons_count() {
        let mut grid = ProjectsGrid::new();
        grid.show_skeletons(4);

        assert_eq!(grid.to_html().matches("card skeleton").count(), 4);
    }

    #[test]
    fn test_empty_list_renders_single_message() {
        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[]);

        let html = grid.to_html();
        assert_eq!(html.matches("No projects found").count(), 1);
        assert_eq!(html.matches(r#"class="card""#).count(), 0);
    }

    #[test]
    fn test_display_clears_skeletons() {
        let mut grid = ProjectsGrid::new();
        grid.show_skeletons(4);
        grid.display_repos(&[]);

        let html = grid.to_html();
        assert!(!html.contains("skeleton"));
        assert_eq!(html.matches("No projects found").count(), 1);
    }

    #[test]
    fn test_topic_overflow_badge() {
        let mut repo = record("busy");
        repo.topics = (0..7).map(|i| format!("topic{}", i)).collect();

        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[repo]);

        let html = grid.to_html();
        assert_eq!(html.matches(r#"class="topic""#).count(), 6);
        assert!(html.contains(">+2</span>"));
        assert!(html.contains("topic4"));
        assert!(!html.contains("topic5"));
    }

    #[test]
    fn test_description_is_escaped() {
        let mut repo = record("sneaky");
        repo.description = "<script>alert(1)</script>".to_string();

        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[repo]);

        let html = grid.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_live_link_only_with_homepage() {
        let mut with_home = record("site");
        with_home.homepage = Some("https://site.example.com".to_string());

        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[record("plain"), with_home]);

        assert_eq!(grid.to_html().matches(">Live</a>").count(), 1);
    }

    #[test]
    fn test_avatar_falls_back_to_initial() {
        let mut with_avatar = record("pictured");
        with_avatar.owner = Some(Owner {
            login: "acme".to_string(),
            avatar_url: Some("https://avatars.example.com/acme.png".to_string()),
            html_url: "https://github.com/acme".to_string(),
        });

        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[with_avatar, record("plain")]);

        let html = grid.to_html();
        assert_eq!(html.matches(r#"class="repo-avatar""#).count(), 1);
        assert!(html.contains(r#"<div class="avatar-fallback">p</div>"#));
    }

    #[test]
    fn test_updated_label() {
        let mut repo = record("fresh");
        repo.pushed_at = Some(Utc::now() - Duration::days(90));

        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[repo]);

        assert!(grid.to_html().contains("Updated 3 months ago"));
    }

    #[test]
    fn test_cards_in_input_order() {
        let mut grid = ProjectsGrid::new();
        grid.display_repos(&[record("first"), record("second")]);

        let html = grid.to_html();
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_failure_message() {
        let mut grid = ProjectsGrid::new();
        grid.show_skeletons(2);
        grid.show_failure();

        let html = grid.to_html();
        assert_eq!(html.matches("Failed to fetch").count(), 1);
        assert!(!html.contains("skeleton"));
    }
}

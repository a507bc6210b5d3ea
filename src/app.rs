// Render pipeline.
// Drives skeletons, source resolution, card display, and page assembly.

use crate::config::{self, Profile};
use crate::projects::{self, Resolved};
use crate::render::{ProjectsGrid, page};

/// Owns the profile and the grid container for one render cycle.
pub struct App {
    profile: Profile,
    grid: ProjectsGrid,
}

impl App {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            grid: ProjectsGrid::new(),
        }
    }

    /// Produce the final page. Resolution failures never escape: the grid
    /// falls back to its failure state and the page still renders.
    pub async fn build_page(&mut self) -> String {
        self.grid.show_skeletons(config::REPOS_TO_SHOW.len());

        match projects::resolve(&config::REPOS_TO_SHOW).await {
            Ok(Resolved { records, source }) => {
                log::info!("resolved {} projects from {}", records.len(), source);
                self.grid.display_repos(&records);
            }
            Err(e) => {
                log::error!("project resolution failed: {}", e);
                self.grid.show_failure();
            }
        }

        self.assemble()
    }

    /// Wire the profile and grid contents into the page shell.
    fn assemble(&self) -> String {
        let mut html = page::wire_profile(page::PAGE_TEMPLATE, &self.profile);
        html = page::set_slot(&html, "projects_grid", &self.grid.to_html());
        html = page::init_aura_background(&html, config::reduced_motion());
        page::strip_unreplaced_placeholders(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_injects_grid_into_page() {
        let mut app = App::new(Profile::default());
        app.grid.show_skeletons(3);

        let html = app.assemble();

        assert!(html.contains(r#"id="projects-grid""#));
        assert_eq!(html.matches("card skeleton").count(), 3);
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_assemble_failure_state() {
        let mut app = App::new(Profile::default());
        app.grid.show_failure();

        let html = app.assemble();

        assert_eq!(html.matches("Failed to fetch").count(), 1);
        assert!(html.contains("<!DOCTYPE html>"));
    }
}

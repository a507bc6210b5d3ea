// Page assembly.
// Slot substitution over the embedded page template, plus the decorative
// aura background markup.

use chrono::Utc;

use crate::config::Profile;

use super::format::escape_html;

/// The page shell. `{{slot}}` placeholders receive wired content; any slot
/// left unfilled is stripped before the page is written.
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{hero_name}}</title>
<style>
:root { --bg: #0b0e14; --fg: #e6e9ef; --muted: #8b93a7; --accent: #6ea8fe; --card: #121826; }
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg); font: 16px/1.6 system-ui, sans-serif; }
main { max-width: 960px; margin: 0 auto; padding: 2rem 1.25rem; position: relative; z-index: 1; }
a { color: var(--accent); }
.hero h1 { margin: 0 0 0.25rem; font-size: 2rem; }
.hero .tagline { color: var(--muted); margin: 0 0 0.75rem; }
.links a { margin-right: 1rem; }
.muted { color: var(--muted); }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; margin-top: 1rem; }
.card { background: var(--card); border-radius: 10px; padding: 1rem; }
.card-row { display: flex; gap: 0.8rem; align-items: center; }
.card-body { flex: 1; min-width: 0; }
.card h3 { margin: 0; font-size: 1.05rem; }
.card p { margin: 0.35rem 0; font-size: 0.95rem; }
.repo-avatar { border-radius: 8px; }
.avatar-fallback { width: 48px; height: 48px; border-radius: 8px; background: rgba(255,255,255,0.06); display: flex; align-items: center; justify-content: center; font-weight: 700; }
.badge { display: inline-block; background: rgba(255,255,255,0.06); border-radius: 6px; padding: 0.1rem 0.5rem; font-size: 0.8rem; text-decoration: none; }
.topics { margin: 0.35rem 0; }
.topic { display: inline-block; background: rgba(110,168,254,0.12); border-radius: 999px; padding: 0.05rem 0.55rem; font-size: 0.75rem; margin: 0 0.25rem 0.25rem 0; }
.meta { display: flex; gap: 0.5rem; align-items: center; margin-top: 0.4rem; }
.updated { margin-left: auto; color: var(--muted); font-size: 0.85rem; }
.skeleton-avatar { width: 48px; height: 48px; border-radius: 8px; background: rgba(255,255,255,0.04); }
.skeleton-bar { height: 12px; border-radius: 6px; background: rgba(255,255,255,0.04); margin-bottom: 8px; animation: pulse 1.2s ease-in-out infinite; }
.skeleton-bar.wide { width: 60%; }
.skeleton-bar.narrow { width: 40%; height: 9px; }
footer { margin-top: 3rem; color: var(--muted); font-size: 0.9rem; }
#aura-bg { position: fixed; inset: 0; z-index: 0; overflow: hidden; pointer-events: none; }
.aura-blob { position: absolute; width: 40vmax; height: 40vmax; border-radius: 50%; filter: blur(80px); opacity: 0.18; animation: drift 24s ease-in-out infinite alternate; }
.aura-blob.b1 { background: #3b82f6; top: -10%; left: -10%; }
.aura-blob.b2 { background: #8b5cf6; top: 40%; right: -15%; animation-delay: -6s; }
.aura-blob.b3 { background: #06b6d4; bottom: -20%; left: 20%; animation-delay: -12s; }
.aura-blob.b4 { background: #f472b6; top: 10%; left: 50%; animation-delay: -18s; }
@keyframes drift { from { transform: translate(0, 0) scale(1); } to { transform: translate(6vmax, -4vmax) scale(1.15); } }
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.45; } }
@media (prefers-reduced-motion: reduce) {
  .aura-blob, .skeleton-bar { animation: none; }
}
</style>
</head>
<body>
<main>
  <section class="hero">
    <h1>{{hero_name}}</h1>
    <p class="tagline">{{hero_tagline}}</p>
    <p>{{hero_bio}}</p>
    <p class="links">
      <a href="{{github_url}}">GitHub</a>
      <a href="{{linkedin_url}}">LinkedIn</a>
      <a href="{{contact_email}}">Email</a>
      <a href="{{resume_href}}" download>Resume</a>
    </p>
  </section>
  <section class="projects">
    <h2>Projects</h2>
    <div class="grid" id="projects-grid">
{{projects_grid}}
    </div>
  </section>
  <footer>
    <p>&copy; {{footer_year}} {{footer_name}}</p>
  </footer>
</main>
</body>
</html>
"#;

/// Fill one named slot. Replacing a slot that does not exist in the
/// template is a no-op, never an error.
pub fn set_slot(html: &str, name: &str, value: &str) -> String {
    html.replace(&format!("{{{{{}}}}}", name), value)
}

/// Bind the static profile fields into the page.
pub fn wire_profile(html: &str, profile: &Profile) -> String {
    let mut html = html.to_string();
    html = set_slot(&html, "hero_name", &escape_html(&profile.display_name));
    html = set_slot(&html, "hero_tagline", &escape_html(&profile.tagline));
    html = set_slot(&html, "hero_bio", &escape_html(&profile.bio));
    html = set_slot(&html, "github_url", &profile.github_url);
    html = set_slot(&html, "linkedin_url", &profile.linkedin_url);
    html = set_slot(&html, "contact_email", &format!("mailto:{}", profile.email));
    html = set_slot(&html, "resume_href", &profile.resume_href);
    html = set_slot(&html, "footer_year", &Utc::now().format("%Y").to_string());
    html = set_slot(&html, "footer_name", &escape_html(&profile.display_name));
    html
}

/// Remove any `{{placeholder}}` left unfilled, so missing bindings never
/// leak into the output.
pub fn strip_unreplaced_placeholders(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end)
                if end > 0
                    && after[..end]
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b == b'_') =>
            {
                rest = &after[end + 2..];
            }
            _ => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Insert the decorative aura background before `</body>`. Any previous
/// instance is removed first; under reduced motion the effect is skipped
/// entirely.
pub fn init_aura_background(html: &str, reduced_motion: bool) -> String {
    let base = remove_aura(html);
    if reduced_motion {
        return base;
    }

    let blobs: String = (1..=4)
        .map(|i| format!(r#"<div class="aura-blob b{}"></div>"#, i))
        .collect();
    let aura = format!(r#"<div id="aura-bg" aria-hidden="true">{}</div>"#, blobs);

    match base.rfind("</body>") {
        Some(idx) => {
            let mut out = base;
            out.insert_str(idx, &aura);
            out
        }
        None => base + &aura,
    }
}

/// Remove an existing aura container, scanning past its nested blob divs.
fn remove_aura(html: &str) -> String {
    let Some(start) = html.find(r#"<div id="aura-bg""#) else {
        return html.to_string();
    };

    let mut depth = 0usize;
    let mut i = start;
    while i < html.len() {
        if html[i..].starts_with("<div") {
            depth += 1;
            i += 4;
        } else if html[i..].starts_with("</div>") {
            depth = depth.saturating_sub(1);
            i += 6;
            if depth == 0 {
                break;
            }
        } else {
            i += 1;
        }
    }

    format!("{}{}", &html[..start], &html[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::default()
    }

    #[test]
    fn test_set_slot_missing_is_noop() {
        let html = "<p>{{present}}</p>";

        let out = set_slot(html, "absent", "value");
        assert_eq!(out, html);

        let out = set_slot(html, "present", "value");
        assert_eq!(out, "<p>value</p>");
    }

    #[test]
    fn test_wire_profile_fills_hero_and_footer() {
        let wired = wire_profile(PAGE_TEMPLATE, &profile());

        assert!(wired.contains("Aleksa Staji"));
        assert!(wired.contains("mailto:"));
        assert!(wired.contains(&Utc::now().format("%Y").to_string()));
        assert!(!wired.contains("{{hero_name}}"));
    }

    #[test]
    fn test_strip_unreplaced_placeholders() {
        let html = "<p>{{leftover_slot}}</p><code>{{ not a slot }}</code>";

        let out = strip_unreplaced_placeholders(html);
        assert_eq!(out, "<p></p><code>{{ not a slot }}</code>");
    }

    #[test]
    fn test_aura_inserted_before_body_close() {
        let html = "<body><main></main></body>";

        let out = init_aura_background(html, false);
        assert!(out.contains(r#"<div id="aura-bg" aria-hidden="true">"#));
        assert_eq!(out.matches("aura-blob").count(), 4);
        assert!(out.find("aura-bg").unwrap() < out.find("</body>").unwrap());
    }

    #[test]
    fn test_aura_is_idempotent() {
        let html = "<body><main></main></body>";

        let once = init_aura_background(html, false);
        let twice = init_aura_background(&once, false);

        assert_eq!(once, twice);
        assert_eq!(twice.matches(r#"id="aura-bg""#).count(), 1);
    }

    #[test]
    fn test_aura_skipped_under_reduced_motion() {
        let html = "<body><main></main></body>";

        let out = init_aura_background(html, true);
        assert!(!out.contains("aura-bg"));

        // Reduced motion also removes a previously inserted instance
        let with_aura = init_aura_background(html, false);
        let removed = init_aura_background(&with_aura, true);
        assert!(!removed.contains("aura-bg"));
    }
}

// Pure formatting helpers.
// HTML escaping, relative timestamps, and topic truncation.

use chrono::{DateTime, Utc};

/// Topic badges shown per card before collapsing into a "+N" badge.
pub const MAX_TOPICS: usize = 5;

/// Escape text for insertion into HTML. Everything sourced from the API
/// (names, descriptions, topics, logins) goes through here.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format a timestamp as "N units ago", choosing the largest non-zero
/// bucket. Months and years use flat 30/365-day division; calendar
/// precision is not worth it for an "Updated ..." label.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let secs = Utc::now().signed_duration_since(*dt).num_seconds().max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    let (count, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if mins > 0 {
        (mins, "minute")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Split a topic list into the visible slice and the overflow count.
pub fn visible_topics(topics: &[String]) -> (&[String], usize) {
    let shown = topics.len().min(MAX_TOPICS);
    (&topics[..shown], topics.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_escape_html_strips_angle_brackets() {
        let escaped = escape_html("<img src=x>");

        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;img src=x&gt;");
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // Escaping & after < would double-escape the entity
        assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();

        assert_eq!(relative_time(&(now - Duration::days(90))), "3 months ago");
        assert_eq!(relative_time(&(now - Duration::days(400))), "1 year ago");
        assert_eq!(relative_time(&(now - Duration::days(1))), "1 day ago");
        assert_eq!(relative_time(&(now - Duration::hours(5))), "5 hours ago");
        assert_eq!(relative_time(&(now - Duration::minutes(1))), "1 minute ago");
    }

    #[test]
    fn test_relative_time_future_clamps_to_now() {
        let ahead = Utc::now() + Duration::hours(2);

        assert_eq!(relative_time(&ahead), "0 seconds ago");
    }

    #[test]
    fn test_visible_topics_truncation() {
        let topics: Vec<String> = (0..7).map(|i| format!("t{}", i)).collect();

        let (shown, extra) = visible_topics(&topics);
        assert_eq!(shown.len(), 5);
        assert_eq!(extra, 2);

        let few: Vec<String> = vec!["a".to_string()];
        let (shown, extra) = visible_topics(&few);
        assert_eq!(shown.len(), 1);
        assert_eq!(extra, 0);
    }
}

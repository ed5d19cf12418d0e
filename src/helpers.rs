//! Text and URL parsing helpers shared across the pipeline:
//! episode/season number extraction, duration badges, URL normalization and
//! id derivation.

use regex::Regex;

/// Collapse runs of whitespace and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract an explicit episode number from the given sources, in priority
/// order. Patterns mirror what the source platform actually renders: title
/// markers first, then URL slug forms. Values outside 1..1000 are noise.
pub fn extract_episode_number(sources: &[&str]) -> Option<u32> {
    let patterns = [
        r"(?i)(?:Episode|Ep|E)\s*(\d+)",
        r"(?i)episode[-_]?(\d+)",
        r"(?i)\bep(\d+)",
        r"(?i)S\d+\s*E(\d+)",
        r"/(\d+)(?:/|$|\?|-)",
    ];
    let compiled: Vec<Regex> = patterns
        .iter()
        .map(|p| Regex::new(p).expect("episode number pattern"))
        .collect();

    for source in sources {
        for re in &compiled {
            if let Some(caps) = re.captures(source) {
                if let Ok(n) = caps[1].parse::<u32>() {
                    if (1..1000).contains(&n) {
                        return Some(n);
                    }
                }
            }
        }
    }
    None
}

/// Extract a season hint from text ("Season 2", "Saison 2", "S2").
///
/// Used for diagnostics only: pass order is authoritative for the season
/// field, because on-page hints disagree with navigation state on
/// multi-season pages.
pub fn extract_season_hint(text: &str) -> Option<u32> {
    let patterns = [
        r"(?i)Saison\s*(\d+)",
        r"(?i)Season\s*(\d+)",
        r"(?i)\bS(\d+)\b",
    ];
    for pattern in patterns {
        let re = Regex::new(pattern).expect("season hint pattern");
        if let Some(caps) = re.captures(text) {
            if let Ok(n) = caps[1].parse::<u32>() {
                if (1..=20).contains(&n) {
                    return Some(n);
                }
            }
        }
    }
    None
}

/// Find a duration badge ("23m", "24 m") in the given sources.
pub fn extract_duration(sources: &[&str]) -> Option<String> {
    let re = Regex::new(r"(\d+)\s*m\b").expect("duration pattern");
    for source in sources {
        if let Some(caps) = re.captures(source) {
            return Some(format!("{}m", &caps[1]));
        }
    }
    None
}

/// Resolve a possibly-relative href against the platform base URL.
pub fn normalize_url(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href)
    }
}

/// Derive the unique episode id from a watch URL: the id segment after
/// `/watch/`, or the whole URL when the segment is absent.
pub fn episode_id_from_url(url: &str) -> String {
    url.split("/watch/")
        .nth(1)
        .and_then(|rest| rest.split('/').next())
        .filter(|id| !id.is_empty())
        .map(|id| id.split('?').next().unwrap_or(id).to_string())
        .unwrap_or_else(|| url.to_string())
}

/// Build a readable title from a watch URL slug: dashes to spaces, words
/// capitalized. Returns `None` when the URL has no slug segment.
pub fn title_from_url_slug(url: &str) -> Option<String> {
    let slug = url
        .split("/watch/")
        .nth(1)?
        .split('/')
        .nth(1)?
        .split('?')
        .next()?;
    if slug.is_empty() {
        return None;
    }
    let title = slug
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(title)
}

//! Screen size breakpoints for `screen` conditions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Mobile,
        Breakpoint::Tablet,
        Breakpoint::Desktop,
        Breakpoint::Wide,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Wide => "wide",
        }
    }

    pub fn media_query(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "(max-width: 767px)",
            Breakpoint::Tablet => "(min-width: 768px) and (max-width: 1023px)",
            Breakpoint::Desktop => "(min-width: 1024px) and (max-width: 1279px)",
            Breakpoint::Wide => "(min-width: 1280px)",
        }
    }
}

const QUERY_SEPARATOR: &str = ", ";

/// Media query matching any of `breakpoints`, in canonical order
pub fn media_query_for(breakpoints: &[Breakpoint]) -> String {
    Breakpoint::ALL
        .iter()
        .filter(|bp| breakpoints.contains(*bp))
        .map(|bp| bp.media_query())
        .collect::<Vec<_>>()
        .join(QUERY_SEPARATOR)
}

/// Breakpoints a media query was built from. `None` for hand-written queries.
pub fn breakpoints_for(media_query: &str) -> Option<Vec<Breakpoint>> {
    let query = media_query.trim();
    if query.is_empty() {
        return Some(Vec::new());
    }
    query
        .split(QUERY_SEPARATOR)
        .map(|part| {
            Breakpoint::ALL
                .into_iter()
                .find(|bp| bp.media_query() == part.trim())
        })
        .collect()
}

/// Adds or removes one breakpoint from a media query built by [`media_query_for`]
pub fn toggle_breakpoint(media_query: &str, breakpoint: Breakpoint, enabled: bool) -> String {
    let mut current = breakpoints_for(media_query).unwrap_or_default();
    current.retain(|bp| *bp != breakpoint);
    if enabled {
        current.push(breakpoint);
    }
    media_query_for(&current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_canonical() {
        assert_eq!(
            media_query_for(&[Breakpoint::Wide, Breakpoint::Mobile]),
            "(max-width: 767px), (min-width: 1280px)"
        );
        assert_eq!(media_query_for(&[]), "");
    }

    #[test]
    fn test_breakpoints_roundtrip() {
        let query = media_query_for(&[Breakpoint::Tablet, Breakpoint::Desktop]);
        assert_eq!(
            breakpoints_for(&query),
            Some(vec![Breakpoint::Tablet, Breakpoint::Desktop])
        );
    }

    #[test]
    fn test_custom_query_is_not_breakpoints() {
        assert_eq!(breakpoints_for("(orientation: portrait)"), None);
        assert_eq!(breakpoints_for(""), Some(vec![]));
    }

    #[test]
    fn test_toggle_breakpoint() {
        let query = toggle_breakpoint("", Breakpoint::Wide, true);
        let query = toggle_breakpoint(&query, Breakpoint::Mobile, true);
        assert_eq!(query, "(max-width: 767px), (min-width: 1280px)");
        assert_eq!(
            toggle_breakpoint(&query, Breakpoint::Wide, false),
            "(max-width: 767px)"
        );
    }
}

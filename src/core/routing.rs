//! Legacy URL handling and in-page section anchors.

use tracing::info;

/// Exact paths from the old static site that now live on the root page
const LEGACY_EXACT: &[&str] = &["/About.html", "/index.html"];
/// Path prefixes from old landing pages and the previous site tree
const LEGACY_PREFIXES: &[&str] = &["/HIL/", "/lander"];

/// Anchored sections of the page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Services,
    About,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Faq,
        Section::Contact,
    ];

    /// Fragment used in links (`#services`)
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::About => "About",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.anchor().eq_ignore_ascii_case(anchor))
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where a requested location ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Path after any legacy redirect
    pub path: String,
    /// Whether a legacy redirect replaced the path
    pub redirected: bool,
    /// Section named by the fragment, if any
    pub section: Option<Section>,
}

/// Split `/path?query#fragment` into (path, fragment)
fn split_location(location: &str) -> (&str, Option<&str>) {
    let (rest, fragment) = match location.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (location, None),
    };
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    (path, fragment)
}

/// Target of a legacy redirect for `location`, or `None` to stay put
pub fn legacy_redirect(location: &str) -> Option<&'static str> {
    let (path, _) = split_location(location);
    if path.is_empty() || path == "/" {
        return None;
    }
    let legacy = LEGACY_EXACT.contains(&path)
        || LEGACY_PREFIXES.iter().any(|prefix| path.starts_with(prefix));
    legacy.then_some("/")
}

/// Apply legacy redirection and pick the section named by the fragment
pub fn resolve(location: &str) -> Resolved {
    let (path, fragment) = split_location(location);
    let section = fragment.and_then(Section::from_anchor);

    match legacy_redirect(location) {
        Some(target) => {
            info!("Redirecting legacy path {} to {}", path, target);
            Resolved {
                path: target.to_string(),
                redirected: true,
                section,
            }
        }
        None => Resolved {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            redirected: false,
            section,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_paths_redirect_to_root() {
        for path in ["/About.html", "/index.html", "/HIL/x", "/lander?utm=1", "/lander"] {
            assert_eq!(legacy_redirect(path), Some("/"), "{path}");
        }
    }

    #[test]
    fn test_current_paths_stay() {
        for path in ["/", "", "/#services", "/services", "/about.html", "/HIL"] {
            assert_eq!(legacy_redirect(path), None, "{path}");
        }
    }

    #[test]
    fn test_resolve_keeps_fragment_section() {
        let resolved = resolve("/index.html#contact");
        assert!(resolved.redirected);
        assert_eq!(resolved.path, "/");
        assert_eq!(resolved.section, Some(Section::Contact));

        let resolved = resolve("/#faq");
        assert!(!resolved.redirected);
        assert_eq!(resolved.section, Some(Section::Faq));
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.prev(), Section::Contact);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::from_anchor("Services"), Some(Section::Services));
    }
}

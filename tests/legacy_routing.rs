//! Integration tests for legacy URL redirection and section anchors.

use happyvisit::core::routing::{legacy_redirect, resolve, Section};

#[test]
fn old_site_paths_land_on_root() {
    for location in [
        "/About.html",
        "/index.html",
        "/HIL/",
        "/HIL/services/nursing.html",
        "/lander",
        "/lander/spring-promo",
        "/lander?utm_source=mail",
        "/index.html?ref=card#contact",
    ] {
        assert_eq!(legacy_redirect(location), Some("/"), "{location}");
    }
}

#[test]
fn root_and_current_paths_are_never_redirected() {
    for location in ["/", "", "/?q=1", "/#services", "/privacy", "/HIL", "/about.html"] {
        assert_eq!(legacy_redirect(location), None, "{location}");
    }
}

#[test]
fn resolve_reports_redirect_and_section() {
    let resolved = resolve("/About.html#about");
    assert_eq!(resolved.path, "/");
    assert!(resolved.redirected);
    assert_eq!(resolved.section, Some(Section::About));

    let resolved = resolve("/lander?x=1");
    assert!(resolved.redirected);
    assert_eq!(resolved.section, None);
}

#[test]
fn unknown_fragment_selects_no_section() {
    let resolved = resolve("/#pricing");
    assert!(!resolved.redirected);
    assert_eq!(resolved.path, "/");
    assert_eq!(resolved.section, None);
}

#[test]
fn every_section_round_trips_through_its_anchor() {
    for section in Section::ALL {
        let location = format!("/#{}", section.anchor());
        assert_eq!(resolve(&location).section, Some(section), "{location}");
    }
}

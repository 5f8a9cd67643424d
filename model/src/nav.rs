//! Decisions for same-page anchors and the collapsible mobile menu.
//!
//! Closing the menu is always done by activating the toggle control, the
//! same action that opened it; these helpers only decide *whether* to.

/// Selector for the element an `href` points at, if it is a same-page
/// fragment with a non-empty id (`"#about"` -> `"#about"`).
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Where a click landed relative to the menu controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSite {
    /// A navigation link inside the menu panel.
    NavLink,
    /// Inside the toggle or the panel, but not on a link.
    Menu,
    /// Anywhere else in the document.
    Outside,
}

/// Should the toggle be activated for a click at `site`?
/// Never when the panel is already closed.
pub fn should_close(panel_open: bool, site: ClickSite) -> bool {
    panel_open && matches!(site, ClickSite::NavLink | ClickSite::Outside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("#about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/page#about"), None);
    }

    #[test]
    fn test_open_menu_closes_on_link_or_outside() {
        assert!(should_close(true, ClickSite::NavLink));
        assert!(should_close(true, ClickSite::Outside));
        assert!(!should_close(true, ClickSite::Menu));
    }

    #[test]
    fn test_closed_menu_is_left_alone() {
        assert!(!should_close(false, ClickSite::NavLink));
        assert!(!should_close(false, ClickSite::Outside));
        assert!(!should_close(false, ClickSite::Menu));
    }
}

//! Views and the route guard.
//!
//! The only access-control rule in the system: protected views require an
//! authenticated session, otherwise the caller is sent to the login view.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A navigable view of the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum View {
    Home,
    Discover,
    Login,
    Signup,
    Booking,
    CreativeDashboard,
    BookerDashboard,
}

impl View {
    /// Page the view is served from.
    pub fn page(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Discover => "discover.html",
            Self::Login => "login.html",
            Self::Signup => "signup.html",
            Self::Booking => "booking.html",
            Self::CreativeDashboard => "dashboard-creative.html",
            Self::BookerDashboard => "dashboard-booker.html",
        }
    }

    /// Looks a view up by its page file name.
    pub fn from_page(page: &str) -> Option<Self> {
        Self::iter().find(|view| view.page() == page)
    }
}

/// Outcome of entering a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(View),
}

/// Holds the set of protected views.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    protected: Vec<View>,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new([View::CreativeDashboard, View::BookerDashboard])
    }
}

impl RouteGuard {
    pub fn new(protected: impl IntoIterator<Item = View>) -> Self {
        Self {
            protected: protected.into_iter().collect(),
        }
    }

    pub fn is_protected(&self, view: View) -> bool {
        self.protected.contains(&view)
    }

    /// Decides whether `view` may be entered.
    pub fn check(&self, view: View, authenticated: bool) -> RouteDecision {
        if self.is_protected(view) && !authenticated {
            RouteDecision::Redirect(View::Login)
        } else {
            RouteDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_dashboards_redirect_when_anonymous() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.check(View::CreativeDashboard, false),
            RouteDecision::Redirect(View::Login)
        );
        assert_eq!(
            guard.check(View::BookerDashboard, false),
            RouteDecision::Redirect(View::Login)
        );
        assert_eq!(
            guard.check(View::BookerDashboard, true),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_public_views_always_allowed() {
        let guard = RouteGuard::default();
        for view in [View::Home, View::Discover, View::Login, View::Signup, View::Booking] {
            assert_eq!(guard.check(view, false), RouteDecision::Allow);
        }
    }

    #[test]
    fn test_page_lookup() {
        assert_eq!(
            View::from_page("dashboard-creative.html"),
            Some(View::CreativeDashboard)
        );
        assert_eq!(View::from_page("missing.html"), None);
        assert_eq!(View::from_str("booker-dashboard").unwrap(), View::BookerDashboard);
    }
}

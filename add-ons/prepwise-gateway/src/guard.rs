//! Entry routing guard: the check-then-branch executed once per entry request.

use serde::Serialize;

/// Where the client should route the user after the entry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTarget {
    Login,
    Onboarding,
    Dashboard,
}

/// No user → login. A user without a saved strategy → onboarding. Otherwise
/// the dashboard.
pub fn entry_target(user: Option<&str>, has_strategy: bool) -> EntryTarget {
    match user {
        None => EntryTarget::Login,
        Some(_) if !has_strategy => EntryTarget::Onboarding,
        Some(_) => EntryTarget::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_goes_to_login() {
        assert_eq!(entry_target(None, false), EntryTarget::Login);
        // A stale strategy without a user still routes to login.
        assert_eq!(entry_target(None, true), EntryTarget::Login);
    }

    #[test]
    fn user_without_strategy_goes_to_onboarding() {
        assert_eq!(entry_target(Some("student-1"), false), EntryTarget::Onboarding);
    }

    #[test]
    fn user_with_strategy_goes_to_dashboard() {
        assert_eq!(entry_target(Some("student-1"), true), EntryTarget::Dashboard);
    }
}

//! Route gating driven by the session.
//!
//! The check is level-triggered: it runs again on every path, profile and
//! loading change, and always answers from the current values only.

use crate::state::Profile;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const SETUP: &str = "/setup";

const EXEMPT: [&str; 2] = [LOGIN, REGISTER];

/// Where the user must be sent, if anywhere.
pub fn redirect(profile: Option<&Profile>, loading: bool, path: &str) -> Option<&'static str> {
    if loading || EXEMPT.contains(&path) {
        return None;
    }
    match profile {
        None => Some(LOGIN),
        Some(profile) if !profile.is_configured() && path != SETUP => Some(SETUP),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::profile;

    const PATHS: [&str; 8] = [
        "/",
        "/settings",
        "/generations",
        "/generate/video-script",
        "/generate/content-idea",
        "/generate/newsletter",
        "/generate/thread",
        "/setup",
    ];

    #[test]
    fn test_loading_is_inert() {
        for path in PATHS {
            assert_eq!(redirect(None, true, path), None);
            assert_eq!(redirect(Some(&profile("", "")), true, path), None);
        }
    }

    #[test]
    fn test_unauthenticated() {
        for path in PATHS {
            assert_eq!(redirect(None, false, path), Some(LOGIN), "{path}");
        }
        assert_eq!(redirect(None, false, LOGIN), None);
        assert_eq!(redirect(None, false, REGISTER), None);
    }

    #[test]
    fn test_incomplete_profile() {
        for profile in [profile("", "devs"), profile("videos", " "), profile("\t", "")] {
            for path in PATHS.iter().filter(|path| **path != SETUP) {
                assert_eq!(redirect(Some(&profile), false, path), Some(SETUP), "{path}");
            }
            assert_eq!(redirect(Some(&profile), false, SETUP), None);
            assert_eq!(redirect(Some(&profile), false, LOGIN), None);
            assert_eq!(redirect(Some(&profile), false, REGISTER), None);
        }
    }

    #[test]
    fn test_complete_profile() {
        let profile = profile("tutoriales", "estudiantes");
        for path in PATHS {
            assert_eq!(redirect(Some(&profile), false, path), None);
        }
    }
}

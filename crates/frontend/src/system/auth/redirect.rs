//! Login-route redirect codec. The explicit logout and the 401 teardown
//! both encode the interrupted location the same way, so the login flow can
//! put the user back exactly where they were.

use std::collections::HashMap;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";
pub const REDIRECT_PARAM: &str = "redirect";

/// True for the login route itself, with or without a query string.
pub fn is_login_path(path: &str) -> bool {
    path.starts_with(LOGIN_PATH)
}

/// Build the login URL carrying the interrupted location. The root and the
/// login route itself are not worth remembering.
pub fn login_url(current: &str) -> String {
    if current.is_empty() || current == ROOT_PATH || is_login_path(current) {
        return LOGIN_PATH.to_string();
    }
    format!(
        "{}?{}={}",
        LOGIN_PATH,
        REDIRECT_PARAM,
        urlencoding::encode(current)
    )
}

/// Decode the `redirect` parameter out of a query string (with or without
/// the leading `?`). Only same-site paths are honored, so the parameter
/// cannot send the user off-site.
pub fn redirect_target(search: &str) -> Option<String> {
    let query_string = search.trim_start_matches('?');
    let params: HashMap<String, String> = serde_qs::from_str(query_string).ok()?;
    let target = params.get(REDIRECT_PARAM)?.clone();
    if target.starts_with('/') && !target.starts_with("//") {
        Some(target)
    } else {
        None
    }
}

/// Where to land after a successful login.
pub fn post_login_destination(search: &str) -> String {
    redirect_target(search).unwrap_or_else(|| ROOT_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_location_is_encoded_into_the_login_url() {
        assert_eq!(
            login_url("/product/42?edit=true"),
            "/login?redirect=%2Fproduct%2F42%3Fedit%3Dtrue"
        );
    }

    #[test]
    fn trivial_locations_yield_a_bare_login_url() {
        assert_eq!(login_url("/"), "/login");
        assert_eq!(login_url(""), "/login");
        assert_eq!(login_url("/login?redirect=%2Fx"), "/login");
    }

    #[test]
    fn login_path_detection_covers_the_query_form() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login?redirect=%2Fstaff"));
        assert!(!is_login_path("/product/42"));
    }

    #[test]
    fn the_redirect_parameter_round_trips() {
        let original = "/product/42?edit=true";
        let url = login_url(original);
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        assert_eq!(redirect_target(query).as_deref(), Some(original));
    }

    #[test]
    fn decoding_tolerates_extra_parameters() {
        assert_eq!(
            redirect_target("?from=menu&redirect=%2Fretailers%3Fpage%3D2"),
            Some("/retailers?page=2".to_string())
        );
    }

    #[test]
    fn off_site_targets_are_rejected() {
        assert_eq!(redirect_target("?redirect=https%3A%2F%2Fevil.example"), None);
        assert_eq!(redirect_target("?redirect=%2F%2Fevil.example"), None);
        assert_eq!(redirect_target("?redirect="), None);
    }

    #[test]
    fn missing_parameter_falls_back_to_root() {
        assert_eq!(post_login_destination(""), "/");
        assert_eq!(post_login_destination("?foo=bar"), "/");
        assert_eq!(post_login_destination("?redirect=%2Fstaff"), "/staff");
    }
}

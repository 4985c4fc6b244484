//! Request path construction from an endpoint template and user input.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::data::{Param, ParamLocation};

/// Characters kept verbatim by `encodeURIComponent`, which is what the API
/// expects for query values.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the concrete request path for `template` from the current inputs.
///
/// Path parameters substitute their `{name}` placeholder when the input is
/// non-empty; an empty input leaves the literal placeholder in place. Query
/// parameters with non-empty input are appended percent-encoded behind a
/// single `?`, joined with `&`; empty ones are skipped entirely.
pub fn build_path(
    template: &str,
    params: &[Param],
    values: &BTreeMap<&'static str, String>,
) -> String {
    let mut path = template.to_string();

    for param in params
        .iter()
        .filter(|p| p.location == ParamLocation::Path)
    {
        if let Some(value) = values.get(param.name).filter(|v| !v.is_empty()) {
            path = path.replace(&format!("{{{}}}", param.name), value);
        }
    }

    let query: Vec<String> = params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
        .filter_map(|p| {
            values
                .get(p.name)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", p.name, utf8_percent_encode(v, COMPONENT)))
        })
        .collect();

    if !query.is_empty() {
        path.push('?');
        path.push_str(&query.join("&"));
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_param(name: &'static str) -> Param {
        Param {
            name,
            location: ParamLocation::Path,
            placeholder: "",
            required: true,
        }
    }

    fn query_param(name: &'static str) -> Param {
        Param {
            name,
            location: ParamLocation::Query,
            placeholder: "",
            required: false,
        }
    }

    fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_path_param_substitution() {
        let params = [path_param("slug")];
        let built = build_path(
            "/api/v1/komiku/manga/{slug}",
            &params,
            &values(&[("slug", "one-piece")]),
        );
        assert_eq!(built, "/api/v1/komiku/manga/one-piece");
    }

    #[test]
    fn test_unfilled_path_param_keeps_placeholder() {
        let params = [path_param("slug")];
        let built = build_path("/api/v1/komiku/manga/{slug}", &params, &BTreeMap::new());
        assert_eq!(built, "/api/v1/komiku/manga/{slug}");

        // An empty string counts as unfilled.
        let built = build_path(
            "/api/v1/komiku/manga/{slug}",
            &params,
            &values(&[("slug", "")]),
        );
        assert_eq!(built, "/api/v1/komiku/manga/{slug}");
    }

    #[test]
    fn test_query_param_appended() {
        let params = [query_param("q")];
        let built = build_path(
            "/api/v1/komiku/search",
            &params,
            &values(&[("q", "naruto")]),
        );
        assert_eq!(built, "/api/v1/komiku/search?q=naruto");
    }

    #[test]
    fn test_empty_query_params_are_skipped() {
        let params = [query_param("q"), query_param("page")];
        let built = build_path(
            "/api/v1/komiku/search",
            &params,
            &values(&[("q", ""), ("page", "2")]),
        );
        assert_eq!(built, "/api/v1/komiku/search?page=2");

        let built = build_path("/api/v1/komiku/search", &params, &BTreeMap::new());
        assert_eq!(built, "/api/v1/komiku/search");
    }

    #[test]
    fn test_multiple_query_params_joined_with_ampersand() {
        let params = [query_param("q"), query_param("page")];
        let built = build_path(
            "/api/v1/komiku/search",
            &params,
            &values(&[("q", "naruto"), ("page", "2")]),
        );
        assert_eq!(built, "/api/v1/komiku/search?q=naruto&page=2");
    }

    #[test]
    fn test_query_values_are_component_encoded() {
        let params = [query_param("q")];
        let built = build_path(
            "/api/v1/komiku/search",
            &params,
            &values(&[("q", "one piece & friends")]),
        );
        assert_eq!(
            built,
            "/api/v1/komiku/search?q=one%20piece%20%26%20friends"
        );

        // encodeURIComponent keeps these unreserved marks.
        let built = build_path(
            "/api/v1/komiku/search",
            &params,
            &values(&[("q", "a-b_c.d!e~f*g'h(i)j")]),
        );
        assert_eq!(built, "/api/v1/komiku/search?q=a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_mixed_path_and_query_params() {
        let params = [path_param("slug"), query_param("lang")];
        let built = build_path(
            "/api/v1/winbu/detail/{slug}",
            &params,
            &values(&[("slug", "jujutsu-kaisen-season-2"), ("lang", "id")]),
        );
        assert_eq!(built, "/api/v1/winbu/detail/jujutsu-kaisen-season-2?lang=id");
    }
}

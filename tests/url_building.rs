//! URL construction exercised against the documented endpoint registry.

use std::collections::BTreeMap;

use manga_api_explorer::api::build_path;
use manga_api_explorer::config::ApiConfig;
use manga_api_explorer::data::{endpoint_sections, ParamLocation};

fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

fn find_endpoint(path: &str) -> manga_api_explorer::data::Endpoint {
    endpoint_sections()
        .into_iter()
        .flat_map(|s| s.items)
        .find(|e| e.path == path)
        .expect("endpoint in registry")
}

#[test]
fn manga_detail_substitutes_the_slug() {
    let endpoint = find_endpoint("/api/v1/komiku/manga/{slug}");
    let built = build_path(
        endpoint.path,
        &endpoint.params,
        &values(&[("slug", "one-piece")]),
    );
    assert_eq!(built, "/api/v1/komiku/manga/one-piece");
}

#[test]
fn search_appends_the_query() {
    let endpoint = find_endpoint("/api/v1/komiku/search");
    let built = build_path(endpoint.path, &endpoint.params, &values(&[("q", "naruto")]));
    assert_eq!(built, "/api/v1/komiku/search?q=naruto");
}

#[test]
fn unfilled_path_params_keep_their_placeholder() {
    let endpoint = find_endpoint("/api/v1/winbu/episode/{slug}");
    let built = build_path(endpoint.path, &endpoint.params, &BTreeMap::new());
    assert_eq!(built, "/api/v1/winbu/episode/{slug}");
}

#[test]
fn every_registry_endpoint_builds_placeholder_free_when_filled() {
    for section in endpoint_sections() {
        for endpoint in section.items {
            let filled: BTreeMap<&'static str, String> = endpoint
                .params
                .iter()
                .map(|p| (p.name, "sample-value".to_string()))
                .collect();
            let built = build_path(endpoint.path, &endpoint.params, &filled);
            assert!(
                !built.contains('{') && !built.contains('}'),
                "{} still has placeholder syntax: {}",
                endpoint.path,
                built
            );

            for param in endpoint
                .params
                .iter()
                .filter(|p| p.location == ParamLocation::Query)
            {
                assert!(built.contains(&format!("{}=sample-value", param.name)));
            }
        }
    }
}

#[test]
fn request_urls_target_the_configured_base() {
    let config = ApiConfig::default();
    let endpoint = find_endpoint("/api/v1/winbu/detail/{slug}");
    let built = build_path(
        endpoint.path,
        &endpoint.params,
        &values(&[("slug", "jujutsu-kaisen-season-2")]),
    );
    assert_eq!(
        config.request_url(&built),
        "http://localhost:3000/api/v1/winbu/detail/jujutsu-kaisen-season-2"
    );
}

//! Static catalog data: the endpoint registry rendered on the home page and
//! the showcase lists for the browse page. Authored by hand, never mutated
//! at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub location: ParamLocation,
    pub placeholder: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: &'static str,
    /// Path template; path parameters appear as `{name}`.
    pub path: &'static str,
    pub description: &'static str,
    pub params: Vec<Param>,
}

pub struct EndpointSection {
    pub category: &'static str,
    pub badge: &'static str,
    /// Tailwind gradient stops for the section heading and badge.
    pub accent: &'static str,
    pub items: Vec<Endpoint>,
}

pub fn endpoint_sections() -> Vec<EndpointSection> {
    vec![
        EndpointSection {
            category: "Komiku (Manga)",
            badge: "MANGA",
            accent: "from-yellow-500 to-orange-600",
            items: vec![
                Endpoint {
                    method: "GET",
                    path: "/api/v1/komiku/home",
                    description: "Latest & popular manga",
                    params: vec![],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/komiku/search",
                    description: "Search manga by keyword",
                    params: vec![Param {
                        name: "q",
                        location: ParamLocation::Query,
                        placeholder: "e.g. naruto",
                        required: true,
                    }],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/komiku/manga/{slug}",
                    description: "Manga detail + chapter list",
                    params: vec![Param {
                        name: "slug",
                        location: ParamLocation::Path,
                        placeholder: "e.g. one-piece",
                        required: true,
                    }],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/komiku/chapter/{slug}",
                    description: "Page images for one chapter",
                    params: vec![Param {
                        name: "slug",
                        location: ParamLocation::Path,
                        placeholder: "e.g. one-piece-chapter-1",
                        required: true,
                    }],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/komiku/genres",
                    description: "All manga genres",
                    params: vec![],
                },
            ],
        },
        EndpointSection {
            category: "Winbu (Anime)",
            badge: "ANIME",
            accent: "from-blue-500 to-purple-600",
            items: vec![
                Endpoint {
                    method: "GET",
                    path: "/api/v1/winbu/home",
                    description: "Top series, latest anime, movies",
                    params: vec![],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/winbu/search",
                    description: "Search anime/drama by keyword",
                    params: vec![Param {
                        name: "q",
                        location: ParamLocation::Query,
                        placeholder: "e.g. jujutsu",
                        required: true,
                    }],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/winbu/detail/{slug}",
                    description: "Anime detail + episode list",
                    params: vec![Param {
                        name: "slug",
                        location: ParamLocation::Path,
                        placeholder: "e.g. jujutsu-kaisen-season-2",
                        required: true,
                    }],
                },
                Endpoint {
                    method: "GET",
                    path: "/api/v1/winbu/episode/{slug}",
                    description: "Stream URLs + episode navigation",
                    params: vec![Param {
                        name: "slug",
                        location: ParamLocation::Path,
                        placeholder: "e.g. jujutsu-kaisen-s2-episode-1",
                        required: true,
                    }],
                },
            ],
        },
    ]
}

/// One entry of the hero carousel.
#[derive(Debug, Clone)]
pub struct SlideItem {
    pub title: &'static str,
    pub thumb: &'static str,
    pub rating: Option<&'static str>,
    pub status: Option<&'static str>,
    pub kind: Option<&'static str>,
    pub endpoint: &'static str,
}

/// One entry of the showcase grid.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub title: &'static str,
    pub thumb: &'static str,
    pub endpoint: &'static str,
    pub rating: Option<&'static str>,
    pub episode: Option<&'static str>,
    pub kind: Option<&'static str>,
}

pub fn featured_slides() -> Vec<SlideItem> {
    vec![
        SlideItem {
            title: "Jujutsu Kaisen Season 2",
            thumb: "https://thumbnail.winbu.net/jujutsu-kaisen-season-2.jpg",
            rating: Some("8.8"),
            status: Some("Ongoing"),
            kind: Some("Anime"),
            endpoint: "jujutsu-kaisen-season-2/",
        },
        SlideItem {
            title: "One Piece",
            thumb: "https://thumbnail.komiku.id/one-piece.jpg",
            rating: Some("9.1"),
            status: Some("Ongoing"),
            kind: Some("Manga"),
            endpoint: "one-piece",
        },
        SlideItem {
            title: "Frieren: Beyond Journey's End",
            thumb: "https://thumbnail.winbu.net/sousou-no-frieren.jpg",
            rating: Some("9.0"),
            status: None,
            kind: Some("Anime"),
            endpoint: "sousou-no-frieren",
        },
    ]
}

pub fn showcase_cards() -> Vec<CardItem> {
    vec![
        CardItem {
            title: "Jujutsu Kaisen Season 2",
            thumb: "https://thumbnail.winbu.net/jujutsu-kaisen-season-2.jpg",
            endpoint: "jujutsu-kaisen-season-2",
            rating: Some("8.8"),
            episode: Some("Episode 23"),
            kind: Some("Anime"),
        },
        CardItem {
            title: "One Piece",
            thumb: "https://thumbnail.komiku.id/one-piece.jpg",
            endpoint: "one-piece",
            rating: Some("9.1"),
            episode: Some("Chapter 1101"),
            kind: Some("Manga"),
        },
        CardItem {
            title: "Frieren: Beyond Journey's End",
            thumb: "https://thumbnail.winbu.net/sousou-no-frieren.jpg",
            endpoint: "sousou-no-frieren",
            rating: Some("9.0"),
            episode: Some("Episode 28"),
            kind: Some("Anime"),
        },
        CardItem {
            title: "Kimetsu no Yaiba",
            thumb: "https://thumbnail.winbu.net/kimetsu-no-yaiba.jpg",
            endpoint: "kimetsu-no-yaiba",
            rating: Some("8.6"),
            episode: Some("Episode 11"),
            kind: Some("Anime"),
        },
        CardItem {
            title: "Solo Leveling",
            thumb: "https://thumbnail.komiku.id/solo-leveling.jpg",
            endpoint: "solo-leveling",
            rating: None,
            episode: Some("Chapter 179"),
            kind: Some("Manga"),
        },
        CardItem {
            title: "Spy x Family",
            thumb: "https://thumbnail.winbu.net/spy-x-family.jpg",
            endpoint: "spy-x-family",
            rating: Some("8.5"),
            episode: None,
            kind: Some("Anime"),
        },
    ]
}

/// Route for the (externally served) detail page. Scraped endpoints carry at
/// most one trailing slash; the route does not.
pub fn detail_href(endpoint: &str) -> String {
    let slug = endpoint.strip_suffix('/').unwrap_or(endpoint);
    format!("/detail/{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(path: &str) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let end = after.find('}').expect("unclosed placeholder");
            names.push(&after[..end]);
            rest = &after[end + 1..];
        }
        names
    }

    #[test]
    fn test_every_path_param_has_a_placeholder() {
        for section in endpoint_sections() {
            for endpoint in &section.items {
                for param in endpoint
                    .params
                    .iter()
                    .filter(|p| p.location == ParamLocation::Path)
                {
                    assert!(
                        endpoint.path.contains(&format!("{{{}}}", param.name)),
                        "{} is missing {{{}}}",
                        endpoint.path,
                        param.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_placeholder_has_a_path_param() {
        for section in endpoint_sections() {
            for endpoint in &section.items {
                for name in placeholders(endpoint.path) {
                    assert!(
                        endpoint
                            .params
                            .iter()
                            .any(|p| p.location == ParamLocation::Path && p.name == name),
                        "{} declares no param for {{{name}}}",
                        endpoint.path
                    );
                }
            }
        }
    }

    #[test]
    fn test_registry_is_get_only() {
        for section in endpoint_sections() {
            for endpoint in &section.items {
                assert_eq!(endpoint.method, "GET");
            }
        }
    }

    #[test]
    fn test_showcase_slugs_are_lowercase_dashed() {
        for slide in featured_slides() {
            let slug = slide.endpoint.trim_end_matches('/');
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_detail_href_strips_one_trailing_slash() {
        assert_eq!(
            detail_href("jujutsu-kaisen-season-2/"),
            "/detail/jujutsu-kaisen-season-2"
        );
        assert_eq!(detail_href("one-piece"), "/detail/one-piece");
    }
}

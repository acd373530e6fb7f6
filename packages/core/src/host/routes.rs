// Route → title mapping
// Routes are tried in declaration order and the first match wins. A
// non-exact route matches its own path and anything below it on a segment
// boundary (`/settings` matches `/settings/profile` but not
// `/settingsfoo`). Matching ignores ASCII case, trailing slashes, and any
// query string or fragment.

use serde::{Deserialize, Serialize};

/// Resolves the title a view at `path` should show
pub trait RouteTitles {
    fn title_for(&self, path: &str) -> Option<String>;
}

/// A single route entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub title: String,
    /// Match only this path, not paths below it
    #[serde(default)]
    pub exact: bool,
}

impl Route {
    pub fn matches(&self, path: &str) -> bool {
        let pattern = normalize(&self.path);
        let path = normalize(path);

        if self.exact {
            return pattern.eq_ignore_ascii_case(path);
        }
        if pattern == "/" {
            return true;
        }
        match path.get(..pattern.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(pattern) => {
                let rest = &path[pattern.len()..];
                rest.is_empty() || rest.starts_with('/')
            }
            _ => false,
        }
    }
}

/// Ordered route table with an optional fallback title
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix-matching route
    pub fn route(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.routes.push(Route {
            path: path.into(),
            title: title.into(),
            exact: false,
        });
        self
    }

    /// Add a route that matches only its own path
    pub fn exact_route(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.routes.push(Route {
            path: path.into(),
            title: title.into(),
            exact: true,
        });
        self
    }

    /// Title used when no route matches
    pub fn fallback(mut self, title: impl Into<String>) -> Self {
        self.fallback = Some(title.into());
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl RouteTitles for RouteTable {
    fn title_for(&self, path: &str) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .map(|route| route.title.clone())
            .or_else(|| self.fallback.clone())
    }
}

impl<F> RouteTitles for F
where
    F: Fn(&str) -> Option<String>,
{
    fn title_for(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// Whether two paths name the same route location under route matching rules
pub(crate) fn same_path(a: &str, b: &str) -> bool {
    normalize(a).eq_ignore_ascii_case(normalize(b))
}

pub(crate) fn normalize(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

//! Static route table of the wallets frontend.
//!
//! Both views are empty placeholders. The table exists so callers can get at the
//! url context, most notably the query string a payment provider appends when it
//! redirects back to `/payment-success`.

use std::fmt::Display;

use url::form_urlencoded;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    PaymentSuccess,
}

impl View {
    /// Markup rendered for the view.
    pub fn placeholder(&self) -> &'static str {
        "<div />"
    }
}

impl Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::PaymentSuccess => write!(f, "payment-success"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

impl Route {
    pub const fn new(path: &'static str, view: View) -> Self {
        Self { path, view }
    }
}

/// A resolved request: which view matched and the url it was reached with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteContext {
    pub view: View,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RouteContext {
    /// First value of the query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route::new("/", View::Home),
            Route::new("/payment-success", View::PaymentSuccess),
        ])
    }
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a request target such as `/payment-success?token=abc`.
    ///
    /// A trailing slash is ignored and any fragment is dropped. Returns `None` for
    /// paths without a registered route; there is no catch-all.
    pub fn resolve(&self, target: &str) -> Option<RouteContext> {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };
        let path = normalize_path(path);

        let route = self.routes.iter().find(|route| route.path == path)?;
        Some(RouteContext {
            view: route.view,
            path,
            query: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        })
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

//! Navigation for TreadMarket
//!
//! Route table, URL router, and the navigation stack. Components never own
//! navigation state; they request transitions through the [`Navigator`]
//! collaborator and read the current route from it. A navigation request is
//! fire-and-forget: the caller does not await or branch on its outcome.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Routes
// =============================================================================

/// Parameters extracted from a matched path
pub type RouteParams = HashMap<String, String>;

/// All routes in the marketplace app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Landing page
    #[default]
    Home,
    /// Published listings overview
    Listings,
    /// Single listing detail
    ListingDetail {
        /// Listing identifier
        id: String,
    },
    /// Sell/create-listing flow
    Sell,
    /// Seller dashboard
    Dashboard,
    /// Shop directory
    Shops,
    /// Search results
    Search {
        /// Search query
        #[serde(skip_serializing_if = "Option::is_none")]
        q: Option<String>,
    },
    /// Chat conversation list or a single conversation
    Chat {
        /// Conversation to open
        #[serde(skip_serializing_if = "Option::is_none")]
        conversation: Option<String>,
    },
    /// Own profile page
    ProfileDetails,
    /// Login screen
    Login,
    /// Account creation
    Signup,
    /// Password recovery
    Forgot,
    /// Fallback for unmatched paths
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Listings => "/listings".to_string(),
            Route::ListingDetail { id } => {
                format!("/listings/{}", urlencoding::encode(id))
            }
            Route::Sell => "/sell".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Shops => "/shops".to_string(),
            Route::Search { q } => {
                let mut path = "/search".to_string();
                if let Some(q) = q {
                    path.push_str(&format!("?q={}", urlencoding::encode(q)));
                }
                path
            }
            Route::Chat { conversation } => match conversation {
                Some(conversation) => format!("/chat/{}", urlencoding::encode(conversation)),
                None => "/chat".to_string(),
            },
            Route::ProfileDetails => "/profileDetails".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Forgot => "/forgot".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Listings => "Listings",
            Route::ListingDetail { .. } => "Listing",
            Route::Sell => "Sell",
            Route::Dashboard => "Dashboard",
            Route::Shops => "Shops",
            Route::Search { .. } => "Search",
            Route::Chat { .. } => "Chat",
            Route::ProfileDetails => "Profile",
            Route::Login => "Log In",
            Route::Signup => "Sign Up",
            Route::Forgot => "Forgot Password",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigator Collaborator
// =============================================================================

/// External router collaborator.
///
/// Two operations only: request a push, and read the current path. Whether
/// a push actually lands is the collaborator's concern.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Request navigation to a route
    fn push(&mut self, route: Route);
    /// Read the current route path
    fn current_path(&self) -> String;
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Push/pop navigation stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route
    root: Route,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl NavigationStack {
    /// Create a new stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        tracing::debug!(path = %route.to_path(), "navigation push");
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns false when already at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Pop everything above the root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self
            .entries
            .last()
            .expect("stack always holds its root")
            .route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// All entries, bottom to top
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

impl Navigator for NavigationStack {
    fn push(&mut self, route: Route) {
        NavigationStack::push(self, route);
    }

    fn current_path(&self) -> String {
        self.current().to_path()
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    segments: Vec<PatternSegment>,
    builder: fn(RouteParams) -> Option<Route>,
}

#[derive(Debug, Clone)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

/// URL router mapping paths to routes
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router with the full route table
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/listings", |_| Some(Route::Listings));
        router.add_route("/listings/:id", |params| {
            Some(Route::ListingDetail {
                id: params.get("id")?.clone(),
            })
        });
        router.add_route("/sell", |_| Some(Route::Sell));
        router.add_route("/dashboard", |_| Some(Route::Dashboard));
        router.add_route("/shops", |_| Some(Route::Shops));
        router.add_route("/search", |params| {
            Some(Route::Search {
                q: params.get("q").cloned(),
            })
        });
        router.add_route("/chat", |_| Some(Route::Chat { conversation: None }));
        router.add_route("/chat/:conversation", |params| {
            Some(Route::Chat {
                conversation: Some(params.get("conversation")?.clone()),
            })
        });
        router.add_route("/profileDetails", |_| Some(Route::ProfileDetails));
        router.add_route("/login", |_| Some(Route::Login));
        router.add_route("/signup", |_| Some(Route::Signup));
        router.add_route("/forgot", |_| Some(Route::Forgot));

        router
    }

    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route, falling back to [`Route::NotFound`]
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = if let Some(idx) = path.find('?') {
            (&path[..idx], Some(&path[idx + 1..]))
        } else {
            (path, None)
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    tracing::debug!(%path, route = route.title(), "route matched");
                    return route;
                }
            }
        }

        tracing::warn!(%path, "no route matched, falling back to not-found");
        Route::NotFound
    }

    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        self.parse_query(query, &mut params);
        Some(params)
    }

    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

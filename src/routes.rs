//! Static route table: URL path ↔ view, with a stable name per route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds its `<Routes>` from these entries, and pages navigate by
//! `RouteName` instead of hard-coding paths. Unmatched paths resolve to `None`
//! here and to the router fallback in the shell.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;
use std::str::FromStr;

/// Stable symbolic name used for programmatic navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
}

impl RouteName {
    pub const ALL: [Self; 3] = [Self::Home, Self::Login, Self::Register];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    /// Declared path for this route.
    pub fn path(self) -> &'static str {
        entry(self).path
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRouteName(pub String);

impl FromStr for RouteName {
    type Err = UnknownRouteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRouteName(s.to_owned()))
    }
}

/// Which page component a route mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    SubmitJob,
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: ViewId,
    pub name: RouteName,
}

impl RouteEntry {
    /// Path without its leading slash, as `leptos_router::StaticSegment` wants it.
    pub fn segment(&self) -> &'static str {
        self.path.strip_prefix('/').unwrap_or(self.path)
    }
}

pub const HOME: RouteEntry = RouteEntry { path: "/", view: ViewId::SubmitJob, name: RouteName::Home };
pub const LOGIN: RouteEntry = RouteEntry { path: "/login", view: ViewId::Login, name: RouteName::Login };
pub const REGISTER: RouteEntry =
    RouteEntry { path: "/register", view: ViewId::Register, name: RouteName::Register };

/// Every route, in declaration order.
pub const ROUTES: &[RouteEntry] = &[HOME, LOGIN, REGISTER];

/// Reverse lookup by name.
pub fn entry(name: RouteName) -> &'static RouteEntry {
    match name {
        RouteName::Home => &HOME,
        RouteName::Login => &LOGIN,
        RouteName::Register => &REGISTER,
    }
}

/// Find the route for a location path.
///
/// Any `?query` or `#fragment` is ignored, as is a single trailing slash.
/// Matching is otherwise exact and case-sensitive.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES.iter().find(|route| route.path == path)
}

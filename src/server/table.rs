//! The endpoint dispatch table.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use log::{debug, info};

use crate::http::{parent, Method};
use crate::lang::Maybe;
use crate::server::route::{Route, RouteSource};

type PathMap = BTreeMap<String, Route>;

/// Collects routes before serving starts.
///
/// [`EndpointTableBuilder::build`] freezes the collected routes into an
/// [`EndpointTable`], which has no way to add routes afterwards.
#[derive(Debug, Default)]
pub struct EndpointTableBuilder {
    routes: HashMap<Method, PathMap>,
}

impl EndpointTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `route` for its method and exact path.
    ///
    /// A second route for the same method and path replaces the first.
    pub fn add(mut self, route: Route) -> Self {
        let method = route.method();
        let path = route.path().to_string();
        if self.routes.entry(method).or_default().insert(path.clone(), route).is_some() {
            debug!("Replaced route {method} {path}");
        }
        self
    }

    /// Register every route of `source`.
    pub fn mount(self, source: &impl RouteSource) -> Self {
        source.routes().into_iter().fold(self, Self::add)
    }

    pub fn build(self) -> EndpointTable {
        let table = EndpointTable { routes: self.routes };
        debug!("Endpoint table frozen with {len} routes", len = table.len());
        table
    }
}

/// Immutable mapping from (method, path) to the most specific registered route.
///
/// Registered paths act as prefixes on `/` boundaries. Lookups search one sorted
/// path map per method, so the table can be shared between request tasks
/// without locking.
#[derive(Debug)]
pub struct EndpointTable {
    routes: HashMap<Method, PathMap>,
}

impl EndpointTable {
    pub fn builder() -> EndpointTableBuilder {
        EndpointTableBuilder::new()
    }

    /// Build a table from `routes` in order.
    pub fn with(routes: impl IntoIterator<Item = Route>) -> Self {
        routes
            .into_iter()
            .fold(Self::builder(), EndpointTableBuilder::add)
            .build()
    }

    /// Resolve a normalized request path to the most specific registered route.
    ///
    /// A registered path matches if it equals the request path, if it is the
    /// root, or if the request path continues with `/` right after it.
    pub fn find_route(&self, method: Method, path: &str) -> Maybe<&Route> {
        Maybe::option(self.routes.get(&method)).flat_map(|paths| find_in(paths, path))
    }

    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All routes, ordered by method and then path.
    pub fn routes(&self) -> Vec<&Route> {
        let mut methods: Vec<&Method> = self.routes.keys().collect();
        methods.sort();
        methods
            .into_iter()
            .flat_map(|method| self.routes[method].values())
            .collect()
    }

    /// Log the registered endpoints.
    pub fn print(&self) {
        info!("Registered endpoints:");
        for route in self.routes() {
            info!("  {method} {path}", method = route.method(), path = route.path());
        }
    }
}

// The greatest key not above the probe is the only candidate that can be the
// longest ancestor of it. When it is not an ancestor of `path`, retry from the
// parent; the root has no parent.
fn find_in<'a>(paths: &'a PathMap, path: &str) -> Maybe<&'a Route> {
    let mut probe = path;
    loop {
        let floor = paths
            .range::<str, _>((Bound::Unbounded, Bound::Included(probe)))
            .next_back();
        let candidate = Maybe::option(floor)
            .filter(|(key, _)| is_same_or_start_of_path(path, key));
        if let Maybe::Present((_, route)) = candidate {
            return Maybe::present(route);
        }
        match parent(probe) {
            Some(next) => probe = next,
            None => return Maybe::empty(),
        }
    }
}

fn is_same_or_start_of_path(path: &str, route_path: &str) -> bool {
    path == route_path
        || route_path == "/"
        || (path.len() > route_path.len()
            && path.starts_with(route_path)
            && path.as_bytes()[route_path.len()] == b'/')
}

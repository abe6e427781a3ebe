// Navigation history for the authenticated area

use super::Route;

/// Non-empty stack of routes. The bottom entry is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStack {
    routes: Vec<Route>,
}

impl RouteStack {
    pub fn new(root: Route) -> Self {
        Self { routes: vec![root] }
    }

    pub fn root(&self) -> Route {
        self.routes[0]
    }

    pub fn top(&self) -> Route {
        // Invariant: never empty
        self.routes[self.routes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn contains(&self, route: Route) -> bool {
        self.routes.contains(&route)
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Pop the top route. The last remaining route is never popped.
    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() > 1 {
            self.routes.pop()
        } else {
            None
        }
    }

    /// Keep the stack up to and including the root, then push `route`
    /// unless it is the root itself.
    pub fn reset_to_root_then(&mut self, route: Route) {
        let root = self.root();
        self.routes.truncate(1);
        if route != root {
            self.routes.push(route);
        }
    }

    /// Replace the whole stack with a single route, which becomes the new root
    pub fn clear_to(&mut self, route: Route) {
        self.routes.clear();
        self.routes.push(route);
    }
}

// Named-route surface and navigation history

pub mod routes;
pub mod stack;

pub use routes::Route;
pub use stack::RouteStack;

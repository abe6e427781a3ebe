pub mod demo;
pub mod indicator;
pub mod navigate;
pub mod routes;

pub use demo::DemoCommand;
pub use indicator::IndicatorCommand;
pub use navigate::NavigateCommand;
pub use routes::RoutesCommand;

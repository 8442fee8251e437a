// Step navigator: the linear basic-info -> experience -> projects -> view flow.
// Every save writes the whole draft through `storage::legacy::save_draft`.

pub mod form;
pub mod handlers;
pub mod steps;

pub use steps::{Section, Step, ROUTE_ALIASES};

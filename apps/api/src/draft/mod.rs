// Draft data model and the pure aggregator over it.
// Storage never happens here: callers persist through `storage::legacy::save_draft`.

pub mod aggregator;
pub mod handlers;
pub mod model;
pub mod path;

pub use model::{Experience, PortfolioDraft, Social};
pub use path::ListName;

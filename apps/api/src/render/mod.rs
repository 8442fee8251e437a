// Server-rendered HTML for the step forms and the read-only portfolio page.
// Rendering is pure: every function takes a draft and returns a document.

pub mod forms;
pub mod html;
pub mod portfolio;

pub use forms::render_step_form;
pub use portfolio::{render_portfolio, resolve_portfolio, ResolvedPortfolio};

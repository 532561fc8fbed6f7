// Résumé preview: plain text to template-ready HTML.
// PDF export stays client-side; this only produces the markup it rasterizes.

pub mod html;
pub mod templates;

pub use html::{candidate_name, plain_to_html};
pub use templates::Template;

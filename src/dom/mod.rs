// ============================================================================
// DOM MODULE - DOM helpers and the browser side of PageEffects
// ============================================================================

pub mod element;
pub mod builder;
pub mod events;
pub mod error_display;
pub mod page;

pub use element::*;
pub use builder::*;
pub use events::*;
pub use error_display::*;
pub use page::BrowserPage;

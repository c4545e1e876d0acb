// ============================================================================
// STATE MODULE - Page-lifetime state shared through Rc<Cell/RefCell>
// ============================================================================

pub mod poll_session;
pub mod submit_button;

pub use poll_session::*;
pub use submit_button::*;

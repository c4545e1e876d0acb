// ============================================================================
// TELEGRAM ANALYZER WEB - Form handling and analysis polling (Rust + wasm)
// ============================================================================
// - Views: DOM wiring per page (forms, analysis page)
// - ViewModels: page logic, generic over the API and the page
// - Services: HTTP only
// - State: page-lifetime state (poll session, submit button)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

pub use crate::error::{ClientError, UploadRejection};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Telegram Analyzer client starting");

    let mut app = App::new();
    app.mount()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Whether this page's status poller is still running.
#[wasm_bindgen]
pub fn is_polling() -> bool {
    APP.with(|cell| cell.borrow().as_ref().is_some_and(App::is_polling))
}

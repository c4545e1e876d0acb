/// Side effects the view models ask of the page.
#[allow(async_fn_in_trait)]
pub trait PageEffects {
    /// Sends the browser to `url`.
    fn navigate(&self, url: &str);

    /// Shows `message` in the single inline error box.
    fn show_error(&self, message: &str);

    /// Sets the progress indicator width, if the page has one.
    fn set_progress(&self, percent: u8);

    /// Disables (busy) or re-enables the upload submit control.
    fn set_upload_busy(&self, busy: bool);

    async fn sleep(&self, ms: u32);
}

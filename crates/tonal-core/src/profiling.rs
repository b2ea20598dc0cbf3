//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are always compiled in and cost a single branch while profiling is
//! off. The HTTP server for `puffin_viewer` needs the `profiling` feature.

pub use puffin::{profile_function, profile_scope};

/// Turn scope collection on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Mark the start of a new frame (one handled display event).
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling")]
mod server {
    use std::sync::OnceLock;

    /// Global profiling server instance.
    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Enable scopes and serve them to `puffin_viewer` on `addr`.
    ///
    /// # Example
    /// ```no_run
    /// tonal_core::profiling::start_server("0.0.0.0:8585");
    /// ```
    pub fn start_server(addr: &str) {
        puffin::set_scopes_on(true);

        match puffin_http::Server::new(addr) {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://{}", addr);
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        }
    }
}

#[cfg(feature = "profiling")]
pub use server::start_server;

//! # Calcfolio GUI Application
//!
//! Desktop and browser front end for the calculator directory.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Native usage: `calc_gui [PATH]`, e.g. `calc_gui /health/bmi`. Set
//! `CALCFOLIO_CONFIG` to point at a site TOML file.

mod app;
mod ui;

use app::{App, Message};

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calc_gui=info,calc_core=info")))
        .with(fmt::layer().compact())
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
}

fn main() -> iced::Result {
    init_logging();
    tracing::info!("starting Calcfolio GUI");

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1280.0, 800.0))
        .run()
}

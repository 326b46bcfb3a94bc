use calibration_assistant::config::{self, ClientConfig};

fn main() {
    config::load_dotenv();
    let loaded = ClientConfig::from_env();

    init_logging(loaded.config.log_level);
    for problem in &loaded.problems {
        tracing::warn!("ignoring configuration value: {problem:#}");
    }
    tracing::info!(api = %loaded.config.api_base_url, "starting calibration assistant");

    config::install(loaded.config);
    dioxus::launch(calibration_assistant::ui::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

// `SystemTime::now` is unavailable in the browser, so no timestamps there.
#[cfg(target_arch = "wasm32")]
fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

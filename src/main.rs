//! Axian entry point
//!
//! On the web this boots the canvas game. Natively there is no window, so
//! the binary plays a scripted attract-mode session headless and logs how
//! it went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Axian starting...");
    if let Err(e) = axian::platform::web::run(axian::GameConfig::default()).await {
        log::error!("Axian failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Axian (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => axian::GameConfig::default(),
    };

    const DEMO_FRAMES: u64 = 3000;
    let script = axian::platform::headless::demo_script(DEMO_FRAMES);
    match axian::platform::headless::run(&config, DEMO_FRAMES, &script) {
        Ok(summary) => {
            println!(
                "Played {} frames: {} points (hi {}), {} lives left",
                summary.frames, summary.points, summary.highscore, summary.lives
            );
        }
        Err(e) => {
            log::error!("Demo stopped: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: &str) -> axian::Result<axian::GameConfig> {
    let json = std::fs::read_to_string(path)?;
    axian::GameConfig::from_json(&json)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

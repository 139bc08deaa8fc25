#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod components;
pub mod dom;
pub mod logger;
pub mod timers;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    if let Err(err) = bootstrap::boot() {
        log::error!("site boot failed: {err:#}");
    }
}

/// Script hook for markup that still calls `switchLanguage('nl')`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = switchLanguage)]
pub fn switch_language(code: &str) {
    bootstrap::switch_language(code);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = nextVideo)]
pub fn next_video() {
    bootstrap::with_carousel(bootstrap::WebCarousel::advance);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = previousVideo)]
pub fn previous_video() {
    bootstrap::with_carousel(bootstrap::WebCarousel::retreat);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(index: u32) {
    bootstrap::with_carousel(|carousel| carousel.set_window(i64::from(index)));
}

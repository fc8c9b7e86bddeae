// Host test builds compile the pure modules without the frontend that consumes them.
#![cfg_attr(all(test, not(target_arch = "wasm32")), allow(dead_code))]

#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod content;
#[cfg(any(target_arch = "wasm32", test))]
mod fade;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(any(target_arch = "wasm32", test))]
mod logging;
#[cfg(any(target_arch = "wasm32", test))]
mod scroll;
#[cfg(any(target_arch = "wasm32", test))]
mod tab_widget;
#[cfg(any(target_arch = "wasm32", test))]
mod visibility;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

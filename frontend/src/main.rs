//! Entry point for the WASM application

pub fn main() {
    bridge_frontend::start();
}

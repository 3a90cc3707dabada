pub mod anchor;
pub mod contact;
pub mod content;
pub mod filter;
pub mod motion;
pub mod telemetry;
pub mod theme;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

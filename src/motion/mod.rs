//! Animation models. Everything here is plain arithmetic over time, scroll
//! and pointer input so it can be exercised without a browser; the Yew
//! components only translate these values into inline styles.

pub mod clock;
pub mod cursor;
pub mod easing;
pub mod hover;
pub mod progress;
pub mod reveal;
pub mod scene;
pub mod spring;
pub mod text;

pub use reveal::{RevealLatch, RevealVariant};
pub use spring::{Spring, SpringConfig};

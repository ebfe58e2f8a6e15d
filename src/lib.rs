pub mod choreography;
pub mod contact;
pub mod content;
pub mod gate;
pub mod motion;
pub mod scroll;
pub mod theme;
pub mod typewriter;
pub mod widgets;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod frontend;

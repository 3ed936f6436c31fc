pub mod bubble;
pub mod client;
pub mod loader;
pub mod selector;
pub mod types;

pub use bubble::{BubbleSettings, BubbleSink, WorldBubble};
pub use client::WorldClient;
pub use loader::WorldLoader;
pub use selector::WorldSelector;
pub use types::{WorldDetail, WorldItem, WorldResponse};

pub mod latch;
pub mod variants;
pub mod viewport;

pub use latch::{AssetEvent, AssetState, NavState, VideoEvent, VideoState, VisibilityLatch};
pub use variants::{MotionState, Variant};

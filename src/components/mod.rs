pub mod icon;
pub mod motion;
pub mod section;
pub mod team_photo;
pub mod video;

pub use icon::{Icon, LucideIcon};
pub use motion::{Motion, Stagger, REDUCED_MOTION_CSS};
pub use section::{SectionHeading, SectionLabel};
pub use team_photo::TeamPhoto;
pub use video::{DemoVideo, FounderVideo};

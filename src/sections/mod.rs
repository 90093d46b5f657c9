pub mod ask;
pub mod contact;
pub mod demo;
pub mod features;
pub mod footer;
pub mod hero;
pub mod invest;
pub mod proactive;
pub mod story;
pub mod team;
pub mod traction;
pub mod voice;
pub mod whatsapp;

pub use ask::TheAsk;
pub use contact::Contact;
pub use demo::Demo;
pub use features::CoreFeatures;
pub use footer::Footer;
pub use hero::Hero;
pub use invest::WhyInvest;
pub use proactive::ProactiveIntelligence;
pub use story::FounderStory;
pub use team::Team;
pub use traction::Traction;
pub use voice::VoiceCalls;
pub use whatsapp::WhyWhatsApp;

use log::Level;

/// Where the founder story video comes from. Pick one in `FOUNDER_VIDEO`.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoSource {
    Local(&'static str),
    YouTube(&'static str),
    None,
}

pub const FOUNDER_VIDEO: VideoSource = VideoSource::Local("/founder-video.mp4");
pub const DEMO_VIDEO_PATH: &str = "/sal-demo.mp4";

pub const WHATSAPP_NUMBER: &str = "971564333073";
pub const WHATSAPP_DISPLAY: &str = "+971 52 322 8314";
pub const CONTACT_EMAIL: &str = "anas-uddin@hotmail.com";

/// Nav switches to its `scrolled` look strictly above this offset.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Sections start revealing this many px before they are fully on screen.
pub const REVEAL_MARGIN_PX: f64 = 100.0;
/// Mount-time animations wait this long so the hidden frame gets painted.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 30;

pub fn whatsapp_link() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", video_id)
}

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_type: &'static str,
    pub og_locale: &'static str,
    pub twitter_card: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta {
    title: "SAL — AI Operations for Salons | Investor Deck",
    description: "SAL is the AI operations assistant for salons, barbershops, and spas. Built by a barber who scaled two award-winning salons. Pre-seed round open.",
    keywords: &[
        "SAL",
        "AI assistant",
        "salon operations",
        "barbershop",
        "WhatsApp AI",
        "OpenClaw",
        "Dubai startup",
        "pre-seed",
    ],
    author: "Anas",
    og_title: "SAL — AI Operations for Salons | Investor Deck",
    og_description: "The AI operations assistant built by a barber who scaled two award-winning salons. Pre-seed round: 500,000 AED.",
    og_type: "website",
    og_locale: "en_AE",
    twitter_card: "summary_large_image",
    twitter_title: "SAL — AI Operations for Salons",
    twitter_description: "The AI operations assistant built by a barber who scaled two award-winning salons.",
};

impl PageMeta {
    /// `(attribute, key, content)` triples for every `<meta>` tag in the head.
    pub fn tags(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("name", "description", self.description.to_string()),
            ("name", "keywords", self.keywords.join(", ")),
            ("name", "author", self.author.to_string()),
            ("property", "og:title", self.og_title.to_string()),
            ("property", "og:description", self.og_description.to_string()),
            ("property", "og:type", self.og_type.to_string()),
            ("property", "og:locale", self.og_locale.to_string()),
            ("name", "twitter:card", self.twitter_card.to_string()),
            ("name", "twitter:title", self.twitter_title.to_string()),
            ("name", "twitter:description", self.twitter_description.to_string()),
        ]
    }
}

/// CSS selector for the head `<meta>` tag keyed by `attr="key"`.
pub fn meta_selector(attr: &str, key: &str) -> String {
    format!("meta[{}=\"{}\"]", attr, key)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_are_addressed() {
        assert_eq!(whatsapp_link(), "https://wa.me/971564333073");
        assert_eq!(mailto_link(), "mailto:anas-uddin@hotmail.com");
    }

    #[test]
    fn youtube_embed_autoplays_after_activation() {
        let url = youtube_embed_url("abc123");
        assert!(url.starts_with("https://www.youtube.com/embed/abc123"));
        assert!(url.contains("autoplay=1"));
    }

    #[test]
    fn meta_tags_keep_keyword_order() {
        let tags = PAGE_META.tags();
        let keywords = tags
            .iter()
            .find(|(_, key, _)| *key == "keywords")
            .map(|(_, _, content)| content.clone());
        assert_eq!(
            keywords.as_deref(),
            Some("SAL, AI assistant, salon operations, barbershop, WhatsApp AI, OpenClaw, Dubai startup, pre-seed")
        );
        assert!(tags.iter().any(|(attr, key, _)| *attr == "property" && *key == "og:locale"));
    }

    #[test]
    fn meta_selector_matches_attribute_and_key() {
        assert_eq!(meta_selector("property", "og:title"), r#"meta[property="og:title"]"#);
        for (attr, key, _) in PAGE_META.tags() {
            let selector = meta_selector(attr, key);
            assert!(selector.starts_with(&format!("meta[{}=", attr)));
            assert!(selector.ends_with(&format!("\"{}\"]", key)));
        }
    }
}

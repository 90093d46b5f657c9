//! Copy for every section, in display order.

use crate::components::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Gold,
    Sage,
    Terracotta,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Gold => "tone-gold",
            Tone::Sage => "tone-sage",
            Tone::Terracotta => "tone-terracotta",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Alert {
    pub icon: Icon,
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub initial: char,
    pub alt: &'static str,
    pub credentials: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Reason {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Allocation {
    pub category: &'static str,
    pub percent: u8,
    pub purpose: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "24/7", label: "Always Watching" },
    Stat { value: "10x", label: "Productivity Boost" },
    Stat { value: "0", label: "Apps to Learn" },
];

pub const FOUNDER_QUOTE: &str = "I spent 10 years running salons. 40+ hours a week on admin alone. I couldn't find a solution that worked, so I built one.";

pub const FOUNDER_HIGHLIGHTS: &[&str] = &[
    "Founded Back Alive Barbershop with 2 locations in Dubai, 4.9 stars, 3,000+ reviews",
    "Fact Magazine \u{201c}Favourite Barbershop of the Year 2025\u{201d}",
    "Self-taught developer who built SAL from scratch",
    "SAL runs live in Back Alive. This isn't a concept, it's working.",
];

pub const ALERTS: &[Alert] = &[
    Alert {
        icon: Icon::TrendingUp,
        text: "Your bookings are down 20% this week. Want me to send a promo to inactive clients?",
        tone: Tone::Terracotta,
    },
    Alert {
        icon: Icon::Clock,
        text: "Ahmed has been late 3 times this month. Want me to schedule a meeting?",
        tone: Tone::Gold,
    },
    Alert {
        icon: Icon::Users,
        text: "Client Sarah hasn't visited in 45 days. Want me to reach out?",
        tone: Tone::Sage,
    },
    Alert {
        icon: Icon::Calendar,
        text: "Tomorrow looks slow, only 60% booked. Want me to send a last-minute deals campaign?",
        tone: Tone::Terracotta,
    },
    Alert {
        icon: Icon::Star,
        text: "Mohammad's birthday is in 3 days. Want me to send him something special?",
        tone: Tone::Gold,
    },
    Alert {
        icon: Icon::AlertCircle,
        text: "You're running low on product X. Want me to reorder?",
        tone: Tone::Terracotta,
    },
    Alert {
        icon: Icon::BarChart,
        text: "Revenue is up 15% this month. Here's what's working.",
        tone: Tone::Sage,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::FileText,
        title: "Smart Reporting",
        description: "Create reports by just asking SAL. No tech skills needed. SAL asks you questions, builds the report, saves it to Notion, and sends you the link.",
        highlight: "\"SAL, give me this week's performance report\"",
    },
    Feature {
        icon: Icon::UserCheck,
        title: "Staff Management",
        description: "Connects to your biometrics system. Alerts you if staff is late. Automatically sends warnings. Tracks performance. Logs everything for records.",
        highlight: "Automated warnings & performance tracking",
    },
    Feature {
        icon: Icon::PieChart,
        title: "Business Analytics",
        description: "Top clients by spend. Most profitable services. Retention rates. Clients who haven't visited in 60+ days. Peak hours. Revenue trends. All from your Fresha data.",
        highlight: "Powered by your Fresha integration",
    },
    Feature {
        icon: Icon::Palette,
        title: "Marketing & Content",
        description: "Creates landing pages in 5 minutes. Designs campaigns based on your data. Can run ads for you. Creates social media content that actually converts.",
        highlight: "AI-powered marketing on autopilot",
    },
    Feature {
        icon: Icon::Send,
        title: "Team Communication",
        description: "Broadcast messages to your entire team with one message. Voice messages supported. Individual follow-ups. Task assignments and reminders.",
        highlight: "No more messy WhatsApp groups",
    },
    Feature {
        icon: Icon::Brain,
        title: "Learns Your Business",
        description: "SAL is custom-trained for your specific salon. It knows your services, staff, clients, and how you operate. Gets smarter every day.",
        highlight: "Your AI, trained on your business",
    },
];

pub const VOICE_FEATURES: &[&str] = &[
    "SAL calls you to give important updates",
    "You can ask SAL to do tasks over the phone",
    "Have a real conversation with your AI assistant",
    "Ask questions, give instructions, get things done. All by voice.",
    "SAL answers calls for the shop",
    "Makes calls on your behalf",
    "Books appointments via phone",
    "Handles customer inquiries 24/7",
];

pub const WHATSAPP_REASONS: &[Stat] = &[
    Stat { value: "98%", label: "WhatsApp penetration in UAE/MENA" },
    Stat { value: "0", label: "New apps to download or learn" },
    Stat { value: "24h", label: "Setup time. We do everything." },
    Stat { value: "Any", label: "Phone works. Android or iPhone." },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Anas",
        role: "Founder & CEO",
        photo: "/team-anas.jpg",
        initial: 'A',
        alt: "Anas, Founder and CEO",
        credentials: &[
            "10+ years in the salon industry",
            "Founded Back Alive Barbershop (2 locations)",
            "Self-taught developer who built SAL from scratch",
        ],
    },
    TeamMember {
        name: "Fahim",
        role: "Technical Co-Founder & CTO",
        photo: "/team-fahim.jpg",
        initial: 'F',
        alt: "Fahim, CTO",
        credentials: &[
            "Built SAL's core AI infrastructure",
            "Deep expertise in AI agents and automation",
            "Full-stack engineer",
        ],
    },
];

pub const TRACTION_BADGES: &[&str] = &[
    "Product built & working",
    "Running live in Back Alive (2 locations)",
    "Fresha integration operational",
    "WhatsApp demo ready",
];

pub const AWARD: &str = "Fact Magazine: Favourite Barbershop of the Year 2025";

pub const RAISE: &str = "500,000 AED";

pub const USE_OF_FUNDS: &[Allocation] = &[
    Allocation { category: "Marketing", percent: 36, purpose: "Customer acquisition" },
    Allocation { category: "Team", percent: 30, purpose: "Founder salaries (6 months)" },
    Allocation { category: "Technology", percent: 12, purpose: "Infrastructure & APIs" },
    Allocation { category: "Operations", percent: 22, purpose: "Legal, setup, runway" },
];

pub const INVEST_REASONS: &[Reason] = &[
    Reason {
        icon: Icon::Clock,
        title: "Timing",
        description: "AI agents are the next wave. The window to dominate the beauty/wellness vertical is now.",
    },
    Reason {
        icon: Icon::Users,
        title: "Team",
        description: "Founder who lived the problem for 10 years + technical co-founder who can build anything.",
    },
    Reason {
        icon: Icon::TrendingUp,
        title: "Traction",
        description: "Already running in a real business. Not a concept, a working product.",
    },
    Reason {
        icon: Icon::Globe,
        title: "Market",
        description: "Beauty & wellness is massive, fragmented, and completely underserved by AI.",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique<'a>(keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate list key {:?}", key);
        }
    }

    #[test]
    fn list_keys_are_unique() {
        // Keyed lists would collapse duplicates
        assert_unique(FEATURES.iter().map(|f| f.title));
        assert_unique(WHATSAPP_REASONS.iter().map(|r| r.label));
        assert_unique(TRACTION_BADGES.iter().copied());
        assert_unique(INVEST_REASONS.iter().map(|r| r.title));
        assert_unique(TEAM.iter().map(|m| m.name));
        assert_unique(USE_OF_FUNDS.iter().map(|a| a.category));
    }

    #[test]
    fn use_of_funds_adds_up() {
        let total: u32 = USE_OF_FUNDS.iter().map(|a| a.percent as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn declaration_order_is_display_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Smart Reporting",
                "Staff Management",
                "Business Analytics",
                "Marketing & Content",
                "Team Communication",
                "Learns Your Business",
            ]
        );
        assert_eq!(ALERTS.first().map(|a| a.icon), Some(Icon::TrendingUp));
        assert_eq!(ALERTS.last().map(|a| a.icon), Some(Icon::BarChart));
        assert_eq!(TEAM[0].name, "Anas");
    }

    #[test]
    fn team_initials_match_names() {
        for member in TEAM {
            assert_eq!(member.name.chars().next(), Some(member.initial));
        }
    }

    #[test]
    fn section_sizes() {
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(ALERTS.len(), 7);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(VOICE_FEATURES.len(), 8);
        assert_eq!(WHATSAPP_REASONS.len(), 4);
        assert_eq!(INVEST_REASONS.len(), 4);
    }
}

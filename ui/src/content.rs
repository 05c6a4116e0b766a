//! Copy shown on the landing page. Everything here is fixed at build time.

pub const BRAND: &str = "Pattaya Digital Advertising Truck";
pub const BRAND_GLYPH: &str = "🚚";

pub const PAGE_DESCRIPTION: &str =
    "LED truck advertising in Pattaya. More flexible, more effective and more affordable than traditional billboards.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Benefits", href: "#benefits" },
    NavLink { label: "Pricing Message", href: "#pricing" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: [NavLink; 2] = [
    NavLink { label: "Privacy", href: "#" },
    NavLink { label: "Terms", href: "#" },
];

/// Small pill shown above the hero and pricing headings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub stamp: &'static str,
}

pub const HERO_BADGE: Badge = Badge { label: "🏠 🍔 PETER", stamp: "00:38" };
pub const HERO_HEADLINE: &str =
    "More Flexible, More Effective, More Affordable than Traditional Billboards";
pub const HERO_TAGLINE: &str =
    "LED truck ads that meet people where they are. Simple setup. Fast launch. Strong results.";
pub const HERO_CTA: NavLink = NavLink { label: "Get a Quote", href: "#contact" };

pub const PLACEHOLDER_GLYPH: &str = "🎬";
pub const PLACEHOLDER_TEXT: &str = "Video coming soon";
pub const PICK_VIDEO_LABEL: &str = "Preview your video";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "🧭",
        title: "Flexible",
        text: "Change routes and creatives any time. Target busy zones by hour.",
    },
    Benefit {
        icon: "⚡",
        title: "Effective",
        text: "High recall in the real world. Your message fills the whole view.",
    },
    Benefit {
        icon: "💸",
        title: "Affordable",
        text: "Great cost per thousand views. Pay only for what works.",
    },
];

pub const PRICING_BADGE: Badge = Badge { label: "🏠 🍔 PETER", stamp: "00:40" };
pub const PRICING_HEADING: &str = "Pricing Communication Strategy";
pub const PRICING_SUBHEADING: &str = "Value Based Messaging";
pub const PRICING_FOCUS: &str = "Focus on outcomes";

pub const PRICING_LINES: [&str; 4] = [
    "Reach 50,000+ potential customers daily",
    "97% higher recall rate than online advertising",
    "Flexible targeting saves 40% vs traditional media",
    "Real-time optimization increases effectiveness by 60%",
];

pub const CONTACT_HEADING: &str = "Start your campaign";
pub const CONTACT_BLURB: &str =
    "Tell us your city, dates, and budget. We will reply fast with a simple plan.";
pub const CONTACT_EMAIL: &str = "hello@yourbrand.com";
pub const CONTACT_PHONE: &str = "+6612345678";

pub fn mailto_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

pub fn tel_href() -> String {
    format!("tel:{CONTACT_PHONE}")
}

/// Footer line for the given year.
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}")
}

//! Static copy and registries rendered by the page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Package,
    Receipt,
    Users,
    Chart,
    Prescription,
    Bell,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Package => "📦",
            Icon::Receipt => "🧾",
            Icon::Users => "👥",
            Icon::Chart => "📊",
            Icon::Prescription => "📄",
            Icon::Bell => "🔔",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// First character of the label, used as a compact badge.
    pub fn initial(&self) -> String {
        self.label.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Package,
        title: "Inventory Management",
        description: "Real-time stock tracking with automated alerts for low inventory and expiry dates",
    },
    Feature {
        icon: Icon::Receipt,
        title: "Billing & Invoicing",
        description: "Fast, accurate billing with GST compliance and digital invoice generation",
    },
    Feature {
        icon: Icon::Users,
        title: "Customer Records",
        description: "Maintain detailed customer profiles with purchase history and preferences",
    },
    Feature {
        icon: Icon::Chart,
        title: "Sales Analytics",
        description: "Comprehensive reports and insights to track performance and growth",
    },
    Feature {
        icon: Icon::Prescription,
        title: "Prescription Tracking",
        description: "Digital prescription management with secure storage and quick retrieval",
    },
    Feature {
        icon: Icon::Bell,
        title: "Smart Alerts",
        description: "Automated notifications for stock levels, expiry dates, and reorder points",
    },
];

pub const APP_HIGHLIGHTS: &[&str] = &[
    "Real-time inventory tracking across multiple locations",
    "Lightning-fast payment processing with multiple payment modes",
    "Secure digital record keeping with cloud backup",
    "Automated stock alerts and reorder notifications",
    "Comprehensive customer management system",
];

pub const SCREENSHOTS: &[&str] = &[
    "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&q=80",
    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=400&q=80",
    "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=400&q=80",
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "₹199",
        period: "/month",
        description: "Perfect for small chemist shops",
        features: &[
            "Basic inventory management",
            "Simple billing system",
            "Up to 500 products",
            "Customer records",
            "Email support",
            "Mobile app access",
        ],
        popular: false,
    },
    PricingTier {
        name: "Professional",
        price: "₹299",
        period: "/month",
        description: "Ideal for medium to large shops",
        features: &[
            "Advanced inventory tracking",
            "GST-compliant billing",
            "Unlimited products",
            "Sales analytics & reports",
            "Prescription management",
            "Priority support",
            "Multi-location support",
            "Automated stock alerts",
        ],
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "₹399",
        period: "/month",
        description: "Complete solution for pharmacy chains",
        features: &[
            "Everything in Professional",
            "Direct procurement system",
            "Bulk order discounts",
            "Supply chain management",
            "Custom integrations",
            "Dedicated account manager",
            "Advanced analytics",
            "API access",
        ],
        popular: false,
    },
];

pub const PRICING_NOTE: &str = "All plans include 14-day free trial • No credit card required";

/// In-page anchors shared by the nav bar and the footer's quick links.
pub const SECTION_LINKS: &[Link] = &[
    Link { label: "Features", href: "#features" },
    Link { label: "Pricing", href: "#pricing" },
    Link { label: "Contact", href: "#contact" },
];

pub const SUPPORT_LINKS: &[Link] = &[
    Link { label: "Help Center", href: "#" },
    Link { label: "Documentation", href: "#" },
    Link { label: "Privacy Policy", href: "#" },
    Link { label: "Terms of Service", href: "#" },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "#" },
    Link { label: "Twitter", href: "#" },
    Link { label: "Instagram", href: "#" },
    Link { label: "LinkedIn", href: "#" },
];

pub const CONTACT_PHONE: &str = "+91 1800 123 4567";
pub const CONTACT_ADDRESS: &[&str] = &["123 Healthcare Plaza, MG Road", "Mumbai, Maharashtra 400001"];

pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_tier_is_popular() {
        let popular: Vec<_> = PRICING_TIERS.iter().filter(|t| t.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Professional");
    }

    #[test]
    fn section_links_point_at_page_anchors() {
        let hrefs: Vec<_> = SECTION_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#features", "#pricing", "#contact"]);
    }

    #[test]
    fn initial_takes_a_whole_character() {
        assert_eq!(SOCIAL_LINKS[0].initial(), "F");
        let wide = Link { label: "Ünited", href: "#" };
        assert_eq!(wide.initial(), "Ü");
        assert_eq!(Link { label: "", href: "#" }.initial(), "");
    }
}

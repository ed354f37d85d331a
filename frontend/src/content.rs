// Literal page content. Everything here lives for the whole page view and is
// never mutated; renderers iterate it in the order it is written.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadmapStep {
    pub month: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeywordGroup {
    pub region: &'static str,
    pub code: &'static str,
    pub engine: &'static str,
    pub samples: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceTier {
    pub title: &'static str,
    pub investment: &'static str,
    pub duration: &'static str,
    pub keywords: &'static str,
    pub ads_credit: &'static str,
    pub coverage: &'static str,
    pub featured: bool,
    pub seo_features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketHighlight {
    pub icon: &'static str,
    pub market: &'static str,
    pub goal: &'static str,
    pub status: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Strategy", anchor: "#objectives" },
    NavLink { name: "SEO Features", anchor: "#features" },
    NavLink { name: "Roadmap", anchor: "#roadmap" },
    NavLink { name: "Keywords", anchor: "#keywords" },
    NavLink { name: "Export Plans", anchor: "#pricing" },
];

pub const CORE_SEO_FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: "🔎",
        title: "Technical SEO Audit",
        description: "Comprehensive analysis of BTC Pharm's technical infrastructure for US/UK crawlers.",
    },
    FeatureCard {
        icon: "🏷️",
        title: "Meta Data Optimization",
        description: "Precision-crafted titles and descriptions targeting technical chemical buyers.",
    },
    FeatureCard {
        icon: "🗄️",
        title: "Schema Markup",
        description: "Implementing JSON-LD for rich snippets and high-authority search appearance.",
    },
    FeatureCard {
        icon: "⚡",
        title: "Site Speed Optimization",
        description: "Core Web Vitals enhancement to ensure low bounce rates for Western markets.",
    },
    FeatureCard {
        icon: "📄",
        title: "On-Page Content Strategy",
        description: "Keyword-rich landing pages for specialized products like Piperidine ethanol.",
    },
    FeatureCard {
        icon: "🔗",
        title: "High-Authority Backlinking",
        description: "Generating technical backlinks from industrial and chemical directories.",
    },
];

pub const ROADMAP: &[RoadmapStep] = &[
    RoadmapStep {
        month: "Month 1",
        icon: "🔍",
        title: "Market Analysis",
        description: "Mapping search intent for BTC Pharm products in the USA and UK industrial landscape.",
        items: &[
            "US/UK Technical Keyword Selection",
            "On-Page SEO Audit",
            "Mobile Performance Fixes",
            "Competitor Analysis",
        ],
    },
    RoadmapStep {
        month: "Month 2 - 3",
        icon: "📣",
        title: "Traffic Activation",
        description: "Deploying Google Search Ads and Initial SEO content for priority product lines.",
        items: &[
            "USA/UK Targeted Ad Campaigns",
            "Technical Meta Implementation",
            "Landing Page Optimization",
            "Rich Snippet Setup",
        ],
    },
    RoadmapStep {
        month: "Month 4 - 6",
        icon: "🌍",
        title: "Ranking Authority",
        description: "Scaling organic visibility for 50-100 technical keywords across Western search engines.",
        items: &[
            "Backlink Campaign Strategy",
            "Organic Rank Scaling",
            "B2B Directory Visibility",
            "Technical Trust Building",
        ],
    },
    RoadmapStep {
        month: "Month 6+",
        icon: "📈",
        title: "Export Scaling",
        description: "Optimizing the lead funnel to maximize direct inquiries from USA and UK procurement officers.",
        items: &[
            "Lead Quality Optimization",
            "Performance Review",
            "Market Expansion Strategy",
            "Export Lead Management",
        ],
    },
];

pub const MARKET_HIGHLIGHTS: &[MarketHighlight] = &[
    MarketHighlight {
        icon: "🎯",
        market: "Google Ads (USA/UK)",
        goal: "₹3 Lac included credit",
        status: "Immediate Results",
    },
    MarketHighlight {
        icon: "🧪",
        market: "Technical SEO Suite",
        goal: "On-page & Backend optimization",
        status: "Built for Chemical buyers",
    },
    MarketHighlight {
        icon: "⚗️",
        market: "Keyword Dominance",
        goal: "Up to 100 Organic Keywords",
        status: "Keywords according to the Selected SEO Plan",
    },
];

pub const PRODUCT_KEYWORDS: &[KeywordGroup] = &[
    KeywordGroup {
        region: "United Kingdom (UK)",
        code: "GB",
        engine: "Google.co.uk",
        samples: &[
            "Piperidine ethanol supplier UK",
            "Piperidine ethanol exporter UK",
            "3-Fluoropiperidin-4-one hydrochloride exporter UK",
            "4,4-Difluoropiperidine hydrochloride bulk supplier",
            "1-Piperidinamine hydrochloride exporter London",
            "Ethyl 3-oxo-1-phenylmethyl-4-piperidinecarboxylate supplier",
            "tert-Butyl 2,4-dioxopiperidine-1-carboxylate exporter UK",
            "Industrial chemical exporter London",
            "Pharma intermediate bulk supplier UK",
            "Specialty chemical exporter Manchester",
        ],
    },
    KeywordGroup {
        region: "United States (USA)",
        code: "US",
        engine: "Google.com",
        samples: &[
            "Piperidine ethanol supplier USA",
            "Piperidine ethanol exporter USA",
            "1-Benzyl-4,4-difluoropiperidine exporter USA",
            "2-(4,4-Difluoropiperidin-1-yl)acetonitrile supplier USA",
            "4-Fluoropiperidine bulk exporter New Jersey",
            "tert-Butyl 4-aminomethyl piperidine-1-carboxylate supplier",
            "Boc-3-dimethylamino-methylene-4-oxopiperidine exporter",
            "Fine chemical exporter California",
            "Pharma chemical supplier New York",
            "Technical intermediates exporter USA",
        ],
    },
    KeywordGroup {
        region: "Global B2B (USA/UK Targeting)",
        code: "INT",
        engine: "Direct Export Inquiries",
        samples: &[
            "Piperidine ethanol bulk export price",
            "3-Fluoropiperidin-4-one bulk exporter USA",
            "BTC Pharm product exporter UK",
            "4,4-Difluoropiperidine industrial supplier",
            "High purity pharma intermediates exporter",
            "Bulk chemical wholesale supplier",
            "Certified chemical exporter to USA",
            "Technical intermediate supplier",
            "Industrial chemical exporter UK",
            "Direct factory price intermediates supplier",
        ],
    },
];

pub const PRICING_TIERS: &[PriceTier] = &[
    PriceTier {
        title: "USA & UK Starter Export Plan",
        investment: "₹7,50,000",
        duration: "1 Year Validity",
        keywords: "50 Organic Promotion Keywords (USA/UK Focus)",
        ads_credit: "Includes ₹3,00,000 Google Ads Credit",
        coverage: "Targeted Market Entry (US + UK)",
        featured: false,
        seo_features: &[
            "Basic Technical SEO Audit",
            "Targeted Meta Tagging",
            "Sitemap Optimization",
            "Keyword Mapping (50)",
            "Google Ads Management",
        ],
    },
    PriceTier {
        title: "Global Dominance Plan (Responsive)",
        investment: "₹10,00,000",
        duration: "1 Year Validity",
        keywords: "100 Organic Promotion Keywords (USA/UK Focus)",
        ads_credit: "Includes ₹3,00,000 Google Ads Credit",
        coverage: "Maximum Market Authority (US + UK)",
        featured: true,
        seo_features: &[
            "Advanced Technical SEO Suite",
            "Full Schema Integration",
            "Competitor Gap SEO Analysis",
            "Keyword Mapping (100)",
            "Dedicated Account Management",
            "Monthly ROI Reporting",
        ],
    },
];

/// Guarantees listed under every pricing tier.
pub const PLAN_GUARANTEES: &[(&str, &str)] = &[
    ("🌐", "Strict USA & UK Geofencing"),
    ("📊", "Monthly Export Lead Reports"),
    ("🕒", "1 Year Dedicated Support"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_point_at_anchors() {
        assert_eq!(NAV_LINKS.len(), 5);
        assert!(NAV_LINKS.iter().all(|link| link.anchor.starts_with('#')));
        assert_eq!(NAV_LINKS[4], NavLink { name: "Export Plans", anchor: "#pricing" });
    }

    #[test]
    fn test_roadmap_is_authored_chronologically() {
        let months: Vec<&str> = ROADMAP.iter().map(|step| step.month).collect();
        assert_eq!(months, vec!["Month 1", "Month 2 - 3", "Month 4 - 6", "Month 6+"]);
    }

    #[test]
    fn test_exactly_one_featured_tier() {
        let featured: Vec<&str> = PRICING_TIERS
            .iter()
            .filter(|tier| tier.featured)
            .map(|tier| tier.title)
            .collect();
        assert_eq!(featured, vec!["Global Dominance Plan (Responsive)"]);
    }
}

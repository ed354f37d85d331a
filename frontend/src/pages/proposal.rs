use yew::prelude::*;

use crate::components::cards::{
    blocks, feature_card, keyword_group, market_highlight, price_tier, roadmap_step, CARD_STYLES,
};
use crate::components::section_header::SectionHeader;
use crate::config::{BRAND_NAME, BRAND_TAGLINE, CONTACT_EMAIL, CONTACT_PHONE, REPRESENTATIVE};
use crate::content::{CORE_SEO_FEATURES, MARKET_HIGHLIGHTS, PRICING_TIERS, PRODUCT_KEYWORDS, ROADMAP};
use crate::navigation::anchors::anchor_click;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow top"></div>
            <div class="hero-glow bottom"></div>
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <span class="pulse"></span>
                        <span>{"USA & UK Export Promotion Plan"}</span>
                    </div>
                    <h1>
                        {"Export"}<br />
                        <span class="accent">{"BTC Pharm Global"}</span>
                    </h1>
                    <p class="hero-pitch">
                        {"We position your industrial products like "}<strong>{"Piperidine ethanol"}</strong>
                        {" at the top of Google results for the "}<strong>{"USA and UK"}</strong>
                        {". Dominating 50 to 100 organic keywords."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#pricing" onclick={anchor_click("#pricing")} class="hero-cta primary">
                            {"View Export Plans ›"}
                        </a>
                        <a href="#features" onclick={anchor_click("#features")} class="hero-cta secondary">
                            {"SEO Technical Features"}
                        </a>
                    </div>
                </div>

                <div class="hero-preview">
                    <div class="browser-bar">
                        <span class="light red"></span>
                        <span class="light yellow"></span>
                        <span class="light green"></span>
                        <div class="browser-url">{"🔍 google.com/search?q=Piperidine+ethanol+supplier+USA"}</div>
                    </div>
                    <img
                        src="https://images.unsplash.com/photo-1532187875605-18e88fe84165?auto=format&fit=crop&q=80&w=1000"
                        alt="Industrial Chemical Lab"
                        loading="lazy"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(ProofSection)]
fn proof_section() -> Html {
    html! {
        <section class="page-section muted-bg" id="proof">
            <div class="container">
                <SectionHeader
                    title="Search Dominance Preview"
                    subtitle="Seeing how we rank BTC Pharm products across specialized Western industrial search results."
                />
                <div class="proof-grid">
                    <div class="ad-preview">
                        <div class="ad-url-bar">
                            {"https://www.google.co.uk/search?q=Piperidine+ethanol+bulk+supply"}
                        </div>
                        <div class="ad-body">
                            <div class="ad-label">{"📣 Google Ads (USA & UK Target)"}</div>
                            <div class="ad-title">
                                {"Ad · High Purity Piperidine ethanol Supplier - BTC Pharm Global"}
                            </div>
                            <div class="ad-link">{"https://www.btcpharm.com › products › technical"}</div>
                            <div class="ad-text">
                                {"Immediate export supply for high purity Piperidine ethanol. Fast shipping to UK/USA markets. Industrial and Lab grades. Get an instant quote!"}
                            </div>
                            <div class="ad-tags">
                                <span class="ad-tag orange">{"AD POSITION: #1"}</span>
                                <span class="ad-tag blue">{"Market: US/UK"}</span>
                            </div>
                        </div>
                        <div class="ad-live">{"🖥️ Live Preview"}</div>
                    </div>

                    <div>
                        <div class="pill">{"Export Dominance"}</div>
                        <h3 class="proof-title">{"USA & UK Market Authority"}</h3>
                        <p class="proof-text">
                            {"We bridge the gap between your manufacturing facility and procurement officers in London, New York, and beyond."}
                        </p>
                        <div class="highlight-list">
                            { for blocks(MARKET_HIGHLIGHTS, market_highlight) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="page-footer">
            <div class="footer-card">
                <div class="footer-banner">
                    {"Authorized USA & UK Export Growth Strategy for BTC Pharm"}
                </div>
                <div class="footer-body">
                    <div class="footer-contact">
                        <div class="footer-brand">
                            <span class="brand-mark dark">{"⚗️"}</span>
                            <div>
                                <h2>{BRAND_NAME}</h2>
                                <p>{BRAND_TAGLINE}</p>
                            </div>
                        </div>
                        <div class="contact-line">{"✉️ "}{CONTACT_EMAIL}</div>
                        <div class="contact-line">{"📞 "}{CONTACT_PHONE}</div>
                    </div>
                    <div class="footer-signature">
                        <h3>{REPRESENTATIVE}</h3>
                        <div class="signature-rule"></div>
                        <p>{"Authorized Representative"}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div>{"© 2026 Online Promotion House - All Rights Reserved"}</div>
                    <div class="footer-notes">
                        <span>{"Confidential Proposal"}</span>
                        <span>{"BTC Pharm USA & UK Strategy"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Proposal)]
pub fn proposal() -> Html {
    html! {
        <div class="proposal-page">
            <style>{CARD_STYLES}</style>
            <style>
                {r#"
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .page-section { padding: 8rem 0; background: #ffffff; }
                .page-section.muted-bg { background: #f8fafc; }
                .section-header { text-align: center; margin-bottom: 4rem; }
                .section-header h2 {
                    font-size: 3rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                    color: #0f172a;
                }
                .section-header p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    font-weight: 500;
                    color: #64748b;
                }
                .section-header.light h2 { color: #ffffff; }
                .section-header.light p { color: rgba(255, 255, 255, 0.8); }
                .section-rule {
                    width: 5rem;
                    height: 0.375rem;
                    background: #ea580c;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                }
                .card-grid { display: grid; gap: 2rem; }
                .card-grid.three { grid-template-columns: repeat(3, 1fr); }
                .card-grid.four { grid-template-columns: repeat(4, 1fr); }
                .card-grid.two {
                    grid-template-columns: repeat(2, 1fr);
                    max-width: 64rem;
                    margin: 0 auto 6rem;
                    gap: 2.5rem;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding-top: 5rem;
                    background: linear-gradient(135deg, #ea580c 0%, #f97316 50%, #fb923c 100%);
                }
                .hero-glow { position: absolute; border-radius: 9999px; }
                .hero-glow.top {
                    top: -10%;
                    right: -5%;
                    width: 500px;
                    height: 500px;
                    background: rgba(255, 255, 255, 0.1);
                    filter: blur(120px);
                }
                .hero-glow.bottom {
                    bottom: 10%;
                    left: -10%;
                    width: 400px;
                    height: 400px;
                    background: rgba(0, 0, 0, 0.05);
                    filter: blur(100px);
                }
                .hero-grid {
                    position: relative;
                    z-index: 10;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    color: #ffffff;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    padding: 0.625rem 1.25rem;
                    border-radius: 9999px;
                    margin-bottom: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .pulse {
                    width: 0.625rem;
                    height: 0.625rem;
                    background: #ffffff;
                    border-radius: 9999px;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .hero h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }
                .hero h1 .accent { color: #fed7aa; }
                .hero-pitch {
                    font-size: 1.5rem;
                    margin-bottom: 3rem;
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.6;
                    max-width: 42rem;
                }
                .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1.5rem; }
                .hero-cta {
                    padding: 1.25rem 2.5rem;
                    border-radius: 1rem;
                    font-weight: 900;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-cta.primary { background: #ffffff; color: #ea580c; }
                .hero-cta.secondary {
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    color: #ffffff;
                }
                .hero-preview {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(24px);
                    border-radius: 3rem;
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .browser-bar {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    padding: 1rem;
                    border-radius: 1rem;
                }
                .light { width: 0.875rem; height: 0.875rem; border-radius: 9999px; }
                .light.red { background: #ef4444; }
                .light.yellow { background: #eab308; }
                .light.green { background: #22c55e; }
                .browser-url {
                    flex: 1;
                    margin-left: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    padding: 0.5rem 1.25rem;
                    border-radius: 0.75rem;
                    font-size: 11px;
                    font-family: monospace;
                    color: rgba(255, 255, 255, 0.7);
                }
                .hero-preview img {
                    width: 100%;
                    height: 450px;
                    object-fit: cover;
                    border-radius: 1rem;
                }

                .proof-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .ad-preview {
                    position: relative;
                    background: #ffffff;
                    border-radius: 3rem;
                    border: 1px solid #e2e8f0;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .ad-url-bar {
                    background: #f1f5f9;
                    padding: 1.25rem 2rem;
                    font-size: 0.75rem;
                    font-family: monospace;
                    color: #94a3b8;
                }
                .ad-body { padding: 2.5rem; display: flex; flex-direction: column; gap: 1rem; }
                .ad-label {
                    font-size: 0.75rem;
                    color: #ea580c;
                    text-transform: uppercase;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                }
                .ad-title { color: #1d4ed8; font-size: 1.5rem; font-weight: 700; }
                .ad-link { color: #166534; font-size: 0.875rem; }
                .ad-text { color: #475569; line-height: 1.6; max-width: 32rem; }
                .ad-tags { display: flex; gap: 1.5rem; padding-top: 1rem; }
                .ad-tag {
                    font-size: 0.75rem;
                    padding: 0.5rem 1rem;
                    border-radius: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                }
                .ad-tag.orange { background: #ffedd5; color: #c2410c; }
                .ad-tag.blue { background: #eff6ff; color: #1d4ed8; }
                .ad-live {
                    position: absolute;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    background: #0f172a;
                    color: #ffffff;
                    padding: 1.25rem;
                    border-radius: 1rem;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                }
                .pill {
                    display: inline-block;
                    background: #ffedd5;
                    color: #c2410c;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    margin-bottom: 2rem;
                }
                .proof-title { font-size: 3rem; font-weight: 900; color: #0f172a; margin-bottom: 2rem; }
                .proof-text { color: #64748b; font-size: 1.25rem; margin-bottom: 3rem; line-height: 1.6; }
                .highlight-list { display: flex; flex-direction: column; gap: 1.5rem; }

                .page-footer { background: #0f172a; padding: 8rem 1.5rem; }
                .footer-card {
                    max-width: 1280px;
                    margin: 0 auto;
                    background: #ffffff;
                    border-radius: 2rem;
                    overflow: hidden;
                }
                .footer-banner {
                    background: #f04a40;
                    color: #ffffff;
                    padding: 1rem 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .footer-body {
                    padding: 5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 3rem;
                }
                .footer-contact { display: flex; flex-direction: column; gap: 1.5rem; }
                .footer-brand { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                .footer-brand h2 {
                    color: #0f172a;
                    font-weight: 900;
                    font-size: 1.5rem;
                    text-transform: uppercase;
                    margin: 0;
                }
                .footer-brand p {
                    color: #ea580c;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    margin: 0.25rem 0 0;
                }
                .brand-mark.dark { background: #0f172a; padding: 0.75rem; border-radius: 0.75rem; }
                .contact-line { color: #475569; font-weight: 700; font-size: 1.125rem; }
                .footer-signature {
                    border-left: 1px solid #f1f5f9;
                    padding-left: 5rem;
                    text-align: right;
                }
                .footer-signature h3 {
                    font-family: serif;
                    font-style: italic;
                    font-weight: 300;
                    font-size: 6rem;
                    color: #0f172a;
                    margin: 0 0 1rem;
                }
                .signature-rule { height: 2px; background: #e2e8f0; margin-bottom: 1rem; }
                .footer-signature p,
                .footer-bottom {
                    color: #94a3b8;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                }
                .footer-bottom {
                    padding: 2rem 5rem;
                    background: #f8fafc;
                    border-top: 1px solid #f1f5f9;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-notes { display: flex; gap: 2rem; }

                @media (max-width: 1023px) {
                    .hero-grid, .proof-grid { grid-template-columns: 1fr; }
                    .hero-preview { display: none; }
                    .card-grid.three, .card-grid.four { grid-template-columns: repeat(2, 1fr); }
                    .card-grid.two { grid-template-columns: 1fr; }
                }
                @media (max-width: 767px) {
                    .hero h1 { font-size: 3rem; }
                    .hero-pitch { font-size: 1.25rem; }
                    .section-header h2 { font-size: 1.875rem; }
                    .card-grid.three, .card-grid.four { grid-template-columns: 1fr; }
                    .footer-body, .footer-bottom { flex-direction: column; align-items: flex-start; padding: 2.5rem; }
                    .footer-signature { border-left: none; padding-left: 0; text-align: left; }
                    .footer-signature h3 { font-size: 3.75rem; }
                }
                "#}
            </style>

            <Hero />

            <section class="page-section muted-bg" id="features">
                <div class="container">
                    <SectionHeader
                        title="Core SEO Implementation"
                        subtitle="Our technical SEO suite is designed to make BTC Pharm visible to bulk industrial buyers in the USA and UK."
                    />
                    <div class="card-grid three">
                        { for blocks(CORE_SEO_FEATURES, feature_card) }
                    </div>
                </div>
            </section>

            <section class="page-section" id="roadmap">
                <div class="container">
                    <SectionHeader
                        title="USA & UK Export Roadmap"
                        subtitle="A structured 1 Year journey to capture high-value pharma intermediate inquiries."
                    />
                    <div class="card-grid four">
                        { for blocks(ROADMAP, roadmap_step) }
                    </div>
                </div>
            </section>

            <ProofSection />

            <section class="page-section" id="keywords">
                <div class="container">
                    <SectionHeader
                        title="Strategic Export Keywords"
                        subtitle="Precision-tuned target keywords based on your current product catalog and search demand in the USA and UK."
                    />
                    <div class="card-grid three">
                        { for blocks(PRODUCT_KEYWORDS, keyword_group) }
                    </div>
                </div>
            </section>

            <section class="page-section muted-bg" id="pricing">
                <div class="container">
                    <SectionHeader
                        title="USA & UK Export Plans"
                        subtitle="Focused investment levels to capture the Western market for BTC Pharm."
                    />
                    <div class="card-grid two">
                        { for blocks(PRICING_TIERS, price_tier) }
                    </div>
                </div>
            </section>

            <Footer />
        </div>
    }
}

use yew::prelude::*;

use crate::content::{FeatureCard, KeywordGroup, MarketHighlight, PriceTier, RoadmapStep, PLAN_GUARANTEES};

/// One rendered block per entry, in input order. Blocks are keyed by
/// position, so repeated entries still get distinct keys.
pub fn blocks<T>(items: &[T], render: impl Fn(usize, &T) -> Html) -> Vec<Html> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| render(index, item))
        .collect()
}

pub fn feature_card(index: usize, feature: &FeatureCard) -> Html {
    html! {
        <div key={index} class="card feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h4>{feature.title}</h4>
            <p>{feature.description}</p>
        </div>
    }
}

pub fn roadmap_step(index: usize, step: &RoadmapStep) -> Html {
    html! {
        <div key={index} class="card roadmap-step">
            <div class="roadmap-head">
                <div class="roadmap-icon">{step.icon}</div>
                <span class="roadmap-month">{step.month}</span>
            </div>
            <h4>{step.title}</h4>
            <p>{step.description}</p>
            <ul class="bullet-list">
                { for step.items.iter().enumerate().map(|(i, item)| html! {
                    <li key={i}><span class="dot"></span>{*item}</li>
                }) }
            </ul>
        </div>
    }
}

pub fn market_highlight(index: usize, highlight: &MarketHighlight) -> Html {
    html! {
        <div key={index} class="market-highlight">
            <div class="highlight-icon">{highlight.icon}</div>
            <div>
                <div class="highlight-market">{highlight.market}</div>
                <div class="highlight-goal">
                    {highlight.goal}{" — "}
                    <span class="highlight-status">{highlight.status}</span>
                </div>
            </div>
        </div>
    }
}

pub fn keyword_group(index: usize, group: &KeywordGroup) -> Html {
    html! {
        <div key={index} class="card keyword-group">
            <div class="keyword-head">
                <div class="keyword-code">{group.code}</div>
                <div>
                    <h4>{group.region}</h4>
                    <div class="keyword-engine">{"🎯 ON "}{group.engine}</div>
                </div>
            </div>
            <div class="keyword-banner">
                <div class="keyword-banner-title">{"Export Search"}</div>
                <p>{"Direct B2B Industrial Queries."}</p>
            </div>
            <div class="keyword-samples">
                { for group.samples.iter().enumerate().map(|(i, keyword)| html! {
                    <div key={i} class="keyword-sample"><span class="dot"></span>{*keyword}</div>
                }) }
            </div>
        </div>
    }
}

pub fn price_tier(index: usize, tier: &PriceTier) -> Html {
    html! {
        <div key={index} class={classes!("card", "price-tier", tier.featured.then(|| "featured"))}>
            if tier.featured {
                <div class="tier-ribbon">{"Maximum Reach"}</div>
            }
            <div class="tier-head">
                <h4>{tier.title}</h4>
                <div class="tier-price">
                    <span class="tier-investment">{tier.investment}</span>
                    <span class="tier-tax">{"+ GST"}</span>
                </div>
                <div class="tier-meta">{"📈 "}{tier.keywords}</div>
                <div class="tier-meta muted">{"📣 "}{tier.ads_credit}</div>
                <div class="tier-meta muted">{tier.duration}{" · "}{tier.coverage}</div>
            </div>
            <div class="tier-features">
                <div class="tier-features-title">{"🛡️ Included SEO Features"}</div>
                { for tier.seo_features.iter().enumerate().map(|(i, feature)| html! {
                    <div key={i} class="tier-feature">{"✔ "}{*feature}</div>
                }) }
            </div>
            <div class="tier-guarantees">
                { for PLAN_GUARANTEES.iter().enumerate().map(|(i, (icon, text))| html! {
                    <div key={i} class="tier-guarantee">{*icon}{" "}{*text}</div>
                }) }
            </div>
            <button class="tier-button">{"Initiate Strategy"}</button>
        </div>
    }
}

pub const CARD_STYLES: &str = r#"
.card {
    border: 1px solid #f1f5f9;
    border-radius: 2.5rem;
    padding: 2.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: all 0.3s ease;
    display: flex;
    flex-direction: column;
}
.card:hover { box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.card h4 {
    font-size: 1.5rem;
    font-weight: 900;
    color: #0f172a;
    margin: 0 0 0.75rem;
}
.card p {
    color: #64748b;
    font-size: 0.875rem;
    line-height: 1.6;
    font-weight: 500;
}
.dot {
    display: inline-block;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: #f97316;
    margin-right: 0.75rem;
    flex-shrink: 0;
}
.feature-card { background: #ffffff; }
.feature-icon {
    width: 4rem;
    height: 4rem;
    background: #ffedd5;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    margin-bottom: 1.5rem;
}
.roadmap-step { background: #f8fafc; }
.roadmap-step:hover { background: #fff7ed; }
.roadmap-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 2rem;
}
.roadmap-icon {
    background: #ea580c;
    padding: 1.25rem;
    border-radius: 1.5rem;
    font-size: 2rem;
}
.roadmap-month {
    color: #ea580c;
    font-weight: 900;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    padding-top: 0.5rem;
}
.bullet-list {
    list-style: none;
    padding: 0;
    margin: auto 0 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.bullet-list li {
    display: flex;
    align-items: flex-start;
    font-size: 0.875rem;
    font-weight: 700;
    color: #334155;
}
.market-highlight {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    background: #ffffff;
    padding: 2rem;
    border-radius: 2rem;
    border: 1px solid #f1f5f9;
}
.market-highlight:hover { border-color: #ea580c; }
.highlight-icon {
    width: 3.5rem;
    height: 3.5rem;
    background: #ffedd5;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
}
.highlight-market { font-weight: 900; color: #0f172a; font-size: 1.125rem; }
.highlight-goal { font-size: 0.875rem; color: #64748b; font-weight: 700; }
.highlight-status {
    color: #ea580c;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 10px;
    margin-left: 0.5rem;
}
.keyword-group { background: #f8fafc; border-radius: 3rem; }
.keyword-head { display: flex; align-items: center; gap: 1.5rem; margin-bottom: 2.5rem; }
.keyword-code { font-size: 3rem; font-weight: 900; color: rgba(15, 23, 42, 0.1); }
.keyword-engine {
    color: #ea580c;
    font-weight: 900;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.keyword-banner {
    background: #fff9f5;
    border: 1px solid #ffedd5;
    border-radius: 1.5rem;
    padding: 2rem;
    margin-bottom: 2.5rem;
}
.keyword-banner-title { font-size: 1.875rem; font-weight: 900; color: #ea580c; }
.keyword-samples { display: flex; flex-direction: column; gap: 0.75rem; }
.keyword-sample {
    display: flex;
    align-items: center;
    color: #475569;
    font-size: 0.875rem;
    font-weight: 700;
}
.price-tier {
    position: relative;
    background: #ffffff;
    border-radius: 3.5rem;
    padding: 3rem;
    overflow: hidden;
}
.price-tier.featured {
    box-shadow: 0 0 0 6px #ea580c, 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    transform: scale(1.05);
    z-index: 10;
}
.tier-ribbon {
    position: absolute;
    top: 0;
    right: 0;
    background: #ea580c;
    color: #ffffff;
    font-size: 10px;
    font-weight: 900;
    padding: 0.75rem 2rem;
    border-bottom-left-radius: 2rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
}
.tier-head { margin-bottom: 2.5rem; }
.tier-head h4 { text-transform: uppercase; }
.tier-price { display: flex; align-items: baseline; gap: 0.5rem; }
.tier-investment { font-size: 3rem; font-weight: 900; color: #ea580c; }
.tier-tax, .tier-meta {
    font-weight: 900;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.tier-meta { color: #f97316; margin-top: 0.5rem; }
.tier-meta.muted, .tier-tax { color: #64748b; }
.tier-features {
    background: #f8fafc;
    padding: 1.5rem;
    border-radius: 1rem;
    margin-bottom: 2rem;
    display: grid;
    gap: 0.75rem;
}
.tier-features-title {
    font-size: 0.75rem;
    font-weight: 900;
    text-transform: uppercase;
    color: #94a3b8;
}
.tier-feature { font-size: 0.75rem; color: #334155; font-weight: 700; }
.tier-guarantees {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin-bottom: 3rem;
    flex-grow: 1;
}
.tier-guarantee { font-size: 0.875rem; color: #334155; font-weight: 700; }
.tier-button {
    width: 100%;
    padding: 1.25rem;
    border: none;
    border-radius: 1rem;
    font-weight: 900;
    font-size: 1.125rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    background: #0f172a;
    color: #ffffff;
    cursor: pointer;
}
.price-tier.featured .tier-button { background: #ea580c; }
"#;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::logos::ClientLogos;
use crate::components::reveal::Reveal;
use crate::components::service_card::{
    arrow_icon, check_icon, email_icon, meta_icon, whatsapp_icon, ServiceCard,
};
use crate::components::shapes::FloatingShapes;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomeProps) -> Html {
    let go = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    let pains = [
        "Scattered campaigns with no cohesion",
        "Agencies that don't understand SaaS",
        "Generic strategies, generic results",
        "No visibility into what's working",
    ];
    let wins = [
        "Unified strategy across all channels",
        "Deep SaaS & App expertise",
        "Creative that stands out",
        "Real-time performance dashboards",
    ];

    html! {
        <div class="page">
            // Hero
            <section class="hero">
                <FloatingShapes />
                <div class="hero-backdrop"></div>

                <div class="shell hero-body">
                    <div class="hero-copy">
                        <Reveal>
                            <div class="hero-badge">
                                <span class="badge-dot"></span>
                                <span>{"Tech-Enabled Marketing"}</span>
                            </div>
                        </Reveal>

                        <Reveal delay_ms={100}>
                            <h1 class="hero-title">
                                {"The Global"}
                                <span class="accent-text">{"Marketer"}</span>
                            </h1>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <p class="hero-subtitle">
                                {"We transform SaaS & Mobile Apps into market leaders through precision-targeted Meta Ads, intelligent WhatsApp automation, and revenue-driving email campaigns."}
                            </p>
                        </Reveal>

                        <Reveal delay_ms={300}>
                            <div class="hero-actions">
                                <button onclick={go(Page::Contact)} class="button-primary">
                                    {"Start Your Project"}
                                    { arrow_icon() }
                                </button>
                                <button onclick={go(Page::Services)} class="button-secondary">
                                    {"Explore Services"}
                                </button>
                            </div>
                        </Reveal>
                    </div>
                </div>

                <div class="scroll-indicator">
                    <span>{"Scroll"}</span>
                    <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </div>
            </section>

            // Problem / solution
            <section class="section section-white">
                <div class="shell">
                    <div class="split-grid spaced">
                        <Reveal>
                            <div class="accent-bar-block">
                                <span class="eyebrow">{"The Problem"}</span>
                                <h2>{"Lost in the noise of digital chaos?"}</h2>
                                <p class="lede">
                                    {"Most marketing agencies deliver vanity metrics. You need real growth—qualified leads, engaged users, and revenue that scales. Stop burning budget on campaigns that don't convert."}
                                </p>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={200}>
                            <div class="panel panel-pain">
                                <ul class="cross-list">
                                    { for pains.iter().map(|item| html! {
                                        <li>
                                            <svg class="cross-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                            </svg>
                                            <span>{ *item }</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    </div>

                    <div class="split-grid">
                        <Reveal delay_ms={100} class="order-last-desktop">
                            <div class="panel panel-win">
                                <ul class="check-list">
                                    { for wins.iter().map(|item| html! {
                                        <li>
                                            { check_icon("#0066FF") }
                                            <span>{ *item }</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                        <Reveal>
                            <div class="accent-bar-block">
                                <span class="eyebrow">{"The Solution"}</span>
                                <h2>{"Clarity meets creativity."}</h2>
                                <p class="lede">
                                    {"We combine data-driven precision with bold creative execution. Every campaign is engineered for growth, every message crafted for conversion. One team, one vision, real results."}
                                </p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Stats
            <section class="section section-dark stats-band">
                <div class="grid-overlay"></div>
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <h2>{"Numbers that speak for themselves"}</h2>
                            <p>{"12 years of relentless growth, hundreds of success stories, and counting."}</p>
                        </div>
                    </Reveal>

                    <div class="stats-grid">
                        <div class="stat-card">
                            <StatCounter value={12} suffix="+" label="Years Experience" />
                        </div>
                        <div class="stat-card">
                            <StatCounter value={340} suffix="+" label="Projects Delivered" />
                        </div>
                        <div class="stat-card">
                            <StatCounter value={200} suffix="+" label="Happy Clients" />
                        </div>
                    </div>
                </div>
            </section>

            // Services preview
            <section class="section section-gray">
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <span class="eyebrow">{"What We Do"}</span>
                            <h2>{"Three channels. One mission."}</h2>
                            <p>{"Integrated marketing that drives real business outcomes."}</p>
                        </div>
                    </Reveal>

                    <div class="card-grid">
                        <ServiceCard
                            index={0}
                            icon={meta_icon()}
                            title="Meta Ads"
                            description="Precision-targeted campaigns that turn scrollers into customers. Full-funnel strategy for maximum ROI."
                            features={vec![
                                AttrValue::from("Lead Generation"),
                                AttrValue::from("Retargeting Campaigns"),
                                AttrValue::from("Creative Strategy"),
                                AttrValue::from("Performance Analytics"),
                            ]}
                        />
                        <ServiceCard
                            index={1}
                            icon={whatsapp_icon()}
                            title="WhatsApp Marketing"
                            description="Direct-to-customer messaging at scale. Automate conversations, nurture leads, close deals."
                            features={vec![
                                AttrValue::from("API Integration"),
                                AttrValue::from("Broadcast Campaigns"),
                                AttrValue::from("Marketing Automation"),
                                AttrValue::from("Conversational Flows"),
                            ]}
                        />
                        <ServiceCard
                            index={2}
                            icon={email_icon()}
                            title="Email Marketing"
                            description="Revenue-driving sequences that engage, nurture, and convert. Every email engineered for impact."
                            features={vec![
                                AttrValue::from("Lifecycle Automation"),
                                AttrValue::from("Drip Campaigns"),
                                AttrValue::from("Behavioral Triggers"),
                                AttrValue::from("A/B Testing"),
                            ]}
                        />
                    </div>

                    <Reveal delay_ms={400}>
                        <div class="section-cta">
                            <button onclick={go(Page::Services)} class="text-link">
                                {"Explore all services"}
                                { arrow_icon() }
                            </button>
                        </div>
                    </Reveal>
                </div>
            </section>

            // Clients
            <section class="section section-white">
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <span class="eyebrow">{"Trusted By"}</span>
                            <h2>{"Growing brands across US & UK"}</h2>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={200}>
                        <ClientLogos />
                    </Reveal>
                </div>
            </section>

            // Closing CTA
            <section class="section section-gradient cta-band">
                <div class="cta-circles"></div>
                <div class="shell narrow">
                    <Reveal>
                        <h2>{"Ready to scale?"}</h2>
                        <p>
                            {"Let's discuss how we can transform your marketing into a growth engine. No fluff, just results."}
                        </p>
                        <button onclick={go(Page::Contact)} class="button-inverted">
                            {"Get Your Free Strategy Call"}
                            { arrow_icon() }
                        </button>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

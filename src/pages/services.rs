use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::service_card::{
    arrow_icon, check_icon, email_icon, meta_icon, whatsapp_icon,
};
use crate::components::shapes::FloatingShapes;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(ServicesPage)]
pub fn services_page(props: &ServicesProps) -> Html {
    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    let meta_features = [
        "Lead Generation",
        "Full-Funnel Strategy",
        "Creative Development",
        "Audience Research",
        "Retargeting Campaigns",
        "Performance Analytics",
    ];
    let whatsapp_features = [
        "API Integration",
        "Broadcast Campaigns",
        "Marketing Automation",
        "Conversational Flows",
        "Lead Qualification",
        "Customer Support Bots",
    ];
    let email_features = [
        "Lifecycle Automation",
        "Drip Campaigns",
        "Behavioral Triggers",
        "A/B Testing",
        "Deliverability Optimization",
        "Revenue Attribution",
    ];

    let process = [
        ("01", "Discovery", "Deep dive into your business, audience, and goals."),
        ("02", "Strategy", "Custom roadmap built for your specific needs."),
        ("03", "Execute", "Launch campaigns with precision and creativity."),
        ("04", "Optimize", "Continuous improvement driven by data."),
    ];

    let feature_grid = |features: &[&'static str], color: &'static str| {
        html! {
            <div class="feature-grid">
                { for features.iter().map(|item| html! {
                    <div class="feature-grid-item">
                        { check_icon(color) }
                        <span>{ *item }</span>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <div class="page subpage">
            // Hero
            <section class="subpage-hero">
                <FloatingShapes />
                <div class="hero-backdrop"></div>

                <div class="shell">
                    <div class="hero-copy">
                        <Reveal>
                            <span class="eyebrow">{"Services"}</span>
                            <h1 class="page-title">
                                {"Marketing that"}
                                <span class="accent-text">{"moves needles."}</span>
                            </h1>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <p class="lede">
                                {"Three powerful channels, one unified strategy. We integrate Meta Ads, WhatsApp, and Email to create marketing systems that generate, nurture, and convert leads at scale."}
                            </p>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Meta Ads
            <section id="meta-ads" class="section section-white">
                <div class="shell">
                    <div class="split-grid">
                        <Reveal>
                            <div class="service-detail">
                                <div class="service-icon-tile tile-blue">
                                    { meta_icon() }
                                </div>
                                <span class="eyebrow">{"Service 01"}</span>
                                <h2>{"Meta Ads"}</h2>
                                <p class="lede">
                                    {"Precision-targeted campaigns that turn scrollers into customers. We build full-funnel strategies across Facebook and Instagram that deliver qualified leads—not just clicks."}
                                </p>
                                { feature_grid(&meta_features, "#0066FF") }
                            </div>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <div class="decor-panel decor-blue">
                                <svg class="decor-art" viewBox="0 0 400 400">
                                    <circle cx="200" cy="200" r="150" fill="none" stroke="#0066FF" stroke-width="1" stroke-dasharray="10 10" />
                                    <circle cx="200" cy="200" r="100" fill="none" stroke="#00D4AA" stroke-width="1" stroke-dasharray="5 5" />
                                </svg>
                                <div class="decor-caption">
                                    <div class="decor-number">{"01"}</div>
                                    <p>{"Lead Generation Excellence"}</p>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // WhatsApp
            <section id="whatsapp" class="section section-gray">
                <div class="shell">
                    <div class="split-grid">
                        <Reveal delay_ms={200} class="order-first-desktop">
                            <div class="decor-panel decor-green">
                                <svg class="decor-art" viewBox="0 0 400 400">
                                    <path d="M50 200 Q200 50 350 200 Q200 350 50 200" fill="none" stroke="#25D366" stroke-width="2"/>
                                    <path d="M100 200 Q200 100 300 200 Q200 300 100 200" fill="none" stroke="#128C7E" stroke-width="1"/>
                                </svg>
                                <div class="decor-caption green">
                                    <div class="decor-number">{"02"}</div>
                                    <p>{"Conversational Commerce"}</p>
                                </div>
                            </div>
                        </Reveal>

                        <Reveal>
                            <div class="service-detail">
                                <div class="service-icon-tile tile-green">
                                    { whatsapp_icon() }
                                </div>
                                <span class="eyebrow green">{"Service 02"}</span>
                                <h2>{"WhatsApp Marketing"}</h2>
                                <p class="lede">
                                    {"Direct-to-customer messaging at scale. We build automated WhatsApp flows that engage prospects, nurture leads, and close deals—all through the world's most personal channel."}
                                </p>
                                { feature_grid(&whatsapp_features, "#16A34A") }
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Email
            <section id="email" class="section section-white">
                <div class="shell">
                    <div class="split-grid">
                        <Reveal>
                            <div class="service-detail">
                                <div class="service-icon-tile tile-purple">
                                    { email_icon() }
                                </div>
                                <span class="eyebrow purple">{"Service 03"}</span>
                                <h2>{"Email Marketing"}</h2>
                                <p class="lede">
                                    {"Revenue-driving sequences that engage, nurture, and convert. Every email is engineered for impact—from welcome series to win-back campaigns, we build systems that print money."}
                                </p>
                                { feature_grid(&email_features, "#9333EA") }
                            </div>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <div class="decor-panel decor-purple">
                                <svg class="decor-art" viewBox="0 0 400 400">
                                    <rect x="50" y="100" width="300" height="200" rx="20" fill="none" stroke="#9333EA" stroke-width="2"/>
                                    <path d="M50 120 L200 220 L350 120" fill="none" stroke="#EC4899" stroke-width="2"/>
                                </svg>
                                <div class="decor-caption purple">
                                    <div class="decor-number">{"03"}</div>
                                    <p>{"Revenue-Driving Sequences"}</p>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Process
            <section class="section section-dark">
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <span class="eyebrow light">{"Our Process"}</span>
                            <h2>{"How we work"}</h2>
                        </div>
                    </Reveal>

                    <div class="process-grid">
                        { for process.iter().enumerate().map(|(i, (step, title, desc))| html! {
                            <Reveal key={i} delay_ms={(i as u32) * 100}>
                                <div class="process-step">
                                    <div class="process-number">{ *step }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                    { if i < process.len() - 1 {
                                        html! { <div class="process-connector"></div> }
                                    } else {
                                        html! {}
                                    } }
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            // CTA
            <section class="section section-gradient cta-band">
                <div class="shell narrow">
                    <Reveal>
                        <h2>{"Ready to transform your marketing?"}</h2>
                        <p>{"Let's discuss which services are right for your business."}</p>
                        <button onclick={go_contact} class="button-inverted">
                            {"Schedule a Strategy Call"}
                            { arrow_icon() }
                        </button>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

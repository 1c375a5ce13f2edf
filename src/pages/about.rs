use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::service_card::arrow_icon;
use crate::components::shapes::FloatingShapes;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutProps) -> Html {
    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    let values = [
        ("Clarity", "Simple strategies that work. No jargon, no fluff."),
        ("Creativity", "Bold ideas that stand out in crowded feeds."),
        ("Precision", "Data-driven decisions, not guesswork."),
        ("Results", "We measure success by your growth, not ours."),
    ];

    let team = [
        ("Alex Chen", "Founder & Strategy"),
        ("Sarah Mitchell", "Head of Creative"),
        ("James Rodriguez", "Performance Lead"),
    ];

    html! {
        <div class="page subpage">
            // Hero
            <section class="subpage-hero">
                <FloatingShapes />
                <div class="hero-backdrop"></div>

                <div class="shell">
                    <div class="hero-copy">
                        <Reveal>
                            <span class="eyebrow">{"About Us"}</span>
                            <h1 class="page-title">
                                {"We believe in"}
                                <span class="accent-text">{"clarity over complexity."}</span>
                            </h1>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <p class="lede">
                                {"Founded 12 years ago with a simple mission: cut through the noise and deliver marketing that actually works. Today, we're a tech-enabled agency helping SaaS and mobile apps conquer the US and UK markets."}
                            </p>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Story
            <section class="section section-white">
                <div class="shell">
                    <div class="split-grid">
                        <Reveal>
                            <div class="story-tile">
                                <div class="story-tile-center">
                                    <div class="brand-mark large">
                                        <span>{"OK"}</span>
                                    </div>
                                    <p>{"OKOnline HQ"}</p>
                                </div>
                                <svg class="story-decor top-right" viewBox="0 0 100 100">
                                    <circle cx="50" cy="50" r="40" fill="none" stroke="#0066FF" stroke-width="2"/>
                                </svg>
                                <svg class="story-decor bottom-left" viewBox="0 0 100 100">
                                    <rect x="20" y="20" width="60" height="60" fill="none" stroke="#00D4AA" stroke-width="2" transform="rotate(15 50 50)"/>
                                </svg>
                            </div>
                        </Reveal>

                        <Reveal delay_ms={200}>
                            <span class="eyebrow">{"Our Story"}</span>
                            <h2>{"From startup hustle to global reach"}</h2>
                            <div class="story-copy">
                                <p>
                                    {"We started as a small team obsessed with one question: why do most marketing campaigns fail? The answer was clear—too many agencies prioritize complexity over clarity, vanity metrics over real results."}
                                </p>
                                <p>
                                    {"So we built something different. A tech-enabled agency that combines human creativity with data-driven precision. Every campaign we run is designed to move the needle—whether that's qualified leads, app installs, or revenue growth."}
                                </p>
                                <p>
                                    {"Today, we serve ambitious SaaS companies and mobile apps across the US and UK, helping them cut through the digital noise and connect with customers who matter."}
                                </p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Values
            <section class="section section-gray">
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <span class="eyebrow">{"Our Values"}</span>
                            <h2>{"What drives us every day"}</h2>
                        </div>
                    </Reveal>

                    <div class="values-grid">
                        { for values.iter().enumerate().map(|(i, (title, desc))| html! {
                            <Reveal key={i} delay_ms={(i as u32) * 100}>
                                <div class="value-card">
                                    <div class="value-number">{ i + 1 }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            // Team
            <section class="section section-white">
                <div class="shell">
                    <Reveal>
                        <div class="section-heading">
                            <span class="eyebrow">{"The Team"}</span>
                            <h2>{"Meet the minds behind the magic"}</h2>
                            <p>{"A lean team of strategists, creatives, and tech enthusiasts united by one goal—your growth."}</p>
                        </div>
                    </Reveal>

                    <div class="team-grid">
                        { for team.iter().enumerate().map(|(i, (name, role))| {
                            let initials: String = name
                                .split_whitespace()
                                .filter_map(|word| word.chars().next())
                                .collect();
                            html! {
                                <Reveal key={i} delay_ms={(i as u32) * 150}>
                                    <div class="team-member">
                                        <div class="avatar">
                                            <span>{ initials }</span>
                                        </div>
                                        <h3>{ *name }</h3>
                                        <p>{ *role }</p>
                                    </div>
                                </Reveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            // CTA
            <section class="section section-dark cta-band">
                <div class="shell narrow">
                    <Reveal>
                        <h2>{"Let's build something great together"}</h2>
                        <p>{"Ready to see what clarity and creativity can do for your brand?"}</p>
                        <button onclick={go_contact} class="button-inverted">
                            {"Start the Conversation"}
                            { arrow_icon() }
                        </button>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

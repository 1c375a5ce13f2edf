use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

mod config;
mod observer;
mod components {
    pub mod counter;
    pub mod footer;
    pub mod logos;
    pub mod reveal;
    pub mod service_card;
    pub mod shapes;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
}

use components::footer::Footer;
use pages::{about::AboutPage, contact::ContactPage, home::HomePage, services::ServicesPage};

/// The four site pages. Switching happens entirely in memory; the App root
/// owns the current value and hands it down with a navigation callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Services, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }
}

fn render_page(page: Page, on_navigate: Callback<Page>) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <HomePage {on_navigate} /> }
        }
        Page::About => {
            info!("Rendering About page");
            html! { <AboutPage {on_navigate} /> }
        }
        Page::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage {on_navigate} /> }
        }
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current_page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window_clone.scroll_y() {
                        is_scrolled.set(scroll_y > 50.0);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let navigate = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    let navigate_and_close = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(page);
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={navigate(Page::Home)}>
                    <div class="brand-mark">
                        <span>{"OK"}</span>
                    </div>
                    <span class="brand-name">{ config::SITE_NAME }</span>
                </button>

                <div class="nav-links">
                    { for Page::ALL.iter().map(|page| {
                        let active = *page == props.current_page;
                        html! {
                            <button
                                class={classes!("nav-link", active.then(|| "active"))}
                                onclick={navigate(*page)}
                            >
                                { page.label() }
                            </button>
                        }
                    }) }
                    <button class="nav-cta" onclick={navigate(Page::Contact)}>
                        {"Get Started"}
                    </button>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for Page::ALL.iter().map(|page| html! {
                    <button class="mobile-link" onclick={navigate_and_close(*page)}>
                        { page.label() }
                    </button>
                }) }
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let current_page = use_state(Page::default);

    // Every page change lands the reader back at the top, smoothly.
    {
        let page = *current_page;
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
                || ()
            },
            page,
        );
    }

    let on_navigate = {
        let current_page = current_page.clone();
        Callback::from(move |page: Page| current_page.set(page))
    };

    html! {
        <div class="app-root">
            <style>{ GLOBAL_STYLES }</style>
            <Nav current_page={*current_page} on_navigate={on_navigate.clone()} />
            { render_page(*current_page, on_navigate.clone()) }
            <Footer on_navigate={on_navigate} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    config::apply_document_metadata();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

const GLOBAL_STYLES: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=DM+Sans:ital,opsz,wght@0,9..40,100..1000;1,9..40,100..1000&display=swap');

    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        font-family: 'DM Sans', -apple-system, BlinkMacSystemFont, sans-serif;
        background: #fff;
        color: #111827;
        -webkit-font-smoothing: antialiased;
    }

    button {
        font-family: inherit;
        border: none;
        background: none;
        cursor: pointer;
    }

    @keyframes float-slow {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        50% { transform: translateY(-20px) rotate(5deg); }
    }
    @keyframes float-medium {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        50% { transform: translateY(-15px) rotate(-5deg); }
    }
    @keyframes float-fast {
        0%, 100% { transform: translateY(0) rotate(0deg); }
        50% { transform: translateY(-10px) rotate(3deg); }
    }
    @keyframes pulse-dot {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }
    @keyframes bounce-down {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }

    /* ---- layout ---- */

    .shell {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .shell.narrow {
        max-width: 56rem;
        text-align: center;
    }

    .section {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
    }
    .section-white { background: #fff; }
    .section-gray { background: #F9FAFB; }
    .section-dark {
        background: linear-gradient(135deg, #111827 0%, #111827 60%, #1E3A8A 100%);
        color: #fff;
    }
    .section-gradient {
        background: linear-gradient(135deg, #0066FF, #00D4AA);
        color: #fff;
    }

    .section-heading {
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-heading h2 {
        font-size: clamp(2.25rem, 4vw, 3rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #6B7280;
        max-width: 42rem;
        margin: 0 auto;
    }
    .section-dark .section-heading p { color: #9CA3AF; }

    .eyebrow {
        display: block;
        font-size: 0.875rem;
        font-weight: 600;
        color: #2563EB;
        text-transform: uppercase;
        letter-spacing: 0.15em;
        margin-bottom: 1rem;
    }
    .eyebrow.green { color: #16A34A; }
    .eyebrow.purple { color: #9333EA; }
    .eyebrow.light { color: #60A5FA; }

    .lede {
        font-size: 1.25rem;
        color: #4B5563;
        line-height: 1.7;
    }

    /* ---- reveal ---- */

    .reveal {
        opacity: 0;
        transform: translateY(48px);
        transition: opacity 1s ease, transform 1s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    /* ---- floating shapes ---- */

    .floating-shapes {
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    }
    .shape { position: absolute; }
    .shape-circle { top: 5rem; left: 2.5rem; width: 4rem; height: 4rem; opacity: 0.2; }
    .shape-square { top: 10rem; right: 5rem; width: 6rem; height: 6rem; opacity: 0.15; }
    .shape-triangle { bottom: 8rem; left: 25%; width: 5rem; height: 5rem; opacity: 0.2; }
    .shape-dot { top: 33%; right: 33%; width: 3rem; height: 3rem; opacity: 0.25; }
    .shape-hexagon { bottom: 5rem; right: 2.5rem; width: 8rem; height: 8rem; opacity: 0.1; }
    .shape-pulse-dot { top: 15rem; left: 33%; width: 2rem; height: 2rem; opacity: 0.3; }
    .float-slow { animation: float-slow 8s ease-in-out infinite; }
    .float-medium { animation: float-medium 6s ease-in-out infinite; }
    .float-fast { animation: float-fast 4s ease-in-out infinite; }
    .pulse { animation: pulse-dot 2s ease-in-out infinite; }

    /* ---- navigation ---- */

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: transparent;
        transition: all 0.5s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(20px);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .brand-mark {
        width: 2.5rem;
        height: 2.5rem;
        background: linear-gradient(135deg, #2563EB, #06B6D4);
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.3s ease;
    }
    .nav-logo:hover .brand-mark { transform: rotate(12deg); }
    .brand-mark span {
        color: #fff;
        font-weight: 700;
        font-size: 1.125rem;
    }
    .brand-mark.large {
        width: 8rem;
        height: 8rem;
        border-radius: 1.5rem;
        margin: 0 auto 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(37, 99, 235, 0.3);
    }
    .brand-mark.large span { font-size: 3rem; }
    .brand-name {
        font-size: 1.25rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        position: relative;
        font-size: 0.875rem;
        font-weight: 500;
        letter-spacing: 0.025em;
        color: #4B5563;
        padding-bottom: 0.25rem;
        transition: color 0.3s ease;
    }
    .nav-link:hover { color: #111827; }
    .nav-link.active { color: #2563EB; }
    .nav-link.active::after {
        content: '';
        position: absolute;
        bottom: -0.25rem;
        left: 0;
        right: 0;
        height: 2px;
        background: #2563EB;
        border-radius: 9999px;
    }
    .nav-cta {
        padding: 0.625rem 1.5rem;
        background: #111827;
        color: #fff;
        font-size: 0.875rem;
        font-weight: 500;
        border-radius: 9999px;
        transition: all 0.3s ease;
    }
    .nav-cta:hover {
        background: #2563EB;
        box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.25);
    }
    .burger-menu {
        display: none;
        width: 2.5rem;
        height: 2.5rem;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 0.375rem;
    }
    .burger-menu span {
        width: 1.5rem;
        height: 2px;
        background: #111827;
        transition: all 0.3s ease;
    }
    .burger-menu.open span:nth-child(1) { transform: rotate(45deg) translateY(0.55rem); }
    .burger-menu.open span:nth-child(2) { opacity: 0; }
    .burger-menu.open span:nth-child(3) { transform: rotate(-45deg) translateY(-0.55rem); }
    .mobile-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background: #fff;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        padding: 2rem 1.5rem;
        flex-direction: column;
        gap: 1rem;
        opacity: 0;
        visibility: hidden;
        transition: all 0.3s ease;
    }
    .mobile-link {
        display: block;
        width: 100%;
        text-align: left;
        font-size: 1.125rem;
        font-weight: 500;
        color: #111827;
        padding: 0.5rem 0;
    }

    /* ---- hero ---- */

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 5rem;
        overflow: hidden;
    }
    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, #F9FAFB, #fff 50%, rgba(239, 246, 255, 0.3));
        z-index: -1;
    }
    .hero-body {
        position: relative;
        padding: 5rem 1.5rem;
    }
    .hero-copy { max-width: 56rem; }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        background: #EFF6FF;
        border-radius: 9999px;
        margin-bottom: 2rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #1D4ED8;
    }
    .badge-dot {
        width: 0.5rem;
        height: 0.5rem;
        background: #2563EB;
        border-radius: 9999px;
        animation: pulse-dot 2s ease-in-out infinite;
    }
    .hero-title {
        font-size: clamp(3rem, 8vw, 6rem);
        font-weight: 700;
        line-height: 1.05;
        margin-bottom: 2rem;
    }
    .accent-text {
        display: block;
        background: linear-gradient(90deg, #2563EB, #06B6D4);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        color: transparent;
    }
    .hero-subtitle {
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        color: #4B5563;
        line-height: 1.7;
        margin-bottom: 3rem;
        max-width: 42rem;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: #9CA3AF;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.15em;
        animation: bounce-down 1.5s ease-in-out infinite;
    }
    .scroll-indicator svg { width: 1.25rem; height: 1.25rem; }

    .subpage-hero {
        position: relative;
        padding: 13rem 0 8rem;
        overflow: hidden;
    }
    .page-title {
        font-size: clamp(3rem, 6vw, 4.5rem);
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 2rem;
    }
    .subpage-hero .hero-copy { max-width: 48rem; }
    .subpage-hero .lede { margin-bottom: 0; }

    /* ---- buttons ---- */

    .button-primary,
    .button-secondary,
    .button-inverted {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        font-size: 1rem;
        font-weight: 500;
        border-radius: 9999px;
        transition: all 0.3s ease;
    }
    .button-primary {
        background: #111827;
        color: #fff;
    }
    .button-primary:hover {
        background: #2563EB;
        box-shadow: 0 20px 25px -5px rgba(37, 99, 235, 0.25);
    }
    .button-secondary {
        background: #fff;
        color: #111827;
        border: 2px solid #E5E7EB;
    }
    .button-secondary:hover {
        border-color: #2563EB;
        color: #2563EB;
    }
    .button-inverted {
        background: #fff;
        color: #2563EB;
        font-weight: 600;
        font-size: 1.125rem;
        padding: 1.25rem 2.5rem;
        margin: 0 auto;
    }
    .button-inverted:hover {
        box-shadow: 0 25px 50px -12px rgba(255, 255, 255, 0.25);
    }
    .section-dark .button-inverted { color: #111827; }
    .section-dark .button-inverted:hover {
        background: #2563EB;
        color: #fff;
    }
    .arrow-icon {
        width: 1.25rem;
        height: 1.25rem;
        transition: transform 0.3s ease;
    }
    .button-primary:hover .arrow-icon,
    .button-inverted:hover .arrow-icon,
    .text-link:hover .arrow-icon { transform: translateX(0.25rem); }
    .text-link {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        color: #2563EB;
        font-weight: 600;
        font-size: 1.125rem;
        transition: color 0.3s ease;
    }
    .text-link:hover { color: #1D4ED8; }
    .section-cta {
        text-align: center;
        margin-top: 4rem;
    }

    /* ---- split sections ---- */

    .split-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 5rem;
        align-items: center;
    }
    .split-grid.spaced { margin-bottom: 8rem; }
    .accent-bar-block {
        position: relative;
        padding-left: 1.5rem;
    }
    .accent-bar-block::before {
        content: '';
        position: absolute;
        left: 0;
        top: 0;
        bottom: 0;
        width: 4px;
        background: linear-gradient(180deg, #2563EB, #06B6D4);
        border-radius: 9999px;
    }
    .accent-bar-block h2,
    .service-detail h2,
    .split-grid h2 {
        font-size: clamp(2.25rem, 4vw, 3rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .panel {
        border-radius: 1.5rem;
        padding: 2.5rem;
        position: relative;
        overflow: hidden;
    }
    .panel-pain { background: #F9FAFB; }
    .panel-pain::after {
        content: '';
        position: absolute;
        top: 0;
        right: 0;
        width: 8rem;
        height: 8rem;
        background: linear-gradient(135deg, #FEE2E2, transparent);
        border-bottom-left-radius: 100%;
    }
    .panel-win { background: linear-gradient(135deg, #EFF6FF, #ECFEFF); }
    .panel-win::after {
        content: '';
        position: absolute;
        top: 0;
        right: 0;
        width: 8rem;
        height: 8rem;
        background: linear-gradient(135deg, #DBEAFE, transparent);
        border-bottom-left-radius: 100%;
    }
    .cross-list,
    .check-list {
        list-style: none;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        position: relative;
        z-index: 1;
    }
    .cross-list li,
    .check-list li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        font-size: 1.125rem;
        color: #374151;
    }
    .cross-icon {
        width: 1.5rem;
        height: 1.5rem;
        color: #EF4444;
        flex-shrink: 0;
        margin-top: 0.125rem;
    }
    .check-icon {
        width: 1.5rem;
        height: 1.5rem;
        flex-shrink: 0;
        margin-top: 0.125rem;
    }

    /* ---- stats ---- */

    .stats-band { position: relative; }
    .grid-overlay {
        position: absolute;
        inset: 0;
        opacity: 0.3;
        background-image:
            linear-gradient(rgba(255, 255, 255, 0.06) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255, 255, 255, 0.06) 1px, transparent 1px);
        background-size: 2.5rem 2.5rem;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        position: relative;
    }
    .stat-card {
        text-align: center;
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(10px);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .stat-counter { text-align: center; }
    .stat-value {
        font-size: clamp(3rem, 5vw, 3.75rem);
        font-weight: 700;
        color: #fff;
        margin-bottom: 0.5rem;
    }
    .stat-suffix { color: #60A5FA; }
    .stat-label {
        color: #9CA3AF;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.15em;
    }

    /* ---- service cards ---- */

    .card-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .service-card {
        position: relative;
        height: 100%;
        background: #fff;
        border-radius: 1.5rem;
        padding: 2.5rem;
        border: 1px solid #F3F4F6;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: all 0.5s ease;
        overflow: hidden;
    }
    .service-card:hover {
        border-color: #DBEAFE;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
    }
    .service-card-icon {
        width: 4rem;
        height: 4rem;
        background: linear-gradient(135deg, #2563EB, #06B6D4);
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.2);
        transition: transform 0.3s ease;
        color: #fff;
    }
    .service-card:hover .service-card-icon { transform: scale(1.1) rotate(3deg); }
    .service-card-icon svg { width: 2rem; height: 2rem; }
    .service-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .service-card > p {
        color: #4B5563;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .feature-checklist {
        list-style: none;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .feature-checklist li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #374151;
    }
    .feature-checklist .check-icon {
        width: 1.25rem;
        height: 1.25rem;
        margin-top: 0;
    }

    /* ---- service detail sections ---- */

    .service-icon-tile {
        width: 5rem;
        height: 5rem;
        border-radius: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 2rem;
        color: #fff;
    }
    .service-icon-tile svg { width: 2.5rem; height: 2.5rem; }
    .tile-blue {
        background: linear-gradient(135deg, #2563EB, #06B6D4);
        box-shadow: 0 25px 50px -12px rgba(37, 99, 235, 0.3);
    }
    .tile-green {
        background: linear-gradient(135deg, #22C55E, #10B981);
        box-shadow: 0 25px 50px -12px rgba(34, 197, 94, 0.3);
    }
    .tile-purple {
        background: linear-gradient(135deg, #9333EA, #EC4899);
        box-shadow: 0 25px 50px -12px rgba(147, 51, 234, 0.3);
    }
    .service-detail .lede { margin-bottom: 2rem; }
    .feature-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1rem;
    }
    .feature-grid-item {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #374151;
    }
    .feature-grid-item .check-icon {
        width: 1.25rem;
        height: 1.25rem;
        margin-top: 0;
    }
    .decor-panel {
        border-radius: 1.5rem;
        padding: 2.5rem;
        aspect-ratio: 1 / 1;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        overflow: hidden;
    }
    .decor-blue { background: linear-gradient(135deg, #EFF6FF, #ECFEFF); }
    .decor-green { background: linear-gradient(135deg, #F0FDF4, #ECFDF5); }
    .decor-purple { background: linear-gradient(135deg, #FAF5FF, #FDF2F8); }
    .decor-art {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        opacity: 0.2;
    }
    .decor-caption {
        text-align: center;
        position: relative;
    }
    .decor-number {
        font-size: 6rem;
        font-weight: 700;
        color: rgba(37, 99, 235, 0.2);
        margin-bottom: 1rem;
    }
    .decor-caption p {
        color: #2563EB;
        font-weight: 600;
    }
    .decor-caption.green .decor-number { color: rgba(22, 163, 74, 0.2); }
    .decor-caption.green p { color: #16A34A; }
    .decor-caption.purple .decor-number { color: rgba(147, 51, 234, 0.2); }
    .decor-caption.purple p { color: #9333EA; }

    /* ---- process ---- */

    .process-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .process-step { position: relative; }
    .process-number {
        font-size: 3.75rem;
        font-weight: 700;
        color: rgba(209, 213, 219, 0.4);
        margin-bottom: 1rem;
    }
    .process-step h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 0.75rem;
    }
    .process-step p { color: #9CA3AF; }
    .process-connector {
        display: none;
        position: absolute;
        top: 2rem;
        right: 0;
        width: 50%;
        height: 1px;
        background: linear-gradient(90deg, rgba(37, 99, 235, 0.5), transparent);
    }

    /* ---- story / values / team ---- */

    .story-tile {
        aspect-ratio: 1 / 1;
        background: linear-gradient(135deg, #DBEAFE, #ECFEFF);
        border-radius: 1.5rem;
        position: relative;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .story-tile-center { text-align: center; }
    .story-tile-center p {
        color: #2563EB;
        font-weight: 600;
    }
    .story-decor {
        position: absolute;
        opacity: 0.2;
    }
    .story-decor.top-right { top: 2.5rem; right: 2.5rem; width: 5rem; height: 5rem; }
    .story-decor.bottom-left { bottom: 2.5rem; left: 2.5rem; width: 4rem; height: 4rem; }
    .story-copy {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        font-size: 1.125rem;
        color: #4B5563;
        line-height: 1.7;
    }

    .values-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .value-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        height: 100%;
        border: 1px solid #F3F4F6;
        transition: all 0.3s ease;
    }
    .value-card:hover {
        border-color: #DBEAFE;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .value-number {
        width: 3rem;
        height: 3rem;
        background: linear-gradient(135deg, #2563EB, #06B6D4);
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        color: #fff;
        font-weight: 700;
        font-size: 1.125rem;
    }
    .value-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .value-card p { color: #4B5563; }

    .team-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    .team-member { text-align: center; }
    .avatar {
        width: 12rem;
        height: 12rem;
        background: linear-gradient(135deg, #F3F4F6, #F9FAFB);
        border-radius: 9999px;
        margin: 0 auto 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.3s ease;
    }
    .team-member:hover .avatar {
        background: linear-gradient(135deg, #EFF6FF, #ECFEFF);
    }
    .avatar span {
        font-size: 2.25rem;
        font-weight: 700;
        color: #D1D5DB;
        transition: color 0.3s ease;
    }
    .team-member:hover .avatar span { color: #60A5FA; }
    .team-member h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.25rem;
    }
    .team-member p { color: #6B7280; }

    /* ---- CTA bands ---- */

    .cta-band { text-align: center; }
    .cta-band h2 {
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 700;
        margin-bottom: 2rem;
    }
    .cta-band p {
        font-size: 1.25rem;
        margin-bottom: 3rem;
        opacity: 0.8;
    }
    .cta-circles {
        position: absolute;
        inset: 0;
        background:
            radial-gradient(circle at 20% 20%, rgba(255, 255, 255, 0.1) 0%, transparent 25%),
            radial-gradient(circle at 80% 80%, rgba(255, 255, 255, 0.1) 0%, transparent 30%);
    }

    /* ---- contact ---- */

    .contact-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 5rem;
    }
    .contact-hero .lede { margin-bottom: 3rem; }
    .contact-channels {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .channel {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .channel-icon {
        width: 3rem;
        height: 3rem;
        background: #DBEAFE;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #2563EB;
        flex-shrink: 0;
    }
    .channel-icon svg { width: 1.5rem; height: 1.5rem; }
    .channel-hint {
        font-size: 0.875rem;
        color: #6B7280;
    }
    .channel-value {
        font-size: 1.125rem;
        font-weight: 600;
        color: #111827;
    }
    .contact-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2.5rem;
        box-shadow: 0 25px 50px -12px rgba(229, 231, 235, 0.5);
    }
    .form-field { margin-bottom: 1.5rem; }
    .form-field label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        color: #374151;
        margin-bottom: 0.5rem;
    }
    .form-field input,
    .form-field textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        border: 1px solid #E5E7EB;
        border-radius: 0.75rem;
        font-family: inherit;
        font-size: 1rem;
        outline: none;
        transition: all 0.2s ease;
        resize: none;
    }
    .form-field input:focus,
    .form-field textarea:focus {
        border-color: transparent;
        box-shadow: 0 0 0 2px #2563EB;
    }
    .submit-button {
        width: 100%;
        padding: 1rem;
        background: #111827;
        color: #fff;
        font-weight: 600;
        font-size: 1rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        transition: background 0.3s ease;
    }
    .submit-button:hover { background: #2563EB; }
    .submit-button svg { width: 1.25rem; height: 1.25rem; }
    .confirmation {
        text-align: center;
        padding: 3rem 0;
    }
    .confirm-badge {
        width: 5rem;
        height: 5rem;
        background: #DCFCE7;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        margin: 0 auto 1.5rem;
    }
    .confirm-badge .check-icon {
        width: 2.5rem;
        height: 2.5rem;
        margin-top: 0;
    }
    .confirmation h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .confirmation p { color: #4B5563; }

    /* ---- footer ---- */

    .site-footer {
        background: #111827;
        padding: 5rem 0;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        margin-bottom: 4rem;
    }
    .footer-brand .brand-button {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
    }
    .footer-brand .brand-name { color: #fff; }
    .footer-brand p {
        color: #9CA3AF;
        max-width: 24rem;
        line-height: 1.7;
    }
    .footer-column h4 {
        color: #fff;
        font-weight: 600;
        margin-bottom: 1.5rem;
    }
    .footer-column ul {
        list-style: none;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .footer-column button {
        color: #9CA3AF;
        font-size: 1rem;
        transition: color 0.3s ease;
    }
    .footer-column button:hover { color: #fff; }
    .footer-bottom {
        border-top: 1px solid #1F2937;
        padding-top: 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }
    .footer-bottom p {
        color: #6B7280;
        font-size: 0.875rem;
    }
    .footer-social {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .footer-social a {
        color: #6B7280;
        transition: color 0.3s ease;
    }
    .footer-social a:hover { color: #fff; }
    .footer-social svg { width: 1.25rem; height: 1.25rem; }

    /* ---- responsive ---- */

    @media (max-width: 767px) {
        .nav-links { display: none; }
        .burger-menu { display: flex; }
        .mobile-menu { display: flex; }
        .mobile-menu.open {
            opacity: 1;
            visibility: visible;
        }
    }

    @media (min-width: 768px) {
        .shell { padding: 0 3rem; }
        .nav-content { padding: 0 3rem; }
        .stats-grid { grid-template-columns: repeat(3, 1fr); }
        .values-grid { grid-template-columns: repeat(2, 1fr); }
        .team-grid { grid-template-columns: repeat(3, 1fr); }
        .process-grid { grid-template-columns: repeat(4, 1fr); }
        .process-connector { display: block; }
        .feature-grid { grid-template-columns: repeat(2, 1fr); }
    }

    @media (min-width: 1024px) {
        .split-grid { grid-template-columns: repeat(2, 1fr); }
        .card-grid { grid-template-columns: repeat(3, 1fr); }
        .values-grid { grid-template-columns: repeat(4, 1fr); }
        .contact-grid { grid-template-columns: repeat(2, 1fr); }
        .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
        .footer-bottom {
            flex-direction: row;
            justify-content: space-between;
        }
        .order-last-desktop { order: 2; }
        .order-first-desktop { order: -1; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn nav_order_is_stable() {
        assert_eq!(
            Page::ALL,
            [Page::Home, Page::About, Page::Services, Page::Contact]
        );
        let labels: Vec<_> = Page::ALL.iter().map(Page::label).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Contact"]);
    }

    #[test]
    fn pages_are_distinct() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in Page::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

use yew::prelude::*;

use crate::config;

const CLIENT_LOGOS: [&str; 8] = [
    "amplience.jpg",
    "finbourne.jpg",
    "ground.jpg",
    "innerworks.jpg",
    "modelml.jpg",
    "ppro.jpg",
    "qio.jpg",
    "vertice.jpg",
];

/// Auto-scrolling strip of client logos. The list renders twice so the
/// -50% translation loops without a visible seam; hovering pauses the loop.
#[function_component(ClientLogos)]
pub fn client_logos() -> Html {
    let cells = CLIENT_LOGOS
        .iter()
        .chain(CLIENT_LOGOS.iter())
        .enumerate()
        .map(|(i, file)| {
            let alt = file.trim_end_matches(".jpg").to_string();
            html! {
                <div key={i} class="logo-cell">
                    <img src={format!("{}/{}", config::LOGO_DIR, file)} alt={alt} loading="lazy" />
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="logo-strip">
            <style>
                {r#"
                    @keyframes logo-scroll {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                    .logo-strip {
                        position: relative;
                        overflow: hidden;
                    }
                    .logo-track {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        width: max-content;
                        animation: logo-scroll 15s linear infinite;
                    }
                    .logo-track:hover {
                        animation-play-state: paused;
                    }
                    .logo-cell {
                        flex-shrink: 0;
                        height: 4rem;
                        width: 10rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .logo-cell img {
                        max-height: 100%;
                        max-width: 100%;
                        object-fit: contain;
                    }
                "#}
            </style>
            <div class="logo-track">
                { cells }
            </div>
        </div>
    }
}

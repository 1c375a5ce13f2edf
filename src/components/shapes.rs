use yew::prelude::*;

/// Decorative geometry floating behind hero sections. Purely presentational;
/// the float keyframes live in the global stylesheet.
#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    html! {
        <div class="floating-shapes">
            <svg class="shape shape-circle float-slow" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#0066FF" stroke-width="2"/>
            </svg>
            <svg class="shape shape-square float-medium" viewBox="0 0 100 100">
                <rect x="20" y="20" width="60" height="60" fill="none" stroke="#00D4AA" stroke-width="2" transform="rotate(15 50 50)"/>
            </svg>
            <svg class="shape shape-triangle float-fast" viewBox="0 0 100 100">
                <polygon points="50,10 90,90 10,90" fill="none" stroke="#FF6B35" stroke-width="2"/>
            </svg>
            <svg class="shape shape-dot float-slow" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="8" fill="#0066FF"/>
            </svg>
            <svg class="shape shape-hexagon float-medium" viewBox="0 0 100 100">
                <path d="M50 10 L90 30 L90 70 L50 90 L10 70 L10 30 Z" fill="none" stroke="#0066FF" stroke-width="1.5"/>
            </svg>
            <svg class="shape shape-pulse-dot pulse" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="6" fill="#00D4AA"/>
            </svg>
        </div>
    }
}

use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod contact;
mod counters;
mod nav;
mod reveal;
mod scroll;
mod splash;
mod theme;
mod pages {
    pub mod home;
}

use nav::Nav;
use pages::home::Home;
use scroll::ScrollEffects;
use splash::SplashScreen;
use theme::ThemeToggle;

// Keyframes shared across components, injected once as a global stylesheet.
const GLOBAL_KEYFRAMES: &str = r#"
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes counterPulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.15); }
        100% { transform: scale(1); }
    }
    @keyframes toastIn {
        from { opacity: 0; transform: translate(-50%, 12px); }
        to { opacity: 1; transform: translate(-50%, 0); }
    }
"#;

#[function_component]
fn App() -> Html {
    let header_scrolled = use_state(|| false);
    let on_header_state = {
        let header_scrolled = header_scrolled.clone();
        Callback::from(move |scrolled| header_scrolled.set(scrolled))
    };

    html! {
        <>
            <Global css={GLOBAL_KEYFRAMES} />
            <SplashScreen />
            <Nav scrolled={*header_scrolled} />
            <Home />
            <ThemeToggle />
            <ScrollEffects {on_header_state} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

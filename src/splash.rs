use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{ANIMATION_DELAY_MS, LOADING_DELAY_MS};

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Covering,
    Fading,
    Done,
}

/// Mark the page loaded; the `page-loaded` class on `<body>` keys the
/// entrance animations for above-the-fold content.
fn mark_page_loaded() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.class_list().add_1("page-loaded");
    }
}

#[function_component(SplashScreen)]
pub fn splash_screen() -> Html {
    let phase = use_state(|| Phase::Covering);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let already_loaded = window
                    .document()
                    .map(|d| d.ready_state() == "complete")
                    .unwrap_or(true);

                let destructor: Box<dyn FnOnce()> = if already_loaded {
                    // No overlay at all when mounting into a finished page.
                    mark_page_loaded();
                    phase.set(Phase::Done);
                    Box::new(|| ())
                } else {
                    let on_load = Closure::wrap(Box::new(move || {
                        let phase = phase.clone();
                        Timeout::new(LOADING_DELAY_MS, move || {
                            phase.set(Phase::Fading);
                            mark_page_loaded();
                            let phase = phase.clone();
                            Timeout::new(ANIMATION_DELAY_MS, move || {
                                phase.set(Phase::Done);
                            })
                            .forget();
                        })
                        .forget();
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
                        .unwrap();
                    let window_clone = window.clone();
                    Box::new(move || {
                        let _ = window_clone.remove_event_listener_with_callback(
                            "load",
                            on_load.as_ref().unchecked_ref(),
                        );
                    })
                };
                destructor
            },
            (),
        );
    }

    if *phase == Phase::Done {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg-color);
                    z-index: 200;
                    opacity: 1;
                    transition: opacity 0.5s ease;
                }
                .loading-screen.hidden {
                    opacity: 0;
                    pointer-events: none;
                }
                .loader {
                    width: 44px;
                    height: 44px;
                    border: 4px solid var(--border-color);
                    border-top-color: var(--accent-color);
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                "#}
            </style>
            <div class={classes!("loading-screen", (*phase == Phase::Fading).then(|| "hidden"))}>
                <div class="loader" aria-label="Loading..."></div>
            </div>
        </>
    }
}

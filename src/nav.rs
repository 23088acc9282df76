use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config::{ANCHOR_MARGIN_PX, HEADER_FALLBACK_PX, MENU_STAGGER_MS};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("Services", "services"),
    ("About", "about"),
    ("Contact", "contact"),
];

pub fn item_stagger_style(index: u32) -> String {
    format!("transition-delay: {}ms", index * MENU_STAGGER_MS)
}

/// Scroll destination for an anchor target under the fixed header.
pub fn anchor_scroll_top(offset_top: f64, header_height: f64) -> f64 {
    (offset_top - header_height - ANCHOR_MARGIN_PX).max(0.0)
}

/// What a nav-link activation does: the menu always closes, while default
/// navigation is suppressed only when the fragment resolves.
pub struct LinkAction {
    pub close_menu: bool,
    pub intercept: bool,
}

pub fn link_action(fragment_resolves: bool) -> LinkAction {
    LinkAction {
        close_menu: true,
        intercept: fragment_resolves,
    }
}

/// Animate the viewport to a section, keeping it clear of the fixed header.
pub fn scroll_to_section(target: &Element) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let header_height = window
        .document()
        .and_then(|d| d.query_selector(".header").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(HEADER_FALLBACK_PX);
    let top = target
        .dyn_ref::<HtmlElement>()
        .map(|el| el.offset_top() as f64)
        .unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(anchor_scroll_top(top, header_height));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Click handler for same-page fragment links outside the nav (CTAs and the
/// like): a resolving fragment is intercepted and smooth-scrolled, anything
/// else falls through to default navigation.
pub fn fragment_click(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section));
        if let Some(target) = target {
            e.prevent_default();
            scroll_to_section(&target);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Whether the page has scrolled past the header elevation threshold.
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let toggle_ref = use_node_ref();

    // Suppress body scrolling while the menu overlay is open.
    use_effect_with_deps(
        move |open: &bool| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                if *open {
                    let _ = body.style().set_property("overflow", "hidden");
                } else {
                    let _ = body.style().remove_property("overflow");
                }
            }
            || ()
        },
        *menu_open,
    );

    // Escape closes the menu and hands focus back to the toggle, so focus
    // never rests on a now-hidden link.
    {
        let is_open = *menu_open;
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open.set(false);
                                if let Some(toggle) = toggle_ref.cast::<HtmlElement>() {
                                    let _ = toggle.focus();
                                }
                            }
                        })
                            as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                        document
                            .add_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        Box::new(move || {
                            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            is_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                let target = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(section));
                let action = link_action(target.is_some());
                if action.close_menu {
                    menu_open.set(false);
                }
                // An unresolved fragment falls through to default navigation.
                if action.intercept {
                    if let Some(target) = target {
                        e.prevent_default();
                        scroll_to_section(&target);
                    }
                }
            })
        }
    };

    html! {
        <>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    z-index: 100;
                }
                .header.scrolled {
                    background: var(--header-scrolled-bg);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.12);
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: var(--text-color);
                    text-decoration: none;
                }
                .nav-list {
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    color: var(--text-color);
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: var(--accent-color);
                }
                .mobile-menu-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                    z-index: 110;
                }
                .mobile-menu-toggle span {
                    width: 24px;
                    height: 2px;
                    background: var(--text-color);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .mobile-menu-toggle.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .mobile-menu-toggle.active span:nth-child(2) {
                    opacity: 0;
                }
                .mobile-menu-toggle.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                @media (max-width: 768px) {
                    .mobile-menu-toggle {
                        display: flex;
                    }
                    .nav-list {
                        position: fixed;
                        inset: 0;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: var(--surface-color);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .nav-list.active {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .nav-list .nav-item {
                        opacity: 0;
                        transform: translateY(12px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .nav-list.active .nav-item {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
            <header class={classes!("header", props.scrolled.then(|| "scrolled"))}>
                <a href="#home" class="nav-logo" onclick={nav_click("home")}>{"northlight"}</a>
                <button
                    ref={toggle_ref}
                    class={classes!("mobile-menu-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-list", (*menu_open).then(|| "active"))}>
                    {
                        for NAV_LINKS.iter().enumerate().map(|(i, (label, id))| html! {
                            <li class="nav-item" style={item_stagger_style(i as u32)}>
                                <a
                                    href={format!("#{}", id)}
                                    class="nav-link"
                                    onclick={nav_click(id)}
                                >
                                    { *label }
                                </a>
                            </li>
                        })
                    }
                </ul>
            </header>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_items_stagger_linearly() {
        assert_eq!(item_stagger_style(0), "transition-delay: 0ms");
        assert_eq!(item_stagger_style(1), "transition-delay: 60ms");
        assert_eq!(item_stagger_style(3), "transition-delay: 180ms");
    }

    #[test]
    fn anchor_scroll_clears_the_fixed_header() {
        assert_eq!(anchor_scroll_top(500.0, 64.0), 420.0);
        assert_eq!(anchor_scroll_top(500.0, HEADER_FALLBACK_PX), 404.0);
        // Targets near the top never produce a negative destination.
        assert_eq!(anchor_scroll_top(10.0, 64.0), 0.0);
    }

    #[test]
    fn link_click_closes_the_menu_even_when_unresolved() {
        let resolved = link_action(true);
        assert!(resolved.close_menu);
        assert!(resolved.intercept);

        let unresolved = link_action(false);
        assert!(unresolved.close_menu);
        assert!(!unresolved.intercept);
    }

    #[test]
    fn nav_links_target_distinct_sections() {
        let mut ids: Vec<&str> = NAV_LINKS.iter().map(|(_, id)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}

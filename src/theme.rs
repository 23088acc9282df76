use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Class applied to `<html>` for this theme. Exactly one of the two
    /// classes is present on the document root at any time.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Unknown or missing values fall back to light.
    pub fn from_class(value: &str) -> Theme {
        if value == "dark-theme" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Read the persisted preference, defaulting to light.
pub fn load_theme() -> Theme {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
        .map(|value| Theme::from_class(&value))
        .unwrap_or(Theme::Light)
}

pub fn store_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme.class());
    }
}

/// Swap the root marker so only the given theme's class remains.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().class());
        let _ = classes.add_1(theme.class());
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(load_theme);

    {
        let initial = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(initial);
                || ()
            },
            (),
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            apply_theme(next);
            store_theme(next);
            theme.set(next);
        })
    };

    html! {
        <>
            <style>
                {r#"
                .theme-toggle {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid var(--border-color);
                    background: var(--surface-color);
                    color: var(--text-color);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
                    transition: transform 0.2s ease, background 0.3s ease;
                    z-index: 90;
                }
                .theme-toggle:hover {
                    transform: scale(1.08);
                }
                "#}
            </style>
            <button class="theme-toggle" aria-label="Toggle dark/light theme" {onclick}>
                {
                    match *theme {
                        Theme::Dark => html! {
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
                                <path fill="currentColor" d="M12,9c1.7,0,3,1.3,3,3s-1.3,3-3,3s-3-1.3-3-3S10.3,9,12,9z M12,7c-2.8,0-5,2.2-5,5s2.2,5,5,5s5-2.2,5-5S14.8,7,12,7z"/>
                                <path fill="currentColor" d="M12,6l-1.4,3.4L7,10l2.6,1.4L12,14l1.4-2.6L17,10l-3.6-0.6L12,6z"/>
                            </svg>
                        },
                        Theme::Light => html! {
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
                                <path fill="currentColor" d="M12,18c-3.3,0-6-2.7-6-6s2.7-6,6-6s6,2.7,6,6S15.3,18,12,18zM12,8c-2.2,0-4,1.8-4,4s1.8,4,4,4s4-1.8,4-4S14.2,8,12,8z"/>
                            </svg>
                        },
                    }
                }
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_is_involutive() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn classes_map_one_to_one() {
        assert_eq!(Theme::Light.class(), "light-theme");
        assert_eq!(Theme::Dark.class(), "dark-theme");
        assert_eq!(Theme::from_class("dark-theme"), Theme::Dark);
        assert_eq!(Theme::from_class("light-theme"), Theme::Light);
    }

    #[test]
    fn unknown_preference_defaults_to_light() {
        assert_eq!(Theme::from_class(""), Theme::Light);
        assert_eq!(Theme::from_class("solarized"), Theme::Light);
    }

    #[test]
    fn applied_and_persisted_class_always_agree() {
        // The same `class()` string feeds both the root marker and storage,
        // so agreement reduces to the toggled class never colliding.
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.class(), theme.toggled().class());
        }
    }
}

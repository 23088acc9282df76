use yew::prelude::*;

use crate::contact::ContactForm;
use crate::nav::fragment_click;
use crate::reveal;

struct Service {
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Brand & Identity",
        blurb: "Naming, visual systems and guidelines that make a company recognisable at a glance.",
    },
    Service {
        title: "Web Design",
        blurb: "Marketing sites and product pages designed around the story you need to tell.",
    },
    Service {
        title: "Content & Strategy",
        blurb: "Editorial planning, copy and campaigns that keep the brand talking after launch.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("120", "Projects shipped"),
    ("85", "Happy clients"),
    ("12", "Years in business"),
    ("9", "Design awards"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Entrance reveals for the cards further down the page. The handle keeps
    // the observer alive until unmount.
    use_effect_with_deps(
        move |_| {
            let handle = reveal::setup();
            move || drop(handle)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                :root, .light-theme {
                    --bg-color: #fdfcfa;
                    --surface-color: #ffffff;
                    --text-color: #2c3e50;
                    --muted-color: #6b7a88;
                    --accent-color: #e67e22;
                    --border-color: #e4e0da;
                    --header-scrolled-bg: rgba(255, 255, 255, 0.95);
                }
                .dark-theme {
                    --bg-color: #1d2731;
                    --surface-color: #2c3e50;
                    --text-color: #f2f4f6;
                    --muted-color: #9fb0bf;
                    --accent-color: #f39c12;
                    --border-color: #3d5265;
                    --header-scrolled-bg: rgba(44, 62, 80, 0.95);
                }
                body {
                    margin: 0;
                    background: var(--bg-color);
                    color: var(--text-color);
                    font-family: "Inter", "Segoe UI", Helvetica, Arial, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .landing-page section {
                    padding: 6rem 2rem;
                    max-width: 1080px;
                    margin: 0 auto;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: -20% 0 0 0;
                    background: radial-gradient(circle at 30% 20%, rgba(230, 126, 34, 0.25), transparent 60%),
                                radial-gradient(circle at 75% 70%, rgba(52, 152, 219, 0.2), transparent 55%);
                    will-change: transform;
                    z-index: -1;
                }
                .hero-content h1 {
                    font-size: clamp(2.4rem, 6vw, 4rem);
                    margin: 0 0 1rem;
                }
                .hero-content p {
                    color: var(--muted-color);
                    font-size: 1.2rem;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                }
                .page-loaded .hero-content {
                    animation: fadeInUp 0.8s ease-out;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    background: var(--accent-color);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .section-title {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: var(--surface-color);
                    border: 1px solid var(--border-color);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .service-card h3 {
                    margin-top: 0;
                }
                .service-card p {
                    color: var(--muted-color);
                    line-height: 1.6;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-number {
                    display: block;
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: var(--accent-color);
                }
                .stat-number.counted {
                    animation: counterPulse 0.4s ease-out;
                }
                .stat-label {
                    color: var(--muted-color);
                }
                .about-copy {
                    color: var(--muted-color);
                    line-height: 1.7;
                    max-width: 680px;
                    margin: 0 auto;
                    text-align: center;
                }
                .footer {
                    border-top: 1px solid var(--border-color);
                    padding: 2rem;
                    text-align: center;
                    color: var(--muted-color);
                }
                "#}
            </style>

            <header class="hero" id="home">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Design that earns attention"}</h1>
                    <p>{"Northlight is a small studio building brands, websites and campaigns for companies that want to be remembered."}</p>
                    <a class="hero-cta" href="#contact" onclick={fragment_click("contact")}>{"Start a project"}</a>
                </div>
            </header>

            <section id="services">
                <h2 class="section-title">{"What we do"}</h2>
                <div class="service-grid">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class="service-card reveal">
                                <h3>{ service.title }</h3>
                                <p>{ service.blurb }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="about">
                <h2 class="section-title">{"A decade of shipped work"}</h2>
                <div class="stats">
                    {
                        for STATS.iter().map(|(target, label)| html! {
                            <div class="stat-item reveal">
                                <span class="stat-number" data-target={*target}>{"0"}</span>
                                <span class="stat-label">{ *label }</span>
                            </div>
                        })
                    }
                </div>
                <p class="about-copy" style="margin-top: 3rem;">
                    {"We keep the team deliberately small so every project gets senior people from kickoff to launch. No account managers, no hand-offs, just the people doing the work."}
                </p>
            </section>

            <section id="contact">
                <h2 class="section-title">{"Tell us about your project"}</h2>
                <ContactForm />
            </section>

            <footer class="footer">
                {"© 2026 Northlight Studio"}
            </footer>
        </div>
    }
}

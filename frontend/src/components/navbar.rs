use log::{debug, info};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::content::SECTION_LINKS;
use crate::nav::{NavAction, NavState};
use crate::scroll;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_reducer(|| NavState::default().observe_scroll(scroll::offset()));

    {
        let state = state.clone();
        // Removed automatically when the nav bar unmounts.
        use_event_with_window("scroll", move |_: Event| {
            state.dispatch(NavAction::Scrolled(scroll::offset()));
        });
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("mobile menu toggled");
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let follow_link = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::FollowLink))
    };

    let download = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("download requested from nav bar");
            state.dispatch(NavAction::FollowLink);
        })
    };

    let tone = state.tone_class();
    let links = |extra: &'static str| -> Html {
        SECTION_LINKS
            .iter()
            .map(|link| {
                html! {
                    <a href={link.href} class={classes!("nav-link", tone, extra)} onclick={follow_link.clone()}>
                        {link.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={state.nav_class()} style={state.backdrop_style()}>
            <div class="nav-content">
                <a href="#" class={classes!("nav-brand", tone)}>
                    <img src={config::LOGO_URL} alt="Meditox" class="nav-logo" />
                    <span>{"Meditox"}</span>
                </a>

                <div class="nav-desktop">
                    { links("") }
                    <button class={state.download_class()} onclick={download.clone()}>
                        {"Download App"}
                    </button>
                </div>

                <button class={classes!("burger-menu", tone)} aria-label="Toggle menu" onclick={toggle_menu}>
                    { if state.menu_open() { "✕" } else { "☰" } }
                </button>
            </div>

            if state.menu_open() {
                <div class={state.menu_class()}>
                    { links("mobile") }
                    <button class={classes!(state.download_class(), "full-width")} onclick={download}>
                        {"Download App"}
                    </button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: box-shadow 0.3s ease, background-color 0.2s linear;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        backdrop-filter: blur(12px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-logo {
                        width: 2rem;
                        height: 2rem;
                    }
                    .tone-light {
                        color: #ffffff;
                    }
                    .tone-dark {
                        color: #2D5016;
                    }
                    .nav-link.tone-dark {
                        color: #374151;
                    }
                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-weight: 600;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover {
                        color: #4A7C2C;
                    }
                    .nav-download {
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.6rem 1.2rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .nav-download.solid {
                        background: #4A7C2C;
                        color: #ffffff;
                    }
                    .nav-download.solid:hover {
                        background: #2D5016;
                    }
                    .nav-download.inverted {
                        background: #ffffff;
                        color: #2D5016;
                    }
                    .nav-download.inverted:hover {
                        background: #f3f4f6;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-desktop {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 0 1rem 1rem 1rem;
                            animation: menuDrop 0.2s ease-out;
                        }
                        .full-width {
                            width: 100%;
                        }
                    }
                    @keyframes menuDrop {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </nav>
    }
}

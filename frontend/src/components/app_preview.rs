use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::carousel::{CarouselAction, CarouselState};
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{APP_HIGHLIGHTS, SCREENSHOTS};
use crate::motion::Entrance;

#[derive(Properties, PartialEq)]
pub struct ScreenshotCarouselProps {
    pub screenshots: &'static [&'static str],
}

/// Phone mock-up cycling through the app screenshots.
///
/// The timer keeps its own rhythm; picking a dot moves the index right away
/// but does not restart the countdown to the next automatic step.
#[function_component(ScreenshotCarousel)]
pub fn screenshot_carousel(props: &ScreenshotCarouselProps) -> Html {
    let count = props.screenshots.len();
    let state = use_reducer(move || CarouselState::new(count));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                    state.dispatch(CarouselAction::Tick);
                    debug!("carousel advanced");
                });
                // Dropping the Interval clears it, so no tick lands after unmount.
                move || drop(interval)
            },
            (),
        );
    }

    let fade = Entrance::fade();

    html! {
        <div class="carousel">
            <div class="phone-wrap">
                <div class="phone-frame">
                    <div class="phone-bezel">
                        <div class="phone-notch"></div>
                        <div class="phone-screen">
                            { for props.screenshots.iter().enumerate().map(|(index, url)| html! {
                                <img
                                    key={index}
                                    src={*url}
                                    alt={format!("App Screenshot {}", index + 1)}
                                    class="phone-shot"
                                    style={fade.style(state.is_active(index))}
                                />
                            }) }
                        </div>
                    </div>
                </div>
                <div class="blob blob-top" aria-hidden="true"></div>
                <div class="blob blob-bottom" aria-hidden="true"></div>
            </div>

            <div class="carousel-dots">
                { for (0..state.len()).map(|index| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Select(index)))
                    };
                    html! {
                        <button
                            key={index}
                            class={classes!("carousel-dot", state.is_active(index).then_some("active"))}
                            aria-label={format!("Show screenshot {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(AppPreview)]
pub fn app_preview() -> Html {
    html! {
        <section class="preview-section">
            <div class="section-container preview-grid">
                <Reveal entrance={Entrance::slide_x(-50.0)}>
                    <h2 class="preview-title">{"Experience the Future of Pharmacy Management"}</h2>
                    <p class="preview-subtitle">{"Built specifically for Indian chemists, with features that matter"}</p>
                    <div class="highlight-list">
                        { for APP_HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| html! {
                            <Reveal key={index} entrance={Entrance::slide_x(-20.0).duration(500).staggered(index)}>
                                <div class="highlight-item">
                                    <span class="check-badge">{"✓"}</span>
                                    <p>{*highlight}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </Reveal>

                <Reveal entrance={Entrance::slide_x(50.0)}>
                    <ScreenshotCarousel screenshots={SCREENSHOTS} />
                </Reveal>
            </div>

            <style>
                {r#"
                    .preview-section {
                        padding: 5rem 0;
                        background: #ffffff;
                    }
                    .preview-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (max-width: 1024px) {
                        .preview-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .preview-title {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #2D5016;
                        margin-bottom: 1.5rem;
                    }
                    .preview-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 2rem;
                    }
                    .highlight-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .highlight-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        transition: background 0.2s;
                    }
                    .highlight-item:hover {
                        background: #f9fafb;
                    }
                    .highlight-item p {
                        margin: 0;
                        color: #374151;
                        font-size: 1.125rem;
                    }
                    .check-badge {
                        flex-shrink: 0;
                        width: 1.5rem;
                        height: 1.5rem;
                        margin-top: 0.25rem;
                        border-radius: 9999px;
                        background: #6BA547;
                        color: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.8rem;
                    }
                    .carousel {
                        position: relative;
                    }
                    .phone-wrap {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .phone-frame {
                        position: relative;
                        padding: 1rem;
                        border-radius: 3rem;
                        background: linear-gradient(135deg, #2D5016, #4A7C2C);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .phone-bezel {
                        background: #000000;
                        border-radius: 2.5rem;
                        padding: 0.5rem;
                    }
                    .phone-notch {
                        position: absolute;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 8rem;
                        height: 1.5rem;
                        background: #000000;
                        border-radius: 0 0 1.5rem 1.5rem;
                        z-index: 10;
                    }
                    .phone-screen {
                        position: relative;
                        background: #ffffff;
                        border-radius: 2rem;
                        overflow: hidden;
                        aspect-ratio: 9 / 19;
                    }
                    .phone-shot {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(40px);
                        opacity: 0.5;
                        pointer-events: none;
                    }
                    .blob-top {
                        top: -2rem;
                        right: -2rem;
                        width: 6rem;
                        height: 6rem;
                        background: #A8D08D;
                        animation: pulse 3s ease-in-out infinite;
                    }
                    .blob-bottom {
                        bottom: -2rem;
                        left: -2rem;
                        width: 8rem;
                        height: 8rem;
                        background: #6BA547;
                        animation: pulse 4s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { transform: scale(1); opacity: 0.5; }
                        50% { transform: scale(1.25); opacity: 0.7; }
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .carousel-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .carousel-dot.active {
                        width: 2rem;
                        background: #4A7C2C;
                    }
                "#}
            </style>
        </section>
    }
}

use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::motion::Entrance;
use crate::scroll;

#[function_component(Hero)]
pub fn hero() -> Html {
    let learn_more = Callback::from(|_: MouseEvent| scroll::to_section("features"));
    let download = Callback::from(|_: MouseEvent| info!("download requested from hero"));

    html! {
        <section class="hero">
            <div class="hero-decor" aria-hidden="true">
                <span class="float float-a">{"⚗️"}</span>
                <span class="float float-b">{"⚗️"}</span>
                <span class="float float-c">{"✨"}</span>
            </div>

            <div class="hero-content">
                <Reveal entrance={Entrance::fade_down().on_mount()}>
                    <img src={config::LOGO_URL} alt="Meditox Logo" class="hero-logo" />
                </Reveal>

                <Reveal entrance={Entrance::fade_up().on_mount().delay(200)}>
                    <h1 class="hero-title">
                        {"Revolutionize Your "}
                        <span class="hero-highlight">{"Chemist Shop"}</span>
                        {" Management"}
                    </h1>
                </Reveal>

                <Reveal entrance={Entrance::fade_up().on_mount().delay(400)}>
                    <p class="hero-subtitle">
                        {"Streamline inventory, billing, and customer management with India's most trusted mobile chemist shop solution"}
                    </p>
                </Reveal>

                <Reveal entrance={Entrance::fade_up().on_mount().delay(600)} class={classes!("hero-cta-group")}>
                    <button class="hero-cta primary" onclick={download}>{"Download App"}</button>
                    <button class="hero-cta outline" onclick={learn_more}>{"Learn More"}</button>
                </Reveal>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-dot"></div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #A8D08D, #6BA547, #4A7C2C);
                    }
                    .hero-decor {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .float {
                        position: absolute;
                        opacity: 0.1;
                        filter: grayscale(1) brightness(3);
                    }
                    .float-a {
                        top: 5rem;
                        left: 2.5rem;
                        font-size: 7rem;
                        animation: bob 4s ease-in-out infinite;
                    }
                    .float-b {
                        bottom: 8rem;
                        right: 5rem;
                        font-size: 6rem;
                        animation: bob 5s ease-in-out infinite reverse;
                    }
                    .float-c {
                        top: 50%;
                        right: 25%;
                        font-size: 5rem;
                        animation: spin 8s linear infinite;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-20px) rotate(10deg); }
                    }
                    @keyframes spin {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                    }
                    .hero-logo {
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 1.5rem auto;
                        display: block;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }
                    .hero-title {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        color: #ffffff;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-highlight {
                        color: #2D5016;
                    }
                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: rgba(255, 255, 255, 0.9);
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta {
                        padding: 1.1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta.primary {
                        background: #2D5016;
                        color: #ffffff;
                        border: none;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .hero-cta.outline {
                        background: rgba(255, 255, 255, 0.1);
                        border: 2px solid #ffffff;
                        color: #ffffff;
                        backdrop-filter: blur(4px);
                    }
                    .hero-cta.outline:hover {
                        background: #ffffff;
                        color: #2D5016;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        width: 1.5rem;
                        height: 2.5rem;
                        margin-left: -0.75rem;
                        border: 2px solid rgba(255, 255, 255, 0.5);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding-top: 0.5rem;
                        animation: nudge 2s infinite;
                    }
                    .scroll-dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        background: #ffffff;
                        border-radius: 9999px;
                        animation: drip 2s infinite;
                    }
                    @keyframes nudge {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                    @keyframes drip {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(12px); }
                    }
                "#}
            </style>
        </section>
    }
}

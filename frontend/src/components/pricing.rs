use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::content::{PricingTier, PRICING_NOTE, PRICING_TIERS};
use crate::motion::Entrance;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;
    let get_started = Callback::from(|_: MouseEvent| scroll::to_section("contact"));

    html! {
        <div class="pricing-card-wrap">
            if tier.popular {
                <div class="popular-tag">{"★ Most Popular"}</div>
            }
            <div class={classes!("pricing-card", tier.popular.then_some("popular"))}>
                <div class="card-header">
                    <h3>{tier.name}</h3>
                    <p class="tier-description">{tier.description}</p>
                    <div class="price">
                        <span class="amount">{tier.price}</span>
                        <span class="period">{tier.period}</span>
                    </div>
                </div>
                <ul class="tier-features">
                    { for tier.features.iter().map(|feature| html! {
                        <li>
                            <span class="tier-check">{"✓"}</span>
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>
                <button
                    class={classes!("tier-cta", if tier.popular { "filled" } else { "outlined" })}
                    onclick={get_started}
                >
                    {"Get Started"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <div class="section-container">
                <SectionHeader
                    title="Simple, Transparent Pricing"
                    subtitle="Choose the perfect plan for your pharmacy. No hidden fees, cancel anytime."
                />

                <div class="pricing-grid">
                    { for PRICING_TIERS.iter().enumerate().map(|(index, tier)| html! {
                        <Reveal key={tier.name} entrance={Entrance::fade_up().duration(500).staggered(index)}>
                            <PricingCard tier={*tier} />
                        </Reveal>
                    }) }
                </div>

                <Reveal entrance={Entrance::fade_up().delay(400)} class={classes!("pricing-note")}>
                    <p>{PRICING_NOTE}</p>
                </Reveal>
            </div>

            <style>
                {r#"
                    .pricing-section {
                        padding: 5rem 0;
                        background: linear-gradient(135deg, #f9fafb, #ffffff);
                    }
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    @media (max-width: 768px) {
                        .pricing-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .pricing-card-wrap {
                        position: relative;
                        height: 100%;
                    }
                    .popular-tag {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #ffffff;
                        white-space: nowrap;
                        background: linear-gradient(90deg, #6BA547, #4A7C2C);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .pricing-card {
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2.5rem 2rem 2rem 2rem;
                        border: 2px solid #e5e7eb;
                        border-radius: 0.75rem;
                        background: #ffffff;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: all 0.3s;
                    }
                    .pricing-card:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .pricing-card.popular {
                        border-color: #4A7C2C;
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .card-header {
                        text-align: center;
                        padding-bottom: 2rem;
                    }
                    .card-header h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2D5016;
                        margin-bottom: 0.5rem;
                    }
                    .tier-description {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .price {
                        display: flex;
                        align-items: baseline;
                        justify-content: center;
                        gap: 0.25rem;
                    }
                    .amount {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #2D5016;
                    }
                    .period {
                        color: #4b5563;
                    }
                    .tier-features {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 2rem 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .tier-features li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #374151;
                    }
                    .tier-check {
                        flex-shrink: 0;
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 9999px;
                        background: #6BA547;
                        color: #ffffff;
                        font-size: 0.7rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .tier-cta {
                        width: 100%;
                        padding: 1.1rem 0;
                        font-size: 1.1rem;
                        font-weight: 600;
                        border-radius: 0.5rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .tier-cta.filled {
                        border: none;
                        color: #ffffff;
                        background: linear-gradient(90deg, #6BA547, #4A7C2C);
                    }
                    .tier-cta.filled:hover {
                        background: linear-gradient(90deg, #4A7C2C, #2D5016);
                    }
                    .tier-cta.outlined {
                        background: #ffffff;
                        border: 2px solid #4A7C2C;
                        color: #4A7C2C;
                    }
                    .tier-cta.outlined:hover {
                        background: #4A7C2C;
                        color: #ffffff;
                    }
                    .pricing-note {
                        text-align: center;
                        margin-top: 3rem;
                        color: #4b5563;
                    }
                "#}
            </style>
        </section>
    }
}

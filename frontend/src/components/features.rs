use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::content::{Feature, FEATURES};
use crate::motion::Entrance;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div class="feature-card">
            <div class="feature-icon">{feature.icon.glyph()}</div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="section-container">
                <SectionHeader
                    title="Powerful Features for Modern Chemists"
                    subtitle="Everything you need to run your pharmacy efficiently and profitably"
                />

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <Reveal key={feature.title} entrance={Entrance::fade_up().duration(500).staggered(index)}>
                            <FeatureCard feature={*feature} />
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .features-section {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (max-width: 1024px) {
                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .feature-card {
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.8);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        transition: all 0.3s;
                    }
                    .feature-card:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(135deg, #6BA547, #4A7C2C);
                        transition: transform 0.3s;
                    }
                    .feature-card:hover .feature-icon {
                        transform: scale(1.1);
                    }
                    .feature-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #2D5016;
                        margin-bottom: 0.75rem;
                    }
                    .feature-card p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                "#}
            </style>
        </section>
    }
}

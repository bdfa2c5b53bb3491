use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::Entrance;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Centered heading shared by the in-page sections, plus the container
/// styles they all lean on.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <>
            <Reveal entrance={Entrance::fade_up()} class={classes!("section-header")}>
                <h2>{props.title.clone()}</h2>
                <p>{props.subtitle.clone()}</p>
            </Reveal>
            <style>
                {r#"
                    .section-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        color: #2D5016;
                        margin-bottom: 1rem;
                    }
                    .section-header p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                "#}
            </style>
        </>
    }
}

use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::scroll;

fn shown_at(offset: f64) -> bool {
    offset > config::SCROLL_TO_TOP_THRESHOLD
}

/// Floating button that appears once the visitor is well down the page.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| shown_at(scroll::offset()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = shown_at(scroll::offset());
            if *visible != next {
                visible.set(next);
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| scroll::to_top());

    html! {
        <>
            if *visible {
                <button class="scroll-top" aria-label="Scroll to top" {onclick}>{"↑"}</button>
            }
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 40;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1.25rem;
                        color: #ffffff;
                        cursor: pointer;
                        background: linear-gradient(90deg, #6BA547, #4A7C2C);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                        animation: scrollTopIn 0.3s ease-out;
                        transition: transform 0.2s;
                    }
                    .scroll-top:hover {
                        transform: scale(1.1);
                    }
                    @keyframes scrollTopIn {
                        from { opacity: 0; transform: scale(0.5); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_past_threshold() {
        assert!(!shown_at(0.0));
        assert!(!shown_at(config::SCROLL_TO_TOP_THRESHOLD));
        assert!(shown_at(config::SCROLL_TO_TOP_THRESHOLD + 1.0));
    }
}

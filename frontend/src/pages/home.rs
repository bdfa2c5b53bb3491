use yew::prelude::*;

use crate::components::app_preview::AppPreview;
use crate::components::contact::Contact;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;
use crate::components::scroll_to_top::ScrollToTop;

/// The whole site: every section stacked in reading order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <Hero />
            <Features />
            <AppPreview />
            <Pricing />
            <Contact />
            <Footer />
            <ScrollToTop />
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    }
                    .page {
                        width: 100%;
                        min-height: 100vh;
                        background: #ffffff;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount() -> Element {
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let root = document.create_element("div").expect("root element");
        document.body().expect("body").append_child(&root).expect("append root");
        yew::Renderer::<Home>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        root
    }

    #[wasm_bindgen_test]
    async fn sections_render_in_reading_order() {
        let root = mount().await;
        let sections = root.query_selector_all("section").expect("query sections");
        let classes: Vec<String> = (0..sections.length())
            .filter_map(|i| sections.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| el.class_name())
            .collect();
        assert_eq!(
            classes,
            vec!["hero", "features-section", "preview-section", "pricing-section", "contact-section"]
        );
        assert!(root.query_selector("nav").expect("query nav").is_some());
        assert!(root.query_selector("footer").expect("query footer").is_some());
    }

    #[wasm_bindgen_test]
    async fn anchors_exist_for_every_nav_link() {
        let root = mount().await;
        for id in ["features", "pricing", "contact"] {
            let selector = format!("#{}", id);
            assert!(
                root.query_selector(&selector).expect("query anchor").is_some(),
                "missing anchor {}",
                selector
            );
        }
    }

    fn click(root: &Element, selector: &str, index: u32) {
        let target = root
            .query_selector_all(selector)
            .expect("query entries")
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| panic!("no entry {} for {}", index, selector));
        target.click();
    }

    fn menu_open(root: &Element) -> bool {
        root.query_selector(".mobile-menu").expect("query menu").is_some()
    }

    #[wasm_bindgen_test]
    async fn every_nav_entry_closes_the_mobile_menu() {
        let root = mount().await;
        let entries = [
            (".nav-desktop a", 3),
            (".nav-desktop button", 1),
            (".mobile-menu a", 3),
            (".mobile-menu button", 1),
        ];

        for (selector, count) in entries {
            for index in 0..count {
                click(&root, ".burger-menu", 0);
                TimeoutFuture::new(20).await;
                assert!(menu_open(&root), "menu did not open before {} #{}", selector, index);

                click(&root, selector, index);
                TimeoutFuture::new(20).await;
                assert!(!menu_open(&root), "{} #{} left the menu open", selector, index);
            }
        }
    }
}

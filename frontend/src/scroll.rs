use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Current vertical scroll offset of the page, 0 when unavailable.
pub fn offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly bring the element with `id` into view.
pub fn to_section(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("no section with id #{id} to scroll to"),
    }
}

pub fn to_top() {
    let Some(window) = window() else {
        warn!("window unavailable, cannot scroll to top");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

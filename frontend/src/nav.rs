use std::rc::Rc;

use yew::prelude::*;

use crate::config;

/// Local state of the fixed navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    offset: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recompute scroll-derived state from the latest vertical offset.
    pub fn observe_scroll(self, offset: f64) -> Self {
        Self {
            offset,
            scrolled: offset > config::NAV_SCROLL_THRESHOLD,
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self { menu_open: !self.menu_open, ..self }
    }

    /// Following any nav entry collapses the mobile menu.
    pub fn follow_link(self) -> Self {
        Self { menu_open: false, ..self }
    }

    /// Background opacity, fading in over the first stretch of scrolling.
    pub fn backdrop_alpha(&self) -> f64 {
        let progress = (self.offset / config::NAV_BACKDROP_FADE_DISTANCE).clamp(0.0, 1.0);
        progress * config::NAV_BACKDROP_MAX_ALPHA
    }

    pub fn backdrop_style(&self) -> String {
        format!("background-color: rgba(255, 255, 255, {:.3});", self.backdrop_alpha())
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled() {
            "top-nav scrolled"
        } else {
            "top-nav"
        }
    }

    /// Brand and link text: dark on the solid bar, white over the hero.
    pub fn tone_class(&self) -> &'static str {
        if self.scrolled() {
            "tone-dark"
        } else {
            "tone-light"
        }
    }

    pub fn download_class(&self) -> &'static str {
        if self.scrolled() {
            "nav-download solid"
        } else {
            "nav-download inverted"
        }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open() {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    FollowLink,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => self.observe_scroll(offset),
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::FollowLink => self.follow_link(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_strictly_past_threshold() {
        let state = NavState::default();
        assert!(!state.observe_scroll(0.0).scrolled());
        assert!(!state.observe_scroll(50.0).scrolled());
        assert!(state.observe_scroll(50.5).scrolled());
        assert!(state.observe_scroll(51.0).scrolled());
    }

    #[test]
    fn scrolled_tracks_latest_offset_only() {
        let state = NavState::default().observe_scroll(400.0).observe_scroll(10.0);
        assert!(!state.scrolled());
        assert_eq!(state.nav_class(), "top-nav");
    }

    #[test]
    fn following_a_link_closes_open_menu() {
        let open = NavState::default().toggle_menu();
        assert!(open.menu_open());
        assert!(!open.follow_link().menu_open());
        // closed stays closed
        assert!(!NavState::default().follow_link().menu_open());
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let state = NavState::default().toggle_menu().observe_scroll(120.0);
        assert!(state.menu_open());
        assert!(state.scrolled());
        let state = state.follow_link();
        assert!(state.scrolled());
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(NavState::default());
        let same = state.clone().reduce(NavAction::FollowLink);
        assert!(Rc::ptr_eq(&state, &same));
        let toggled = same.reduce(NavAction::ToggleMenu);
        assert!(toggled.menu_open());
        let closed = toggled.reduce(NavAction::FollowLink);
        assert!(!closed.menu_open());
    }

    #[test]
    fn backdrop_fades_in_and_clamps() {
        let state = NavState::default();
        assert_eq!(state.backdrop_alpha(), 0.0);
        assert!((state.observe_scroll(50.0).backdrop_alpha() - 0.475).abs() < 1e-9);
        assert!((state.observe_scroll(1000.0).backdrop_alpha() - 0.95).abs() < 1e-9);
        assert_eq!(state.observe_scroll(-20.0).backdrop_alpha(), 0.0);
    }
}

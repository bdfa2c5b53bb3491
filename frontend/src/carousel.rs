use std::rc::Rc;

use yew::prelude::*;

/// Rotation state for the app screenshot carousel.
///
/// `active` is always a valid index into a sequence of `len` slides. An empty
/// carousel is clamped to a single slot so the index stays well defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    active: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len: len.max(1) }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == index
    }

    /// Advance by one slide, wrapping at the end.
    pub fn tick(self) -> Self {
        Self { active: (self.active + 1) % self.len, ..self }
    }

    /// Jump straight to `index`. Out-of-range indices wrap like ticks do.
    pub fn select(self, index: usize) -> Self {
        Self { active: index % self.len, ..self }
    }
}

pub enum CarouselAction {
    Tick,
    Select(usize),
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CarouselAction::Tick => self.tick(),
            CarouselAction::Select(index) => self.select(index),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_modulo_len() {
        for len in 1..=5 {
            let mut state = CarouselState::new(len);
            for k in 0..(len * 3 + 1) {
                assert_eq!(state.active(), k % len, "len={len} k={k}");
                state = state.tick();
            }
        }
    }

    #[test]
    fn select_sets_index_regardless_of_timer_phase() {
        let state = CarouselState::new(3).tick().tick();
        assert_eq!(state.select(0).active(), 0);
        assert_eq!(state.select(1).active(), 1);
        // next timer firing continues from the manual choice
        assert_eq!(state.select(1).tick().active(), 2);
    }

    #[test]
    fn exactly_one_slide_is_opaque() {
        let state = CarouselState::new(3).tick();
        let opaque: Vec<_> = (0..3).filter(|&i| state.is_active(i)).collect();
        assert_eq!(opaque, vec![1]);
    }

    #[test]
    fn reducer_applies_ticks_and_selection() {
        let state = Rc::new(CarouselState::new(3))
            .reduce(CarouselAction::Tick)
            .reduce(CarouselAction::Tick)
            .reduce(CarouselAction::Tick);
        assert_eq!(state.active(), 0);
        assert_eq!(state.reduce(CarouselAction::Select(2)).active(), 2);
    }

    #[test]
    fn empty_carousel_never_goes_out_of_bounds() {
        let state = CarouselState::new(0).tick().select(7);
        assert_eq!(state.active(), 0);
        assert_eq!(state.len(), 1);
    }
}

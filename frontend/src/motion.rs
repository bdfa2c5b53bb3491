//! Declarative entrance transitions.
//!
//! An [`Entrance`] describes where an element starts, where it ends up, what
//! starts the move and how long it takes. The browser's CSS transition engine
//! does the interpolation; this module only produces the inline style for
//! either end. [`RevealGate`] makes sure an entrance is played once.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Play right after the element is mounted.
    Mount,
    /// Play the first time the element intersects the viewport.
    InView,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Opacity plus a translation in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const RESTING: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0 };

    pub fn hidden(x: f64, y: f64) -> Self {
        Pose { opacity: 0.0, x, y }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            self.opacity, self.x, self.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub to: Pose,
    pub trigger: Trigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Entrance {
    fn new(from: Pose) -> Self {
        Self {
            from,
            to: Pose::RESTING,
            trigger: Trigger::InView,
            duration_ms: 600,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Fade in while rising 20px.
    pub fn fade_up() -> Self {
        Self::new(Pose::hidden(0.0, 20.0))
    }

    /// Fade in while dropping 20px.
    pub fn fade_down() -> Self {
        Self::new(Pose::hidden(0.0, -20.0))
    }

    /// Slide in horizontally; negative `dx` comes from the left.
    pub fn slide_x(dx: f64) -> Self {
        Self::new(Pose::hidden(dx, 0.0))
    }

    /// Plain cross-fade, used by the carousel slides.
    pub fn fade() -> Self {
        Self {
            duration_ms: 500,
            easing: Easing::EaseInOut,
            ..Self::new(Pose::hidden(0.0, 0.0))
        }
    }

    pub fn on_mount(self) -> Self {
        Self { trigger: Trigger::Mount, ..self }
    }

    pub fn duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub fn delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Delay by 100ms per position in a list.
    pub fn staggered(self, index: usize) -> Self {
        let step = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(100);
        self.delay(step)
    }

    pub fn style(&self, revealed: bool) -> String {
        let pose = if revealed { self.to } else { self.from };
        format!(
            "{} transition: opacity {d}ms {e} {w}ms, transform {d}ms {e} {w}ms;",
            pose.css(),
            d = self.duration_ms,
            e = self.easing.css(),
            w = self.delay_ms,
        )
    }
}

/// Latch that flips to revealed on the first visible observation and stays
/// there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility observation. Returns true only on the observation
    /// that first reveals the element.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed() || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_fires_once_and_never_replays() {
        let mut gate = RevealGate::default();
        assert!(!gate.observe(false));
        assert!(!gate.revealed());
        assert!(gate.observe(true));
        // scrolling away and back again
        assert!(!gate.observe(false));
        assert!(!gate.observe(true));
        assert!(gate.revealed());
    }

    #[test]
    fn style_switches_between_poses() {
        let entrance = Entrance::fade_up().delay(200);
        let hidden = entrance.style(false);
        let shown = entrance.style(true);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 20px);"));
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px);"));
        assert!(shown.contains("opacity 600ms"));
        assert!(shown.contains(" 200ms,"));
    }

    #[test]
    fn stagger_steps_by_a_tenth_of_a_second() {
        assert_eq!(Entrance::fade_up().staggered(0).delay_ms, 0);
        assert_eq!(Entrance::fade_up().staggered(3).delay_ms, 300);
        assert_eq!(Entrance::slide_x(-50.0).on_mount().trigger, Trigger::Mount);
    }
}

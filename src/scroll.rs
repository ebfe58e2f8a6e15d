pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const NAV_OFFSET_PX: f64 = 80.0;
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const CAROUSEL_STEP_PX: f64 = 400.0;

const SNAP_DISTANCE_PX: f64 = 0.5;

/// Frame-rate independent version of "move `lerp` of the way every 60 Hz
/// frame" toward a wheel-driven target.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    lerp: f64,
    wheel_multiplier: f64,
    current: f64,
    target: f64,
    limit: f64,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(0.05, 1.2)
    }
}

impl SmoothScroll {
    pub fn new(lerp: f64, wheel_multiplier: f64) -> Self {
        Self {
            lerp: lerp.clamp(f64::EPSILON, 1.0),
            wheel_multiplier,
            current: 0.0,
            target: 0.0,
            limit: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    pub fn sync(&mut self, position: f64) {
        let position = position.clamp(0.0, self.limit);
        self.current = position;
        self.target = position;
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.target = (self.target + delta_y * self.wheel_multiplier).clamp(0.0, self.limit);
    }

    pub fn scroll_to(&mut self, position: f64) {
        self.target = position.clamp(0.0, self.limit);
    }

    pub fn frame(&mut self, dt_ms: f64) -> f64 {
        let lambda = self.lerp * 60.0;
        let blend = 1.0 - (-lambda * dt_ms.max(0.0) / 1_000.0).exp();
        self.current += (self.target - self.current) * blend;

        if (self.target - self.current).abs() < SNAP_DISTANCE_PX {
            self.current = self.target;
        }

        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub offset_top: f64,
    pub height: f64,
}

/// The last section (in document order) whose band contains `scroll_y`;
/// `previous` stays active when none does.
pub fn active_section<'a>(
    sections: &[SectionBounds<'a>],
    scroll_y: f64,
    previous: &'a str,
) -> &'a str {
    sections
        .iter()
        .filter(|section| {
            let top = section.offset_top - NAV_OFFSET_PX;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id)
        .unwrap_or(previous)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselArrows {
    pub left: bool,
    pub right: bool,
}

impl CarouselArrows {
    pub fn from_metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            left: scroll_left > 0.0,
            right: scroll_left < scroll_width - client_width - 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselDirection {
    Left,
    Right,
}

impl CarouselDirection {
    pub fn offset(self) -> f64 {
        match self {
            Self::Left => -CAROUSEL_STEP_PX,
            Self::Right => CAROUSEL_STEP_PX,
        }
    }
}

pub fn sticky_top_px(index: usize, is_mobile: bool) -> f64 {
    if is_mobile {
        90.0 + 45.0 * index as f64
    } else {
        120.0 + 50.0 * index as f64
    }
}

pub fn stack_height_vh(cards: usize, is_mobile: bool) -> f64 {
    let per_card = if is_mobile { 70.0 } else { 60.0 };
    per_card * cards as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_moves_target_and_frames_converge() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(5_000.0);
        scroll.on_wheel(100.0);

        assert_eq!(scroll.target(), 120.0);
        let first = scroll.frame(1_000.0 / 60.0);
        assert!(first > 0.0 && first < 120.0);
        assert!((first - 120.0 * (1.0 - (-0.05f64).exp())).abs() < 1e-9);

        for _ in 0..600 {
            scroll.frame(1_000.0 / 60.0);
        }
        assert!(scroll.is_settled());
        assert_eq!(scroll.current(), 120.0);
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let mut fast = SmoothScroll::default();
        let mut slow = SmoothScroll::default();
        for scroll in [&mut fast, &mut slow] {
            scroll.set_limit(10_000.0);
            scroll.scroll_to(1_000.0);
        }

        for _ in 0..4 {
            fast.frame(1_000.0 / 120.0);
        }
        slow.frame(1_000.0 / 30.0);

        assert!((fast.current() - slow.current()).abs() < 1e-6);
    }

    #[test]
    fn targets_stay_inside_the_document() {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(300.0);

        scroll.on_wheel(-500.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.on_wheel(10_000.0);
        assert_eq!(scroll.target(), 300.0);

        scroll.sync(150.0);
        assert_eq!(scroll.current(), 150.0);
        assert!(scroll.is_settled());
    }

    #[test]
    fn active_section_accounts_for_the_header() {
        let sections = [
            SectionBounds {
                id: "home",
                offset_top: 0.0,
                height: 900.0,
            },
            SectionBounds {
                id: "about",
                offset_top: 900.0,
                height: 1_200.0,
            },
            SectionBounds {
                id: "work",
                offset_top: 2_100.0,
                height: 1_500.0,
            },
        ];

        assert_eq!(active_section(&sections, 0.0, "home"), "home");
        assert_eq!(active_section(&sections, 819.0, "home"), "home");
        assert_eq!(active_section(&sections, 820.0, "home"), "about");
        assert_eq!(active_section(&sections, 2_050.0, "about"), "work");
        assert_eq!(active_section(&sections, 9_000.0, "work"), "work");
    }

    #[test]
    fn header_compacts_past_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_mobile(767.0));
        assert!(!is_mobile(768.0));
    }

    #[test]
    fn carousel_arrows_track_both_ends() {
        assert_eq!(
            CarouselArrows::from_metrics(0.0, 1_400.0, 800.0),
            CarouselArrows {
                left: false,
                right: true
            }
        );
        assert_eq!(
            CarouselArrows::from_metrics(599.5, 1_400.0, 800.0),
            CarouselArrows {
                left: true,
                right: false
            }
        );
        assert_eq!(
            CarouselArrows::from_metrics(0.0, 800.0, 800.0),
            CarouselArrows {
                left: false,
                right: false
            }
        );
        assert_eq!(CarouselDirection::Left.offset(), -400.0);
    }

    #[test]
    fn stacked_cards_step_down() {
        assert_eq!(sticky_top_px(0, false), 120.0);
        assert_eq!(sticky_top_px(2, false), 220.0);
        assert_eq!(sticky_top_px(2, true), 180.0);
        assert_eq!(stack_height_vh(3, false), 180.0);
        assert_eq!(stack_height_vh(3, true), 210.0);
    }
}

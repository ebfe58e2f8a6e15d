use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    None,
    Power2Out,
    Power2InOut,
    Power3Out,
    SineInOut,
    BackOut(f64),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let (base, args) = match name.find('(') {
            Some(open) => {
                let close = name.rfind(')')?;
                if close < open {
                    return None;
                }
                (&name[..open], Some(&name[open + 1..close]))
            }
            None => (name, None),
        };

        let params = match args.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .split(',')
                .map(|value| value.trim().parse::<f64>().ok())
                .collect::<Option<Vec<_>>>()?,
            None => Vec::new(),
        };

        match base.trim() {
            "none" | "linear" => Some(Self::None),
            "power2.out" => Some(Self::Power2Out),
            "power2.inOut" => Some(Self::Power2InOut),
            "power3.out" => Some(Self::Power3Out),
            "sine.inOut" => Some(Self::SineInOut),
            "back.out" => Some(Self::BackOut(params.first().copied().unwrap_or(1.70158))),
            "elastic.out" => Some(Self::ElasticOut {
                amplitude: params.first().copied().unwrap_or(1.0),
                period: params.get(1).copied().unwrap_or(0.3),
            }),
            _ => None,
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::None => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::BackOut(overshoot) => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Self::ElasticOut { amplitude, period } => {
                let peak = amplitude.max(1.0);
                let period = period / amplitude.min(1.0).max(f64::EPSILON);
                let angular = 2.0 * PI / period;
                let phase = (1.0 / peak).asin() / angular;
                peak * 2f64.powf(-10.0 * t) * ((t - phase) * angular).sin() + 1.0
            }
        }
    }
}

/// Animatable properties of one element. Translations are in px, rotations in
/// degrees, `glow` scales the accent text shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotate: f64,
    pub rotation_y: f64,
    pub glow: f64,
}

impl Pose {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate: 0.0,
        rotation_y: 0.0,
        glow: 0.0,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = value;
        self
    }

    pub fn x(mut self, value: f64) -> Self {
        self.x = value;
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = value;
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = value;
        self
    }

    pub fn scale_x(mut self, value: f64) -> Self {
        self.scale_x = value;
        self
    }

    pub fn rotate(mut self, value: f64) -> Self {
        self.rotate = value;
        self
    }

    pub fn rotation_y(mut self, value: f64) -> Self {
        self.rotation_y = value;
        self
    }

    pub fn glow(mut self, value: f64) -> Self {
        self.glow = value;
        self
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            rotate: mix(self.rotate, to.rotate),
            rotation_y: mix(self.rotation_y, to.rotation_y),
            glow: mix(self.glow, to.glow),
        }
    }

    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4}) scaleX({:.4}) rotate({:.2}deg) rotateY({:.2}deg)",
            self.x, self.y, self.scale, self.scale_x, self.rotate, self.rotation_y,
        )
    }

    pub fn text_shadow(&self) -> Option<String> {
        if self.glow <= 0.0 {
            return None;
        }

        let glow = self.glow.clamp(0.0, 1.0);
        Some(format!("0 0 {:.1}px rgba(99, 103, 242, {glow:.3})", 40.0 * glow))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite { yoyo: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Tween {
    pub fn from_pose(from: Pose, duration_ms: f64, ease: Ease) -> Self {
        Self::between(from, Pose::REST, duration_ms, ease)
    }

    pub fn between(from: Pose, to: Pose, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn total_ms(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.delay_ms + self.duration_ms),
            Repeat::Infinite { .. } => None,
        }
    }

    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }

        let cycles = local / self.duration_ms;
        match self.repeat {
            Repeat::Once => self.ease.apply(cycles.min(1.0)),
            Repeat::Infinite { yoyo } => {
                let cycle = cycles.floor();
                let fraction = cycles - cycle;
                let backwards = yoyo && (cycle as u64) % 2 == 1;
                self.ease.apply(if backwards { 1.0 - fraction } else { fraction })
            }
        }
    }

    pub fn sample(&self, elapsed_ms: f64) -> Pose {
        self.from.lerp(&self.to, self.progress_at(elapsed_ms))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerOrigin {
    Start,
    End,
    Shuffled(u64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub each_ms: f64,
    pub origin: StaggerOrigin,
}

impl Stagger {
    pub fn each(each_ms: f64) -> Self {
        Self {
            each_ms,
            origin: StaggerOrigin::Start,
        }
    }

    pub fn shuffled(each_ms: f64, seed: u64) -> Self {
        Self {
            each_ms,
            origin: StaggerOrigin::Shuffled(seed),
        }
    }

    pub fn delay_for(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }

        let index = index.min(count - 1);
        let slot = match self.origin {
            StaggerOrigin::Start => index,
            StaggerOrigin::End => count - 1 - index,
            StaggerOrigin::Shuffled(seed) => shuffled_order(seed, count)
                .iter()
                .position(|&candidate| candidate == index)
                .unwrap_or(index),
        };

        slot as f64 * self.each_ms
    }

    pub fn span_ms(&self, count: usize) -> f64 {
        count.saturating_sub(1) as f64 * self.each_ms
    }
}

pub fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn random_between(seed: u64, index: usize, min: f64, max: f64) -> f64 {
    let bits = splitmix64(seed ^ (index as u64).wrapping_mul(0xA24B_AED4_963E_E407));
    let unit = (bits >> 11) as f64 / (1u64 << 53) as f64;
    min + (max - min) * unit
}

pub fn shuffled_order(seed: u64, count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..count).collect();
    let mut state = seed;

    for i in (1..count).rev() {
        state = splitmix64(state);
        let j = (state % (i as u64 + 1)) as usize;
        order.swap(i, j);
    }

    order
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    cursor_ms: f64,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, tween: Tween) -> Self {
        let start = self.cursor_ms + tween.delay_ms;
        self.tweens.push(tween.delay(start));
        self.cursor_ms = start + tween.duration_ms;
        self
    }

    pub fn then_staggered(mut self, tween: Tween, count: usize, stagger: Stagger) -> Self {
        let start = self.cursor_ms + tween.delay_ms;
        for index in 0..count {
            self.tweens
                .push(tween.delay(start + stagger.delay_for(index, count)));
        }
        if count > 0 {
            self.cursor_ms = start + stagger.span_ms(count) + tween.duration_ms;
        }
        self
    }

    pub fn at(mut self, offset_ms: f64, tween: Tween) -> Self {
        let start = offset_ms + tween.delay_ms;
        self.tweens.push(tween.delay(start));
        self.cursor_ms = self.cursor_ms.max(start + tween.duration_ms);
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.cursor_ms
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn into_tweens(self) -> Vec<Tween> {
        self.tweens
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "play" => Some(Self::Play),
            "pause" => Some(Self::Pause),
            "resume" => Some(Self::Resume),
            "reverse" => Some(Self::Reverse),
            "restart" => Some(Self::Restart),
            "reset" => Some(Self::Reset),
            "complete" => Some(Self::Complete),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub const fn new(
        on_enter: ToggleAction,
        on_leave: ToggleAction,
        on_enter_back: ToggleAction,
        on_leave_back: ToggleAction,
    ) -> Self {
        Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace().map(ToggleAction::parse);
        let actions = Self::new(
            words.next()??,
            words.next().unwrap_or(Some(ToggleAction::None))?,
            words.next().unwrap_or(Some(ToggleAction::None))?,
            words.next().unwrap_or(Some(ToggleAction::None))?,
        );

        if words.next().is_some() {
            return None;
        }

        Some(actions)
    }
}

fn parse_position(word: &str) -> Option<f64> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => word
            .strip_suffix('%')
            .and_then(|value| value.trim().parse::<f64>().ok())
            .map(|percent| percent / 100.0),
    }
}

/// A point on the element (fraction of its height) meeting a point on the
/// viewport (fraction of its height), e.g. `top 80%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLine {
    pub element: f64,
    pub viewport: f64,
}

impl EdgeLine {
    pub const fn top(viewport: f64) -> Self {
        Self {
            element: 0.0,
            viewport,
        }
    }

    pub const fn bottom(viewport: f64) -> Self {
        Self {
            element: 1.0,
            viewport,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let element = parse_position(words.next()?)?;
        let viewport = parse_position(words.next()?)?;

        if words.next().is_some() {
            return None;
        }

        Some(Self { element, viewport })
    }

    /// Pixels of scrolling left before the line is reached; negative once
    /// passed.
    pub fn gap(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        rect_top + self.element * rect_height - self.viewport * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerEnd {
    Line(EdgeLine),
    Distance(f64),
}

impl TriggerEnd {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().strip_prefix("+=") {
            Some(distance) => distance.trim().parse::<f64>().ok().map(Self::Distance),
            None => EdgeLine::parse(text).map(Self::Line),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerZone {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: EdgeLine,
    pub end: TriggerEnd,
    pub actions: ToggleActions,
}

impl ScrollTrigger {
    pub const fn new(start: EdgeLine, end: TriggerEnd, actions: ToggleActions) -> Self {
        Self {
            start,
            end,
            actions,
        }
    }

    pub fn parse(start: &str, end: Option<&str>, actions: &str) -> Option<Self> {
        Some(Self {
            start: EdgeLine::parse(start)?,
            end: match end {
                Some(end) => TriggerEnd::parse(end)?,
                None => TriggerEnd::Line(EdgeLine::bottom(0.0)),
            },
            actions: ToggleActions::parse(actions)?,
        })
    }

    pub fn zone(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> TriggerZone {
        let start_gap = self.start.gap(rect_top, rect_height, viewport_height);
        if start_gap > 0.0 {
            return TriggerZone::Before;
        }

        let past_end = match self.end {
            TriggerEnd::Line(line) => line.gap(rect_top, rect_height, viewport_height) < 0.0,
            TriggerEnd::Distance(distance) => -start_gap > distance,
        };

        if past_end {
            TriggerZone::After
        } else {
            TriggerZone::Active
        }
    }
}

#[derive(Clone, Debug)]
pub struct TriggerState {
    trigger: ScrollTrigger,
    zone: Option<TriggerZone>,
}

impl TriggerState {
    pub fn new(trigger: ScrollTrigger) -> Self {
        Self {
            trigger,
            zone: None,
        }
    }

    pub fn zone(&self) -> Option<TriggerZone> {
        self.zone
    }

    /// Returns the action the crossing asks for. A jump over both boundaries
    /// fires both callbacks in order and the later non-`none` one wins.
    pub fn update(
        &mut self,
        rect_top: f64,
        rect_height: f64,
        viewport_height: f64,
    ) -> Option<ToggleAction> {
        let next = self.trigger.zone(rect_top, rect_height, viewport_height);
        let previous = self.zone.replace(next).unwrap_or(TriggerZone::Before);
        let actions = self.trigger.actions;

        let (first, second) = match (previous, next) {
            (TriggerZone::Before, TriggerZone::Active) => (Some(actions.on_enter), None),
            (TriggerZone::Active, TriggerZone::After) => (Some(actions.on_leave), None),
            (TriggerZone::After, TriggerZone::Active) => (Some(actions.on_enter_back), None),
            (TriggerZone::Active, TriggerZone::Before) => (Some(actions.on_leave_back), None),
            (TriggerZone::Before, TriggerZone::After) => {
                (Some(actions.on_enter), Some(actions.on_leave))
            }
            (TriggerZone::After, TriggerZone::Before) => {
                (Some(actions.on_enter_back), Some(actions.on_leave_back))
            }
            _ => (None, None),
        };

        let meaningful = |action: Option<ToggleAction>| action.filter(|a| *a != ToggleAction::None);
        meaningful(second).or(meaningful(first))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Paused,
}

#[derive(Clone, Debug)]
pub struct Playback {
    tween: Tween,
    elapsed_ms: f64,
    direction: Direction,
    resume_direction: Direction,
}

impl Playback {
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            elapsed_ms: 0.0,
            direction: Direction::Paused,
            resume_direction: Direction::Forward,
        }
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.direction = Direction::Forward,
            ToggleAction::Reverse => self.direction = Direction::Backward,
            ToggleAction::Pause => {
                if self.direction != Direction::Paused {
                    self.resume_direction = self.direction;
                }
                self.direction = Direction::Paused;
            }
            ToggleAction::Resume => self.direction = self.resume_direction,
            ToggleAction::Restart => {
                self.elapsed_ms = 0.0;
                self.direction = Direction::Forward;
            }
            ToggleAction::Reset => {
                self.elapsed_ms = 0.0;
                self.direction = Direction::Paused;
                self.resume_direction = Direction::Forward;
            }
            ToggleAction::Complete => {
                if let Some(total) = self.tween.total_ms() {
                    self.elapsed_ms = total;
                }
                self.direction = Direction::Paused;
            }
            ToggleAction::None => {}
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        let dt_ms = dt_ms.max(0.0);
        match self.direction {
            Direction::Forward => {
                let next = self.elapsed_ms + dt_ms;
                self.elapsed_ms = match self.tween.total_ms() {
                    Some(total) => next.min(total),
                    None => next,
                };
            }
            Direction::Backward => self.elapsed_ms = (self.elapsed_ms - dt_ms).max(0.0),
            Direction::Paused => {}
        }
    }

    pub fn is_moving(&self) -> bool {
        match self.direction {
            Direction::Forward => self
                .tween
                .total_ms()
                .map_or(true, |total| self.elapsed_ms < total),
            Direction::Backward => self.elapsed_ms > 0.0,
            Direction::Paused => false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.tween
            .total_ms()
            .is_some_and(|total| self.elapsed_ms >= total)
    }

    pub fn pose(&self) -> Pose {
        self.tween.sample(self.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EASES: [Ease; 7] = [
        Ease::None,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::SineInOut,
        Ease::BackOut(1.7),
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        },
    ];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn every_ease_pins_both_ends() {
        for ease in ALL_EASES {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} should start at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?} should end at 1");
            assert_eq!(ease.apply(-0.5), 0.0);
            assert_eq!(ease.apply(3.0), 1.0);
        }
    }

    #[test]
    fn ease_names_parse_with_parameters() {
        assert_eq!(Ease::parse("power3.out"), Some(Ease::Power3Out));
        assert_eq!(Ease::parse("power2.out"), Some(Ease::Power2Out));
        assert_eq!(Ease::parse("power2.inOut"), Some(Ease::Power2InOut));
        assert_eq!(Ease::parse("sine.inOut"), Some(Ease::SineInOut));
        assert_eq!(Ease::parse("back.out(1.7)"), Some(Ease::BackOut(1.7)));
        assert_eq!(
            Ease::parse("elastic.out(1, 0.5)"),
            Some(Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5
            })
        );
        assert_eq!(Ease::parse("none"), Some(Ease::None));
        assert_eq!(Ease::parse("bounce.out"), None);
        assert_eq!(Ease::parse("back.out(abc)"), None);
    }

    #[test]
    fn back_and_elastic_overshoot_their_target() {
        assert!(Ease::BackOut(1.7).apply(0.5) > 1.0);

        let elastic = Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        };
        let overshoots = (1..100).any(|step| elastic.apply(step as f64 / 100.0) > 1.0);
        assert!(overshoots);
        assert!(elastic.apply(0.001) < 0.1);
    }

    #[test]
    fn out_eases_lead_linear_progress() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
        assert!(close(Ease::SineInOut.apply(0.5), 0.5));
        assert!(close(Ease::Power2InOut.apply(0.5), 0.5));
    }

    #[test]
    fn tween_holds_from_pose_during_delay_and_settles_on_target() {
        let tween = Tween::from_pose(Pose::HIDDEN.y(50.0), 1_000.0, Ease::Power3Out).delay(200.0);

        assert_eq!(tween.sample(0.0), Pose::HIDDEN.y(50.0));
        assert_eq!(tween.sample(200.0), Pose::HIDDEN.y(50.0));
        assert_eq!(tween.sample(1_200.0), Pose::REST);
        assert_eq!(tween.sample(5_000.0), Pose::REST);
        assert_eq!(tween.total_ms(), Some(1_200.0));

        let midway = tween.sample(700.0);
        assert!(midway.opacity > 0.5 && midway.opacity < 1.0);
        assert!(midway.y > 0.0 && midway.y < 25.0);
    }

    #[test]
    fn infinite_yoyo_swings_back_to_the_start() {
        let float = Tween::between(Pose::REST, Pose::REST.y(15.0), 3_000.0, Ease::SineInOut)
            .repeat(Repeat::Infinite { yoyo: true });

        assert_eq!(float.total_ms(), None);
        assert!(close(float.sample(3_000.0 - 1e-9).y, 15.0));
        assert!(close(float.sample(4_500.0).y, 7.5));
        assert!(float.sample(5_999.0).y < 0.1);
        assert!(close(float.sample(6_000.0).y, 0.0));
    }

    #[test]
    fn looping_without_yoyo_restarts_each_cycle() {
        let marquee = Tween::between(Pose::REST, Pose::REST.x(-100.0), 1_000.0, Ease::None)
            .repeat(Repeat::Infinite { yoyo: false });

        assert!(close(marquee.sample(250.0).x, -25.0));
        assert!(close(marquee.sample(1_250.0).x, -25.0));
    }

    #[test]
    fn pose_css_clamps_opacity_and_renders_glow() {
        let glowing = Pose::REST.opacity(1.2).glow(1.0);
        assert_eq!(glowing.css_opacity(), "1.000");
        assert!(glowing
            .text_shadow()
            .is_some_and(|shadow| shadow.starts_with("0 0 40.0px")));
        assert!(Pose::REST.text_shadow().is_none());
    }

    #[test]
    fn stagger_orders_by_origin() {
        let forward = Stagger::each(150.0);
        assert_eq!(forward.delay_for(0, 3), 0.0);
        assert_eq!(forward.delay_for(2, 3), 300.0);
        assert_eq!(forward.span_ms(3), 300.0);

        let backward = Stagger {
            each_ms: 100.0,
            origin: StaggerOrigin::End,
        };
        assert_eq!(backward.delay_for(0, 4), 300.0);
        assert_eq!(backward.delay_for(3, 4), 0.0);
    }

    #[test]
    fn shuffled_stagger_uses_every_slot_once() {
        let stagger = Stagger::shuffled(50.0, 7);
        let mut delays: Vec<f64> = (0..12).map(|index| stagger.delay_for(index, 12)).collect();
        delays.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let expected: Vec<f64> = (0..12).map(|slot| slot as f64 * 50.0).collect();
        assert_eq!(delays, expected);
        assert_eq!(shuffled_order(7, 12), shuffled_order(7, 12));
    }

    #[test]
    fn random_between_stays_in_range() {
        for index in 0..200 {
            let value = random_between(42, index, -50.0, 50.0);
            assert!((-50.0..50.0).contains(&value));
        }
        assert_ne!(random_between(42, 0, 0.0, 1.0), random_between(42, 1, 0.0, 1.0));
    }

    #[test]
    fn timeline_chains_and_staggers() {
        let timeline = Timeline::new()
            .then(Tween::from_pose(Pose::HIDDEN, 500.0, Ease::None))
            .then_staggered(
                Tween::from_pose(Pose::HIDDEN.y(20.0), 800.0, Ease::Power2Out),
                3,
                Stagger::each(150.0),
            );

        let starts: Vec<f64> = timeline.tweens().iter().map(|tween| tween.delay_ms).collect();
        assert_eq!(starts, vec![0.0, 500.0, 650.0, 800.0]);
        assert_eq!(timeline.duration_ms(), 1_600.0);

        let extended = timeline.at(100.0, Tween::from_pose(Pose::HIDDEN, 2_000.0, Ease::None));
        assert_eq!(extended.duration_ms(), 2_100.0);
        assert_eq!(extended.tweens()[4].delay_ms, 100.0);
    }

    #[test]
    fn trigger_strings_parse() {
        let trigger = ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play reset play reset")
            .expect("valid trigger");
        assert_eq!(trigger.start, EdgeLine::top(0.8));
        assert_eq!(trigger.end, TriggerEnd::Line(EdgeLine::bottom(0.2)));
        assert_eq!(trigger.actions.on_leave, ToggleAction::Reset);

        let distance = ScrollTrigger::parse("top 85%", Some("+=300"), "play none none reverse")
            .expect("valid trigger");
        assert_eq!(distance.end, TriggerEnd::Distance(300.0));

        let once = ToggleActions::parse("play").expect("single action");
        assert_eq!(once.on_leave_back, ToggleAction::None);

        assert!(ScrollTrigger::parse("top", None, "play").is_none());
        assert!(ToggleActions::parse("play twice").is_none());
        assert!(ToggleActions::parse("play none none none none").is_none());
    }

    #[test]
    fn zones_follow_element_position() {
        let trigger = ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play").expect("valid");
        let viewport = 1_000.0;

        assert_eq!(trigger.zone(900.0, 400.0, viewport), TriggerZone::Before);
        assert_eq!(trigger.zone(800.0, 400.0, viewport), TriggerZone::Active);
        assert_eq!(trigger.zone(0.0, 400.0, viewport), TriggerZone::Active);
        assert_eq!(trigger.zone(-250.0, 400.0, viewport), TriggerZone::After);

        let distance = ScrollTrigger::parse("top 85%", Some("+=300"), "play").expect("valid");
        assert_eq!(distance.zone(600.0, 400.0, viewport), TriggerZone::Active);
        assert_eq!(distance.zone(500.0, 400.0, viewport), TriggerZone::After);
    }

    #[test]
    fn trigger_fires_once_per_crossing() {
        let trigger = ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play reset play reset")
            .expect("valid");
        let mut state = TriggerState::new(trigger);
        let viewport = 1_000.0;

        assert_eq!(state.update(1_200.0, 400.0, viewport), None);
        assert_eq!(state.update(700.0, 400.0, viewport), Some(ToggleAction::Play));
        assert_eq!(state.update(650.0, 400.0, viewport), None);
        assert_eq!(state.update(-300.0, 400.0, viewport), Some(ToggleAction::Reset));
        assert_eq!(state.update(-300.0, 400.0, viewport), None);
        assert_eq!(state.update(100.0, 400.0, viewport), Some(ToggleAction::Play));
        assert_eq!(state.update(900.0, 400.0, viewport), Some(ToggleAction::Reset));
        assert_eq!(state.zone(), Some(TriggerZone::Before));
    }

    #[test]
    fn skipped_zone_keeps_the_later_meaningful_action() {
        let trigger = ScrollTrigger::parse("top 85%", None, "play none none reverse").expect("valid");
        let mut state = TriggerState::new(trigger);

        assert_eq!(state.update(-2_000.0, 400.0, 1_000.0), Some(ToggleAction::Play));
        assert_eq!(state.update(2_000.0, 400.0, 1_000.0), Some(ToggleAction::Reverse));
    }

    #[test]
    fn already_visible_element_plays_on_first_check() {
        let trigger = ScrollTrigger::parse("top 90%", None, "play none none none").expect("valid");
        let mut state = TriggerState::new(trigger);

        assert_eq!(state.update(100.0, 400.0, 1_000.0), Some(ToggleAction::Play));
        assert_eq!(state.update(2_000.0, 400.0, 1_000.0), None);
    }

    #[test]
    fn playback_follows_toggle_actions() {
        let tween = Tween::from_pose(Pose::HIDDEN, 1_000.0, Ease::None);
        let mut playback = Playback::new(tween);

        assert!(!playback.is_moving());
        playback.apply(ToggleAction::Play);
        playback.advance(400.0);
        assert!(close(playback.pose().opacity, 0.4));

        playback.apply(ToggleAction::Reverse);
        playback.advance(100.0);
        assert!(close(playback.pose().opacity, 0.3));
        playback.advance(1_000.0);
        assert_eq!(playback.elapsed_ms(), 0.0);
        assert!(!playback.is_moving());

        playback.apply(ToggleAction::Complete);
        assert_eq!(playback.pose(), Pose::REST);

        playback.apply(ToggleAction::Play);
        assert!(!playback.is_moving(), "finished tween does not replay on play");

        playback.apply(ToggleAction::Reset);
        assert_eq!(playback.pose(), Pose::HIDDEN);

        playback.apply(ToggleAction::Restart);
        playback.advance(2_000.0);
        assert_eq!(playback.elapsed_ms(), 1_000.0);
    }

    #[test]
    fn pause_and_resume_keep_direction() {
        let tween = Tween::from_pose(Pose::HIDDEN, 1_000.0, Ease::None);
        let mut playback = Playback::new(tween);

        playback.apply(ToggleAction::Complete);
        playback.apply(ToggleAction::Reverse);
        playback.advance(200.0);
        playback.apply(ToggleAction::Pause);
        playback.advance(200.0);
        assert_eq!(playback.elapsed_ms(), 800.0);

        playback.apply(ToggleAction::Resume);
        assert_eq!(playback.direction(), Direction::Backward);
    }
}

use crate::motion::{
    random_between, EdgeLine, Ease, Pose, Repeat, ScrollTrigger, Stagger, Timeline, ToggleAction,
    ToggleActions, TriggerEnd, Tween,
};

const BACK: Ease = Ease::BackOut(1.7);
const ELASTIC: Ease = Ease::ElasticOut {
    amplitude: 1.0,
    period: 0.5,
};

const REPLAY: ToggleActions = ToggleActions::new(
    ToggleAction::Play,
    ToggleAction::Reset,
    ToggleAction::Play,
    ToggleAction::Reset,
);
const REVERSE_ON_RETURN: ToggleActions = ToggleActions::new(
    ToggleAction::Play,
    ToggleAction::None,
    ToggleAction::None,
    ToggleAction::Reverse,
);
const REVERSIBLE: ToggleActions = ToggleActions::new(
    ToggleAction::Play,
    ToggleAction::Reverse,
    ToggleAction::Play,
    ToggleAction::Reverse,
);
const ONCE: ToggleActions = ToggleActions::new(
    ToggleAction::Play,
    ToggleAction::None,
    ToggleAction::None,
    ToggleAction::None,
);

const LEAVES_TOP: TriggerEnd = TriggerEnd::Line(EdgeLine::bottom(0.0));

pub const CONTACT_TITLE_SEED: u64 = 0x5EED_C0DE;
pub const SPLASH_CHILDREN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub tween: Tween,
    pub trigger: Option<ScrollTrigger>,
}

impl Reveal {
    pub fn on_mount(tween: Tween) -> Self {
        Self {
            tween,
            trigger: None,
        }
    }

    pub fn on_scroll(tween: Tween, trigger: ScrollTrigger) -> Self {
        Self {
            tween,
            trigger: Some(trigger),
        }
    }

    /// Where the element rests when motion is reduced: loops hold their first
    /// frame, one-shot entrances land on their final one.
    pub fn reduced_motion_pose(&self) -> Pose {
        match self.tween.repeat {
            Repeat::Infinite { .. } => self.tween.from,
            Repeat::Once => self.tween.to,
        }
    }
}

fn replay_trigger() -> ScrollTrigger {
    ScrollTrigger::new(
        EdgeLine::top(0.8),
        TriggerEnd::Line(EdgeLine::bottom(0.2)),
        REPLAY,
    )
}

fn once_at(viewport: f64) -> ScrollTrigger {
    ScrollTrigger::new(EdgeLine::top(viewport), LEAVES_TOP, ONCE)
}

fn in_view_once() -> ScrollTrigger {
    once_at(1.0)
}

// Splash and chrome.

pub fn splash_timeline() -> Timeline {
    Timeline::new()
        .then(Tween::from_pose(Pose::HIDDEN, 500.0, Ease::Power2Out))
        .then_staggered(
            Tween::from_pose(Pose::HIDDEN.y(20.0), 800.0, Ease::Power2Out),
            SPLASH_CHILDREN,
            Stagger::each(150.0),
        )
}

pub fn splash_exit(duration_ms: f64) -> Tween {
    Tween::between(Pose::REST, Pose::HIDDEN, duration_ms, Ease::Power2InOut)
}

pub fn nav_item(index: usize) -> Reveal {
    Reveal::on_mount(
        Tween::from_pose(Pose::HIDDEN, 500.0, Ease::Power2Out).delay(1_100.0 + 100.0 * index as f64),
    )
}

pub fn mobile_menu() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN.y(-14.0), 280.0, Ease::Power2Out))
}

pub fn modal_backdrop() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN, 300.0, Ease::Power2Out))
}

pub fn modal_panel() -> Reveal {
    Reveal::on_mount(Tween::from_pose(
        Pose::HIDDEN.scale(0.9).y(50.0),
        350.0,
        BACK,
    ))
}

// Home.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub fn hero_column(side: Side) -> Reveal {
    let (x, delay) = match side {
        Side::Left => (-50.0, 200.0),
        Side::Right => (50.0, 400.0),
    };
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN.x(x), 800.0, Ease::Power2Out).delay(delay))
}

pub fn hero_name() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN, 1_400.0, Ease::Power3Out))
}

pub fn hero_glow() -> Reveal {
    Reveal::on_mount(
        Tween::between(Pose::REST, Pose::REST.glow(1.0), 3_000.0, Ease::SineInOut)
            .delay(1_400.0)
            .repeat(Repeat::Infinite { yoyo: true }),
    )
}

pub fn hero_subtitle() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN, 1_000.0, Ease::Power2Out).delay(1_200.0))
}

pub fn hero_image() -> Reveal {
    Reveal::on_mount(
        Tween::from_pose(Pose::HIDDEN.x(80.0).rotate(12.0), 1_500.0, ELASTIC).delay(800.0),
    )
}

pub fn floating_shape(index: usize) -> Reveal {
    Reveal::on_mount(
        Tween::between(
            Pose::REST,
            Pose::REST.y(15.0),
            3_000.0 + 1_000.0 * index as f64,
            Ease::SineInOut,
        )
        .repeat(Repeat::Infinite { yoyo: true }),
    )
}

pub fn hero_buttons() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN, 500.0, Ease::None).delay(2_200.0))
}

pub fn hero_button(index: usize, count: usize) -> Reveal {
    let container = hero_buttons().tween;
    let start = container.delay_ms + container.duration_ms;
    Reveal::on_mount(
        Tween::from_pose(Pose::HIDDEN.y(20.0), 800.0, BACK)
            .delay(start + Stagger::each(150.0).delay_for(index, count)),
    )
}

pub fn scroll_hint() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN.y(20.0), 600.0, Ease::Power2Out).delay(2_500.0))
}

pub fn scroll_hint_bounce(delay_ms: f64) -> Reveal {
    Reveal::on_mount(
        Tween::between(Pose::REST, Pose::REST.y(10.0), 750.0, Ease::SineInOut)
            .delay(delay_ms)
            .repeat(Repeat::Infinite { yoyo: true }),
    )
}

// Shared section headers (About, Work).

pub fn section_block() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(50.0), 1_000.0, Ease::Power3Out),
        replay_trigger(),
    )
}

pub fn section_heading() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(30.0), 800.0, BACK).delay(200.0),
        replay_trigger(),
    )
}

pub fn section_divider() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.scale_x(0.0), 1_000.0, Ease::Power3Out).delay(400.0),
        replay_trigger(),
    )
}

pub fn section_subtitle() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(20.0), 800.0, Ease::Power3Out).delay(600.0),
        replay_trigger(),
    )
}

// About.

pub fn code_line(index: usize) -> Reveal {
    Reveal::on_mount(
        Tween::between(Pose::HIDDEN.y(20.0), Pose::REST.opacity(0.5), 500.0, Ease::Power2Out)
            .delay(50.0 * index as f64),
    )
}

pub fn story_card(index: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(-50.0), 800.0, BACK).delay(200.0 * (index + 1) as f64),
        replay_trigger(),
    )
}

pub fn subsection_heading() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(30.0), 800.0, BACK),
        replay_trigger(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeLine {
    First,
    Second,
}

pub fn marquee_entrance(line: MarqueeLine) -> Reveal {
    let x = match line {
        MarqueeLine::First => 100.0,
        MarqueeLine::Second => -100.0,
    };
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(x), 1_000.0, Ease::Power3Out),
        replay_trigger(),
    )
}

pub fn hobby_box(is_mobile: bool) -> Reveal {
    let x = if is_mobile { 0.0 } else { -50.0 };
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(x), 1_000.0, Ease::Power3Out),
        replay_trigger(),
    )
}

pub fn hobby_chip(index: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.scale(0.8), 900.0, BACK).delay(300.0 * index as f64),
        in_view_once(),
    )
}

pub fn mobile_chip(index: usize, each_ms: f64) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(20.0), 500.0, Ease::Power2Out).delay(each_ms * index as f64),
        in_view_once(),
    )
}

pub fn principle_card(index: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(50.0), 800.0, BACK).delay(150.0 * index as f64),
        replay_trigger(),
    )
}

// Work.

pub fn project_card() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.scale(0.95).y(80.0), 1_000.0, Ease::Power3Out),
        ScrollTrigger::new(
            EdgeLine::top(0.85),
            TriggerEnd::Distance(300.0),
            REVERSE_ON_RETURN,
        ),
    )
}

pub fn work_outro() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(20.0), 600.0, Ease::Power2Out).delay(500.0),
        in_view_once(),
    )
}

// Certificates.

fn achievements_trigger(actions: ToggleActions) -> ScrollTrigger {
    ScrollTrigger::new(EdgeLine::top(0.85), LEAVES_TOP, actions)
}

pub fn achievements_heading() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(-50.0).scale(0.9), 1_000.0, Ease::Power3Out),
        achievements_trigger(REVERSE_ON_RETURN),
    )
}

pub fn achievements_subheading() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(30.0), 1_000.0, Ease::Power2Out).delay(300.0),
        achievements_trigger(REVERSE_ON_RETURN),
    )
}

pub fn certificate_card(index: usize, count: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(60.0).scale(0.95), 800.0, Ease::Power3Out)
            .delay(Stagger::each(100.0).delay_for(index, count)),
        achievements_trigger(REVERSIBLE),
    )
}

pub fn leetcode_card() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(-100.0), 1_000.0, Ease::Power3Out),
        achievements_trigger(REVERSIBLE),
    )
}

// Contact.

pub fn contact_section() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(50.0), 800.0, Ease::Power3Out),
        once_at(0.9),
    )
}

pub fn title_char(index: usize, count: usize) -> Reveal {
    let y = random_between(CONTACT_TITLE_SEED, index, -50.0, 50.0);
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(y), 800.0, BACK)
            .delay(Stagger::shuffled(50.0, CONTACT_TITLE_SEED).delay_for(index, count)),
        once_at(0.8),
    )
}

pub fn contact_subtitle() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(20.0), 600.0, Ease::Power2Out).delay(400.0),
        in_view_once(),
    )
}

pub fn contact_form() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(80.0).scale(0.95), 800.0, Ease::Power3Out),
        once_at(0.75),
    )
}

pub fn form_element(index: usize, count: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(30.0), 600.0, Ease::Power2Out)
            .delay(Stagger::each(150.0).delay_for(index, count)),
        once_at(0.75),
    )
}

pub fn contact_info() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(-50.0).rotation_y(15.0), 800.0, Ease::Power3Out),
        once_at(0.75),
    )
}

pub fn info_item(index: usize, count: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.x(-30.0), 600.0, Ease::Power2Out)
            .delay(Stagger::each(200.0).delay_for(index, count)),
        once_at(0.65),
    )
}

pub fn social_block() -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(50.0), 800.0, Ease::Power3Out),
        once_at(0.85),
    )
}

pub fn social_icon(index: usize, count: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.y(20.0).scale(0.8), 600.0, BACK)
            .delay(Stagger::each(100.0).delay_for(index, count)),
        once_at(0.8),
    )
}

pub fn background_blob(index: usize, count: usize) -> Reveal {
    Reveal::on_scroll(
        Tween::from_pose(Pose::HIDDEN.scale(0.8), 1_500.0, ELASTIC)
            .delay(Stagger::each(300.0).delay_for(index, count)),
        once_at(0.8),
    )
}

pub fn status_message() -> Reveal {
    Reveal::on_mount(Tween::from_pose(Pose::HIDDEN.y(20.0), 500.0, BACK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_holds_loops_at_rest_and_finishes_entrances() {
        for looping in [hero_glow(), floating_shape(0), floating_shape(2), scroll_hint_bounce(0.0)] {
            assert_eq!(looping.reduced_motion_pose(), Pose::REST);
            assert_eq!(looping.reduced_motion_pose(), looping.tween.from);
        }
        assert_ne!(hero_glow().reduced_motion_pose(), hero_glow().tween.to);

        let heading = section_heading();
        assert_eq!(heading.reduced_motion_pose(), heading.tween.to);
        assert_eq!(hero_name().reduced_motion_pose(), Pose::REST);
    }

    #[test]
    fn splash_children_follow_the_container_fade() {
        let timeline = splash_timeline();
        let starts: Vec<f64> = timeline.tweens().iter().map(|tween| tween.delay_ms).collect();

        assert_eq!(starts, vec![0.0, 500.0, 650.0, 800.0]);
        assert_eq!(timeline.duration_ms(), 1_600.0);
    }

    #[test]
    fn typed_triggers_match_their_string_forms() {
        let about = section_heading().trigger.expect("scroll driven");
        assert_eq!(
            Some(about),
            ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play reset play reset")
        );

        let card = project_card().trigger.expect("scroll driven");
        assert_eq!(
            Some(card),
            ScrollTrigger::parse("top 85%", Some("+=300"), "play none none reverse")
        );

        let certificate = certificate_card(0, 4).trigger.expect("scroll driven");
        assert_eq!(
            Some(certificate),
            ScrollTrigger::parse("top 85%", None, "play reverse play reverse")
        );

        let contact = contact_section().trigger.expect("scroll driven");
        assert_eq!(
            Some(contact),
            ScrollTrigger::parse("top 90%", None, "play none none none")
        );
    }

    #[test]
    fn staggered_cards_step_by_their_interval() {
        let principle: Vec<f64> = (0..3).map(|i| principle_card(i).tween.delay_ms).collect();
        assert_eq!(principle, vec![0.0, 150.0, 300.0]);

        let certificates: Vec<f64> = (0..4).map(|i| certificate_card(i, 4).tween.delay_ms).collect();
        assert_eq!(certificates, vec![0.0, 100.0, 200.0, 300.0]);

        assert_eq!(story_card(0).tween.delay_ms, 200.0);
        assert_eq!(story_card(1).tween.delay_ms, 400.0);
    }

    #[test]
    fn hero_buttons_wait_for_their_container() {
        assert_eq!(hero_button(0, 2).tween.delay_ms, 2_700.0);
        assert_eq!(hero_button(1, 2).tween.delay_ms, 2_850.0);
        assert!(hero_button(0, 2).trigger.is_none());
    }

    #[test]
    fn contact_title_chars_scatter_within_bounds() {
        let title = "Get In Touch";
        let count = title.chars().count();
        let mut delays = Vec::new();

        for index in 0..count {
            let reveal = title_char(index, count);
            assert!((-50.0..50.0).contains(&reveal.tween.from.y));
            assert_eq!(reveal.tween.from.opacity, 0.0);
            delays.push(reveal.tween.delay_ms);
        }

        delays.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        delays.dedup();
        assert_eq!(delays.len(), count);
        assert_eq!(delays.last().copied(), Some(50.0 * (count - 1) as f64));
    }

    #[test]
    fn infinite_loops_never_finish() {
        assert_eq!(hero_glow().tween.total_ms(), None);
        assert_eq!(floating_shape(1).tween.duration_ms, 4_000.0);
        assert_eq!(scroll_hint_bounce(200.0).tween.total_ms(), None);
    }

    #[test]
    fn every_reveal_ends_visible() {
        let finite = [
            hero_name(),
            hero_image(),
            section_divider(),
            project_card(),
            leetcode_card(),
            contact_info(),
            background_blob(1, 2),
            nav_item(3),
        ];

        for reveal in finite {
            let total = reveal.tween.total_ms().expect("finite reveal");
            assert_eq!(reveal.tween.sample(total), Pose::REST);
        }

        let line = code_line(2).tween;
        assert_eq!(line.sample(line.total_ms().unwrap_or_default()).opacity, 0.5);
    }
}

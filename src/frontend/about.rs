use std::rc::Rc;
use web_sys::{Element, HtmlElement, PointerEvent};
use yew::prelude::*;

use super::{
    dom::{apply_pose, prefers_reduced_motion, set_style, viewport_size, FrameLoop},
    render_runs,
    reveal::Reveal,
    use_is_mobile,
};
use crate::{
    choreography::{self, MarqueeLine},
    content::{
        ABOUT_SUBTITLE, CODE_BACKDROP_LINES, CODE_LINES, HOBBIES, HOBBIES_INTRO, JOURNEY,
        PHILOSOPHY, PRINCIPLES, SKILLS,
    },
    motion::{splitmix64, Playback, ToggleAction, TriggerState},
    widgets::{hobby_position, Bounds, DragState, Marquee, MarqueeClock, MarqueeDirection, Point},
};

const CODE_SEED: u64 = 0xC0DE_11E5;
const MOBILE_SKILL_STAGGER_MS: f64 = 50.0;
const MOBILE_HOBBY_STAGGER_MS: f64 = 100.0;
const THROW_TRANSITION: &str = "left 0.5s cubic-bezier(0.2, 0.8, 0.2, 1), top 0.5s cubic-bezier(0.2, 0.8, 0.2, 1)";

fn backdrop_line(index: usize) -> &'static str {
    let pick = splitmix64(CODE_SEED ^ index as u64) % CODE_LINES.len() as u64;
    CODE_LINES[pick as usize]
}

#[function_component(CodeBackdrop)]
fn code_backdrop() -> Html {
    html! {
        <div class="code-backdrop" aria-hidden="true">
            {for (0..CODE_BACKDROP_LINES).map(|index| html! {
                <Reveal key={index} reveal={choreography::code_line(index)} class="code-line">
                    {backdrop_line(index)}
                </Reveal>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillLineProps {
    line: MarqueeLine,
}

/// One auto-scrolling row of skills. The track holds the list twice and
/// slides by half its width, so the loop has no seam.
#[function_component(SkillLine)]
fn skill_line(props: &SkillLineProps) -> Html {
    let line = use_node_ref();
    let track = use_node_ref();
    let (direction, period_ms, skills): (_, _, Vec<&str>) = match props.line {
        MarqueeLine::First => (MarqueeDirection::Left, 20_000.0, SKILLS.to_vec()),
        MarqueeLine::Second => (
            MarqueeDirection::Right,
            25_000.0,
            SKILLS.iter().rev().copied().collect(),
        ),
    };

    {
        let line = line.clone();
        let track = track.clone();
        use_effect_with(props.line, move |kind| {
            let entrance = choreography::marquee_entrance(*kind);
            let frames = if prefers_reduced_motion() {
                if let Some(element) = line.cast::<Element>() {
                    apply_pose(&element, &entrance.reduced_motion_pose());
                }
                None
            } else {
                let mut playback = Playback::new(entrance.tween);
                let mut trigger = entrance.trigger.map(TriggerState::new);
                if trigger.is_none() {
                    playback.apply(ToggleAction::Play);
                }
                if let Some(element) = line.cast::<Element>() {
                    apply_pose(&element, &playback.pose());
                }
                let mut clock = MarqueeClock::default();
                let mut distance = 0.0;

                FrameLoop::start(move |dt| {
                    let (Some(wrapper), Some(element)) =
                        (line.cast::<Element>(), track.cast::<Element>())
                    else {
                        return true;
                    };

                    if let Some(trigger) = trigger.as_mut() {
                        let rect = wrapper.get_bounding_client_rect();
                        if let Some(action) = trigger.update(rect.top(), rect.height(), viewport_size().1) {
                            playback.apply(action);
                        }
                    }
                    playback.advance(dt);
                    apply_pose(&wrapper, &playback.pose());

                    if distance == 0.0 {
                        distance = f64::from(element.scroll_width()) / 2.0;
                    }
                    let now = clock.tick(&playback, dt);
                    let offset = Marquee::new(distance, period_ms, direction).offset_at(now);
                    set_style(&element, "transform", &format!("translate3d({offset:.2}px, 0, 0)"));
                    true
                })
            };
            move || drop(frames)
        });
    }

    html! {
        <div ref={line} class="skill-line">
            <div ref={track} class="skill-track">
                {for skills.iter().chain(skills.iter()).enumerate().map(|(index, skill)| html! {
                    <div key={index} class="skill-pill">
                        <span class="pulse-dot" aria-hidden="true"></span>
                        {*skill}
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HobbyChipProps {
    index: usize,
    name: &'static str,
}

#[function_component(HobbyChip)]
fn hobby_chip(props: &HobbyChipProps) -> Html {
    let node = use_node_ref();
    let dragging = use_state_eq(|| false);
    let drag = use_mut_ref(|| {
        let unbounded = Bounds {
            min: Point::new(0.0, 0.0),
            max: Point::new(f64::MAX, f64::MAX),
        };
        DragState::new(hobby_position(props.index), unbounded)
    });

    let place = Rc::new({
        let node = node.clone();
        move |position: Point| {
            if let Some(element) = node.cast::<Element>() {
                set_style(&element, "left", &format!("{:.2}px", position.x));
                set_style(&element, "top", &format!("{:.2}px", position.y));
            }
        }
    });

    let measure = {
        let node = node.clone();
        move || -> Option<Bounds> {
            let chip = node.cast::<HtmlElement>()?;
            let area = chip.parent_element()?;
            Some(Bounds::for_child(
                (f64::from(area.client_width()), f64::from(area.client_height())),
                (f64::from(chip.offset_width()), f64::from(chip.offset_height())),
            ))
        }
    };

    {
        let drag = drag.clone();
        let place = place.clone();
        let measure = measure.clone();
        use_effect_with((), move |_| {
            if let Some(bounds) = measure() {
                drag.borrow_mut().set_bounds(bounds);
            }
            place(drag.borrow().position());
            || ()
        });
    }

    let onpointerdown = {
        let drag = drag.clone();
        let node = node.clone();
        let dragging = dragging.clone();
        Callback::from(move |event: PointerEvent| {
            event.prevent_default();
            if let Some(element) = node.cast::<Element>() {
                let _ = element.set_pointer_capture(event.pointer_id());
                set_style(&element, "transition", "none");
            }
            let mut state = drag.borrow_mut();
            if let Some(bounds) = measure() {
                state.set_bounds(bounds);
            }
            state.press(
                Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
                event.time_stamp(),
            );
            dragging.set(true);
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let place = place.clone();
        Callback::from(move |event: PointerEvent| {
            let mut state = drag.borrow_mut();
            if !state.is_dragging() {
                return;
            }
            let position = state.move_to(
                Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
                event.time_stamp(),
            );
            place(position);
        })
    };

    let release = {
        let drag = drag.clone();
        let node = node.clone();
        let dragging = dragging.clone();
        Callback::from(move |_: PointerEvent| {
            let mut state = drag.borrow_mut();
            if !state.is_dragging() {
                return;
            }
            if let Some(element) = node.cast::<Element>() {
                set_style(&element, "transition", THROW_TRANSITION);
            }
            place(state.release());
            dragging.set(false);
        })
    };

    html! {
        <div
            ref={node}
            class={classes!("hobby-chip", (*dragging).then_some("is-dragging"))}
            onpointerdown={onpointerdown}
            onpointermove={onpointermove}
            onpointerup={release.clone()}
            onpointercancel={release}
        >
            <Reveal reveal={choreography::hobby_chip(props.index)} class="hobby-chip-face">
                {props.name}
            </Reveal>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let mobile = use_is_mobile();

    let skills = if mobile {
        html! {
            <div class="skill-grid">
                {for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                    <Reveal
                        key={*skill}
                        reveal={choreography::mobile_chip(index, MOBILE_SKILL_STAGGER_MS)}
                        class="skill-pill"
                    >
                        <span class="pulse-dot" aria-hidden="true"></span>
                        {*skill}
                    </Reveal>
                })}
            </div>
        }
    } else {
        html! {
            <>
                <SkillLine line={MarqueeLine::First} />
                <SkillLine line={MarqueeLine::Second} />
            </>
        }
    };

    let hobbies = if mobile {
        html! {
            <div class="hobby-grid">
                {for HOBBIES.iter().enumerate().map(|(index, hobby)| html! {
                    <Reveal
                        key={*hobby}
                        reveal={choreography::mobile_chip(index, MOBILE_HOBBY_STAGGER_MS)}
                        class="hobby-pill"
                    >
                        {*hobby}
                    </Reveal>
                })}
            </div>
        }
    } else {
        html! {
            <div class="hobby-area">
                {for HOBBIES.iter().enumerate().map(|(index, hobby)| html! {
                    <HobbyChip key={*hobby} index={index} name={*hobby} />
                })}
            </div>
        }
    };

    html! {
        <section id="about" class="about">
            <div class="grid-pattern" aria-hidden="true"></div>
            <CodeBackdrop />

            <Reveal reveal={choreography::section_block()} class="section-inner">
                <header class="section-header">
                    <Reveal reveal={choreography::section_heading()} tag="h2" class="section-title">
                        {"About "}<span class="accent-indigo">{"Me"}</span>
                    </Reveal>
                    <Reveal reveal={choreography::section_divider()} class="section-divider" />
                    <Reveal reveal={choreography::section_subtitle()} tag="p" class="section-subtitle">
                        {ABOUT_SUBTITLE}
                    </Reveal>
                </header>

                <div class="about-columns">
                    <div class="about-column">
                        <Reveal reveal={choreography::story_card(0)} class="card">
                            <h3>{"My Journey"}</h3>
                            {for JOURNEY.iter().map(|paragraph| html! { <p>{render_runs(paragraph)}</p> })}
                        </Reveal>
                        <Reveal reveal={choreography::story_card(1)} class="card">
                            <h3>{"My Philosophy"}</h3>
                            <p>{render_runs(PHILOSOPHY)}</p>
                        </Reveal>
                    </div>

                    <div class="about-column">
                        <div class="card skills-card">
                            <Reveal reveal={choreography::subsection_heading()} tag="h3">
                                {"My "}<span class="accent-indigo">{"Skills"}</span>
                            </Reveal>
                            {skills}
                        </div>

                        <Reveal reveal={choreography::hobby_box(mobile)} class="card hobby-card">
                            <Reveal reveal={choreography::subsection_heading()} tag="h3">
                                {"Behind the "}<span class="accent-indigo">{"Code"}</span>
                            </Reveal>
                            <p>{HOBBIES_INTRO}</p>
                            {hobbies}
                        </Reveal>
                    </div>
                </div>

                <div class="principles">
                    {for PRINCIPLES.iter().enumerate().map(|(index, principle)| html! {
                        <Reveal key={principle.title} reveal={choreography::principle_card(index)} class="card principle-card">
                            <div class="principle-icon" aria-hidden="true">{principle.icon}</div>
                            <h3>{principle.title}</h3>
                            <p>{principle.description}</p>
                        </Reveal>
                    })}
                </div>
            </Reveal>
        </section>
    }
}

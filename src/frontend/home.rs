use std::cell::Cell;
use web_sys::{Element, PointerEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    dom::{open_in_new_tab, prefers_reduced_motion, set_style, EventListener, FrameLoop},
    render_runs,
    reveal::{use_reveal, Reveal},
    smooth::use_scroll,
};
use crate::{
    choreography::{self, Side},
    content::{
        CERTIFICATIONS_ANCHOR, GREETING, HERO_PHRASES, HERO_SUBTITLE, ORBIT_WORDS, OWNER_NAME,
        PROFILE_IMAGE, RESUME_PATH, SCROLL_HINT,
    },
    typewriter::CyclingTypewriter,
    widgets::{pupil_offset, Point},
};

const CODE_SYMBOLS: [(&str, &str); 5] = [
    ("{}", "symbol symbol-braces"),
    ("</>", "symbol symbol-tag"),
    ("[]", "symbol symbol-brackets"),
    ("()", "symbol symbol-parens"),
    (";:", "symbol symbol-punct"),
];
const ORBIT_PATH: &str = "M 250,250 m -200,0 a 200,200 0 1,1 400,0 a 200,200 0 1,1 -400,0";

fn element_centre(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}

#[function_component(MascotEyes)]
fn mascot_eyes() -> Html {
    let left = use_node_ref();
    let right = use_node_ref();

    {
        let pupils = [left.clone(), right.clone()];
        use_effect_with((), move |_| {
            let guard = EventListener::on_window("pointermove", move |event| {
                let Some(pointer) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let pointer = Point::new(f64::from(pointer.client_x()), f64::from(pointer.client_y()));

                for pupil in &pupils {
                    let Some(pupil) = pupil.cast::<Element>() else {
                        continue;
                    };
                    let Some(eye) = pupil.parent_element() else {
                        continue;
                    };
                    let offset = pupil_offset(element_centre(&eye), pointer);
                    set_style(
                        &pupil,
                        "transform",
                        &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
                    );
                }
            });
            move || drop(guard)
        });
    }

    html! {
        <div class="mascot" aria-hidden="true">
            <div class="mascot-eyes">
                <div class="mascot-eye"><div ref={left} class="mascot-pupil"></div></div>
                <div class="mascot-eye"><div ref={right} class="mascot-pupil"></div></div>
            </div>
        </div>
    }
}

#[function_component(HeroTypewriter)]
fn hero_typewriter() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with((), move |_| {
            let typewriter = CyclingTypewriter::new(HERO_PHRASES);
            let frames = if prefers_reduced_motion() {
                if let Some(element) = node.cast::<Element>() {
                    element.set_text_content(HERO_PHRASES.first().copied());
                }
                None
            } else {
                let elapsed = Cell::new(0.0);
                FrameLoop::start(move |dt| {
                    let now = elapsed.get() + dt;
                    elapsed.set(now);

                    if let Some(element) = node.cast::<Element>() {
                        let frame = typewriter.frame(now);
                        element.set_text_content(Some(frame.text));
                        set_style(&element, "opacity", &format!("{:.3}", frame.opacity));
                    }
                    true
                })
            };
            move || drop(frames)
        });
    }

    html! { <p ref={node} class="hero-typewriter" aria-live="off"></p> }
}

#[function_component(HeroName)]
fn hero_name() -> Html {
    let glow = use_node_ref();
    use_reveal(glow.clone(), choreography::hero_glow());

    html! {
        <Reveal reveal={choreography::hero_name()} tag="h1" class="hero-name">
            {GREETING}{" "}
            <span ref={glow} class="accent-indigo">{OWNER_NAME}</span>
        </Reveal>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_scroll();

    let on_resume = Callback::from(|_: MouseEvent| open_in_new_tab(RESUME_PATH));
    let on_certifications = Callback::from(move |_: MouseEvent| {
        scroll.scroll_to_id(CERTIFICATIONS_ANCHOR);
    });

    let symbols = CODE_SYMBOLS.iter().map(|(symbol, class)| {
        html! { <div class={*class} aria-hidden="true">{*symbol}</div> }
    });
    let shapes = ["shape shape-diamond", "shape shape-square"]
        .iter()
        .enumerate()
        .map(|(index, class)| {
            html! { <Reveal reveal={choreography::floating_shape(index)} class={*class} /> }
        });
    let orbit = ORBIT_WORDS.iter().enumerate().map(|(index, (word, colour))| {
        html! {
            <text font-size="18" fill={*colour} font-weight="bold">
                <textPath href="#circlePath" startOffset={format!("{}%", 5 + index * 20)}>
                    {*word}
                </textPath>
            </text>
        }
    });

    html! {
        <section id="home" class="home">
            <div class="home-backdrop">
                <div class="grid-pattern"></div>
                {for symbols}
                {for shapes}
            </div>

            <div class="home-layout">
                <Reveal reveal={choreography::hero_column(Side::Left)} class="home-copy">
                    <HeroName />
                    <Reveal reveal={choreography::hero_subtitle()} tag="p" class="hero-subtitle">
                        {render_runs(HERO_SUBTITLE)}
                    </Reveal>
                    <Reveal reveal={choreography::hero_buttons()} class="hero-buttons">
                        <Reveal reveal={choreography::hero_button(0, 2)} class="hero-button-slot">
                            <button class="button button-primary" type="button" onclick={on_resume}>
                                {"View Resume"}
                            </button>
                        </Reveal>
                        <Reveal reveal={choreography::hero_button(1, 2)} class="hero-button-slot with-mascot">
                            <MascotEyes />
                            <button class="button button-outline" type="button" onclick={on_certifications}>
                                {"Certifications"}
                            </button>
                        </Reveal>
                    </Reveal>
                </Reveal>

                <Reveal reveal={choreography::hero_column(Side::Right)} class="home-portrait">
                    <div class="portrait-frame">
                        <svg class="orbit" viewBox="0 0 500 500" aria-hidden="true">
                            <defs>
                                <path id="circlePath" d={ORBIT_PATH} />
                            </defs>
                            <circle
                                cx="250"
                                cy="250"
                                r="200"
                                fill="none"
                                stroke="rgba(99,102,241,0.3)"
                                stroke-width="2"
                                stroke-dasharray="6,6"
                            />
                            {for orbit}
                        </svg>
                        <Reveal
                            reveal={choreography::hero_image()}
                            class="portrait"
                            style={format!("background-image: url('{PROFILE_IMAGE}');")}
                        />
                    </div>
                    <HeroTypewriter />
                </Reveal>
            </div>

            <Reveal reveal={choreography::scroll_hint()} class="scroll-hint">
                <Reveal reveal={choreography::scroll_hint_bounce(0.0)} class="scroll-hint-label">
                    {SCROLL_HINT}
                </Reveal>
                <Reveal reveal={choreography::scroll_hint_bounce(200.0)} class="scroll-hint-arrow">
                    <span aria-hidden="true">{"↓"}</span>
                </Reveal>
            </Reveal>
        </section>
    }
}

use std::cell::Cell;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::dom::{apply_pose, log_event, prefers_reduced_motion, set_style, FrameLoop, LogLevel};
use crate::{
    choreography::{splash_timeline, SPLASH_CHILDREN},
    content::{LOADER_COLOURS, LOGO_PATH, SPLASH_CAPTION, SPLASH_TITLE},
    gate::{GatePhase, LoadingGate},
    typewriter::SplashTypewriter,
};

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_done: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let container = use_node_ref();
    let caption = use_node_ref();
    let children = use_memo((), |_| {
        (0..SPLASH_CHILDREN)
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let container = container.clone();
        let children = children.clone();
        let caption = caption.clone();
        let on_done = props.on_done.clone();

        use_effect_with((), move |_| {
            let gate = LoadingGate::default();
            let typewriter = SplashTypewriter::new(SPLASH_CAPTION);
            let tweens = splash_timeline().into_tweens();
            let settled = if prefers_reduced_motion() {
                tweens.iter().filter_map(|tween| tween.total_ms()).fold(0.0, f64::max)
            } else {
                0.0
            };
            let elapsed = Cell::new(0.0);

            log_event(
                LogLevel::Debug,
                "splash_started",
                serde_json::json!({ "hold_ms": gate.hold_ms, "exit_ms": gate.exit_ms }),
            );

            let frames = FrameLoop::start(move |dt| {
                let now = elapsed.get() + dt;
                elapsed.set(now);

                let Some(root) = container.cast::<HtmlElement>() else {
                    return true;
                };

                let entrance = now.max(settled);
                let mut targets = std::iter::once(&container).chain(children.iter());
                for tween in &tweens {
                    if let Some(element) = targets.next().and_then(NodeRef::cast::<Element>) {
                        apply_pose(&element, &tween.sample(entrance));
                    }
                }

                if let Some(caption) = caption.get() {
                    caption.set_text_content(Some(typewriter.text_at(now)));
                }

                match gate.phase_at(now) {
                    GatePhase::Splash => true,
                    GatePhase::Exiting { opacity } => {
                        set_style(&root, "opacity", &format!("{opacity:.3}"));
                        true
                    }
                    GatePhase::Done => {
                        log_event(
                            LogLevel::Info,
                            "splash_finished",
                            serde_json::json!({ "elapsed_ms": now.round() }),
                        );
                        on_done.emit(());
                        false
                    }
                }
            });

            move || drop(frames)
        });
    }

    let squares = LOADER_COLOURS.iter().map(|colour| {
        html! { <span class="loader-square" style={format!("background: {colour};")}></span> }
    });

    html! {
        <div ref={container} class="splash" role="status" aria-live="polite">
            <div class="splash-content">
                <div ref={children[0].clone()} class="splash-logo">
                    <img src={LOGO_PATH} alt="Logo" />
                </div>
                <h1 ref={children[1].clone()} class="splash-title">{SPLASH_TITLE}</h1>
                <div ref={children[2].clone()} class="splash-loader">
                    <div class="loader-squares" aria-hidden="true">{for squares}</div>
                    <div ref={caption} class="splash-caption"></div>
                </div>
            </div>
        </div>
    }
}

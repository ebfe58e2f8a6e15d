use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{dom::EventListener, reveal::Reveal};
use crate::choreography;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub label: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub closing: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Full-screen overlay. Closes on a backdrop click, the close button or
/// Escape; clicks inside the panel stay inside.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let guard = EventListener::on_window("keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if escape {
                    on_close.emit(());
                }
            });
            move || drop(guard)
        });
    }

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_panel = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_button = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Reveal
            reveal={choreography::modal_backdrop()}
            class={classes!("modal-backdrop", props.closing.then_some("is-closing"))}
        >
            <div
                class="modal-layer"
                role="dialog"
                aria-modal="true"
                aria-label={props.label.clone()}
                data-scroll-native="true"
                onclick={on_backdrop}
            >
                <Reveal
                    reveal={choreography::modal_panel()}
                    class={classes!("modal-panel", props.class.clone())}
                >
                    <div class="modal-body" onclick={on_panel}>
                        <button
                            class="modal-close"
                            type="button"
                            aria-label="Close"
                            onclick={on_button}
                        >
                            <span aria-hidden="true">{"✕"}</span>
                        </button>
                        {props.children.clone()}
                    </div>
                </Reveal>
            </div>
        </Reveal>
    }
}

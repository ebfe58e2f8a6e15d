use std::{cell::RefCell, rc::Rc};
use web_sys::Element;
use yew::prelude::*;

use super::dom::{apply_pose, prefers_reduced_motion, viewport_size, EventListener, FrameSlot};
use crate::{
    choreography,
    motion::{Playback, ToggleAction, TriggerState},
};

struct RevealDriver {
    element: Element,
    playback: RefCell<Playback>,
    trigger: RefCell<Option<TriggerState>>,
    frames: FrameSlot,
}

impl RevealDriver {
    fn new(element: Element, reveal: choreography::Reveal) -> Rc<Self> {
        let mut playback = Playback::new(reveal.tween);
        if reveal.trigger.is_none() {
            playback.apply(ToggleAction::Play);
        }

        Rc::new(Self {
            element,
            playback: RefCell::new(playback),
            trigger: RefCell::new(reveal.trigger.map(TriggerState::new)),
            frames: FrameSlot::default(),
        })
    }

    fn paint(&self) {
        apply_pose(&self.element, &self.playback.borrow().pose());
    }

    fn check_trigger(self: &Rc<Self>) {
        let action = {
            let mut trigger = self.trigger.borrow_mut();
            let Some(trigger) = trigger.as_mut() else {
                return;
            };
            let rect = self.element.get_bounding_client_rect();
            trigger.update(rect.top(), rect.height(), viewport_size().1)
        };

        if let Some(action) = action {
            self.playback.borrow_mut().apply(action);
            self.paint();
            self.run();
        }
    }

    fn run(self: &Rc<Self>) {
        if !self.playback.borrow().is_moving() {
            return;
        }

        let driver = Rc::downgrade(self);
        self.frames.ensure(move |dt| {
            let Some(driver) = driver.upgrade() else {
                return false;
            };
            let mut playback = driver.playback.borrow_mut();
            playback.advance(dt);
            apply_pose(&driver.element, &playback.pose());
            playback.is_moving()
        });
    }
}

#[hook]
pub fn use_reveal(node: NodeRef, reveal: choreography::Reveal) {
    use_optional_reveal(node, Some(reveal));
}

#[hook]
pub fn use_optional_reveal(node: NodeRef, reveal: Option<choreography::Reveal>) {
    use_effect_with(reveal, move |reveal| {
        let mut guards: Vec<EventListener> = Vec::new();
        let mut driver: Option<Rc<RevealDriver>> = None;

        if let (Some(element), Some(reveal)) = (node.cast::<Element>(), reveal) {
            if prefers_reduced_motion() {
                apply_pose(&element, &reveal.reduced_motion_pose());
            } else {
                let revealing = RevealDriver::new(element, *reveal);
                revealing.paint();

                if revealing.trigger.borrow().is_some() {
                    for event in ["scroll", "resize"] {
                        let weak = Rc::downgrade(&revealing);
                        if let Some(guard) = EventListener::on_window(event, move |_| {
                            if let Some(driver) = weak.upgrade() {
                                driver.check_trigger();
                            }
                        }) {
                            guards.push(guard);
                        }
                    }
                    revealing.check_trigger();
                } else {
                    revealing.run();
                }

                driver = Some(revealing);
            }
        }

        move || {
            drop(guards);
            if let Some(driver) = driver {
                driver.frames.stop();
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub reveal: choreography::Reveal,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal_view(props: &RevealProps) -> Html {
    let node = use_node_ref();
    use_reveal(node.clone(), props.reveal);

    html! {
        <@{props.tag.to_string()}
            ref={node}
            id={props.id.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
        >
            {props.children.clone()}
        </@>
    }
}

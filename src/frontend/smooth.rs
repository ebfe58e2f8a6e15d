use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, EventTarget, WheelEvent};
use yew::prelude::*;

use super::dom::{
    document_top, element_by_id, log_event, prefers_reduced_motion, scroll_into_view,
    scroll_limit, scroll_window_to, scroll_y, viewport_size, EventListener, FrameSlot, LogLevel,
};
use crate::scroll::SmoothScroll;

const LINE_HEIGHT_PX: f64 = 16.0;
/// Wheel events starting inside an element carrying this attribute scroll
/// natively.
const NATIVE_SCROLL_ATTR: &str = "[data-scroll-native]";

struct Driver {
    scroll: RefCell<SmoothScroll>,
    frames: FrameSlot,
}

impl Driver {
    fn refresh_limit(&self) {
        self.scroll.borrow_mut().set_limit(scroll_limit());
    }

    fn run(self: &Rc<Self>) {
        let driver = Rc::downgrade(self);
        self.frames.ensure(move |dt| {
            let Some(driver) = driver.upgrade() else {
                return false;
            };
            let mut scroll = driver.scroll.borrow_mut();
            scroll_window_to(scroll.frame(dt));
            !scroll.is_settled()
        });
    }

    fn on_wheel(self: &Rc<Self>, event: &Event) {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        if wheel.ctrl_key() || starts_in_native_region(event) {
            return;
        }

        let delta = match wheel.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * LINE_HEIGHT_PX,
            WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * viewport_size().1,
            _ => wheel.delta_y(),
        };
        if delta == 0.0 {
            return;
        }

        event.prevent_default();
        {
            let mut scroll = self.scroll.borrow_mut();
            scroll.set_limit(scroll_limit());
            scroll.on_wheel(delta);
        }
        self.run();
    }

    fn on_native_scroll(&self) {
        let mut scroll = self.scroll.borrow_mut();
        if scroll.is_settled() {
            scroll.sync(scroll_y());
        }
    }
}

fn starts_in_native_region(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(NATIVE_SCROLL_ATTR).ok().flatten())
        .is_some()
}

/// Handle to the page's smooth scroller, shared through context. Under
/// reduced motion there is no driver and scrolling stays native.
#[derive(Clone, Default)]
pub struct ScrollDriver {
    driver: Option<Rc<Driver>>,
}

impl PartialEq for ScrollDriver {
    fn eq(&self, other: &Self) -> bool {
        match (&self.driver, &other.driver) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl ScrollDriver {
    fn new() -> Self {
        if prefers_reduced_motion() {
            return Self::default();
        }

        Self {
            driver: Some(Rc::new(Driver {
                scroll: RefCell::new(SmoothScroll::default()),
                frames: FrameSlot::default(),
            })),
        }
    }

    fn attach(&self) -> Vec<EventListener> {
        let Some(driver) = self.driver.as_ref() else {
            return Vec::new();
        };
        let Some(target) = window().map(EventTarget::from) else {
            return Vec::new();
        };

        driver.refresh_limit();
        driver.scroll.borrow_mut().sync(scroll_y());

        let mut guards = Vec::new();
        let weak = Rc::downgrade(driver);
        guards.extend(EventListener::with_passive(&target, "wheel", false, move |event| {
            if let Some(driver) = weak.upgrade() {
                driver.on_wheel(&event);
            }
        }));

        let weak = Rc::downgrade(driver);
        guards.extend(EventListener::new(&target, "scroll", move |_| {
            if let Some(driver) = weak.upgrade() {
                driver.on_native_scroll();
            }
        }));

        let weak = Rc::downgrade(driver);
        guards.extend(EventListener::new(&target, "resize", move |_| {
            if let Some(driver) = weak.upgrade() {
                driver.refresh_limit();
            }
        }));

        log_event(
            LogLevel::Debug,
            "smooth_scroll_attached",
            serde_json::json!({ "limit": scroll_limit() }),
        );
        guards
    }

    fn detach(&self) {
        if let Some(driver) = self.driver.as_ref() {
            driver.frames.stop();
        }
    }

    pub fn scroll_to_id(&self, id: &str) {
        let Some(element) = element_by_id(id) else {
            log_event(
                LogLevel::Warn,
                "scroll_target_missing",
                serde_json::json!({ "id": id }),
            );
            return;
        };

        match self.driver.as_ref() {
            Some(driver) => {
                {
                    let mut scroll = driver.scroll.borrow_mut();
                    scroll.set_limit(scroll_limit());
                    scroll.scroll_to(document_top(&element));
                }
                driver.run();
            }
            None => scroll_into_view(&element, false),
        }
    }
}

#[hook]
pub fn use_scroll_driver() -> ScrollDriver {
    let driver = use_memo((), |_| ScrollDriver::new());

    {
        let driver = (*driver).clone();
        use_effect_with((), move |_| {
            let guards = driver.attach();
            move || {
                drop(guards);
                driver.detach();
            }
        });
    }

    (*driver).clone()
}

#[hook]
pub fn use_scroll() -> ScrollDriver {
    use_context::<ScrollDriver>().unwrap_or_default()
}

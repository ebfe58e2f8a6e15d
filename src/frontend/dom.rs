use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions,
};

use crate::motion::Pose;

/// Longest step a single frame may take; a backgrounded tab resumes without
/// jumping animations to their end.
const MAX_FRAME_MS: f64 = 64.0;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop. The callback gets the milliseconds since the
/// previous frame (0 on the first) and returns whether to keep running.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let win = window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let last_timestamp = Cell::new(None::<f64>);

        let frame = {
            let handle = handle.clone();
            let slot = Rc::downgrade(&callback);
            let win = win.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                let dt = last_timestamp
                    .get()
                    .map_or(0.0, |previous| (timestamp - previous).clamp(0.0, MAX_FRAME_MS));
                last_timestamp.set(Some(timestamp));
                handle.set(None);

                if !on_frame(dt) {
                    return;
                }

                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let next = slot.borrow().as_ref().and_then(|callback| {
                    win.request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok()
                });
                handle.set(next);
            })
        };

        let first = win
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .ok()?;
        handle.set(Some(first));
        *callback.borrow_mut() = Some(frame);

        Some(Self { handle, callback })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(win), Some(handle)) = (window(), self.handle.take()) {
            let _ = win.cancel_animation_frame(handle);
        }
        self.callback.borrow_mut().take();
    }
}

#[derive(Default)]
pub struct FrameSlot {
    running: RefCell<Option<FrameLoop>>,
}

impl FrameSlot {
    pub fn ensure(&self, on_frame: impl FnMut(f64) -> bool + 'static) {
        let mut running = self.running.borrow_mut();
        if running.as_ref().is_some_and(FrameLoop::is_running) {
            return;
        }
        *running = FrameLoop::start(on_frame);
    }

    pub fn stop(&self) {
        self.running.borrow_mut().take();
    }
}

pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        Self::with_passive(target, event, true, callback)
    }

    pub fn with_passive(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window(event: &'static str, callback: impl FnMut(Event) + 'static) -> Option<Self> {
        let target: EventTarget = window()?.into();
        Self::new(&target, event, callback)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(millis: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(millis).unwrap_or(i32::MAX),
            )
            .ok()?;

        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_limit() -> f64 {
    let document_height = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    (document_height - viewport_size().1).max(0.0)
}

pub fn scroll_window_to(y: f64) {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, y);
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn scroll_into_view(element: &Element, smooth: bool) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_element_by(element: &Element, dx: f64, smooth: bool) {
    let options = ScrollToOptions::new();
    options.set_left(dx);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    element.scroll_by_with_scroll_to_options(&options);
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn open_in_new_tab(href: &str) {
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(href, "_blank");
    }
}

pub fn apply_pose(element: &Element, pose: &Pose) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };

    let style = element.style();
    let _ = style.set_property("opacity", &pose.css_opacity());
    let _ = style.set_property("transform", &pose.transform());
    match pose.text_shadow() {
        Some(shadow) => {
            let _ = style.set_property("text-shadow", &shadow);
        }
        None => {
            let _ = style.remove_property("text-shadow");
        }
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if level == LogLevel::Debug && !cfg!(debug_assertions) {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::from((js_sys::Date::now() / 1_000.0).floor() as u64),
    );
    payload.insert("level".to_string(), serde_json::Value::from(level.as_str()));
    payload.insert("event".to_string(), serde_json::Value::from(event));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    let line = JsValue::from_str(&serde_json::Value::Object(payload).to_string());
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

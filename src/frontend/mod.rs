mod about;
mod certificate;
mod contact;
mod dom;
mod home;
mod loading;
mod modal;
mod navbar;
mod reveal;
mod smooth;
mod work;

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

use self::{
    about::About,
    certificate::Certificate,
    contact::ContactMe,
    dom::{log_event, prefers_reduced_motion, viewport_size, EventListener, LogLevel},
    home::Home,
    loading::LoadingScreen,
    navbar::Navbar,
    smooth::{use_scroll_driver, ScrollDriver},
    work::Work,
};
use crate::{
    content::TextRun,
    scroll::is_mobile,
    theme::{Theme, THEME_KEY},
};

#[hook]
fn use_is_mobile() -> bool {
    let mobile = use_state_eq(|| is_mobile(viewport_size().0));

    {
        let mobile = mobile.setter();
        use_effect_with((), move |_| {
            let guard = EventListener::on_window("resize", move |_| {
                mobile.set(is_mobile(viewport_size().0));
            });
            move || drop(guard)
        });
    }

    *mobile
}

fn render_runs(runs: &[TextRun]) -> Html {
    runs.iter()
        .map(|run| match run.accent {
            Some(accent) => html! { <span class={accent.class()}>{run.text}</span> },
            None => html! { {run.text} },
        })
        .collect()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn resolve_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::resolve(stored.as_deref())
}

fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(theme.as_str());
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // Runs after this returns; JS owns the closure from here.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);
    let loading = use_state(|| true);
    let scroll = use_scroll_driver();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                LogLevel::Info,
                "app_mounted",
                serde_json::json!({ "theme": current.as_str() }),
            );
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            log_event(
                LogLevel::Debug,
                "theme_changed",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    if *loading {
        return html! { <LoadingScreen on_done={on_loaded} /> };
    }

    html! {
        <ContextProvider<ScrollDriver> context={scroll}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <Navbar theme={*theme} on_toggle={on_toggle} />
                <main id="content">
                    <Home />
                    <About />
                    <Work />
                    <Certificate />
                    <ContactMe />
                </main>
            </div>
        </ContextProvider<ScrollDriver>>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            log_event(
                LogLevel::Warn,
                "mount_point_missing",
                serde_json::json!({ "id": "app" }),
            );
            yew::Renderer::<App>::new().render()
        }
    };
}

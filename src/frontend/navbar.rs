use std::{cell::Cell, rc::Rc};
use yew::prelude::*;

use super::{
    dom::{document_top, element_by_id, scroll_y, EventListener},
    reveal::{use_optional_reveal, Reveal},
    smooth::use_scroll,
};
use crate::{
    choreography,
    content::{NavLink, GITHUB_PROFILE, LOGO_PATH, NAV_LINKS},
    scroll::{active_section, is_scrolled, SectionBounds},
    theme::Theme,
};

fn section_bounds() -> Vec<SectionBounds<'static>> {
    NAV_LINKS
        .iter()
        .filter_map(|link| {
            let section = element_by_id(link.id)?;
            Some(SectionBounds {
                id: link.id,
                offset_top: document_top(&section),
                height: section.get_bounding_client_rect().height(),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct NavAnchorProps {
    link: NavLink,
    active: bool,
    #[prop_or_default]
    reveal: Option<choreography::Reveal>,
    class: &'static str,
    on_select: Callback<&'static str>,
}

#[function_component(NavAnchor)]
fn nav_anchor(props: &NavAnchorProps) -> Html {
    let node = use_node_ref();
    let scroll = use_scroll();
    use_optional_reveal(node.clone(), props.reveal);

    let onclick = {
        let id = props.link.id;
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll.scroll_to_id(id);
            on_select.emit(id);
        })
    };

    html! {
        <a
            ref={node}
            href={format!("#{}", props.link.id)}
            class={classes!(props.class, props.active.then_some("is-active"))}
            aria-current={props.active.then_some("true")}
            onclick={onclick}
        >
            {props.link.label}
            if props.active {
                <span class="active-link-indicator" aria-hidden="true"></span>
            }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let active = use_state_eq(|| NAV_LINKS[0].id);
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    {
        let active = active.setter();
        let scrolled = scrolled.setter();
        use_effect_with((), move |_| {
            let last = Rc::new(Cell::new(NAV_LINKS[0].id));
            let update = move || {
                let y = scroll_y();
                let next = active_section(&section_bounds(), y, last.get());
                last.set(next);
                active.set(next);
                scrolled.set(is_scrolled(y));
            };

            update();
            let guard = EventListener::on_window("scroll", move |_| update());
            move || drop(guard)
        });
    }

    let on_select = {
        let active = active.clone();
        Callback::from(move |id: &'static str| active.set(id))
    };
    let on_select_mobile = {
        let active = active.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            active.set(id);
            menu_open.set(false);
        })
    };
    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let theme = props.theme;
    let trailing = NAV_LINKS.len() + 1;

    html! {
        <>
            <div class="navbar-shell">
                <header class={classes!("navbar", (*scrolled).then_some("is-scrolled"))}>
                    <Reveal reveal={choreography::nav_item(0)} class="nav-logo">
                        <img src={LOGO_PATH} alt="Logo" />
                    </Reveal>

                    <nav class="nav-links" aria-label="Sections">
                        {for NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                            <NavAnchor
                                key={link.id}
                                link={*link}
                                active={*active == link.id}
                                reveal={Some(choreography::nav_item(index + 1))}
                                class="nav-link"
                                on_select={on_select.clone()}
                            />
                        })}
                    </nav>

                    <Reveal reveal={choreography::nav_item(trailing)} class="nav-actions">
                        <button
                            class="theme-toggle"
                            type="button"
                            title="Toggle Theme"
                            aria-label={theme.toggle_label()}
                            aria-pressed={theme.pressed().to_string()}
                            onclick={props.on_toggle.clone()}
                        >
                            <span aria-hidden="true">{theme.icon()}</span>
                        </button>
                        <a
                            class="nav-icon"
                            href={GITHUB_PROFILE}
                            target="_blank"
                            rel="noopener noreferrer"
                            title="GitHub"
                        >
                            {"GitHub"}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                        <button
                            class="menu-toggle"
                            type="button"
                            aria-label="Toggle menu"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={on_menu}
                        >
                            <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                        </button>
                    </Reveal>
                </header>
            </div>

            if *menu_open {
                <div class="mobile-menu-shell">
                    <Reveal reveal={choreography::mobile_menu()} class="mobile-menu">
                        <nav aria-label="Sections">
                            {for NAV_LINKS.iter().map(|link| html! {
                                <NavAnchor
                                    key={link.id}
                                    link={*link}
                                    active={*active == link.id}
                                    class="mobile-link"
                                    on_select={on_select_mobile.clone()}
                                />
                            })}
                        </nav>
                    </Reveal>
                </div>
            }

            <div class="navbar-spacer"></div>
        </>
    }
}

use std::rc::Rc;
use web_sys::{Element, EventTarget};
use yew::prelude::*;

use super::{
    dom::{prefers_reduced_motion, scroll_element_by, EventListener, Timeout},
    modal::Modal,
    reveal::Reveal,
};
use crate::{
    choreography,
    content::{CodingProfile, ACHIEVEMENTS_SUBTITLE, CERTIFICATES, CERTIFICATIONS_ANCHOR, LEETCODE},
    scroll::{CarouselArrows, CarouselDirection},
};

const MODAL_CLEAR_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    Certificate(usize),
    LeetCode,
}

fn read_arrows(element: &Element) -> CarouselArrows {
    CarouselArrows::from_metrics(
        f64::from(element.scroll_left()),
        f64::from(element.scroll_width()),
        f64::from(element.client_width()),
    )
}

#[derive(Properties, PartialEq)]
struct ProfileProps {
    profile: CodingProfile,
}

#[function_component(ProfileDetails)]
fn profile_details(props: &ProfileProps) -> Html {
    let profile = props.profile;
    html! {
        <>
            <div class="profile-head">
                <img src={profile.picture} alt={format!("{} avatar", profile.username)} loading="lazy" />
                <div>
                    <h4>{profile.username}</h4>
                    <p class="muted">{"LeetCode Profile"}</p>
                </div>
            </div>
            <dl class="profile-stats">
                {for profile.stats().into_iter().map(|(label, value)| html! {
                    <div key={label} class="profile-stat">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                })}
            </dl>
            <div class="profile-badges">
                <h5>{"Badges Earned"}</h5>
                {for profile.badges.iter().map(|badge| html! { <span class="tag">{*badge}</span> })}
            </div>
        </>
    }
}

#[function_component(Certificate)]
pub fn certificate() -> Html {
    let carousel = use_node_ref();
    let arrows = use_state_eq(|| CarouselArrows {
        left: false,
        right: true,
    });
    let selected = use_state_eq(|| None::<Selection>);
    let open = use_state_eq(|| false);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    {
        let carousel = carousel.clone();
        let arrows = arrows.setter();
        use_effect_with((), move |_| {
            let mut guards = Vec::new();
            if let Some(element) = carousel.cast::<Element>() {
                arrows.set(read_arrows(&element));

                let update = Rc::new({
                    let element = element.clone();
                    move || arrows.set(read_arrows(&element))
                });
                let on_scroll = update.clone();
                guards.extend(EventListener::new(
                    &EventTarget::from(element),
                    "scroll",
                    move |_| on_scroll(),
                ));
                guards.extend(EventListener::on_window("resize", move |_| update()));
            }
            move || drop(guards)
        });
    }

    let step = |direction: CarouselDirection| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = carousel.cast::<Element>() {
                scroll_element_by(&element, direction.offset(), !prefers_reduced_motion());
            }
        })
    };

    let select = {
        let selected = selected.clone();
        let open = open.clone();
        let clear_timer = clear_timer.clone();
        move |selection: Selection| {
            let selected = selected.clone();
            let open = open.clone();
            let clear_timer = clear_timer.clone();
            Callback::from(move |_: MouseEvent| {
                clear_timer.borrow_mut().take();
                selected.set(Some(selection));
                open.set(true);
            })
        }
    };

    let on_close = {
        let selected = selected.setter();
        let open = open.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            let selected = selected.clone();
            *clear_timer.borrow_mut() = Timeout::new(MODAL_CLEAR_MS, move || selected.set(None));
        })
    };

    let modal = (*selected).map(|selection| {
        let (label, body) = match selection {
            Selection::Certificate(index) => {
                let Some(cert) = CERTIFICATES.get(index) else {
                    return Html::default();
                };
                (
                    cert.title.to_string(),
                    html! {
                        <>
                            <img class="certificate-full" src={cert.image} alt={cert.title} />
                            <h3>{cert.title}</h3>
                            <p><strong>{"Issued by: "}</strong>{cert.issuer}</p>
                            <p><strong>{"Date: "}</strong>{cert.date}</p>
                        </>
                    },
                )
            }
            Selection::LeetCode => (
                "LeetCode profile".to_string(),
                html! { <ProfileDetails profile={LEETCODE} /> },
            ),
        };
        html! {
            <Modal
                label={label}
                on_close={on_close.clone()}
                closing={!*open}
                class="certificate-modal"
            >
                {body}
            </Modal>
        }
    });

    let count = CERTIFICATES.len();

    html! {
        <section id={CERTIFICATIONS_ANCHOR} class="achievements">
            <div class="section-inner">
                <header class="section-header">
                    <Reveal reveal={choreography::achievements_heading()} tag="h2" class="section-title">
                        {"My "}<span class="accent-indigo">{"Achievements"}</span>
                    </Reveal>
                    <Reveal reveal={choreography::achievements_subheading()} tag="p" class="section-subtitle">
                        {ACHIEVEMENTS_SUBTITLE}
                    </Reveal>
                </header>

                <h3 class="subsection-title">{"📜 Certificates"}</h3>
                <div class="carousel">
                    if arrows.left {
                        <button
                            class="carousel-arrow is-left"
                            type="button"
                            aria-label="Previous certificates"
                            onclick={step(CarouselDirection::Left)}
                        >
                            {"‹"}
                        </button>
                    }
                    <div ref={carousel.clone()} class="carousel-track">
                        {for CERTIFICATES.iter().enumerate().map(|(index, cert)| html! {
                            <Reveal key={cert.title} reveal={choreography::certificate_card(index, count)} class="certificate-card">
                                <div
                                    class="certificate-open"
                                    role="button"
                                    tabindex="0"
                                    onclick={select(Selection::Certificate(index))}
                                >
                                    <div class="certificate-thumb">
                                        <img src={cert.image} alt={cert.title} loading="lazy" />
                                        <span class="certificate-overlay">{"View Certificate"}</span>
                                    </div>
                                    <h4>{cert.title}</h4>
                                    <p class="muted">{format!("{} • {}", cert.issuer, cert.date)}</p>
                                    <span class="gradient-bar" aria-hidden="true"></span>
                                </div>
                            </Reveal>
                        })}
                    </div>
                    if arrows.right {
                        <button
                            class="carousel-arrow is-right"
                            type="button"
                            aria-label="Next certificates"
                            onclick={step(CarouselDirection::Right)}
                        >
                            {"›"}
                        </button>
                    }
                </div>

                <h3 class="subsection-title">{"💻 LeetCode Profile"}</h3>
                <Reveal reveal={choreography::leetcode_card()} class="card leetcode-card">
                    <div class="leetcode-open" role="button" tabindex="0" onclick={select(Selection::LeetCode)}>
                        <ProfileDetails profile={LEETCODE} />
                    </div>
                </Reveal>
            </div>

            {for modal}
        </section>
    }
}

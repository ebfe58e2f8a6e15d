use yew::prelude::*;

use super::{modal::Modal, reveal::Reveal, smooth::use_scroll, use_is_mobile};
use crate::{
    choreography,
    content::{Project, ProjectLink, GITHUB_PROFILE, PROJECTS, WORK_OUTRO, WORK_SUBTITLE},
    scroll::{stack_height_vh, sticky_top_px},
};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    project: Project,
    mobile: bool,
    on_play: Callback<usize>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let count = PROJECTS.len();
    let style = format!(
        "position: sticky; top: {}px; z-index: {};",
        sticky_top_px(props.index, props.mobile),
        count + props.index,
    );

    let link = match project.primary_link() {
        ProjectLink::WorkingOnIt => html! {
            <span class="project-link is-pending">{ProjectLink::WorkingOnIt.label()}</span>
        },
        primary => html! {
            <a
                class={classes!("project-link", matches!(primary, ProjectLink::Demo(_)).then_some("is-demo"))}
                href={primary.href()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {primary.label()}
            </a>
        },
    };

    let on_play = {
        let index = props.index;
        props.on_play.reform(move |_: MouseEvent| index)
    };
    let (from, to) = project.gradient;

    html! {
        <Reveal
            reveal={choreography::project_card()}
            class={classes!("project-card", props.mobile.then_some("is-mobile"))}
            style={style}
        >
            <div class="project-copy">
                <span class="project-number">{format!("{:02}", props.index + 1)}</span>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    {for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> })}
                </div>
                <div class="project-links">{link}</div>
            </div>

            <div class="project-media">
                <div class="browser-bar" aria-hidden="true">
                    <span class="dot dot-red"></span>
                    <span class="dot dot-yellow"></span>
                    <span class="dot dot-green"></span>
                </div>
                <button
                    class="project-preview"
                    type="button"
                    aria-label={format!("Play {} video", project.title)}
                    style={format!(
                        "background-image: url('{}'); --accent-from: {from}; --accent-to: {to};",
                        project.image,
                    )}
                    onclick={on_play}
                >
                    <span class="play-badge" aria-hidden="true">{"▶"}</span>
                </button>
            </div>
        </Reveal>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let mobile = use_is_mobile();
    let playing = use_state_eq(|| None::<usize>);
    let scroll = use_scroll();

    let on_play = {
        let playing = playing.clone();
        Callback::from(move |index: usize| playing.set(Some(index)))
    };
    let on_close = {
        let playing = playing.clone();
        Callback::from(move |_: ()| playing.set(None))
    };
    let on_connect = Callback::from(move |_: MouseEvent| scroll.scroll_to_id("contact"));

    let video = (*playing).and_then(|index| PROJECTS.get(index)).map(|project| {
        html! {
            <Modal label={format!("{} video", project.title)} on_close={on_close.clone()} class="video-modal">
                <iframe
                    src={project.video}
                    title={project.title}
                    width="100%"
                    height="480"
                    allow="autoplay"
                    allowfullscreen="true"
                    loading="lazy"
                ></iframe>
            </Modal>
        }
    });

    html! {
        <section id="work" class="work">
            <div class="section-inner">
                <header class="section-header">
                    <Reveal reveal={choreography::section_heading()} tag="h2" class="section-title">
                        {"Featured "}<span class="accent-indigo">{"Work"}</span>
                    </Reveal>
                    <Reveal reveal={choreography::section_divider()} class="section-divider" />
                    <Reveal reveal={choreography::section_subtitle()} tag="p" class="section-subtitle">
                        {WORK_SUBTITLE}
                    </Reveal>
                </header>

                <div
                    class="project-stack"
                    style={format!("height: {}vh;", stack_height_vh(PROJECTS.len(), mobile))}
                >
                    {for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.title}
                            index={index}
                            project={*project}
                            mobile={mobile}
                            on_play={on_play.clone()}
                        />
                    })}
                </div>

                <Reveal reveal={choreography::work_outro()} class="work-outro">
                    <p>
                        {WORK_OUTRO}{" "}
                        <a href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        {" or let's discuss how we can work together."}
                    </p>
                    <button class="button button-gradient" type="button" onclick={on_connect}>
                        {"Let's Connect"}
                    </button>
                </Reveal>
            </div>

            {for video}
        </section>
    }
}

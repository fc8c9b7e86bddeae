use crate::{
    config::PageConfig,
    content::{TimelineEntry, CONTACT, PREVIEW_ALT, PROFILE, PROJECTS, SKILLS, TIMELINE},
    fade::{FadeStyle, HeroParallax},
    logging::{LogLevel, Logger},
    scroll::{ScrollState, ScrollSubscription},
    tab_widget::{CodeTab, TabAction, TabWidgetState, Truncation, ViewMode},
    visibility::{
        IntersectionRule, Observation, Section, SectionObserver, Transition, VisibilitySet,
    },
};
use serde_json::json;
use std::rc::Rc;
use web_sys::{window, Element, HtmlInputElement, MouseEvent, Storage};
use yew::prelude::*;

const LOG_LEVEL_KEY: &str = "portfolio-log-level";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_log_level() -> Option<LogLevel> {
    let value = local_storage()?.get_item(LOG_LEVEL_KEY).ok().flatten()?;
    LogLevel::parse(&value)
}

fn resolve_config() -> PageConfig {
    let config = PageConfig::load();
    match read_stored_log_level() {
        Some(level) => config.with_log_level(level),
        None => config,
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// One `NodeRef` per observed section, handed to the observer explicitly.
#[derive(Clone, PartialEq)]
struct SectionRefs {
    refs: [NodeRef; Section::COUNT],
}

impl SectionRefs {
    fn new() -> Self {
        Self {
            refs: std::array::from_fn(|_| NodeRef::default()),
        }
    }

    fn get(&self, section: Section) -> NodeRef {
        self.refs[section.index()].clone()
    }

    fn mounted(&self) -> Vec<(Section, Element)> {
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                self.refs[section.index()]
                    .cast::<Element>()
                    .map(|element| (section, element))
            })
            .collect()
    }
}

#[derive(Clone, PartialEq)]
struct SectionVisibility {
    set: VisibilitySet,
    logger: Logger,
}

enum VisibilityAction {
    Observe(Observation),
    RevealAll,
}

impl Reducible for SectionVisibility {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut set = self.set;
        let changed = match action {
            VisibilityAction::Observe(observation) => match set.apply(observation) {
                Some(transition) => {
                    self.logger.event(
                        LogLevel::Debug,
                        "section_visibility_changed",
                        json!({
                            "section": observation.section.id(),
                            "visible": transition == Transition::Shown,
                        }),
                    );
                    true
                }
                None => false,
            },
            VisibilityAction::RevealAll => set.reveal_all(),
        };

        if changed {
            Rc::new(Self {
                set,
                logger: self.logger,
            })
        } else {
            self
        }
    }
}

impl Reducible for TabWidgetState {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[hook]
fn use_scroll_offset(enabled: bool, logger: Logger) -> ScrollState {
    let offset = use_state_eq(ScrollState::default);

    {
        let offset = offset.clone();
        use_effect_with(enabled, move |enabled| {
            let subscription = if *enabled {
                match ScrollSubscription::attach(move |state| offset.set(state)) {
                    Ok(subscription) => {
                        logger.event(LogLevel::Debug, "scroll_tracker_attached", json!({}));
                        Some(subscription)
                    }
                    Err(reason) => {
                        logger.event(
                            LogLevel::Warn,
                            "scroll_tracker_unavailable",
                            json!({ "reason": reason }),
                        );
                        None
                    }
                }
            } else {
                None
            };

            move || {
                if let Some(subscription) = subscription {
                    drop(subscription);
                    logger.event(LogLevel::Debug, "scroll_tracker_detached", json!({}));
                }
            }
        });
    }

    *offset
}

#[hook]
fn use_section_visibility(
    refs: Rc<SectionRefs>,
    rule: IntersectionRule,
    logger: Logger,
) -> VisibilitySet {
    let visibility = use_reducer_eq(move || SectionVisibility {
        set: VisibilitySet::default(),
        logger,
    });

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with(refs, move |refs| {
            let targets = refs.mounted();
            let mounted = targets.len();
            let on_observation = {
                let dispatcher = dispatcher.clone();
                move |observation: Observation| dispatcher.dispatch(VisibilityAction::Observe(observation))
            };

            let observer = match SectionObserver::attach(targets, rule, on_observation) {
                Ok(observer) => {
                    logger.event(
                        LogLevel::Debug,
                        "section_observer_attached",
                        json!({ "sections": mounted, "rootMargin": rule.root_margin() }),
                    );
                    Some(observer)
                }
                Err(reason) => {
                    logger.event(
                        LogLevel::Warn,
                        "section_observer_unavailable",
                        json!({ "reason": reason }),
                    );
                    dispatcher.dispatch(VisibilityAction::RevealAll);
                    None
                }
            };

            move || {
                if let Some(observer) = observer {
                    drop(observer);
                    logger.event(LogLevel::Debug, "section_observer_detached", json!({}));
                }
            }
        });
    }

    visibility.set
}

fn log_tab_action(logger: Logger, action: TabAction) {
    let (event, fields) = match action {
        TabAction::SelectTab(tab) => ("code_tab_selected", json!({ "tab": tab.label() })),
        TabAction::SetSliderValue(value) => ("code_step_changed", json!({ "sliderValue": value })),
        TabAction::ToggleExpanded => ("code_expanded_toggled", json!({})),
        TabAction::SetViewMode(mode) => ("code_view_mode_changed", json!({ "mode": mode.label() })),
    };
    logger.event(LogLevel::Debug, event, fields);
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    parallax: HeroParallax,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero" style={props.parallax.block_css()}>
            <div class="hero-content" style={props.parallax.content_css()}>
                <img class="profile-pic" src={PROFILE.avatar} alt={PROFILE.name} />
                <h1>{PROFILE.name}</h1>
                <p class="subtitle">{PROFILE.subtitle}</p>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct RevealSectionProps {
    section: Section,
    section_ref: NodeRef,
    heading: AttrValue,
    #[prop_or_default]
    reveal_class: Option<&'static str>,
    #[prop_or_default]
    fade: Option<FadeStyle>,
    #[prop_or_default]
    children: Html,
}

#[function_component(RevealSection)]
fn reveal_section(props: &RevealSectionProps) -> Html {
    let heading_id = format!("{}-heading", props.section.id());

    html! {
        <section
            id={props.section.id()}
            ref={props.section_ref.clone()}
            class={classes!("section-block", props.reveal_class)}
            style={props.fade.map(FadeStyle::to_css)}
            aria-labelledby={heading_id.clone()}
        >
            <h2 id={heading_id}>{props.heading.clone()}</h2>
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CodePreviewProps {
    truncation: Truncation,
    logger: Logger,
}

#[function_component(CodePreview)]
fn code_preview(props: &CodePreviewProps) -> Html {
    let widget = use_reducer_eq(TabWidgetState::default);
    let state = *widget;

    let on_action = {
        let widget = widget.clone();
        let logger = props.logger;
        Callback::from(move |action: TabAction| {
            log_tab_action(logger, action);
            widget.dispatch(action);
        })
    };

    let on_slider = on_action.reform(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        TabAction::SetSliderValue(input.value().trim().parse().unwrap_or(1))
    });
    let on_toggle_expanded = on_action.reform(|_: MouseEvent| TabAction::ToggleExpanded);

    let panels = state.panels();
    let code = state.display_code(props.truncation).into_owned();

    html! {
        <div class="code-preview">
            <div class="code-tabs" role="tablist">
                { for CodeTab::ALL.into_iter().map(|tab| {
                    let active = tab == state.selected_tab();
                    let onclick = on_action.reform(move |_: MouseEvent| TabAction::SelectTab(tab));
                    html! {
                        <button
                            key={tab.label()}
                            type="button"
                            role="tab"
                            class={classes!("code-tab", active.then_some("active"))}
                            aria-selected={active.to_string()}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="view-toggle">
                { for ViewMode::ALL.into_iter().map(|mode| {
                    let active = mode == state.view_mode();
                    let onclick = on_action.reform(move |_: MouseEvent| TabAction::SetViewMode(mode));
                    html! {
                        <button
                            key={mode.label()}
                            type="button"
                            class={classes!(active.then_some("active"))}
                            aria-pressed={active.to_string()}
                            {onclick}
                        >
                            {mode.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="code-preview-body">
                <div class="code-panel" style={panels.code_css()}>
                    <pre class="code-block"><code>{code}</code></pre>
                    <input
                        class="code-slider"
                        type="range"
                        min="1"
                        max={state.selected_tab().step_count().to_string()}
                        value={state.slider_value().to_string()}
                        aria-label="Code step"
                        oninput={on_slider}
                    />
                    <button
                        type="button"
                        class="show-more-btn"
                        aria-expanded={state.expanded().to_string()}
                        onclick={on_toggle_expanded}
                    >
                        {state.expand_label()}
                    </button>
                </div>
                <div class="preview-panel" style={panels.preview_css()}>
                    <div class="preview-mockup">
                        <img
                            src={state.preview_image()}
                            alt={PREVIEW_ALT}
                            style="width:100%;height:auto;"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

fn timeline_item(entry: &TimelineEntry) -> Html {
    html! {
        <li class="timeline-item">
            <span class="muted">{entry.kind.label()}</span>
            <h3>{entry.title}</h3>
            <p class="timeline-meta">{entry.organization}{" · "}{entry.period}</p>
            <p>{entry.summary}</p>
        </li>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| resolve_config());
    let logger = config.logger();
    let reduced_motion = *use_state(prefers_reduced_motion);
    let section_refs = use_memo((), |_| SectionRefs::new());

    let scroll = use_scroll_offset(!reduced_motion, logger);
    let visible = use_section_visibility(section_refs.clone(), config.visibility, logger);

    use_effect_with((), move |_| {
        logger.event(
            LogLevel::Info,
            "page_mounted",
            json!({ "sections": Section::COUNT, "reducedMotion": reduced_motion }),
        );
        || ()
    });

    let fade_for = |section: Section| -> Option<FadeStyle> {
        let threshold = config.thresholds.for_section(section)?;
        if reduced_motion {
            Some(FadeStyle::settled())
        } else {
            Some(config.fade.style(scroll.offset_y(), threshold))
        }
    };

    let hero = if reduced_motion {
        HeroParallax::default()
    } else {
        config.parallax.hero(scroll.offset_y())
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="portfolio-container">
                <Hero parallax={hero} />

                <main id="content">
                    <RevealSection
                        section={Section::About}
                        section_ref={section_refs.get(Section::About)}
                        heading="About Me"
                        reveal_class={visible.class_for(Section::About)}
                        fade={fade_for(Section::About)}
                    >
                        <p>{PROFILE.about}</p>
                    </RevealSection>

                    <RevealSection
                        section={Section::Skills}
                        section_ref={section_refs.get(Section::Skills)}
                        heading="Skills"
                        reveal_class={visible.class_for(Section::Skills)}
                        fade={fade_for(Section::Skills)}
                    >
                        <ul class="skills-grid">
                            { for SKILLS.iter().map(|skill| html! {
                                <li key={skill.name} class="skill-card">
                                    <img src={skill.icon} alt="" aria-hidden="true" loading="lazy" />
                                    <span>{skill.name}</span>
                                </li>
                            }) }
                        </ul>
                    </RevealSection>

                    <RevealSection
                        section={Section::Experience}
                        section_ref={section_refs.get(Section::Experience)}
                        heading="Experience & Education"
                        reveal_class={visible.class_for(Section::Experience)}
                        fade={fade_for(Section::Experience)}
                    >
                        <ul class="timeline">
                            { for TIMELINE.iter().map(timeline_item) }
                        </ul>
                    </RevealSection>

                    <RevealSection
                        section={Section::Projects}
                        section_ref={section_refs.get(Section::Projects)}
                        heading="Projects"
                        reveal_class={visible.class_for(Section::Projects)}
                        fade={fade_for(Section::Projects)}
                    >
                        <ul class="project-gallery">
                            { for PROJECTS.iter().map(|project| html! {
                                <li key={project.title} class="project-card">
                                    <img src={project.thumbnail} alt={project.title} loading="lazy" />
                                    <strong>{project.title}</strong>
                                    <span class="muted">{" – "}{project.summary}</span>
                                </li>
                            }) }
                        </ul>
                    </RevealSection>

                    <RevealSection
                        section={Section::CodePreview}
                        section_ref={section_refs.get(Section::CodePreview)}
                        heading="Code & Canvas"
                        reveal_class={visible.class_for(Section::CodePreview)}
                    >
                        <CodePreview truncation={config.truncation} {logger} />
                    </RevealSection>
                </main>

                <footer class="site-footer">
                    <RevealSection
                        section={Section::Contact}
                        section_ref={section_refs.get(Section::Contact)}
                        heading="Contact"
                        reveal_class={visible.class_for(Section::Contact)}
                    >
                        <p>
                            {"Email: "}
                            <a class="link" href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a>
                        </p>
                        <p>
                            {"GitHub: "}
                            <a class="link" href={CONTACT.github_url} target="_blank" rel="noopener noreferrer">
                                {CONTACT.github_handle}
                                <span class="sr-only">{" (opens in a new tab)"}</span>
                            </a>
                        </p>
                    </RevealSection>
                </footer>
            </div>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

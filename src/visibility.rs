pub const DEFAULT_MARGIN_PERCENT: f64 = 10.0;
pub const DEFAULT_MIN_RATIO: f64 = 0.2;
pub const ANIMATE_CLASS: &str = "animate";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    CodePreview,
    Contact,
}

impl Section {
    pub const COUNT: usize = 6;
    pub const ALL: [Section; Section::COUNT] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::CodePreview,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::CodePreview => "code-preview",
            Self::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Shown,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub section: Section,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    visible: [bool; Section::COUNT],
}

impl VisibilitySet {
    pub fn contains(&self, section: Section) -> bool {
        self.visible[section.index()]
    }

    pub fn apply(&mut self, observation: Observation) -> Option<Transition> {
        let slot = &mut self.visible[observation.section.index()];
        if *slot == observation.visible {
            return None;
        }

        *slot = observation.visible;
        Some(if observation.visible {
            Transition::Shown
        } else {
            Transition::Hidden
        })
    }

    pub fn reveal_all(&mut self) -> bool {
        let changed = self.visible.contains(&false);
        self.visible = [true; Section::COUNT];
        changed
    }

    pub fn class_for(&self, section: Section) -> Option<&'static str> {
        self.contains(section).then_some(ANIMATE_CLASS)
    }
}

/// A section counts as visible once `min_ratio` of its area lies inside the
/// viewport shrunk by `margin_percent` at the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionRule {
    margin_percent: f64,
    min_ratio: f64,
}

impl Default for IntersectionRule {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_PERCENT, DEFAULT_MIN_RATIO)
    }
}

impl IntersectionRule {
    pub fn new(margin_percent: f64, min_ratio: f64) -> Self {
        Self {
            margin_percent,
            min_ratio,
        }
    }

    pub fn min_ratio(self) -> f64 {
        self.min_ratio
    }

    pub fn root_margin(self) -> String {
        let margin = self.margin_percent;
        format!("-{margin}% 0px -{margin}% 0px")
    }

    pub fn is_visible(self, is_intersecting: bool, intersection_ratio: f64) -> bool {
        is_intersecting && intersection_ratio >= self.min_ratio
    }
}

/// Fails unless every section has a mounted target, so a partly rendered page
/// falls back to revealing everything instead of leaving sections hidden.
pub fn require_every_section<T>(
    targets: Vec<(Section, T)>,
) -> Result<Vec<(Section, T)>, &'static str> {
    let all_present = Section::ALL
        .into_iter()
        .all(|section| targets.iter().any(|(target, _)| *target == section));

    if all_present {
        Ok(targets)
    } else {
        Err("section element not mounted")
    }
}

#[cfg(target_arch = "wasm32")]
pub use observer::SectionObserver;

#[cfg(target_arch = "wasm32")]
mod observer {
    use super::{require_every_section, IntersectionRule, Observation, Section};
    use js_sys::Array;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    pub struct SectionObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl SectionObserver {
        pub fn attach(
            targets: Vec<(Section, Element)>,
            rule: IntersectionRule,
            on_observation: impl Fn(Observation) + 'static,
        ) -> Result<Self, &'static str> {
            let targets = require_every_section(targets)?;
            let elements: Vec<Element> = targets.iter().map(|(_, element)| element.clone()).collect();

            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    for value in entries.iter() {
                        let entry: IntersectionObserverEntry = value.unchecked_into();
                        let target = entry.target();
                        let Some((section, _)) = targets.iter().find(|(_, element)| *element == target)
                        else {
                            continue;
                        };

                        on_observation(Observation {
                            section: *section,
                            visible: rule.is_visible(entry.is_intersecting(), entry.intersection_ratio()),
                        });
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(&rule.root_margin());
            init.set_threshold(&JsValue::from_f64(rule.min_ratio()));

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                    .map_err(|_| "intersection observer unsupported")?;

            for element in &elements {
                observer.observe(element);
            }

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SectionObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(section: Section, visible: bool) -> Observation {
        Observation { section, visible }
    }

    #[test]
    fn all_sections_start_hidden() {
        let set = VisibilitySet::default();
        assert!(Section::ALL.iter().all(|section| !set.contains(*section)));
    }

    #[test]
    fn entering_section_is_added_exactly_once() {
        let mut set = VisibilitySet::default();

        assert_eq!(set.apply(seen(Section::Projects, true)), Some(Transition::Shown));
        assert_eq!(set.apply(seen(Section::Projects, true)), None);
        assert!(set.contains(Section::Projects));
        assert!(!set.contains(Section::About));
    }

    #[test]
    fn leaving_section_is_removed_exactly_once() {
        let mut set = VisibilitySet::default();
        set.apply(seen(Section::Skills, true));

        assert_eq!(set.apply(seen(Section::Skills, false)), Some(Transition::Hidden));
        assert_eq!(set.apply(seen(Section::Skills, false)), None);
        assert!(!set.contains(Section::Skills));
    }

    #[test]
    fn hidden_observation_for_unseen_section_is_a_no_op() {
        let mut set = VisibilitySet::default();
        assert_eq!(set.apply(seen(Section::Contact, false)), None);
    }

    #[test]
    fn animate_class_tracks_membership() {
        let mut set = VisibilitySet::default();
        assert_eq!(set.class_for(Section::About), None);

        set.apply(seen(Section::About, true));
        assert_eq!(set.class_for(Section::About), Some("animate"));
    }

    #[test]
    fn reveal_all_marks_every_section() {
        let mut set = VisibilitySet::default();
        assert!(set.reveal_all());
        assert!(Section::ALL.iter().all(|section| set.contains(*section)));
        assert!(!set.reveal_all());
    }

    #[test]
    fn rule_requires_intersection_and_minimum_ratio() {
        let rule = IntersectionRule::default();

        assert!(rule.is_visible(true, 0.2));
        assert!(rule.is_visible(true, 0.75));
        assert!(!rule.is_visible(true, 0.19));
        assert!(!rule.is_visible(false, 0.5));
    }

    #[test]
    fn root_margin_shrinks_top_and_bottom_only() {
        assert_eq!(IntersectionRule::default().root_margin(), "-10% 0px -10% 0px");
        assert_eq!(IntersectionRule::new(12.5, 0.2).root_margin(), "-12.5% 0px -12.5% 0px");
    }

    #[test]
    fn every_section_must_be_mounted() {
        let all: Vec<(Section, &str)> = Section::ALL
            .into_iter()
            .map(|section| (section, section.id()))
            .collect();
        assert_eq!(
            require_every_section(all.clone()).map(|targets| targets.len()),
            Ok(Section::COUNT)
        );

        let partial: Vec<(Section, &str)> = all
            .into_iter()
            .filter(|(section, _)| *section != Section::Experience)
            .collect();
        assert!(require_every_section(partial).is_err());
        assert!(require_every_section(Vec::<(Section, ())>::new()).is_err());
    }

    #[test]
    fn section_ids_are_unique() {
        for section in Section::ALL {
            let matching = Section::ALL.iter().filter(|other| other.id() == section.id()).count();
            assert_eq!(matching, 1, "{}", section.id());
        }
    }
}

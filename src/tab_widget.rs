use crate::content::{self, PREVIEW_IMAGES};
use std::borrow::Cow;

pub const DEFAULT_COLLAPSED_LINES: usize = 4;
pub const DEFAULT_COLLAPSED_CHARS: usize = 120;
const ELLIPSIS_LINE: &str = "\n...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodeTab {
    #[default]
    AppJsx,
    StylesCss,
    ConfigJs,
}

impl CodeTab {
    pub const ALL: [CodeTab; 3] = [CodeTab::AppJsx, CodeTab::StylesCss, CodeTab::ConfigJs];

    pub fn label(self) -> &'static str {
        match self {
            Self::AppJsx => "App.jsx",
            Self::StylesCss => "styles.css",
            Self::ConfigJs => "config.js",
        }
    }

    pub fn step_count(self) -> usize {
        content::snippets(self).len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Split,
    Dev,
    Client,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Split, ViewMode::Dev, ViewMode::Client];

    pub fn label(self) -> &'static str {
        match self {
            Self::Split => "Split View",
            Self::Dev => "Dev View",
            Self::Client => "Client View",
        }
    }

    pub fn panels(self) -> PanelVisibility {
        match self {
            Self::Split => PanelVisibility {
                code: true,
                preview: true,
            },
            Self::Dev => PanelVisibility {
                code: true,
                preview: false,
            },
            Self::Client => PanelVisibility {
                code: false,
                preview: true,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility {
    pub code: bool,
    pub preview: bool,
}

impl PanelVisibility {
    pub fn code_css(self) -> &'static str {
        display_css(self.code)
    }

    pub fn preview_css(self) -> &'static str {
        display_css(self.preview)
    }
}

fn display_css(visible: bool) -> &'static str {
    if visible {
        "display: flex;"
    } else {
        "display: none;"
    }
}

/// Collapsed snippets keep this many leading lines, or this many leading
/// characters when the snippet is short on lines but long on text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub max_lines: usize,
    pub max_chars: usize,
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_COLLAPSED_LINES,
            max_chars: DEFAULT_COLLAPSED_CHARS,
        }
    }
}

impl Truncation {
    pub fn apply(self, code: &str) -> Cow<'_, str> {
        let lines: Vec<&str> = code.split('\n').collect();
        if lines.len() > self.max_lines {
            return Cow::Owned(format!("{}{ELLIPSIS_LINE}", lines[..self.max_lines].join("\n")));
        }

        if code.chars().count() > self.max_chars {
            let head: String = code.chars().take(self.max_chars).collect();
            return Cow::Owned(format!("{head}{ELLIPSIS_LINE}"));
        }

        Cow::Borrowed(code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAction {
    SelectTab(CodeTab),
    /// 1-based value of the step slider.
    SetSliderValue(i64),
    ToggleExpanded,
    SetViewMode(ViewMode),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabWidgetState {
    selected_tab: CodeTab,
    step: usize,
    expanded: bool,
    view_mode: ViewMode,
}

impl TabWidgetState {
    pub fn selected_tab(&self) -> CodeTab {
        self.selected_tab
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn apply(&mut self, action: TabAction) {
        match action {
            TabAction::SelectTab(tab) => self.select_tab(tab),
            TabAction::SetSliderValue(value) => self.set_step(value.saturating_sub(1)),
            TabAction::ToggleExpanded => self.toggle_expanded(),
            TabAction::SetViewMode(mode) => self.set_view_mode(mode),
        }
    }

    /// Resets the step. `expanded` carries over to the new tab.
    pub fn select_tab(&mut self, tab: CodeTab) {
        self.selected_tab = tab;
        self.step = 0;
    }

    pub fn set_step(&mut self, step: i64) {
        let last = self.selected_tab.step_count().saturating_sub(1);
        self.step = usize::try_from(step.max(0)).unwrap_or(usize::MAX).min(last);
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn slider_value(&self) -> usize {
        self.step + 1
    }

    pub fn snippet(&self) -> &'static str {
        let snippets = content::snippets(self.selected_tab);
        snippets[self.step.min(snippets.len().saturating_sub(1))]
    }

    pub fn display_code(&self, truncation: Truncation) -> Cow<'static, str> {
        if self.expanded {
            Cow::Borrowed(self.snippet())
        } else {
            truncation.apply(self.snippet())
        }
    }

    pub fn preview_image(&self) -> &'static str {
        PREVIEW_IMAGES[self.step.min(PREVIEW_IMAGES.len() - 1)]
    }

    pub fn expand_label(&self) -> &'static str {
        if self.expanded {
            "Show Less Code"
        } else {
            "Show More Code"
        }
    }

    pub fn panels(&self) -> PanelVisibility {
        self.view_mode.panels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(actions: &[TabAction]) -> TabWidgetState {
        let mut state = TabWidgetState::default();
        for action in actions {
            state.apply(*action);
        }
        state
    }

    #[test]
    fn initial_state_matches_first_render() {
        let state = TabWidgetState::default();
        assert_eq!(state.selected_tab(), CodeTab::AppJsx);
        assert_eq!(state.slider_value(), 1);
        assert!(!state.expanded());
        assert_eq!(state.view_mode(), ViewMode::Split);
        assert_eq!(state.preview_image(), "images/product.png");
    }

    #[test]
    fn selecting_tab_resets_step() {
        let state = state_with(&[
            TabAction::SetSliderValue(3),
            TabAction::SelectTab(CodeTab::ConfigJs),
        ]);

        assert_eq!(state.selected_tab(), CodeTab::ConfigJs);
        assert_eq!(state.slider_value(), 1);
        assert_eq!(state.preview_image(), "images/product.png");
    }

    #[test]
    fn selecting_tab_keeps_expanded_flag() {
        let state = state_with(&[
            TabAction::ToggleExpanded,
            TabAction::SelectTab(CodeTab::StylesCss),
        ]);

        assert!(state.expanded());
    }

    #[test]
    fn out_of_range_steps_are_clamped() {
        let mut state = TabWidgetState::default();

        state.set_step(7);
        assert_eq!(state.slider_value(), 3);
        state.set_step(-3);
        assert_eq!(state.slider_value(), 1);
        state.set_step(i64::MAX);
        assert_eq!(state.slider_value(), 3);
    }

    #[test]
    fn slider_value_is_one_based() {
        let state = state_with(&[TabAction::SetSliderValue(2)]);
        assert_eq!(state.slider_value(), 2);
        assert_eq!(state.preview_image(), "images/portwan.png");

        assert_eq!(state_with(&[TabAction::SetSliderValue(0)]).slider_value(), 1);
        assert_eq!(state_with(&[TabAction::SetSliderValue(i64::MIN)]).slider_value(), 1);
    }

    #[test]
    fn step_selects_snippet_and_preview() {
        let state = state_with(&[
            TabAction::SelectTab(CodeTab::StylesCss),
            TabAction::SetSliderValue(3),
        ]);

        assert_eq!(state.snippet(), ".btn:active {\n  transform: scale(0.97);\n}");
        assert_eq!(state.preview_image(), "images/tpage.png");
    }

    #[test]
    fn collapsed_long_snippet_shows_four_lines_and_ellipsis() {
        let code = "one\ntwo\nthree\nfour\nfive\nsix";
        assert_eq!(Truncation::default().apply(code), "one\ntwo\nthree\nfour\n...");
    }

    #[test]
    fn collapsed_wide_snippet_truncates_by_characters() {
        let code = "x".repeat(150);
        let shown = Truncation::default().apply(&code);
        assert_eq!(shown, format!("{}\n...", "x".repeat(120)));
    }

    #[test]
    fn short_snippet_is_shown_verbatim() {
        let code = "export const features = ['split-view', 'dev-view', 'client-view'];";
        assert!(matches!(Truncation::default().apply(code), Cow::Borrowed(_)));
    }

    #[test]
    fn expanded_state_shows_full_snippet() {
        let collapsed = state_with(&[TabAction::SelectTab(CodeTab::StylesCss)]);
        assert_eq!(
            collapsed.display_code(Truncation::default()),
            ".btn {\n  background: #232946;\n  color: #fff;\n  border: none;\n..."
        );

        let expanded = state_with(&[
            TabAction::SelectTab(CodeTab::StylesCss),
            TabAction::ToggleExpanded,
        ]);
        assert_eq!(expanded.display_code(Truncation::default()), expanded.snippet());
        assert_eq!(expanded.expand_label(), "Show Less Code");
        assert_eq!(collapsed.expand_label(), "Show More Code");
    }

    #[test]
    fn view_modes_toggle_panels() {
        let dev = state_with(&[TabAction::SetViewMode(ViewMode::Dev)]).panels();
        assert!(dev.code && !dev.preview);
        assert_eq!(dev.preview_css(), "display: none;");

        let client = state_with(&[TabAction::SetViewMode(ViewMode::Client)]).panels();
        assert!(!client.code && client.preview);
        assert_eq!(client.code_css(), "display: none;");

        let split = state_with(&[
            TabAction::SetViewMode(ViewMode::Client),
            TabAction::SetViewMode(ViewMode::Split),
        ])
        .panels();
        assert!(split.code && split.preview);
    }

    #[test]
    fn labels_match_control_text() {
        let tabs: Vec<&str> = CodeTab::ALL.into_iter().map(CodeTab::label).collect();
        assert_eq!(tabs, vec!["App.jsx", "styles.css", "config.js"]);

        let modes: Vec<&str> = ViewMode::ALL.into_iter().map(ViewMode::label).collect();
        assert_eq!(modes, vec!["Split View", "Dev View", "Client View"]);
    }

    #[test]
    fn exactly_max_lines_falls_through_to_character_limit() {
        let long_line = "y".repeat(40);
        let code = [long_line.as_str(); 4].join("\n");
        assert_eq!(code.chars().count(), 163);

        let shown = Truncation::default().apply(&code);
        let head: String = code.chars().take(120).collect();
        assert_eq!(shown, format!("{head}\n..."));

        assert_eq!(Truncation::default().apply("1\n2\n3\n4"), "1\n2\n3\n4");
    }
}

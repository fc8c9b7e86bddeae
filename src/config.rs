use crate::{
    fade::{
        FadeCurve, Parallax, DEFAULT_FADE_DISTANCE, DEFAULT_FADE_MAX_OFFSET,
        DEFAULT_HERO_BLOCK_FACTOR, DEFAULT_HERO_CONTENT_FACTOR,
    },
    logging::{LogLevel, Logger, DEFAULT_LOG_LEVEL},
    tab_widget::{Truncation, DEFAULT_COLLAPSED_CHARS, DEFAULT_COLLAPSED_LINES},
    visibility::{IntersectionRule, Section, DEFAULT_MARGIN_PERCENT, DEFAULT_MIN_RATIO},
};
use serde::Deserialize;
use serde_json::json;

const EMBEDDED_PAGE_CONFIG: &str = include_str!("../config/page.json");

const DEFAULT_THRESHOLDS: FadeThresholds = FadeThresholds {
    about: 400.0,
    skills: 800.0,
    experience: 1_200.0,
    projects: 1_400.0,
};

const FADE_DISTANCE_BOUNDS: (f64, f64) = (1.0, 2_000.0);
const FADE_MAX_OFFSET_BOUNDS: (f64, f64) = (0.0, 400.0);
const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 20_000.0);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 1.0);
const MARGIN_PERCENT_BOUNDS: (f64, f64) = (0.0, 45.0);
const MIN_RATIO_BOUNDS: (f64, f64) = (0.0, 1.0);
const COLLAPSED_LINES_BOUNDS: (usize, usize) = (1, 50);
const COLLAPSED_CHARS_BOUNDS: (usize, usize) = (16, 2_000);

/// Scroll offsets at which the thresholded sections start fading in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeThresholds {
    pub about: f64,
    pub skills: f64,
    pub experience: f64,
    pub projects: f64,
}

impl Default for FadeThresholds {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

impl FadeThresholds {
    pub fn for_section(&self, section: Section) -> Option<f64> {
        match section {
            Section::About => Some(self.about),
            Section::Skills => Some(self.skills),
            Section::Experience => Some(self.experience),
            Section::Projects => Some(self.projects),
            Section::CodePreview | Section::Contact => None,
        }
    }

    fn is_increasing(&self) -> bool {
        self.about < self.skills && self.skills < self.experience && self.experience < self.projects
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    pub fade: FadeCurve,
    pub thresholds: FadeThresholds,
    pub parallax: Parallax,
    pub visibility: IntersectionRule,
    pub truncation: Truncation,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fade: FadeCurve::default(),
            thresholds: FadeThresholds::default(),
            parallax: Parallax::default(),
            visibility: IntersectionRule::default(),
            truncation: Truncation::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPageConfig {
    fade: RawFade,
    thresholds: RawThresholds,
    parallax: RawParallax,
    visibility: RawVisibility,
    code_preview: RawCodePreview,
    log_level: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawFade {
    distance: Option<f64>,
    max_offset: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawThresholds {
    about: Option<f64>,
    skills: Option<f64>,
    experience: Option<f64>,
    projects: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawParallax {
    hero_block: Option<f64>,
    hero_content: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawVisibility {
    margin_percent: Option<f64>,
    min_ratio: Option<f64>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCodePreview {
    collapsed_lines: Option<usize>,
    collapsed_chars: Option<usize>,
}

impl PageConfig {
    /// Falls back to defaults when the embedded JSON does not parse.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_PAGE_CONFIG) {
            Ok(config) => config,
            Err(reason) => {
                Logger::new(LogLevel::Warn).event(
                    LogLevel::Warn,
                    "page_config_fallback",
                    json!({ "reason": reason }),
                );
                Self::default()
            }
        }
    }

    pub fn from_json(source: &str) -> Result<Self, &'static str> {
        let raw: RawPageConfig =
            serde_json::from_str(source).map_err(|_| "page config is not valid JSON")?;
        Ok(Self::from_raw(raw))
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }

    pub fn with_log_level(self, log_level: LogLevel) -> Self {
        Self { log_level, ..self }
    }

    fn from_raw(raw: RawPageConfig) -> Self {
        let fade = FadeCurve::new(
            bounded_f64(raw.fade.distance, DEFAULT_FADE_DISTANCE, FADE_DISTANCE_BOUNDS),
            bounded_f64(raw.fade.max_offset, DEFAULT_FADE_MAX_OFFSET, FADE_MAX_OFFSET_BOUNDS),
        );

        let thresholds = FadeThresholds {
            about: bounded_f64(raw.thresholds.about, DEFAULT_THRESHOLDS.about, THRESHOLD_BOUNDS),
            skills: bounded_f64(raw.thresholds.skills, DEFAULT_THRESHOLDS.skills, THRESHOLD_BOUNDS),
            experience: bounded_f64(
                raw.thresholds.experience,
                DEFAULT_THRESHOLDS.experience,
                THRESHOLD_BOUNDS,
            ),
            projects: bounded_f64(
                raw.thresholds.projects,
                DEFAULT_THRESHOLDS.projects,
                THRESHOLD_BOUNDS,
            ),
        };
        let thresholds = if thresholds.is_increasing() {
            thresholds
        } else {
            DEFAULT_THRESHOLDS
        };

        let parallax = Parallax::new(
            bounded_f64(raw.parallax.hero_block, DEFAULT_HERO_BLOCK_FACTOR, PARALLAX_FACTOR_BOUNDS),
            bounded_f64(
                raw.parallax.hero_content,
                DEFAULT_HERO_CONTENT_FACTOR,
                PARALLAX_FACTOR_BOUNDS,
            ),
        );

        let visibility = IntersectionRule::new(
            bounded_f64(
                raw.visibility.margin_percent,
                DEFAULT_MARGIN_PERCENT,
                MARGIN_PERCENT_BOUNDS,
            ),
            bounded_f64(raw.visibility.min_ratio, DEFAULT_MIN_RATIO, MIN_RATIO_BOUNDS),
        );

        let truncation = Truncation {
            max_lines: bounded_usize(
                raw.code_preview.collapsed_lines,
                DEFAULT_COLLAPSED_LINES,
                COLLAPSED_LINES_BOUNDS,
            ),
            max_chars: bounded_usize(
                raw.code_preview.collapsed_chars,
                DEFAULT_COLLAPSED_CHARS,
                COLLAPSED_CHARS_BOUNDS,
            ),
        };

        let log_level = raw
            .log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            fade,
            thresholds,
            parallax,
            visibility,
            truncation,
            log_level,
        }
    }
}

fn bounded_f64(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn bounded_usize(value: Option<usize>, default: usize, bounds: (usize, usize)) -> usize {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = PageConfig::from_json(EMBEDDED_PAGE_CONFIG).expect("embedded config parses");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = PageConfig::from_json("{}").expect("empty object parses");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn out_of_bounds_values_fall_back_one_field_at_a_time() {
        let config = PageConfig::from_json(
            r#"{
                "fade": { "distance": 0, "maxOffset": 80 },
                "visibility": { "marginPercent": 90, "minRatio": 0.5 },
                "codePreview": { "collapsedLines": 6, "collapsedChars": 4 }
            }"#,
        )
        .expect("config parses");

        assert_eq!(config.fade, FadeCurve::new(DEFAULT_FADE_DISTANCE, 80.0));
        assert_eq!(config.visibility, IntersectionRule::new(DEFAULT_MARGIN_PERCENT, 0.5));
        assert_eq!(
            config.truncation,
            Truncation {
                max_lines: 6,
                max_chars: DEFAULT_COLLAPSED_CHARS,
            }
        );
    }

    #[test]
    fn non_increasing_thresholds_are_replaced_as_a_group() {
        let config = PageConfig::from_json(
            r#"{ "thresholds": { "about": 900, "skills": 800, "experience": 1200, "projects": 1400 } }"#,
        )
        .expect("config parses");

        assert_eq!(config.thresholds, DEFAULT_THRESHOLDS);
    }

    #[test]
    fn custom_increasing_thresholds_are_kept() {
        let config = PageConfig::from_json(
            r#"{ "thresholds": { "about": 300, "skills": 700, "experience": 1100, "projects": 1500 } }"#,
        )
        .expect("config parses");

        assert_eq!(config.thresholds.for_section(Section::About), Some(300.0));
        assert_eq!(config.thresholds.for_section(Section::Projects), Some(1_500.0));
        assert_eq!(config.thresholds.for_section(Section::Contact), None);
    }

    #[test]
    fn log_level_is_parsed_or_defaulted() {
        let debug = PageConfig::from_json(r#"{ "logLevel": "debug" }"#).expect("config parses");
        assert_eq!(debug.log_level, LogLevel::Debug);
        assert!(debug.logger().enabled(LogLevel::Debug));

        let unknown = PageConfig::from_json(r#"{ "logLevel": "verbose" }"#).expect("config parses");
        assert_eq!(unknown.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PageConfig::from_json("{ fade: ").is_err());
    }
}

pub const DEFAULT_FADE_DISTANCE: f64 = 200.0;
pub const DEFAULT_FADE_MAX_OFFSET: f64 = 50.0;
pub const DEFAULT_HERO_BLOCK_FACTOR: f64 = 0.5;
pub const DEFAULT_HERO_CONTENT_FACTOR: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeCurve {
    distance: f64,
    max_offset: f64,
}

impl Default for FadeCurve {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_DISTANCE, DEFAULT_FADE_MAX_OFFSET)
    }
}

impl FadeCurve {
    pub fn new(distance: f64, max_offset: f64) -> Self {
        Self {
            distance,
            max_offset,
        }
    }

    pub fn opacity(self, offset_y: f64, threshold: f64) -> f64 {
        let ratio = (offset_y - threshold) / self.distance;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    /// Downward offset in pixels; reaches 0 exactly when opacity reaches 1.
    pub fn translate_y(self, offset_y: f64, threshold: f64) -> f64 {
        (1.0 - self.opacity(offset_y, threshold)) * self.max_offset
    }

    pub fn style(self, offset_y: f64, threshold: f64) -> FadeStyle {
        FadeStyle {
            opacity: self.opacity(offset_y, threshold),
            translate_y: self.translate_y(offset_y, threshold),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

impl FadeStyle {
    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }

    pub fn to_css(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.translate_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    block_factor: f64,
    content_factor: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(DEFAULT_HERO_BLOCK_FACTOR, DEFAULT_HERO_CONTENT_FACTOR)
    }
}

impl Parallax {
    pub fn new(block_factor: f64, content_factor: f64) -> Self {
        Self {
            block_factor,
            content_factor,
        }
    }

    pub fn hero(self, offset_y: f64) -> HeroParallax {
        HeroParallax {
            block_offset: offset_y * self.block_factor,
            content_offset: offset_y * self.content_factor,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroParallax {
    pub block_offset: f64,
    pub content_offset: f64,
}

impl HeroParallax {
    pub fn block_css(self) -> String {
        format!("transform: translateY({:.2}px);", self.block_offset)
    }

    pub fn content_css(self) -> String {
        format!("transform: translateY({:.2}px);", self.content_offset)
    }
}

//! Scroll-driven "about" section.
//!
//! On wide viewports the about block is pinned while the page scrolls through
//! a tall container; scroll progress through that container picks one of
//! three panels. Within a panel the content fades in with progress. Moving to
//! another panel runs a two-phase swap the host drives with timers:
//!
//! ```text
//! Idle ─new panel─► FadingOut ─300ms─► (swap) Entering ─50ms─► Idle
//! ```
//!
//! A panel change that arrives mid-swap only retargets it; the content shown
//! after the swap is always the latest target.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

pub const FADE_OUT_MS: u32 = 300;
pub const ENTER_DELAY_MS: u32 = 50;

/// Viewports this wide or narrower show the static layout instead.
pub const MAX_STATIC_WIDTH: f64 = 1024.0;

/// Vertical offset of the text while it is hidden, in pixels.
pub const HIDDEN_TEXT_OFFSET_PX: i32 = -20;
pub const HIDDEN_IMAGE_SCALE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PANELS: [AboutPanel; 3] = [
    AboutPanel {
        title: "Hands-On Learning",
        description: "Experience real robotics challenges that develop practical engineering skills. Our competitions provide students with hands-on opportunities to design, build, and program robots that solve complex problems. Through iterative design processes and technical challenges, participants gain invaluable experience in mechanical engineering, electronics, and programming.",
        image: "./images/picture1.jpg",
    },
    AboutPanel {
        title: "International Network",
        description: "Connect with schools and students across Europe. Join a vibrant community of robotics enthusiasts, share knowledge, and collaborate on innovative projects that transcend borders and cultures. Build lasting friendships and professional networks that will support your journey in technology and engineering.",
        image: "./images/picture2.jpg",
    },
    AboutPanel {
        title: "Competitive Excellence",
        description: "Showcase your skills in prestigious robotics competitions. Compete against the best teams in Europe, earn recognition for your achievements, and push the boundaries of what's possible in robotics. Our competitions provide a platform to demonstrate technical prowess, creativity, and teamwork under pressure.",
        image: "./images/picture3.jpg",
    },
];

/// Fraction of the container scrolled past, in `[0, 1]`.
///
/// `rect_top` is the container's top relative to the viewport. A container no
/// taller than the viewport counts as fully scrolled once its top passes the
/// viewport top.
#[must_use]
pub fn scroll_progress(rect_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    let span = container_height - viewport_height;
    if !rect_top.is_finite() || !span.is_finite() {
        return 0.0;
    }
    if span <= 0.0 {
        return if rect_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-rect_top / span).clamp(0.0, 1.0)
}

/// Panel index for `progress`, clamped to `[0, count - 1]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn panel_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = (progress.clamp(0.0, 1.0) * count as f64).floor() as usize;
    raw.min(count - 1)
}

/// Progress inside the current panel, in `[0, 1)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn panel_progress(progress: f64, count: usize) -> f64 {
    (progress.clamp(0.0, 1.0) * count as f64).fract()
}

/// Content opacity for a given in-panel progress: full by the halfway mark.
#[must_use]
pub fn panel_opacity(panel_progress: f64) -> f64 {
    (panel_progress * 2.0).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Old content leaving; a swap is pending.
    FadingOut,
    /// New content in place but still hidden.
    Entering,
}

impl Phase {
    /// How long the host should wait before calling `advance`.
    #[must_use]
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            Phase::Idle => None,
            Phase::FadingOut => Some(FADE_OUT_MS),
            Phase::Entering => Some(ENTER_DELAY_MS),
        }
    }
}

/// Visual state applied to all of the about content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStyle {
    pub opacity: f64,
    pub text_offset_px: i32,
    pub image_scale: f64,
}

impl ContentStyle {
    const HIDDEN: Self = Self { opacity: 0.0, text_offset_px: HIDDEN_TEXT_OFFSET_PX, image_scale: HIDDEN_IMAGE_SCALE };

    fn visible(opacity: f64) -> Self {
        Self { opacity, text_offset_px: 0, image_scale: 1.0 }
    }
}

/// What a scroll update asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollUpdate {
    /// Nothing changed, or the section is disabled.
    None,
    /// Same panel; set this opacity.
    Opacity(f64),
    /// A swap toward this panel started; run the phase timers.
    SwapStarted(usize),
    /// A swap is already running; it now targets this panel.
    Retargeted(usize),
}

#[derive(Debug, Clone)]
pub struct AboutScroll {
    count: usize,
    /// Panel chosen by scroll position.
    target: usize,
    /// Panel whose content is in the DOM.
    shown: usize,
    phase: Phase,
    opacity: f64,
    enabled: bool,
}

impl Default for AboutScroll {
    fn default() -> Self {
        Self::new(PANELS.len())
    }
}

impl AboutScroll {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count, target: 0, shown: 0, phase: Phase::Idle, opacity: 1.0, enabled: true }
    }

    /// Track the viewport width. Narrow viewports disable scroll handling.
    /// Returns whether the section is enabled.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let enabled = width > MAX_STATIC_WIDTH;
        if enabled != self.enabled {
            log::debug!("about scroll {} at width {width}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
        enabled
    }

    /// Feed the overall scroll progress through the container.
    pub fn on_scroll(&mut self, progress: f64) -> ScrollUpdate {
        if !self.enabled || self.count == 0 {
            return ScrollUpdate::None;
        }
        let index = panel_index(progress, self.count);
        if self.phase != Phase::Idle {
            if index == self.target {
                return ScrollUpdate::None;
            }
            self.target = index;
            return ScrollUpdate::Retargeted(index);
        }
        if index != self.shown {
            self.target = index;
            self.phase = Phase::FadingOut;
            return ScrollUpdate::SwapStarted(index);
        }
        self.opacity = panel_opacity(panel_progress(progress, self.count));
        ScrollUpdate::Opacity(self.opacity)
    }

    /// Move to the next phase. Returns `true` when this step swapped the
    /// content. A swap that lands on a stale panel starts another fade-out.
    pub fn advance(&mut self) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::FadingOut => {
                self.shown = self.target;
                self.phase = Phase::Entering;
                true
            }
            Phase::Entering => {
                self.opacity = 1.0;
                self.phase = if self.shown == self.target { Phase::Idle } else { Phase::FadingOut };
                false
            }
        }
    }

    #[must_use]
    pub fn style(&self) -> ContentStyle {
        match self.phase {
            Phase::Idle => ContentStyle::visible(self.opacity),
            Phase::FadingOut | Phase::Entering => ContentStyle::HIDDEN,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn shown_index(&self) -> usize {
        self.shown
    }

    /// The panel whose content should be in the DOM.
    #[must_use]
    pub fn shown_panel(&self) -> Option<&'static AboutPanel> {
        PANELS.get(self.shown)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

//! Video carousel with a timed slide transition.
//!
//! A navigation request picks the new index immediately, but the embedded
//! video only swaps once the old one has faded out. The host drives the
//! phases: after each [`Phase::duration_ms`] elapses it calls
//! [`VideoCarousel::advance`]. Navigation is ignored until the carousel is
//! idle again.
//!
//! ```text
//! Idle ─nav─► FadingOut ─300ms─► (swap) Entering ─50ms─► FadingIn ─300ms─► Idle
//! ```

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

pub const FADE_OUT_MS: u32 = 300;
pub const ENTER_DELAY_MS: u32 = 50;
pub const FADE_IN_MS: u32 = 300;

/// Slide offset applied while a video is off-center, in pixels.
pub const SLIDE_OFFSET_PX: i32 = 50;

pub const DEFAULT_PLAYLIST: [&str; 3] = ["1_pwn8q73H0", "YbIII8HvBwc", "wGxLz2onGh0"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The old video is leaving; its replacement is pending.
    FadingOut(Direction),
    /// The new video is in place, parked on the entry side.
    Entering(Direction),
    FadingIn,
}

impl Phase {
    /// How long the host should wait before calling `advance`.
    #[must_use]
    pub fn duration_ms(self) -> Option<u32> {
        match self {
            Phase::Idle => None,
            Phase::FadingOut(_) => Some(FADE_OUT_MS),
            Phase::Entering(_) => Some(ENTER_DELAY_MS),
            Phase::FadingIn => Some(FADE_IN_MS),
        }
    }

    /// Opacity and horizontal offset of the video wrapper in this phase.
    #[must_use]
    pub fn wrapper_style(self) -> (f64, i32) {
        match self {
            Phase::Idle | Phase::FadingIn => (1.0, 0),
            Phase::FadingOut(Direction::Right) | Phase::Entering(Direction::Left) => (0.0, -SLIDE_OFFSET_PX),
            Phase::FadingOut(Direction::Left) | Phase::Entering(Direction::Right) => (0.0, SLIDE_OFFSET_PX),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VideoCarousel {
    videos: Vec<String>,
    /// Target index chosen by navigation.
    current: usize,
    /// Index of the video actually embedded.
    shown: usize,
    phase: Phase,
}

impl Default for VideoCarousel {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST.iter().map(|id| (*id).to_owned()).collect())
    }
}

impl VideoCarousel {
    #[must_use]
    pub fn new(videos: Vec<String>) -> Self {
        Self { videos, current: 0, shown: 0, phase: Phase::Idle }
    }

    pub fn next(&mut self) -> bool {
        let len = self.videos.len();
        if !self.ready() || len == 0 {
            return false;
        }
        self.start((self.current + 1) % len, Direction::Right)
    }

    pub fn prev(&mut self) -> bool {
        let len = self.videos.len();
        if !self.ready() || len == 0 {
            return false;
        }
        self.start((self.current + len - 1) % len, Direction::Left)
    }

    /// Jump to `index`. The current index and out-of-range indices are
    /// ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.ready() || index == self.current || index >= self.videos.len() {
            return false;
        }
        let direction = if index > self.current { Direction::Right } else { Direction::Left };
        self.start(index, direction)
    }

    /// Arrow keys navigate; anything else is ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => false,
        }
    }

    /// Move to the next phase. Returns `true` when this step swapped the
    /// embedded video.
    pub fn advance(&mut self) -> bool {
        let (phase, swapped) = match self.phase {
            Phase::Idle => (Phase::Idle, false),
            Phase::FadingOut(direction) => {
                self.shown = self.current;
                (Phase::Entering(direction), true)
            }
            Phase::Entering(_) => (Phase::FadingIn, false),
            Phase::FadingIn => (Phase::Idle, false),
        };
        self.phase = phase;
        swapped
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn ready(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Index of the embedded video; the active dot follows this.
    #[must_use]
    pub fn shown_index(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Embed URL of the shown video.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.videos.get(self.shown).map(|id| format!("https://www.youtube.com/embed/{id}"))
    }

    fn start(&mut self, index: usize, direction: Direction) -> bool {
        self.current = index;
        self.phase = Phase::FadingOut(direction);
        true
    }
}

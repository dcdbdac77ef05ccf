// DOM hooks and tuning for the hero section front-end.

// Elements the page provides
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const TYPING_TARGET_ID: &str = "hero-role";

// Attributes
pub const PHRASES_ATTR: &str = "data-phrases"; // `|`-separated typewriter phrases
pub const DELETING_ATTR: &str = "data-deleting"; // "1" while the typewriter erases

// Stylesheet custom property holding the theme ink as an HSL triple
pub const FOREGROUND_TOKEN: &str = "--foreground";

// Longest time step fed to the typewriter in one frame. Browsers stop
// animation frames in hidden tabs; on return the banner resumes instead of
// replaying the gap.
pub const TYPING_MAX_DT_MS: u64 = 250;

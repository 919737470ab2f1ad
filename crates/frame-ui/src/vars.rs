//! Design variables for frame images
//!
//! A [`Vars`] record holds every table the style resolver looks tokens up
//! in: named colors, font families, the unit scale, the frame dimensions and
//! the icon collection. It is built once at startup and never mutated.
//!
//! Themes are expressed as [`VarsOverrides`] shallow-merged over
//! [`default_vars`]: a theme that supplies `colors` replaces the whole
//! default color table rather than extending it.
//!
//! # Usage
//!
//! ```rust
//! use frame_ui::vars::{get_vars, ThemeName};
//!
//! let vars = get_vars(ThemeName::Speedball);
//! assert_eq!(vars.colors.get("orange").map(String::as_str), Some("#F08643"));
//! assert_eq!(vars.frame.width, 1200);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Tables
// =============================================================================

/// Color table: token name to CSS color string
pub type ColorTable = BTreeMap<String, String>;

/// Unit table: token name to scale entry
pub type UnitTable = BTreeMap<String, Unit>;

/// Font table: family key (e.g. `default`) to the fonts registered for it
pub type FontTable = BTreeMap<String, Vec<FontSpec>>;

/// A unit scale entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    /// Fraction of the base dimension (`n / 1200` in the default table)
    Scale(f64),
    /// The literal `"100%"`
    Full(FullUnit),
}

/// Marker for the literal `"100%"` unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullUnit {
    /// `100%`
    #[serde(rename = "100%")]
    Percent,
}

impl Unit {
    /// Shorthand for the `"100%"` entry
    pub const FULL: Unit = Unit::Full(FullUnit::Percent);
}

/// Where a font is loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    /// Google Fonts CSS API
    #[default]
    Google,
    /// A local file supplied by configuration
    Local,
}

/// A single font face registered for a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family name (e.g. "Jersey 15")
    pub name: String,
    /// Source of the font data
    pub source: FontSource,
    /// Weight (100-900)
    pub weight: u16,
}

impl FontSpec {
    /// Create a Google-hosted font spec
    pub fn google(name: impl Into<String>, weight: u16) -> Self {
        Self {
            name: name.into(),
            source: FontSource::Google,
            weight,
        }
    }
}

/// Frame (image) dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
        }
    }
}

impl FrameSize {
    /// The larger of width and height, used as the base for most units
    pub fn vmax(&self) -> f64 {
        f64::from(self.width.max(self.height))
    }
}

// =============================================================================
// Vars
// =============================================================================

/// Complete set of design variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vars {
    /// Named colors
    pub colors: ColorTable,
    /// Font families
    pub fonts: FontTable,
    /// Frame dimensions
    pub frame: FrameSize,
    /// Icon collection name
    pub icons: String,
    /// Unit scale
    pub units: UnitTable,
}

impl Default for Vars {
    fn default() -> Self {
        default_vars()
    }
}

impl Vars {
    /// Shallow-merge overrides on top of these vars
    ///
    /// Every table present in `overrides` replaces the corresponding table
    /// wholesale.
    pub fn merge(mut self, overrides: VarsOverrides) -> Self {
        if let Some(colors) = overrides.colors {
            self.colors = colors;
        }
        if let Some(fonts) = overrides.fonts {
            self.fonts = fonts;
        }
        if let Some(frame) = overrides.frame {
            self.frame = frame;
        }
        if let Some(icons) = overrides.icons {
            self.icons = icons;
        }
        if let Some(units) = overrides.units {
            self.units = units;
        }
        self
    }

    /// Look up a color token
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    /// Look up a unit token
    pub fn unit(&self, token: &str) -> Option<Unit> {
        self.units.get(token).copied()
    }

    /// First font registered for the given family key
    pub fn font(&self, family: &str) -> Option<&FontSpec> {
        self.fonts.get(family).and_then(|fonts| fonts.first())
    }

    /// Fonts registered for the `default` family
    pub fn default_fonts(&self) -> &[FontSpec] {
        self.fonts.get("default").map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Partial vars used to build a theme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarsOverrides {
    /// Replacement color table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorTable>,
    /// Replacement font table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontTable>,
    /// Replacement frame size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameSize>,
    /// Replacement icon collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<String>,
    /// Replacement unit table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitTable>,
}

/// Build a UI system from overrides (defaults + overrides)
pub fn create_system(overrides: VarsOverrides) -> Vars {
    default_vars().merge(overrides)
}

// =============================================================================
// Defaults
// =============================================================================

/// Keys of the default unit scale
pub const UNIT_KEYS: &[u32] = &[
    0, 1, 2, 3, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40, 42, 44,
    46, 48, 52, 56, 60, 64, 72, 80, 96, 128, 160, 192, 224, 256,
];

/// Reference width the default unit scale is expressed against
pub const UNIT_BASE: f64 = 1200.0;

const DEFAULT_COLORS: &[(&str, &str)] = &[
    ("background", "#000000"),
    ("background100", "#000000"),
    ("background200", "#191A1C"),
    ("invert", "#ffffff"),
    ("text", "#ffffff"),
    ("text100", "#ffffff"),
    ("text200", "#C2C5CB"),
    ("text300", "#9A9BA1"),
    ("text400", "#78797E"),
    ("gray100", "#1a1a1a"),
    ("gray200", "#1f1f1f"),
    ("gray300", "#292929"),
    ("gray400", "#2e2e2e"),
    ("gray500", "#454545"),
    ("gray600", "#878787"),
    ("gray", "#8f8f8f"),
    ("gray700", "#8f8f8f"),
    ("gray800", "#7d7d7d"),
    ("gray900", "#a1a1a1"),
    ("gray1000", "#ededed"),
    ("blue100", "#06193a"),
    ("blue200", "#06193a"),
    ("blue300", "#012f61"),
    ("blue400", "#003674"),
    ("blue500", "#00418c"),
    ("blue600", "#008fff"),
    ("blue", "#006ffe"),
    ("blue700", "#006ffe"),
    ("blue800", "#005be7"),
    ("blue900", "#47a8ff"),
    ("blue1000", "#ebf6ff"),
    ("red100", "#330a10"),
    ("red200", "#440c13"),
    ("red300", "#5d0e18"),
    ("red400", "#6e101c"),
    ("red500", "#871620"),
    ("red600", "#f22e41"),
    ("red", "#f13342"),
    ("red700", "#f13342"),
    ("red800", "#e2162a"),
    ("red900", "#ff575e"),
    ("red1000", "#ffe9ed"),
    ("amber100", "#2a1700"),
    ("amber200", "#361a00"),
    ("amber300", "#502800"),
    ("amber400", "#5b3000"),
    ("amber500", "#703f00"),
    ("amber600", "#ed9a00"),
    ("amber", "#ffae00"),
    ("amber700", "#ffae00"),
    ("amber800", "#ff9300"),
    ("amber900", "#ff9300"),
    ("amber1000", "#fff2d5"),
    ("green100", "#002608"),
    ("green200", "#00320b"),
    ("green300", "#00390e"),
    ("green400", "#004614"),
    ("green500", "#006717"),
    ("green600", "#00952d"),
    ("green", "#00ac3a"),
    ("green700", "#00ac3a"),
    ("green800", "#009431"),
    ("green900", "#00ca51"),
    ("green1000", "#d8ffe4"),
    ("teal100", "#00231b"),
    ("teal200", "#002b22"),
    ("teal300", "#003d34"),
    ("teal400", "#004036"),
    ("teal500", "#006354"),
    ("teal600", "#009e86"),
    ("teal", "#00aa96"),
    ("teal700", "#00aa96"),
    ("teal800", "#00927f"),
    ("teal900", "#00cfb7"),
    ("teal1000", "#cbfff5"),
    ("purple100", "#2a0c33"),
    ("purple200", "#331141"),
    ("purple300", "#48185e"),
    ("purple400", "#551a76"),
    ("purple500", "#642290"),
    ("purple600", "#9340d5"),
    ("purple", "#9340d5"),
    ("purple700", "#9340d5"),
    ("purple800", "#7e2bbb"),
    ("purple900", "#c372fc"),
    ("purple1000", "#faedff"),
    ("pink100", "#310d1d"),
    ("pink200", "#420d26"),
    ("pink300", "#561033"),
    ("pink400", "#5d0d35"),
    ("pink500", "#75073f"),
    ("pink600", "#ba0056"),
    ("pink", "#f12b82"),
    ("pink700", "#f12b82"),
    ("pink800", "#e7006d"),
    ("pink900", "#ff4c8d"),
    ("pink1000", "#ffe8f4"),
];

fn color_table(entries: &[(&str, &str)]) -> ColorTable {
    entries
        .iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect()
}

/// The default unit scale (`n -> n / 1200`)
pub fn default_units() -> UnitTable {
    UNIT_KEYS
        .iter()
        .map(|key| (key.to_string(), Unit::Scale(f64::from(*key) / UNIT_BASE)))
        .collect()
}

/// The default vars: dark palette, no fonts, 1200x630 frame, lucide icons
pub fn default_vars() -> Vars {
    Vars {
        colors: color_table(DEFAULT_COLORS),
        fonts: FontTable::new(),
        frame: FrameSize::default(),
        icons: "lucide".to_string(),
        units: default_units(),
    }
}

// =============================================================================
// Themes
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Speedball presale theme (Jersey 15, black and white with teal/blue/orange)
    #[default]
    Speedball,
    /// Yeet theme (Poppins, pastel palette)
    Yeet,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Speedball => write!(f, "speedball"),
            ThemeName::Yeet => write!(f, "yeet"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "speedball" => Ok(ThemeName::Speedball),
            "yeet" => Ok(ThemeName::Yeet),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Overrides for the Speedball theme
pub fn speedball_theme() -> VarsOverrides {
    let mut fonts = FontTable::new();
    fonts.insert("default".to_string(), vec![FontSpec::google("Jersey 15", 400)]);

    VarsOverrides {
        colors: Some(color_table(&[
            ("white", "#E6F9F4"),
            ("black", "#000000"),
            ("teal", "#57BCAD"),
            ("blue", "#3B8FF2"),
            ("orange", "#F08643"),
        ])),
        fonts: Some(fonts),
        ..Default::default()
    }
}

/// Overrides for the Yeet theme
pub fn yeet_theme() -> VarsOverrides {
    let mut fonts = FontTable::new();
    fonts.insert(
        "default".to_string(),
        vec![FontSpec::google("Poppins", 900), FontSpec::google("Poppins", 400)],
    );

    VarsOverrides {
        colors: Some(color_table(&[
            ("nipple", "#F098C6"),
            ("diarrhea", "#655C31"),
            ("jaundice", "#FEDB1D"),
            ("banality", "#F9E1A3"),
            ("death", "#000000"),
            ("angel", "#FFFFFF"),
        ])),
        fonts: Some(fonts),
        ..Default::default()
    }
}

/// Get the vars for a theme
pub fn get_vars(name: ThemeName) -> Vars {
    match name {
        ThemeName::Speedball => create_system(speedball_theme()),
        ThemeName::Yeet => create_system(yeet_theme()),
    }
}

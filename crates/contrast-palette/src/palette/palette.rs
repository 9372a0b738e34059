//! The 16-slot palette and its synthesis from a seed color.

use std::ops::Index;

use super::recipe::{recipes, Recipe};
use super::slot::Slot;
use super::theme::ThemeMode;
use crate::color::Color;
use crate::contrast::{contrast_ratio, ensure_contrast};

/// Optional caller-supplied colors that replace parts of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overrides {
    /// Basis for the magenta, cyan and bright-blue slots instead of the seed.
    /// Cyan becomes this color verbatim (after contrast repair).
    pub honor_primary: Option<Color>,
    /// Replaces the theme's default background in slot 0.
    pub background: Option<Color>,
}

/// Measured contrast of one repaired slot against the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotContrast {
    pub slot: Slot,
    pub color: Color,
    pub ratio: f64,
    pub min_ratio: f64,
}

impl SlotContrast {
    /// Whether the slot reached its floor. Repair is best effort, so this
    /// can be false.
    pub fn passes(&self) -> bool {
        self.ratio >= self.min_ratio
    }
}

/// A complete 16-color terminal palette.
///
/// Slot meaning follows ANSI order, see [`Slot`]. A palette is immutable
/// once generated.
///
/// # Example
///
/// ```
/// use contrast_palette::{Color, Overrides, Palette, Slot, ThemeMode};
///
/// let seed: Color = "#3366cc".parse().unwrap();
/// let palette = Palette::generate(seed, ThemeMode::Dark, &Overrides::default());
///
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.get(Slot::Background).to_hex(), "#1a1a1a");
/// assert_eq!(palette[15].to_hex(), "#ffffff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 16],
    mode: ThemeMode,
}

impl Palette {
    /// Number of slots in every palette.
    pub const LEN: usize = 16;

    /// Derive a palette from `seed`.
    ///
    /// Slot 0 is the override background or the theme default. Derived hue
    /// slots are repaired against it (4.5:1 for normal hues, 3:1 for bright
    /// hues). Grays and the foreground are theme constants.
    pub fn generate(seed: Color, mode: ThemeMode, overrides: &Overrides) -> Self {
        let background = overrides
            .background
            .unwrap_or_else(|| mode.default_background());

        let colors = (*recipes(mode)).map(|entry| {
            let (recipe, basis) = match (entry.honored, overrides.honor_primary) {
                (Some(honored), Some(honor)) => (honored, honor),
                _ => (entry.recipe, seed),
            };

            let candidate = match recipe {
                Recipe::Background => background,
                Recipe::Fixed(color) => color,
                Recipe::Derive(derivation) => derivation.apply(basis.to_hsv()),
                Recipe::Verbatim => basis,
            };

            match entry.slot.min_contrast() {
                Some(min_ratio) => ensure_contrast(candidate, background, min_ratio, mode),
                None => candidate,
            }
        });

        Self { colors, mode }
    }

    /// Start a [`PaletteBuilder`] for `seed`.
    pub fn builder(seed: Color) -> PaletteBuilder {
        PaletteBuilder::new(seed)
    }

    #[inline]
    pub fn get(&self, slot: Slot) -> Color {
        self.colors[slot.index()]
    }

    pub fn background(&self) -> Color {
        self.get(Slot::Background)
    }

    pub fn foreground(&self) -> Color {
        self.get(Slot::Foreground)
    }

    /// Theme mode the palette was generated for.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// All colors in slot order.
    pub fn colors(&self) -> &[Color; 16] {
        &self.colors
    }

    /// Always 16.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Iterate `(slot, color)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::ALL.iter().map(move |&slot| (slot, self.get(slot)))
    }

    /// Contrast of every repaired slot against the background.
    ///
    /// Slots without a floor (background, grays, foreground) are omitted.
    pub fn contrast_report(&self) -> Vec<SlotContrast> {
        let background = self.background();
        self.iter()
            .filter_map(|(slot, color)| {
                slot.min_contrast().map(|min_ratio| SlotContrast {
                    slot,
                    color,
                    ratio: contrast_ratio(color, background),
                    min_ratio,
                })
            })
            .collect()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl Index<Slot> for Palette {
    type Output = Color;

    fn index(&self, slot: Slot) -> &Color {
        &self.colors[slot.index()]
    }
}

/// Builder for a [`Palette`].
///
/// ```
/// use contrast_palette::{Color, Palette, Slot};
///
/// let palette = Palette::builder("#3366cc".parse().unwrap())
///     .light(true)
///     .background(Color::BLACK)
///     .build();
/// assert_eq!(palette[Slot::Background], Color::BLACK);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PaletteBuilder {
    seed: Color,
    mode: ThemeMode,
    overrides: Overrides,
}

impl PaletteBuilder {
    pub fn new(seed: Color) -> Self {
        Self {
            seed,
            mode: ThemeMode::default(),
            overrides: Overrides::default(),
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(ThemeMode::Light)` / `mode(ThemeMode::Dark)`.
    #[must_use]
    pub fn light(self, is_light: bool) -> Self {
        self.mode(ThemeMode::from_light_flag(is_light))
    }

    #[must_use]
    pub fn honor_primary(mut self, color: Color) -> Self {
        self.overrides.honor_primary = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.overrides.background = Some(color);
        self
    }

    #[must_use]
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn build(self) -> Palette {
        Palette::generate(self.seed, self.mode, &self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{MIN_CONTRAST_NON_TEXT, MIN_CONTRAST_TEXT};
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn hexes(palette: &Palette) -> Vec<String> {
        palette.colors().iter().map(|c| c.to_hex()).collect()
    }

    #[test]
    fn test_dark_anchors() {
        let palette = Palette::generate(hex("#3366cc"), ThemeMode::Dark, &Overrides::default());
        assert_eq!(palette[0].to_hex(), "#1a1a1a");
        assert_eq!(palette[7].to_hex(), "#abb2bf");
        assert_eq!(palette[8].to_hex(), "#5c6370");
        assert_eq!(palette[15].to_hex(), "#ffffff");
        assert_eq!(palette.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_light_anchors() {
        let palette = Palette::generate(hex("#3366cc"), ThemeMode::Light, &Overrides::default());
        assert_eq!(palette[0].to_hex(), "#f8f8f8");
        assert_eq!(palette[7].to_hex(), "#2e2e2e");
        assert_eq!(palette[8].to_hex(), "#4a4a4a");
        assert_eq!(palette[15].to_hex(), "#1a1a1a");
    }

    #[test]
    fn test_dark_reference_palette() {
        let palette = Palette::generate(hex("#3366cc"), ThemeMode::Dark, &Overrides::default());
        assert_eq!(
            hexes(&palette),
            vec![
                "#1a1a1a", "#db5757", "#5db75b", "#ffda9d", "#6598ff", "#4d88c1", "#8473e7",
                "#abb2bf", "#5c6370", "#e57e7e", "#8be589", "#f2c69d", "#7298e5", "#5ba2e5",
                "#6c83d8", "#ffffff",
            ]
        );
    }

    #[test]
    fn test_light_reference_palette() {
        let palette = Palette::generate(hex("#3366cc"), ThemeMode::Light, &Overrides::default());
        assert_eq!(
            hexes(&palette),
            vec![
                "#f8f8f8", "#d23434", "#207a1e", "#8e5a2a", "#3e6ed0", "#4276a7", "#5f4ad6",
                "#2e2e2e", "#4a4a4a", "#e55b5b", "#298427", "#996535", "#4c87ff", "#3890e5",
                "#7159ff", "#1a1a1a",
            ]
        );
    }

    #[test]
    fn test_background_override() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let overrides = Overrides {
                background: Some(Color::BLACK),
                ..Overrides::default()
            };
            let palette = Palette::generate(hex("#3366cc"), mode, &overrides);
            assert_eq!(palette.background(), Color::BLACK);
            for entry in palette.contrast_report() {
                assert!(
                    entry.passes(),
                    "{:?} only reaches {} against black",
                    entry.slot,
                    entry.ratio
                );
            }
        }
    }

    #[test]
    fn test_honor_primary_replaces_cyan() {
        let honor = hex("#ff00ff");
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let overrides = Overrides {
                honor_primary: Some(honor),
                ..Overrides::default()
            };
            let palette = Palette::generate(hex("#3366cc"), mode, &overrides);
            let bg = palette.background();
            assert_eq!(
                palette[Slot::Cyan],
                ensure_contrast(honor, bg, MIN_CONTRAST_TEXT, mode)
            );
        }
    }

    #[test]
    fn test_honor_primary_dark_reference() {
        let palette = Palette::builder(hex("#3366cc"))
            .honor_primary(hex("#ff00ff"))
            .build();
        assert_eq!(palette[Slot::Magenta].to_hex(), "#dd2cdd");
        assert_eq!(palette[Slot::Cyan].to_hex(), "#ff00ff");
        assert_eq!(palette[Slot::BrightBlue].to_hex(), "#ff00ff");
        // Slots that do not honor the override are unchanged
        let plain = Palette::builder(hex("#3366cc")).build();
        assert_eq!(palette[Slot::Blue], plain[Slot::Blue]);
        assert_eq!(palette[Slot::BrightCyan], plain[Slot::BrightCyan]);
    }

    #[test]
    fn test_honor_primary_light_reference() {
        let palette = Palette::builder(hex("#3366cc"))
            .light(true)
            .honor_primary(hex("#ff00ff"))
            .build();
        assert_eq!(palette[Slot::Magenta].to_hex(), "#c813c8");
        assert_eq!(palette[Slot::Cyan].to_hex(), "#c600c6");
        assert_eq!(palette[Slot::BrightBlue].to_hex(), "#f900f9");
        let plain = Palette::builder(hex("#3366cc")).light(true).build();
        assert_eq!(palette[Slot::Blue], plain[Slot::Blue]);
        assert_eq!(palette[Slot::BrightMagenta], plain[Slot::BrightMagenta]);
    }

    #[test]
    fn test_contrast_report_covers_hue_slots() {
        let palette = Palette::builder(hex("#3366cc")).build();
        let report = palette.contrast_report();
        assert_eq!(report.len(), 12);
        assert!(report[..6].iter().all(|e| e.min_ratio == MIN_CONTRAST_TEXT));
        assert!(report[6..].iter().all(|e| e.min_ratio == MIN_CONTRAST_NON_TEXT));
        assert!(report.iter().all(SlotContrast::passes));
    }

    #[test]
    fn test_iter_pairs_slots_with_colors() {
        let palette = Palette::builder(hex("#3366cc")).light(true).build();
        let pairs: Vec<(Slot, Color)> = palette.iter().collect();
        assert_eq!(pairs.len(), Palette::LEN);
        assert_eq!(pairs[0], (Slot::Background, hex("#f8f8f8")));
        assert_eq!(pairs[15], (Slot::Foreground, hex("#1a1a1a")));
    }
}

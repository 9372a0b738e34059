//! Per-slot derivation table.
//!
//! Each theme has one [`SlotRecipe`] per palette slot. A recipe says how to
//! produce the slot's candidate color from a basis color (the seed, or the
//! honor-primary color for the slots that honor it). Contrast floors live on
//! [`Slot`], so the table only describes color, not legibility.

use super::slot::Slot;
use super::theme::ThemeMode;
use crate::color::{wrap_hue, Color, Hsv};

use Channel as C;
use HueSource::{Basis, Fixed, Offset};

/// Where a derived color takes its hue from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HueSource {
    /// A fixed hue independent of the basis (red, green, yellow)
    Fixed(f64),
    /// The basis color's own hue
    Basis,
    /// The basis hue shifted by a fraction of a turn, wrapped
    Offset(f64),
}

impl HueSource {
    fn resolve(self, basis_hue: f64) -> f64 {
        match self {
            HueSource::Fixed(h) => h,
            HueSource::Basis => basis_hue,
            HueSource::Offset(dh) => wrap_hue(basis_hue + dh),
        }
    }
}

/// A saturation or value formula: `min(max(x * factor, floor), ceiling)`.
///
/// A constant channel is `factor = 0` with the constant as floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Channel {
    factor: f64,
    floor: f64,
    ceiling: f64,
}

impl Channel {
    const fn fixed(x: f64) -> Self {
        Self {
            factor: 0.0,
            floor: x,
            ceiling: f64::INFINITY,
        }
    }

    const fn scaled(factor: f64) -> Self {
        Self {
            factor,
            floor: f64::NEG_INFINITY,
            ceiling: f64::INFINITY,
        }
    }

    const fn at_least(self, floor: f64) -> Self {
        Self { floor, ..self }
    }

    const fn at_most(self, ceiling: f64) -> Self {
        Self { ceiling, ..self }
    }

    fn apply(self, x: f64) -> f64 {
        (x * self.factor).max(self.floor).min(self.ceiling)
    }
}

/// Hue, saturation and value formulas for one derived slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Derivation {
    hue: HueSource,
    saturation: Channel,
    value: Channel,
}

impl Derivation {
    const fn new(hue: HueSource, saturation: Channel, value: Channel) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub(crate) fn apply(&self, basis: Hsv) -> Color {
        Color::from_hsv(Hsv::new(
            self.hue.resolve(basis.h),
            self.saturation.apply(basis.s),
            self.value.apply(basis.v),
        ))
    }
}

/// How a slot's candidate color is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Recipe {
    /// The resolved background (override or theme default)
    Background,
    /// A theme constant
    Fixed(Color),
    /// Computed from the basis color's HSV
    Derive(Derivation),
    /// The basis color itself
    Verbatim,
}

/// Recipe for one slot plus its honor-primary alternative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlotRecipe {
    pub(crate) slot: Slot,
    pub(crate) recipe: Recipe,
    /// Used instead of `recipe`, with the honor color as basis, when an
    /// honor-primary color is supplied.
    pub(crate) honored: Option<Recipe>,
}

const RED: f64 = 0.0;
const GREEN: f64 = 0.33;
const YELLOW: f64 = 0.08;
const MAGENTA_SHIFT: f64 = -0.03;
const CYAN_SHIFT: f64 = 0.08;
const DARK_BRIGHT_CYAN_SHIFT: f64 = 0.02;

const fn derive(hue: HueSource, saturation: Channel, value: Channel) -> Recipe {
    Recipe::Derive(Derivation::new(hue, saturation, value))
}

const fn entry(slot: Slot, recipe: Recipe) -> SlotRecipe {
    SlotRecipe {
        slot,
        recipe,
        honored: None,
    }
}

const fn honoring(slot: Slot, recipe: Recipe, honored: Recipe) -> SlotRecipe {
    SlotRecipe {
        slot,
        recipe,
        honored: Some(honored),
    }
}

static DARK: [SlotRecipe; 16] = [
    entry(Slot::Background, Recipe::Background),
    entry(Slot::Red, derive(Fixed(RED), C::fixed(0.6), C::fixed(0.8))),
    entry(
        Slot::Green,
        derive(Fixed(GREEN), C::scaled(0.65).at_least(0.5), C::scaled(0.9)),
    ),
    entry(
        Slot::Yellow,
        derive(Fixed(YELLOW), C::scaled(0.5).at_least(0.45), C::scaled(1.4)),
    ),
    entry(
        Slot::Blue,
        derive(Basis, C::scaled(0.8).at_least(0.6), C::scaled(1.6).at_most(1.0)),
    ),
    honoring(
        Slot::Magenta,
        derive(Offset(MAGENTA_SHIFT), C::scaled(0.7).at_least(0.6), C::scaled(0.85)),
        derive(Basis, C::scaled(0.8), C::scaled(0.75)),
    ),
    honoring(
        Slot::Cyan,
        derive(
            Offset(CYAN_SHIFT),
            C::scaled(0.6).at_least(0.5),
            C::scaled(1.25).at_most(0.85),
        ),
        Recipe::Verbatim,
    ),
    entry(Slot::Gray, Recipe::Fixed(ThemeMode::Dark.grays()[0])),
    entry(Slot::DimGray, Recipe::Fixed(ThemeMode::Dark.grays()[1])),
    entry(Slot::BrightRed, derive(Fixed(RED), C::fixed(0.45), C::fixed(0.9))),
    entry(
        Slot::BrightGreen,
        derive(Fixed(GREEN), C::scaled(0.5).at_least(0.4), C::scaled(1.5).at_most(0.9)),
    ),
    entry(
        Slot::BrightYellow,
        derive(
            Fixed(YELLOW),
            C::scaled(0.4).at_least(0.35),
            C::scaled(1.6).at_most(0.95),
        ),
    ),
    honoring(
        Slot::BrightBlue,
        derive(Basis, C::scaled(0.6).at_least(0.5), C::scaled(1.5).at_most(0.9)),
        derive(Basis, C::scaled(1.2).at_most(1.0), C::scaled(1.1).at_most(1.0)),
    ),
    entry(
        Slot::BrightMagenta,
        derive(
            Offset(MAGENTA_SHIFT),
            C::scaled(0.7).at_least(0.6),
            C::scaled(1.3).at_most(0.9),
        ),
    ),
    entry(
        Slot::BrightCyan,
        derive(
            Offset(DARK_BRIGHT_CYAN_SHIFT),
            C::scaled(0.6).at_least(0.5),
            C::scaled(1.2).at_most(0.85),
        ),
    ),
    entry(Slot::Foreground, Recipe::Fixed(ThemeMode::Dark.foreground())),
];

static LIGHT: [SlotRecipe; 16] = [
    entry(Slot::Background, Recipe::Background),
    entry(Slot::Red, derive(Fixed(RED), C::fixed(0.75), C::fixed(0.85))),
    entry(
        Slot::Green,
        derive(Fixed(GREEN), C::scaled(0.9).at_least(0.75), C::scaled(0.6)),
    ),
    entry(
        Slot::Yellow,
        derive(Fixed(YELLOW), C::scaled(0.85).at_least(0.7), C::scaled(0.7)),
    ),
    entry(
        Slot::Blue,
        derive(Basis, C::scaled(0.9).at_least(0.7), C::scaled(1.1)),
    ),
    honoring(
        Slot::Magenta,
        derive(Offset(MAGENTA_SHIFT), C::scaled(0.75).at_least(0.6), C::scaled(0.9)),
        derive(Basis, C::scaled(0.9).at_least(0.7), C::scaled(0.85)),
    ),
    honoring(
        Slot::Cyan,
        derive(Offset(CYAN_SHIFT), C::scaled(0.8).at_least(0.65), C::scaled(1.05)),
        Recipe::Verbatim,
    ),
    entry(Slot::Gray, Recipe::Fixed(ThemeMode::Light.grays()[0])),
    entry(Slot::DimGray, Recipe::Fixed(ThemeMode::Light.grays()[1])),
    entry(Slot::BrightRed, derive(Fixed(RED), C::fixed(0.6), C::fixed(0.9))),
    entry(
        Slot::BrightGreen,
        derive(Fixed(GREEN), C::scaled(0.8).at_least(0.7), C::scaled(0.65)),
    ),
    entry(
        Slot::BrightYellow,
        derive(Fixed(YELLOW), C::scaled(0.75).at_least(0.65), C::scaled(0.75)),
    ),
    honoring(
        Slot::BrightBlue,
        derive(Basis, C::scaled(0.8).at_least(0.7), C::scaled(1.3).at_most(1.0)),
        derive(Basis, C::scaled(1.1).at_most(1.0), C::scaled(1.2).at_most(1.0)),
    ),
    entry(
        Slot::BrightMagenta,
        derive(
            Offset(MAGENTA_SHIFT),
            C::scaled(0.9).at_least(0.75),
            C::scaled(1.25).at_most(1.0),
        ),
    ),
    entry(
        Slot::BrightCyan,
        derive(
            Offset(CYAN_SHIFT),
            C::scaled(0.75).at_least(0.65),
            C::scaled(1.25).at_most(1.0),
        ),
    ),
    entry(Slot::Foreground, Recipe::Fixed(ThemeMode::Light.foreground())),
];

/// The slot table for a theme, in index order.
pub(crate) fn recipes(mode: ThemeMode) -> &'static [SlotRecipe; 16] {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

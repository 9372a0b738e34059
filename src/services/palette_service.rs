use contrast_palette::Palette;

use crate::models::GenerateOptions;

/// Generate the palette for `options` and log how repair went.
///
/// Slots that stay below their contrast floor are not an error; they are
/// reported at warn level and printed as generated.
pub fn generate_palette(options: &GenerateOptions) -> Palette {
    tracing::debug!(
        base = %options.base_color,
        mode = %options.mode,
        honor_primary = ?options.honor_primary.map(|c| c.to_hex()),
        background = ?options.background.map(|c| c.to_hex()),
        "Generating palette"
    );

    let palette = Palette::generate(options.base_color, options.mode, &options.overrides());

    for entry in palette.contrast_report() {
        if entry.passes() {
            tracing::trace!(
                slot = entry.slot.name(),
                color = %entry.color,
                ratio = entry.ratio,
                "Slot contrast"
            );
        } else {
            tracing::warn!(
                slot = entry.slot.name(),
                color = %entry.color,
                ratio = entry.ratio,
                min_ratio = entry.min_ratio,
                background = %palette.background(),
                "Contrast repair could not reach the minimum ratio"
            );
        }
    }

    palette
}

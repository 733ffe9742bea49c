use std::path::Path;

use anyhow::Context;
use vecpix_engine::paint::Color;

use crate::scene::Scene;

// ── ConvertConfig ─────────────────────────────────────────────────────────

/// Knobs for [`convert_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    /// Fill for every pixel no shape covers.
    pub background: Color,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { background: Color::WHITE }
    }
}

impl ConvertConfig {
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

// ── entry points ──────────────────────────────────────────────────────────

/// Loads `input`, rasterizes it on a white background and writes a PNG to
/// `output`.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> anyhow::Result<()> {
    convert_with(&ConvertConfig::default(), input, output)
}

/// Like [`convert`] with an explicit configuration.
///
/// The output file is only created once the whole document has been built,
/// so a malformed input never leaves a partial image behind.
pub fn convert_with(
    config: &ConvertConfig,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let doc = vecpix_svg::load_file(input)?;
    let scene = Scene::from_document(&doc)
        .with_context(|| format!("failed to build scene from `{}`", input.display()))?;
    log::debug!(
        "{}: {} top-level shape(s), {}x{}",
        input.display(),
        scene.len(),
        scene.size.width,
        scene.size.height
    );

    let canvas = scene.render(config.background);
    canvas.encode_to_file(output)?;

    log::info!("wrote {} ({}x{})", output.display(), scene.size.width, scene.size.height);
    Ok(())
}

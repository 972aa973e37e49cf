use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    addons::{
        buttons::{ButtonsConfig, NavigationButtons},
        indicators::ToggleIndicators,
        parallax::{ParallaxEffect, ParallaxLayer},
    },
    foundation::{
        core::{ScrollConfig, Size},
        error::{ScrollError, ScrollResult},
    },
    scroll::{controller::ScrollController, viewport::VirtualViewport},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A scroll view described as data: viewport, slides, settings and enabled add-ons.
///
/// Scenes are JSON documents; see [`ScrollScene::from_path`]. Add-on presence is decided here,
/// once, when the controller is built.
pub struct ScrollScene {
    /// Visible window size.
    pub viewport: Size,
    /// Slide sizes in display order.
    pub elements: Vec<Size>,
    /// Scroll settings.
    #[serde(default)]
    pub settings: ScrollConfig,
    /// Previous/next buttons, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_buttons: Option<ButtonsConfig>,
    /// One toggle dot per slide.
    #[serde(default)]
    pub toggle_indicators: bool,
    /// Parallax background layers; empty disables the effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parallax_layers: Vec<ParallaxLayer>,
}

impl ScrollScene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open scene JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check sizes and settings.
    ///
    /// An empty slide list is allowed here; it surfaces as [`ScrollError::NoElements`] when the
    /// controller initializes.
    pub fn validate(&self) -> ScrollResult<()> {
        self.settings.validate()?;
        check_size("viewport", self.viewport)?;
        for (idx, &size) in self.elements.iter().enumerate() {
            check_size(&format!("elements[{idx}]"), size)?;
        }
        for (idx, layer) in self.parallax_layers.iter().enumerate() {
            if !layer.speed.is_finite() || !layer.initial.is_finite() {
                return Err(ScrollError::validation(format!(
                    "parallax_layers[{idx}] must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Build an uninitialized controller over a [`VirtualViewport`] holding this scene.
    pub fn build_controller(&self) -> ScrollResult<ScrollController<VirtualViewport>> {
        self.validate()?;

        let vp = VirtualViewport::new(self.viewport, self.elements.clone());
        let mut builder = ScrollController::builder(self.settings).viewport(vp);
        if let Some(cfg) = self.navigation_buttons {
            builder = builder.navigation_buttons(NavigationButtons::new(cfg));
        }
        if self.toggle_indicators {
            builder = builder.toggle_indicators(ToggleIndicators::new());
        }
        if !self.parallax_layers.is_empty() {
            builder = builder.parallax(ParallaxEffect::new(self.parallax_layers.clone()));
        }
        Ok(builder.build())
    }
}

fn check_size(field: &str, size: Size) -> ScrollResult<()> {
    if !size.is_finite() || size.width < 0.0 || size.height < 0.0 {
        return Err(ScrollError::validation(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;

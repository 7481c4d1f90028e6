//! Functions for loading settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::{Color, PulseParams};
use crate::window::WindowParams;

/// A structure containing configuration data for the engine, which are used
/// to specify the window, the shader and the animated color.
///
/// Every field is optional in the json form; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    /// Path of the combined shader file.
    pub shader: PathBuf,
    /// The color the frame is cleared with.
    pub clear_color: Color<f32>,
    /// The base color uploaded into `uniform`. Its red channel is replaced by
    /// the pulse every frame.
    pub color: Color<f32>,
    /// Name of the vec4 uniform that receives the color.
    pub uniform: String,
    pub pulse: PulseParams,
    /// Runs without a native window or GL context.
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            shader: PathBuf::from("res/shaders/basic.shader"),
            clear_color: Color::black(),
            color: Color::new(0.0, 0.3, 0.8, 1.0),
            uniform: "u_Color".to_owned(),
            pulse: PulseParams::default(),
            headless: false,
        }
    }
}

impl Settings {
    /// Reads settings from a json file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .map_err(|err| err_format!("Failed to open settings {}: {}", path.display(), err))?;

        let settings = serde_json::from_reader(file)?;
        info!("Loaded settings from {}.", path.display());
        Ok(settings)
    }

    /// Parses settings from a json string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::prelude::Vector2;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.shader, PathBuf::from("res/shaders/basic.shader"));
        assert_eq!(settings.uniform, "u_Color");
        assert_eq!(settings.color, Color::new(0.0, 0.3, 0.8, 1.0));
        assert_eq!(settings.pulse, PulseParams::default());
        assert!(!settings.headless);
    }

    #[test]
    fn partial_json() {
        let settings = Settings::from_json(
            r#"{ "window": { "title": "Quad", "size": { "x": 800, "y": 600 } }, "headless": true }"#,
        )
        .unwrap();

        assert_eq!(settings.window.title, "Quad");
        assert_eq!(settings.window.size, Vector2::new(800, 600));
        assert!(settings.window.vsync);
        assert!(settings.headless);
        assert_eq!(settings.uniform, "u_Color");
    }

    #[test]
    fn empty_json() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
        assert!(Settings::from_json("{").is_err());
        assert!(Settings::from_json(r#"{ "headless": "yes" }"#).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(Settings::load("does/not/exist.json").is_err());
    }
}

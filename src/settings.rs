//! Simulation settings
//!
//! Read from LocalStorage on the web and from `hex-bounce.json` natively.
//! Missing keys fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How ball friction relates to the frame delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrictionMode {
    /// Multiply velocity by `friction` once per step, whatever the step length.
    /// Damping over wall-clock time depends on the frame rate.
    #[default]
    PerFrame,
    /// Multiply velocity by `friction^(dt / frame_interval)`.
    /// Same damping per second at any frame rate.
    TimeScaled,
}

/// Simulation and host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Initial viewport width (pixels)
    pub width: u32,
    /// Initial viewport height (pixels)
    pub height: u32,

    // === Hexagon ===
    /// Side length as a fraction of the smaller viewport dimension
    pub side_fraction: f32,
    /// Rotation speed (degrees per second, negative spins the other way)
    pub angular_speed_deg: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch velocity (pixels/s)
    pub initial_velocity: [f32; 2],
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity multiplier in (0, 1]
    pub friction: f32,
    pub friction_mode: FrictionMode,

    // === Frame loop ===
    /// Host tick interval (milliseconds)
    pub frame_interval_ms: u32,
    /// Clamp on the measured frame delta (seconds)
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            side_fraction: HEX_SIDE_FRACTION,
            angular_speed_deg: HEX_ANGULAR_SPEED_DEG,

            ball_radius: BALL_RADIUS,
            initial_velocity: BALL_START_VEL,
            gravity: GRAVITY,
            friction: FRICTION,
            friction_mode: FrictionMode::PerFrame,

            frame_interval_ms: FRAME_INTERVAL_MS,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Settings {
    /// Hexagon rotation speed in radians per second
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed_deg.to_radians()
    }

    /// Host tick interval in seconds
    pub fn frame_interval_secs(&self) -> f32 {
        self.frame_interval_ms as f32 / 1000.0
    }

    pub fn initial_velocity(&self) -> Vec2 {
        Vec2::from(self.initial_velocity)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value is in the range the simulation can use
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            ok: bool,
            field: &'static str,
            value: f32,
            expected: &'static str,
        ) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    value,
                    expected,
                })
            }
        }

        check(self.width > 0, "width", self.width as f32, "a positive size")?;
        check(self.height > 0, "height", self.height as f32, "a positive size")?;
        check(
            self.side_fraction > 0.0 && self.side_fraction <= 0.5,
            "side_fraction",
            self.side_fraction,
            "a value in (0, 0.5]",
        )?;
        check(
            self.angular_speed_deg.is_finite(),
            "angular_speed_deg",
            self.angular_speed_deg,
            "a finite value",
        )?;
        check(
            self.ball_radius.is_finite() && self.ball_radius > 0.0,
            "ball_radius",
            self.ball_radius,
            "a positive value",
        )?;
        for v in self.initial_velocity {
            check(v.is_finite(), "initial_velocity", v, "finite components")?;
        }
        check(self.gravity.is_finite(), "gravity", self.gravity, "a finite value")?;
        check(
            self.friction > 0.0 && self.friction <= 1.0,
            "friction",
            self.friction,
            "a value in (0, 1]",
        )?;
        check(
            self.frame_interval_ms > 0,
            "frame_interval_ms",
            self.frame_interval_ms as f32,
            "a positive interval",
        )?;
        check(
            self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0,
            "max_frame_dt",
            self.max_frame_dt,
            "a positive value",
        )?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "hex_bounce_settings";

    /// Settings file read by the native host
    pub const FILE_NAME: &'static str = "hex-bounce.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Read and validate a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `hex-bounce.json` in the working directory, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::path::Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.friction_mode, FrictionMode::PerFrame);
        assert!((settings.frame_interval_secs() - 0.02).abs() < 1e-6);
        assert!((settings.angular_speed() - std::f32::consts::PI / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 50.0, "friction_mode": "time_scaled" }"#)
            .unwrap();
        assert_eq!(settings.gravity, 50.0);
        assert_eq!(settings.friction_mode, FrictionMode::TimeScaled);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
        assert_eq!(settings.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.angular_speed_deg = -45.0;
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_friction() {
        let err = Settings::from_json(r#"{ "friction": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "friction", .. }));

        let err = Settings::from_json(r#"{ "friction": 1.2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "friction", .. }));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let err = Settings::from_json(r#"{ "side_fraction": 0.8 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "side_fraction", .. }));

        let err = Settings::from_json(r#"{ "ball_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball_radius", .. }));

        let err = Settings::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "width", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_friction_mode_names() {
        assert_eq!(serde_json::to_string(&FrictionMode::PerFrame).unwrap(), r#""per_frame""#);
        let err = Settings::from_json(r#"{ "friction_mode": "TimeScaled" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::load_from("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

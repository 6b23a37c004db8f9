//! Editor tunables, with `ROOMPLAN_*` environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::consts::{
    COLLISION_MARGIN, DOUBLE_TAP_MS, HEIGHT_MAX, HEIGHT_MIN, HEIGHT_PER_PX, HISTORY_CAP,
    OBJECT_BUFFER, ORBIT_SPEED, PLACEMENT_ATTEMPTS, SCALE_MAX, SCALE_MIN, SCALE_PER_PX,
    SEARCH_ANGULAR_STEPS, SEARCH_RADIUS_MAX, SEARCH_RADIUS_MIN, SEARCH_RADIUS_STEP,
    TOUCH_ORBIT_SMOOTHING,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{what} range is inverted: min {min} > max {max}")]
    Range {
        what: &'static str,
        min: f64,
        max: f64,
    },
}

/// Ring search parameters for resolving a colliding wall snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRing {
    pub radius_min: f64,
    pub radius_max: f64,
    pub radius_step: f64,
    pub angular_steps: usize,
}

impl Default for SearchRing {
    fn default() -> Self {
        Self {
            radius_min: SEARCH_RADIUS_MIN,
            radius_max: SEARCH_RADIUS_MAX,
            radius_step: SEARCH_RADIUS_STEP,
            angular_steps: SEARCH_ANGULAR_STEPS,
        }
    }
}

impl SearchRing {
    /// Radii visited, innermost first. Empty when the ring is degenerate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    pub fn radii(&self) -> Vec<f64> {
        let steps_outward = self.radius_step > 0.0;
        if !steps_outward || self.radius_max < self.radius_min {
            return Vec::new();
        }
        let rings = ((self.radius_max - self.radius_min) / self.radius_step).round() as usize;
        (0..=rings)
            .map(|i| self.radius_min + i as f64 * self.radius_step)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Fallback wall buffer for types without footprint data.
    pub object_buffer: f64,
    /// Clearance added to half-extents in collision checks.
    pub collision_margin: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    pub height_min: f64,
    /// Elevation cap for types without an override.
    pub height_max: f64,
    pub history_cap: usize,
    /// Roll a drag back to its start when it ends colliding.
    pub prevent_collision: bool,
    pub placement_attempts: usize,
    pub search_ring: SearchRing,
    pub double_tap_ms: f64,
    pub scale_per_px: f64,
    pub height_per_px: f64,
    pub orbit_speed: f64,
    pub touch_orbit_smoothing: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            object_buffer: OBJECT_BUFFER,
            collision_margin: COLLISION_MARGIN,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            height_min: HEIGHT_MIN,
            height_max: HEIGHT_MAX,
            history_cap: HISTORY_CAP,
            prevent_collision: true,
            placement_attempts: PLACEMENT_ATTEMPTS,
            search_ring: SearchRing::default(),
            double_tap_ms: DOUBLE_TAP_MS,
            scale_per_px: SCALE_PER_PX,
            height_per_px: HEIGHT_PER_PX,
            orbit_speed: ORBIT_SPEED,
            touch_orbit_smoothing: TOUCH_ORBIT_SMOOTHING,
        }
    }
}

impl EditorConfig {
    /// Defaults overlaid with environment variables.
    ///
    /// Recognised (all optional):
    /// - `ROOMPLAN_OBJECT_BUFFER`, `ROOMPLAN_COLLISION_MARGIN`
    /// - `ROOMPLAN_SCALE_MIN`, `ROOMPLAN_SCALE_MAX`
    /// - `ROOMPLAN_HEIGHT_MIN`, `ROOMPLAN_HEIGHT_MAX`
    /// - `ROOMPLAN_HISTORY_CAP`, `ROOMPLAN_PLACEMENT_ATTEMPTS`
    /// - `ROOMPLAN_PREVENT_COLLISION`: `true` / `false`
    ///
    /// # Errors
    ///
    /// `Invalid` when a variable is set but does not parse, `Range` when a
    /// min/max pair ends up inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`EditorConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            object_buffer: parse_var(&lookup, "ROOMPLAN_OBJECT_BUFFER", defaults.object_buffer)?,
            collision_margin: parse_var(
                &lookup,
                "ROOMPLAN_COLLISION_MARGIN",
                defaults.collision_margin,
            )?,
            scale_min: parse_var(&lookup, "ROOMPLAN_SCALE_MIN", defaults.scale_min)?,
            scale_max: parse_var(&lookup, "ROOMPLAN_SCALE_MAX", defaults.scale_max)?,
            height_min: parse_var(&lookup, "ROOMPLAN_HEIGHT_MIN", defaults.height_min)?,
            height_max: parse_var(&lookup, "ROOMPLAN_HEIGHT_MAX", defaults.height_max)?,
            history_cap: parse_var(&lookup, "ROOMPLAN_HISTORY_CAP", defaults.history_cap)?,
            prevent_collision: parse_var(
                &lookup,
                "ROOMPLAN_PREVENT_COLLISION",
                defaults.prevent_collision,
            )?,
            placement_attempts: parse_var(
                &lookup,
                "ROOMPLAN_PLACEMENT_ATTEMPTS",
                defaults.placement_attempts,
            )?,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject inverted ranges.
    ///
    /// # Errors
    ///
    /// `Range` naming the first inverted pair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale_min > self.scale_max {
            return Err(ConfigError::Range {
                what: "scale",
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        if self.height_min > self.height_max {
            return Err(ConfigError::Range {
                what: "height",
                min: self.height_min,
                max: self.height_max,
            });
        }
        if self.search_ring.radius_min > self.search_ring.radius_max {
            return Err(ConfigError::Range {
                what: "search ring radius",
                min: self.search_ring.radius_min,
                max: self.search_ring.radius_max,
            });
        }
        Ok(())
    }
}

/// A variable that is set but not valid UTF-8 is logged and read as unset.
fn env_var(key: &'static str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(key, "variable is not UTF-8; using default");
            None
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

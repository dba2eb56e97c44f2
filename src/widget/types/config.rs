//! Die configuration and attribute parsing
//!
//! Hosts describe a die with loosely typed attribute strings (`maxrollvalue="6"`,
//! `bgcolor="teal"`). `DieAttributes::parse` is the only place those strings are
//! interpreted; everything past it works with a validated `DieConfig`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dice::DiceType;
use super::error::{DieError, DieResult};
use super::state::RollBudget;
use crate::widget::geometry::DieShape;

pub const DEFAULT_COLOR_EVEN: &str = "goldenrod";
pub const DEFAULT_COLOR_ODD: &str = "darkgoldenrod";
pub const DEFAULT_DOT_COLOR: &str = "#4b4b4b";
pub const DEFAULT_ROLL_TIME_SECONDS: f64 = 2.0;
/// Longest accepted roll animation, one hour.
pub const MAX_ROLL_TIME_SECONDS: f64 = 3600.0;
pub const DEFAULT_MIN_ROLL: u32 = 1;
pub const DEFAULT_MAX_ROLL: u32 = 20;

// ============================================================================
// Colors
// ============================================================================

/// CSS colors used to paint the die. Stored as written so the host receives
/// exactly what the author configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DieColors {
    pub even: String,
    pub odd: String,
    pub dot: String,
}

impl Default for DieColors {
    fn default() -> Self {
        Self {
            even: DEFAULT_COLOR_EVEN.to_string(),
            odd: DEFAULT_COLOR_ODD.to_string(),
            dot: DEFAULT_DOT_COLOR.to_string(),
        }
    }
}

impl DieColors {
    /// Palette applied once the roll budget is spent.
    pub fn exhausted() -> Self {
        Self {
            even: "rgb(70, 70, 70)".to_string(),
            odd: "rgb(75, 75, 75)".to_string(),
            dot: "rgb(155, 155, 155)".to_string(),
        }
    }

    pub fn validate(&self) -> DieResult<()> {
        for (attribute, value) in [
            ("bgcoloreven", &self.even),
            ("bgcolorodd", &self.odd),
            ("dotcolor", &self.dot),
        ] {
            if csscolorparser::parse(value).is_err() {
                return Err(DieError::invalid_color(attribute, value.as_str()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Config
// ============================================================================

/// Validated, immutable configuration for one die.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DieConfig {
    pub min_roll: u32,
    /// Inclusive upper bound; also selects the die geometry
    pub max_roll: u32,
    pub allowed_rolls: RollBudget,
    /// Seconds one roll animation takes
    pub roll_time: f64,
    /// Face shown before the first roll
    pub initial_value: u32,
    pub colors: DieColors,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self {
            min_roll: DEFAULT_MIN_ROLL,
            max_roll: DEFAULT_MAX_ROLL,
            allowed_rolls: RollBudget::default(),
            roll_time: DEFAULT_ROLL_TIME_SECONDS,
            initial_value: 0,
            colors: DieColors::default(),
        }
    }
}

impl DieConfig {
    /// Standard `1..=faces` configuration for a named die.
    pub fn for_dice(dice: DiceType) -> Self {
        Self {
            max_roll: dice.max_value(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> DieResult<()> {
        if self.min_roll > self.max_roll {
            return Err(DieError::InvertedRange {
                min: self.min_roll,
                max: self.max_roll,
            });
        }
        if !self.roll_time.is_finite() || self.roll_time <= 0.0 {
            return Err(DieError::InvalidRollTime(self.roll_time));
        }
        if self.roll_time > MAX_ROLL_TIME_SECONDS {
            return Err(DieError::RollTimeTooLong(self.roll_time));
        }
        self.colors.validate()
    }

    pub fn shape(&self) -> DieShape {
        DieShape::for_max_roll(self.max_roll)
    }

    /// Pull a face value into `[min_roll, max_roll]`.
    pub fn clamp_face(&self, value: u32) -> u32 {
        value.clamp(self.min_roll, self.max_roll)
    }

    pub fn roll_time_millis(&self) -> u64 {
        (self.roll_time * 1000.0).round() as u64
    }

    pub fn from_ron_str(s: &str) -> DieResult<Self> {
        let config: DieConfig = ron::de::from_str(s).map_err(|e| DieError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> DieResult<Self> {
        let config: DieConfig =
            serde_json::from_str(s).map_err(|e| DieError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a preset file. `.ron` files are read as RON, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> DieResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_ron = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ron"));

        if is_ron {
            Self::from_ron_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    pub fn to_ron_string(&self) -> DieResult<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| DieError::serde(e.to_string()))
    }

    pub fn to_json_string(&self) -> DieResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DieError::serde(e.to_string()))
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// Raw attribute values as a host element carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DieAttributes {
    pub bgcoloreven: Option<String>,
    pub bgcolorodd: Option<String>,
    pub bgcolor: Option<String>,
    pub dotcolor: Option<String>,
    pub time: Option<String>,
    pub initialvalue: Option<String>,
    pub allowedrolls: Option<String>,
    pub minrollvalue: Option<String>,
    pub maxrollvalue: Option<String>,
}

impl DieAttributes {
    pub const NAMES: [&'static str; 9] = [
        "bgcoloreven",
        "bgcolorodd",
        "bgcolor",
        "dotcolor",
        "time",
        "initialvalue",
        "allowedrolls",
        "minrollvalue",
        "maxrollvalue",
    ];

    /// Read every known attribute through `get` (e.g. `Element::get_attribute`).
    pub fn from_lookup(mut get: impl FnMut(&str) -> Option<String>) -> Self {
        let mut attributes = Self::default();
        for name in Self::NAMES {
            if let Some(value) = get(name) {
                attributes.set(name, value);
            }
        }
        attributes
    }

    /// Attributes that parse back into `config`.
    pub fn from_config(config: &DieConfig) -> Self {
        Self {
            bgcoloreven: Some(config.colors.even.clone()),
            bgcolorodd: Some(config.colors.odd.clone()),
            bgcolor: None,
            dotcolor: Some(config.colors.dot.clone()),
            time: Some(config.roll_time.to_string()),
            initialvalue: Some(config.initial_value.to_string()),
            allowedrolls: Some(config.allowed_rolls.to_string()),
            minrollvalue: Some(config.min_roll.to_string()),
            maxrollvalue: Some(config.max_roll.to_string()),
        }
    }

    /// Set an attribute by name. Returns false for names the die doesn't know.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name.to_ascii_lowercase().as_str() {
            "bgcoloreven" => &mut self.bgcoloreven,
            "bgcolorodd" => &mut self.bgcolorodd,
            "bgcolor" => &mut self.bgcolor,
            "dotcolor" => &mut self.dotcolor,
            "time" => &mut self.time,
            "initialvalue" => &mut self.initialvalue,
            "allowedrolls" => &mut self.allowedrolls,
            "minrollvalue" => &mut self.minrollvalue,
            "maxrollvalue" => &mut self.maxrollvalue,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Coerce the attribute strings into a validated configuration.
    ///
    /// Blank values count as unset. `bgcolor` is the fallback for both face
    /// colors when the specific one is missing.
    pub fn parse(&self) -> DieResult<DieConfig> {
        let defaults = DieConfig::default();

        let even = present(&self.bgcoloreven)
            .or_else(|| present(&self.bgcolor))
            .unwrap_or(DEFAULT_COLOR_EVEN);
        let odd = present(&self.bgcolorodd)
            .or_else(|| present(&self.bgcolor))
            .unwrap_or(DEFAULT_COLOR_ODD);
        let dot = present(&self.dotcolor).unwrap_or(DEFAULT_DOT_COLOR);

        let roll_time = match present(&self.time) {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|_| DieError::invalid_number("time", raw))?,
            None => defaults.roll_time,
        };

        let allowed_rolls = match present(&self.allowedrolls) {
            Some(raw) => parse_budget(raw)?,
            None => defaults.allowed_rolls,
        };

        let config = DieConfig {
            min_roll: parse_face("minrollvalue", &self.minrollvalue, defaults.min_roll)?,
            max_roll: parse_face("maxrollvalue", &self.maxrollvalue, defaults.max_roll)?,
            allowed_rolls,
            roll_time,
            initial_value: parse_face("initialvalue", &self.initialvalue, defaults.initial_value)?,
            colors: DieColors {
                even: even.to_string(),
                odd: odd.to_string(),
                dot: dot.to_string(),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_face(attribute: &str, value: &Option<String>, default: u32) -> DieResult<u32> {
    match present(value) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| DieError::invalid_number(attribute, raw)),
        None => Ok(default),
    }
}

fn parse_budget(raw: &str) -> DieResult<RollBudget> {
    if matches!(
        raw.to_ascii_lowercase().as_str(),
        "unlimited" | "infinity" | "inf"
    ) {
        return Ok(RollBudget::Unlimited);
    }
    let n = raw
        .parse::<i64>()
        .map_err(|_| DieError::invalid_number("allowedrolls", raw))?;
    if n < 0 {
        return Err(DieError::NegativeBudget(n));
    }
    u32::try_from(n)
        .map(RollBudget::Limited)
        .map_err(|_| DieError::invalid_number("allowedrolls", raw))
}

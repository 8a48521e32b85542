//! The preset table: class names and CSS custom-property writes per preset.
//!
//! Every preset drives the same reset/play cycle — remove the animating
//! class, re-add the ready class, force a reflow, then add the animating
//! class — and differs only in which `--lab-*` variables it writes.

use serde::{Deserialize, Serialize};

use crate::config::{FadeDirection, PresetConfig};

/// Named animation behavior with its own CSS variable contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Fade,
    Scale,
    Rotate,
}

impl PresetKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "fade" => Some(PresetKind::Fade),
            "scale" => Some(PresetKind::Scale),
            "rotate" => Some(PresetKind::Rotate),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            PresetKind::Fade => "fade",
            PresetKind::Scale => "scale",
            PresetKind::Rotate => "rotate",
        }
    }

    /// Marker class identifying default targets of this preset.
    pub fn target_class(self) -> &'static str {
        match self {
            PresetKind::Fade => "is-fade",
            PresetKind::Scale => "is-scale",
            PresetKind::Rotate => "is-rotate",
        }
    }

    /// Class holding the element in its pre-animation state.
    pub fn ready_class(self) -> &'static str {
        match self {
            PresetKind::Fade => "is-fade-ready",
            PresetKind::Scale => "is-scale-ready",
            PresetKind::Rotate => "is-rotate-ready",
        }
    }

    /// Class whose addition starts the CSS animation.
    pub fn anim_class(self) -> &'static str {
        match self {
            PresetKind::Fade => "is-fade-animating",
            PresetKind::Scale => "is-scale-animating",
            PresetKind::Rotate => "is-rotate-animating",
        }
    }

    /// Selector used when an entry leaves `target` empty.
    pub fn default_target_selector(self) -> String {
        format!(".{}", self.target_class())
    }
}

/// One CSS custom-property write.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VarWrite {
    pub name: &'static str,
    pub value: String,
}

/// Entrance offset for the fade preset: direction plus absolute distance.
pub fn resolve_fade_xy(direction: FadeDirection, distance: f64) -> (f64, f64) {
    let d = if distance.is_finite() {
        distance.abs()
    } else {
        0.0
    };
    match direction {
        FadeDirection::Left => (-d, 0.0),
        FadeDirection::Right => (d, 0.0),
        FadeDirection::Top => (0.0, -d),
        FadeDirection::Bottom => (0.0, d),
    }
}

/// Format a numeric var the way hosts expect: integral values without a
/// fractional part.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// All `--lab-*` writes for one normalized config.
pub fn var_writes(config: &PresetConfig) -> Vec<VarWrite> {
    let mut writes = Vec::with_capacity(7);
    match config {
        PresetConfig::Fade(c) => {
            let (x, y) = resolve_fade_xy(c.direction, c.distance);
            push_shared(&mut writes, c.duration, c.delay, &c.easing, c.opacity);
            writes.push(VarWrite {
                name: "--lab-play-count",
                value: c.play_count.css_value(),
            });
            writes.push(VarWrite {
                name: "--lab-x",
                value: format!("{}px", fmt_num(x)),
            });
            writes.push(VarWrite {
                name: "--lab-y",
                value: format!("{}px", fmt_num(y)),
            });
        }
        PresetConfig::Scale(c) => {
            push_shared(&mut writes, c.duration, c.delay, &c.easing, c.opacity);
            writes.push(VarWrite {
                name: "--lab-play-count",
                value: c.play_count.css_value(),
            });
            writes.push(VarWrite {
                name: "--lab-from-scale",
                value: fmt_num(c.from_scale),
            });
        }
        PresetConfig::Rotate(c) => {
            push_shared(&mut writes, c.duration, c.delay, &c.easing, c.opacity);
            writes.push(VarWrite {
                name: "--lab-play-count",
                value: c.play_count.css_value(),
            });
            writes.push(VarWrite {
                name: "--lab-from-rotate",
                value: format!("{}deg", fmt_num(c.from_deg)),
            });
        }
    }
    writes
}

fn push_shared(writes: &mut Vec<VarWrite>, duration: f64, delay: f64, easing: &str, opacity: f64) {
    writes.push(VarWrite {
        name: "--lab-duration",
        value: format!("{}ms", fmt_num(duration)),
    });
    writes.push(VarWrite {
        name: "--lab-delay",
        value: format!("{}ms", fmt_num(delay)),
    });
    writes.push(VarWrite {
        name: "--lab-easing",
        value: easing.to_string(),
    });
    writes.push(VarWrite {
        name: "--lab-opacity",
        value: fmt_num(opacity),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FadeConfig;
    use serde_json::json;

    #[test]
    fn fade_xy_by_direction() {
        assert_eq!(resolve_fade_xy(FadeDirection::Left, 16.0), (-16.0, 0.0));
        assert_eq!(resolve_fade_xy(FadeDirection::Right, -16.0), (16.0, 0.0));
        assert_eq!(resolve_fade_xy(FadeDirection::Top, 8.0), (0.0, -8.0));
        assert_eq!(resolve_fade_xy(FadeDirection::Bottom, 8.0), (0.0, 8.0));
    }

    #[test]
    fn fade_writes_carry_offset_vars() {
        let cfg = PresetConfig::Fade(FadeConfig::from_raw(&json!({
            "direction": "top",
            "duration": 600,
            "distance": 16
        })));
        let writes = var_writes(&cfg);
        let get = |name: &str| {
            writes
                .iter()
                .find(|w| w.name == name)
                .map(|w| w.value.clone())
        };
        assert_eq!(get("--lab-duration").as_deref(), Some("600ms"));
        assert_eq!(get("--lab-x").as_deref(), Some("0px"));
        assert_eq!(get("--lab-y").as_deref(), Some("-16px"));
    }
}

#![allow(dead_code)]
//! CSS easing strings: parsing, the named-easing catalog, and curve sampling.
//!
//! The docs UI offers a menu of named easings (standard, emphasized, the
//! power family with in/out/inOut variants, steps, custom); this module
//! resolves a menu choice to a CSS easing string and derives the menu choice
//! back from an arbitrary string. Curve sampling uses the cubic-bezier basis
//! for preview graphs.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EASING: &str = "cubic-bezier(0.2, 0.8, 0.2, 1)";

/// Cubic-bezier timing control points (x1, y1, x2, y2).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPosition {
    Start,
    End,
}

/// A `steps(n, start|end)` easing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steps {
    pub count: u32,
    pub position: StepPosition,
}

/// Parse `cubic-bezier(x1, y1, x2, y2)`. Whitespace-tolerant,
/// case-insensitive on the function name.
pub fn parse_cubic_bezier(value: &str) -> Option<Bezier> {
    let v = value.trim();
    let lower = v.to_ascii_lowercase();
    let rest = lower.strip_prefix("cubic-bezier(")?;
    let inner = rest.strip_suffix(')')?;
    let mut nums = [0.0f32; 4];
    let mut parts = inner.split(',');
    for slot in nums.iter_mut() {
        *slot = parts.next()?.trim().parse::<f32>().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    if nums.iter().any(|n| !n.is_finite()) {
        return None;
    }
    Some(Bezier {
        x1: nums[0],
        y1: nums[1],
        x2: nums[2],
        y2: nums[3],
    })
}

/// Parse `steps(n, start|end)`. The count must be a positive integer.
pub fn parse_steps(value: &str) -> Option<Steps> {
    let v = value.trim();
    let lower = v.to_ascii_lowercase();
    let rest = lower.strip_prefix("steps(")?;
    let inner = rest.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let count: u32 = parts.next()?.trim().parse().ok()?;
    if count == 0 {
        return None;
    }
    let position = match parts.next()?.trim() {
        "start" => StepPosition::Start,
        "end" => StepPosition::End,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Steps { count, position })
}

/// Map an easing string to bezier control points: named keywords first, then
/// `cubic-bezier(...)`. Empty input maps to the default easing; `steps(...)`
/// and anything unrecognized return None.
pub fn easing_to_bezier(value: &str) -> Option<Bezier> {
    let v = value.trim();
    if v.is_empty() {
        return parse_cubic_bezier(DEFAULT_EASING);
    }
    match v {
        "linear" => Some(Bezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        }),
        "ease" => Some(Bezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        }),
        "ease-in" => Some(Bezier {
            x1: 0.42,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        }),
        "ease-out" => Some(Bezier {
            x1: 0.0,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        }),
        "ease-in-out" => Some(Bezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        }),
        other => parse_cubic_bezier(other),
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Eased progress at time fraction `t`, inverting the x bezier via binary
/// search. Bezier(0,0,1,1) short-circuits to linear.
pub fn ease_at(bez: &Bezier, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if bez.x1 == 0.0 && bez.y1 == 0.0 && bez.x2 == 1.0 && bez.y2 == 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, bez.x1, bez.x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, bez.y1, bez.y2, 1.0, mid)
}

/// Sample the curve as (x, y) pairs for preview graphs.
pub fn sample_curve(bez: &Bezier, samples: usize) -> Vec<[f32; 2]> {
    let samples = samples.max(1);
    let mut pts = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        let x = cubic_bezier(0.0, bez.x1, bez.x2, 1.0, t);
        let y = cubic_bezier(0.0, bez.y1, bez.y2, 1.0, t);
        pts.push([x, y]);
    }
    pts
}

/// in/out/inOut variant of a typed easing family.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EaseType {
    In,
    #[default]
    Out,
    InOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FamilyKind {
    /// One fixed CSS value.
    Single(&'static str),
    /// in/out/inOut variants.
    Typed {
        ease_in: &'static str,
        ease_out: &'static str,
        ease_in_out: &'static str,
    },
    Steps,
    Custom,
}

pub struct EaseFamily {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FamilyKind,
}

/// The named easing catalog, in menu order. The power families are CSS
/// cubic-bezier approximations.
pub const EASE_FAMILIES: &[EaseFamily] = &[
    EaseFamily {
        id: "standard",
        label: "Standard",
        kind: FamilyKind::Single("cubic-bezier(0.2, 0.8, 0.2, 1)"),
    },
    EaseFamily {
        id: "emphasized",
        label: "Emphasized",
        kind: FamilyKind::Single("cubic-bezier(0.2, 0, 0, 1)"),
    },
    EaseFamily {
        id: "linear",
        label: "linear",
        kind: FamilyKind::Single("linear"),
    },
    EaseFamily {
        id: "ease",
        label: "ease",
        kind: FamilyKind::Typed {
            ease_in: "ease-in",
            ease_out: "ease-out",
            ease_in_out: "ease-in-out",
        },
    },
    EaseFamily {
        id: "power1",
        label: "power1",
        kind: FamilyKind::Typed {
            ease_in: "cubic-bezier(0.55, 0.085, 0.68, 0.53)",
            ease_out: "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            ease_in_out: "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
        },
    },
    EaseFamily {
        id: "power2",
        label: "power2",
        kind: FamilyKind::Typed {
            ease_in: "cubic-bezier(0.895, 0.03, 0.685, 0.22)",
            ease_out: "cubic-bezier(0.165, 0.84, 0.44, 1)",
            ease_in_out: "cubic-bezier(0.77, 0, 0.175, 1)",
        },
    },
    EaseFamily {
        id: "power3",
        label: "power3",
        kind: FamilyKind::Typed {
            ease_in: "cubic-bezier(0.755, 0.05, 0.855, 0.06)",
            ease_out: "cubic-bezier(0.23, 1, 0.32, 1)",
            ease_in_out: "cubic-bezier(0.86, 0, 0.07, 1)",
        },
    },
    EaseFamily {
        id: "power4",
        label: "power4",
        kind: FamilyKind::Typed {
            ease_in: "cubic-bezier(0.95, 0.05, 0.795, 0.035)",
            ease_out: "cubic-bezier(0.19, 1, 0.22, 1)",
            ease_in_out: "cubic-bezier(1, 0, 0, 1)",
        },
    },
    EaseFamily {
        id: "steps",
        label: "steps",
        kind: FamilyKind::Steps,
    },
    EaseFamily {
        id: "custom",
        label: "Custom",
        kind: FamilyKind::Custom,
    },
];

pub fn family(id: &str) -> Option<&'static EaseFamily> {
    EASE_FAMILIES.iter().find(|f| f.id == id)
}

/// A menu selection, resolvable to a CSS easing string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EaseChoice {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease_type: Option<EaseType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Steps>,
}

impl EaseChoice {
    pub fn single(family: &str) -> Self {
        Self {
            family: family.to_string(),
            ease_type: None,
            steps: None,
        }
    }
}

/// Resolve a menu choice to a CSS easing value. `current` is kept for the
/// custom family; an unknown family resolves to the default easing.
pub fn resolve_choice(choice: &EaseChoice, current: &str) -> String {
    let Some(fam) = family(&choice.family) else {
        return DEFAULT_EASING.to_string();
    };
    match fam.kind {
        FamilyKind::Single(value) => value.to_string(),
        FamilyKind::Typed {
            ease_in,
            ease_out,
            ease_in_out,
        } => match choice.ease_type.unwrap_or_default() {
            EaseType::In => ease_in.to_string(),
            EaseType::Out => ease_out.to_string(),
            EaseType::InOut => ease_in_out.to_string(),
        },
        FamilyKind::Steps => {
            let steps = choice.steps.unwrap_or(Steps {
                count: 8,
                position: StepPosition::End,
            });
            let pos = match steps.position {
                StepPosition::Start => "start",
                StepPosition::End => "end",
            };
            format!("steps({}, {})", steps.count.max(1), pos)
        }
        FamilyKind::Custom => {
            let cur = current.trim();
            if cur.is_empty() {
                DEFAULT_EASING.to_string()
            } else {
                cur.to_string()
            }
        }
    }
}

/// Derive the menu choice an easing string corresponds to. Unmatched
/// non-empty strings are `custom`; empty input is `standard`.
pub fn derive_choice(value: &str) -> EaseChoice {
    let v = value.trim();
    if v.is_empty() {
        return EaseChoice::single("standard");
    }
    for fam in EASE_FAMILIES {
        match fam.kind {
            FamilyKind::Single(fixed) if fixed == v => return EaseChoice::single(fam.id),
            FamilyKind::Typed {
                ease_in,
                ease_out,
                ease_in_out,
            } => {
                let ease_type = if v == ease_in {
                    Some(EaseType::In)
                } else if v == ease_out {
                    Some(EaseType::Out)
                } else if v == ease_in_out {
                    Some(EaseType::InOut)
                } else if fam.id == "ease" && v == "ease" {
                    // bare `ease` is treated as the family's out variant
                    Some(EaseType::Out)
                } else {
                    None
                };
                if let Some(t) = ease_type {
                    return EaseChoice {
                        family: fam.id.to_string(),
                        ease_type: Some(t),
                        steps: None,
                    };
                }
            }
            FamilyKind::Steps => {
                if let Some(steps) = parse_steps(v) {
                    return EaseChoice {
                        family: "steps".to_string(),
                        ease_type: None,
                        steps: Some(steps),
                    };
                }
            }
            _ => {}
        }
    }
    EaseChoice::single("custom")
}

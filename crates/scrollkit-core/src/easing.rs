//! Easing curves for scroll animations
//!
//! Pure functions mapping animation progress [0, 1] to an eased value
//! [0, 1] with various acceleration profiles.

use std::fmt;
use std::sync::Arc;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The uniform function type the animation driver consumes. Named curves
/// and caller-supplied functions both resolve to this.
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Named easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingCurve {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    #[default]
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl EasingCurve {
    /// Every named curve, in wire-name order.
    pub const ALL: [EasingCurve; 13] = [
        EasingCurve::Linear,
        EasingCurve::EaseInQuad,
        EasingCurve::EaseOutQuad,
        EasingCurve::EaseInOutQuad,
        EasingCurve::EaseInCubic,
        EasingCurve::EaseOutCubic,
        EasingCurve::EaseInOutCubic,
        EasingCurve::EaseInQuart,
        EasingCurve::EaseOutQuart,
        EasingCurve::EaseInOutQuart,
        EasingCurve::EaseInQuint,
        EasingCurve::EaseOutQuint,
        EasingCurve::EaseInOutQuint,
    ];

    /// Apply the curve to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseInQuad => t * t,
            EasingCurve::EaseOutQuad => t * (2.0 - t),
            EasingCurve::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    (4.0 - 2.0 * t) * t - 1.0
                }
            }
            EasingCurve::EaseInCubic => t * t * t,
            EasingCurve::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            EasingCurve::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0).powi(2) + 1.0
                }
            }
            EasingCurve::EaseInQuart => t.powi(4),
            EasingCurve::EaseOutQuart => 1.0 - (t - 1.0).powi(4),
            EasingCurve::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            EasingCurve::EaseInQuint => t.powi(5),
            EasingCurve::EaseOutQuint => (t - 1.0).powi(5) + 1.0,
            EasingCurve::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    16.0 * (t - 1.0).powi(5) + 1.0
                }
            }
        }
    }

    /// Stable wire name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::EaseInQuad => "easeInQuad",
            EasingCurve::EaseOutQuad => "easeOutQuad",
            EasingCurve::EaseInOutQuad => "easeInOutQuad",
            EasingCurve::EaseInCubic => "easeInCubic",
            EasingCurve::EaseOutCubic => "easeOutCubic",
            EasingCurve::EaseInOutCubic => "easeInOutCubic",
            EasingCurve::EaseInQuart => "easeInQuart",
            EasingCurve::EaseOutQuart => "easeOutQuart",
            EasingCurve::EaseInOutQuart => "easeInOutQuart",
            EasingCurve::EaseInQuint => "easeInQuint",
            EasingCurve::EaseOutQuint => "easeOutQuint",
            EasingCurve::EaseInOutQuint => "easeInOutQuint",
        }
    }
}

/// Lenient name lookup: any unrecognized name maps to `Linear`.
impl From<&str> for EasingCurve {
    fn from(name: &str) -> Self {
        match name {
            "linear" => EasingCurve::Linear,
            "easeInQuad" => EasingCurve::EaseInQuad,
            "easeOutQuad" => EasingCurve::EaseOutQuad,
            "easeInOutQuad" => EasingCurve::EaseInOutQuad,
            "easeInCubic" => EasingCurve::EaseInCubic,
            "easeOutCubic" => EasingCurve::EaseOutCubic,
            "easeInOutCubic" => EasingCurve::EaseInOutCubic,
            "easeInQuart" => EasingCurve::EaseInQuart,
            "easeOutQuart" => EasingCurve::EaseOutQuart,
            "easeInOutQuart" => EasingCurve::EaseInOutQuart,
            "easeInQuint" => EasingCurve::EaseInQuint,
            "easeOutQuint" => EasingCurve::EaseOutQuint,
            "easeInOutQuint" => EasingCurve::EaseInOutQuint,
            _ => EasingCurve::Linear,
        }
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for EasingCurve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

// Deserialization never fails on an unknown curve name; it falls back to
// Linear with the rest of the lenient name lookup.
impl<'de> Deserialize<'de> for EasingCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = EasingCurve;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an easing curve name")
            }

            fn visit_str<E>(self, value: &str) -> Result<EasingCurve, E>
            where
                E: de::Error,
            {
                Ok(EasingCurve::from(value))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}

/// Easing selection: a named curve, or a caller-supplied function.
///
/// Custom functions are expected to satisfy `f(0) = 0` and `f(1) = 1`;
/// they are used as-is, without validation. An animation driven by a
/// function that breaks that contract lands short of (or past) its
/// nominal target.
#[derive(Clone)]
pub enum Easing {
    Curve(EasingCurve),
    Custom(EasingFn),
}

impl Easing {
    /// Wrap a closure as a custom easing function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }

    /// Resolve to the uniform function type the driver consumes.
    ///
    /// Custom functions pass through unchanged; named curves dispatch to
    /// their closed-form formula.
    pub fn resolve(&self) -> EasingFn {
        match self {
            Easing::Curve(curve) => {
                let curve = *curve;
                Arc::new(move |t| curve.apply(t))
            }
            Easing::Custom(f) => Arc::clone(f),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Curve(EasingCurve::default())
    }
}

impl From<EasingCurve> for Easing {
    fn from(curve: EasingCurve) -> Self {
        Easing::Curve(curve)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Curve(curve) => f.debug_tuple("Curve").field(curve).finish(),
            Easing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_boundaries() {
        for curve in EasingCurve::ALL {
            assert_eq!(curve.apply(0.0), 0.0, "{} at t=0", curve);
            assert_eq!(curve.apply(1.0), 1.0, "{} at t=1", curve);
        }
    }

    #[test]
    fn test_curve_monotonic() {
        for curve in EasingCurve::ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = curve.apply(t);
                assert!(v >= prev, "{} not monotonic at t={}", curve, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        for curve in [
            EasingCurve::EaseInOutQuad,
            EasingCurve::EaseInOutCubic,
            EasingCurve::EaseInOutQuart,
            EasingCurve::EaseInOutQuint,
        ] {
            assert!((curve.apply(0.5) - 0.5).abs() < 1e-12, "{} at t=0.5", curve);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for curve in EasingCurve::ALL {
            assert_eq!(EasingCurve::from(curve.name()), curve);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_linear() {
        let curve = EasingCurve::from("warpSpeed");
        assert_eq!(curve, EasingCurve::Linear);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(curve.apply(t), EasingCurve::Linear.apply(t));
        }
    }

    #[test]
    fn test_resolve_curve_matches_apply() {
        let f = Easing::Curve(EasingCurve::EaseOutCubic).resolve();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(f(t), EasingCurve::EaseOutCubic.apply(t));
        }
    }

    #[test]
    fn test_resolve_custom_is_identity() {
        let supplied: EasingFn = Arc::new(|t| t * t);
        let resolved = Easing::Custom(Arc::clone(&supplied)).resolve();
        assert!(Arc::ptr_eq(&supplied, &resolved));
    }

    #[test]
    fn test_deserialize_lenient() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingCurve,
        }

        let parsed: Wrapper = toml::from_str("easing = \"easeOutQuint\"").unwrap();
        assert_eq!(parsed.easing, EasingCurve::EaseOutQuint);

        let parsed: Wrapper = toml::from_str("easing = \"not-a-curve\"").unwrap();
        assert_eq!(parsed.easing, EasingCurve::Linear);
    }

    #[test]
    fn test_serialize_wire_name() {
        #[derive(Serialize)]
        struct Wrapper {
            easing: EasingCurve,
        }

        let out = toml::to_string(&Wrapper {
            easing: EasingCurve::EaseInOutCubic,
        })
        .unwrap();
        assert_eq!(out.trim(), "easing = \"easeInOutCubic\"");
    }
}

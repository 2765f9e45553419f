//! Celebration after a shortlink is created: one large burst, then two side
//! cannons firing every frame for a short while. Options are handed to the
//! page's `window.confetti` function; pages without it just skip the effect.

use serde::Serialize;

/// How long the side cannons keep firing, one volley per animation frame.
pub const CANNON_DURATION_MS: f64 = 900.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Origin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Options object for a single `confetti(...)` call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub spread: f64,
    pub origin: Origin,
    pub z_index: u32,
}

pub fn opening_burst() -> ConfettiBurst {
    ConfettiBurst {
        particle_count: 400,
        angle: None,
        spread: 90.0,
        origin: Origin {
            x: None,
            y: Some(0.6),
        },
        z_index: 2,
    }
}

/// Left and right cannons, fired together on every volley.
pub fn side_cannons() -> [ConfettiBurst; 2] {
    let cannon = |angle: f64, x: f64| ConfettiBurst {
        particle_count: 7,
        angle: Some(angle),
        spread: 55.0,
        origin: Origin {
            x: Some(x),
            y: None,
        },
        z_index: 2,
    };
    [cannon(60.0, 0.0), cannon(120.0, 1.0)]
}

/// Whether another volley is due for cannons started at `started_ms`.
pub fn cannons_firing(started_ms: f64, now_ms: f64) -> bool {
    now_ms < started_ms + CANNON_DURATION_MS
}

#[cfg(target_arch = "wasm32")]
pub use browser::throw_confetti;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{ConfettiBurst, cannons_firing, opening_burst, side_cannons};
    use js_sys::{Date, Function, JSON, Reflect};
    use leptos_dom::helpers::request_animation_frame;
    use wasm_bindgen::{JsCast, JsValue};

    /// Fires the celebration. Failures are logged and otherwise ignored.
    pub fn throw_confetti() {
        let Some(confetti) = confetti_function() else {
            tracing::debug!("confetti is not available on this page");
            return;
        };

        fire(&confetti, &opening_burst());

        cannon_volley(confetti, Date::now());
    }

    fn cannon_volley(confetti: Function, started_ms: f64) {
        for burst in side_cannons() {
            fire(&confetti, &burst);
        }
        if cannons_firing(started_ms, Date::now()) {
            request_animation_frame(move || cannon_volley(confetti, started_ms));
        }
    }

    fn confetti_function() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("confetti"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn fire(confetti: &Function, burst: &ConfettiBurst) {
        let options = match serde_json::to_string(burst) {
            Ok(json) => JSON::parse(&json),
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode confetti options");
                return;
            }
        };
        let result = options.and_then(|options| confetti.call1(&JsValue::NULL, &options));
        if let Err(err) = result {
            tracing::warn!(error = ?err, "confetti call failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{cannons_firing, opening_burst, side_cannons};
    use serde_json::json;

    #[test]
    fn opening_burst_serializes_as_confetti_options() {
        assert_eq!(
            serde_json::to_value(opening_burst()).unwrap(),
            json!({
                "particleCount": 400,
                "spread": 90.0,
                "origin": {"y": 0.6},
                "zIndex": 2
            })
        );
    }

    #[test]
    fn side_cannons_fire_from_both_edges() {
        let [left, right] = side_cannons();
        assert_eq!(
            serde_json::to_value(left).unwrap(),
            json!({
                "particleCount": 7,
                "angle": 60.0,
                "spread": 55.0,
                "origin": {"x": 0.0},
                "zIndex": 2
            })
        );
        assert_eq!(right.angle, Some(120.0));
        assert_eq!(right.origin.x, Some(1.0));
    }

    #[test]
    fn cannons_stop_after_the_duration() {
        let started = 10_000.0;
        assert!(cannons_firing(started, started));
        assert!(cannons_firing(started, started + 899.0));
        assert!(!cannons_firing(started, started + 900.0));
        assert!(!cannons_firing(started, started + 5_000.0));
    }
}

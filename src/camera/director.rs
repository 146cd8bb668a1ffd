//! Keyframed camera yaw/zoom curves.
//!
//! Keys come from free-form text, one `frame, value` (or `frame: value`) pair per line.
//! Malformed key sets never fail: they fall back to a neutral camera and report why in
//! [`CameraBuild::status`].

use std::str::FromStr;

pub const ROTATION_RANGE: (f64, f64) = (-85.0, 85.0);
pub const ZOOM_RANGE: (f64, f64) = (0.1, 4.0);

const DEFAULT_ROTATION: f64 = 0.0;
const DEFAULT_ZOOM: f64 = 1.0;

pub const STATUS_OK: &str = "Data construct is fine";

/// Per-output-frame camera curves.
///
/// `rotation` is an extra yaw in degrees about +Z, `zoom` multiplies the fitted scale.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraProfile {
    pub num_frames: usize,
    pub rotation: Vec<f64>,
    pub zoom: Vec<f64>,
}

/// Result of [`CameraProfile::from_keys`].
#[derive(Clone, Debug, PartialEq)]
pub struct CameraBuild {
    pub profile: CameraProfile,
    pub status: String,
}

impl CameraBuild {
    pub fn is_valid(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Default)]
struct ParsedKeys {
    keys: Vec<(usize, f64)>,
    negative: bool,
    overflow: bool,
    out_of_order: bool,
}

fn parse_line(line: &str) -> Option<(i64, f64)> {
    let sep = if line.contains(',') { ',' } else { ':' };
    // Trailing columns after the value are ignored.
    let mut parts = line.split(sep);
    let frame = parts.next()?;
    let value = parts.next()?;
    let frame = i64::from_str(frame.trim()).ok()?;
    let value = f64::from_str(value.trim()).ok()?;
    Some((frame, value))
}

fn parse_keys(text: &str, num_frames: usize, clamp: (f64, f64)) -> ParsedKeys {
    let max_frame = num_frames as i64 - 1;
    let mut parsed = ParsedKeys::default();
    let mut prev_raw: Option<i64> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((raw, value)) = parse_line(line) else {
            tracing::debug!(line, "skipping unparseable camera key");
            continue;
        };

        parsed.negative |= raw < 0;
        parsed.overflow |= raw > max_frame;
        if prev_raw.is_some_and(|p| raw < p) {
            parsed.out_of_order = true;
        }
        prev_raw = Some(raw);

        let frame = raw.clamp(0, max_frame) as usize;
        parsed.keys.push((frame, value.clamp(clamp.0, clamp.1)));
    }

    // Stable sort keeps entry order, so the last duplicate wins the merge.
    parsed.keys.sort_by_key(|&(f, _)| f);
    parsed.keys.dedup_by(|later, earlier| {
        if later.0 == earlier.0 {
            earlier.1 = later.1;
            true
        } else {
            false
        }
    });
    parsed
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

fn build_curve(num_frames: usize, keys: &[(usize, f64)], default: f64) -> Vec<f64> {
    let (Some(&(first_f, first_v)), Some(&(last_f, last_v))) = (keys.first(), keys.last()) else {
        return vec![default; num_frames];
    };

    (0..num_frames)
        .map(|i| {
            if i <= first_f {
                return first_v;
            }
            if i >= last_f {
                return last_v;
            }
            keys.windows(2)
                .find(|w| w[0].0 <= i && i <= w[1].0)
                .map_or(default, |w| {
                    let (f0, v0) = w[0];
                    let (f1, v1) = w[1];
                    let t = (i - f0) as f64 / (f1 - f0) as f64;
                    v0 + (v1 - v0) * t
                })
        })
        .collect()
}

impl CameraProfile {
    /// Neutral camera: no extra yaw, unit zoom.
    pub fn neutral(num_frames: usize) -> Self {
        let n = num_frames.max(1);
        Self {
            num_frames: n,
            rotation: vec![DEFAULT_ROTATION; n],
            zoom: vec![DEFAULT_ZOOM; n],
        }
    }

    /// Build curves from rotation and zoom key text.
    ///
    /// Any negative frame, frame past `num_frames - 1`, or decreasing frame sequence in
    /// either text invalidates both curves.
    pub fn from_keys(num_frames: usize, rotation_text: &str, zoom_text: &str) -> CameraBuild {
        let n = num_frames.max(1);
        let rot = parse_keys(rotation_text, n, ROTATION_RANGE);
        let zoom = parse_keys(zoom_text, n, ZOOM_RANGE);

        let status = if rot.negative || zoom.negative {
            Some("Data construct has an issue, cannot have negative frame numbers".to_string())
        } else if rot.overflow || zoom.overflow {
            Some(format!(
                "Data construct has an issue, check your frame numbers. The maximum frame you can enter is {}",
                n - 1
            ))
        } else if rot.out_of_order || zoom.out_of_order {
            Some("Data construct has an issue, frame numbers not in a sequential order".to_string())
        } else {
            None
        };

        if let Some(status) = status {
            tracing::warn!(%status, "invalid camera keys, using neutral camera");
            return CameraBuild {
                profile: Self::neutral(n),
                status,
            };
        }

        let profile = Self {
            num_frames: n,
            rotation: build_curve(n, &rot.keys, DEFAULT_ROTATION)
                .into_iter()
                .map(round2)
                .collect(),
            zoom: build_curve(n, &zoom.keys, DEFAULT_ZOOM)
                .into_iter()
                .map(round2)
                .collect(),
        };
        CameraBuild {
            profile,
            status: STATUS_OK.to_string(),
        }
    }

    /// Linear yaw sweep from `start_deg` on the first frame to `end_deg` on the last.
    pub fn pan(num_frames: usize, start_deg: f64, end_deg: f64) -> Self {
        let n = num_frames.max(1);
        let rotation = if n == 1 || start_deg == end_deg {
            vec![start_deg; n]
        } else {
            let denom = (n - 1) as f64;
            (0..n)
                .map(|i| start_deg + (end_deg - start_deg) * (i as f64 / denom))
                .collect()
        };
        Self {
            num_frames: n,
            rotation,
            zoom: vec![DEFAULT_ZOOM; n],
        }
    }

    /// Extra yaw in degrees for output frame `i`; frames past the end reuse the last value.
    pub fn rotation_at(&self, i: usize) -> f64 {
        curve_at(&self.rotation, i, DEFAULT_ROTATION)
    }

    /// Zoom multiplier for output frame `i`; non-positive or non-finite values read as 1.
    pub fn zoom_at(&self, i: usize) -> f64 {
        let z = curve_at(&self.zoom, i, DEFAULT_ZOOM);
        if z.is_finite() && z > 0.0 { z } else { DEFAULT_ZOOM }
    }
}

fn curve_at(curve: &[f64], i: usize, default: f64) -> f64 {
    curve
        .get(i)
        .or_else(|| curve.last())
        .copied()
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "../../tests/unit/camera/director.rs"]
mod tests;

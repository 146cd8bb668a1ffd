/// Frame selection policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameMode {
    /// Resample a clamped range to exactly `requested_count` frames.
    #[default]
    SpreadTotalAnimation,
    /// Walk forward from `range_start` by `step`, up to `requested_count` frames.
    RangeStep,
    /// Plain clamped `[range_start, range_end]` stepped by `step`. Unrecognized mode names
    /// deserialize to this.
    #[serde(other)]
    Clamped,
}

/// Frame sampling request, validated against the source's native range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameSampleSpec {
    pub mode: FrameMode,
    pub requested_count: u32,
    pub range_start: i64,
    pub range_end: i64,
    pub step: i64,
}

impl Default for FrameSampleSpec {
    fn default() -> Self {
        Self {
            mode: FrameMode::SpreadTotalAnimation,
            requested_count: 81,
            range_start: 0,
            range_end: 500,
            step: 1,
        }
    }
}

/// Produce the ordered frame numbers to evaluate.
///
/// The result is never empty and every element lies in the native range. An inverted
/// native range collapses to `native_start`.
pub fn compute_frames(spec: &FrameSampleSpec, native_start: i64, native_end: i64) -> Vec<i64> {
    let native_end = native_end.max(native_start);
    let step = spec.step.max(1);
    let clamp = |f: i64| f.clamp(native_start, native_end);

    match spec.mode {
        FrameMode::SpreadTotalAnimation => {
            let (start, end) = if spec.range_end <= spec.range_start {
                tracing::debug!(
                    range_start = spec.range_start,
                    range_end = spec.range_end,
                    "degenerate spread range, using full native range"
                );
                (native_start, native_end)
            } else {
                let start = clamp(spec.range_start);
                (start, clamp(spec.range_end).max(start))
            };
            let candidates = stepped(start, end, step);
            spread(&candidates, spec.requested_count)
        }
        FrameMode::RangeStep => {
            let start = clamp(spec.range_start);
            if spec.range_end < spec.range_start {
                return vec![start];
            }
            let count = spec.requested_count.max(1) as usize;
            let frames: Vec<i64> = std::iter::successors(Some(start), |f| f.checked_add(step))
                .take_while(|&f| f <= native_end)
                .take(count)
                .collect();
            if frames.is_empty() { vec![start] } else { frames }
        }
        FrameMode::Clamped => {
            tracing::debug!(
                range_start = spec.range_start,
                range_end = spec.range_end,
                step,
                "sampling the clamped range"
            );
            let start = clamp(spec.range_start);
            let end = clamp(spec.range_end.max(spec.range_start)).max(start);
            stepped(start, end, step)
        }
    }
}

/// Repeat the last frame until `frames` holds `count` entries.
pub fn pad_to_count<T: Clone>(frames: &mut Vec<T>, count: usize) {
    if let Some(last) = frames.last().cloned() {
        frames.resize(count.max(frames.len()), last);
    }
}

fn stepped(start: i64, end: i64, step: i64) -> Vec<i64> {
    let frames: Vec<i64> = std::iter::successors(Some(start), |f| f.checked_add(step))
        .take_while(|&f| f <= end)
        .collect();
    if frames.is_empty() { vec![start] } else { frames }
}

fn spread(candidates: &[i64], count: u32) -> Vec<i64> {
    let first = candidates[0];
    if count <= 1 {
        return vec![first];
    }
    if candidates.len() == 1 {
        return vec![first; count as usize];
    }

    let last_idx = candidates.len() - 1;
    let denom = f64::from(count - 1);
    (0..count)
        .map(|i| {
            let t = f64::from(i) / denom;
            let idx = (t * last_idx as f64).round_ties_even() as usize;
            candidates[idx.min(last_idx)]
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/frames.rs"]
mod tests;

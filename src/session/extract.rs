use crate::face::synth::synthesize;
use crate::foundation::error::{RigposeError, RigposeResult};
use crate::joints::frame::JointFrame;
use crate::joints::resolver::{JointMapping, resolve_rig};
use crate::rig::source::RigSource;
use crate::sampling::frames::{FrameSampleSpec, compute_frames, pad_to_count};
use crate::session::context::StabilizationContext;

/// 3D result of one clip extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub mapping: JointMapping,
    pub native_range: (i64, i64),
    /// Frame numbers handed to the rig source, before padding.
    pub frame_indices: Vec<i64>,
    pub frames: Vec<JointFrame>,
}

/// Resolves, samples and augments one clip from a [`RigSource`].
///
/// Owns the clip's [`StabilizationContext`]; every [`ExtractionSession::extract`] call
/// starts a new clip and resets it.
pub struct ExtractionSession<S> {
    source: S,
    face: bool,
    ctx: StabilizationContext,
}

impl<S: RigSource> ExtractionSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            face: true,
            ctx: StabilizationContext::new(),
        }
    }

    /// Toggle synthetic face landmarks (on by default).
    pub fn with_face(mut self, face: bool) -> Self {
        self.face = face;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn context(&self) -> &StabilizationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut StabilizationContext {
        &mut self.ctx
    }

    #[tracing::instrument(skip(self), fields(face = self.face))]
    pub fn extract(&mut self, spec: &FrameSampleSpec) -> RigposeResult<Extraction> {
        self.ctx.reset();

        let mapping = resolve_rig(self.source.bone_names());
        let (native_start, native_end) = self.source.native_range();
        let frame_indices = compute_frames(spec, native_start, native_end);
        tracing::info!(
            native_start,
            native_end,
            sampled = frame_indices.len(),
            "sampling clip"
        );

        let mut frames = self.source.sample(&frame_indices, &mapping)?;
        if frames.len() > frame_indices.len() {
            return Err(RigposeError::rig(format!(
                "rig source returned {} frames for {} requested",
                frames.len(),
                frame_indices.len()
            )));
        }

        if self.face {
            frames = frames
                .into_iter()
                .map(|frame| synthesize(frame, &mut self.ctx))
                .collect();
        }

        if frames.is_empty() {
            tracing::warn!("rig source returned no frames, emitting one empty frame");
            frames.push(JointFrame::new());
        } else if frames.len() < spec.requested_count as usize {
            tracing::debug!(
                got = frames.len(),
                requested = spec.requested_count,
                "padding with last frame"
            );
            pad_to_count(&mut frames, spec.requested_count as usize);
        }

        Ok(Extraction {
            mapping,
            native_range: (native_start, native_end),
            frame_indices,
            frames,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/extract.rs"]
mod tests;

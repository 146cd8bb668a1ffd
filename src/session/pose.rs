use std::collections::BTreeMap;

use crate::align::aligner::{AlignmentMode, Coverage, align};
use crate::align::reference::ReferenceBBox;
use crate::foundation::core::Canvas;
use crate::foundation::error::RigposeResult;
use crate::joints::frame::ProjectedFrame;
use crate::projection::project::project;
use crate::projection::view::ViewMode;
use crate::rig::analysis::detect_root_motion;
use crate::rig::source::RigSource;
use crate::sampling::frames::FrameMode;
use crate::session::config::PoseConfig;
use crate::session::extract::ExtractionSession;

/// What happened during one run, for logging and debugging downstream.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostics {
    /// Canonical joint name -> source bone name.
    pub resolved: BTreeMap<String, String>,
    pub unresolved: Vec<String>,
    pub frame_mode: FrameMode,
    pub requested_count: u32,
    pub frame_indices: Vec<i64>,
    pub native_start: i64,
    pub native_end: i64,
    /// The hips travel through the scene; follow framing would hide that travel.
    pub root_motion: bool,
    pub output_frames: usize,
    pub canvas: Canvas,
    pub view: ViewMode,
    /// Clip yaw in radians, present for [`ViewMode::AutoFaceCamera`].
    pub clip_yaw: Option<f64>,
    pub alignment: AlignmentMode,
    pub reference: Option<ReferenceBBox>,
    /// `None` when no alignment was applied.
    pub coverage: Option<Coverage>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PoseOutput {
    pub frames: Vec<ProjectedFrame>,
    pub diagnostics: Diagnostics,
}

/// Runs the full rig -> 2D pose pipeline under one validated [`PoseConfig`].
#[derive(Clone, Debug)]
pub struct PoseSession {
    config: PoseConfig,
}

impl PoseSession {
    pub fn new(config: PoseConfig) -> RigposeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    /// Resolve, sample, synthesize, project and align one clip.
    #[tracing::instrument(skip_all, fields(view = ?self.config.view, alignment = ?self.config.alignment))]
    pub fn run<S: RigSource>(
        &self,
        source: S,
        reference: Option<&ReferenceBBox>,
    ) -> RigposeResult<PoseOutput> {
        let cfg = &self.config;
        let mut extraction = ExtractionSession::new(source).with_face(cfg.face);
        let extracted = extraction.extract(&cfg.frames)?;
        let root_motion = detect_root_motion(extraction.source(), &extracted.mapping)?;
        if root_motion && !cfg.global_framing {
            tracing::info!("root motion detected; follow framing keeps the figure centered");
        }

        let ctx = extraction.context_mut();
        let projected = project(&extracted.frames, &cfg.projection(), ctx)?;
        let clip_yaw = ctx.clip_yaw();

        let aligned = align(projected, reference, cfg.alignment);
        if reference.is_some() && cfg.alignment != AlignmentMode::Off && aligned.coverage.is_none() {
            tracing::warn!("reference supplied but clip was left unaligned");
        }

        let diagnostics = Diagnostics {
            resolved: extracted.mapping.resolved_names(),
            unresolved: extracted
                .mapping
                .unresolved()
                .iter()
                .map(|j| j.name().to_string())
                .collect(),
            frame_mode: cfg.frames.mode,
            requested_count: cfg.frames.requested_count,
            frame_indices: extracted.frame_indices,
            native_start: extracted.native_range.0,
            native_end: extracted.native_range.1,
            root_motion,
            output_frames: aligned.frames.len(),
            canvas: cfg.canvas,
            view: cfg.view,
            clip_yaw,
            alignment: cfg.alignment,
            reference: reference.copied(),
            coverage: aligned.coverage,
        };
        tracing::info!(
            frames = diagnostics.output_frames,
            resolved = diagnostics.resolved.len(),
            coverage = ?diagnostics.coverage,
            "pose run complete"
        );

        Ok(PoseOutput {
            frames: aligned.frames,
            diagnostics,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/pose.rs"]
mod tests;

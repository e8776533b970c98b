//! Trajectory rendering.
//!
//! Consumes a finished [`Trajectory`] and persists it either as a single
//! 3-D line plot (PNG) or as an incremental-draw animation (GIF). Rendering
//! is one-shot: any failure surfaces unchanged to the caller and nothing is
//! retried.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use attractor_sim::{OutputKind, Trajectory};

const LINE_COLOR: RGBColor = RGBColor(102, 51, 153); // rebeccapurple
const IMAGE_SIZE: (u32, u32) = (1024, 768);
const ANIMATION_SIZE: (u32, u32) = (640, 480);
const FRAME_DELAY_MS: u32 = 33; // ~30 fps

/// File extension of the artifact produced for `kind`.
pub fn extension(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Image => "png",
        OutputKind::Animation => "gif",
    }
}

/// Render `traj` as `kind` into `dir`, named `<base_name>.<ext>`.
///
/// Returns the path of the written artifact.
pub fn render(
    traj: &Trajectory,
    kind: OutputKind,
    dir: &Path,
    base_name: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(format!("{}.{}", base_name, extension(kind)));

    match kind {
        OutputKind::Image => render_image(traj, &path)?,
        OutputKind::Animation => render_animation(traj, &path)?,
    }

    Ok(path)
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

fn render_image(traj: &Trajectory, path: &Path) -> Result<()> {
    let [xr, yr, zr] = padded_bounds(traj);

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("failed to clear drawing area: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_3d(xr.0..xr.1, yr.0..yr.1, zr.0..zr.1)
        .map_err(|e| anyhow!("failed to build 3d chart: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            traj.pos.iter().map(|p| (p.x, p.y, p.z)),
            &LINE_COLOR,
        ))
        .map_err(|e| anyhow!("failed to draw trajectory: {e}"))?;

    root.present()
        .map_err(|e| anyhow!("failed to write image {}: {e}", path.display()))?;
    Ok(())
}

fn render_animation(traj: &Trajectory, path: &Path) -> Result<()> {
    // Axis bounds come from the whole path so every frame shares one
    // coordinate box and the camera never jumps.
    let [xr, yr, zr] = padded_bounds(traj);

    let root = BitMapBackend::gif(path, ANIMATION_SIZE, FRAME_DELAY_MS)
        .map_err(|e| anyhow!("failed to open gif encoder for {}: {e}", path.display()))?
        .into_drawing_area();

    // One frame per integration step, each drawing the path up to that step.
    for end in 1..traj.len() {
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to clear frame {end}: {e}"))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_3d(xr.0..xr.1, yr.0..yr.1, zr.0..zr.1)
            .map_err(|e| anyhow!("failed to build 3d chart: {e}"))?;

        chart
            .draw_series(LineSeries::new(
                traj.pos[..=end].iter().map(|p| (p.x, p.y, p.z)),
                &LINE_COLOR,
            ))
            .map_err(|e| anyhow!("failed to draw frame {end}: {e}"))?;

        root.present()
            .map_err(|e| anyhow!("failed to encode frame {end}: {e}"))?;
    }

    Ok(())
}

/// Axis bounds with a small margin so degenerate paths still give the
/// chart a non-empty coordinate range.
fn padded_bounds(traj: &Trajectory) -> [(f64, f64); 3] {
    traj.axis_bounds().map(|(lo, hi)| {
        let pad = ((hi - lo) * 0.05).max(1e-3);
        (lo - pad, hi + pad)
    })
}

//! Aspect-ratio preserving placement of content inside a fixed container.
//!
//! The content is scaled uniformly until it spans the full container on one axis (the
//! covering axis) and is centered on the other. Pure geometry: no IO, no logging, no state.

use crate::foundation::core::{Affine, Canvas, Rect, Vec2};
use crate::foundation::error::{MemeError, MemeResult};

/// Scaled size and top-left offset for drawing content into a container without distortion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Drawn width in container units.
    pub width: f64,
    /// Drawn height in container units.
    pub height: f64,
    /// Left edge of the drawn content.
    pub offset_x: f64,
    /// Top edge of the drawn content.
    pub offset_y: f64,
}

impl Placement {
    /// The drawn region as a rectangle in container space.
    pub fn rect(self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.offset_x + self.width,
            self.offset_y + self.height,
        )
    }

    /// Map content pixel space (`0..content_width`, `0..content_height`) onto the placement.
    pub fn content_transform(self, content_width: f64, content_height: f64) -> Affine {
        Affine::translate(Vec2::new(self.offset_x, self.offset_y))
            * Affine::scale_non_uniform(self.width / content_width, self.height / content_height)
    }
}

/// Which container axis the content spans completely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FitBranch {
    /// Content is relatively taller than the container: full height, centered horizontally.
    Portrait,
    /// Content is relatively wider than (or as wide as) the container: full width, centered
    /// vertically.
    Landscape,
}

/// Fit `content_width x content_height` into `container_width x container_height`.
///
/// Content whose aspect ratio is below the container's fills the container height and is
/// centered horizontally; everything else (including an exact aspect match) fills the width and
/// is centered vertically. In a square container this is the `aspect < 1` portrait test.
///
/// Every input must be finite and strictly positive, otherwise
/// [`MemeError::InvalidDimension`] is returned.
pub fn fit(
    container_width: f64,
    container_height: f64,
    content_width: f64,
    content_height: f64,
) -> MemeResult<Placement> {
    check_dimension("container_width", container_width)?;
    check_dimension("container_height", container_height)?;
    check_dimension("content_width", content_width)?;
    check_dimension("content_height", content_height)?;

    let aspect = content_width / content_height;
    let container_aspect = container_width / container_height;
    if !is_positive_finite(aspect) || !is_positive_finite(container_aspect) {
        return Err(MemeError::invalid_dimension(format!(
            "aspect ratio out of range: content {content_width}x{content_height}, container \
             {container_width}x{container_height}"
        )));
    }

    let branch = if aspect < container_aspect {
        FitBranch::Portrait
    } else {
        FitBranch::Landscape
    };
    let placement = place(branch, container_width, container_height, aspect);

    if !is_positive_finite(placement.width) || !is_positive_finite(placement.height) {
        return Err(MemeError::invalid_dimension(format!(
            "content {content_width}x{content_height} degenerates to {}x{} in container \
             {container_width}x{container_height}",
            placement.width, placement.height
        )));
    }
    Ok(placement)
}

/// [`fit`] for integer pixel sizes, with the container given as a [`Canvas`].
pub fn fit_canvas(canvas: Canvas, content_width: u32, content_height: u32) -> MemeResult<Placement> {
    let (cw, ch) = canvas.size_f64();
    fit(cw, ch, f64::from(content_width), f64::from(content_height))
}

pub(crate) fn place(
    branch: FitBranch,
    container_width: f64,
    container_height: f64,
    aspect: f64,
) -> Placement {
    match branch {
        FitBranch::Portrait => {
            let width = container_height * aspect;
            Placement {
                width,
                height: container_height,
                offset_x: (container_width - width) / 2.0,
                offset_y: 0.0,
            }
        }
        FitBranch::Landscape => {
            let height = container_width / aspect;
            Placement {
                width: container_width,
                height,
                offset_x: 0.0,
                offset_y: (container_height - height) / 2.0,
            }
        }
    }
}

fn check_dimension(name: &str, value: f64) -> MemeResult<()> {
    if is_positive_finite(value) {
        Ok(())
    } else {
        Err(MemeError::invalid_dimension(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;

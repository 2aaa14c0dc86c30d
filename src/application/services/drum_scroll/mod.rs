//! Geometry of the "drum" scroll effect: a long page is cut into fixed-height
//! segments, each segment is tilted back by a constant angle and slid along
//! the tilted plane as the reader scrolls.

use serde::Serialize;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("segment height must be a positive finite number")]
    SegmentHeight,
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumGeometry {
    pub segment_height: f64,
    pub segment_gap: f64,
    pub top_padding: f64,
    /// Radians.
    pub tilt_angle: f64,
}

impl Default for DrumGeometry {
    fn default() -> Self {
        Self {
            segment_height: 1000.0,
            segment_gap: 20.0,
            top_padding: 150.0,
            tilt_angle: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollSegment {
    pub index: usize,
    pub top_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TiltPosition {
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrumLayout {
    pub num_segments: usize,
    pub spacer_height: f64,
    pub segments: Vec<ScrollSegment>,
}

/// `ceil((content_height + top_padding) / segment_height)`, never below 1.
pub fn num_segments(content_height: f64, top_padding: f64, segment_height: f64) -> usize {
    let ratio = ((content_height + top_padding) / segment_height).ceil();
    if ratio.is_finite() && ratio >= 1.0 {
        ratio as usize
    } else {
        1
    }
}

/// Scrollable length: offset of the last segment plus one window.
pub fn spacer_height(
    num_segments: usize,
    segment_height: f64,
    segment_gap: f64,
    window_height: f64,
) -> f64 {
    let last_segment_offset = num_segments.saturating_sub(1) as f64 * (segment_height + segment_gap);
    last_segment_offset + window_height
}

/// Offset of the content clone inside segment `segment_index`.
pub fn content_position(segment_index: usize, top_padding: f64, segment_height: f64) -> f64 {
    top_padding - segment_index as f64 * segment_height
}

/// Maps a scroll offset to the Y/Z placement of one segment on the tilted plane.
pub fn tilt_position(
    scroll_y: f64,
    segment_index: usize,
    segment_height: f64,
    segment_gap: f64,
    tilt_angle: f64,
) -> TiltPosition {
    let along_plane = scroll_y - segment_index as f64 * (segment_height + segment_gap);
    TiltPosition {
        y: along_plane * tilt_angle.cos(),
        z: -along_plane * tilt_angle.sin(),
    }
}

impl DrumGeometry {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.segment_height.is_finite() || self.segment_height <= 0.0 {
            return Err(GeometryError::SegmentHeight);
        }
        for (name, value) in [
            ("segment gap", self.segment_gap),
            ("top padding", self.top_padding),
            ("tilt angle", self.tilt_angle),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite(name));
            }
        }
        Ok(())
    }

    pub fn num_segments(&self, content_height: f64) -> usize {
        num_segments(content_height, self.top_padding, self.segment_height)
    }

    pub fn layout(&self, content_height: f64, window_height: f64) -> DrumLayout {
        let count = self.num_segments(content_height);
        let segments = (0..count)
            .map(|index| ScrollSegment {
                index,
                top_offset: content_position(index, self.top_padding, self.segment_height),
            })
            .collect();
        DrumLayout {
            num_segments: count,
            spacer_height: spacer_height(count, self.segment_height, self.segment_gap, window_height),
            segments,
        }
    }

    pub fn position(&self, scroll_y: f64, segment_index: usize) -> TiltPosition {
        tilt_position(
            scroll_y,
            segment_index,
            self.segment_height,
            self.segment_gap,
            self.tilt_angle,
        )
    }
}

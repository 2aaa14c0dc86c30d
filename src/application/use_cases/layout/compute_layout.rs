use crate::application::services::drum_scroll::{
    DrumGeometry, DrumLayout, GeometryError, TiltPosition,
};

/// Upper bound on segments produced for one page.
pub const MAX_SEGMENTS: usize = 10_000;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("content would need more than 10000 segments")]
    TooManySegments,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLayout {
    pub layout: DrumLayout,
    /// One entry per segment when a scroll offset was supplied.
    pub positions: Option<Vec<TiltPosition>>,
}

pub struct ComputeLayout<'a> {
    pub geometry: &'a DrumGeometry,
}

impl<'a> ComputeLayout<'a> {
    pub fn execute(
        &self,
        content_height: f64,
        window_height: f64,
        scroll_y: Option<f64>,
    ) -> Result<PlacedLayout, LayoutError> {
        self.geometry.validate()?;
        for (name, value) in [
            ("content height", content_height),
            ("window height", window_height),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite(name).into());
            }
        }
        if let Some(y) = scroll_y {
            if !y.is_finite() {
                return Err(GeometryError::NotFinite("scroll offset").into());
            }
        }
        if self.geometry.num_segments(content_height) > MAX_SEGMENTS {
            return Err(LayoutError::TooManySegments);
        }

        let layout = self.geometry.layout(content_height, window_height);
        let positions = scroll_y.map(|y| {
            layout
                .segments
                .iter()
                .map(|s| self.geometry.position(y, s.index))
                .collect()
        });
        Ok(PlacedLayout { layout, positions })
    }
}

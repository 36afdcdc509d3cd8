//! Rasterized track map queried for boundary pixels.

use log::info;

/// Immutable boundary field for one generation.
///
/// Pixels are classified once when the track asset is decoded; during
/// evaluation the map only answers [`TrackMap::boundary_at`] queries.
/// Coordinates outside the bitmap count as boundary, so sensor rays and
/// corner checks fail safe at the edges instead of reading out of range.
#[derive(Debug, Clone)]
pub struct TrackMap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TrackMap {
    /// Decodes an RGBA pixel buffer into a boundary bitmap.
    ///
    /// Every pixel equal to `boundary_color` is impassable. Fails when the
    /// buffer does not hold exactly `width * height` RGBA pixels, surfacing
    /// bad assets before any generation runs.
    pub fn from_rgba(
        pixels: &[u8],
        width: usize,
        height: usize,
        boundary_color: [u8; 4],
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let expected = width * height * 4;
        if pixels.len() != expected {
            return Err(format!(
                "track buffer holds {} bytes, expected {} for {}x{} RGBA",
                pixels.len(),
                expected,
                width,
                height
            )
            .into());
        }

        let cells: Vec<bool> = pixels
            .chunks_exact(4)
            .map(|px| px == boundary_color.as_slice())
            .collect();

        let boundary_count = cells.iter().filter(|&&b| b).count();
        info!("decoded {width}x{height} track, {boundary_count} boundary pixels");

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a map from a per-pixel predicate. Used for procedural tracks
    /// and tests.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut is_boundary: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(is_boundary(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// A map with no boundary pixels anywhere inside it.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Map width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at `(x, y)` is impassable. Out-of-range coordinates
    /// are boundary.
    pub fn boundary_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.cells[y * self.width + x]
    }
}

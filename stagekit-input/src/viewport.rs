/// Window-to-surface coordinate mapping for the active render surface.
///
/// The pointer tracker treats this as an opaque collaborator: the host
/// publishes fresh placement on resize, the tracker only ever queries it.
/// Coordinates map as `(window - offset) / scale`, rounded to the nearest
/// surface pixel.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
	offset_x: f64,
	offset_y: f64,
	scale: f64,
	width: i32,
	height: i32,
}

impl Default for Viewport {
	/// An empty surface; nothing lies inside until real metrics arrive.
	fn default() -> Viewport {
		Viewport {
			offset_x: 0.0,
			offset_y: 0.0,
			scale: 1.0,
			width: 0,
			height: 0,
		}
	}
}

impl Viewport {
	/// An unscaled surface anchored at the window origin.
	pub fn new(width: i32, height: i32) -> Viewport {
		Viewport { width, height, ..Default::default() }
	}

	pub fn set_surface_size(&mut self, width: i32, height: i32) {
		self.width = width.max(0);
		self.height = height.max(0);
	}

	pub fn set_placement(&mut self, offset_x: f64, offset_y: f64, scale: f64) {
		self.offset_x = offset_x;
		self.offset_y = offset_y;
		self.scale = if scale > 0.0 { scale } else { 1.0 };
	}

	/// Scale and center the surface inside a window, letterboxing the
	/// shorter axis.
	pub fn fit_window(&mut self, window_width: f64, window_height: f64) {
		if self.width <= 0 || self.height <= 0 {
			return;
		}

		let scale_x = window_width / self.width as f64;
		let scale_y = window_height / self.height as f64;
		let scale = scale_x.min(scale_y);

		let offset_x = (window_width - self.width as f64 * scale) / 2.0;
		let offset_y = (window_height - self.height as f64 * scale) / 2.0;

		self.set_placement(offset_x, offset_y, scale);
	}

	pub fn to_surface_x(&self, window_x: f64) -> i32 {
		((window_x - self.offset_x) / self.scale).round() as i32
	}

	pub fn to_surface_y(&self, window_y: f64) -> i32 {
		((window_y - self.offset_y) / self.scale).round() as i32
	}

	pub fn contains(&self, x: i32, y: i32) -> bool {
		x >= 0 && y >= 0 && x < self.width && y < self.height
	}

	pub fn width(&self) -> i32 {
		self.width
	}

	pub fn height(&self) -> i32 {
		self.height
	}
}

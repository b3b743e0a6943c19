use std::time::Instant;

use crate::buttons::{Button, ButtonSet};
use crate::config::RepeatTiming;
use crate::direction::DirectionState;
use crate::gamepad::{PadCache, PadSnapshot};


/// Merged keyboard and gamepad state for every logical button, with
/// latest-press bookkeeping behind the trigger/repeat/long-press queries.
///
/// Event handlers write into the current generation as events arrive.
/// [`ButtonTracker::update`] runs once per frame: it folds in the pad
/// snapshots, advances the hold counter, scans for press edges and rolls
/// the current generation into the previous one. Consumers only ever poll
/// the query methods after that.
///
/// Hold duration is a single frame counter tied to the most recently
/// activated button, not a timer per key: when a newer button is pressed
/// it takes over the counter, and when the tracked button releases the
/// slot reverts to empty on the following update.
#[derive(Debug)]
pub struct ButtonTracker {
	current: ButtonSet,
	previous: ButtonSet,

	latest: Option<Button>,
	pressed_frames: u32,
	last_input_time: Option<Instant>,

	repeat: RepeatTiming,

	pads: PadCache,
	direction: DirectionState,
}

impl ButtonTracker {
	pub fn new(repeat: RepeatTiming) -> ButtonTracker {
		ButtonTracker {
			current: ButtonSet::default(),
			previous: ButtonSet::default(),

			latest: None,
			pressed_frames: 0,
			last_input_time: None,

			repeat,

			pads: PadCache::default(),
			direction: DirectionState::default(),
		}
	}

	/// Record a keyboard contribution for a logical button.
	/// Key-repeat events from the platform are harmless here; a repeated
	/// `true` is not an edge until the generations roll over.
	pub fn track(&mut self, button: Button, held: bool) {
		self.current.set(button, held);
	}

	/// Per-frame tick. Call exactly once per simulation frame.
	pub fn update(&mut self, pads: &[PadSnapshot]) {
		self.pads.apply(pads, &mut self.current);

		match self.latest {
			Some(button) if self.current.get(button) => self.pressed_frames += 1,
			_ => self.latest = None,
		}

		for button in Button::ALL {
			if self.current.get(button) && !self.previous.get(button) {
				self.latest = Some(button);
				self.pressed_frames = 0;
				self.last_input_time = Some(Instant::now());
			}
		}

		self.previous = self.current;

		self.direction.update(&self.current);
	}

	/// Force everything back to neutral.
	pub fn clear(&mut self) {
		self.current.clear();
		self.previous.clear();
		self.latest = None;
		self.pressed_frames = 0;
		self.last_input_time = None;
		self.pads.clear();
		self.direction.clear();
	}
}

/// Query surface. `Cancel` and `Menu` are also satisfied by the raw
/// `Escape` button, so one physical escape key can serve several semantic
/// roles without the mapping tables having to duplicate it.
impl ButtonTracker {
	pub fn is_pressed(&self, button: Button) -> bool {
		self.current.get(button)
			|| (escape_alias(button) && self.current.get(Button::Escape))
	}

	/// True on exactly the first update after a press edge.
	pub fn is_triggered(&self, button: Button) -> bool {
		self.is_latest(button) && self.pressed_frames == 0
	}

	/// The trigger frame plus synthetic repeats while held.
	pub fn is_repeated(&self, button: Button) -> bool {
		self.is_latest(button) && self.repeat.fires(self.pressed_frames)
	}

	pub fn is_long_pressed(&self, button: Button) -> bool {
		self.is_latest(button) && self.repeat.is_long(self.pressed_frames)
	}

	pub fn dir4(&self) -> u8 {
		self.direction.dir4()
	}

	pub fn dir8(&self) -> u8 {
		self.direction.dir8()
	}

	/// When the tracked button was last activated.
	pub fn last_input_time(&self) -> Option<Instant> {
		self.last_input_time
	}

	pub fn latest(&self) -> Option<Button> {
		self.latest
	}

	pub fn pressed_frames(&self) -> u32 {
		self.pressed_frames
	}

	fn is_latest(&self, button: Button) -> bool {
		self.latest == Some(button)
			|| (escape_alias(button) && self.latest == Some(Button::Escape))
	}
}

fn escape_alias(button: Button) -> bool {
	matches!(button, Button::Cancel | Button::Menu)
}

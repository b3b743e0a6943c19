use serde::{Deserialize, Serialize};


/// Key-repeat timing shared by the button and pointer trackers, in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatTiming {
	/// Frames a button must stay held before synthetic repeats begin.
	pub wait: u32,

	/// Frames between synthetic repeats once past `wait`.
	pub interval: u32,
}

impl Default for RepeatTiming {
	fn default() -> RepeatTiming {
		RepeatTiming { wait: 24, interval: 6 }
	}
}

impl RepeatTiming {
	/// Whether a repeat tick lands on a hold of `held_frames` frames,
	/// not counting the trigger frame itself.
	pub fn repeats(&self, held_frames: u32) -> bool {
		held_frames >= self.wait
			&& (held_frames - self.wait) % self.interval.max(1) == 0
	}

	/// Trigger frame plus the repeat schedule.
	pub fn fires(&self, held_frames: u32) -> bool {
		held_frames == 0 || self.repeats(held_frames)
	}

	pub fn is_long(&self, held_frames: u32) -> bool {
		held_frames >= self.wait
	}
}


/// Touch compatibility shims. These mirror quirks of specific pointer-event
/// platforms, so they are policy rather than hardwired behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchPolicy {
	/// A second simultaneous contact aborts the current gesture instead of
	/// starting a new one.
	pub two_finger_cancel: bool,

	/// Non-primary pointers of touch type count as a second contact.
	/// Needed on hosts that report multi-touch through a pointer-event
	/// model rather than dedicated touch events.
	pub secondary_pointer_cancel: bool,
}

impl Default for TouchPolicy {
	fn default() -> TouchPolicy {
		TouchPolicy {
			two_finger_cancel: true,
			secondary_pointer_cancel: true,
		}
	}
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
	pub repeat: RepeatTiming,
	pub touch: TouchPolicy,
}


#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn default_timing() {
		let timing = RepeatTiming::default();
		assert_eq!(timing.wait, 24);
		assert_eq!(timing.interval, 6);
	}

	#[test]
	fn repeat_schedule() {
		let timing = RepeatTiming::default();

		assert!(timing.fires(0));
		for frame in 1..24 {
			assert!(!timing.fires(frame), "unexpected repeat at frame {frame}");
		}
		assert!(timing.fires(24));
		assert!(!timing.fires(25));
		assert!(timing.fires(30));
		assert!(timing.fires(36));
	}

	#[test]
	fn long_hold_threshold() {
		let timing = RepeatTiming::default();
		assert!(!timing.is_long(23));
		assert!(timing.is_long(24));
		assert!(timing.is_long(1000));
	}

	#[test]
	fn zero_interval_does_not_panic() {
		let timing = RepeatTiming { wait: 2, interval: 0 };
		assert!(timing.fires(2));
		assert!(timing.fires(3));
	}

	#[test]
	fn config_from_partial_toml() {
		let config: InputConfig = toml::from_str(
			"[repeat]\n\
			wait = 30\n\
			\n\
			[touch]\n\
			two_finger_cancel = false\n",
		)
		.unwrap();

		assert_eq!(config.repeat.wait, 30);
		assert_eq!(config.repeat.interval, 6);
		assert!(!config.touch.two_finger_cancel);
		assert!(config.touch.secondary_pointer_cancel);
	}

	#[test]
	fn config_round_trips_through_toml() {
		let config = InputConfig {
			repeat: RepeatTiming { wait: 12, interval: 3 },
			touch: TouchPolicy {
				two_finger_cancel: false,
				secondary_pointer_cancel: true,
			},
		};

		let text = toml::to_string(&config).unwrap();
		let parsed: InputConfig = toml::from_str(&text).unwrap();
		assert_eq!(parsed, config);
	}
}

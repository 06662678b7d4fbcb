//! Two-state machine for the decorative tracking face.

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;

use crate::util::eye_math::eye_offset;

/// Whether the face is watching the pointer or covering its eyes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EyeMode {
    #[default]
    Watching,
    Shielded,
}

/// Face state: eye mode plus the current pupil offset in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaceState {
    pub eyes: EyeMode,
    pub pupil_offset: (f64, f64),
}

impl FaceState {
    #[must_use]
    pub fn eyes_open(&self) -> bool {
        self.eyes == EyeMode::Watching
    }

    /// Password field gained focus: close the eyes.
    pub fn shield(&mut self) {
        self.eyes = EyeMode::Shielded;
    }

    /// Password field lost focus: watch the pointer again.
    pub fn unshield(&mut self) {
        self.eyes = EyeMode::Watching;
    }

    /// Update the pupil offset for a pointer position. The mousemove
    /// listener stays attached while shielded, so this must be inert in
    /// that state.
    pub fn track_pointer(&mut self, face_center: (f64, f64), pointer: (f64, f64)) {
        match self.eyes {
            EyeMode::Watching => self.pupil_offset = eye_offset(face_center, pointer),
            EyeMode::Shielded => {}
        }
    }
}

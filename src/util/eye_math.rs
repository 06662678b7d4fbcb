//! Pupil offset math for the tracking face.

#[cfg(test)]
#[path = "eye_math_test.rs"]
mod eye_math_test;

/// Divisor applied to the pointer distance before saturation.
pub const EYE_DISTANCE_DIVISOR: f64 = 50.0;

/// Maximum pupil travel in px. Keeps pupils inside their sockets.
pub const EYE_MAX_OFFSET: f64 = 8.0;

/// Offset vector pointing from the face center toward the pointer.
///
/// Direction is always exact; magnitude is `min(distance / 50, 8)`, so a
/// pointer anywhere on screen moves the pupils at most 8px.
#[must_use]
pub fn eye_offset(face_center: (f64, f64), pointer: (f64, f64)) -> (f64, f64) {
    let dx = pointer.0 - face_center.0;
    let dy = pointer.1 - face_center.1;

    let angle = dy.atan2(dx);
    let distance = (dx.hypot(dy) / EYE_DISTANCE_DIVISOR).min(EYE_MAX_OFFSET);

    (angle.cos() * distance, angle.sin() * distance)
}

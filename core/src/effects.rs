//! Transform strings for the pointer-driven card and badge effects.

pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

pub const SKILL_HOVER_TRANSFORM: &str = "scale(1.05) translateY(-2px)";
pub const SKILL_HOVER_SHADOW: &str = "0 8px 25px rgba(0, 122, 255, 0.2)";
pub const SKILL_REST_TRANSFORM: &str = "scale(1) translateY(0)";
pub const SKILL_REST_SHADOW: &str = "none";

pub const FLOATING_HOVER_TRANSFORM: &str = "scale(1.05)";
pub const FLOATING_REST_TRANSFORM: &str = "scale(1)";

pub const INTERACTIVE_TRANSITION: &str = "all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are the pointer offset inside a `width` x `height` box.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: (center_x - x) / TILT_DIVISOR,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Animation delay and duration, in seconds, for the floating card at `index`.
pub fn floating_card_timing(index: usize) -> (f64, f64) {
    let step = index as f64 * 0.5;
    (step, 6.0 + step)
}

pub fn seconds(value: f64) -> String {
    format!("{value}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_flat() {
        let tilt = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }
}

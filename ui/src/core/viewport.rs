//! Viewport classification.

/// Width (CSS px) at which the layout switches from mobile to desktop.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// Classify a viewport width against `breakpoint`. Widths strictly below the
    /// breakpoint are mobile; the breakpoint itself is desktop.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_itself_is_desktop() {
        assert_eq!(
            ViewportMode::from_width(768.0, MOBILE_BREAKPOINT_PX),
            ViewportMode::Desktop
        );
    }

    #[test]
    fn narrow_widths_are_mobile() {
        for width in [0.0, 320.0, 600.0, 767.0, 767.9] {
            assert_eq!(
                ViewportMode::from_width(width, MOBILE_BREAKPOINT_PX),
                ViewportMode::Mobile,
                "width {width}"
            );
        }
    }

    #[test]
    fn wide_widths_are_desktop() {
        for width in [768.0, 769.0, 1024.0, 1920.0, 3840.0] {
            assert!(!ViewportMode::from_width(width, MOBILE_BREAKPOINT_PX).is_mobile());
        }
    }
}

//! Device classification from viewport width.

use serde::Serialize;

use crate::constants::{DESKTOP_BREAKPOINT, MOBILE_BREAKPOINT};
use crate::error::ShellError;

/// Device bucket derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 3] = [DeviceClass::Mobile, DeviceClass::Tablet, DeviceClass::Desktop];

    /// Classify a viewport width in pixels.
    ///
    /// `< 768` is mobile, `768..=1023` tablet, `>= 1024` desktop.
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else if width < DESKTOP_BREAKPOINT {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    #[must_use]
    pub fn is_tablet(self) -> bool {
        self == DeviceClass::Tablet
    }

    #[must_use]
    pub fn is_desktop(self) -> bool {
        self == DeviceClass::Desktop
    }

    /// Root marker class that identifies this device class.
    #[must_use]
    pub fn marker_class(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile-app",
            DeviceClass::Tablet => "tablet-app",
            DeviceClass::Desktop => "desktop-app",
        }
    }
}

/// The three mutually exclusive device flags on the document root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RootMarkers {
    pub mobile_app: bool,
    pub tablet_app: bool,
    pub desktop_app: bool,
}

impl RootMarkers {
    /// Toggle each flag so that only the one for `class` is set.
    pub fn apply(&mut self, class: DeviceClass) {
        self.mobile_app = class.is_mobile();
        self.tablet_app = class.is_tablet();
        self.desktop_app = class.is_desktop();
    }

    /// Whether the flag for `class` is set.
    #[must_use]
    pub fn is_set(&self, class: DeviceClass) -> bool {
        match class {
            DeviceClass::Mobile => self.mobile_app,
            DeviceClass::Tablet => self.tablet_app,
            DeviceClass::Desktop => self.desktop_app,
        }
    }

    /// Class names of the set flags.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        DeviceClass::ALL
            .iter()
            .filter(|class| self.is_set(**class))
            .map(|class| class.marker_class())
            .collect()
    }
}

/// Where the viewport width comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSource {
    /// Terminal columns times an assumed cell width.
    Terminal { px_per_column: u16 },
    /// A fixed width that ignores terminal size.
    Fixed(u32),
}

impl ViewportSource {
    /// Viewport width for a terminal `columns` wide.
    #[must_use]
    pub fn width_for(self, columns: u16) -> u32 {
        match self {
            ViewportSource::Terminal { px_per_column } => {
                u32::from(columns) * u32::from(px_per_column)
            }
            ViewportSource::Fixed(width) => width,
        }
    }
}

/// Parse a viewport width such as `1024` or `1024px`.
pub fn parse_width(s: &str) -> Result<u32, ShellError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed);
    digits
        .parse::<u32>()
        .map_err(|_| ShellError::InvalidViewport(s.to_string()))
}

/// Latest classification of the viewport, plus its root markers.
#[derive(Debug, Clone)]
pub struct DeviceClassifier {
    width: u32,
    class: DeviceClass,
    markers: RootMarkers,
}

impl DeviceClassifier {
    /// Classify the initial viewport (mount).
    #[must_use]
    pub fn new(width: u32) -> Self {
        let class = DeviceClass::from_width(width);
        let mut markers = RootMarkers::default();
        markers.apply(class);
        Self {
            width,
            class,
            markers,
        }
    }

    /// Recompute from a resized viewport. Every call recomputes.
    pub fn on_resize(&mut self, width: u32) -> DeviceClass {
        let class = DeviceClass::from_width(width);
        if class != self.class {
            tracing::debug!(
                width,
                from = ?self.class,
                to = ?class,
                "device class changed"
            );
        }
        self.width = width;
        self.class = class;
        self.markers.apply(class);
        class
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    #[must_use]
    pub fn markers(&self) -> RootMarkers {
        self.markers
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }

    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.class.is_tablet()
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.class.is_desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(DeviceClass::from_width(0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(u32::MAX), DeviceClass::Desktop);
    }

    #[test]
    fn flags_are_exclusive() {
        for class in DeviceClass::ALL {
            let set = [class.is_mobile(), class.is_tablet(), class.is_desktop()];
            assert_eq!(set.iter().filter(|b| **b).count(), 1);
        }
    }

    #[test]
    fn markers_follow_resize() {
        let mut classifier = DeviceClassifier::new(500);
        assert_eq!(classifier.markers().classes(), vec!["mobile-app"]);

        classifier.on_resize(900);
        assert_eq!(classifier.markers().classes(), vec!["tablet-app"]);
        assert!(!classifier.markers().mobile_app);

        classifier.on_resize(1440);
        assert_eq!(classifier.markers().classes(), vec!["desktop-app"]);
        assert!(classifier.is_desktop());
        assert_eq!(classifier.width(), 1440);
    }

    #[test]
    fn resize_within_class_still_updates_width() {
        let mut classifier = DeviceClassifier::new(800);
        assert_eq!(classifier.on_resize(1000), DeviceClass::Tablet);
        assert_eq!(classifier.width(), 1000);
        assert!(classifier.is_tablet());
    }

    #[test]
    fn viewport_from_terminal_columns() {
        let source = ViewportSource::Terminal { px_per_column: 8 };
        assert_eq!(source.width_for(80), 640);
        assert_eq!(source.width_for(96), 768);
        assert_eq!(source.width_for(128), 1024);
        assert_eq!(ViewportSource::Fixed(1280).width_for(80), 1280);
    }

    #[test]
    fn parse_width_accepts_px_suffix() {
        assert_eq!(parse_width("1024"), Ok(1024));
        assert_eq!(parse_width(" 767px "), Ok(767));
        assert!(matches!(parse_width("wide"), Err(ShellError::InvalidViewport(_))));
        assert!(parse_width("-1").is_err());
    }
}

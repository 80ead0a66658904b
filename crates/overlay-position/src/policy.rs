//! How scrolling feeds into the base element's offset.
//!
//! Fixed elements keep their visual position while the page scrolls, so the
//! base offset has to be read differently depending on which side is fixed:
//!
//! | pin fixed | base fixed | follow base | base offset source |
//! |-----------|------------|-------------|--------------------|
//! | no        | any        | any         | [`BaseOffsetSource::Page`] |
//! | yes       | yes        | any         | [`BaseOffsetSource::FixedStyle`] |
//! | yes       | no         | no          | [`BaseOffsetSource::Detached`] |
//! | yes       | no         | yes         | [`BaseOffsetSource::ViewportRelative`] |

/// Where the base element's offset comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseOffsetSource {
    /// Page coordinates, including page scroll.
    Page,
    /// Page coordinates without page scroll, for a fixed pin that tracks a
    /// scrolling base.
    ViewportRelative,
    /// Origin. A fixed pin that does not follow its base is laid out
    /// against the viewport, like a dialog.
    Detached,
    /// The base's own `left`/`top` styles. Measuring a fixed base would read
    /// back the previous placement.
    FixedStyle,
}

/// Scroll handling for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPolicy {
    pub pin_fixed: bool,
    pub base_fixed: bool,
    pub follow_when_fixed: bool,
}

impl ScrollPolicy {
    pub fn new(pin_fixed: bool, base_fixed: bool, follow_when_fixed: bool) -> Self {
        Self {
            pin_fixed,
            base_fixed,
            follow_when_fixed,
        }
    }

    pub fn base_offset_source(&self) -> BaseOffsetSource {
        match (self.pin_fixed, self.base_fixed, self.follow_when_fixed) {
            (false, _, _) => BaseOffsetSource::Page,
            (true, true, _) => BaseOffsetSource::FixedStyle,
            (true, false, false) => BaseOffsetSource::Detached,
            (true, false, true) => BaseOffsetSource::ViewportRelative,
        }
    }

    /// Whether the base's anchor ignores the element's own offset.
    pub fn ignores_base_offset(&self) -> bool {
        self.pin_fixed && !self.follow_when_fixed
    }

    /// Whether page scroll is left out of the base's offset.
    pub fn ignores_page_scroll(&self) -> bool {
        self.pin_fixed && self.follow_when_fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_table() {
        use BaseOffsetSource::*;

        let cases = [
            ((false, false, false), Page),
            ((false, true, false), Page),
            ((false, false, true), Page),
            ((false, true, true), Page),
            ((true, true, false), FixedStyle),
            ((true, true, true), FixedStyle),
            ((true, false, false), Detached),
            ((true, false, true), ViewportRelative),
        ];

        for ((pin, base, follow), expected) in cases {
            let policy = ScrollPolicy::new(pin, base, follow);
            assert_eq!(policy.base_offset_source(), expected, "{:?}", policy);
        }
    }

    #[test]
    fn test_flags() {
        let dialog = ScrollPolicy::new(true, false, false);
        assert!(dialog.ignores_base_offset());
        assert!(!dialog.ignores_page_scroll());

        let sub_nav = ScrollPolicy::new(true, false, true);
        assert!(!sub_nav.ignores_base_offset());
        assert!(sub_nav.ignores_page_scroll());

        let plain = ScrollPolicy::new(false, true, true);
        assert!(!plain.ignores_base_offset());
        assert!(!plain.ignores_page_scroll());
    }
}

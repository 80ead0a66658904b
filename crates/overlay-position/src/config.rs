//! Placement configuration.

use std::fmt;
use std::rc::Rc;

use overlay_core::{AlignError, AlignPair, Offset};
use overlay_geometry::Target;
use serde::{Deserialize, Serialize};

/// Where the reference container for collision checks comes from.
///
/// Whatever node is chosen, the engine keeps walking up from it until it
/// finds an element whose computed position is not `static`, falling back
/// to the document body (the viewport).
#[derive(Clone)]
pub enum ContainerSource<E> {
    /// Nothing supplied: start from the body, which resolves to the
    /// viewport unless the body itself is positioned.
    Auto,
    /// Start from the base element's parent, picking up the nearest
    /// positioned ancestor of the base.
    BaseAncestor,
    /// Start from this element.
    Element(E),
    /// Ask a callback for a starting node, given the base element.
    Resolve(Rc<dyn Fn(&E) -> Option<E>>),
}

impl<E> Default for ContainerSource<E> {
    fn default() -> Self {
        ContainerSource::Auto
    }
}

impl<E> ContainerSource<E> {
    /// The element a caller supplied directly, if any.
    pub fn element(&self) -> Option<&E> {
        match self {
            ContainerSource::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ContainerSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerSource::Auto => f.write_str("Auto"),
            ContainerSource::BaseAncestor => f.write_str("BaseAncestor"),
            ContainerSource::Element(element) => f.debug_tuple("Element").field(element).finish(),
            ContainerSource::Resolve(_) => f.write_str("Resolve(..)"),
        }
    }
}

/// Everything one placement needs. Immutable once handed to the engine.
#[derive(Debug, Clone)]
pub struct PlacementConfig<E> {
    /// Element being positioned
    pub pin: Target<E>,
    /// Element the pin is anchored to
    pub base: Target<E>,
    /// Reference frame for collision checks and auto-fit
    pub container: ContainerSource<E>,
    /// Requested alignment (default `"tl tl"`)
    pub align: AlignPair,
    /// Pixel nudge applied last
    pub offset: Offset,
    /// Try fallback alignments when the requested one overflows
    pub need_adjust: bool,
    /// Check only vertical containment and track the base inside a
    /// scrolling container
    pub auto_fit: bool,
    /// Mirror alignments and write right-anchored positions
    pub is_rtl: bool,
    /// A fixed pin keeps following the base element instead of staying
    /// put like a dialog
    pub pin_follow_base_when_fixed: bool,
}

impl<E> PlacementConfig<E> {
    /// Anchor `pin` to `base` with default options.
    pub fn new(pin: E, base: impl Into<Target<E>>) -> Self {
        Self::for_targets(Target::Element(pin), base.into())
    }

    /// Like [`PlacementConfig::new`], but either side may be the viewport.
    pub fn for_targets(pin: Target<E>, base: Target<E>) -> Self {
        Self {
            pin,
            base,
            container: ContainerSource::Auto,
            align: AlignPair::default(),
            offset: Offset::ZERO,
            need_adjust: false,
            auto_fit: false,
            is_rtl: false,
            pin_follow_base_when_fixed: false,
        }
    }

    /// Set the alignment from its string form, e.g. `"tl bl"`.
    pub fn align(self, align: &str) -> Result<Self, AlignError> {
        Ok(self.align_pair(align.parse()?))
    }

    pub fn align_pair(mut self, align: AlignPair) -> Self {
        self.align = align;
        self
    }

    pub fn offset(mut self, offset: impl Into<Offset>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn need_adjust(mut self, need_adjust: bool) -> Self {
        self.need_adjust = need_adjust;
        self
    }

    pub fn auto_fit(mut self, auto_fit: bool) -> Self {
        self.auto_fit = auto_fit;
        self
    }

    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn follow_base_when_fixed(mut self, follow: bool) -> Self {
        self.pin_follow_base_when_fixed = follow;
        self
    }

    pub fn container(mut self, container: ContainerSource<E>) -> Self {
        self.container = container;
        self
    }

    pub fn container_element(self, container: E) -> Self {
        self.container(ContainerSource::Element(container))
    }
}

/// Serializable placement options, as received from JSON or JavaScript.
///
/// Field names are camelCase and every field is optional:
///
/// ```
/// use overlay_position::PlacementOptions;
///
/// let options: PlacementOptions =
///     serde_json::from_str(r#"{ "align": "tr br", "offset": [0, 4], "needAdjust": true }"#).unwrap();
/// assert!(options.need_adjust);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementOptions {
    pub align: Option<AlignPair>,
    pub offset: Option<Offset>,
    pub need_adjust: bool,
    pub auto_fit: bool,
    pub is_rtl: bool,
    pub pin_follow_base_element_when_fixed: bool,
}

impl PlacementOptions {
    /// Combine with element handles into an engine configuration.
    pub fn into_config<E>(self, pin: Target<E>, base: Target<E>) -> PlacementConfig<E> {
        PlacementConfig::for_targets(pin, base)
            .align_pair(self.align.unwrap_or_default())
            .offset(self.offset.unwrap_or_default())
            .need_adjust(self.need_adjust)
            .auto_fit(self.auto_fit)
            .rtl(self.is_rtl)
            .follow_base_when_fixed(self.pin_follow_base_element_when_fixed)
    }
}

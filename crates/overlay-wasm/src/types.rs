//! JavaScript-facing result types.

use overlay_position::{Placement, PlacementOutcome};
use serde::Serialize;

/// Placement details returned by `placeWithReport`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub align: String,
    /// `"fitted"` or `"clamped"`
    pub outcome: &'static str,
    pub left: f64,
    pub top: f64,
    pub offset: [f64; 2],
}

impl From<Placement> for PlacementReport {
    fn from(placement: Placement) -> Self {
        Self {
            align: placement.align.to_string(),
            outcome: match placement.outcome {
                PlacementOutcome::Fitted => "fitted",
                PlacementOutcome::Clamped => "clamped",
            },
            left: placement.position.x,
            top: placement.position.y,
            offset: placement.offset.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_core::{Offset, Point};

    #[test]
    fn test_report_from_placement() {
        let placement = Placement {
            align: "tl bl".parse().unwrap(),
            outcome: PlacementOutcome::Clamped,
            position: Point::new(12.0, 40.0),
            offset: Offset::new(0.0, -8.0),
        };

        let report = PlacementReport::from(placement);
        assert_eq!(report.align, "tl bl");
        assert_eq!(report.outcome, "clamped");
        assert_eq!((report.left, report.top), (12.0, 40.0));
        assert_eq!(report.offset, [0.0, -8.0]);
    }
}

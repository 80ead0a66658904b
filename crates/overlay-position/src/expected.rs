//! Fallback alignment candidates.
//!
//! When the requested alignment would overflow the container, the engine
//! tries a fixed sequence of alternatives. The order is part of the
//! observable behavior: the first candidate that fits wins.

use overlay_core::{AlignCode, AlignPair, Horizontal};
use smallvec::{smallvec, SmallVec};

/// Ordered alignment candidates. Never more than six.
pub type ExpectedAlign = SmallVec<[AlignPair; 6]>;

/// A direction rewrite applied to both codes of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// `t` ↔ `b`
    FlipVertical,
    /// `l` ↔ `r`
    FlipHorizontal,
    /// `t` ↔ `b` and `l` ↔ `r` at once
    FlipAll,
    /// A horizontal `c` becomes the given direction. Vertical `c` is kept.
    HorizontalCenterTo(Horizontal),
}

/// Rewrite the directions of `align`. Characters the substitution does not
/// name are left untouched.
pub fn replace_align_dir(align: AlignPair, substitution: Substitution) -> AlignPair {
    align.map_codes(|code| {
        let AlignCode { vertical, horizontal } = code;
        match substitution {
            Substitution::FlipVertical => AlignCode::new(vertical.flip(), horizontal),
            Substitution::FlipHorizontal => AlignCode::new(vertical, horizontal.flip()),
            Substitution::FlipAll => AlignCode::new(vertical.flip(), horizontal.flip()),
            Substitution::HorizontalCenterTo(target) => match horizontal {
                Horizontal::Center => AlignCode::new(vertical, target),
                _ => code,
            },
        }
    })
}

/// Candidate alignments in the order they are tried.
///
/// The requested pair comes first (mirrored for RTL). With `need_adjust`
/// it is followed by the vertical flip, the horizontal flip, the left and
/// right substitutions for a centered pair, and the diagonal flip last.
pub fn expected_align(align: AlignPair, need_adjust: bool, is_rtl: bool) -> ExpectedAlign {
    let align = if is_rtl {
        replace_align_dir(align, Substitution::FlipHorizontal)
    } else {
        align
    };

    let mut expected: ExpectedAlign = smallvec![align];
    if need_adjust {
        if align.contains('t') || align.contains('b') {
            expected.push(replace_align_dir(align, Substitution::FlipVertical));
        }
        if align.contains('l') || align.contains('r') {
            expected.push(replace_align_dir(align, Substitution::FlipHorizontal));
        }
        if align.contains('c') {
            expected.push(replace_align_dir(
                align,
                Substitution::HorizontalCenterTo(Horizontal::Left),
            ));
            expected.push(replace_align_dir(
                align,
                Substitution::HorizontalCenterTo(Horizontal::Right),
            ));
        }
        expected.push(replace_align_dir(align, Substitution::FlipAll));
    }
    expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pair(s: &str) -> AlignPair {
        s.parse().unwrap()
    }

    fn labels(expected: &ExpectedAlign) -> Vec<String> {
        expected.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_without_adjust() {
        assert_eq!(labels(&expected_align(pair("tl bl"), false, false)), ["tl bl"]);
        assert_eq!(labels(&expected_align(pair("tl bl"), false, true)), ["tr br"]);
    }

    #[test]
    fn test_corner_order() {
        assert_eq!(
            labels(&expected_align(pair("tl bl"), true, false)),
            ["tl bl", "bl tl", "tr br", "br tr"]
        );
    }

    #[test]
    fn test_centered_order() {
        assert_eq!(
            labels(&expected_align(pair("bc tc"), true, false)),
            ["bc tc", "tc bc", "bl tl", "br tr", "tc bc"]
        );
    }

    #[test]
    fn test_fully_centered() {
        assert_eq!(
            labels(&expected_align(pair("cc cc"), true, false)),
            ["cc cc", "cl cl", "cr cr", "cc cc"]
        );
    }

    #[test]
    fn test_vertical_center_only_is_repeated() {
        // Only a horizontal `c` is rewritten, so "cl" stays as is.
        assert_eq!(
            labels(&expected_align(pair("cl tl"), true, false)),
            ["cl tl", "cl bl", "cr tr", "cl tl", "cl tl", "cr br"]
        );
    }

    #[test]
    fn test_rtl_mirrors_before_expanding() {
        assert_eq!(
            labels(&expected_align(pair("tl tr"), true, true)),
            ["tr tl", "br bl", "tl tr", "bl br"]
        );
    }

    #[test]
    fn test_replace_leaves_other_directions() {
        assert_eq!(
            replace_align_dir(pair("tc bl"), Substitution::FlipHorizontal).to_string(),
            "tc br"
        );
        assert_eq!(
            replace_align_dir(pair("cc bl"), Substitution::HorizontalCenterTo(Horizontal::Right))
                .to_string(),
            "cr bl"
        );
    }

    fn align_code(vertical: &'static [char], horizontal: &'static [char]) -> impl Strategy<Value = String> {
        (prop::sample::select(vertical), prop::sample::select(horizontal))
            .prop_map(|(v, h)| format!("{}{}", v, h))
    }

    fn any_pair() -> impl Strategy<Value = AlignPair> {
        let code = || align_code(&['t', 'c', 'b'], &['l', 'c', 'r']);
        (code(), code()).prop_map(|(pin, base)| pair(&format!("{} {}", pin, base)))
    }

    fn corner_pair() -> impl Strategy<Value = AlignPair> {
        let code = || align_code(&['t', 'b'], &['l', 'r']);
        (code(), code()).prop_map(|(pin, base)| pair(&format!("{} {}", pin, base)))
    }

    proptest! {
        #[test]
        fn prop_single_candidate_without_adjust(align in any_pair(), is_rtl in any::<bool>()) {
            let expected = expected_align(align, false, is_rtl);
            prop_assert_eq!(expected.len(), 1);
            let wanted = if is_rtl {
                replace_align_dir(align, Substitution::FlipHorizontal)
            } else {
                align
            };
            prop_assert_eq!(expected[0], wanted);
        }

        #[test]
        fn prop_four_candidates_for_corners(align in corner_pair()) {
            let expected = expected_align(align, true, false);
            prop_assert_eq!(expected.len(), 4);
            prop_assert_eq!(expected[0], align);
            prop_assert_eq!(expected[1], replace_align_dir(align, Substitution::FlipVertical));
            prop_assert_eq!(expected[2], replace_align_dir(align, Substitution::FlipHorizontal));
            prop_assert_eq!(expected[3], replace_align_dir(align, Substitution::FlipAll));
        }

        #[test]
        fn prop_flips_are_involutions(align in any_pair()) {
            for substitution in [
                Substitution::FlipVertical,
                Substitution::FlipHorizontal,
                Substitution::FlipAll,
            ] {
                prop_assert_eq!(
                    replace_align_dir(replace_align_dir(align, substitution), substitution),
                    align
                );
            }
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Filed route vs. standard route matching.
//!
//! Only the waypoint sequence is checked. Aircraft type and altitude remarks
//! are informational and never affect the result.

use crate::routes::Route;

/// Splits a filed route into waypoint tokens, dropping any `/speed/level` suffix.
///
/// Tokens that are empty once the suffix is removed (e.g. a bare `/N0450F370`)
/// carry no identifier and are skipped.
pub fn normalize_filed_route(raw: &str) -> Vec<&str> {
    raw.split_whitespace()
        .map(|token| token.split('/').next().unwrap_or_default())
        .filter(|token| !token.is_empty())
        .collect()
}

/// True if `needle` appears in `haystack` as an unbroken, in-order run.
/// An empty needle is contained in everything.
pub fn contiguous_contains<A, B>(haystack: &[A], needle: &[B]) -> bool
where
    A: PartialEq<B>,
{
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.iter().zip(needle).all(|(a, b)| a == b))
}

/// Either sequence contains the other: exact, overflight past the standard
/// route, or joining it partway.
fn sequences_match(filed: &[&str], standard: &[String]) -> bool {
    contiguous_contains(filed, standard) || contiguous_contains(standard, filed)
}

/// Whether `filed_route` satisfies `route`. For runway dependent routes any
/// listed runway variant is enough; the pilot's runway is never inferred.
///
/// An empty or unparseable filed route never matches.
pub fn matches(filed_route: &str, route: &Route) -> bool {
    let filed = normalize_filed_route(filed_route);
    if filed.is_empty() {
        return false;
    }
    route
        .waypoints
        .candidates()
        .any(|standard| sequences_match(&filed, standard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{Remarks, RunwayPoints, Waypoints};

    fn strings(points: &[&str]) -> Vec<String> {
        points.iter().map(|s| s.to_string()).collect()
    }

    fn simple(points: &[&str]) -> Route {
        Route {
            id: "TEST1".into(),
            departure: "NZAA".into(),
            destination: "NZWN".into(),
            remarks: Remarks::default(),
            waypoints: Waypoints::Simple(strings(points)),
        }
    }

    fn runway_dependent(variants: &[&[&str]]) -> Route {
        Route {
            waypoints: Waypoints::RunwayDependent(
                variants
                    .iter()
                    .enumerate()
                    .map(|(i, points)| RunwayPoints {
                        runway: format!("{:02}", i + 1),
                        points: strings(points),
                    })
                    .collect(),
            ),
            ..simple(&[])
        }
    }

    #[test]
    fn test_normalize_strips_speed_level_suffix() {
        assert_eq!(normalize_filed_route("NAPEX/N0450F370"), vec!["NAPEX"]);
        assert_eq!(
            normalize_filed_route("  NOBAR/N0250A080   Y346 SELWI/K0460F150/ "),
            vec!["NOBAR", "Y346", "SELWI"]
        );
        assert_eq!(normalize_filed_route("DCT /N0450F370 NOBAR"), vec!["DCT", "NOBAR"]);
        assert!(normalize_filed_route("").is_empty());
        assert!(normalize_filed_route(" \t ").is_empty());
    }

    #[test]
    fn test_contiguous_contains() {
        let a = ["A", "B", "C", "D"];
        assert!(contiguous_contains(&a, &a));
        assert!(contiguous_contains(&a, &["B", "C"]));
        assert!(!contiguous_contains(&a, &["B", "D"]));
        assert!(!contiguous_contains(&["A", "B"], &["B", "A"]));
        assert!(contiguous_contains(&a, &[] as &[&str]));
        assert!(contiguous_contains(&[] as &[&str], &[] as &[&str]));
        assert!(!contiguous_contains(&[] as &[&str], &["A"]));
        assert!(!contiguous_contains(&["A"], &["A", "B"]));
    }

    #[test]
    fn test_empty_filed_route() {
        assert!(!matches("", &simple(&["POINTA", "POINTB"])));
        assert!(!matches("   ", &simple(&["POINTA", "POINTB"])));
        // Even a vacuous standard route needs something filed.
        assert!(!matches("", &simple(&[])));
    }

    #[test]
    fn test_simple_routes() {
        assert!(!matches("POINTX POINTY", &simple(&["POINTA", "POINTB"])));
        assert!(!matches("POINTX POINTY", &simple(&["POINTX", "POINTB"])));
        assert!(matches("POINTA POINTB", &simple(&["POINTA", "POINTB"])));
    }

    #[test]
    fn test_superset_and_partial_join() {
        let route = simple(&["NOBAR", "Y346", "SELWI"]);
        assert!(matches("DCT NOBAR Y346 SELWI DCT", &route));
        assert!(matches("Y346 SELWI", &route));
        assert!(matches("NOBAR/N0250F150 Y346", &route));
        assert!(!matches("NOBAR SELWI", &route));
        assert!(!matches("SELWI Y346 NOBAR", &route));
    }

    #[test]
    fn test_runway_dependent_any_variant() {
        let one = runway_dependent(&[&["POINTA", "POINTB"]]);
        assert!(matches("POINTA POINTB", &one));
        assert!(!matches("POINTX POINTY", &one));

        let two = runway_dependent(&[&["POINTA", "POINTB"], &["POINTC", "POINTD"]]);
        assert!(matches("POINTA POINTB", &two));

        let later = runway_dependent(&[&["POINTA", "POINTB"], &["POINTX", "POINTY"]]);
        assert!(matches("POINTX POINTY", &later));

        let none = runway_dependent(&[&["POINTC", "POINTD"], &["POINTE"]]);
        assert!(!matches("POINTA POINTB", &none));
    }

    #[test]
    fn test_empty_runway_variant_matches_anything_filed() {
        let route = runway_dependent(&[&["POINTA"], &[]]);
        assert!(matches("WHATEVER ELSE", &route));
        assert!(!matches("", &route));
    }

    #[test]
    fn test_swapping_filed_and_standard_is_symmetric() {
        let pairs: &[(&str, &str)] = &[
            ("A B C", "B C"),
            ("A B C", "A B C"),
            ("A B", "B A"),
            ("X Y", "A B"),
            ("A B C D", "C D E"),
            ("NOBAR Y346", "NOBAR Y346 SELWI"),
        ];
        for (f, w) in pairs {
            let f_tokens: Vec<&str> = f.split(' ').collect();
            let w_tokens: Vec<&str> = w.split(' ').collect();
            assert_eq!(
                matches(f, &simple(&w_tokens)),
                matches(w, &simple(&f_tokens)),
                "asymmetric for filed={f:?} standard={w:?}"
            );
        }
    }
}

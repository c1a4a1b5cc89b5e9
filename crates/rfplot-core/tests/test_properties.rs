//! Property-based tests using proptest
//!
//! Identities that must hold for any input:
//! - unit conversion identity and round trip
//! - load ↔ Γ round trip inside the unit disk
//! - arc angles stay in [0, 2π)
//! - tick count and pinned end labels
//! - color cursor periodicity
//! - nearest lookups return a minimum-distance index

use std::f64::consts::PI;

use num_complex::Complex64;
use proptest::prelude::*;

use rfplot_core::color::ColorCursor;
use rfplot_core::constants::TAU;
use rfplot_core::frequency::{normalize_frequency, FrequencyUnit};
use rfplot_core::math::{gamma_to_load_normalized, load_to_gamma};
use rfplot_core::nearest::{nearest_complex_index, nearest_frequency_index};
use rfplot_core::scale::{compute_ticks, LinearScale};
use rfplot_core::smith::{constant_reactance_arc, constant_resistance_arc, ReactanceArc};

fn unit() -> impl Strategy<Value = FrequencyUnit> {
    prop::sample::select(FrequencyUnit::ALL.to_vec())
}

// ============================================================================
// Unit conversion
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_same_unit_is_identity(f in -1e15f64..1e15, u in unit()) {
        prop_assert_eq!(normalize_frequency(f, u, u), f);
    }

    #[test]
    fn prop_unit_round_trip(f in -1e12f64..1e12, a in unit(), b in unit()) {
        let back = normalize_frequency(normalize_frequency(f, a, b), b, a);
        prop_assert!((back - f).abs() <= 1e-12 * f.abs().max(1.0), "{} -> {}", f, back);
    }
}

// ============================================================================
// Complex transforms
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_gamma_round_trip(mag in 0.0f64..0.99, phase in 0.0f64..TAU) {
        let g = Complex64::from_polar(mag, phase);
        let z = gamma_to_load_normalized(g).unwrap();
        let back = load_to_gamma(z).unwrap();
        prop_assert!((back - g).norm() < 1e-9, "{} -> {} -> {}", g, z, back);
    }
}

// ============================================================================
// Arc geometry
// ============================================================================

fn in_turn(a: f64) -> bool {
    (0.0..TAU).contains(&a)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_resistance_arc_angles_in_range(
        r in 0.0f64..100.0,
        x1 in -1e6f64..1e6,
        x2 in -1e6f64..1e6,
    ) {
        let arc = constant_resistance_arc(r, x1, x2).unwrap();
        prop_assert!(in_turn(arc.start_angle), "start {}", arc.start_angle);
        prop_assert!(in_turn(arc.end_angle), "end {}", arc.end_angle);
        prop_assert!((arc.radius - 1.0 / (1.0 + r)).abs() < 1e-12);
    }

    #[test]
    fn prop_reactance_arc_angles_in_range(
        x in 0.01f64..100.0,
        negative in any::<bool>(),
        r1 in 0.0f64..1e6,
        r2 in 0.0f64..1e6,
    ) {
        let x = if negative { -x } else { x };
        match constant_reactance_arc(x, r1, r2).unwrap() {
            ReactanceArc::Arc(arc) => {
                prop_assert!(in_turn(arc.start_angle), "start {}", arc.start_angle);
                prop_assert!(in_turn(arc.end_angle), "end {}", arc.end_angle);
                prop_assert!((arc.cy - 1.0 / x).abs() < 1e-9);
            }
            ReactanceArc::Diameter { .. } => prop_assert!(false, "x = {} is not zero", x),
        }
    }

    #[test]
    fn prop_unit_circle_for_all_sentinels(limit in prop::sample::select(vec![1e12, 1e300, f64::MAX])) {
        let arc = constant_resistance_arc(0.0, limit, -limit).unwrap();
        prop_assert!(in_turn(arc.start_angle));
        prop_assert!(in_turn(arc.end_angle));
        prop_assert!((arc.start_angle - arc.end_angle).abs() < 1e-6
            || (arc.start_angle - arc.end_angle).abs() > TAU - 1e-6);
    }
}

// ============================================================================
// Ticks
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_tick_count_and_ends(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6,
        count in 1usize..50,
    ) {
        let max = min + span;
        let scale = LinearScale::new((min, max), (0.0, 500.0)).unwrap();
        let ticks = compute_ticks(min, max, count, &scale);
        prop_assert_eq!(ticks.len(), count + 1);
        prop_assert_eq!(ticks[0].label, min);
        prop_assert_eq!(ticks[count].label, max);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].label <= pair[1].label);
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

proptest! {
    #[test]
    fn prop_color_cursor_is_periodic(size in 1usize..12, k in 0usize..60) {
        let palette: Vec<String> = (0..size).map(|i| format!("#{:06X}", i)).collect();
        let cursor = ColorCursor::with_palette(palette).unwrap();
        let seq: Vec<String> = cursor.take(k + size).collect();
        for i in 0..k {
            prop_assert_eq!(&seq[i], &seq[i + size]);
        }
    }
}

// ============================================================================
// Nearest lookups
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_nearest_frequency_is_closest(
        mut freqs in prop::collection::vec(0.0f64..1e9, 1..64),
        query in -1e8f64..1.1e9,
    ) {
        freqs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        freqs.dedup();
        let i = nearest_frequency_index(query, &freqs).unwrap();
        let best = (freqs[i] - query).abs();
        for &f in &freqs {
            prop_assert!(best <= (f - query).abs());
        }
    }

    #[test]
    fn prop_nearest_complex_is_closest(
        points in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 1..64),
        q_mag in 0.0f64..1.2,
        q_phase in -PI..PI,
    ) {
        let (re, im): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        let (qre, qim) = (q_mag * q_phase.cos(), q_mag * q_phase.sin());
        let i = nearest_complex_index(qre, qim, &re, &im).unwrap().unwrap();
        let dist = |j: usize| (re[j] - qre).powi(2) + (im[j] - qim).powi(2);
        for j in 0..re.len() {
            prop_assert!(dist(i) <= dist(j));
            // Ties go to the lowest index
            if j < i {
                prop_assert!(dist(j) > dist(i));
            }
        }
    }
}

use proptest::prelude::*;
use shrinkage_analysis::estimator::{self, CenterKind};

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
}

proptest! {
    #[test]
    fn result_is_exact_mean_or_median(v in values()) {
        let result = estimator::least_deviation(&v).unwrap();
        let mean = estimator::mean(&v);
        let median = estimator::median(&v);
        prop_assert!(result == mean || result == median, "{} not in {{{}, {}}}", result, mean, median);
    }

    #[test]
    fn result_deviation_is_minimal_of_the_two(v in values()) {
        let e = estimator::estimate(&v).unwrap();
        prop_assert!(e.deviation() <= e.mean_deviation);
        prop_assert!(e.deviation() <= e.median_deviation);
        if e.mean_deviation == e.median_deviation {
            prop_assert_eq!(e.method, CenterKind::Median);
        }
    }

    #[test]
    fn single_element_is_identity(x in -1.0e12f64..1.0e12) {
        prop_assert_eq!(estimator::least_deviation(&[x]).unwrap(), x);
    }

    #[test]
    fn permutation_invariant(v in values()) {
        let forward = estimator::least_deviation(&v).unwrap();

        let mut reversed = v.clone();
        reversed.reverse();
        let backward = estimator::least_deviation(&reversed).unwrap();

        let mut sorted = v.clone();
        sorted.sort_by(f64::total_cmp);
        let ordered = estimator::least_deviation(&sorted).unwrap();

        // Summation order may move the mean by a few ulps.
        let tol = 1e-6;
        prop_assert!((forward - backward).abs() <= tol, "{} vs {}", forward, backward);
        prop_assert!((forward - ordered).abs() <= tol, "{} vs {}", forward, ordered);
    }

    #[test]
    fn input_is_not_mutated(v in values()) {
        let before = v.clone();
        let _ = estimator::least_deviation(&v).unwrap();
        prop_assert_eq!(v, before);
    }
}

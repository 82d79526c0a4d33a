use proptest::prelude::*;
use shrinkage_analysis::simulator;
use shrinkage_core::Measurement;

fn nonzero() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e4f64..-1.0e-3, 1.0e-3f64..1.0e4]
}

proptest! {
    #[test]
    fn simulated_shrinkage_is_the_factor(
        expected in prop::collection::vec(nonzero(), 0..32),
        s in 0.01f64..2.0,
    ) {
        let original: Vec<Measurement> =
            expected.iter().map(|&e| Measurement::new(e, e * 0.9)).collect();
        let simulated = simulator::simulate(&original, s);

        prop_assert_eq!(simulated.len(), original.len());
        for (sim, orig) in simulated.iter().zip(&original) {
            let e = orig.expected();
            prop_assert_eq!(sim.expected(), e);
            prop_assert!((sim.shrinkage() - s).abs() <= 1e-12 * s.abs().max(1.0));
            prop_assert!((sim.adjustment() - e * (1.0 - s)).abs() <= 1e-9 * e.abs().max(1.0));
        }
    }
}

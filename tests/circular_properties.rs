// Property checks shared by every circular distribution: periodicity, non-negativity,
// monotone cumulative functions that count whole turns, and unit mass at
// near-degenerate parameters.

mod util;

mod circular_properties_tests {
    use super::util::assert_close;
    use circular_kernels::traits::circular::{
        Cardioid, Cartwright, CircularDistribution, CircularUniform, InverseBatschelet,
        JonesPewsey, JonesPewseyAsym, JonesPewseySineSkewed, VonMises, VonMisesFlatTop,
        WrappedCauchy, WrappedNormal,
    };
    use proptest::prelude::*;

    const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
    const FAMILIES: usize = 11;

    /// Maps unit-interval draws `(a, b, c)` onto the parameter domain of family `idx`.
    /// The Jones-Pewsey shapes reach sharp spikes with singular tails (`psi < -2`).
    fn build(idx: usize, a: f64, b: f64, c: f64) -> Box<dyn CircularDistribution> {
        let mu = a * TWO_PI;
        match idx {
            0 => Box::new(CircularUniform),
            1 => Box::new(Cardioid { rho: 0.5 * b, mu }),
            2 => Box::new(Cartwright { zeta: 0.05 + 5.0 * b, mu }),
            3 => Box::new(WrappedNormal { rho: 0.99 * b, mu }),
            4 => Box::new(WrappedCauchy { rho: 0.95 * b, mu }),
            5 => Box::new(VonMises { kappa: 20.0 * b, mu }),
            6 => Box::new(JonesPewsey { kappa: 40.0 * b * b, psi: 20.0 * c - 10.0, mu }),
            7 => Box::new(JonesPewseySineSkewed { kappa: 40.0 * b * b, psi: 20.0 * c - 10.0, lambda: 2.0 * a - 1.0 }),
            8 => Box::new(JonesPewseyAsym { kappa: 40.0 * b * b, psi: 20.0 * c - 10.0, nu: 0.95 * a }),
            9 => Box::new(VonMisesFlatTop { kappa: 10.0 * b, nu: 2.0 * c - 1.0, mu }),
            _ => Box::new(InverseBatschelet { kappa: 10.0 * b, nu: 2.0 * c - 1.0, lambda: 2.0 * a - 1.0 }),
        }
    }

    fn unit() -> impl Strategy<Value = f64> {
        0.0..=1.0_f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn pdf_is_periodic_and_non_negative(
            idx in 0..FAMILIES, a in unit(), b in unit(), c in unit(), x in -20.0..20.0_f64
        ) {
            let d = build(idx, a, b, c);
            let p = d.pdf(&[x, x + TWO_PI, x - 2.0 * TWO_PI], None, None).unwrap();
            prop_assert!(p.data[0] >= 0.0 && p.data[0].is_finite(), "{}: {}", d.name(), p.data[0]);
            let scale = 1.0_f64.max(p.data[0]);
            prop_assert!((p.data[1] - p.data[0]).abs() <= 1e-8 * scale, "{}: {:?}", d.name(), &p.data[..]);
            prop_assert!((p.data[2] - p.data[0]).abs() <= 1e-8 * scale, "{}: {:?}", d.name(), &p.data[..]);
        }

        #[test]
        fn cdf_is_monotone_and_counts_turns(
            idx in 0..FAMILIES, a in unit(), b in unit(), c in unit(),
            xs in prop::collection::vec(-8.0..8.0_f64, 2..6)
        ) {
            let d = build(idx, a, b, c);
            let mut xs = xs;
            xs.sort_by(|l, r| l.partial_cmp(r).unwrap());
            let f = d.cdf(&xs, None, None).unwrap();
            for w in f.data[..].windows(2) {
                prop_assert!(w[1] >= w[0] - 1e-9, "{}: {:?}", d.name(), &f.data[..]);
            }
            let shifted: Vec<f64> = xs.iter().map(|&v| v + TWO_PI).collect();
            let g = d.cdf(&shifted, None, None).unwrap();
            for (lo, hi) in f.data[..].iter().zip(g.data[..].iter()) {
                prop_assert!((hi - lo - 1.0).abs() < 1e-7, "{}: {} vs {}", d.name(), lo, hi);
            }
        }
    }

    fn assert_unit_mass(d: &dyn CircularDistribution) {
        let f = d.cdf(&[0.0, TWO_PI - 1e-9, TWO_PI], None, None).unwrap();
        assert_close(f.data[0], 0.0, 1e-15);
        assert_close(f.data[1], 1.0, 1e-6);
        assert_close(f.data[2], 1.0, 1e-12);
    }

    #[test]
    fn unit_mass_near_degenerate_parameters() {
        let cases: Vec<Box<dyn CircularDistribution>> = vec![
            Box::new(VonMises { kappa: 2e-3, mu: 0.0 }),
            Box::new(VonMises { kappa: 50.0, mu: 3.0 }),
            Box::new(WrappedNormal { rho: 0.99, mu: 1.0 }),
            Box::new(WrappedCauchy { rho: 0.99, mu: 6.0 }),
            Box::new(Cartwright { zeta: 0.02, mu: 2.0 }),
            Box::new(JonesPewsey { kappa: 2e-3, psi: 4.0, mu: 0.0 }),
            Box::new(JonesPewsey { kappa: 3.0, psi: 1e-6, mu: 0.0 }),
            Box::new(JonesPewsey { kappa: 30.0, psi: -2.5, mu: 5.0 }),
            Box::new(JonesPewseySineSkewed { kappa: 2.0, psi: 0.5, lambda: 1.0 }),
            Box::new(JonesPewseySineSkewed { kappa: 2.0, psi: 0.5, lambda: -0.999999 }),
            Box::new(JonesPewseyAsym { kappa: 4.0, psi: -1.0, nu: 0.999 }),
            Box::new(VonMisesFlatTop { kappa: 5.0, nu: 1.0, mu: 0.0 }),
            Box::new(VonMisesFlatTop { kappa: 5.0, nu: -1.0, mu: 2.0 }),
            Box::new(InverseBatschelet { kappa: 3.0, nu: 0.999, lambda: 0.3 }),
            Box::new(InverseBatschelet { kappa: 3.0, nu: -0.999, lambda: -0.3 }),
            Box::new(InverseBatschelet { kappa: 2.0, nu: 0.5, lambda: 1.0 }),
            Box::new(InverseBatschelet { kappa: 2.0, nu: 0.5, lambda: 0.999999 }),
            Box::new(InverseBatschelet { kappa: 2.0, nu: -0.5, lambda: -1.0 }),
            Box::new(InverseBatschelet { kappa: 2.0, nu: -0.5, lambda: -0.999999 }),
        ];
        for d in &cases {
            assert_unit_mass(d.as_ref());
        }
    }
}

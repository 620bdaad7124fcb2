// Identities between circular families: nested special cases, degenerate limits
// and the swappable distribution handles.

mod util;

mod circular_identities_tests {
    use super::util::{assert_close, assert_slice_close};
    use circular_kernels::kernels::scientific::distributions::circular::{
        cardioid::cardioid_pdf,
        inverse_batschelet::{inverse_batschelet_cdf, inverse_batschelet_pdf},
        jones_pewsey::{jones_pewsey_cdf, jones_pewsey_normalising_constant, jones_pewsey_pdf},
        uniform::circular_uniform_pdf,
        von_mises::von_mises_pdf,
        von_mises_flat_top::von_mises_flat_top_pdf,
        wrapped_cauchy::wrapped_cauchy_pdf,
    };
    use circular_kernels::traits::circular::{
        Cardioid, CircularDistribution, CircularUniform, InverseBatschelet, JonesPewsey,
        VonMises, VonMisesFlatTop,
    };
    use minarrow::vec64;

    const PI: f64 = std::f64::consts::PI;

    #[test]
    fn jones_pewsey_psi_zero_is_von_mises() {
        let x = vec64![0.0, 0.7, 2.0, 4.5, 6.0];
        for &(kappa, mu) in &[(0.5, 0.0), (2.0, 1.0), (8.0, 5.0)] {
            let jp = jones_pewsey_pdf(&x, kappa, 0.0, mu, None, None).unwrap();
            let vm = von_mises_pdf(&x, kappa, mu, None, None).unwrap();
            assert_slice_close(&jp, &vm, 1e-12);
        }
    }

    #[test]
    fn jones_pewsey_psi_one_is_cardioid() {
        // ψ = 1 gives (1 + tanh κ cos θ); cardioid with ρ = ½ tanh κ.
        let x = vec64![0.0, 0.7, 2.0, 4.5, 6.0];
        let kappa = 0.6_f64;
        let jp = jones_pewsey_pdf(&x, kappa, 1.0, 2.0, None, None).unwrap();
        let ca = cardioid_pdf(&x, 0.5 * kappa.tanh(), 2.0, None, None).unwrap();
        assert_slice_close(&jp, &ca, 1e-8);
    }

    #[test]
    fn jones_pewsey_psi_minus_one_is_wrapped_cauchy() {
        // ψ = −1 gives 1/(cosh κ − sinh κ cos θ), the wrapped Cauchy with ρ = tanh(κ/2).
        let x = vec64![0.0, 0.7, 2.0, 4.5, 6.0];
        let kappa = 1.3_f64;
        let jp = jones_pewsey_pdf(&x, kappa, -1.0, 0.4, None, None).unwrap();
        let wc = wrapped_cauchy_pdf(&x, (0.5 * kappa).tanh(), 0.4, None, None).unwrap();
        assert_slice_close(&jp, &wc, 1e-8);
    }

    #[test]
    fn jones_pewsey_tiny_psi_is_continuous() {
        let x = vec64![0.0, 1.0, 2.5, 3.1, 5.0];
        for &(kappa, mu) in &[(0.3, 0.0), (2.0, 1.5), (10.0, 4.0)] {
            let near = jones_pewsey_pdf(&x, kappa, 1e-6, mu, None, None).unwrap();
            let at = jones_pewsey_pdf(&x, kappa, 0.0, mu, None, None).unwrap();
            assert_slice_close(&near, &at, 1e-4);
        }
    }

    #[test]
    fn jones_pewsey_uniform_limit() {
        let x = vec64![0.0, 1.0, 4.0];
        let jp = jones_pewsey_pdf(&x, 1e-4, 3.0, 0.0, None, None).unwrap();
        let un = circular_uniform_pdf(&x, None, None).unwrap();
        assert_slice_close(&jp, &un, 1e-12);
        let c = jones_pewsey_normalising_constant(0.0, -2.0).unwrap();
        assert_close(c, 1.0 / (2.0 * PI), 1e-15);
    }

    #[test]
    fn jones_pewsey_cdf_is_symmetric_about_mu() {
        // F(μ + d) − F(μ) = F(μ) − F(μ − d) for a symmetric density.
        let mu = 3.0;
        let d = 1.2;
        let f = jones_pewsey_cdf(&[mu - d, mu, mu + d], 1.7, -0.4, mu, None, None).unwrap();
        assert_close(f.data[2] - f.data[1], f.data[1] - f.data[0], 1e-8);
    }

    #[test]
    fn inverse_batschelet_identity_branch_is_flat_top() {
        let x = vec64![-3.0, -1.0, 0.0, 0.3, 1.9, 3.0];
        for &kappa in &[0.5, 2.0, 6.0] {
            let ib = inverse_batschelet_pdf(&x, kappa, 0.0, -1.0, None, None).unwrap();
            let ft = von_mises_flat_top_pdf(&x, kappa, -1.0, 0.0, None, None).unwrap();
            assert_slice_close(&ib, &ft, 1e-6);
        }
    }

    #[test]
    fn inverse_batschelet_cdf_counts_turns() {
        let two_pi = 2.0 * PI;
        let c = inverse_batschelet_cdf(&[1.0, 1.0 + two_pi, -two_pi], 1.0, 0.3, 0.2, None, None)
            .unwrap();
        assert_close(c.data[1], c.data[0] + 1.0, 1e-9);
        assert_close(c.data[2], -1.0, 1e-12);
    }

    #[test]
    fn handles_are_swappable() {
        let dists: Vec<Box<dyn CircularDistribution>> = vec![
            Box::new(CircularUniform),
            Box::new(Cardioid { rho: 0.3, mu: 1.0 }),
            Box::new(VonMises { kappa: 2.0, mu: 0.0 }),
            Box::new(JonesPewsey { kappa: 2.0, psi: 0.5, mu: 1.0 }),
            Box::new(VonMisesFlatTop { kappa: 2.0, nu: 0.5, mu: 0.3 }),
            Box::new(InverseBatschelet { kappa: 2.0, nu: 0.4, lambda: 0.5 }),
        ];
        let x = [0.0, 2.0 * PI];
        for d in &dists {
            assert!(d.validate().is_ok(), "{}", d.name());
            let c = d.cdf(&x, None, None).unwrap();
            assert_close(c.data[0], 0.0, 1e-12);
            assert_close(c.data[1], 1.0, 1e-12);
            let p = d.pdf(&x, None, None).unwrap();
            assert_close(p.data[0], p.data[1], 1e-12);
        }
    }

    #[test]
    fn handle_matches_free_function() {
        let d: &dyn CircularDistribution = &InverseBatschelet { kappa: 2.0, nu: 0.4, lambda: 0.5 };
        let x = vec64![0.5, 5.5];
        let a = d.pdf(&x, None, None).unwrap();
        let b = inverse_batschelet_pdf(&x, 2.0, 0.4, 0.5, None, None).unwrap();
        assert_eq!(&a.data[..], &b.data[..]);
    }
}

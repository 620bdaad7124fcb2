// Reference values for the Jones–Pewsey family and the inverse Batschelet distribution.
//
// Expected values were computed with mpmath 1.3.0 at 30 significant digits. Normalising
// constants come from mpmath.quad over one period, split at the kernel's kinks; the
// inverse Batschelet transforms are inverted by bisection to 1e-25 before evaluation.
//
// Quadrature-normalised densities are compared at 1e-7.

mod util;

mod circular_jones_pewsey_family_tests {
    use super::util::{assert_non_decreasing, assert_slice_close};
    use circular_kernels::kernels::scientific::distributions::circular::{
        inverse_batschelet::{inverse_batschelet_cdf, inverse_batschelet_pdf},
        jones_pewsey::{jones_pewsey_cdf, jones_pewsey_pdf},
        jones_pewsey_asym::{jones_pewsey_asym_cdf, jones_pewsey_asym_pdf},
        jones_pewsey_sine_skewed::{jones_pewsey_sine_skewed_cdf, jones_pewsey_sine_skewed_pdf},
        von_mises_flat_top::{von_mises_flat_top_cdf, von_mises_flat_top_pdf},
    };
    use minarrow::vec64;

    #[test]
    fn jones_pewsey_pdf_positive_psi() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.24580028226866624,
            0.3434049501882993,
            0.38285808611193833,
            0.24580028226866624,
            0.05756389462388972,
            0.007467812580273907,
            0.08694112144254816
        ];
        let got = jones_pewsey_pdf(&x, 2.0, 0.5, 1.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }

    #[test]
    fn jones_pewsey_pdf_negative_psi() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.47699001631507704,
            0.34008124851616256,
            0.17676938138630094,
            0.063745103849579,
            0.04352447427255882,
            0.05375606110323297,
            0.2361233899386317
        ];
        let got = jones_pewsey_pdf(&x, 1.2, -0.7, 0.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }

    #[test]
    fn jones_pewsey_cdf_positive_psi() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.0,
            0.14882752430576063,
            0.3335540514383171,
            0.6671081028766342,
            0.8092024556399707,
            0.8325397840528302,
            0.8734238531481305
        ];
        let got = jones_pewsey_cdf(&x, 2.0, 0.5, 1.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
        assert_non_decreasing(&got, 0.0);
    }

    #[test]
    fn sine_skewed_pdf_and_cdf() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.550932399751543,
            0.44616003963646983,
            0.22720844255128664,
            0.06256675825120647,
            0.029204246699149776,
            0.025534323438618594,
            0.1740896392464969
        ];
        let got = jones_pewsey_sine_skewed_pdf(&x, 1.5, -0.5, 0.4, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);

        let expect = vec64![
            0.0,
            0.264555956630696,
            0.42936273370567013,
            0.5524759171656392,
            0.5943395839862343,
            0.6199678263258888,
            0.7137611306802256
        ];
        let got = jones_pewsey_sine_skewed_cdf(&x, 1.5, -0.5, 0.4, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
        assert_non_decreasing(&got, 0.0);
    }

    #[test]
    fn asym_pdf_and_cdf() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.3842903881857947,
            0.26580643574657054,
            0.17350482109103185,
            0.06985852891321082,
            0.016113002642606608,
            0.013357604171802765,
            0.3993913101041585
        ];
        let got = jones_pewsey_asym_pdf(&x, 2.0, 0.3, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);

        let expect = vec64![
            0.0,
            0.1623825994801824,
            0.2706538484066657,
            0.38646861405628447,
            0.4254797014295677,
            0.4358193233186332,
            0.6665755988682706
        ];
        let got = jones_pewsey_asym_cdf(&x, 2.0, 0.3, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
        assert_non_decreasing(&got, 0.0);
    }

    #[test]
    fn flat_top_pdf_and_cdf_sharpened() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.5872038509492119,
            0.6543220027825185,
            0.27469721283498505,
            0.030032518140658708,
            0.013794211110552616,
            0.014268484704309647,
            0.10608800456167113
        ];
        let got = von_mises_flat_top_pdf(&x, 2.0, 0.5, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);

        let expect = vec64![
            0.0,
            0.3399972917096374,
            0.5728564214931161,
            0.6764380504550744,
            0.6952269849500041,
            0.7086312436709643,
            0.7612095040875344
        ];
        let got = von_mises_flat_top_cdf(&x, 2.0, 0.5, 0.3, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
        assert_non_decreasing(&got, 0.0);
    }

    #[test]
    fn flat_top_pdf_fully_flattened() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.29649353982993276,
            0.29630534388745566,
            0.28554714297669853,
            0.05900442420370187,
            0.000827884769505758,
            0.016864691483174415,
            0.29382573622010316
        ];
        let got = von_mises_flat_top_pdf(&x, 3.0, -1.0, 0.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }

    #[test]
    fn inverse_batschelet_pdf_general() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.23448095355855375,
            0.1136393899547095,
            0.061806822989511775,
            0.02465671810910568,
            0.015553009605159568,
            0.027142970101615944,
            0.8388668702110739
        ];
        let got = inverse_batschelet_pdf(&x, 2.0, 0.4, 0.5, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }

    #[test]
    fn inverse_batschelet_cdf_general() {
        let got = inverse_batschelet_cdf(&[1.0, 3.0], 2.0, 0.4, 0.5, None, None).unwrap();
        assert_slice_close(&got, &[0.12472848788053859, 0.18272466212276844], 1e-7);
    }

    #[test]
    fn inverse_batschelet_pdf_negative_skew() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.29671407059739463,
            0.30363254166248527,
            0.30024799010156006,
            0.11743580792329293,
            0.015665227904422232,
            0.03608721646365675,
            0.233084539593791
        ];
        let got = inverse_batschelet_pdf(&x, 1.5, -0.3, -0.6, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }

    #[test]
    fn inverse_batschelet_pdf_closed_form_constant() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.0778640876300333,
            0.04975124966442102,
            0.03522549261532276,
            0.021672812083303922,
            0.016994847481548343,
            0.03653817662292924,
            0.23256433224860226
        ];
        let got = inverse_batschelet_pdf(&x, 2.5, 0.7, 1.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }

    #[test]
    fn inverse_batschelet_pdf_identity_skew() {
        let x = vec64![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.5];
        let expect = vec64![
            0.22976460648038355,
            0.22315918702565138,
            0.2017292366087852,
            0.10082400596039374,
            0.032414215163581034,
            0.13745372439885292,
            0.2307775973878612
        ];
        let got = inverse_batschelet_pdf(&x, 1.0, 0.5, -1.0, None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-7);
    }
}

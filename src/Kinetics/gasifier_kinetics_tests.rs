#[cfg(test)]
mod tests {
    use super::super::gasifier_kinetics::{Kinetics, MassGeneration};
    use super::super::rate_laws;
    use crate::errors::KineticsError;
    use crate::reactor_state::{GasState, Params, SolidState};
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    fn create_test_params() -> Params {
        Params::new(3, 3, 0.2)
    }

    fn create_test_gas(n: usize) -> GasState {
        GasState::uniform(n, 1e5, 800.0, 0.01, 0.1)
    }

    fn create_test_solid(n: usize) -> SolidState {
        SolidState::uniform(n, 800.0, 0.5, 50.0, 10.0)
    }

    fn create_nonuniform_states(n: usize) -> (GasState, SolidState) {
        let mut gas = create_test_gas(n);
        let mut solid = create_test_solid(n);
        for i in 0..n {
            let f = i as f64;
            gas.Tg[i] = 700.0 + 40.0 * f;
            gas.P[i] = 1e5 + 1e3 * f;
            gas.rhob_h2[i] = 0.005 + 0.002 * f;
            gas.rhob_h2o[i] = 0.02 + 0.01 * f;
            gas.rhob_t[i] = 0.01 + 0.005 * f;
            solid.Ts[i] = 750.0 + 50.0 * f;
            solid.Xcr[i] = 0.2 + 0.1 * f;
            solid.rhob_b[i] = 40.0 + 5.0 * f;
            solid.rhob_c[i] = 8.0 + 2.0 * f;
        }
        (gas, solid)
    }

    #[test]
    fn test_conservation_identity_on_nonuniform_state() {
        let kin = Kinetics::new(Params::new(4, 2, 0.2)).unwrap();
        let (gas, solid) = create_nonuniform_states(4);
        let mg = kin.mass_generation(&gas, &solid);
        let total = &mg.Sh2 + &mg.Sch4 + &mg.Sco + &mg.Sco2 + &mg.Sh2o + &mg.St;
        assert_eq!(mg.Sg, total);
    }

    #[test]
    fn test_devolatilization_confined_to_pyrolysis_zone() {
        let kin = Kinetics::new(Params::new(4, 2, 0.2)).unwrap();
        // empty gas phase and no char, so only devolatilization terms survive
        let gas = GasState::uniform(4, 1e5, 800.0, 0.0, 0.1);
        let mut solid = create_test_solid(4);
        solid.rhob_c = DVector::zeros(4);
        let mg = kin.mass_generation(&gas, &solid);

        let kbv = 1.44e4 * f64::exp(-88.6e3 / (8.314 * 800.0));
        let kbt = 4.13e6 * f64::exp(-112.7e3 / (8.314 * 800.0));
        let xv = rate_laws::volatile_composition(&solid.Ts, 2);
        for i in 0..2 {
            assert_relative_eq!(mg.Sh2[i], xv.h2 * kbv * 50.0, max_relative = 1e-12);
            assert_relative_eq!(mg.Sch4[i], xv.ch4 * kbv * 50.0, max_relative = 1e-12);
            assert_relative_eq!(mg.Sco[i], xv.co * kbv * 50.0, max_relative = 1e-12);
            assert_relative_eq!(mg.Sco2[i], xv.co2 * kbv * 50.0, max_relative = 1e-12);
            assert_relative_eq!(mg.St[i], kbt * 50.0, max_relative = 1e-12);
        }
        for i in 2..4 {
            assert_eq!(mg.Sh2[i], 0.0);
            assert_eq!(mg.Sch4[i], 0.0);
            assert_eq!(mg.Sco[i], 0.0);
            assert_eq!(mg.Sco2[i], 0.0);
            assert_eq!(mg.St[i], 0.0);
        }
        // char formation and drying keep running beyond the zone
        assert!(mg.Sca[3] > 0.0);
        assert!(mg.Sh2o[3] > 0.0);
    }

    #[test]
    fn test_stale_mass_bundle_shifts_solid_heat() {
        let kin = Kinetics::new(create_test_params()).unwrap();
        let gas = create_test_gas(3);
        let cold_solid = create_test_solid(3);
        let mut hot_solid = create_test_solid(3);
        hot_solid.Ts = DVector::from_element(3, 950.0);

        let stale = kin.mass_generation(&gas, &cold_solid);
        let fresh = kin.mass_generation(&gas, &hot_solid);
        let qss_stale = kin.solid_heat_generation(&gas, &hot_solid, &stale);
        let qss_fresh = kin.solid_heat_generation(&gas, &hot_solid, &fresh);

        // the passes disagree exactly by the pyrolysis term of the Sb gap
        let gap = (&stale.Sb - &fresh.Sb) * rate_laws::DH_PY;
        for i in 0..3 {
            assert!(qss_stale[i] != qss_fresh[i]);
            assert_relative_eq!(qss_stale[i] - qss_fresh[i], gap[i], max_relative = 1e-9);
        }
    }

    #[test]
    fn test_update_state_feeds_solid_heat_from_same_pass() {
        let mut kin = Kinetics::new(create_test_params()).unwrap();
        let gas = create_test_gas(3);
        let solid = create_test_solid(3);
        kin.update_state(&gas, &solid).unwrap();

        let bundle = MassGeneration {
            Sb: kin.Sb.clone(),
            Sc: kin.Sc.clone(),
            Sca: kin.Sca.clone(),
            Sh2: kin.Sh2.clone(),
            Sh2o: kin.Sh2o.clone(),
            Sch4: kin.Sch4.clone(),
            Sco: kin.Sco.clone(),
            Sco2: kin.Sco2.clone(),
            St: kin.St.clone(),
            Sg: kin.Sg.clone(),
        };
        let expected = kin.solid_heat_generation(&gas, &solid, &bundle);
        assert_eq!(kin.qss, expected);
    }

    #[test]
    fn test_arrhenius_rates_increase_with_temperature() {
        let lo = DVector::from_element(1, 750.0);
        let hi = DVector::from_element(1, 850.0);
        assert!(rate_laws::kbv(&hi)[0] > rate_laws::kbv(&lo)[0]);
        assert!(rate_laws::kbc(&hi)[0] > rate_laws::kbc(&lo)[0]);
        assert!(rate_laws::kbt(&hi)[0] > rate_laws::kbt(&lo)[0]);

        let rhob_h2 = DVector::from_element(1, 0.01);
        let rhob_c = DVector::from_element(1, 10.0);
        assert!(
            rate_laws::char_hydrogasification(&hi, &rhob_h2, &rhob_c)[0]
                > rate_laws::char_hydrogasification(&lo, &rhob_h2, &rhob_c)[0]
        );

        let xg = DMatrix::from_element(1, 5, 0.1);
        assert!(
            rate_laws::boudouard(&hi, &xg, &rhob_c)[0]
                > rate_laws::boudouard(&lo, &xg, &rhob_c)[0]
        );

        let p = DVector::from_element(1, 1e5);
        let xcr = DVector::from_element(1, 0.5);
        assert!(
            rate_laws::steam_gasification(&hi, &p, &xg, &xcr, &rhob_c)[0]
                > rate_laws::steam_gasification(&lo, &p, &xg, &xcr, &rhob_c)[0]
        );
    }

    #[test]
    fn test_three_cell_bed_with_empty_co2_column() {
        let params = create_test_params();
        let mut gas = create_test_gas(3);
        gas.xg.column_mut(3).fill(0.0);
        let solid = create_test_solid(3);

        let tss = rate_laws::mean_solid_gas_temp(&solid.Ts, &gas.Tg);
        let kr5 = rate_laws::boudouard(&tss, &gas.xg, &solid.rhob_c);
        for i in 0..3 {
            assert_eq!(kr5[i], 0.0);
        }

        let mut kin = Kinetics::new(params).unwrap();
        kin.update_state(&gas, &solid).unwrap();
        for field in [
            &kin.Sb, &kin.Sc, &kin.Sca, &kin.Sh2, &kin.Sh2o, &kin.Sch4, &kin.Sco, &kin.Sco2,
            &kin.St, &kin.Sg, &kin.qgs, &kin.qss,
        ] {
            assert_eq!(field.len(), 3);
            assert!(field.iter().all(|v| v.is_finite()));
        }
        let total = &kin.Sh2 + &kin.Sch4 + &kin.Sco + &kin.Sco2 + &kin.Sh2o + &kin.St;
        assert_eq!(kin.Sg, total);
    }

    #[test]
    fn test_update_state_overwrites_results_wholesale() {
        let mut kin = Kinetics::new(create_test_params()).unwrap();
        assert!(kin.Sb.is_empty());
        let gas = create_test_gas(3);
        let solid = create_test_solid(3);
        kin.update_state(&gas, &solid).unwrap();
        let sb_first = kin.Sb.clone();
        assert_eq!(kin.Sb.len(), 3);
        assert_eq!(kin.qss.len(), 3);

        let mut hotter = create_test_solid(3);
        hotter.Ts = DVector::from_element(3, 900.0);
        kin.update_state(&gas, &hotter).unwrap();
        assert_eq!(kin.Sb.len(), 3);
        for i in 0..3 {
            assert!(kin.Sb[i] != sb_first[i]);
        }
    }

    #[test]
    fn test_update_state_rejects_mismatched_state() {
        let mut kin = Kinetics::new(create_test_params()).unwrap();
        let gas = create_test_gas(4);
        let solid = create_test_solid(3);
        match kin.update_state(&gas, &solid) {
            Err(KineticsError::MismatchedDimensions(msg)) => assert!(msg.contains("expected 3")),
            other => panic!("expected MismatchedDimensions, got {:?}", other),
        }
        // results stay untouched after a rejected update
        assert!(kin.Sb.is_empty());
    }

    #[test]
    fn test_pretty_print_requires_an_update_first() {
        let mut kin = Kinetics::new(create_test_params()).unwrap();
        match kin.pretty_print_rates() {
            Err(KineticsError::MissingData(_)) => {}
            other => panic!("expected MissingData, got {:?}", other),
        }
        let gas = create_test_gas(3);
        let solid = create_test_solid(3);
        kin.update_state(&gas, &solid).unwrap();
        assert!(kin.pretty_print_rates().is_ok());
    }

    #[test]
    fn test_constructor_rejects_invalid_params() {
        match Kinetics::new(Params::new(3, 5, 0.2)) {
            Err(KineticsError::InvalidConfiguration(_)) => {}
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_hand_computed_rates_for_a_uniform_cell() {
        let r = 8.314;
        let t = 800.0;
        let kin = Kinetics::new(Params::new(1, 1, 0.2)).unwrap();
        let gas = create_test_gas(1);
        let solid = create_test_solid(1);
        let mg = kin.mass_generation(&gas, &solid);

        // Ts = Tg = 800 K, so Tss = 800 K as well
        let kr2 = 6.11e3 * f64::exp(-80333.0 / (r * t)) * (0.01 / 2.0) * (10.0 / 12.0);
        let kr3 = 312.0 * f64::exp(-15098.0 / t) * (0.01 / 16.0) * 1e3;
        let kr4_eq = 0.022 * f64::exp(34730.0 / (r * t));
        let kr4 = 0.278e6
            * f64::exp(-12560.0 / (r * t))
            * ((0.01 / 28.0) * (0.01 / 18.0) - (0.01 / 44.0) * (0.01 / 2.0) / kr4_eq);
        let k6r1 = 1.25e5 * f64::exp(-28000.0 / t);
        let k6r3 = 0.313 * f64::exp(-10120.0 / t);
        let kr6 =
            k6r1 * 0.1 / (1.0 / 1e5 + k6r3 * 0.1 + 3.26e-4 * 0.1) * 0.5 * (10.0 / 12.0) * 1e3;
        let kt = 9.55e4 * f64::exp(-93.37 / (r * t));
        let kbv = 1.44e4 * f64::exp(-88.6e3 / (r * t));

        let yv = [
            1.34e-16 * t.powf(5.727),
            1.80e7 * t.powf(-1.871),
            2.48e3 * t.powf(-0.696),
            4.43e5 * t.powf(-1.495),
        ];
        let mv = [2.0, 28.0, 44.0, 16.0];
        let total: f64 = yv.iter().zip(mv.iter()).map(|(y, m)| y * m).sum();
        let v_h2 = yv[0] * mv[0] / total;

        let sh2 = v_h2 * kbv * 50.0
            + 0.01733 * kt * 0.01
            + (-2.0 * kr2 + 3.0 * kr3 + kr4 + kr6) * 2.0 * 1e-3;
        assert_relative_eq!(mg.Sh2[0], sh2, max_relative = 1e-10);

        let qgs = kin.gas_heat_generation(&gas);
        assert_relative_eq!(qgs[0], (-41.2 * kr4 + 206.0 * kr3) * 1e3, max_relative = 1e-10);

        let k5r1 = 3.6e5 * f64::exp(-20130.0 / t);
        let k5r2 = 4.15e3 * f64::exp(-11420.0 / t);
        let kr5 = k5r1 / (1.0 + 0.1 / (k5r2 * 0.1)) * (10.0 / 12.0) * 1e3;
        let kbc = 7.38e5 * f64::exp(-106.5e3 / (r * t));
        let kbt = 4.13e6 * f64::exp(-112.7e3 / (r * t));
        let sb = -(kbv + kbc + kbt) * 50.0;
        let qss = kin.solid_heat_generation(&gas, &solid, &mg);
        let expected_qss = (-74.8 * kr2 + 172.0 * kr5 + 131.0 * kr6) * 1e3 + 64e3 * sb;
        assert_relative_eq!(qss[0], expected_qss, max_relative = 1e-10);
    }
}

//! Tests for loading prior tables from disk and using them in a fit.

#[cfg(test)]
mod test_config {
    use std::{io::Write, path::PathBuf};

    use orbitize_priors::prelude::*;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("priors.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_orbit_table() {
        // ARRANGE
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "priors": [
                    { "name": "sma1", "prior": "Jeffreys(0.001, 1e4)" },
                    { "name": "ecc1", "prior": "Uniform(0, 1)" },
                    { "name": "inc1", "prior": "Sin()" },
                    { "name": "plx", "prior": "Gaussian(56.95, 0.026)" }
                ]
            }"#,
        );

        // ACT
        let config = load_prior_config(&path).unwrap();

        // ASSERT
        assert_eq!(config.names(), vec!["sma1", "ecc1", "inc1", "plx"]);
        assert_eq!(
            config.get("sma1"),
            Some(&Prior::Jeffreys(JeffreysPrior::new(0.001, 1e4).unwrap()))
        );
        assert_eq!(config.lnprior(&[5.0, 0.1, 0.0, 56.95]).unwrap(), 0.0);
    }

    #[test]
    fn test_save_load_roundtrip_and_walkers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let config = PriorConfig::new(vec![
            ParameterPrior::new("sma1", JeffreysPrior::new(1.0, 100.0).unwrap()),
            ParameterPrior::new("ecc1", UniformPrior::new(0.0, 1.0).unwrap()),
            ParameterPrior::new("inc1", SinPrior),
        ]);

        save_prior_config(&path, &config).unwrap();
        let loaded = load_prior_config(&path).unwrap();
        assert_eq!(loaded, config);

        let mut rng = StdRng::seed_from_u64(12);
        let walkers = draw_walkers(&loaded.priors(), 50, &mut rng).unwrap();
        assert_eq!(walkers.dim(), (50, 3));
    }

    #[test]
    fn test_invalid_tables() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_config(&dir, r#"{ "priors": [ { "name": "x", "prior": "Cauchy(0, 1)" } ] }"#);
        assert!(matches!(
            load_prior_config(&path),
            Err(IOError::JsonParseError(_))
        ));

        let path = write_config(
            &dir,
            r#"{ "priors": [ { "name": "", "prior": "Uniform(0, 1)" } ] }"#,
        );
        assert!(matches!(
            load_prior_config(&path),
            Err(IOError::InvalidConfig(ConfigError::EmptyName))
        ));
    }
}

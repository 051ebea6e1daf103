#[cfg(test)]
mod test {
    use judgegen::config::GenConfig;
    use judgegen::pairsum::{PairSumCase, LEN, TARGET_BOUND, VALUE_BOUND};
    use judgegen::testcase::{run, TestCase};
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path, seed: Option<u64>) -> GenConfig {
        let mut config = GenConfig::new(dir.join("pairsum.in"), dir.join("pairsum.out"));
        config.seed = seed;
        config
    }

    fn check_answer(case: &PairSumCase, output: &str) {
        let parts = output.trim_end().split(' ').map(|x| x.parse().unwrap()).collect::<Vec<i64>>();
        assert_eq!(parts.len(), 2);
        if parts[0] == -1 {
            assert_eq!(parts[1], -1);
            // nothing reachable by the scan: brute force over the smallest indices is enough
            // to be sure no pair starts there
            for i in 0..case.values.len().min(16) {
                for j in i + 1..case.values.len() {
                    assert_ne!(case.values[i] + case.values[j], case.target);
                }
            }
        } else {
            let (i, j) = (parts[0] as usize, parts[1] as usize);
            assert!(i < j);
            assert_eq!(case.values[i] + case.values[j], case.target);
            for k in i + 1..j {
                assert_ne!(case.values[i] + case.values[k], case.target);
            }
        }
    }

    #[test]
    fn test_generate_and_solve() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), None);
        run::<PairSumCase>(&config).unwrap();

        let input = fs::read_to_string(&config.input_path).unwrap();
        assert_eq!(input.lines().count(), 2);
        let case = PairSumCase::read_input(&input).unwrap();
        assert_eq!(case.values.len(), LEN);
        assert!(case.target < TARGET_BOUND);
        assert!(case.values.iter().all(|&v| v < VALUE_BOUND));

        check_answer(&case, &fs::read_to_string(&config.output_path).unwrap());
    }

    #[test]
    fn test_seed_reproduces_files() {
        let (dir1, dir2) = (tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap());
        let (config1, config2) = (config_in(dir1.path(), Some(42)), config_in(dir2.path(), Some(42)));
        let answer1 = run::<PairSumCase>(&config1).unwrap();
        let answer2 = run::<PairSumCase>(&config2).unwrap();
        assert_eq!(answer1, answer2);
        assert_eq!(fs::read(&config1.input_path).unwrap(), fs::read(&config2.input_path).unwrap());
    }

    #[test]
    fn test_solve_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), None);
        config.solve_existing = true;

        fs::write(&config.input_path, "4 9\n2 7 11 15 \n").unwrap();
        assert_eq!(run::<PairSumCase>(&config).unwrap(), Some((0, 1)));
        assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "0 1\n");

        fs::write(&config.input_path, "3 100\n1 2 3 \n").unwrap();
        assert_eq!(run::<PairSumCase>(&config).unwrap(), None);
        assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "-1 -1\n");
    }

    #[test]
    fn test_solve_existing_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path(), None);
        config.solve_existing = true;

        let err = run::<PairSumCase>(&config).unwrap_err();
        assert!(err.to_string().contains("failed reading input file"));
    }

    #[test]
    fn test_input_write_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenConfig::new(dir.path().join("missing").join("pairsum.in"), dir.path().join("pairsum.out"));

        assert!(run::<PairSumCase>(&config).is_err());
        assert!(!config.output_path.exists());
    }
}

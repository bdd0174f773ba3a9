/// Initialises `env_logger` for tests, output is captured by the test harness.
///
/// Can be called from every test, repeated initialisations are ignored since
/// tests run in parallel.
pub fn test_logger() {
    if cfg!(not(feature = "mcnz_miri")) {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

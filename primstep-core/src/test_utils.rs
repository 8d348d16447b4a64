//! Shared test utilities for `primstep-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
pub(crate) const PBT_CASES_ENV_KEY: &str = "PRIMSTEP_PBT_CASES";

/// Builds a proptest configuration, honouring `PRIMSTEP_PBT_CASES`.
///
/// Invalid or zero overrides are logged and ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = match env::var(PBT_CASES_ENV_KEY) {
        Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                env = PBT_CASES_ENV_KEY,
                raw = %raw,
                reason = %reason,
                "invalid property-test case override; using default",
            );
            default_cases
        }),
        Err(_) => default_cases,
    };
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Routes `tracing` output through the test harness so step logs show up
/// for failing tests. Safe to call from every test.
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("32", Ok(32))]
    #[case(" 7 ", Ok(7))]
    fn parse_cases_accepts_positive_integers(#[case] raw: &str, #[case] expected: Result<u32, ()>) {
        assert_eq!(parse_cases(raw).map_err(|_| ()), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn parse_cases_rejects_invalid_values(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }
}

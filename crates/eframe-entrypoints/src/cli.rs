use clap::Parser;

/// Generic function to get an environment variable, parsing it to the desired type.
pub fn get_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Parses from the command line arguments. Android launches without arguments,
/// so there the defaults apply.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    #[cfg(not(target_os = "android"))]
    {
        T::try_parse()
    }
    #[cfg(target_os = "android")]
    {
        T::try_parse_from([env!("CARGO_PKG_NAME")])
    }
}

/// Like [`parse_args`], but from an explicit argument list (first item is the binary name).
pub fn parse_args_from<T, I, S>(args: I) -> Result<T, clap::Error>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    T::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[clap(long, default_value = "3")]
        count: usize,
    }

    #[test]
    fn test_parse_args_from() {
        let args: TestArgs = parse_args_from(["test", "--count", "7"]).unwrap();
        assert_eq!(args.count, 7);

        let defaults: TestArgs = parse_args_from(["test"]).unwrap();
        assert_eq!(defaults.count, 3);
    }

    #[test]
    fn test_parse_args_from_rejects_unknown() {
        let result: Result<TestArgs, _> = parse_args_from(["test", "--nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_env_missing() {
        assert_eq!(get_env::<u32>("EFRAME_ENTRYPOINTS_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_get_env_parses_value() {
        // Safety: no other test touches this variable
        unsafe { std::env::set_var("EFRAME_ENTRYPOINTS_TEST_COUNT", "42") };
        assert_eq!(get_env::<u32>("EFRAME_ENTRYPOINTS_TEST_COUNT"), Some(42));
        assert_eq!(get_env::<bool>("EFRAME_ENTRYPOINTS_TEST_COUNT"), None);
        assert_eq!(
            get_env::<String>("EFRAME_ENTRYPOINTS_TEST_COUNT").as_deref(),
            Some("42")
        );
    }
}

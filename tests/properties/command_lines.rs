//! Property tests for toolchain command line construction.

use std::ffi::OsString;
use std::path::PathBuf;

use proptest::prelude::*;

use linkchain::application::StageRequest;
use linkchain::{ArchiveRequest, CompileRequest, LinkRequest, Toolchain};

fn file_name() -> impl Strategy<Value = PathBuf> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,10}\\.[aoc]")
        .unwrap()
        .prop_map(PathBuf::from)
}

fn program() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap()
}

fn os(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compile always runs the configured cc with the fixed profile.
    #[test]
    fn property_compile_profile_is_fixed(cc in program(), src in file_name(), obj in file_name()) {
        let toolchain = Toolchain::new(cc.clone(), "ar");
        let invocation = CompileRequest::new(&src, &obj).invocation(&toolchain);

        prop_assert_eq!(invocation.program(), cc.as_str());
        let args = invocation.args();
        let profile = os(&["-Wall", "-Wextra", "-std=c11", "-c"]);
        prop_assert_eq!(&args[..4], &profile[..]);
        prop_assert_eq!(&args[4], src.as_os_str());
        prop_assert_eq!(&args[5], "-o");
        prop_assert_eq!(&args[6], obj.as_os_str());
    }

    /// PROPERTY: archive is `ar rcs <archive> <o1> <o2>` with the configured ar.
    #[test]
    fn property_archive_shape(ar in program(), o1 in file_name(), o2 in file_name(), lib in file_name()) {
        let toolchain = Toolchain::new("cc", ar.clone());
        let invocation = ArchiveRequest::new(&o1, &o2, &lib).invocation(&toolchain);

        prop_assert_eq!(invocation.program(), ar.as_str());
        let expected = vec![
            OsString::from("rcs"),
            lib.into_os_string(),
            o1.into_os_string(),
            o2.into_os_string(),
        ];
        prop_assert_eq!(invocation.args(), &expected[..]);
    }

    /// PROPERTY: link places the archive after both objects and never compiles.
    #[test]
    fn property_link_orders_archive_last(
        o1 in file_name(), o2 in file_name(), lib in file_name(), exe in file_name()
    ) {
        let invocation = LinkRequest::new(&o1, &o2, &lib, &exe).invocation(&Toolchain::default());
        let args = invocation.args();

        prop_assert!(!args.iter().any(|a| a == "-c"));
        prop_assert_eq!(args.len(), 7);
        prop_assert_eq!(&args[2], o1.as_os_str());
        prop_assert_eq!(&args[3], o2.as_os_str());
        prop_assert_eq!(&args[4], lib.as_os_str());
        prop_assert_eq!(&args[6], exe.as_os_str());
    }
}

//! Property tests for positional argument validation.

use std::path::PathBuf;

use proptest::prelude::*;

use linkchain::error::EXIT_ARGUMENT;
use linkchain::{ArchiveRequest, BuildError, CompileRequest, LinkRequest, StageKind};

fn path() -> impl Strategy<Value = PathBuf> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[aoc])?")
        .unwrap()
        .prop_map(PathBuf::from)
}

fn path_list(max: usize) -> impl Strategy<Value = Vec<PathBuf>> {
    proptest::collection::vec(path(), 0..=max)
}

fn check_arity<T>(stage: StageKind, paths: &[PathBuf], parsed: Result<T, BuildError>) {
    if paths.len() == stage.arity() {
        assert!(parsed.is_ok(), "{stage} should accept {} paths", paths.len());
    } else {
        match parsed {
            Err(err @ BuildError::ArgumentCount { .. }) => {
                assert_eq!(err.exit_code(), EXIT_ARGUMENT);
                assert_eq!(err.stage(), Some(stage));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("{stage} accepted {} paths", paths.len()),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each stage accepts exactly its arity and nothing else.
    #[test]
    fn property_stage_arity_is_exact(paths in path_list(6)) {
        check_arity(StageKind::Compile, &paths, CompileRequest::from_args(&paths));
        check_arity(StageKind::Archive, &paths, ArchiveRequest::from_args(&paths));
        check_arity(StageKind::Link, &paths, LinkRequest::from_args(&paths));
    }

    /// PROPERTY: accepted arguments keep their positional order.
    #[test]
    fn property_link_keeps_positions(paths in proptest::collection::vec(path(), 4)) {
        let request = LinkRequest::from_args(&paths).unwrap();
        prop_assert_eq!(&request.objects[0], &paths[0]);
        prop_assert_eq!(&request.objects[1], &paths[1]);
        prop_assert_eq!(&request.archive, &paths[2]);
        prop_assert_eq!(&request.executable, &paths[3]);
    }
}

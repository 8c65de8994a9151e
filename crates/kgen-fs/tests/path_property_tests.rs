use kgen_fs::OutputPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn joined_paths_stay_under_root(segment in "[a-z0-9./-]{0,40}") {
        let root = OutputPath::root("out");
        if let Ok(joined) = root.join(&segment) {
            prop_assert!(joined.as_str().starts_with("out"));
            prop_assert!(!joined.as_str().split('/').any(|c| c == ".."));
            prop_assert!(!joined.as_str().contains('\\'));
        }
    }

    #[test]
    fn plain_names_always_join(name in "[a-z][a-z0-9-]{0,30}\\.yaml") {
        let root = OutputPath::root("out");
        let joined = root.join(&name).unwrap();
        prop_assert_eq!(joined.file_name(), Some(name.as_str()));
    }
}

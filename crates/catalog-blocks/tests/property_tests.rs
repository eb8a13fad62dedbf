//! Property tests for the pure section edits.

use catalog_blocks::{MarkerPair, PatchOutcome, RemoveOutcome, plan_patch, plan_remove};
use proptest::prelude::*;

fn markers() -> MarkerPair {
    MarkerPair::html_comment("catalog")
}

/// Host text that never contains a marker by accident.
fn host_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #\n.-]{0,200}"
}

proptest! {
    #[test]
    fn test_patch_remove_round_trip(host in host_text(), body in "[a-z \n]{0,80}") {
        let markers = markers();
        let section = markers.wrap(&body);

        let (patched, _) = plan_patch(Some(&host), &section, &markers);
        let (removed, outcome) = plan_remove(Some(&patched), &markers);

        prop_assert_eq!(outcome, RemoveOutcome::Removed);
        prop_assert_eq!(removed.unwrap(), host.trim_end());
    }

    #[test]
    fn test_patch_twice_equals_once(host in host_text(), body in "[a-z \n]{0,80}") {
        let markers = markers();
        let section = markers.wrap(&body);

        let (once, _) = plan_patch(Some(&host), &section, &markers);
        let (twice, outcome) = plan_patch(Some(&once), &section, &markers);

        prop_assert_eq!(outcome, PatchOutcome::Replaced);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_corrupted_patch_keeps_every_byte(
        before in host_text(),
        after in host_text(),
        body in "[a-z ]{0,40}",
    ) {
        let markers = markers();
        let existing = format!("{before}{}{after}", markers.start());

        let (patched, outcome) = plan_patch(Some(&existing), &markers.wrap(&body), &markers);

        prop_assert_eq!(outcome, PatchOutcome::AppendedCorrupted);
        prop_assert!(patched.len() >= existing.len());
        prop_assert!(patched.starts_with(&existing));
    }

    #[test]
    fn test_replace_preserves_surroundings(
        before in host_text(),
        after in host_text(),
        old in "[a-z]{0,20}",
        new in "[a-z]{0,20}",
    ) {
        let markers = markers();
        let existing = format!("{before}{}{after}", markers.wrap(&old));

        let (patched, outcome) = plan_patch(Some(&existing), &markers.wrap(&new), &markers);

        prop_assert_eq!(outcome, PatchOutcome::Replaced);
        prop_assert!(patched.starts_with(&before));
        prop_assert!(patched.ends_with(&after));
    }
}

//! Fuzz target for dragee collection parsing and rule evaluation.
//!
//! Goal: arbitrary JSON either fails to parse or evaluates without panic,
//! and the resulting report is internally consistent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_dragee_json
//! ```

#![no_main]

use dragee_domain::{
    DeclaredRule, build_asserter, direct_dependencies, evaluate, generate_profiler_with,
    multiple_expect_dragees,
};
use dragee_types::{Dragee, Severity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(dragees) = serde_json::from_slice::<Vec<Dragee>>(data) else {
        return;
    };

    for dragee in &dragees {
        let deps = direct_dependencies(dragee, &dragees);
        assert!(deps.dependencies.len() <= dragee.depends_on.len());
    }

    let (profiles, profiler) = generate_profiler_with(["ddd/aggregate", "ddd/entity"]);
    let rule = DeclaredRule::new("Aggregates Depend On Entities", Severity::Error, move |all| {
        let Ok(aggregates) = profiles.get("ddd/aggregate") else {
            return Vec::new();
        };
        aggregates
            .find_in(all)
            .into_iter()
            .map(|aggregate| direct_dependencies(aggregate, all))
            .flat_map(|deps| {
                multiple_expect_dragees(deps.root, &deps.dependencies, "entities only", |dep| {
                    profiler.profile_of(dep, &["ddd/entity"]).unwrap_or(false)
                })
            })
            .collect()
    });

    let Ok(asserter) = build_asserter("fuzz", [rule]) else {
        return;
    };
    let report = evaluate(&asserter, &dragees);

    assert_eq!(report.pass, report.errors.is_empty());
    assert_eq!(report.stats.errors_count, report.errors.len());
    assert_eq!(report.stats.rules_count, 1);
    let _ = serde_json::to_string(&report);
});

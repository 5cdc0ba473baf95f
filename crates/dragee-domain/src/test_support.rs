use crate::dependencies::direct_dependencies;
use crate::expect::multiple_expect_dragees;
use crate::profile::generate_profiler_with;
use crate::rule::{DeclaredRule, RuleOutcome};
use dragee_types::{DependencyKind, Dragee, Severity};

pub const AGGREGATE: &str = "ddd/aggregate";
pub const ENTITY: &str = "ddd/entity";
pub const VALUE_OBJECT: &str = "ddd/value_object";
pub const EVENT: &str = "ddd/event";
pub const REPOSITORY: &str = "ddd/repository";

pub fn dragee(name: &str, profile: &str, depends_on: &[&str]) -> Dragee {
    depends_on
        .iter()
        .fold(Dragee::new(name, profile), |d, dep| {
            d.depending_on(*dep, DependencyKind::Field)
        })
}

/// Small DDD model: `Order` depends on a repository, which aggregates must not.
pub fn ddd_dragees() -> Vec<Dragee> {
    vec![
        dragee("Order", AGGREGATE, &["OrderLine", "Money", "OrderRepository"]),
        dragee("OrderLine", ENTITY, &["Money"]),
        dragee("Money", VALUE_OBJECT, &[]),
        dragee("OrderRepository", REPOSITORY, &["Order"]),
        dragee("Customer", AGGREGATE, &["Address", "CustomerRegistered"]),
        dragee("Address", VALUE_OBJECT, &[]),
        dragee("CustomerRegistered", EVENT, &["Customer"]),
    ]
}

pub fn aggregate_dependencies_rule() -> DeclaredRule {
    let (profiles, profiler) =
        generate_profiler_with([AGGREGATE, ENTITY, VALUE_OBJECT, EVENT, REPOSITORY]);

    DeclaredRule::new(
        "Aggregates Allowed Dependencies",
        Severity::Error,
        move |dragees| {
            let aggregates = profiles
                .get(AGGREGATE)
                .expect("aggregate profile is declared")
                .find_in(dragees);

            aggregates
                .into_iter()
                .map(|aggregate| direct_dependencies(aggregate, dragees))
                .flat_map(|deps| {
                    multiple_expect_dragees(
                        deps.root,
                        &deps.dependencies,
                        "An aggregate must only depend on entities, value objects or events",
                        |dep| {
                            profiler
                                .profile_of(dep, &[ENTITY, VALUE_OBJECT, EVENT])
                                .expect("profiles are declared")
                        },
                    )
                })
                .collect()
        },
    )
}

pub fn passing_rule(label: &str) -> DeclaredRule {
    DeclaredRule::new(label, Severity::Error, |dragees| {
        dragees.iter().map(|_| RuleOutcome::success()).collect()
    })
}

/// Fails once for each name in `blamed`, whatever the input.
pub fn always_failing_rule(label: &str, blamed: &[&str]) -> DeclaredRule {
    let blamed: Vec<String> = blamed.iter().map(|s| s.to_string()).collect();
    DeclaredRule::new(label, Severity::Error, move |_| {
        blamed
            .iter()
            .map(|name| RuleOutcome::failure("always fails", name.as_str()))
            .collect()
    })
}

//! Rule assertion engine for dragee collections.
//!
//! A rule package declares rules against profiles (`ddd/aggregate`, ...),
//! registers them under a namespace and evaluates them on the dragees an
//! analyzer produced:
//!
//! ```
//! use dragee::{DeclaredRule, RuleOutcome, Severity, build_asserter, evaluate};
//! use dragee::{DependencyKind, Dragee};
//!
//! let no_cycles_to_self = DeclaredRule::new("No Self Dependency", Severity::Error, |dragees| {
//!     dragees
//!         .iter()
//!         .map(|d| {
//!             if d.depends_on.contains(&d.name) {
//!                 RuleOutcome::failure("a dragee must not depend on itself", d.name.as_str())
//!             } else {
//!                 RuleOutcome::success()
//!             }
//!         })
//!         .collect()
//! });
//!
//! let asserter = build_asserter("ddd", [no_cycles_to_self]).unwrap();
//! let dragees = vec![
//!     Dragee::new("Order", "ddd/aggregate").depending_on("Order", DependencyKind::Field),
//!     Dragee::new("Money", "ddd/value_object"),
//! ];
//!
//! let report = evaluate(&asserter, &dragees);
//! assert!(!report.pass);
//! assert_eq!(report.errors[0].rule_id.as_deref(), Some("ddd/no-self-dependency"));
//! assert_eq!(report.errors[0].dragee_name, "Order");
//! ```

#![forbid(unsafe_code)]

pub use dragee_domain::*;
pub use dragee_types::*;

#[cfg(feature = "render")]
pub use dragee_render::{render_github_annotations, render_markdown};

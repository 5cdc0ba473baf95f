use dragee_types::Dragee;

/// A dragee together with the dragees it directly depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrageeDependency<'a> {
    pub root: &'a Dragee,
    pub dependencies: Vec<&'a Dragee>,
}

/// Resolve the `depends_on` names of `root` against `all`.
///
/// Names with no matching dragee are dropped: partial collections are a normal
/// input, not an error. Order follows `root.depends_on`.
pub fn direct_dependencies<'a>(root: &'a Dragee, all: &'a [Dragee]) -> DrageeDependency<'a> {
    let dependencies = root
        .depends_on
        .names()
        .filter_map(|name| all.iter().find(|dragee| dragee.name == name))
        .collect();

    DrageeDependency { root, dependencies }
}

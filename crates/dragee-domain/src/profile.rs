//! Profile classification helpers.
//!
//! A profiler is built once from a fixed set of profile names. Asking about a
//! profile that was not declared is an error, not a `false`.

use crate::error::ProfileError;
use dragee_types::Dragee;

/// Filter and predicate bound to one profile name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileMatcher {
    profile: String,
}

impl ProfileMatcher {
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Dragees carrying this profile, in input order.
    pub fn find_in<'a>(&self, dragees: &'a [Dragee]) -> Vec<&'a Dragee> {
        dragees.iter().filter(|d| self.is(&d.profile)).collect()
    }

    pub fn is(&self, value: &str) -> bool {
        value == self.profile
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileTable {
    matchers: Vec<ProfileMatcher>,
}

impl ProfileTable {
    pub fn get(&self, profile: &str) -> Result<&ProfileMatcher, ProfileError> {
        self.matchers
            .iter()
            .find(|m| m.profile == profile)
            .ok_or_else(|| ProfileError::UnknownProfile {
                profile: profile.to_string(),
            })
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.get(profile).is_ok()
    }

    /// Declared profiles, in declaration order.
    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(|m| m.profile.as_str())
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profiler {
    table: ProfileTable,
}

impl Profiler {
    pub fn table(&self) -> &ProfileTable {
        &self.table
    }

    /// True when the dragee's profile equals any of `candidates`.
    ///
    /// Candidates are checked in order and the first match wins, so an
    /// undeclared candidate after a match is never looked up.
    pub fn profile_of(&self, dragee: &Dragee, candidates: &[&str]) -> Result<bool, ProfileError> {
        for candidate in candidates {
            if self.table.get(candidate)?.is(&dragee.profile) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn find_in<'a>(
        &self,
        profile: &str,
        dragees: &'a [Dragee],
    ) -> Result<Vec<&'a Dragee>, ProfileError> {
        Ok(self.table.get(profile)?.find_in(dragees))
    }
}

/// Build the profile table and its classifier for `profiles`.
///
/// ```
/// use dragee_domain::profile::generate_profiler_with;
/// use dragee_types::Dragee;
///
/// let (table, profiler) = generate_profiler_with(["ddd/aggregate", "ddd/entity"]);
/// let order = Dragee::new("Order", "ddd/aggregate");
///
/// assert!(table.get("ddd/entity").unwrap().is("ddd/entity"));
/// assert!(profiler.profile_of(&order, &["ddd/entity", "ddd/aggregate"]).unwrap());
/// assert!(profiler.profile_of(&order, &["ddd/value_object"]).is_err());
/// ```
pub fn generate_profiler_with<I, S>(profiles: I) -> (ProfileTable, Profiler)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = ProfileTable::default();
    for profile in profiles {
        let profile = profile.into();
        if !table.contains(&profile) {
            table.matchers.push(ProfileMatcher { profile });
        }
    }

    (table.clone(), Profiler { table })
}

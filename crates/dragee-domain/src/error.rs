use thiserror::Error;

/// Configuration errors raised while registering or looking up rules and graphs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate id `{id}` in namespace `{namespace}` (two labels produce the same slug)")]
    DuplicateId { namespace: String, id: String },

    #[error("unknown id `{id}` in namespace `{namespace}`")]
    UnknownId { namespace: String, id: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("unknown profile `{profile}`: it was not declared when the profiler was built")]
    UnknownProfile { profile: String },
}

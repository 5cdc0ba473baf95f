//! Graph registry: same registration as rules, but handlers render a view of
//! the dragees instead of asserting on them. Each graph is rendered on demand
//! by its consumer; nothing is aggregated.

use crate::error::RegistryError;
use crate::registry::ensure_unique_ids;
use dragee_types::{Dragee, generate_id};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub type GraphHandler = Arc<dyn Fn(&[Dragee]) -> String + Send + Sync>;

#[derive(Clone)]
pub struct DeclaredGraph {
    pub label: String,
    handler: GraphHandler,
}

impl DeclaredGraph {
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Dragee]) -> String + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            handler: Arc::new(handler),
        }
    }
}

impl fmt::Debug for DeclaredGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredGraph")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct Graph {
    id: String,
    label: String,
    handler: GraphHandler,
}

impl Graph {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self, dragees: &[Dragee]) -> String {
        (self.handler)(dragees)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Grapher {
    namespace: String,
    graphs: Vec<Graph>,
}

impl Grapher {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn graph(&self, graph_id: &str) -> Option<&Graph> {
        self.graphs.iter().find(|g| g.id == graph_id)
    }

    /// Render one graph by id.
    pub fn render(&self, graph_id: &str, dragees: &[Dragee]) -> Result<String, RegistryError> {
        self.graph(graph_id)
            .map(|g| g.render(dragees))
            .ok_or_else(|| RegistryError::UnknownId {
                namespace: self.namespace.clone(),
                id: graph_id.to_string(),
            })
    }
}

pub fn build_grapher(
    namespace: impl Into<String>,
    declared: impl IntoIterator<Item = DeclaredGraph>,
) -> Result<Grapher, RegistryError> {
    let namespace = namespace.into();
    let graphs: Vec<Graph> = declared
        .into_iter()
        .map(|g| Graph {
            id: generate_id(&namespace, &g.label),
            label: g.label,
            handler: g.handler,
        })
        .collect();

    ensure_unique_ids(&namespace, graphs.iter().map(Graph::id))?;

    debug!(namespace = %namespace, graphs = graphs.len(), "grapher built");
    Ok(Grapher { namespace, graphs })
}

use serde::Deserialize;

/// Global node id, shared between the REST and GraphQL APIs
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn id(&self) -> &str {
        &self.0
    }
}

mod pod;

pub use self::pod::{Container, Pod, PodSpec};

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::manifest::Str;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gvk {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
}

impl fmt::Display for Gvk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}.{}", self.kind, self.version)
        } else {
            write!(f, "{}.{}.{}", self.kind, self.version, self.group)
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResId {
    pub gvk: Gvk,
    pub name: Str,
}

impl fmt::Debug for ResId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.gvk, self.name)
    }
}

/// Renders as `kind/name` with the kind lowercased, e.g. `pod/web`.
impl fmt::Display for ResId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.gvk.kind.to_ascii_lowercase();
        if self.gvk.group.is_empty() {
            write!(f, "{kind}/{}", self.name)
        } else {
            write!(f, "{kind}.{}/{}", self.gvk.group, self.name)
        }
    }
}

/// An object produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Pod(Pod),
}

impl Resource {
    pub fn id(&self) -> ResId {
        match self {
            Resource::Pod(pod) => pod.id(),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            Resource::Pod(pod) => &pod.metadata,
        }
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        match self {
            Resource::Pod(pod) => &mut pod.metadata,
        }
    }

    pub fn as_pod(&self) -> Option<&Pod> {
        match self {
            Resource::Pod(pod) => Some(pod),
        }
    }
}

impl From<Pod> for Resource {
    fn from(pod: Pod) -> Self {
        Resource::Pod(pod)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Metadata {
    pub name: Str,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<Str, Str>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub annotations: IndexMap<Str, Str>,
}

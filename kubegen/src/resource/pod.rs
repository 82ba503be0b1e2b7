use serde::{Deserialize, Serialize};

use crate::manifest::{Str, Symbol, TypeMeta, apiversion, kind};

use super::{Gvk, Metadata, ResId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(flatten)]
    pub type_meta: TypeMeta<apiversion::V1, kind::Pod>,
    pub metadata: Metadata,
    pub spec: PodSpec,
}

impl Pod {
    pub fn new(metadata: Metadata, spec: PodSpec) -> Self {
        Self {
            type_meta: TypeMeta::default(),
            metadata,
            spec,
        }
    }

    pub fn name(&self) -> &Str {
        &self.metadata.name
    }

    pub fn containers(&self) -> &[Container] {
        &self.spec.containers
    }

    pub fn id(&self) -> ResId {
        ResId {
            gvk: Gvk {
                group: "",
                version: apiversion::V1::VALUE,
                kind: kind::Pod::VALUE,
            },
            name: self.metadata.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PodSpec {
    pub containers: Box<[Container]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Container {
    pub name: Str,
    pub image: Str,
}

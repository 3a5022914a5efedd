//! Merge-patch documents for `PATCH` operations.
//!
//! A merge-patch distinguishes a key that is absent (no change) from a key that is
//! explicitly `null` (clear the value). [`PatchField`] carries that distinction and
//! the patch records convert into the sparse JSON map the update operations accept.

use crate::core::domain::error::{ValidationError, VmwareResult};
use crate::core::domain::model::cluster::FileShares;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A sparse JSON object ready to be sent as `application/merge-patch+json`.
pub type PatchMap = Map<String, Value>;

/// One field of a merge-patch document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatchField<T> {
    /// Not sent; the server keeps the current value.
    #[default]
    Absent,
    /// Sent as `null`; the server clears the value.
    Null,
    /// Sent as the given value.
    Value(T),
}

impl<T> PatchField<T> {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, PatchField::Absent)
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for PatchField<T> {
    fn from(value: T) -> Self {
        PatchField::Value(value)
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatchField::Value(v) => v.serialize(serializer),
            PatchField::Absent | PatchField::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A missing key never reaches here: `#[serde(default)]` yields `Absent`.
        Ok(Option::<T>::deserialize(deserializer)?.map_or(PatchField::Null, PatchField::Value))
    }
}

/// Serializes a patch record and returns it as a JSON object.
fn to_patch_map<P: Serialize>(patch: &P) -> VmwareResult<PatchMap> {
    match serde_json::to_value(patch) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ValidationError::Format(format!(
            "Patch must serialize to a JSON object, got {other}"
        ))
        .into()),
        Err(e) => Err(ValidationError::Format(format!("Failed to serialize patch: {e}")).into()),
    }
}

/// Changes to a cluster.
///
/// The service refuses a patch that sets both `file_shares` and `host_count`;
/// the client sends it unchanged and surfaces the rejection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub file_shares: PatchField<FileShares>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub host_count: PatchField<i64>,
}

impl ClusterPatch {
    #[must_use]
    pub fn with_file_shares(mut self, file_shares: FileShares) -> Self {
        self.file_shares = PatchField::Value(file_shares);
        self
    }

    #[must_use]
    pub fn with_host_count(mut self, host_count: i64) -> Self {
        self.host_count = PatchField::Value(host_count);
        self
    }

    /// Converts the patch into the sparse map accepted by `update_director_sites_pvdcs_cluster`.
    pub fn as_patch(&self) -> VmwareResult<PatchMap> {
        to_patch_map(self)
    }
}

/// Changes to a VDC.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VdcPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub cpu: PatchField<i64>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub ram: PatchField<i64>,
    #[serde(default, skip_serializing_if = "PatchField::is_absent")]
    pub fast_provisioning_enabled: PatchField<bool>,
}

impl VdcPatch {
    #[must_use]
    pub fn with_cpu(mut self, cpu: i64) -> Self {
        self.cpu = PatchField::Value(cpu);
        self
    }

    #[must_use]
    pub fn with_ram(mut self, ram: i64) -> Self {
        self.ram = PatchField::Value(ram);
        self
    }

    #[must_use]
    pub fn with_fast_provisioning_enabled(mut self, enabled: bool) -> Self {
        self.fast_provisioning_enabled = PatchField::Value(enabled);
        self
    }

    /// Converts the patch into the sparse map accepted by `update_vdc`.
    pub fn as_patch(&self) -> VmwareResult<PatchMap> {
        to_patch_map(self)
    }
}

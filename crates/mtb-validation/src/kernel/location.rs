/// Where an [`crate::kernel::Issue`] was found: an entity kind, the id of
/// the offending instance (or the file's patient id, for file-level issues),
/// and the attribute name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub entity_kind: String,
    pub entity_id: String,
    pub attribute: String,
}

impl Location {
    pub fn new(entity_kind: impl Into<String>, entity_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            entity_kind: entity_kind.into(),
            entity_id: entity_id.into(),
            attribute: attribute.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}].{}", self.entity_kind, self.entity_id, self.attribute)
    }
}

use super::contact_map::ContactMap;
use super::entity::Entity;
use super::error::ModelError;

/// One or more contact maps plus file-level metadata.
///
/// The contact file is the unit of interchange with external formats: a
/// parser collaborator builds one per input, and writers consume one per
/// output. Child maps keep their insertion order; the first one is the
/// `top_map`, the default subject of single-map operations. The container is
/// typed, so only [`ContactMap`]s can ever be added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFile {
    id: String,
    maps: Vec<ContactMap>,
    target: Option<String>,
    author: Option<String>,
    method: Vec<String>,
    pub(crate) remarks: Vec<String>,
}

impl ContactFile {
    /// Creates a new, empty contact file.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Returns an iterator over the child maps in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactMap> {
        self.maps.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ContactMap> {
        self.maps.iter_mut()
    }

    /// Appends a contact map to the file.
    ///
    /// Child ids are unique within the file; `get` and `remove` rely on it.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateChild` if a map with the same id is
    /// already present; the file is left unchanged.
    pub fn add(&mut self, map: ContactMap) -> Result<(), ModelError> {
        if self.get(map.id()).is_some() {
            return Err(ModelError::DuplicateChild {
                container_id: self.id.clone(),
                child_id: map.id().to_string(),
            });
        }
        self.maps.push(map);
        Ok(())
    }

    /// Removes and returns the child map with the given id.
    pub fn remove(&mut self, map_id: &str) -> Option<ContactMap> {
        let index = self.maps.iter().position(|m| m.id() == map_id)?;
        Some(self.maps.remove(index))
    }

    /// Retrieves a child map by its id.
    pub fn get(&self, map_id: &str) -> Option<&ContactMap> {
        self.maps.iter().find(|m| m.id() == map_id)
    }

    pub fn get_mut(&mut self, map_id: &str) -> Option<&mut ContactMap> {
        self.maps.iter_mut().find(|m| m.id() == map_id)
    }

    /// The first child map, the default for single-map operations.
    pub fn top_map(&self) -> Option<&ContactMap> {
        self.maps.first()
    }

    pub fn top_map_mut(&mut self) -> Option<&mut ContactMap> {
        self.maps.first_mut()
    }

    /// The prediction target identifier.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }

    /// The file author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = Some(author.to_string());
    }

    /// The method annotation lines, in the order they were added.
    pub fn method(&self) -> &[String] {
        &self.method
    }

    /// Appends a method annotation line; like remarks, methods accumulate.
    pub fn add_method(&mut self, method: &str) {
        self.method.push(method.to_string());
    }
}

impl Entity for ContactFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn remarks(&self) -> &[String] {
        &self.remarks
    }

    fn add_remark(&mut self, remark: &str) {
        self.remarks.push(remark.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_two_map_file() -> ContactFile {
        let mut file = ContactFile::new("prediction");
        file.add(ContactMap::new("1")).unwrap();
        file.add(ContactMap::new("2")).unwrap();
        file
    }

    #[test]
    fn top_map_is_first_inserted_child() {
        let file = create_two_map_file();
        assert_eq!(file.len(), 2);
        assert_eq!(file.top_map().unwrap().id(), "1");
    }

    #[test]
    fn maps_are_retrievable_and_removable_by_id() {
        let mut file = create_two_map_file();
        assert!(file.get("2").is_some());

        let removed = file.remove("1").unwrap();
        assert_eq!(removed.id(), "1");
        assert_eq!(file.top_map().unwrap().id(), "2");
        assert!(file.remove("1").is_none());
    }

    #[test]
    fn duplicate_map_id_is_rejected_and_file_unchanged() {
        let mut file = create_two_map_file();
        let err = file.add(ContactMap::new("1")).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateChild {
                container_id: "prediction".to_string(),
                child_id: "1".to_string(),
            }
        );
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn metadata_accessors_round_trip() {
        let mut file = ContactFile::new("prediction");
        file.set_target("T0999");
        file.set_author("lab@example.org");
        assert_eq!(file.target(), Some("T0999"));
        assert_eq!(file.author(), Some("lab@example.org"));
    }

    #[test]
    fn method_lines_accumulate_like_remarks() {
        let mut file = ContactFile::new("prediction");
        file.add_method("direct coupling analysis");
        file.add_method("rescored with neural net");
        assert_eq!(
            file.method(),
            &[
                "direct coupling analysis".to_string(),
                "rescored with neural net".to_string()
            ]
        );
    }
}

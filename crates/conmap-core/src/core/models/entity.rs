/// Shared behaviour of all nodes in the contact hierarchy.
///
/// Every entity carries a caller-assigned identifier and an append-only list
/// of free-text remarks. Remarks accumulate: adding a remark never replaces
/// earlier ones, mirroring how annotation lines stack up in contact files.
pub trait Entity {
    /// The caller-assigned identifier of this entity.
    fn id(&self) -> &str;

    /// All remarks attached to this entity, in the order they were added.
    fn remarks(&self) -> &[String];

    /// Appends a remark to this entity's annotation list.
    fn add_remark(&mut self, remark: &str);
}

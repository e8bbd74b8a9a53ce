slotmap::new_key_type! {
    /// A handle naming one graphical node owned by the host document.
    ///
    /// Handles are lookup-only: holding one does not keep the node alive, and
    /// operations on a stale handle are ignored by the host. Widgets that
    /// remember a "current target" element therefore never own it.
    pub struct NodeId;
}

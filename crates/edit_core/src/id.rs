//! Opaque identifier for fields inside a [`FieldStore`](crate::FieldStore).

/// Lightweight, copyable key for a field. The value carries no meaning
/// inside this crate; hosts map their own widget ids onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}

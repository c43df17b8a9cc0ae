//! Per-error attribute storage

use crate::attribute::{AttributeKind, AttributeValue};

/// Bitset of the attribute kinds populated on one error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SettledSet(u8);

impl SettledSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(kind: AttributeKind) -> u8 {
        1 << kind.ordinal()
    }

    #[must_use]
    pub fn has(self, kind: AttributeKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    pub fn insert(&mut self, kind: AttributeKind) {
        self.0 |= Self::bit(kind);
    }

    #[must_use]
    pub fn with(mut self, kind: AttributeKind) -> Self {
        self.insert(kind);
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = AttributeKind> {
        AttributeKind::ALL
            .into_iter()
            .filter(move |kind| self.has(*kind))
    }
}

/// Attribute state of one valued error. An attribute is settled iff its slot
/// is `Some`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub(crate) scope: Option<String>,
    pub(crate) details: Option<Vec<String>>,
    pub(crate) code: Option<i64>,
    pub(crate) public_code: Option<i64>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one value, replacing whatever the slot held.
    ///
    /// An empty details list is ignored: it carries nothing to render.
    pub fn set(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Scope(scope) => self.scope = Some(scope),
            AttributeValue::Details(details) if details.is_empty() => {}
            AttributeValue::Details(details) => self.details = Some(details),
            AttributeValue::Code(code) => self.code = Some(code),
            AttributeValue::PublicCode(code) => self.public_code = Some(code),
        }
    }

    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        self.details.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    #[must_use]
    pub fn public_code(&self) -> Option<i64> {
        self.public_code
    }

    #[must_use]
    pub fn has(&self, kind: AttributeKind) -> bool {
        match kind {
            AttributeKind::Scope => self.scope.is_some(),
            AttributeKind::Details => self.details.is_some(),
            AttributeKind::Code => self.code.is_some(),
            AttributeKind::PublicCode => self.public_code.is_some(),
        }
    }

    #[must_use]
    pub fn settled(&self) -> SettledSet {
        AttributeKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .fold(SettledSet::new(), SettledSet::with)
    }
}

/// Collects a batch; a kind supplied twice keeps the later value.
impl FromIterator<AttributeValue> for Attributes {
    fn from_iter<I: IntoIterator<Item = AttributeValue>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for value in iter {
            attributes.set(value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_set_bits() {
        let mut set = SettledSet::new();
        assert!(set.is_empty());

        set.insert(AttributeKind::Code);
        set.insert(AttributeKind::Scope);
        set.insert(AttributeKind::Code);

        assert!(set.has(AttributeKind::Code));
        assert!(set.has(AttributeKind::Scope));
        assert!(!set.has(AttributeKind::Details));
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![AttributeKind::Scope, AttributeKind::Code]
        );
    }

    #[test]
    fn test_batch_last_write_wins() {
        let batch: Attributes = [
            AttributeValue::scope("first"),
            AttributeValue::code(1),
            AttributeValue::scope("second"),
            AttributeValue::code(2),
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.scope(), Some("second"));
        assert_eq!(batch.code(), Some(2));
        assert!(!batch.has(AttributeKind::Details));
    }

    #[test]
    fn test_empty_details_not_settled() {
        let batch: Attributes = [AttributeValue::details(Vec::<String>::new())]
            .into_iter()
            .collect();
        assert!(batch.settled().is_empty());
        assert!(batch.details().is_empty());
    }
}

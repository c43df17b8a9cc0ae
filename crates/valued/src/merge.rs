//! Merge/rewrap decisions for repeated attaches

use crate::attribute::merge_details;
use crate::attributes::Attributes;

/// What a rewrap does to the message of the error it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewrap {
    /// The rendered message stays as it is.
    Keep,
    /// Render again over the same cause.
    Rerender,
    /// Push a layer: the current error becomes the cause of a new one.
    Nest,
}

/// Decide how `incoming` changes `current`.
///
/// Codes always overwrite and never force a render on their own. Scope and
/// details follow these rules:
///
/// | incoming            | stored scope | result                                   |
/// |---------------------|--------------|------------------------------------------|
/// | nothing             | any          | `Keep`                                   |
/// | details             | any          | details replaced, `Rerender`             |
/// | scope               | same         | `Keep`                                   |
/// | scope               | other/none   | scope replaced, details cleared, `Nest`  |
/// | scope + details     | same         | details merged, `Rerender`               |
/// | scope + details     | other/none   | both replaced, `Nest`                    |
#[must_use]
pub fn plan(current: &Attributes, incoming: Attributes) -> (Attributes, Rewrap) {
    let mut next = current.clone();
    if incoming.code.is_some() {
        next.code = incoming.code;
    }
    if incoming.public_code.is_some() {
        next.public_code = incoming.public_code;
    }

    let rewrap = match (incoming.scope, incoming.details) {
        (None, None) => Rewrap::Keep,
        (None, Some(details)) => {
            next.details = Some(details);
            Rewrap::Rerender
        }
        (Some(scope), None) if current.scope() == Some(scope.as_str()) => Rewrap::Keep,
        (Some(scope), None) => {
            // The pushed-down layer already shows the old details.
            next.scope = Some(scope);
            next.details = None;
            Rewrap::Nest
        }
        (Some(scope), Some(details)) if current.scope() == Some(scope.as_str()) => {
            next.details = Some(merge_details(current.details(), &details));
            Rewrap::Rerender
        }
        (Some(scope), Some(details)) => {
            next.scope = Some(scope);
            next.details = Some(details);
            Rewrap::Nest
        }
    };

    (next, rewrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;

    fn batch(values: impl IntoIterator<Item = AttributeValue>) -> Attributes {
        values.into_iter().collect()
    }

    #[test]
    fn test_empty_batch_keeps() {
        let current = batch([AttributeValue::scope("svc")]);
        let (next, rewrap) = plan(&current, Attributes::new());
        assert_eq!(rewrap, Rewrap::Keep);
        assert_eq!(next, current);
    }

    #[test]
    fn test_codes_overwrite_without_render() {
        let current = batch([AttributeValue::code(1), AttributeValue::public_code(10)]);
        let (next, rewrap) = plan(&current, batch([AttributeValue::code(2)]));
        assert_eq!(rewrap, Rewrap::Keep);
        assert_eq!(next.code(), Some(2));
        assert_eq!(next.public_code(), Some(10));
    }

    #[test]
    fn test_details_only_replaces() {
        let current = batch([AttributeValue::details(["x"])]);
        let (next, rewrap) = plan(&current, batch([AttributeValue::details(["y"])]));
        assert_eq!(rewrap, Rewrap::Rerender);
        assert_eq!(next.details(), ["y".to_string()]);
    }

    #[test]
    fn test_same_scope_is_idempotent() {
        let current = batch([AttributeValue::scope("svc")]);
        let (_, rewrap) = plan(&current, batch([AttributeValue::scope("svc")]));
        assert_eq!(rewrap, Rewrap::Keep);
    }

    #[test]
    fn test_new_scope_nests() {
        let current = batch([AttributeValue::scope("a"), AttributeValue::details(["d"])]);
        let (next, rewrap) = plan(&current, batch([AttributeValue::scope("b")]));
        assert_eq!(rewrap, Rewrap::Nest);
        assert_eq!(next.scope(), Some("b"));
        assert!(next.details().is_empty());
    }

    #[test]
    fn test_same_scope_merges_details() {
        let current = batch([AttributeValue::scope("svc"), AttributeValue::details(["d1"])]);
        let (next, rewrap) = plan(
            &current,
            batch([AttributeValue::scope("svc"), AttributeValue::details(["d1", "d2"])]),
        );
        assert_eq!(rewrap, Rewrap::Rerender);
        assert_eq!(next.details(), ["d1".to_string(), "d2".to_string()]);
    }

    #[test]
    fn test_other_scope_with_details_replaces_both() {
        let current = batch([AttributeValue::scope("a"), AttributeValue::details(["d1"])]);
        let (next, rewrap) = plan(
            &current,
            batch([AttributeValue::scope("b"), AttributeValue::details(["d2"])]),
        );
        assert_eq!(rewrap, Rewrap::Nest);
        assert_eq!(next.scope(), Some("b"));
        assert_eq!(next.details(), ["d2".to_string()]);
    }
}

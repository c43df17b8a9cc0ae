//! Message rendering

/// Separator between a message and its details.
pub const DETAILS_ARROW: &str = " -> ";
/// Separator between individual details.
pub const DETAILS_SEPARATOR: &str = ", ";

/// Render the outer message of a valued error.
///
/// `[{scope}: ]{cause}[ -> {details joined by ", "}]`
#[must_use]
pub fn render(cause: &str, scope: Option<&str>, details: &[String]) -> String {
    let mut message = String::with_capacity(cause.len() + 16);
    if let Some(scope) = scope {
        message.push_str(scope);
        message.push_str(": ");
    }
    message.push_str(cause);
    if !details.is_empty() {
        message.push_str(DETAILS_ARROW);
        message.push_str(&details.join(DETAILS_SEPARATOR));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_render_forms() {
        assert_eq!(render("boom", None, &[]), "boom");
        assert_eq!(render("boom", Some("svc"), &[]), "svc: boom");
        assert_eq!(render("boom", None, &details(&["a", "b"])), "boom -> a, b");
        assert_eq!(
            render("boom", Some("svc"), &details(&["a"])),
            "svc: boom -> a"
        );
    }
}

use std::fmt::{self, Display};

/// Prepends a constant prefix to action type labels, so that the
/// labels belonging to one part of an application share a namespace.
///
/// The prefix is applied as-is. Labels are not validated or checked
/// for uniqueness; namespacing is a convention, not a guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Prefixer {
    prefix: String,
}

impl Prefixer {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produce `prefix + label`.
    pub fn apply(&self, label: &str) -> String {
        let mut prefixed = String::with_capacity(self.prefix.len() + label.len());
        prefixed.push_str(&self.prefix);
        prefixed.push_str(label);
        prefixed
    }
}

impl Display for Prefixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

/// Create a function which prepends `prefix` to any action type
/// label.
///
/// ```
/// use matchable_action::make_prefixer;
///
/// let prefixer = make_prefixer("COUNTER_");
/// assert_eq!("COUNTER_INCREMENT", prefixer("INCREMENT"));
/// ```
pub fn make_prefixer<S: Into<String>>(prefix: S) -> impl Fn(&str) -> String + Clone {
    let prefixer = Prefixer::new(prefix);
    move |label: &str| prefixer.apply(label)
}

#[cfg(test)]
mod tests {
    use super::{make_prefixer, Prefixer};

    #[test]
    fn prefixes_label() {
        let prefixer = make_prefixer("COUNTER_");
        assert_eq!("COUNTER_INCREMENT", prefixer("INCREMENT"));
        assert_eq!("COUNTER_DECREMENT", prefixer("DECREMENT"));
    }

    #[test]
    fn no_trimming_or_escaping() {
        let prefixer = make_prefixer(" a/b ");
        assert_eq!(" a/b  c\n", prefixer(" c\n"));
        assert_eq!(" a/b ", prefixer(""));
        assert_eq!("x", make_prefixer("")("x"));
        assert_eq!("", make_prefixer("")(""));
    }

    #[test]
    fn duplicate_labels_are_accepted() {
        let prefixer = make_prefixer("TODO/");
        assert_eq!(prefixer("ADD"), prefixer("ADD"));
    }

    #[test]
    fn prefixer_value() {
        let prefixer = Prefixer::new("USER_");
        assert_eq!("USER_", prefixer.prefix());
        assert_eq!("USER_", prefixer.to_string());
        assert_eq!("USER_LOGIN", prefixer.apply("LOGIN"));
        assert_eq!("ünï_cødé", Prefixer::new("ünï_").apply("cødé"));
    }
}

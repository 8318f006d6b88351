/// Type-to-confirm check of the single-entity delete dialog.
///
/// The typed text must reproduce the entity's name exactly. This only guards
/// against accidental clicks; the server authorizes the delete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeToConfirm {
    expected: String,
    typed: String,
}

impl TypeToConfirm {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            typed: String::new(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn set_typed(&mut self, typed: impl Into<String>) {
        self.typed = typed.into();
    }

    pub fn is_confirmed(&self) -> bool {
        !self.expected.is_empty() && self.typed == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_required() {
        let mut confirm = TypeToConfirm::new("Campanha Verão");
        assert!(!confirm.is_confirmed());

        confirm.set_typed("campanha verão");
        assert!(!confirm.is_confirmed());
        confirm.set_typed("Campanha Verão ");
        assert!(!confirm.is_confirmed());
        confirm.set_typed("Campanha Verão");
        assert!(confirm.is_confirmed());
    }

    #[test]
    fn test_empty_name_never_confirms() {
        let confirm = TypeToConfirm::new("");
        assert!(!confirm.is_confirmed());
    }
}

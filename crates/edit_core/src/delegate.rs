//! Optional per-field hooks consulted before edits and IME transitions.

/// Answer from an [`ImeDelegate`] hook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    Accept,
    Reject,
}

impl Verdict {
    #[inline]
    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

/// Hooks a host can install on a [`TextField`](crate::TextField).
///
/// Every method defaults to [`Verdict::Accept`], so a delegate only needs
/// to override what it cares about. A field without a delegate behaves as
/// if every hook accepted.
pub trait ImeDelegate {
    /// The field is about to attach to the input method.
    fn can_attach(&mut self) -> Verdict {
        Verdict::Accept
    }

    /// The field is about to detach from the input method.
    fn can_detach(&mut self) -> Verdict {
        Verdict::Accept
    }

    /// `text` (already cut at the first newline) is about to be inserted.
    fn will_insert(&mut self, text: &str) -> Verdict {
        let _ = text;
        Verdict::Accept
    }

    /// `deleted` is about to be removed by a backspace.
    fn will_delete_backward(&mut self, deleted: &str) -> Verdict {
        let _ = deleted;
        Verdict::Accept
    }

    /// `deleted` is about to be removed by a forward delete.
    fn will_delete_forward(&mut self, deleted: &str) -> Verdict {
        let _ = deleted;
        Verdict::Accept
    }

    /// A newline was typed. Accepting detaches the field from the input
    /// method; rejecting keeps it attached (the host handled the submit).
    fn will_submit(&mut self, content: &str) -> Verdict {
        let _ = content;
        Verdict::Accept
    }
}

/// Ask the delegate, if any. No delegate always accepts.
pub(crate) fn consult(
    delegate: &mut Option<Box<dyn ImeDelegate>>,
    ask: impl FnOnce(&mut dyn ImeDelegate) -> Verdict,
) -> Verdict {
    match delegate.as_deref_mut() {
        Some(d) => ask(d),
        None => Verdict::Accept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectInserts;

    impl ImeDelegate for RejectInserts {
        fn will_insert(&mut self, _text: &str) -> Verdict {
            Verdict::Reject
        }
    }

    #[test]
    fn missing_delegate_accepts() {
        let mut none: Option<Box<dyn ImeDelegate>> = None;
        assert_eq!(consult(&mut none, |d| d.will_insert("x")), Verdict::Accept);
    }

    #[test]
    fn defaults_accept_and_overrides_apply() {
        let mut d: Option<Box<dyn ImeDelegate>> = Some(Box::new(RejectInserts));
        assert_eq!(consult(&mut d, |d| d.will_insert("x")), Verdict::Reject);
        assert_eq!(consult(&mut d, |d| d.will_delete_backward("x")), Verdict::Accept);
        assert_eq!(consult(&mut d, |d| d.can_attach()), Verdict::Accept);
    }
}

//! Sample API: value-or-fallback.

/// Fallback returned by [`echo_or_default`].
pub const DEFAULT_FALLBACK: &str = "default";

/// Return `value` when present, otherwise `fallback`.
///
/// An empty string is a present value.
///
/// # Example
///
/// ```
/// use mypackage::echo;
///
/// assert_eq!(echo(Some("hi"), "fallback"), "hi");
/// assert_eq!(echo(Some(""), "fallback"), "");
/// assert_eq!(echo(None, "fallback"), "fallback");
/// ```
#[inline]
#[must_use]
pub fn echo<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) => v,
        None => {
            #[cfg(feature = "log")]
            log::trace!("echo: no value, using fallback {fallback:?}");
            fallback
        }
    }
}

/// [`echo`] with [`DEFAULT_FALLBACK`] as the fallback.
#[inline]
#[must_use]
pub fn echo_or_default(value: Option<&str>) -> &str {
    echo(value, DEFAULT_FALLBACK)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn echo_returns_value_when_present() {
        assert_eq!(echo(Some("hi"), "fallback"), "hi");
    }

    #[test]
    fn echo_returns_fallback_when_absent() {
        assert_eq!(echo(None, "fallback"), "fallback");
    }

    #[test]
    fn echo_keeps_empty_value() {
        assert_eq!(echo(Some(""), "fallback"), "");
    }

    #[test]
    fn echo_or_default_uses_fixed_literal() {
        assert_eq!(echo_or_default(None), "default");
        assert_eq!(echo_or_default(Some("hi")), "hi");
    }

    #[test]
    fn echo_borrows_without_copying() {
        let owned = String::from("payload");
        let out = echo(Some(owned.as_str()), "fallback");
        assert!(std::ptr::eq(out, owned.as_str()));
    }

    proptest! {
        #[test]
        fn present_value_wins(v in ".*", f in ".*") {
            prop_assert_eq!(echo(Some(v.as_str()), &f), v.as_str());
        }

        #[test]
        fn absent_value_yields_fallback(f in ".*") {
            prop_assert_eq!(echo(None, &f), f.as_str());
        }

        #[test]
        fn omitted_fallback_matches_default(v in proptest::option::of(".*")) {
            prop_assert_eq!(
                echo_or_default(v.as_deref()),
                echo(v.as_deref(), DEFAULT_FALLBACK)
            );
        }

        #[test]
        fn repeated_calls_agree(v in proptest::option::of(".*"), f in ".*") {
            let first = echo(v.as_deref(), &f);
            let second = echo(v.as_deref(), &f);
            prop_assert_eq!(first, second);
        }
    }
}

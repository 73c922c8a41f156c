//! The reader's extension surface.
//!
//! Each hook converts one form kind into a host value. Implementations
//! override whichever hooks they care about and inherit the defaults
//! for the rest; [`DefaultHooks`] overrides nothing.

use crate::value::Value;

/// Replaceable per-kind value constructors.
pub trait ReadHooks {
    /// Convert symbol text to a value.
    ///
    /// Implementations could intern, resolve, or wrap symbols in a
    /// richer type; the default passes the raw text through.
    fn make_symbol(&self, text: &str) -> Value {
        Value::Symbol(text.to_string())
    }

    /// Convert keyword text (without the leading colon) to a value.
    fn make_keyword(&self, text: &str) -> Value {
        Value::Keyword(text.to_string())
    }

    /// Handle a `'form` quote form.
    ///
    /// The default wraps the quoted value in a two-element sequence
    /// headed by the `quote` symbol.
    fn handle_quote(&self, inner: Value) -> Value {
        Value::List(vec![self.make_symbol("quote"), inner])
    }

    /// Handle a `^tag form` meta form.
    ///
    /// Implementations may attach the tag to the value somehow; the
    /// default discards the tag and returns the tagged form.
    fn handle_meta(&self, tag: Value, form: Value) -> Value {
        let _ = tag;
        form
    }

    /// Handle a `#tag form` dispatch form.
    ///
    /// This is the open extension point of the surface syntax:
    /// implementations can map tags to constructors, look them up in
    /// runtime state, or reject unknown tags. The default preserves the
    /// pair untouched.
    fn handle_dispatch(&self, tag: Value, form: Value) -> Value {
        Value::tagged(tag, form)
    }
}

/// The stock hook set; every hook keeps its default behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl ReadHooks for DefaultHooks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbol_and_keyword_pass_through() {
        assert_eq!(
            DefaultHooks.make_symbol("foo/bar"),
            Value::Symbol("foo/bar".to_string())
        );
        assert_eq!(
            DefaultHooks.make_keyword("k"),
            Value::Keyword("k".to_string())
        );
    }

    #[test]
    fn test_default_quote_wraps() {
        let quoted = DefaultHooks.handle_quote(Value::Symbol("x".to_string()));
        assert_eq!(quoted.to_string(), "(quote x)");
    }

    #[test]
    fn test_default_meta_drops_tag() {
        let value = DefaultHooks.handle_meta(
            Value::Keyword("private".to_string()),
            Value::Symbol("x".to_string()),
        );
        assert_eq!(value, Value::Symbol("x".to_string()));
    }

    #[test]
    fn test_default_dispatch_preserves() {
        let value = DefaultHooks.handle_dispatch(
            Value::Symbol("inst".to_string()),
            Value::Str("2021-03-13".to_string()),
        );
        assert_eq!(value.to_string(), "#inst \"2021-03-13\"");
    }

    #[test]
    fn test_overriding_one_hook_keeps_the_rest() {
        struct Upper;
        impl ReadHooks for Upper {
            fn make_symbol(&self, text: &str) -> Value {
                Value::Symbol(text.to_uppercase())
            }
        }
        assert_eq!(Upper.make_symbol("abc"), Value::Symbol("ABC".to_string()));
        // handle_quote uses the overridden make_symbol for its head
        let quoted = Upper.handle_quote(Value::Int(1));
        assert_eq!(quoted.to_string(), "(QUOTE 1)");
    }
}

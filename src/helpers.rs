//! Named string helpers callable with JSON arguments
//!
//! Exposes every string operation under a stable name so view engines and
//! other dynamic callers can invoke them without linking against the
//! functions directly. JSON `null` (or a missing argument) stands for an
//! absent string.

use crate::error::{Result, StringError};
use crate::phone::PhoneStyle;
use crate::{encoding, parse, phone, text};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Type alias for helper function results
pub type HelperResult = Result<Value>;

/// A string operation callable by name
pub trait Helper: Send + Sync {
    fn call(&self, args: &[Value]) -> HelperResult;

    /// Name used in argument errors
    fn name(&self) -> &str {
        "unnamed"
    }

    fn description(&self) -> &str {
        ""
    }

    /// Reject an argument list before `call` sees it
    fn validate_args(&self, _args: &[Value]) -> Result<()> {
        Ok(())
    }
}

struct FunctionHelper<F>
where
    F: Fn(&[Value]) -> HelperResult + Send + Sync,
{
    func: F,
    name: String,
    description: String,
    arity: RangeInclusive<usize>,
}

impl<F> Helper for FunctionHelper<F>
where
    F: Fn(&[Value]) -> HelperResult + Send + Sync,
{
    fn call(&self, args: &[Value]) -> HelperResult {
        (self.func)(args)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn validate_args(&self, args: &[Value]) -> Result<()> {
        if self.arity.contains(&args.len()) {
            return Ok(());
        }

        let expected = if self.arity.start() == self.arity.end() {
            self.arity.start().to_string()
        } else {
            format!("{} to {}", self.arity.start(), self.arity.end())
        };
        Err(StringError::helper(format!(
            "{} helper takes {} arguments, got {}",
            self.name(),
            expected,
            args.len()
        )))
    }
}

/// Registry of string helpers
pub struct HelperRegistry {
    helpers: HashMap<String, Arc<dyn Helper>>,
}

// Arc<dyn Helper> doesn't implement Debug
impl std::fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helper_count", &self.helpers.len())
            .field("helper_names", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperRegistry {
    /// Create a registry holding the built-in string helpers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_helpers();
        registry
    }

    /// Create a registry with no helpers at all
    pub fn empty() -> Self {
        Self {
            helpers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, helper: impl Helper + 'static) {
        log::debug!("Registering string helper: {}", name);
        self.helpers.insert(name.to_string(), Arc::new(helper));
    }

    /// Register a closure accepting any number of arguments
    pub fn register_fn<F>(&mut self, name: &str, description: &str, func: F)
    where
        F: Fn(&[Value]) -> HelperResult + Send + Sync + 'static,
    {
        self.register_fn_with_arity(name, description, 0..=usize::MAX, func);
    }

    /// Register a closure that is only called with `arity` arguments
    pub fn register_fn_with_arity<F>(
        &mut self,
        name: &str,
        description: &str,
        arity: RangeInclusive<usize>,
        func: F,
    ) where
        F: Fn(&[Value]) -> HelperResult + Send + Sync + 'static,
    {
        let helper = FunctionHelper {
            func,
            name: name.to_string(),
            description: description.to_string(),
            arity,
        };
        self.register(name, helper);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Helper>> {
        self.helpers.get(name).cloned()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.helpers.len()
    }

    /// Registered helper names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.helpers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Call a helper by name
    pub fn call(&self, name: &str, args: &[Value]) -> HelperResult {
        match self.helpers.get(name) {
            Some(helper) => {
                helper.validate_args(args)?;
                helper.call(args)
            }
            None => Err(StringError::helper(format!("Helper '{}' not found", name))),
        }
    }

    fn register_builtin_helpers(&mut self) {
        self.register_fn_with_arity(
            "phone",
            "Format a 10-character phone number, optionally with a style (parens or dashes)",
            1..=2,
            |args| {
                let style = match args.get(1) {
                    None | Some(Value::Null) => PhoneStyle::default(),
                    Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
                        StringError::helper(format!("phone helper: unknown style {}: {}", v, e))
                    })?,
                };
                let value = text_arg("phone", args, 0)?;
                Ok(optional_string(
                    phone::format_phone_number(value, style).map(|s| s.into_owned()),
                ))
            },
        );

        self.register_fn_with_arity(
            "phone_no_parens",
            "Format a 10-character phone number as XXX-XXX-XXXX",
            1..=1,
            |args| {
                let value = text_arg("phone_no_parens", args, 0)?;
                Ok(optional_string(
                    phone::to_phone_number_no_parens(value).map(|s| s.into_owned()),
                ))
            },
        );

        self.register_fn_with_arity(
            "substring_safe",
            "Suffix starting at a character index, or the input if out of range",
            2..=2,
            |args| {
                let value = text_arg("substring_safe", args, 0)?;
                let index = args.get(1).and_then(Value::as_u64).ok_or_else(|| {
                    StringError::helper(
                        "substring_safe helper requires a non-negative index argument",
                    )
                })?;
                // An index beyond usize can't be within any string.
                let index = usize::try_from(index).unwrap_or(usize::MAX);
                Ok(optional_string(
                    text::substring_safe(value, index).map(str::to_string),
                ))
            },
        );

        self.register_fn_with_arity(
            "camel_case",
            "Lowercase the first character",
            1..=1,
            |args| {
                let value = required_text_arg("camel_case", args)?;
                text::convert_pascal_case_to_camel_case(value).map(Value::String)
            },
        );

        self.register_fn_with_arity(
            "pascal_case",
            "Uppercase the first character",
            1..=1,
            |args| {
                let value = required_text_arg("pascal_case", args)?;
                text::convert_camel_case_to_pascal_case(value).map(Value::String)
            },
        );

        self.register_fn_with_arity(
            "base64_encode",
            "Base64-encode UTF-8 text",
            1..=1,
            |args| {
                let value = text_arg("base64_encode", args, 0)?;
                encoding::base64_encode(value).map(Value::String)
            },
        );

        self.register_fn_with_arity(
            "base64_decode",
            "Decode Base64 into UTF-8 text",
            1..=1,
            |args| {
                let value = text_arg("base64_decode", args, 0)?;
                encoding::base64_decode(value).map(Value::String)
            },
        );

        self.register_fn_with_arity(
            "to_int",
            "Parse a base-10 integer, using the default only for empty input",
            1..=2,
            |args| {
                let value = text_arg("to_int", args, 0)?;
                let default = match args.get(1) {
                    None | Some(Value::Null) => None,
                    Some(v) => Some(
                        v.as_i64()
                            .and_then(|n| i32::try_from(n).ok())
                            .ok_or_else(|| {
                                StringError::helper(format!(
                                    "to_int helper: default {} is not a 32-bit integer",
                                    v
                                ))
                            })?,
                    ),
                };
                Ok(parse::to_int(value, default)?.map_or(Value::Null, Value::from))
            },
        );
    }
}

/// String argument at `index`; `null` or missing means absent
fn text_arg<'a>(helper: &str, args: &'a [Value], index: usize) -> Result<Option<&'a str>> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(StringError::helper(format!(
            "{} helper expects a string argument, got {}",
            helper, other
        ))),
    }
}

fn required_text_arg<'a>(helper: &str, args: &'a [Value]) -> Result<&'a str> {
    text_arg(helper, args, 0)?
        .ok_or_else(|| StringError::helper(format!("{} helper requires a text argument", helper)))
}

fn optional_string(value: Option<String>) -> Value {
    value.map_or(Value::Null, Value::String)
}

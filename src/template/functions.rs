//! Helper functions available to generated definitions

use std::cell::Cell;
use std::collections::BTreeMap;

use minijinja::value::{Rest, Value};
use minijinja::{context, Environment, Error, ErrorKind, State};

/// How deeply definitions may invoke each other before rendering fails
pub const MAX_NESTING: usize = 32;

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// Register `props` and `template` with an environment.
///
/// Every generated definition relies on both, so they must be registered
/// before any definition is compiled.
pub fn register_functions(env: &mut Environment<'static>) {
    env.add_function("props", props);
    env.add_function("template", template);
}

/// `props(key1, value1, key2, value2, ...)` -> mapping
///
/// Keys are stringified. A trailing key without a value is ignored and a
/// repeated key keeps its last value.
pub fn props(args: Rest<Value>) -> Value {
    let map: BTreeMap<String, Value> = args
        .0
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].clone()))
        .collect();
    Value::from_serialize(&map)
}

/// `template(name, props?)` renders definition `name` with `props` as its
/// whole context (an empty one when omitted).
pub fn template(state: &State, name: &str, props: Option<Value>) -> Result<Value, Error> {
    let _nesting = NestingGuard::enter(name)?;
    let definition = state.env().get_template(name)?;
    let rendered = definition.render(props.unwrap_or_else(|| context! {}))?;
    Ok(Value::from_safe_string(rendered))
}

/// Tracks nested `template` calls on the current thread
struct NestingGuard;

impl NestingGuard {
    fn enter(name: &str) -> Result<Self, Error> {
        NESTING.with(|depth| {
            if depth.get() >= MAX_NESTING {
                return Err(Error::new(
                    ErrorKind::InvalidOperation,
                    format!(
                        "invoking '{}' exceeds the nesting limit of {} definitions",
                        name, MAX_NESTING
                    ),
                ));
            }
            depth.set(depth.get() + 1);
            Ok(NestingGuard)
        })
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

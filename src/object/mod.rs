//! Runtime values and the lexically-scoped environment they live in.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

mod environment;
pub use environment::Environment;

/// A native function backing a built-in like `len`.
pub type BuiltinFn = fn(&[Rc<Object>]) -> Rc<Object>;

/// The closed sum of runtime values. `Rc<Object>` is the currency the
/// evaluator passes around so that `TRUE`/`FALSE`/`NULL` can be shared
/// singletons and `Function` can share its captured environment cheaply.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Str(String),
    Boolean(bool),
    Null,
    ReturnValue(Rc<Object>),
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        env: Rc<RefCell<Environment>>,
    },
    Builtin(BuiltinFn),
}

impl Object {
    /// The tag used in error messages and `Display`-free diagnostics (the
    /// `TYPE`/`KIND` placeholders in spec error text).
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Str(_) => "STRING",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function { .. } => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Str(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => write!(f, "null"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
            Object::Function {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self)
    }
}

#[cfg(test)]
mod tests;

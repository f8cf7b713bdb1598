//! Recursive tree-walking evaluator. `eval` dispatches on the AST node kind
//! and threads an [`Rc<RefCell<Environment>>`] through the walk.

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::object::{Environment, Object};

mod builtins;

/// Canonical singleton booleans/null — allocated once so `==`/`!=` on
/// non-integer, non-string operands can be decided by `Rc::ptr_eq`.
pub static TRUE: Lazy<Rc<Object>> = Lazy::new(|| Rc::new(Object::Boolean(true)));
pub static FALSE: Lazy<Rc<Object>> = Lazy::new(|| Rc::new(Object::Boolean(false)));
pub static NULL: Lazy<Rc<Object>> = Lazy::new(|| Rc::new(Object::Null));

fn native_bool_to_object(value: bool) -> Rc<Object> {
    if value {
        Rc::clone(&TRUE)
    } else {
        Rc::clone(&FALSE)
    }
}

fn new_error(message: impl Into<String>) -> Rc<Object> {
    Rc::new(Object::Error(message.into()))
}

/// Evaluates a whole program: unwraps a top-level `ReturnValue` and
/// short-circuits on the first `Error`, returning the last statement's
/// value otherwise.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = Rc::clone(&NULL);

    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match &*result {
            Object::ReturnValue(value) => return Rc::clone(value),
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block: unlike `eval_program`, a `ReturnValue` is **not**
/// unwrapped here — it bubbles up unchanged so that nested `if` blocks
/// don't swallow an enclosing function's `return`.
fn eval_block_statement(block: &BlockStatement, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = Rc::clone(&NULL);

    for stmt in &block.statements {
        result = eval_statement(stmt, env);
        if matches!(&*result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(stmt: &Statement, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    log::trace!("evaluator: evaluating statement opened by {:?}", stmt.token_literal());
    match stmt {
        Statement::Expression { expression, .. } => eval_expression(expression, env),
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Rc::new(Object::ReturnValue(value))
        }
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.name.clone(), value);
            Rc::clone(&NULL)
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expr: &Expression, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    log::trace!(
        "evaluator: evaluating expression at {:?}",
        expr.token().literal
    );
    match expr {
        Expression::IntegerLiteral { value, .. } => Rc::new(Object::Integer(*value)),
        Expression::StringLiteral { value, .. } => Rc::new(Object::Str(value.clone())),
        Expression::Boolean { value, .. } => native_bool_to_object(*value),
        Expression::Prefix {
            operator, right, ..
        } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, &right)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, &left, &right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::Identifier(ident) => eval_identifier(&ident.name, env),
        Expression::Function(func) => Rc::new(Object::Function {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: Rc::clone(env),
        }),
        Expression::Call {
            function,
            arguments,
            ..
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }

            let mut args = Vec::with_capacity(arguments.len());
            for arg in arguments {
                let evaluated = eval_expression(arg, env);
                if evaluated.is_error() {
                    return evaluated;
                }
                args.push(evaluated);
            }

            apply_function(&function, args)
        }
    }
}

fn eval_prefix_expression(operator: &str, right: &Rc<Object>) -> Rc<Object> {
    match operator {
        "!" => eval_bang_operator_expression(right),
        "-" => eval_minus_prefix_operator_expression(right),
        _ => new_error(format!("unknown operator: {operator}")),
    }
}

fn eval_bang_operator_expression(right: &Object) -> Rc<Object> {
    match right {
        Object::Boolean(true) => Rc::clone(&FALSE),
        Object::Boolean(false) => Rc::clone(&TRUE),
        Object::Null => Rc::clone(&TRUE),
        _ => Rc::clone(&FALSE),
    }
}

fn eval_minus_prefix_operator_expression(right: &Object) -> Rc<Object> {
    match right {
        Object::Integer(value) => Rc::new(Object::Integer(-value)),
        other => new_error(format!("operator '-' not defined on {}", other.kind())),
    }
}

fn eval_infix_expression(operator: &str, left: &Rc<Object>, right: &Rc<Object>) -> Rc<Object> {
    match (&**left, &**right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        (Object::Str(l), Object::Str(r)) => eval_string_infix_expression(operator, l, r),
        _ if left.kind() != right.kind() => new_error(format!(
            "type mismatch: {} {operator} {}",
            left.kind(),
            right.kind()
        )),
        _ => match operator {
            "==" => native_bool_to_object(Rc::ptr_eq(left, right)),
            "!=" => native_bool_to_object(!Rc::ptr_eq(left, right)),
            _ => new_error(format!(
                "unknown operator: {} {operator} {}",
                left.kind(),
                right.kind()
            )),
        },
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Integer(left + right)),
        "-" => Rc::new(Object::Integer(left - right)),
        "*" => Rc::new(Object::Integer(left * right)),
        "/" => Rc::new(Object::Integer(left / right)),
        "<" => native_bool_to_object(left < right),
        ">" => native_bool_to_object(left > right),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        _ => new_error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix_expression(operator: &str, left: &str, right: &str) -> Rc<Object> {
    match operator {
        "+" => Rc::new(Object::Str(format!("{left}{right}"))),
        "==" => native_bool_to_object(left == right),
        "!=" => native_bool_to_object(left != right),
        _ => new_error(format!("operartor {operator} not supported on type string")),
    }
}

fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Rc<RefCell<Environment>>,
) -> Rc<Object> {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        Rc::clone(&NULL)
    }
}

/// Everything is truthy except `FALSE` and `NULL` — including the integer
/// `0`. No special case is carved out for it.
fn is_truthy(obj: &Object) -> bool {
    !matches!(obj, Object::Boolean(false) | Object::Null)
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    new_error(format!("identifier is undefined: {name}"))
}

fn apply_function(function: &Object, args: Vec<Rc<Object>>) -> Rc<Object> {
    match function {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = extend_function_env(parameters, env, args);
            let evaluated = eval_block_statement(body, &call_env);
            unwrap_return_value(evaluated)
        }
        Object::Builtin(builtin) => builtin(&args),
        other => new_error(format!("not a function: {}", other.kind())),
    }
}

fn extend_function_env(
    parameters: &[crate::ast::Identifier],
    closure: &Rc<RefCell<Environment>>,
    args: Vec<Rc<Object>>,
) -> Rc<RefCell<Environment>> {
    let env = Environment::new_enclosed(Rc::clone(closure));
    for (param, arg) in parameters.iter().zip(args) {
        env.borrow_mut().set(param.name.clone(), arg);
    }
    env
}

/// Unwraps a `ReturnValue` at the call boundary so it does not keep
/// propagating past the function that returned it.
fn unwrap_return_value(obj: Rc<Object>) -> Rc<Object> {
    match &*obj {
        Object::ReturnValue(value) => Rc::clone(value),
        _ => obj,
    }
}

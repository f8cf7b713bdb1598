//! The global built-in function table. `len` on a string is the only
//! required entry.

use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::object::Object;

use super::new_error;

static BUILTINS: Lazy<std::collections::HashMap<&'static str, Object>> = Lazy::new(|| {
    let mut m = std::collections::HashMap::new();
    m.insert("len", Object::Builtin(builtin_len));
    m
});

pub fn lookup(name: &str) -> Option<Rc<Object>> {
    BUILTINS.get(name).map(|obj| Rc::new(obj.clone()))
}

fn builtin_len(args: &[Rc<Object>]) -> Rc<Object> {
    if args.len() != 1 {
        return new_error(format!(
            "too many args for len, expected=1, got={}",
            args.len()
        ));
    }

    match &*args[0] {
        Object::Str(s) => Rc::new(Object::Integer(s.len() as i64)),
        other => new_error(format!(
            "invalid arg type for len, expected=STRING, got={}",
            other.kind()
        )),
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// A name → value frame with an optional enclosing frame, forming the
/// chain that implements lexical scoping and closures.
///
/// Always handled behind `Rc<RefCell<Environment>>`: a [`Object::Function`]
/// shares this cell with whatever scope defined it, so a `let` evaluated
/// later in that scope is visible to every closure already holding it.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Rc<Object>>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// The global environment created once at program entry.
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// A fresh frame enclosing `outer`, used for each function call.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Walks outward until `name` is found.
    pub fn get(&self, name: &str) -> Option<Rc<Object>> {
        if let Some(value) = self.store.get(name) {
            return Some(Rc::clone(value));
        }
        self.outer.as_ref()?.borrow().get(name)
    }

    /// Always binds in the innermost frame, shadowing any outer binding of
    /// the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Rc<Object>) {
        self.store.insert(name.into(), value);
    }
}

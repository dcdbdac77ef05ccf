// Live mounts keyed by element id. Mounting an element twice hands back the
// first mount so one canvas never runs two frame loops.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct Registry<T> {
    mounts: HashMap<String, Rc<RefCell<T>>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            mounts: HashMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn get(&self, id: &str) -> Option<Rc<RefCell<T>>> {
        self.mounts.get(id).cloned()
    }

    /// Register `mount` under `id` unless the id is taken. Returns the
    /// registered mount, which is the earlier one on a clash.
    pub fn insert(&mut self, id: &str, mount: Rc<RefCell<T>>) -> Rc<RefCell<T>> {
        self.mounts.entry(id.to_string()).or_insert(mount).clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

use std::{
    cell::{Ref, RefCell, RefMut},
    rc::{Rc, Weak},
};

/// Owning side of a controller: lives exactly as long as its control.
#[derive(Debug)]
pub struct ControllerHandle<C> {
    inner: Rc<RefCell<C>>,
}

/// Non-owning access handed to a parent. Resolves only while the owning
/// control is alive.
#[derive(Debug)]
pub struct SharedController<C> {
    inner: Weak<RefCell<C>>,
}

impl<C> ControllerHandle<C> {
    pub fn new(controller: C) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    pub fn share(&self) -> SharedController<C> {
        SharedController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn borrow(&self) -> Ref<'_, C> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.inner.borrow_mut()
    }
}

impl<C> SharedController<C> {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let guard = inner.borrow();
        Some(f(&guard))
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.borrow_mut();
        Some(f(&mut guard))
    }
}

impl<C> Clone for SharedController<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldController;
    use crate::validate::ValidatorConfig;

    #[test]
    fn parent_mutations_are_seen_by_owner() {
        let handle = ControllerHandle::new(FieldController::new());
        let shared = handle.share();
        shared
            .with_mut(|field| {
                field.set_required(ValidatorConfig::new(true));
                field.validate();
            })
            .expect("owner alive");
        assert!(!handle.borrow().is_valid());
        handle.borrow_mut().set_value("x");
        assert_eq!(shared.with(|field| field.value().to_string()).as_deref(), Some("x"));
    }

    #[test]
    fn shared_access_ends_with_owner() {
        let handle = ControllerHandle::new(FieldController::new());
        let shared = handle.share();
        drop(handle);
        assert!(!shared.is_alive());
        assert!(shared.with_mut(|field| field.touch()).is_none());
    }
}

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use crate::container::{erase_factory, Factory, ServiceInterface};

/// An interface name that resolved to a known service interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: &'static str,
    type_id: TypeId,
}

/// A class name that resolved to a known implementation. Holds one factory
/// per interface the class was entered for.
#[derive(Clone, Default)]
pub struct ClassType {
    factories: HashMap<TypeId, Factory>,
}

impl ClassType {
    /// The factory producing this class as `interface`, if the class was
    /// entered for it.
    pub fn factory_for(&self, interface: &InterfaceType) -> Option<Factory> {
        self.factories.get(&interface.type_id).cloned()
    }
}

/// Table of the interfaces and implementations definition files may name.
///
/// Entries are made in code, so every class is tied to the interfaces it
/// can be produced as by the signature of its factory.
#[derive(Default)]
pub struct TypeCatalog {
    interfaces: HashMap<&'static str, InterfaceType>,
    classes: HashMap<String, ClassType>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every service this application ships.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        crate::domain::register_types(&mut catalog);
        crate::attendees::register_types(&mut catalog);
        catalog
    }

    pub fn register_interface<I>(&mut self) -> &mut Self
    where
        I: ServiceInterface + ?Sized,
    {
        self.interfaces.insert(
            I::TYPE_NAME,
            InterfaceType {
                name: I::TYPE_NAME,
                type_id: TypeId::of::<I>(),
            },
        );
        self
    }

    /// Enters `class` as an implementation of `I`. The interface is entered
    /// too if it was not already.
    pub fn register_class<I, F>(&mut self, class: &str, factory: F) -> &mut Self
    where
        I: ServiceInterface + ?Sized,
        F: Fn() -> Arc<I> + Send + Sync + 'static,
    {
        self.register_interface::<I>();
        self.classes
            .entry(class.to_string())
            .or_default()
            .factories
            .insert(TypeId::of::<I>(), erase_factory(factory));
        self
    }

    pub fn interface(&self, name: &str) -> Option<InterfaceType> {
        self.interfaces.get(name).copied()
    }

    pub fn class(&self, name: &str) -> Option<&ClassType> {
        self.classes.get(name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.interfaces.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

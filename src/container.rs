//! Host container the registrar writes bindings into, and the provider and
//! scopes request handlers resolve services from.

use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::error::ResolveError;
use crate::registration::Lifetime;

/// A type-erased service instance. Always wraps an `Arc<I>` for the
/// interface `I` the binding was made for.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Produces a new [`Instance`] each time it is called.
pub type Factory = Arc<dyn Fn() -> Instance + Send + Sync>;

/// An abstract capability that services are bound to, addressed by name in
/// definition files. Implemented for trait objects, e.g. `dyn Clock`.
pub trait ServiceInterface: Send + Sync + 'static {
    const TYPE_NAME: &'static str;
}

/// Wraps a typed factory so its output can live in the container.
pub fn erase_factory<I, F>(factory: F) -> Factory
where
    I: ServiceInterface + ?Sized,
    F: Fn() -> Arc<I> + Send + Sync + 'static,
{
    Arc::new(move || Arc::new(factory()) as Instance)
}

/// One binding: a service type, the implementation behind it, and how
/// instances are shared.
#[derive(Clone)]
pub struct ServiceDescriptor {
    pub service_type: String,
    pub implementation_type: String,
    pub lifetime: Lifetime,
    factory: Factory,
}

impl ServiceDescriptor {
    pub fn new(
        service_type: impl Into<String>,
        implementation_type: impl Into<String>,
        lifetime: Lifetime,
        factory: Factory,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            implementation_type: implementation_type.into(),
            lifetime,
            factory,
        }
    }

    pub fn summary(&self) -> BindingSummary {
        BindingSummary {
            service_type: self.service_type.clone(),
            lifetime: self.lifetime,
            implementation_type: self.implementation_type.clone(),
        }
    }
}

impl std::fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("service_type", &self.service_type)
            .field("implementation_type", &self.implementation_type)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// Printable view of a binding, used by the diagnostics page and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingSummary {
    pub service_type: String,
    pub lifetime: Lifetime,
    pub implementation_type: String,
}

/// Ordered list of bindings collected during startup.
#[derive(Debug, Default, Clone)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        debug!(
            service_type = %descriptor.service_type,
            implementation_type = %descriptor.implementation_type,
            lifetime = %descriptor.lifetime,
            "Adding service binding"
        );
        self.descriptors.push(descriptor);
        self
    }

    /// Binds `I` to a factory directly, bypassing definition files.
    pub fn add_factory<I, F>(&mut self, implementation_type: &str, lifetime: Lifetime, factory: F) -> &mut Self
    where
        I: ServiceInterface + ?Sized,
        F: Fn() -> Arc<I> + Send + Sync + 'static,
    {
        self.add(ServiceDescriptor::new(
            I::TYPE_NAME,
            implementation_type,
            lifetime,
            erase_factory(factory),
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn build(self) -> ServiceProvider {
        // Later bindings for the same service type shadow earlier ones.
        let mut active = HashMap::new();
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            active.insert(descriptor.service_type.clone(), index);
        }

        ServiceProvider {
            inner: Arc::new(ProviderInner {
                descriptors: self.descriptors,
                active,
                singletons: Mutex::new(HashMap::new()),
            }),
        }
    }
}

struct ProviderInner {
    descriptors: Vec<ServiceDescriptor>,
    active: HashMap<String, usize>,
    singletons: Mutex<HashMap<usize, Instance>>,
}

/// Built container. Cloning shares the same singletons.
#[derive(Clone)]
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
}

impl ServiceProvider {
    pub fn create_scope(&self) -> ServiceScope {
        ServiceScope {
            provider: self.clone(),
            scoped: Mutex::new(HashMap::new()),
        }
    }

    /// Every binding in registration order, shadowed ones included.
    pub fn descriptors(&self) -> &[ServiceDescriptor] {
        &self.inner.descriptors
    }
}

impl std::fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("descriptors", &self.inner.descriptors)
            .finish_non_exhaustive()
    }
}

/// Resolution context with its own cache for scoped services. The web layer
/// opens one per request.
pub struct ServiceScope {
    provider: ServiceProvider,
    scoped: Mutex<HashMap<usize, Instance>>,
}

impl ServiceScope {
    pub fn resolve<I>(&self) -> Result<Arc<I>, ResolveError>
    where
        I: ServiceInterface + ?Sized,
    {
        let inner = &self.provider.inner;
        let index = *inner
            .active
            .get(I::TYPE_NAME)
            .ok_or_else(|| ResolveError::NotRegistered(I::TYPE_NAME.to_string()))?;
        let descriptor = &inner.descriptors[index];

        let instance = match descriptor.lifetime {
            Lifetime::Transient => (descriptor.factory)(),
            Lifetime::Scoped => cached(&self.scoped, index, &descriptor.factory),
            Lifetime::Singleton => cached(&inner.singletons, index, &descriptor.factory),
        };

        instance
            .downcast_ref::<Arc<I>>()
            .cloned()
            .ok_or_else(|| ResolveError::TypeMismatch {
                service_type: descriptor.service_type.clone(),
            })
    }
}

fn cached(cache: &Mutex<HashMap<usize, Instance>>, index: usize, factory: &Factory) -> Instance {
    let mut cache = lock(cache);
    cache.entry(index).or_insert_with(|| factory()).clone()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

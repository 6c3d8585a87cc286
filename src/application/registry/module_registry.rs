//! Module Registry
//!
//! Tracks every registered module and its public surface, and routes calls
//! through each operation's current binding.
//!
//! Registration belongs to the initialization phase. After `seal()` the set of
//! modules is fixed; calls and override scopes keep working.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::entities::{Handler, OperationSlot, PublicSurface, SurfaceDescription};
use crate::domain::ports::{NoopEventSink, RegistryEvent, RegistryEventSink};
use crate::domain::value_objects::{Contract, ModuleName};
use crate::error::{RegistryError, RegistryResult};

use super::OverrideScope;

#[derive(Default)]
struct Modules {
    by_name: HashMap<String, Arc<PublicSurface>>,
    order: Vec<String>,
}

pub struct ModuleRegistry {
    modules: RwLock<Modules>,
    sealed: AtomicBool,
    events: Arc<dyn RegistryEventSink>,
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: RwLock::new(Modules::default()),
            sealed: AtomicBool::new(false),
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_event_sink(mut self, events: Arc<dyn RegistryEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Register a module's public surface.
    ///
    /// Fails with `DuplicateModule` if the name is taken; the module that was
    /// registered first stays in place.
    pub fn register(&self, surface: PublicSurface) -> RegistryResult<()> {
        let module = surface.module().to_string();
        let result = self.insert(surface);

        match &result {
            Ok(operations) => self.events.on_registry_event(RegistryEvent::ModuleRegistered {
                module,
                operations: *operations,
            }),
            Err(err) => self.events.on_registry_event(RegistryEvent::RegistrationRejected {
                module,
                reason: err.to_string(),
            }),
        }
        result.map(|_| ())
    }

    fn insert(&self, surface: PublicSurface) -> RegistryResult<usize> {
        let module = surface.module().to_string();
        let mut modules = self.modules.write().unwrap_or_else(PoisonError::into_inner);

        // Checked under the write lock so a racing seal() cannot slip between.
        if self.is_sealed() {
            return Err(RegistryError::RegistrySealed { module });
        }
        if modules.by_name.contains_key(&module) {
            return Err(RegistryError::DuplicateModule { module });
        }

        let operations = surface.len();
        modules.order.push(module.clone());
        modules.by_name.insert(module, Arc::new(surface));
        Ok(operations)
    }

    /// End the initialization phase.
    pub fn seal(&self) {
        let modules = self.modules.write().unwrap_or_else(PoisonError::into_inner);
        if !self.sealed.swap(true, Ordering::SeqCst) {
            self.events.on_registry_event(RegistryEvent::Sealed {
                modules: modules.order.len(),
            });
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.read().by_name.contains_key(module)
    }

    /// Module names in registration order.
    pub fn modules(&self) -> Vec<String> {
        self.read().order.clone()
    }

    pub fn describe(&self, module: &str) -> RegistryResult<SurfaceDescription> {
        self.surface(module, "").map(|s| s.describe())
    }

    /// Current binding of `module.operation`.
    pub fn resolve<Req, Resp>(
        &self,
        module: &str,
        operation: &str,
    ) -> RegistryResult<Handler<Req, Resp>>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        let (_, slot) = self.slot(module, operation)?;
        let declared = slot.contract();
        slot
            .current::<Req, Resp>()
            .ok_or_else(|| contract_mismatch::<Req, Resp>(module, operation, declared))
    }

    /// Call `module.operation` through its current binding.
    ///
    /// The outer `Result` only carries lookup failures. Whatever the bound
    /// implementation returns, including its own errors, is handed back
    /// untouched.
    pub fn invoke<Req, Resp>(
        &self,
        module: &str,
        operation: &str,
        request: Req,
    ) -> RegistryResult<Resp>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        let handler = self.resolve::<Req, Resp>(module, operation)?;
        Ok(handler(request))
    }

    /// Install `substitute` as the current binding of `module.operation`
    /// until the returned scope ends.
    ///
    /// Concurrent tests overriding the same operation of one registry see
    /// each other's substitutes. Serialize them, or give each test its own
    /// registry.
    pub fn begin_override<Req, Resp, F>(
        &self,
        module: &str,
        operation: &str,
        substitute: F,
    ) -> RegistryResult<OverrideScope>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: Fn(Req) -> Resp + Send + Sync + 'static,
    {
        let (module_name, slot) = self.slot(module, operation)?;
        if !slot.accepts::<Req, Resp>() {
            return Err(contract_mismatch::<Req, Resp>(module, operation, slot.contract()));
        }

        let handler: Handler<Req, Resp> = Arc::new(substitute);
        let binding = slot.push(handler);
        self.events.on_registry_event(RegistryEvent::OverrideBegan {
            module: module.to_string(),
            operation: operation.to_string(),
            depth: slot.override_depth(),
        });
        Ok(OverrideScope::new(module_name, slot, binding, self.events.clone()))
    }

    /// Run `body` with `module.operation` overridden, restoring afterwards.
    pub fn with_override<Req, Resp, F, T>(
        &self,
        module: &str,
        operation: &str,
        substitute: F,
        body: impl FnOnce() -> T,
    ) -> RegistryResult<T>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: Fn(Req) -> Resp + Send + Sync + 'static,
    {
        let _scope = self.begin_override(module, operation, substitute)?;
        Ok(body())
    }

    /// Number of active overrides on `module.operation`.
    pub fn override_depth(&self, module: &str, operation: &str) -> RegistryResult<usize> {
        self.slot(module, operation).map(|(_, slot)| slot.override_depth())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Modules> {
        self.modules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn surface(&self, module: &str, operation: &str) -> RegistryResult<Arc<PublicSurface>> {
        let found = self.read().by_name.get(module).cloned();
        found.ok_or_else(|| {
            self.lookup_failed(module, operation, "unknown module");
            RegistryError::UnknownModule {
                module: module.to_string(),
            }
        })
    }

    fn slot(
        &self,
        module: &str,
        operation: &str,
    ) -> RegistryResult<(ModuleName, Arc<OperationSlot>)> {
        let surface = self.surface(module, operation)?;
        match surface.operation(operation) {
            Some(slot) => Ok((surface.module().clone(), slot.clone())),
            None => {
                self.lookup_failed(module, operation, "unknown operation");
                Err(RegistryError::UnknownOperation {
                    module: module.to_string(),
                    operation: operation.to_string(),
                })
            }
        }
    }

    fn lookup_failed(&self, module: &str, operation: &str, reason: &str) {
        self.events.on_registry_event(RegistryEvent::LookupFailed {
            module: module.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        });
    }
}

fn contract_mismatch<Req: 'static, Resp: 'static>(
    module: &str,
    operation: &str,
    declared: Contract,
) -> RegistryError {
    RegistryError::ContractMismatch {
        module: module.to_string(),
        operation: operation.to_string(),
        declared: declared.to_string(),
        requested: Contract::of::<Req, Resp>().to_string(),
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.modules())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}

//! Public Surface entity
//!
//! A module's public surface is an ordered table of operations. Each operation
//! owns a binding stack: the bottom entry is the implementation declared at
//! initialization, entries above it are active overrides. The current binding
//! is always the top of the stack.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::value_objects::{Contract, ModuleName, OperationName};
use crate::error::RegistryError;

/// A callable bound to a surface operation.
///
/// Requests and responses are owned values, so nothing borrowed from a
/// module's internal state can cross the boundary.
pub type Handler<Req, Resp> = Arc<dyn Fn(Req) -> Resp + Send + Sync>;

type ErasedHandler = Arc<dyn Any + Send + Sync>;

/// Binding id reserved for the declared implementation.
const ORIGINAL: u64 = 0;

struct Binding {
    id: u64,
    handler: ErasedHandler,
}

/// A single operation slot on a public surface.
pub struct OperationSlot {
    name: OperationName,
    contract: Contract,
    bindings: RwLock<Vec<Binding>>,
    next_id: AtomicU64,
}

impl OperationSlot {
    fn new<Req, Resp>(name: OperationName, handler: Handler<Req, Resp>) -> Self
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        Self {
            name,
            contract: Contract::of::<Req, Resp>(),
            bindings: RwLock::new(vec![Binding {
                id: ORIGINAL,
                handler: Arc::new(handler),
            }]),
            next_id: AtomicU64::new(ORIGINAL + 1),
        }
    }

    pub fn name(&self) -> &OperationName {
        &self.name
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn accepts<Req: 'static, Resp: 'static>(&self) -> bool {
        self.contract == Contract::of::<Req, Resp>()
    }

    /// Number of overrides currently stacked on the declared implementation.
    pub fn override_depth(&self) -> usize {
        self.read().len() - 1
    }

    /// Current binding, or `None` when the contract does not match.
    pub(crate) fn current<Req, Resp>(&self) -> Option<Handler<Req, Resp>>
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        // The handler is cloned out so the lock is never held during a call.
        let bindings = self.read();
        bindings
            .last()
            .and_then(|binding| binding.handler.downcast_ref::<Handler<Req, Resp>>())
            .cloned()
    }

    /// Push a substitute on top of the stack and return its binding id.
    pub(crate) fn push<Req, Resp>(&self, handler: Handler<Req, Resp>) -> u64
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.write().push(Binding {
            id,
            handler: Arc::new(handler),
        });
        id
    }

    /// Remove the binding with `id`. Returns the remaining override depth, or
    /// `None` if that binding was already gone. The declared implementation
    /// can never be removed.
    pub(crate) fn remove(&self, id: u64) -> Option<usize> {
        if id == ORIGINAL {
            return None;
        }
        let mut bindings = self.write();
        let index = bindings.iter().position(|b| b.id == id)?;
        bindings.remove(index);
        Some(bindings.len() - 1)
    }

    // A panic can never happen while a guard is held, but a poisoned lock
    // still holds a consistent stack.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Binding>> {
        self.bindings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Binding>> {
        self.bindings.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for OperationSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationSlot")
            .field("name", &self.name)
            .field("contract", &self.contract.to_string())
            .field("override_depth", &self.override_depth())
            .finish()
    }
}

/// The declared, overridable set of operations a module exposes.
#[derive(Debug)]
pub struct PublicSurface {
    module: ModuleName,
    operations: Vec<Arc<OperationSlot>>,
}

impl PublicSurface {
    pub fn builder(module: &str) -> SurfaceBuilder {
        SurfaceBuilder::new(module)
    }

    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    pub fn operation(&self, name: &str) -> Option<&Arc<OperationSlot>> {
        self.operations.iter().find(|op| op.name.as_str() == name)
    }

    /// Operation names in declaration order.
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Immutable snapshot of the surface, safe to hand to other modules.
    pub fn describe(&self) -> SurfaceDescription {
        SurfaceDescription {
            module: self.module.to_string(),
            operations: self
                .operations
                .iter()
                .map(|op| OperationDescription {
                    name: op.name.to_string(),
                    contract: op.contract.to_string(),
                    override_depth: op.override_depth(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDescription {
    pub module: String,
    pub operations: Vec<OperationDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescription {
    pub name: String,
    pub contract: String,
    pub override_depth: usize,
}

/// Declares a module's public surface during initialization.
///
/// Declaring the same operation twice replaces the earlier binding but keeps
/// its position in the table.
pub struct SurfaceBuilder {
    module: Result<ModuleName, RegistryError>,
    operations: Vec<Arc<OperationSlot>>,
    error: Option<RegistryError>,
}

impl SurfaceBuilder {
    pub fn new(module: &str) -> Self {
        Self {
            module: ModuleName::new(module),
            operations: Vec::new(),
            error: None,
        }
    }

    pub fn operation<Req, Resp, F>(self, name: &str, implementation: F) -> Self
    where
        Req: Send + 'static,
        Resp: Send + 'static,
        F: Fn(Req) -> Resp + Send + Sync + 'static,
    {
        self.handler(name, Arc::new(implementation))
    }

    pub fn handler<Req, Resp>(mut self, name: &str, handler: Handler<Req, Resp>) -> Self
    where
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        let name = match OperationName::new(name) {
            Ok(name) => name,
            Err(err) => {
                self.error.get_or_insert(err);
                return self;
            }
        };

        let slot = Arc::new(OperationSlot::new(name, handler));
        match self
            .operations
            .iter()
            .position(|op| op.name == slot.name)
        {
            Some(index) => self.operations[index] = slot,
            None => self.operations.push(slot),
        }
        self
    }

    pub fn build(self) -> Result<PublicSurface, RegistryError> {
        let module = self.module?;
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(PublicSurface {
            module,
            operations: self.operations,
        })
    }
}

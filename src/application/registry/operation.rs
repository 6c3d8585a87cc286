//! Typed operation handles
//!
//! A module publishes one `OperationRef` per surface operation from its
//! surface file. Callers in other modules use the handle instead of spelling
//! the module and operation names, and the compiler checks the contract.
//!
//! ```ignore
//! // staff/api.rs
//! pub const GET_KITCHEN_ROTA: OperationRef<(), Vec<String>> =
//!     OperationRef::new("staff", "GetKitchenRota");
//!
//! // kitchen/prep.rs
//! let rota = staff::api::GET_KITCHEN_ROTA.call(&registry, ())?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::{ModuleRegistry, OverrideScope};
use crate::error::RegistryResult;

pub struct OperationRef<Req, Resp> {
    module: &'static str,
    operation: &'static str,
    contract: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> OperationRef<Req, Resp> {
    pub const fn new(module: &'static str, operation: &'static str) -> Self {
        Self {
            module,
            operation,
            contract: PhantomData,
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<Req, Resp> OperationRef<Req, Resp>
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    pub fn call(&self, registry: &ModuleRegistry, request: Req) -> RegistryResult<Resp> {
        registry.invoke(self.module, self.operation, request)
    }

    pub fn begin_override<F>(
        &self,
        registry: &ModuleRegistry,
        substitute: F,
    ) -> RegistryResult<OverrideScope>
    where
        F: Fn(Req) -> Resp + Send + Sync + 'static,
    {
        registry.begin_override(self.module, self.operation, substitute)
    }
}

impl<Req, Resp> Clone for OperationRef<Req, Resp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Resp> Copy for OperationRef<Req, Resp> {}

impl<Req, Resp> fmt::Debug for OperationRef<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationRef({}.{})", self.module, self.operation)
    }
}

impl<Req, Resp> fmt::Display for OperationRef<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.operation)
    }
}

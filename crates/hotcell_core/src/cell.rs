//! The recompilation cell: refresh algorithm and accessors.

use std::sync::Arc;

use hotcell_source::SourceResolver;

use crate::backend::{Compiler, Instantiator};
use crate::error::CellError;
use crate::hook::Hook;
use crate::snapshot::Snapshot;

/// The snapshot/unit/instance triple committed by the last successful
/// refresh. Replaced as a whole, never field by field.
struct Committed<U, I> {
    snapshot: Snapshot,
    unit: Arc<U>,
    instance: Arc<I>,
}

/// A live, hot-swappable unit of behavior backed by one source artifact.
///
/// Every accessor re-resolves the artifact's current text. Unchanged text
/// returns the committed unit/instance without touching the compiler,
/// instantiator, or hook; changed text runs the full
/// compile → instantiate → hook → commit cycle. Any failure along the way
/// propagates to the caller and leaves the previous commit untouched.
///
/// Accessors take `&mut self`: the baseline cell is single-threaded and
/// synchronous. Wrap it in [`SharedCell`](crate::shared::SharedCell) for
/// concurrent hosts.
///
/// Compilation failures are not memoized. Accessing the cell again while
/// the artifact still holds the same failing text re-invokes the compiler
/// and fails the same way until the text changes.
pub struct HotCell<R, C, N>
where
    C: Compiler,
    N: Instantiator<C::Unit>,
{
    resolver: R,
    identifier: String,
    compiler: C,
    instantiator: N,
    hook: Option<Hook<N::Instance>>,
    committed: Option<Committed<C::Unit, N::Instance>>,
}

impl<R, C, N> std::fmt::Debug for HotCell<R, C, N>
where
    C: Compiler,
    N: Instantiator<C::Unit>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotCell")
            .field("identifier", &self.identifier)
            .field("hook", &self.hook.is_some())
            .field("committed", &self.committed.is_some())
            .finish_non_exhaustive()
    }
}

impl<R, C, N> HotCell<R, C, N>
where
    R: SourceResolver,
    C: Compiler,
    N: Instantiator<C::Unit>,
{
    /// Binds a cell to `identifier`.
    ///
    /// Fails fast with [`ResolveError::NotFound`](hotcell_source::ResolveError)
    /// if the resolver cannot locate the identifier, so misconfiguration is
    /// caught before any accessor runs. No source text is fetched yet; the
    /// first accessor call performs the first compile.
    pub fn bind(
        resolver: R,
        identifier: impl Into<String>,
        compiler: C,
        instantiator: N,
    ) -> Result<Self, CellError> {
        let identifier = identifier.into();
        resolver.locate(&identifier)?;
        Ok(Self {
            resolver,
            identifier,
            compiler,
            instantiator,
            hook: None,
            committed: None,
        })
    }

    /// Registers the post-instantiation hook, replacing any previous one.
    ///
    /// Fluent form of [`set_hook`](Self::set_hook) for use at bind time.
    #[must_use]
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&N::Instance) -> Result<(), crate::error::HookError> + Send + 'static,
    {
        self.set_hook(hook);
        self
    }

    /// Registers the post-instantiation hook, replacing any previous one.
    ///
    /// Takes effect at the next refresh; already-committed instances are
    /// not revisited.
    pub fn set_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&N::Instance) -> Result<(), crate::error::HookError> + Send + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    /// Returns the identifier this cell is bound to.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the snapshot committed by the last successful refresh, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.committed.as_ref().map(|c| &c.snapshot)
    }

    /// Returns the current compiled unit, refreshing first if the source
    /// text changed.
    pub fn unit(&mut self) -> Result<Arc<C::Unit>, CellError> {
        let (unit, _instance) = self.refresh()?;
        Ok(unit)
    }

    /// Returns the current instance, refreshing first if the source text
    /// changed.
    ///
    /// For unchanged text this is reference-stable: repeated calls return
    /// clones of the same `Arc`.
    pub fn instance(&mut self) -> Result<Arc<N::Instance>, CellError> {
        let (_unit, instance) = self.refresh()?;
        Ok(instance)
    }

    /// The refresh algorithm.
    ///
    /// Resolve current text; if it matches the committed snapshot, return
    /// the committed pair untouched. Otherwise compile, instantiate, run
    /// the hook, and only then commit the new triple in one assignment.
    /// An error from any step returns before the commit, so the previous
    /// triple survives every failure.
    fn refresh(&mut self) -> Result<(Arc<C::Unit>, Arc<N::Instance>), CellError> {
        let text = self.resolver.resolve(&self.identifier)?;

        if let Some(committed) = &self.committed {
            if committed.snapshot.matches(&text) {
                return Ok((Arc::clone(&committed.unit), Arc::clone(&committed.instance)));
            }
        }

        let unit = Arc::new(self.compiler.compile(&text, &self.identifier)?);
        let instance = Arc::new(self.instantiator.instantiate(unit.as_ref())?);

        if let Some(hook) = self.hook.as_mut() {
            hook(instance.as_ref())?;
        }

        self.committed = Some(Committed {
            snapshot: Snapshot::new(text),
            unit: Arc::clone(&unit),
            instance: Arc::clone(&instance),
        });

        Ok((unit, instance))
    }
}

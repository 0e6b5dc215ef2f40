//! Function-signature classification
//!
//! Decides whether a callable type returns a Result or `void`, and which
//! argument positions of a call only accept `void`-returning callbacks.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::syntax::NodeId;
use crate::types::{Signature, TypeId};

use super::result_type::ResultClassifier;

/// Which signatures a call site resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    /// `f(...)`
    Call,
    /// `new F(...)`
    Construct,
}

#[derive(Clone, Copy)]
pub struct CallableClassifier<'a> {
    results: ResultClassifier<'a>,
}

impl<'a> CallableClassifier<'a> {
    pub fn new(results: ResultClassifier<'a>) -> Self {
        Self { results }
    }

    /// Some call signature of some union member returns a Result
    pub fn is_result_returning(&self, ty: TypeId) -> bool {
        let checker = self.results.checker();
        self.results.apparent_members(ty).into_iter().any(|member| {
            checker
                .call_signatures(member)
                .iter()
                .any(|sig| self.results.is_sometimes_result(sig.return_type))
        })
    }

    /// Some call signature returns exactly `void` and none returns a Result
    pub fn is_void_returning(&self, ty: TypeId) -> bool {
        let checker = self.results.checker();
        let mut had_void = false;
        for member in self.results.apparent_members(ty) {
            for sig in checker.call_signatures(member) {
                if self.results.is_sometimes_result(sig.return_type) {
                    return false;
                }
                had_void |= checker.is_void(sig.return_type);
            }
        }
        had_void
    }

    /// The expression at `node` is a callable returning a Result
    pub fn returns_result(&self, node: NodeId) -> bool {
        let checker = self.results.checker();
        let ty = checker.apparent_type(checker.type_at(node));
        self.is_result_returning(ty)
    }

    /// Argument positions of a call that accept only `void`-returning callbacks
    ///
    /// `arg_count` is `None` for `new F` without an argument list. A position
    /// that any signature accepts a Result-returning callback for is dropped.
    pub fn void_function_arguments(
        &self,
        callee_ty: TypeId,
        kind: SignatureKind,
        arg_count: Option<usize>,
    ) -> FxHashSet<usize> {
        let Some(arg_count) = arg_count else {
            return FxHashSet::default();
        };
        let checker = self.results.checker();
        let mut positions = Positions::default();

        for member in self.results.apparent_members(callee_ty) {
            let signatures: Vec<Signature> = match kind {
                SignatureKind::Call => checker.call_signatures(member),
                SignatureKind::Construct => checker.construct_signatures(member),
            };
            for sig in &signatures {
                for (index, param) in sig.params.iter().enumerate() {
                    if !param.rest {
                        positions.record(self, param.ty, index);
                        continue;
                    }
                    // `...args: T` with `T extends unknown[]`
                    let rest_ty = checker.apparent_type(param.ty);
                    if checker.is_array(rest_ty) {
                        let element = checker
                            .type_arguments(rest_ty)
                            .first()
                            .copied()
                            .unwrap_or(TypeId::UNKNOWN);
                        for position in index..arg_count {
                            positions.record(self, element, position);
                        }
                    } else if checker.is_tuple(rest_ty) {
                        let elements = checker.type_arguments(rest_ty);
                        for (position, element) in (index..arg_count).zip(elements) {
                            positions.record(self, element, position);
                        }
                    }
                }
            }
        }

        let void_positions = positions.void_only();
        trace!(?void_positions, "void-only argument positions");
        void_positions
    }
}

/// Argument positions seen accepting Result-returning and void-returning callbacks
#[derive(Default)]
struct Positions {
    result: FxHashSet<usize>,
    void: FxHashSet<usize>,
}

impl Positions {
    fn record(&mut self, callables: &CallableClassifier<'_>, param_ty: TypeId, position: usize) {
        if callables.is_result_returning(param_ty) {
            self.result.insert(position);
        } else if callables.is_void_returning(param_ty) {
            self.void.insert(position);
        }
    }

    /// Positions that accept a Result-returning callback in any signature are dropped.
    fn void_only(self) -> FxHashSet<usize> {
        let Positions { result, void } = self;
        void.into_iter().filter(|p| !result.contains(p)).collect()
    }
}

//! Structural Result-type classification
//!
//! A type is Result-like when it has a discriminant property whose type
//! includes the `success` or `failure` string literal, and also carries the
//! property named after that literal. Identity and provenance play no part.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::types::{TypeChecker, TypeId};

/// Property names that make up the Result shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultShape {
    /// Discriminant property, `tag` by default
    pub discriminant: String,
    /// Marker of the success arm, also the name of its payload property
    pub success: String,
    /// Marker of the failure arm, also the name of its payload property
    pub failure: String,
}

impl Default for ResultShape {
    fn default() -> Self {
        Self {
            discriminant: "tag".to_string(),
            success: "success".to_string(),
            failure: "failure".to_string(),
        }
    }
}

impl ResultShape {
    fn is_marker(&self, value: &str) -> bool {
        value == self.success || value == self.failure
    }
}

/// Classifies types against a [`ResultShape`]
#[derive(Clone, Copy)]
pub struct ResultClassifier<'a> {
    checker: &'a dyn TypeChecker,
    shape: &'a ResultShape,
}

impl<'a> ResultClassifier<'a> {
    pub fn new(checker: &'a dyn TypeChecker, shape: &'a ResultShape) -> Self {
        Self { checker, shape }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.checker
    }

    pub fn shape(&self) -> &'a ResultShape {
        self.shape
    }

    /// Whether the discriminant of `member` admits a marker whose companion
    /// property is present. `None` means the discriminant itself is missing.
    fn member_has_result_tag(&self, member: TypeId) -> Option<bool> {
        let tag = self.checker.property(member, &self.shape.discriminant)?;
        let found = self.apparent_members(tag).into_iter().any(|literal| {
            self.checker
                .string_literal_value(literal)
                .filter(|value| self.shape.is_marker(value))
                .is_some_and(|value| self.checker.property(member, value).is_some())
        });
        Some(found)
    }

    /// A single (non-union) type has the Result shape
    pub fn is_result_like(&self, member: TypeId) -> bool {
        self.member_has_result_tag(member).unwrap_or(false)
    }

    /// Union members of `ty` with every generic member resolved through its
    /// constraint, flattening unions the constraints introduce.
    pub fn apparent_members(&self, ty: TypeId) -> Vec<TypeId> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        self.collect_apparent_members(ty, &mut out, &mut seen);
        out
    }

    fn collect_apparent_members(
        &self,
        ty: TypeId,
        out: &mut Vec<TypeId>,
        seen: &mut FxHashSet<TypeId>,
    ) {
        if !seen.insert(ty) {
            return;
        }
        let apparent = self.checker.apparent_type(ty);
        for member in self.checker.union_members(apparent) {
            if self.checker.apparent_type(member) == member {
                out.push(member);
            } else {
                self.collect_apparent_members(member, out, seen);
            }
        }
    }

    /// At least one union member is Result-like
    pub fn is_sometimes_result(&self, ty: TypeId) -> bool {
        self.apparent_members(ty)
            .into_iter()
            .any(|member| self.is_result_like(member))
    }

    /// Every union member is Result-like
    ///
    /// A member without the discriminant fails the whole union, so optional
    /// Results (`Result | undefined`) do not count.
    pub fn is_always_result(&self, ty: TypeId) -> bool {
        let members = self.apparent_members(ty);
        if members.is_empty() {
            return false;
        }
        for member in members {
            match self.member_has_result_tag(member) {
                Some(true) => {}
                Some(false) | None => return false,
            }
        }
        true
    }

    /// An array whose element, or a tuple with any position, is sometimes a
    /// Result. Union members are inspected separately.
    pub fn is_result_array_or_tuple(&self, ty: TypeId) -> bool {
        self.apparent_members(ty).into_iter().any(|member| {
            if self.checker.is_array(member) || self.checker.is_tuple(member) {
                self.checker
                    .type_arguments(member)
                    .into_iter()
                    .any(|element| self.is_sometimes_result(element))
            } else {
                false
            }
        })
    }
}

//! Structural equality of binding graphs.
//!
//! Two bindings are equal when they describe the same entity, regardless of
//! which table, origin or recovery path produced them. Graphs may be
//! cyclic (`T extends Comparable<T>`), so comparison is co-inductive: a
//! pair already under comparison is assumed equal, which bounds recursion
//! by the number of distinct pairs.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::model::{Binding, BindingData, BindingId, BindingView, TypeBinding};

/// Compares bindings of one view against bindings of another.
///
/// Both views may be of the same table.
pub struct BindingEquality<'a> {
    left: &'a [Binding],
    right: &'a [Binding],
    same_table: bool,
    in_progress: FxHashSet<(BindingId, BindingId)>,
}

impl<'a> BindingEquality<'a> {
    pub fn new(left: &'a BindingView<'_>, right: &'a BindingView<'_>) -> Self {
        Self {
            left: left.bindings(),
            right: right.bindings(),
            same_table: left.same_table(right),
            in_progress: FxHashSet::default(),
        }
    }

    /// Whether `left` (in the left view) and `right` (in the right view)
    /// denote the same entity.
    pub fn is_equal(&mut self, left: BindingId, right: BindingId) -> bool {
        if self.same_table && left == right {
            return true;
        }
        if !self.in_progress.insert((left, right)) {
            return true;
        }
        let equal = match (self.left.get(left.index()), self.right.get(right.index())) {
            (Some(a), Some(b)) => self.compare(a, b),
            _ => false,
        };
        self.in_progress.remove(&(left, right));
        if !equal {
            trace!("[EQUALITY] {left} != {right}");
        }
        equal
    }

    fn opt_equal(&mut self, left: Option<BindingId>, right: Option<BindingId>) -> bool {
        match (left, right) {
            (Some(a), Some(b)) => self.is_equal(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn all_equal(&mut self, left: &[BindingId], right: &[BindingId]) -> bool {
        left.len() == right.len() && left.iter().zip(right).all(|(&a, &b)| self.is_equal(a, b))
    }

    fn compare(&mut self, a: &'a Binding, b: &'a Binding) -> bool {
        match (&a.data, &b.data) {
            (BindingData::Package { name: x }, BindingData::Package { name: y })
            | (BindingData::Module { name: x }, BindingData::Module { name: y }) => x == y,
            (BindingData::Type(x), BindingData::Type(y)) => self.compare_types(x, y),
            (BindingData::Method(x), BindingData::Method(y)) => {
                x.name == y.name
                    && x.parameters.len() == y.parameters.len()
                    && x.type_parameters.len() == y.type_parameters.len()
                    && x.thrown.len() == y.thrown.len()
                    && self.is_equal(x.declaring, y.declaring)
                    && self.all_equal(&x.parameters, &y.parameters)
                    && self.is_equal(x.return_type, y.return_type)
                    && self.all_equal(&x.type_parameters, &y.type_parameters)
                    && self.all_equal(&x.thrown, &y.thrown)
            }
            (BindingData::Variable(x), BindingData::Variable(y)) => {
                x.name == y.name
                    && x.is_field == y.is_field
                    && x.occurrence == y.occurrence
                    && self.opt_equal(x.declaring_type, y.declaring_type)
                    && self.opt_equal(x.declaring_method, y.declaring_method)
                    && self.is_equal(x.ty, y.ty)
            }
            (
                BindingData::Annotation {
                    annotation_type: xt,
                    annotated: xa,
                },
                BindingData::Annotation {
                    annotation_type: yt,
                    annotated: ya,
                },
            ) => self.is_equal(*xt, *yt) && self.is_equal(*xa, *ya),
            (
                BindingData::Import {
                    name: xn,
                    on_demand: xd,
                    is_static: xs,
                    target: xt,
                },
                BindingData::Import {
                    name: yn,
                    on_demand: yd,
                    is_static: ys,
                    target: yt,
                },
            ) => xn == yn && xd == yd && xs == ys && self.opt_equal(*xt, *yt),
            _ => false,
        }
    }

    fn compare_types(&mut self, x: &'a TypeBinding, y: &'a TypeBinding) -> bool {
        match (x, y) {
            (TypeBinding::Primitive(p), TypeBinding::Primitive(q)) => p == q,
            (TypeBinding::Reference(p), TypeBinding::Reference(q)) => {
                p.compound_name == q.compound_name
                    && p.kind == q.kind
                    && self.all_equal(&p.type_parameters, &q.type_parameters)
            }
            (
                TypeBinding::Array {
                    element: pe,
                    dimensions: pd,
                },
                TypeBinding::Array {
                    element: qe,
                    dimensions: qd,
                },
            ) => pd == qd && self.is_equal(*pe, *qe),
            (
                TypeBinding::Parameterized {
                    generic: pg,
                    arguments: pa,
                    enclosing: pe,
                },
                TypeBinding::Parameterized {
                    generic: qg,
                    arguments: qa,
                    enclosing: qe,
                },
            ) => {
                pa.len() == qa.len()
                    && self.is_equal(*pg, *qg)
                    && self.all_equal(pa, qa)
                    && self.opt_equal(*pe, *qe)
            }
            (TypeBinding::Raw { generic: p }, TypeBinding::Raw { generic: q }) => {
                self.is_equal(*p, *q)
            }
            (
                TypeBinding::Wildcard {
                    kind: pk,
                    bound: pb,
                },
                TypeBinding::Wildcard {
                    kind: qk,
                    bound: qb,
                },
            ) => pk == qk && self.opt_equal(*pb, *qb),
            (
                TypeBinding::TypeVariable {
                    name: pn,
                    rank: pr,
                    declaring: pd,
                    bounds: pb,
                },
                TypeBinding::TypeVariable {
                    name: qn,
                    rank: qr,
                    declaring: qd,
                    bounds: qb,
                },
            ) => {
                pn == qn
                    && pr == qr
                    && pb.len() == qb.len()
                    && self.opt_equal(*pd, *qd)
                    && self.all_equal(pb, qb)
            }
            _ => false,
        }
    }
}

/// Whether two bindings of one view are equal.
pub fn is_equal(view: &BindingView<'_>, left: BindingId, right: BindingId) -> bool {
    BindingEquality::new(view, view).is_equal(left, right)
}

//! References and collections

use crate::context::EvaluationContext;
use crate::engine::{Evaluator, Simplified};
use crate::error::EvalResult;
use crate::resolve::resolve;
use illogical_ast::{Collection, Node, Reference};
use illogical_types::Value;

impl Evaluator {
    /// Resolve and cast a reference. Missing paths evaluate to nil.
    pub(crate) fn eval_reference(
        &self,
        reference: &Reference,
        ctx: &mut EvaluationContext,
    ) -> EvalResult<Value> {
        let resolution = resolve(ctx.data(), reference.path())?;
        if !resolution.found {
            return Ok(Value::Nil);
        }
        Ok(self.coercer.cast(resolution.value, reference.data_type())?)
    }

    /// A reference stays unresolved when its path is ignored, missing, or
    /// its value cannot be cast.
    pub(crate) fn simplify_reference(
        &self,
        reference: &Reference,
        ctx: &mut EvaluationContext,
    ) -> Simplified {
        let unresolved = || Simplified::Node(Node::Reference(reference.clone()));

        let resolution = match resolve(ctx.data(), reference.path()) {
            Ok(resolution) => resolution,
            Err(err) => {
                log::trace!("{} left unresolved: {}", reference, err);
                return unresolved();
            }
        };

        if reference.is_ignored(&resolution.path) {
            log::trace!("{} is ignored as \"{}\"", reference, resolution.path);
            return unresolved();
        }
        if !resolution.found {
            return unresolved();
        }

        match self.coercer.cast(resolution.value, reference.data_type()) {
            Ok(value) => Simplified::Value(value),
            Err(err) => {
                log::trace!("{} left unresolved: {}", reference, err);
                unresolved()
            }
        }
    }

    pub(crate) fn eval_collection(
        &self,
        collection: &Collection,
        ctx: &mut EvaluationContext,
    ) -> EvalResult<Value> {
        collection
            .items()
            .iter()
            .map(|item| self.eval_node(item, ctx))
            .collect::<EvalResult<Vec<_>>>()
            .map(Value::List)
    }

    /// Resolves to a list only when every item resolves
    pub(crate) fn simplify_collection(
        &self,
        collection: &Collection,
        ctx: &mut EvaluationContext,
    ) -> Simplified {
        let mut values = Vec::with_capacity(collection.items().len());
        for item in collection.items() {
            match self.simplify_node(item, ctx) {
                Simplified::Value(value) => values.push(value),
                Simplified::Node(_) => return Simplified::Node(Node::Collection(collection.clone())),
            }
        }
        Simplified::Value(Value::List(values))
    }
}

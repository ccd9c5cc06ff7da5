//! Expression nodes
//!
//! A parsed expression is a tree of [`Node`]s. Nodes are immutable and
//! carry the [`Options`] they were parsed with, so serializing a tree
//! needs no outside state.

use crate::{ComparisonOp, Literal, LogicalOp, Operator, Options};
use illogical_diagnostics::{IL0002, IL0005, IL0006, IllogicalError, Result};
use illogical_types::DataType;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Expression tree node
#[derive(Debug, Clone)]
pub enum Node {
    /// Scalar literal
    Value(Literal),
    /// Context lookup
    Reference(Reference),
    /// Literal list of nodes
    Collection(Collection),
    /// Comparison expression
    Comparison(Comparison),
    /// Logical expression
    Logical(Logical),
}

impl Node {
    /// Get as literal if this is a value node
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Value(literal) => Some(literal),
            _ => None,
        }
    }

    /// Get the literal boolean if this is a boolean value node
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Value(Literal::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Options captured at parse time. Literals carry none.
    pub fn options(&self) -> Option<&Options> {
        match self {
            Self::Value(_) => None,
            Self::Reference(reference) => Some(reference.options()),
            Self::Collection(collection) => Some(collection.options()),
            Self::Comparison(comparison) => Some(comparison.options()),
            Self::Logical(logical) => Some(logical.options().as_ref()),
        }
    }

    /// Raw data form of this node
    pub fn serialize(&self) -> JsonValue {
        match self {
            Self::Value(literal) => literal.to_json(),
            Self::Reference(reference) => reference.serialize(),
            Self::Collection(collection) => collection.serialize(),
            Self::Comparison(comparison) => comparison.serialize(),
            Self::Logical(logical) => logical.serialize(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(literal) => write!(f, "{}", literal),
            Self::Reference(reference) => write!(f, "{}", reference),
            Self::Collection(collection) => write!(f, "{}", collection),
            Self::Comparison(comparison) => write!(f, "{}", comparison),
            Self::Logical(logical) => write!(f, "{}", logical),
        }
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Self::Value(literal)
    }
}

impl From<Reference> for Node {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl From<Collection> for Node {
    fn from(collection: Collection) -> Self {
        Self::Collection(collection)
    }
}

impl From<Comparison> for Node {
    fn from(comparison: Comparison) -> Self {
        Self::Comparison(comparison)
    }
}

impl From<Logical> for Node {
    fn from(logical: Logical) -> Self {
        Self::Logical(logical)
    }
}

/// Lookup of a flattened context path, e.g. `$user.roles[0].(String)`
#[derive(Debug, Clone)]
pub struct Reference {
    /// Address without prefix and suffix, type suffix included
    address: String,
    /// Lookup path, type suffix removed
    path: String,
    data_type: DataType,
    options: Arc<Options>,
}

impl Reference {
    /// Create a reference from an address (the raw string with the
    /// reference prefix and suffix already stripped).
    pub fn new(address: impl Into<String>, options: Arc<Options>) -> Result<Self> {
        let address = address.into();
        let (path, data_type) = split_type_suffix(&address)
            .map_err(|e| IllogicalError::parse(IL0006, e.to_string(), address.as_str()))?;
        Ok(Self {
            path: path.to_string(),
            data_type,
            address,
            options,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Check if simplify must leave this reference unresolved for a
    /// resolved path
    pub fn is_ignored(&self, resolved_path: &str) -> bool {
        self.options.reference.ignored.is_ignored(resolved_path)
    }

    pub fn serialize(&self) -> JsonValue {
        let address = match self.data_type {
            DataType::Undefined => self.path.clone(),
            data_type => format!("{}.({})", self.path, data_type),
        };
        JsonValue::String(self.options.reference.address.render(&address))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.address)
    }
}

/// Split a trailing `.(TypeName)` off an address.
///
/// `TypeName` is one uppercase letter followed by lowercase letters and
/// must follow a non-empty path. Anything else stays part of the path.
fn split_type_suffix(
    address: &str,
) -> std::result::Result<(&str, DataType), illogical_types::CoercionError> {
    let Some((path, name)) = address
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once(".("))
    else {
        return Ok((address, DataType::Undefined));
    };

    let mut chars = name.chars();
    let is_type_name = chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && name.len() > 1
        && chars.all(|c| c.is_ascii_lowercase());

    if path.is_empty() || !is_type_name {
        return Ok((address, DataType::Undefined));
    }
    Ok((path, name.parse()?))
}

/// Literal list of nodes
#[derive(Debug, Clone)]
pub struct Collection {
    items: Vec<Node>,
    options: Arc<Options>,
}

impl Collection {
    pub fn new(items: Vec<Node>, options: Arc<Options>) -> Result<Self> {
        if items.is_empty() {
            return Err(IllogicalError::parse(
                IL0002,
                "collection operand must have at least 1 item",
                "[]",
            ));
        }
        Ok(Self { items, options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// Serialized items. A head that would be read back as an operator
    /// token is escaped. Single items are never read as expressions and
    /// stay as they are.
    pub fn serialize(&self) -> JsonValue {
        let mut items: Vec<JsonValue> = self.items.iter().map(Node::serialize).collect();
        if items.len() < 2 {
            return JsonValue::Array(items);
        }
        if let Some(JsonValue::String(head)) = items.first_mut() {
            if self.options.operators.is_reserved(head) {
                *head = self.options.escape(head);
            }
        }
        JsonValue::Array(items)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_joined(f, &self.items, ", ")?;
        write!(f, "]")
    }
}

/// Comparison expression with one or two operands
#[derive(Debug, Clone)]
pub struct Comparison {
    op: ComparisonOp,
    operands: Vec<Node>,
    options: Arc<Options>,
}

impl Comparison {
    pub fn new(op: ComparisonOp, operands: Vec<Node>, options: Arc<Options>) -> Result<Self> {
        if operands.len() != op.arity() {
            let token = options.operators.token(op);
            let noun = if op.arity() == 1 { "operand" } else { "operands" };
            return Err(IllogicalError::parse(
                IL0005,
                format!(
                    "comparison {} expression must have exactly {} {}",
                    token,
                    op.arity(),
                    noun
                ),
                token,
            ));
        }
        Ok(Self {
            op,
            operands,
            options,
        })
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    pub fn serialize(&self) -> JsonValue {
        serialize_expression(self.options.operators.token(self.op), &self.operands)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands.as_slice() {
            [operand] => write!(f, "({} {})", operand, self.op.symbol()),
            [left, right] => write!(f, "({} {} {})", left, self.op.symbol(), right),
            _ => Err(fmt::Error),
        }
    }
}

/// Logical expression
#[derive(Debug, Clone)]
pub struct Logical {
    op: LogicalOp,
    operands: Vec<Node>,
    options: Arc<Options>,
}

impl Logical {
    pub fn new(op: LogicalOp, operands: Vec<Node>, options: Arc<Options>) -> Result<Self> {
        if !Operator::from(op).accepts(operands.len()) {
            let token = options.operators.token(op);
            let message = if op.is_unary() {
                format!("logical {} expression must have exactly 1 operand", token)
            } else {
                format!(
                    "logical {} expression must have at least {} operands",
                    token,
                    op.min_operands()
                )
            };
            return Err(IllogicalError::parse(IL0005, message, token));
        }
        Ok(Self {
            op,
            operands,
            options,
        })
    }

    /// Negation of a single node
    pub fn not(operand: Node, options: Arc<Options>) -> Self {
        Self {
            op: LogicalOp::Not,
            operands: vec![operand],
            options,
        }
    }

    pub fn op(&self) -> LogicalOp {
        self.op
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    pub fn options(&self) -> &Arc<Options> {
        &self.options
    }

    pub fn serialize(&self) -> JsonValue {
        serialize_expression(self.options.operators.token(self.op), &self.operands)
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_unary() {
            write!(f, "({} ", self.op.symbol())?;
            write_joined(f, &self.operands, " ")?;
            return write!(f, ")");
        }
        write!(f, "(")?;
        write_joined(f, &self.operands, &format!(" {} ", self.op.symbol()))?;
        write!(f, ")")
    }
}

fn serialize_expression(token: &str, operands: &[Node]) -> JsonValue {
    let mut items = Vec::with_capacity(operands.len() + 1);
    items.push(JsonValue::String(token.to_string()));
    items.extend(operands.iter().map(Node::serialize));
    JsonValue::Array(items)
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[Node], separator: &str) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl Operator {
    /// Build an expression node for this operator
    pub fn build(self, operands: Vec<Node>, options: Arc<Options>) -> Result<Node> {
        match self {
            Self::Comparison(op) => Comparison::new(op, operands, options).map(Node::from),
            Self::Logical(op) => Logical::new(op, operands, options).map(Node::from),
        }
    }
}
